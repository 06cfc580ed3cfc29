pub mod fq;
pub use self::fq::*;

pub mod fr;
pub use self::fr::*;

pub mod fq3;
pub use self::fq3::*;

pub mod fq6;
pub use self::fq6::*;

#[cfg(test)]
mod tests;
