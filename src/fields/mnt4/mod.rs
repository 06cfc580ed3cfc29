pub mod fq;
pub use self::fq::*;

pub mod fr;
pub use self::fr::*;

pub mod fq2;
pub use self::fq2::*;

pub mod fq4;
pub use self::fq4::*;

#[cfg(test)]
mod tests;
