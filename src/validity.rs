/// Defines semantic validity for any type, e.g. a field element must be
/// strictly smaller than the modulus, a curve point must lie on the curve
/// and in the prime order subgroup, and so on.
pub trait SemanticallyValid {
    fn is_valid(&self) -> bool;
}

impl<T: SemanticallyValid> SemanticallyValid for Vec<T> {
    fn is_valid(&self) -> bool {
        self.iter().all(|item| item.is_valid())
    }
}
