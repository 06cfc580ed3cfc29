/// Flags to be encoded into the high bits of the last serialized byte.
/// The default flags (empty) should not change the binary representation.
pub trait Flags: Default + Clone + Copy + Sized {
    /// The number of bits required to encode `Self`.
    const BIT_SIZE: usize;

    /// Returns a bitmask with `Self` encoded in the most significant bits
    /// of a byte.
    fn u8_bitmask(&self) -> u8;

    /// Tries to read `Self` from the most significant bits of `value`.
    /// Returns `None` if the encoding is invalid.
    fn from_u8(value: u8) -> Option<Self>;

    /// Like `from_u8`, additionally clearing the flag bits from `value`.
    fn from_u8_remove_flags(value: &mut u8) -> Option<Self>;
}

/// Flags that are always empty.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyFlags;

impl Flags for EmptyFlags {
    const BIT_SIZE: usize = 0;

    #[inline]
    fn u8_bitmask(&self) -> u8 {
        0
    }

    #[inline]
    fn from_u8(_value: u8) -> Option<Self> {
        Some(EmptyFlags)
    }

    #[inline]
    fn from_u8_remove_flags(_value: &mut u8) -> Option<Self> {
        Some(EmptyFlags)
    }
}

/// Flags for short Weierstrass curve points: the parity of the y coordinate
/// and whether the point is at infinity, stored in the two most significant
/// bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SWFlags {
    Infinity,
    OddY,
    EvenY,
}

impl SWFlags {
    #[inline]
    pub fn infinity() -> Self {
        SWFlags::Infinity
    }

    #[inline]
    pub fn from_y_parity(is_odd: bool) -> Self {
        if is_odd {
            SWFlags::OddY
        } else {
            SWFlags::EvenY
        }
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        matches!(self, SWFlags::Infinity)
    }

    #[inline]
    pub fn is_odd(&self) -> Option<bool> {
        match self {
            SWFlags::Infinity => None,
            SWFlags::OddY => Some(true),
            SWFlags::EvenY => Some(false),
        }
    }
}

impl Default for SWFlags {
    #[inline]
    fn default() -> Self {
        // no infinity, even y
        SWFlags::EvenY
    }
}

impl Flags for SWFlags {
    const BIT_SIZE: usize = 2;

    #[inline]
    fn u8_bitmask(&self) -> u8 {
        let mut mask = 0;
        match self {
            SWFlags::Infinity => mask |= 1 << 6,
            SWFlags::OddY => mask |= 1 << 7,
            SWFlags::EvenY => (),
        }
        mask
    }

    #[inline]
    fn from_u8(value: u8) -> Option<Self> {
        let is_odd = (value >> 7) & 1 == 1;
        let is_infinity = (value >> 6) & 1 == 1;
        match (is_odd, is_infinity) {
            // an "odd" point at infinity is an invalid encoding
            (true, true) => None,
            (false, true) => Some(SWFlags::Infinity),
            (true, false) => Some(SWFlags::OddY),
            (false, false) => Some(SWFlags::EvenY),
        }
    }

    #[inline]
    fn from_u8_remove_flags(value: &mut u8) -> Option<Self> {
        let flags = Self::from_u8(*value);
        if flags.is_some() {
            *value &= 0x3F;
        }
        flags
    }
}
