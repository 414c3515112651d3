use std::fmt;

/// Bit size of a fixed-bytes, integer, or fixed-point number (M) type. Valid values: 0..=256.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeSize(u16);

impl Default for TypeSize {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for TypeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeSize({})", self.0)
    }
}

impl TypeSize {
    /// The value zero. Note that this is not a valid size for a fixed-bytes type.
    pub const ZERO: Self = Self(0);

    /// The maximum bit value of a `TypeSize`.
    pub const MAX: u16 = 256;

    /// Creates a new `TypeSize` from a `u16` number of **bits**.
    #[inline]
    const fn new(bits: u16) -> Option<Self> {
        if bits > Self::MAX { None } else { Some(Self(bits)) }
    }

    /// Creates a new `TypeSize` for an integer type from **bits**.
    ///
    /// Returns `None` if `bits` is not a multiple of 8 or greater than 256.
    #[inline]
    pub fn try_new_int_bits(bits: u16) -> Option<Self> {
        if bits % 8 == 0 { Self::new(bits) } else { None }
    }

    /// Creates a new `TypeSize` for a fixed-bytes type from **bytes**.
    ///
    /// Returns `None` if `bytes` is not in the range 1..=32.
    #[inline]
    pub fn try_new_fb_bytes(bytes: u8) -> Option<Self> {
        if bytes == 0 {
            return None;
        }
        Self::new(bytes as u16 * 8)
    }

    /// Returns the number of **bytes**, with `0` defaulting to 32.
    #[inline]
    pub const fn bytes(self) -> u8 {
        if self.0 == 0 { (Self::MAX / 8) as u8 } else { self.0.div_ceil(8) as u8 }
    }

    /// Returns the number of **bytes**, with no default applied.
    #[inline]
    pub const fn bytes_raw(self) -> u8 {
        self.0.div_ceil(8) as u8
    }

    /// Returns the number of **bits**, with `0` defaulting to `MAX`.
    #[inline]
    pub const fn bits(self) -> u16 {
        if self.0 == 0 { Self::MAX } else { self.0 }
    }

    /// Returns the number of **bits**, with no default applied.
    #[inline]
    pub const fn bits_raw(self) -> u16 {
        self.0
    }
}

/// Size of a fixed-point number (N, the fractional-bits part) type. Valid values: 0..=80.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeFixedSize(u8);

impl fmt::Debug for TypeFixedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeFixedSize({})", self.0)
    }
}

impl TypeFixedSize {
    /// The value zero.
    pub const ZERO: Self = Self(0);

    /// The maximum value of a `TypeFixedSize`.
    pub const MAX: u8 = 80;

    /// Creates a new `TypeFixedSize` from a `u8`.
    #[inline]
    pub const fn new(value: u8) -> Option<Self> {
        if value > Self::MAX { None } else { Some(Self(value)) }
    }

    /// Returns the value.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_bits_roundtrip() {
        assert_eq!(TypeSize::try_new_int_bits(8).unwrap().bits(), 8);
        assert_eq!(TypeSize::try_new_int_bits(256).unwrap().bits(), 256);
        assert_eq!(TypeSize::ZERO.bits(), 256);
        assert!(TypeSize::try_new_int_bits(9).is_none());
        assert!(TypeSize::try_new_int_bits(264).is_none());
    }

    #[test]
    fn fixed_bytes_roundtrip() {
        assert_eq!(TypeSize::try_new_fb_bytes(1).unwrap().bytes_raw(), 1);
        assert_eq!(TypeSize::try_new_fb_bytes(32).unwrap().bytes_raw(), 32);
        assert!(TypeSize::try_new_fb_bytes(0).is_none());
        assert!(TypeSize::try_new_fb_bytes(33).is_none());
    }

    #[test]
    fn fixed_point_fraction_bounds() {
        assert!(TypeFixedSize::new(0).is_some());
        assert!(TypeFixedSize::new(80).is_some());
        assert!(TypeFixedSize::new(81).is_none());
    }
}
