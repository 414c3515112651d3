/// A malformed request to one of [`TypeInterner`](super::TypeInterner)'s factory methods.
///
/// Every factory either succeeds outright or fails with one of these; there is no partial
/// success, and the interner never logs or aborts on a bad request (a violated internal
/// invariant, such as calling `withLocation` on something that was never checked to be a
/// reference type, is a different matter and panics instead).
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvalidTypeRequest {
    #[error("\"{0}\" is not a known elementary type name")]
    UnknownElementaryType(String),
    #[error("{0} is not a valid integer width (must be a multiple of 8 in 8..=256)")]
    BadIntegerWidth(u16),
    #[error("{0} is not a valid fixed-bytes length (must be in 1..=32)")]
    BadFixedBytesLength(u8),
    #[error(
        "{int_bits}x{frac_bits} is not a valid fixed-point shape \
         (bits must sum to a multiple of 8 in 8..=256, fractional bits in 0..=80)"
    )]
    BadFixedPointShape { int_bits: u16, frac_bits: u8 },
    #[error("{0} cannot be used as a mapping key (reference or dynamic types are not comparable)")]
    BadMappingKey(&'static str),
    #[error("\"{0}\" is not a recognized data-location suffix")]
    InvalidLocationSuffix(String),
}
