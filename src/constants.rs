/// One limb of a magnitude, always in `[0, BASE)`.
///
/// Stored as `u64` so that a limb product plus the running column sum of a
/// schoolbook multiplication still fits.
pub type Limb = u64;

/// Limb radix.
pub const BASE: Limb = 10_000_000;

/// Decimal digits per limb, `BASE == 10^BASE_DIGITS`.
pub const BASE_DIGITS: usize = 7;

/// Largest absolute value served from the small-integer cache.
pub const MAX_CONSTANT: usize = 16;

/// Digits after the decimal point used when converting a rational to `f64`.
pub const DEFAULT_PRECISION: usize = 20;
