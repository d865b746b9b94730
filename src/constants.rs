/// Share of the input amount that remains after the 0.3% protocol fee.
pub const DEFAULT_FEE_MULTIPLIER: f64 = 0.997;
