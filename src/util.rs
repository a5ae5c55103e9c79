/// Numeric conversion helpers.
///
/// This module provides conversions between the scalar types used by the
/// arithmetic layer and the machine integers required by exponentiation,
/// saturating instead of failing when a value does not fit.
pub mod num;
