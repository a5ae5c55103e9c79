/// The numeric abstraction shared by every primitive.
///
/// Declares the [`Scalar`](scalar::Scalar) trait and implements it for the
/// primitive integer and floating-point types. Integral and floating-point
/// implementations differ in how they treat overflow and division by zero.
pub mod scalar;
/// Elementary arithmetic: addition, subtraction, multiplication and division.
pub mod basic;
/// Integer powers computed by exponentiation by squaring.
pub mod power;
/// Square roots computed by Newton-Raphson iteration.
pub mod sqrt;
/// Iterative and compile-time factorials.
pub mod factorial;
/// Conversion between numeric values and their textual form.
pub mod convert;

pub use basic::{add, divide, multiply, subtract};
pub use convert::{format_number, parse_number};
pub use factorial::{const_factorial, factorial};
pub use power::power;
pub use scalar::Scalar;
pub use sqrt::sqrt;
