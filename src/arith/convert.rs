use crate::{arith::scalar::Scalar, error::ParseError};

/// Parses a decimal literal into the target numeric type.
///
/// Accepted text is an optional sign followed by digits with at most one
/// decimal point and at least one digit. Exponents, `inf`, `NaN`, whitespace
/// and anything else are rejected, as is text the target type cannot hold
/// (a fraction for an integer type, a negative value for an unsigned one).
///
/// # Errors
/// Returns [`ParseError::InvalidNumber`] for malformed text.
///
/// # Example
/// ```
/// use quickcalc::arith::parse_number;
///
/// assert_eq!(parse_number::<f64>("3.25").unwrap(), 3.25);
/// assert_eq!(parse_number::<i32>("-42").unwrap(), -42);
/// assert!(parse_number::<f64>("1.2.3").is_err());
/// assert!(parse_number::<f64>("").is_err());
/// assert!(parse_number::<i32>("1.5").is_err());
/// ```
pub fn parse_number<T: Scalar>(text: &str) -> Result<T, ParseError> {
    parse_number_at(text, 0)
}

/// Parses a decimal literal that starts at `position` in a larger source.
pub(crate) fn parse_number_at<T: Scalar>(text: &str, position: usize) -> Result<T, ParseError> {
    let invalid = || ParseError::InvalidNumber { literal: text.to_string(),
                                                 position };

    if !is_decimal_literal(text) {
        return Err(invalid());
    }
    text.parse().map_err(|_| invalid())
}

fn is_decimal_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);

    digits.chars().all(|c| c.is_ascii_digit() || c == '.')
    && digits.chars().filter(|&c| c == '.').count() <= 1
    && digits.chars().any(|c| c.is_ascii_digit())
}

/// Renders a value for display using the type's default textual form.
///
/// Floating-point values are printed in their shortest round-tripping form,
/// so integral floats carry no fractional part.
///
/// # Example
/// ```
/// use quickcalc::arith::format_number;
///
/// assert_eq!(format_number(31.4), "31.4");
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(-7_i64), "-7");
/// assert_eq!(format_number(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn format_number<T: Scalar>(value: T) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_leading_and_trailing_points() {
        assert_eq!(parse_number::<f64>(".5"), Ok(0.5));
        assert_eq!(parse_number::<f64>("5."), Ok(5.0));
        assert_eq!(parse_number::<f64>("+2"), Ok(2.0));
    }

    #[test]
    fn rejects_non_decimal_text() {
        for text in ["", ".", "-", "abc", "1e5", "inf", "NaN", " 1", "1 ", "--1", "0x10"] {
            assert!(parse_number::<f64>(text).is_err(), "{text:?} should not parse");
        }
    }

    #[test]
    fn reports_literal_and_position() {
        assert_eq!(parse_number_at::<f64>("1.2.3", 4),
                   Err(ParseError::InvalidNumber { literal:  "1.2.3".to_string(),
                                                   position: 4, }));
    }

    #[test]
    fn unsigned_rejects_negative() {
        assert!(parse_number::<u8>("-1").is_err());
        assert!(parse_number::<u8>("256").is_err());
        assert_eq!(parse_number::<u8>("255"), Ok(255));
    }
}
