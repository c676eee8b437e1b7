//! Conversion of environment strings into field values

use crate::error::ConversionError;
use crate::field::FieldKind;

/// A field type that can be populated from an environment string.
///
/// Implemented for `bool`, the primitive integer types up to 64 bits,
/// `f32`, `f64` and `String`. Used by code generated by
/// `#[derive(Populate)]`.
pub trait EnvValue: Sized {
    /// Conversion family of this type.
    const KIND: FieldKind;

    /// Convert a raw environment value.
    fn parse_env(raw: &str) -> Result<Self, ConversionError>;
}

/// Parse a boolean literal.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and `0`, `f`, `F`,
/// `FALSE`, `false`, `False`.
pub fn parse_bool(raw: &str) -> Result<bool, ConversionError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ConversionError::Syntax),
    }
}

/// Parse a base-10 unsigned integer into the 64-bit range.
///
/// Only ASCII digits are accepted: no sign, whitespace or separators.
pub fn parse_unsigned(raw: &str) -> Result<u64, ConversionError> {
    if !is_digits(raw) {
        return Err(ConversionError::Syntax);
    }
    raw.parse::<u64>().map_err(|_| ConversionError::Range)
}

/// Parse a base-10 signed integer into the 64-bit range.
///
/// An optional leading `+` or `-` is accepted.
pub fn parse_signed(raw: &str) -> Result<i64, ConversionError> {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if !is_digits(digits) {
        return Err(ConversionError::Syntax);
    }
    raw.parse::<i64>().map_err(|_| ConversionError::Range)
}

/// Parse a decimal or scientific float rounded to 32-bit precision.
pub fn parse_float32(raw: &str) -> Result<f32, ConversionError> {
    let value = raw.parse::<f32>().map_err(|_| ConversionError::Syntax)?;
    check_finite(raw, value.is_infinite())?;
    Ok(value)
}

/// Parse a decimal or scientific float at full precision.
pub fn parse_float64(raw: &str) -> Result<f64, ConversionError> {
    let value = raw.parse::<f64>().map_err(|_| ConversionError::Syntax)?;
    check_finite(raw, value.is_infinite())?;
    Ok(value)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// A finite literal that rounded to infinity did not fit the target type.
fn check_finite(raw: &str, is_infinite: bool) -> Result<(), ConversionError> {
    if is_infinite && !is_infinity_literal(raw) {
        return Err(ConversionError::Range);
    }
    Ok(())
}

fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

impl EnvValue for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn parse_env(raw: &str) -> Result<Self, ConversionError> {
        parse_bool(raw)
    }
}

impl EnvValue for String {
    const KIND: FieldKind = FieldKind::String;

    fn parse_env(raw: &str) -> Result<Self, ConversionError> {
        Ok(raw.to_string())
    }
}

impl EnvValue for f32 {
    const KIND: FieldKind = FieldKind::Float32;

    fn parse_env(raw: &str) -> Result<Self, ConversionError> {
        parse_float32(raw)
    }
}

impl EnvValue for f64 {
    const KIND: FieldKind = FieldKind::Float64;

    fn parse_env(raw: &str) -> Result<Self, ConversionError> {
        parse_float64(raw)
    }
}

macro_rules! impl_integer {
    ($kind:ident, $parse:ident, $($ty:ty),+) => {
        $(
            impl EnvValue for $ty {
                const KIND: FieldKind = FieldKind::$kind;

                fn parse_env(raw: &str) -> Result<Self, ConversionError> {
                    $parse(raw).and_then(|value| {
                        <$ty>::try_from(value).map_err(|_| ConversionError::Range)
                    })
                }
            }
        )+
    };
}

impl_integer!(Unsigned, parse_unsigned, u8, u16, u32, u64, usize);
impl_integer!(Signed, parse_signed, i8, i16, i32, i64, isize);
