//! Listing records and the numeric coercion applied to their fields.

use serde::Deserialize;
use serde_json::Value;

/// One listing from the source document.
///
/// Kept as a raw JSON value: the source is never schema-checked, and a
/// non-object element simply has no fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Record(Value);

impl Record {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Field lookup; `None` for missing fields and non-object records.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.as_object().and_then(|obj| obj.get(name))
    }

    pub fn price(&self) -> f64 {
        coerce_field(self.field("price"))
    }

    pub fn area(&self) -> f64 {
        coerce_field(self.field("area"))
    }

    pub fn furnishing_status(&self) -> Option<&Value> {
        self.field("furnishingstatus")
    }

    /// Case-insensitive match on `furnishingstatus`. Non-string statuses never match.
    pub fn is_furnished(&self) -> bool {
        matches!(self.furnishing_status(), Some(Value::String(s)) if s.to_lowercase() == "furnished")
    }

    /// Reduce to the three output fields.
    pub fn project(&self) -> ProjectedRecord {
        ProjectedRecord {
            price: self.price(),
            area: self.area(),
            furnishing_status: self.furnishing_status().cloned(),
        }
    }
}

/// Output shape of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedRecord {
    /// May be NaN when the source value is not numeric.
    pub price: f64,
    /// May be NaN when the source value is not numeric.
    pub area: f64,
    /// Source value with its original case.
    pub furnishing_status: Option<Value>,
}

fn coerce_field(value: Option<&Value>) -> f64 {
    value.map_or(f64::NAN, coerce_number)
}

/// Coerce a JSON value to a number.
///
/// Strings go through [`parse_number`]; `null` and `false` are `0`, `true` is
/// `1`; arrays coerce through their single element; objects are NaN.
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_number(s),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [item] => match item {
                Value::String(s) => parse_number(s),
                Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
                Value::Null => 0.0,
                Value::Array(_) => coerce_number(item),
                Value::Bool(_) | Value::Object(_) => f64::NAN,
            },
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

/// Parse numeric text. Blank text is `0`; anything unparseable is NaN.
///
/// Accepts decimal literals (optional sign, fraction, exponent), the
/// `Infinity` spellings, and unsigned `0x`/`0o`/`0b` integers.
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match text.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&text[2..], radix);
    }

    // Rust's float parser also accepts "inf" and "nan"; those are not numbers here.
    let well_formed = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        && text.chars().any(|c| c.is_ascii_digit());
    if !well_formed {
        return f64::NAN;
    }

    text.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

/// Render a number the way it appears in the feed: `NaN`, `Infinity`,
/// integers without a fraction, everything else in shortest form.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        exponent_form(n)
    } else {
        n.to_string()
    }
}

/// `1e+21`, `1.5e-7`: shortest mantissa, explicit exponent sign.
fn exponent_form(n: f64) -> String {
    let formatted = format!("{n:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("150"), 150.0);
        assert_eq!(parse_number("  12.5 "), 12.5);
        assert_eq!(parse_number("-3"), -3.0);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("   "), 0.0);
        assert_eq!(parse_number("0x1F"), 31.0);
        assert_eq!(parse_number("0b101"), 5.0);
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        for text in ["notanumber", "12abc", "inf", "nan", "NaN", "0x", "0xZZ", "-", "1,000", "--1"] {
            assert!(parse_number(text).is_nan(), "{text:?} should be NaN");
        }
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(42)), 42.0);
        assert_eq!(coerce_number(&json!("42")), 42.0);
        assert_eq!(coerce_number(&json!(null)), 0.0);
        assert_eq!(coerce_number(&json!(true)), 1.0);
        assert_eq!(coerce_number(&json!(false)), 0.0);
        assert_eq!(coerce_number(&json!([])), 0.0);
        assert_eq!(coerce_number(&json!(["7"])), 7.0);
        assert!(coerce_number(&json!([1, 2])).is_nan());
        assert!(coerce_number(&json!({"a": 1})).is_nan());
    }

    #[test]
    fn test_missing_fields_are_nan() {
        let record = Record::new(json!({"furnishingstatus": "furnished"}));
        assert!(record.price().is_nan());
        assert!(record.area().is_nan());

        let not_an_object = Record::new(json!(5));
        assert!(not_an_object.price().is_nan());
        assert!(not_an_object.furnishing_status().is_none());
    }

    #[test]
    fn test_is_furnished_ignores_case_and_non_strings() {
        assert!(Record::new(json!({"furnishingstatus": "Furnished"})).is_furnished());
        assert!(Record::new(json!({"furnishingstatus": "FURNISHED"})).is_furnished());
        assert!(!Record::new(json!({"furnishingstatus": "semi-furnished"})).is_furnished());
        assert!(!Record::new(json!({"furnishingstatus": true})).is_furnished());
        assert!(!Record::new(json!({})).is_furnished());
    }

    #[test]
    fn test_project_keeps_status_case() {
        let record = Record::new(json!({
            "price": "13300000",
            "area": 7420,
            "bedrooms": 4,
            "furnishingstatus": "Furnished"
        }));
        let projected = record.project();
        assert_eq!(projected.price, 13_300_000.0);
        assert_eq!(projected.area, 7420.0);
        assert_eq!(projected.furnishing_status, Some(json!("Furnished")));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_format_number_uses_exponent_at_the_extremes() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(123_456.0), "123456");
        assert_eq!(format_number(0.000001), "0.000001");
    }
}
