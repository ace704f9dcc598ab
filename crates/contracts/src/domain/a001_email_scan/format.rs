//! Text of server-supplied JSON values as the popup displays them
//!
//! Numbers follow the browser's conventions: an integral float prints
//! without a fractional part and `-0` prints as `0`.

use serde_json::{Number, Value};

/// Fixed-point text with `digits` decimals, rounding like
/// `Number.prototype.toFixed`: exact ties go away from zero, `-0` has no sign.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return number_text_f64(value);
    }

    // 30 extra digits are exact enough: any f64 whose rounding digit matters
    // differs from a tie by far more than 1e-30.
    let exact = format!("{:.*}", digits + 30, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<char> = int_part
        .chars()
        .chain(frac_part.chars().take(digits))
        .collect();
    let round_up = frac_part.chars().nth(digits).is_some_and(|d| d >= '5');

    if round_up {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, '1');
                break;
            }
            i -= 1;
            if kept[i] == '9' {
                kept[i] = '0';
            } else {
                kept[i] = char::from(kept[i] as u8 + 1);
                break;
            }
        }
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(&kept[..split]);
    if digits > 0 {
        out.push('.');
        out.extend(&kept[split..]);
    }
    out
}

/// Number text: integers as-is, integral floats without `.0`
pub fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) => number_text_f64(f),
        None => n.to_string(),
    }
}

fn number_text_f64(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if f == 0.0 {
        "0".to_string()
    } else if f.fract() == 0.0 && f.abs() < 1e21 {
        format!("{:.0}", f)
    } else {
        f.to_string()
    }
}

/// Strings raw, numbers via [`number_text`], everything else as JSON text
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

/// Values the browser treats as falsy
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0 || f.is_nan()),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(0.1234, 4), "0.1234");
        assert_eq!(to_fixed(1.0, 4), "1.0000");
        assert_eq!(to_fixed(-0.5, 4), "-0.5000");
        assert_eq!(to_fixed(0.123456, 4), "0.1235");
        assert_eq!(to_fixed(0.99999, 4), "1.0000");
        assert_eq!(to_fixed(12.0, 0), "12");
    }

    #[test]
    fn test_to_fixed_ties_away_from_zero() {
        assert_eq!(to_fixed(0.15625, 4), "0.1563");
        assert_eq!(to_fixed(0.03125, 4), "0.0313");
        assert_eq!(to_fixed(-0.15625, 4), "-0.1563");
        assert_eq!(to_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_to_fixed_signs() {
        assert_eq!(to_fixed(-0.0, 4), "0.0000");
        assert_eq!(to_fixed(0.0, 4), "0.0000");
        assert_eq!(to_fixed(-0.00001, 4), "-0.0000");
    }

    #[test]
    fn test_number_text() {
        assert_eq!(value_text(&json!(1.0)), "1");
        assert_eq!(value_text(&json!(-3.0)), "-3");
        assert_eq!(value_text(&json!(-0.0)), "0");
        assert_eq!(value_text(&json!(0.92)), "0.92");
        assert_eq!(value_text(&json!(5)), "5");
        assert_eq!(value_text(&json!(-7)), "-7");
    }

    #[test]
    fn test_value_text_other_kinds() {
        assert_eq!(value_text(&json!("evil.com")), "evil.com");
        assert_eq!(value_text(&json!(true)), "true");
        assert_eq!(value_text(&Value::Null), "null");
        assert_eq!(value_text(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_is_falsy() {
        assert!(is_falsy(&Value::Null));
        assert!(is_falsy(&json!(false)));
        assert!(is_falsy(&json!(0)));
        assert!(is_falsy(&json!(0.0)));
        assert!(is_falsy(&json!("")));
        assert!(!is_falsy(&json!("0")));
        assert!(!is_falsy(&json!(true)));
        assert!(!is_falsy(&json!([])));
        assert!(!is_falsy(&json!({})));
    }
}
