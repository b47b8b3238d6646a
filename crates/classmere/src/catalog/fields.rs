//! Field extraction helpers shared by the record decoders.
//!
//! Two policies live here and must not be mixed up: optional strings decode
//! to `None` when absent or mistyped, while counters decode to `0`.

use serde_json::Value;

/// Reads `key` as a string, yielding `None` on absence or type mismatch.
pub(crate) fn opt_string(record: &Value, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Reads `key` as a strict integer. Only JSON numbers with no fractional
/// part qualify; strings and booleans do not.
pub(crate) fn strict_int(record: &Value, key: &str) -> Option<i64> {
    let Value::Number(number) = record.get(key)? else {
        return None;
    };
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Reads `key` as a counter, coercing anything unusable to zero.
///
/// Integral numbers are taken as-is, fractional numbers are truncated and
/// booleans count as 1/0. Strings contribute their leading decimal number,
/// so "42 seats" reads as 42.
pub(crate) fn int_or_zero(record: &Value, key: &str) -> i64 {
    match record.get(key) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().map(truncate))
            .unwrap_or(0),
        Some(Value::String(s)) => {
            let digits = numeric_prefix(s);
            digits
                .parse::<i64>()
                .ok()
                .or_else(|| digits.parse::<f64>().ok().map(truncate))
                .unwrap_or(0)
        }
        Some(Value::Bool(b)) => i64::from(*b),
        _ => 0,
    }
}

/// Reads `key` as a float, accepting JSON numbers and numeric strings.
pub(crate) fn opt_float(record: &Value, key: &str) -> Option<f64> {
    let value = match record.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    value.filter(|f| f.is_finite())
}

/// The leading `[+-]digits[.digits]` run of `s`, after leading whitespace.
/// Empty when `s` does not start with a number.
fn numeric_prefix(s: &str) -> &str {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        start
            + bytes[start..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count()
    };

    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(sign);
    let mut end = int_end;
    if bytes.get(int_end) == Some(&b'.') {
        let frac_end = digits_from(int_end + 1);
        if frac_end > int_end + 1 {
            end = frac_end;
        }
    }

    if end == int_end && int_end == sign {
        ""
    } else {
        &s[..end]
    }
}

fn truncate(f: f64) -> i64 {
    if f.is_finite() {
        // `as` saturates at the i64 bounds
        f.trunc() as i64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_opt_string_ignores_other_types() {
        let record = json!({ "title": "Intro", "credits": 4, "fees": null });
        assert_eq!(opt_string(&record, "title"), Some("Intro".to_string()));
        assert_eq!(opt_string(&record, "credits"), None);
        assert_eq!(opt_string(&record, "fees"), None);
        assert_eq!(opt_string(&record, "missing"), None);
    }

    #[test]
    fn test_strict_int() {
        let record = json!({ "a": 161, "b": "161", "c": 161.0, "d": 161.5, "e": true });
        assert_eq!(strict_int(&record, "a"), Some(161));
        assert_eq!(strict_int(&record, "b"), None);
        assert_eq!(strict_int(&record, "c"), Some(161));
        assert_eq!(strict_int(&record, "d"), None);
        assert_eq!(strict_int(&record, "e"), None);
        assert_eq!(strict_int(&record, "missing"), None);
    }

    #[test]
    fn test_int_or_zero_coercion() {
        let record = json!({
            "number": 30,
            "fraction": 29.9,
            "text": " 42 ",
            "garbage": "not-a-number",
            "yes": true,
            "no": false,
            "list": [1, 2],
            "nothing": null,
        });
        assert_eq!(int_or_zero(&record, "number"), 30);
        assert_eq!(int_or_zero(&record, "fraction"), 29);
        assert_eq!(int_or_zero(&record, "text"), 42);
        assert_eq!(int_or_zero(&record, "garbage"), 0);
        assert_eq!(int_or_zero(&record, "yes"), 1);
        assert_eq!(int_or_zero(&record, "no"), 0);
        assert_eq!(int_or_zero(&record, "list"), 0);
        assert_eq!(int_or_zero(&record, "nothing"), 0);
        assert_eq!(int_or_zero(&record, "missing"), 0);
    }

    #[test]
    fn test_int_or_zero_reads_leading_number() {
        let record = json!({
            "suffix": "42abc",
            "seats": "30 seats",
            "negative": "-3.7x",
            "fraction": ".5",
            "dot": "7.",
            "sign": "-",
            "prefixed": "abc42",
        });
        assert_eq!(int_or_zero(&record, "suffix"), 42);
        assert_eq!(int_or_zero(&record, "seats"), 30);
        assert_eq!(int_or_zero(&record, "negative"), -3);
        assert_eq!(int_or_zero(&record, "fraction"), 0);
        assert_eq!(int_or_zero(&record, "dot"), 7);
        assert_eq!(int_or_zero(&record, "sign"), 0);
        assert_eq!(int_or_zero(&record, "prefixed"), 0);
    }

    #[test]
    fn test_int_or_zero_rejects_non_finite_strings() {
        let record = json!({ "nan": "NaN", "inf": "inf" });
        assert_eq!(int_or_zero(&record, "nan"), 0);
        assert_eq!(int_or_zero(&record, "inf"), 0);
    }

    #[test]
    fn test_opt_float_accepts_strings() {
        let record = json!({ "lat": "44.5646", "lon": -123.2758, "bad": "north" });
        assert_eq!(opt_float(&record, "lat"), Some(44.5646));
        assert_eq!(opt_float(&record, "lon"), Some(-123.2758));
        assert_eq!(opt_float(&record, "bad"), None);
    }
}
