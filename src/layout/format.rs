//! Compact SI-prefix number formatting for axis tick labels.
//!
//! Output follows the common SI `s` convention: the value is rounded to `precision`
//! significant digits and scaled by the nearest power-of-1000 prefix, so
//! `0.001` is `1m`, `870` at one digit is `900`, `1500` is `2k`.

const PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Minus sign used for negative values (U+2212).
const MINUS: &str = "\u{2212}";

/// Format `value` with `precision` significant digits and an SI prefix.
pub fn format_si(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            "Infinity".to_string()
        } else {
            format!("{MINUS}Infinity")
        };
    }

    let p = precision.clamp(1, 21);
    let magnitude = value.abs();
    let (digits, exponent) = exponential_parts(magnitude, p);
    let prefix_exponent = exponent.div_euclid(3).clamp(-8, 8) * 3;
    let i = exponent - prefix_exponent + 1;
    let n = digits.len() as i32;

    let body = if i == n {
        digits
    } else if i > n {
        format!("{digits}{}", "0".repeat((i - n) as usize))
    } else if i > 0 {
        let (int, frac) = digits.split_at(i as usize);
        format!("{int}.{frac}")
    } else {
        // Below the smallest prefix: spell out leading zeros.
        let rest = (p as i32 + i - 1).max(0) as usize;
        let (tail, _) = if rest == 0 {
            shortest_parts(magnitude)
        } else {
            exponential_parts(magnitude, rest)
        };
        format!("0.{}{tail}", "0".repeat((-i) as usize))
    };

    let negative = value < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { MINUS } else { "" };
    let prefix = PREFIXES[(8 + prefix_exponent / 3) as usize];
    format!("{sign}{body}{prefix}")
}

/// Significant digits (no decimal point) and decimal exponent of `x`
/// rounded to `p` significant digits. Exact ties round away from zero.
fn exponential_parts(x: f64, p: usize) -> (String, i32) {
    let formatted = format!("{:.*e}", p - 1, x);
    let (digits, exponent) = split_exponential(&formatted);

    // `{:e}` rounds exact ties to even; bump them up instead.
    let (short_digits, short_exp) = shortest_parts(x);
    if short_digits.len() == p + 1
        && short_digits.ends_with('5')
        && is_exact_decimal(&short_digits, short_exp)
    {
        return round_half_up(&short_digits[..p], short_exp);
    }
    (digits, exponent)
}

/// Shortest round-trip digits of `x`.
fn shortest_parts(x: f64) -> (String, i32) {
    split_exponential(&format!("{:e}", x))
}

fn split_exponential(s: &str) -> (String, i32) {
    let (mantissa, exponent) = s.split_once('e').unwrap_or((s, "0"));
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    (digits, exponent.parse().unwrap_or(0))
}

/// Increment a digit string by one unit in its last place.
fn round_half_up(digits: &str, exponent: i32) -> (String, i32) {
    let mut bytes: Vec<u8> = digits.bytes().collect();
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return (String::from_utf8_lossy(&bytes).into_owned(), exponent);
        }
    }
    // Carried out of the leading digit: 9.5 → 1e1.
    bytes.insert(0, b'1');
    bytes.pop();
    (String::from_utf8_lossy(&bytes).into_owned(), exponent + 1)
}

/// Whether the decimal `d.ddd × 10^exponent` is exactly representable as
/// an f64, which is when a shortest-digit tie is a real tie.
fn is_exact_decimal(digits: &str, exponent: i32) -> bool {
    let Ok(mantissa) = digits.parse::<u128>() else {
        return false;
    };
    let scale = exponent - (digits.len() as i32 - 1);
    if scale >= 0 {
        let mut value = mantissa;
        for _ in 0..scale {
            value = match value.checked_mul(5) {
                Some(v) => v,
                None => return false,
            };
        }
        value < (1u128 << 53)
    } else {
        let mut divisor: u128 = 1;
        for _ in 0..(-scale) {
            divisor *= 5;
            if divisor > mantissa {
                return false;
            }
        }
        mantissa % divisor == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_si_plain() {
        assert_eq!(format_si(1.0, 1), "1");
        assert_eq!(format_si(10.0, 1), "10");
        assert_eq!(format_si(100.0, 1), "100");
        assert_eq!(format_si(0.0, 1), "0");
    }

    #[test]
    fn test_format_si_prefixes() {
        assert_eq!(format_si(1000.0, 1), "1k");
        assert_eq!(format_si(0.001, 1), "1m");
        assert_eq!(format_si(0.01, 1), "10m");
        assert_eq!(format_si(0.5, 1), "500m");
        assert_eq!(format_si(2e6, 1), "2M");
        assert_eq!(format_si(1e-6, 1), "1µ");
    }

    #[test]
    fn test_format_si_rounds_to_precision() {
        assert_eq!(format_si(870.0, 1), "900");
        assert_eq!(format_si(0.007, 1), "7m");
        assert_eq!(format_si(1234.0, 2), "1.2k");
        assert_eq!(format_si(0.15, 1), "100m");
    }

    #[test]
    fn test_format_si_ties_round_up() {
        assert_eq!(format_si(2.5, 1), "3");
        assert_eq!(format_si(0.25, 1), "300m");
        assert_eq!(format_si(9.5, 1), "10");
        assert_eq!(format_si(1500.0, 1), "2k");
    }

    #[test]
    fn test_format_si_negative_and_special() {
        assert_eq!(format_si(-2000.0, 1), "\u{2212}2k");
        assert_eq!(format_si(f64::NAN, 1), "NaN");
        assert_eq!(format_si(f64::INFINITY, 1), "Infinity");
    }

    #[test]
    fn test_is_exact_decimal() {
        assert!(is_exact_decimal("25", -1));
        assert!(is_exact_decimal("25", 0));
        assert!(!is_exact_decimal("15", -1));
    }
}
