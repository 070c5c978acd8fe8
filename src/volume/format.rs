//! Fixed-decimal text for volumes.

/// Enough fractional digits to print any finite f64 exactly.
const EXACT_DIGITS: usize = 1074;

/// Format `value` with exactly `digits` decimal places.
///
/// Rounds the exact binary value, with exact ties going away from zero
/// (`0.125` becomes `"0.13"`). Negative zero prints without a sign. NaN and
/// infinities print as `"NaN"`, `"Infinity"` and `"-Infinity"`.
///
/// # Example
/// ```
/// use ghanfoot::volume::to_fixed;
///
/// assert_eq!(to_fixed(0.0625, 4), "0.0625");
/// assert_eq!(to_fixed(2.2071875, 2), "2.21");
/// ```
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let negative = value < 0.0;
    let abs = value.abs();

    // std rounds ties to even; only exact ties need adjusting
    let text = match exact_tie_truncation(abs, digits) {
        Some(truncated) => increment_last_digit(&truncated),
        None => format!("{:.*}", digits, abs),
    };

    if negative {
        format!("-{text}")
    } else {
        text
    }
}

/// When `abs` sits exactly halfway between two `digits`-place values, return
/// the lower of the two as text.
fn exact_tie_truncation(abs: f64, digits: usize) -> Option<String> {
    let exact = format!("{:.*}", EXACT_DIGITS, abs);
    let (int_part, frac) = exact.split_once('.')?;
    let tail = frac.get(digits..)?;

    if !tail.starts_with('5') || !tail[1..].bytes().all(|b| b == b'0') {
        return None;
    }

    Some(if digits == 0 {
        int_part.to_string()
    } else {
        format!("{}.{}", int_part, &frac[..digits])
    })
}

fn increment_last_digit(text: &str) -> String {
    let mut bytes = text.as_bytes().to_vec();
    let mut carry = true;

    for byte in bytes.iter_mut().rev() {
        if *byte == b'.' {
            continue;
        }
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            carry = false;
            break;
        }
    }

    let mut out = String::with_capacity(bytes.len() + 1);
    if carry {
        out.push('1');
    }
    // Only ASCII digits and '.' are ever present
    out.extend(bytes.into_iter().map(char::from));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_rounding() {
        assert_eq!(to_fixed(0.0625, 4), "0.0625");
        assert_eq!(to_fixed(0.0, 2), "0.00");
        assert_eq!(to_fixed(1.0, 4), "1.0000");
        assert_eq!(to_fixed(2.2071875, 2), "2.21");
        assert_eq!(to_fixed(1.004, 2), "1.00");
    }

    #[test]
    fn test_exact_ties_round_away_from_zero() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(9.995, 2), "9.99"); // 9.995 is stored below the tie
        assert_eq!(to_fixed(99.5, 0), "100");
    }

    #[test]
    fn test_inexact_halves_follow_binary_value() {
        // 1.005 is stored as 1.00499999...
        assert_eq!(to_fixed(1.005, 2), "1.00");
    }

    #[test]
    fn test_sign_handling() {
        assert_eq!(to_fixed(-0.0, 2), "0.00");
        assert_eq!(to_fixed(-1.5, 2), "-1.50");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(to_fixed(f64::INFINITY, 4), "Infinity");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 4), "-Infinity");
    }

    #[test]
    fn test_increment_carries() {
        assert_eq!(increment_last_digit("9.99"), "10.00");
        assert_eq!(increment_last_digit("0.12"), "0.13");
        assert_eq!(increment_last_digit("9"), "10");
    }
}
