//! Measurement Input
//!
//! Parse-or-default handling for measurements typed into a form. Partial
//! input is the normal case while someone is typing, so nothing here fails:
//! text without a numeric prefix reads as zero.

// ============================================================================
// Parsing
// ============================================================================

/// Parse the leading number out of `text`, or return 0.
///
/// Leading whitespace (U+FEFF included) is skipped and anything after the
/// longest numeric prefix is ignored, so `"12.5cm"` reads as `12.5`. A prefix
/// is an optional sign followed by either `Infinity` or a decimal literal
/// with an optional exponent. No prefix, NaN and negative zero all give `0.0`.
///
/// # Example
/// ```
/// use ghanfoot::units::parse_or_zero;
///
/// assert_eq!(parse_or_zero("  3.5 m"), 3.5);
/// assert_eq!(parse_or_zero("abc"), 0.0);
/// ```
pub fn parse_or_zero(text: &str) -> f64 {
    match numeric_prefix(text) {
        Some(value) if !value.is_nan() && value != 0.0 => value,
        _ => 0.0,
    }
}

fn numeric_prefix(text: &str) -> Option<f64> {
    // U+FEFF counts as leading whitespace for form input
    let s = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let value = f64::INFINITY;
        return Some(if bytes[0] == b'-' { -value } else { value });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // The exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

#[inline]
fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

// ============================================================================
// MeasureInput
// ============================================================================

/// A measurement as it reaches the calculator: raw form text or a number.
///
/// Both shapes are accepted anywhere a length or circumference is expected.
pub trait MeasureInput {
    /// True when the field has nothing to compute with: empty text, or a
    /// numeric zero or NaN.
    fn is_blank(&self) -> bool;

    /// Numeric value of the field, 0 when it cannot be read.
    fn parse_or_zero(&self) -> f64;
}

impl MeasureInput for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }

    fn parse_or_zero(&self) -> f64 {
        parse_or_zero(self)
    }
}

impl MeasureInput for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }

    fn parse_or_zero(&self) -> f64 {
        parse_or_zero(self)
    }
}

impl MeasureInput for f64 {
    fn is_blank(&self) -> bool {
        *self == 0.0 || self.is_nan()
    }

    fn parse_or_zero(&self) -> f64 {
        if self.is_blank() {
            0.0
        } else {
            *self
        }
    }
}

impl<T: MeasureInput + ?Sized> MeasureInput for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }

    fn parse_or_zero(&self) -> f64 {
        (**self).parse_or_zero()
    }
}

// ============================================================================
// Tests
// ============================================================================
