//! Rupee amounts with Indian digit grouping

/// Indian rupee sign
pub const RUPEE_SIGN: char = '\u{20B9}';

/// Render a user-typed amount as whole rupees, e.g. "100000" -> "₹1,00,000"
///
/// An empty or blank amount renders as an empty string. Commas are ignored,
/// so already-grouped input is accepted. Input that does not start with a
/// number renders as "₹NaN" instead of failing.
pub fn format_currency(amount: &str) -> String {
    if amount.trim().is_empty() {
        return String::new();
    }

    let n = parse_js_float(&amount.replace(',', ""));
    if n.is_nan() {
        log::warn!("loan amount {amount:?} is not a number");
    }

    format_inr(n)
}

/// Format a number as rupees with no fraction digits
///
/// Rounds half away from zero. NaN renders as "₹NaN" and infinities as "₹∞".
/// Negative values keep their sign even when they round to zero. Digits beyond
/// the 17 significant ones an `f64` holds are printed as zeros.
///
/// # Examples
/// ```
/// use en_in_text::format_inr;
/// assert_eq!(format_inr(1234567.0), "₹12,34,567");
/// assert_eq!(format_inr(-2500.5), "-₹2,501");
/// ```
pub fn format_inr(n: f64) -> String {
    if n.is_nan() {
        return format!("{RUPEE_SIGN}NaN");
    }

    let sign = if n.is_sign_negative() { "-" } else { "" };

    if n.is_infinite() {
        return format!("{sign}{RUPEE_SIGN}\u{221E}");
    }

    let rounded = n.abs().round();
    format!("{sign}{RUPEE_SIGN}{}", group_indian(&integer_digits(rounded)))
}

/// Decimal digits of a non-negative whole number, from its shortest
/// round-trip representation padded with zeros
fn integer_digits(n: f64) -> String {
    let scientific = format!("{n:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: usize = exponent.parse().unwrap_or(0);
    let zeros = (exponent + 1).saturating_sub(digits.len());

    format!("{digits}{}", "0".repeat(zeros))
}

/// Insert Indian grouping separators into a string of digits
///
/// The last three digits form one group and the rest are grouped in pairs.
///
/// # Examples
/// ```
/// use en_in_text::group_indian;
/// assert_eq!(group_indian("100000"), "1,00,000");
/// assert_eq!(group_indian("123456789"), "12,34,56,789");
/// ```
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Parse the longest numeric prefix of `input`, the way browsers read form numbers
///
/// Leading whitespace is skipped, a sign, digits, one decimal point and an
/// exponent are accepted, and anything after the prefix is ignored.
/// "Infinity" is recognised. Returns NaN when no digits are found.
pub fn parse_js_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    let negative = matches!(bytes.first(), Some(b'-'));
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    if s[i..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_digits(&bytes[i + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j.min(bytes.len())..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    s[..i].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
