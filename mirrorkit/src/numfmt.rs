//! Number to text conversions.
//!
//! [`js_number_string`] renders an `f64` the way a browser's `Number#toString`
//! does. [`short_number_string`] then re-encodes that text into the shortest
//! plain or scientific form that still parses back to the same value, which is
//! what the SVG path minifier emits.

/// ECMAScript `Number.prototype.toString()` for radix 10.
pub fn js_number_string(n: f64) -> String {
    if n.is_nan() { return "NaN".to_string(); }
    if n.is_infinite() { return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string(); }
    if n == 0.0 { return "0".to_string(); }
    // `{:e}` yields the shortest round-trip digits, e.g. "1.6e-8", "6e3".
    let sci = format!("{:e}", n.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // position of the decimal point relative to the first digit
    let point = exp.parse::<i32>().unwrap_or(0) + 1;
    let mut out = String::with_capacity(digits.len() + 8);
    if n < 0.0 { out.push('-'); }
    if k <= point && point <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat('0').take((point - k) as usize));
    } else if 0 < point && point <= 21 {
        let (head, tail) = digits.split_at(point as usize);
        out.push_str(head);
        out.push('.');
        out.push_str(tail);
    } else if -6 < point && point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take((-point) as usize));
        out.push_str(&digits);
    } else {
        let e = point - 1;
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push('e');
        out.push(if e < 0 { '-' } else { '+' });
        out.push_str(&e.abs().to_string());
    }
    out
}

/// Splits default number text into `(sign, integer, fraction, exponent)`.
/// Leading zeros of the integer part are dropped.
fn decompose(s: &str) -> (&str, &str, &str, &str) {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", s),
    };
    let rest = rest.trim_start_matches('0');
    let int_len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let (integer, rest) = rest.split_at(int_len);
    let rest = rest.strip_prefix('.').unwrap_or(rest);
    let frac_len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let (fraction, rest) = rest.split_at(frac_len);
    let exponent = rest.strip_prefix('e').unwrap_or(rest);
    (sign, integer, fraction, exponent)
}

/// Shortest text that parses back to `n`.
///
/// The digits are normalized to an integer base with no leading or trailing
/// zeros times a power of ten, then:
/// * power 0..=2 appends zeros (`"60"` beats `"6e1"`),
/// * a small negative power inserts a decimal point (`".06"` beats `"6e-2"`),
/// * anything else is `base e power` (`"6e3"`, `"16e-9"`).
///
/// Non-finite values come back as their default text.
pub fn short_number_string(n: f64) -> String {
    let unchanged = js_number_string(n);
    let (sign, integer, fraction, exponent) = decompose(&unchanged);
    if !(exponent.is_empty() || exponent.ends_with(|c: char| c.is_ascii_digit())) {
        return unchanged;
    }
    let stated = if exponent.is_empty() { Ok(0) } else { exponent.parse::<i32>() };
    let Ok(stated) = stated else { return unchanged };
    let full = format!("{integer}{fraction}");
    let full_base = full.trim_start_matches('0');
    if full_base.is_empty() {
        return "0".to_string();
    }
    let short_base = full_base.trim_end_matches('0');
    let len = short_base.len() as i32;
    let power = stated - fraction.len() as i32 + (full_base.len() - short_base.len()) as i32;
    if (0..=2).contains(&power) {
        return format!("{sign}{short_base}{}", "0".repeat(power as usize));
    }
    if -len <= power && power <= -1 {
        let (head, tail) = short_base.split_at((len + power) as usize);
        return format!("{sign}{head}.{tail}");
    }
    if power == -len - 1 {
        return format!("{sign}.0{short_base}");
    }
    format!("{sign}{short_base}e{power}")
}

/// Comma separated shortest forms, as used in SVG path data.
pub fn number_csv(numbers: &[f64]) -> String {
    numbers.iter().map(|n| short_number_string(*n)).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_strings_match_browser_output() {
        assert_eq!(js_number_string(60.0), "60");
        assert_eq!(js_number_string(-0.0), "0");
        assert_eq!(js_number_string(0.06), "0.06");
        assert_eq!(js_number_string(1.5), "1.5");
        assert_eq!(js_number_string(123456.789), "123456.789");
        assert_eq!(js_number_string(1e21), "1e+21");
        assert_eq!(js_number_string(1e20), "100000000000000000000");
        assert_eq!(js_number_string(1.6e-8), "1.6e-8");
        assert_eq!(js_number_string(0.000001), "0.000001");
        assert_eq!(js_number_string(1e-7), "1e-7");
        assert_eq!(js_number_string(-2.5e30), "-2.5e+30");
        assert_eq!(js_number_string(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(js_number_string(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn documented_examples() {
        assert_eq!(short_number_string(60.0), "60");
        assert_eq!(short_number_string(0.06), ".06");
        assert_eq!(short_number_string(6000.0), "6e3");
        assert_eq!(short_number_string(1.6e-8), "16e-9");
        assert_eq!(short_number_string(0.0), "0");
    }

    #[test]
    fn boundaries_between_forms() {
        assert_eq!(short_number_string(600.0), "600");
        assert_eq!(short_number_string(-1.25), "-1.25");
        assert_eq!(short_number_string(0.5), ".5");
        assert_eq!(short_number_string(0.006), "6e-3");
        assert_eq!(short_number_string(0.012), ".012");
        assert_eq!(short_number_string(-0.06), "-.06");
        assert_eq!(short_number_string(1e21), "1e21");
        assert_eq!(short_number_string(1.5e-7), "15e-8");
        assert_eq!(short_number_string(-0.0), "0");
    }

    #[test]
    fn non_finite_passthrough() {
        assert_eq!(short_number_string(f64::NAN), "NaN");
        assert_eq!(short_number_string(f64::INFINITY), "Infinity");
        assert_eq!(short_number_string(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn csv() {
        assert_eq!(number_csv(&[1.0, -0.5, 3000.0]), "1,-.5,3e3");
        assert_eq!(number_csv(&[]), "");
    }
}
