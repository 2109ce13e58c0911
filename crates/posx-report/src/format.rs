//! Number formatting shared by the renderers.
//!
//! Matches the grouping rules of the original console report: comma
//! thousands separators, fixed decimals, sign kept on negative zero.

/// `value` with `decimals` fraction digits and comma-grouped integer part.
///
/// Non-finite values are printed as-is (`inf`, `NaN`) so a bad number is
/// visible instead of silently formatted.
pub fn grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let raw = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let digits = int_part.as_bytes();
    let mut out = String::with_capacity(raw.len() + digits.len() / 3 + 1);
    out.push_str(sign);
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*d as char);
    }
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Money: two decimals, grouped.
pub fn money(value: f64) -> String {
    grouped(value, 2)
}

/// Grouped with an explicit `+` on non-negative values.
pub fn signed(value: f64, decimals: usize) -> String {
    let s = grouped(value, decimals);
    if s.starts_with('-') {
        s
    } else {
        format!("+{s}")
    }
}

/// Fixed decimals, no grouping.
pub fn plain(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Fixed decimals, no grouping, explicit `+` on non-negative values.
pub fn signed_plain(value: f64, decimals: usize) -> String {
    let s = plain(value, decimals);
    if s.starts_with('-') {
        s
    } else {
        format!("+{s}")
    }
}

/// Fraction as a percentage with two decimals (`0.1` -> `10.00%`).
pub fn percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// `$`-prefixed money, markdown style.
pub fn currency(value: f64) -> String {
    format!("${}", money(value))
}
