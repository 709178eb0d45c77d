// Display formatting for amounts shown across the marketplace
//
// These are the shared collaborators every view calls; rounding and grouping
// rules live here and nowhere else.

use crate::error::AmountError;

// Format a base-unit amount into a human readable unit amount
// "25000000000000" with 7 decimals gives "2500000", "12345678" gives "1.2345678"
pub fn format_token_amount(base_units: u64, decimals: u8) -> String {
    let scale = 10u64.pow(decimals as u32);
    let integer = base_units / scale;
    let fraction = base_units % scale;

    if fraction == 0 {
        return integer.to_string();
    }

    let fraction = format!("{:0width$}", fraction, width = decimals as usize);
    format!("{}.{}", integer, fraction.trim_end_matches('0'))
}

// Parse a human readable unit amount back into base units
// Inverse of format_token_amount; rejects malformed input and overflow
pub fn parse_token_amount(value: &str, decimals: u8) -> Result<u64, AmountError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AmountError::Invalid(value.to_string()));
    }

    let (integer, fraction) = match value.split_once('.') {
        Some((i, f)) => (i, f),
        None => (value, ""),
    };

    if fraction.len() > decimals as usize {
        return Err(AmountError::TooManyDecimals {
            got: fraction.len(),
            max: decimals as usize,
        });
    }

    let parse_digits = |s: &str| -> Result<u64, AmountError> {
        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(AmountError::Invalid(value.to_string()));
        }
        s.parse::<u64>()
            .map_err(|_| AmountError::Overflow)
    };

    let integer: u64 = if integer.is_empty() {
        0
    } else {
        parse_digits(integer)?
    };

    let fraction: u64 = if fraction.is_empty() {
        0
    } else {
        // right-pad to the full decimal width before scaling
        let padded = format!("{:0<width$}", fraction, width = decimals as usize);
        parse_digits(&padded)?
    };

    let scale = 10u64.pow(decimals as u32);
    integer
        .checked_mul(scale)
        .and_then(|units| units.checked_add(fraction))
        .ok_or(AmountError::Overflow)
}

// Group a number with thousands separators: 2500000 gives "2,500,000"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// Whole-dollar currency display: "$2,500,000"
pub fn format_currency(usd: u64) -> String {
    format!("${}", group_thousands(usd))
}

// Two-decimal currency display for derived unit prices: "$2.50"
pub fn format_currency_f64(usd: f64) -> String {
    let cents = (usd * 100.0).round() as u64;
    format!("${}.{:02}", group_thousands(cents / 100), cents % 100)
}

// Percentage display with one decimal: "8.5%"
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}
