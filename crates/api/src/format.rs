//! Display helpers shared by front ends.

use alloy_primitives::U256;

/// Shorten an address to `0x1234...7890`. Empty input renders as `N/A`;
/// input too short to shorten is returned unchanged.
pub fn format_vault_address(address: &str) -> String {
    if address.is_empty() {
        return "N/A".to_string();
    }
    if address.len() < 10 || !address.is_ascii() {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

pub fn verification_status_text(is_verified: bool) -> &'static str {
    if is_verified {
        "Verified"
    } else {
        "Not Verified"
    }
}

/// Render a base-unit amount with `decimals` fraction digits, trimming
/// trailing zeros.
pub fn format_token_amount(amount: U256, decimals: u8) -> String {
    let digits = amount.to_string();
    let decimals = usize::from(decimals);
    if decimals == 0 {
        return digits;
    }

    let padded = format!("{:0>width$}", digits, width = decimals + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - decimals);
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{}.{}", int_part, frac_part)
    }
}

/// Parse a decimal amount such as `1.5` into base units.
pub fn parse_token_amount(input: &str, decimals: u8) -> Option<U256> {
    let (int_part, frac_part) = input.trim().split_once('.').unwrap_or((input.trim(), ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if frac_part.len() > usize::from(decimals)
        || !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let digits = format!(
        "{}{:0<width$}",
        int_part,
        frac_part,
        width = usize::from(decimals)
    );
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Some(U256::ZERO);
    }
    U256::from_str_radix(digits, 10).ok()
}
