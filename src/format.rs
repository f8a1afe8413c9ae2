//! Display Formatting Helpers

/// `0x1234...abcd` style shortening for wallet addresses
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Confidence in 0..=1 as a rounded percentage
pub fn percent(ratio: f64) -> String {
    if !ratio.is_finite() {
        return "0%".to_string();
    }
    format!("{}%", (ratio * 100.0).round() as i64)
}
