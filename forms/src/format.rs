//! Input formatting helpers.

/// Reformat a phone input's value as the user types.
///
/// Keeps digits only and groups them 3-3-4 (`024-123-4567`), truncating
/// past ten digits. Mirrors the live formatting applied to `tel` inputs.
#[must_use]
pub fn format_phone_input(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        0..=3 => digits.into_iter().collect(),
        4..=6 => {
            let (area, rest) = digits.split_at(3);
            format!(
                "{}-{}",
                area.iter().collect::<String>(),
                rest.iter().collect::<String>()
            )
        }
        _ => {
            let area: String = digits[..3].iter().collect();
            let prefix: String = digits[3..6].iter().collect();
            let line: String = digits[6..digits.len().min(10)].iter().collect();
            format!("{area}-{prefix}-{line}")
        }
    }
}
