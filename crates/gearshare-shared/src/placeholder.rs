//! Stable placeholder image URLs.
//!
//! Tool photos render cream text on a royal background; avatars invert the
//! palette.  The scheme is shared by the fixtures and the mock backend's
//! image fallback so the same entity always gets the same URL.

const ROYAL: &str = "261FB3";
const CREAM: &str = "FBE4D6";

/// Placeholder URL for a tool photo (400x300, cream on royal).
pub fn tool_image(name: &str) -> String {
    placeholder_url(400, 300, name, ROYAL, CREAM)
}

/// Placeholder URL for a member avatar (100x100, royal on cream).
/// Uses the first character of the display name.
pub fn avatar_image(name: &str) -> String {
    let initial = name.chars().next().map(String::from).unwrap_or_default();
    placeholder_url(100, 100, &initial, CREAM, ROYAL)
}

fn placeholder_url(width: u32, height: u32, text: &str, bg: &str, fg: &str) -> String {
    let formatted: String = text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("+");
    format!("https://placehold.co/{width}x{height}/{bg}/{fg}?text={formatted}")
}
