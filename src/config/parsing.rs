use ratatui::style::Color;

/// What: Strip trailing inline comments from a configuration value.
///
/// Inputs:
/// - `s`: Raw value text after the `=` separator.
///
/// Output:
/// - The value with any trailing `// ...` or `# ...` comment removed, trimmed.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let mut t = s.trim();
    if let Some(i) = t.find("//") {
        t = &t[..i];
    }
    if let Some(i) = t.find('#') {
        t = &t[..i];
    }
    t.trim()
}

/// What: Parse a color literal from configuration text into a [`Color`].
///
/// Inputs:
/// - `s`: Color specification string potentially containing inline comments.
///
/// Output:
/// - `Some(Color)` for recognized hex or decimal triplet formats; `None` otherwise.
///
/// Details:
/// - Strips trailing comments beginning with `//` or secondary `#` markers.
/// - Accepts `#RRGGBB` hex and `R,G,B` decimal triplets (0-255 per channel).
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    // Trim and strip inline comments. Preserve a leading '#' for hex values
    // by searching for '#' only after the first char.
    let mut t = s.trim();
    if let Some(i) = t.find("//") {
        t = &t[..i];
    }
    if let Some(i_rel) = if let Some(stripped) = t.strip_prefix('#') {
        stripped.find('#').map(|j| j + 1)
    } else {
        t.find('#')
    } {
        t = &t[..i_rel];
    }
    t = t.trim();
    if t.is_empty() {
        return None;
    }

    if let Some(hex) = t.strip_prefix('#') {
        if hex.len() == 6
            && let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            )
        {
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let parts: Vec<&str> = t.split(',').map(str::trim).collect();
    if parts.len() == 3
        && let (Ok(r), Ok(g), Ok(b)) = (
            parts[0].parse::<u8>(),
            parts[1].parse::<u8>(),
            parts[2].parse::<u8>(),
        )
    {
        return Some(Color::Rgb(r, g, b));
    }
    None
}
