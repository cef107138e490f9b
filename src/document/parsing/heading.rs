//! Heading style detection

/// Detect heading level from a style name or id ("Heading 2", "Heading2",
/// "heading 1"). Unnumbered heading styles default to level 1.
pub fn heading_level(style: &str) -> Option<u8> {
    if !(style.starts_with("Heading") || style.starts_with("heading")) {
        return None;
    }

    let level = style
        .chars()
        .last()
        .and_then(|c| c.to_digit(10))
        .map(|level| level.clamp(1, 9) as u8)
        .unwrap_or(1);
    Some(level)
}

pub fn is_heading_style(style: &str) -> bool {
    heading_level(style).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        assert_eq!(heading_level("Heading 1"), Some(1));
        assert_eq!(heading_level("Heading2"), Some(2));
        assert_eq!(heading_level("heading 3"), Some(3));
        assert_eq!(heading_level("Heading"), Some(1));
    }

    #[test]
    fn test_non_heading_styles() {
        assert_eq!(heading_level("Normal"), None);
        assert_eq!(heading_level("Title"), None);
        assert!(!is_heading_style("List Paragraph"));
        assert!(is_heading_style("Heading 4"));
    }
}
