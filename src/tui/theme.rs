//! Colour palette, keyed by semantic role or raw colour name.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};

static PALETTE: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    let fg = |color: Color| Style::default().fg(color);

    HashMap::from([
        // Semantic roles
        ("work", fg(Color::Green)),
        ("break", fg(Color::Cyan)),
        ("warning", fg(Color::Yellow)),
        ("urgent", fg(Color::Red)),
        ("header", fg(Color::Magenta)),
        ("info", fg(Color::Blue)),
        ("normal", fg(Color::White).add_modifier(Modifier::BOLD)),
        ("inverse", fg(Color::Indexed(232)).bg(Color::White)),
        ("bold", fg(Color::Green).add_modifier(Modifier::BOLD)),
        ("title", fg(Color::Magenta).add_modifier(Modifier::BOLD)),
        // Raw colour names used by art overlays
        ("blue", fg(Color::Blue)),
        ("green", fg(Color::Green)),
        ("cyan", fg(Color::Cyan)),
        ("red", fg(Color::Red)),
        ("magenta", fg(Color::Magenta)),
        ("yellow", fg(Color::Yellow)),
        ("white", fg(Color::White)),
    ])
});

/// Style for a role or colour name; unknown names get the `normal` style.
#[must_use]
pub fn style(name: &str) -> Style {
    PALETTE
        .get(name)
        .or_else(|| PALETTE.get("normal"))
        .copied()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles() {
        assert_eq!(style("work").fg, Some(Color::Green));
        assert_eq!(style("break").fg, Some(Color::Cyan));
        assert_eq!(style("urgent").fg, Some(Color::Red));
        assert!(style("title").add_modifier.contains(Modifier::BOLD));
        assert_eq!(style("inverse").bg, Some(Color::White));
    }

    #[test]
    fn test_art_colours_are_known() {
        for art in crate::tui::art::ARTS {
            for ov in art.overlays {
                assert!(PALETTE.contains_key(ov.color), "unknown colour {}", ov.color);
            }
        }
    }

    #[test]
    fn test_unknown_falls_back_to_normal() {
        assert_eq!(style("chartreuse"), style("normal"));
    }
}
