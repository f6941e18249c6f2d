use ratatui::style::Color;

use crate::domain::{parse_hex_color, SymbolicTheme, Theme};

pub const BUBBLE_BLUE: Color = Color::Rgb(68, 132, 255);
pub const BUBBLE_YELLOW: Color = Color::Rgb(255, 214, 64);
pub const BUBBLE_RED: Color = Color::Rgb(235, 64, 52);
pub const BUBBLE_PINK: Color = Color::Rgb(255, 105, 180);

/// Resolved card colors. `None` means "leave the terminal default alone",
/// the same as a card that never declared a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardColors {
    pub background: Option<Color>,
    pub text: Option<Color>,
}

/// Applies the theme color policy: background comes from the explicit
/// background field, falling back to the primary color; text comes from the
/// secondary color. Symbolic themes map to their predefined palettes.
pub fn resolve_colors(theme: &Theme) -> CardColors {
    match theme {
        Theme::Colors(colors) => CardColors {
            background: hex(colors.background.as_deref()).or_else(|| hex(colors.primary.as_deref())),
            text: hex(colors.secondary.as_deref()),
        },
        Theme::Tag(tag) => {
            SymbolicTheme::parse(tag).map_or_else(CardColors::default, symbolic_card_colors)
        }
    }
}

fn hex(value: Option<&str>) -> Option<Color> {
    value
        .and_then(parse_hex_color)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
}

pub const fn symbolic_card_colors(theme: SymbolicTheme) -> CardColors {
    match theme {
        SymbolicTheme::Pq => CardColors {
            background: Some(Color::Rgb(24, 44, 92)),
            text: Some(BUBBLE_YELLOW),
        },
        SymbolicTheme::Pq2 => CardColors {
            background: Some(Color::Rgb(66, 16, 24)),
            text: Some(Color::Rgb(240, 240, 240)),
        },
    }
}

/// Bubble palette for a symbolic theme: two colors for `pq`, the four
/// protagonist colors for `pq2`.
pub fn symbolic_bubble_palette(theme: SymbolicTheme) -> Vec<Color> {
    match theme {
        SymbolicTheme::Pq => vec![BUBBLE_BLUE, BUBBLE_YELLOW],
        SymbolicTheme::Pq2 => vec![BUBBLE_RED, BUBBLE_YELLOW, BUBBLE_BLUE, BUBBLE_PINK],
    }
}

/// Accent used for the marker overlay a symbolic theme adds to its card.
pub const fn symbolic_accent(theme: SymbolicTheme) -> Color {
    match theme {
        SymbolicTheme::Pq => BUBBLE_BLUE,
        SymbolicTheme::Pq2 => BUBBLE_PINK,
    }
}
