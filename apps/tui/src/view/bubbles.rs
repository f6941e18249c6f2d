use rand::Rng;
use ratatui::style::Color;

use crate::domain::Theme;
use crate::view::theme::symbolic_bubble_palette;

/// Size of the decorative layer a themed variant gets.
pub const BUBBLE_COUNT: usize = 15;

/// Upper bound for the staggered animation start, in seconds.
pub const MAX_BUBBLE_DELAY_SECS: f64 = 8.0;

/// One decorative bubble, positioned as percentages of the card area so the
/// renderer can map it onto whatever rectangle the card ends up with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bubble {
    pub x_pct: f64,
    pub y_pct: f64,
    pub delay: f64,
    pub color: Color,
}

/// Generates the fixed-size bubble layer for a theme: random positions,
/// random start delays, colors drawn from the theme's palette. Returns an
/// empty layer when the theme yields no usable palette.
pub fn bubble_layer(theme: &Theme, rng: &mut impl Rng) -> Vec<Bubble> {
    let palette = bubble_palette(theme);
    if palette.is_empty() {
        return Vec::new();
    }

    (0..BUBBLE_COUNT)
        .map(|_| Bubble {
            x_pct: rng.gen_range(0.0..100.0),
            y_pct: rng.gen_range(0.0..100.0),
            delay: rng.gen_range(0.0..MAX_BUBBLE_DELAY_SECS),
            color: palette[rng.gen_range(0..palette.len())],
        })
        .collect()
}

/// Palette selection by theme identity: symbolic themes use their predefined
/// palettes; a structured theme contributes its primary and tertiary colors.
pub fn bubble_palette(theme: &Theme) -> Vec<Color> {
    use crate::domain::parse_hex_color;

    match theme {
        Theme::Tag(tag) => crate::domain::SymbolicTheme::parse(tag)
            .map(symbolic_bubble_palette)
            .unwrap_or_default(),
        Theme::Colors(colors) => {
            let primary = colors.primary.as_deref().and_then(parse_hex_color);
            let tertiary = colors.tertiary.as_deref().and_then(parse_hex_color);

            match (primary, tertiary) {
                (Some((pr, pg, pb)), Some((tr, tg, tb))) => {
                    vec![Color::Rgb(pr, pg, pb), Color::Rgb(tr, tg, tb)]
                }
                (Some((pr, pg, pb)), None) => vec![Color::Rgb(pr, pg, pb)],
                (None, _) => Vec::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ThemeColors;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn symbolic_theme_yields_a_full_layer_within_bounds() {
        let layer = bubble_layer(&Theme::Tag("pq".to_string()), &mut rng());
        let palette = bubble_palette(&Theme::Tag("pq".to_string()));

        assert_eq!(layer.len(), BUBBLE_COUNT);
        for bubble in &layer {
            assert!((0.0..100.0).contains(&bubble.x_pct));
            assert!((0.0..100.0).contains(&bubble.y_pct));
            assert!((0.0..MAX_BUBBLE_DELAY_SECS).contains(&bubble.delay));
            assert!(palette.contains(&bubble.color));
        }
    }

    #[test]
    fn pq2_layer_draws_from_the_four_color_palette() {
        let theme = Theme::Tag("pq2".to_string());
        let palette = bubble_palette(&theme);
        let layer = bubble_layer(&theme, &mut rng());

        assert_eq!(palette.len(), 4);
        assert!(layer.iter().all(|bubble| palette.contains(&bubble.color)));
    }

    #[test]
    fn structured_theme_uses_exact_primary_and_tertiary_values() {
        let theme = Theme::Colors(ThemeColors {
            primary: Some("#102030".to_string()),
            secondary: None,
            tertiary: Some("#405060".to_string()),
            background: None,
        });

        assert_eq!(
            bubble_palette(&theme),
            vec![Color::Rgb(0x10, 0x20, 0x30), Color::Rgb(0x40, 0x50, 0x60)]
        );
    }

    #[test]
    fn structured_theme_without_tertiary_still_bubbles() {
        let theme = Theme::Colors(ThemeColors {
            primary: Some("#aabbcc".to_string()),
            secondary: None,
            tertiary: None,
            background: None,
        });

        let layer = bubble_layer(&theme, &mut rng());
        assert_eq!(layer.len(), BUBBLE_COUNT);
        assert!(layer
            .iter()
            .all(|bubble| bubble.color == Color::Rgb(0xaa, 0xbb, 0xcc)));
    }

    #[test]
    fn themes_without_a_usable_palette_produce_no_layer() {
        let no_primary = Theme::Colors(ThemeColors {
            primary: None,
            secondary: Some("#ffffff".to_string()),
            tertiary: Some("#000000".to_string()),
            background: None,
        });

        assert!(bubble_layer(&no_primary, &mut rng()).is_empty());
        assert!(bubble_layer(&Theme::Tag("sonic".to_string()), &mut rng()).is_empty());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let theme = Theme::Tag("pq2".to_string());
        let first = bubble_layer(&theme, &mut StdRng::seed_from_u64(42));
        let second = bubble_layer(&theme, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }
}
