use rand::Rng;

use crate::domain::{card_slug, CardSource, PortraitLayout, Record, SymbolicTheme};
use crate::view::bubbles::{bubble_layer, Bubble};
use crate::view::theme::{resolve_colors, CardColors};

/// Upper bound for a selector's decorative entrance delay, in seconds.
pub const SELECTOR_ENTRANCE_MAX_DELAY_SECS: f64 = 2.0;

/// Declarative description of one rendered card. Everything the binding
/// layer needs, nothing it has to compute.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub slug: String,
    pub title: String,
    pub year: String,
    pub description: String,
    pub consoles: String,
    pub info_link: String,
    /// `None` keeps the secondary-link line in the layout but suppressed.
    pub hlb_link: Option<String>,
    pub portraits: PortraitBlock,
    pub colors: CardColors,
    pub marker: Option<SymbolicTheme>,
    pub bubbles: Vec<Bubble>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PortraitBlock {
    Placeholder,
    Single(String),
    Pair(String, String),
    Multi(Vec<String>),
}

impl PortraitBlock {
    fn from_refs(refs: &[&str]) -> Self {
        match PortraitLayout::from_count(refs.len()) {
            PortraitLayout::Placeholder => Self::Placeholder,
            PortraitLayout::Single => Self::Single(refs[0].to_string()),
            PortraitLayout::Pair => Self::Pair(refs[0].to_string(), refs[1].to_string()),
            PortraitLayout::Multi => Self::Multi(refs.iter().map(|r| (*r).to_string()).collect()),
        }
    }

    pub const fn layout(&self) -> PortraitLayout {
        match self {
            Self::Placeholder => PortraitLayout::Placeholder,
            Self::Single(_) => PortraitLayout::Single,
            Self::Pair(_, _) => PortraitLayout::Pair,
            Self::Multi(_) => PortraitLayout::Multi,
        }
    }
}

/// What a selector applies when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantTarget {
    Default,
    Variation(usize),
}

/// One clickable entry in a card's variation row.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorView {
    pub label: String,
    pub icon: Option<String>,
    pub entrance_delay: f64,
    pub target: VariantTarget,
}

/// Builds the view a card starts with: the record's own data, theme colors
/// applied, no decorative bubble layer and no theme marker.
pub fn initial_card(record: &Record) -> CardView {
    CardView {
        slug: card_slug(&record.name),
        title: record.name.clone(),
        year: text(record.created()),
        description: text(record.description()),
        consoles: text(record.consoles()),
        info_link: link(record.info_link()),
        hlb_link: record.hlb_link().map(String::from),
        portraits: PortraitBlock::from_refs(&record.portraits()),
        colors: record.theme().map(resolve_colors).unwrap_or_default(),
        marker: None,
        bubbles: Vec::new(),
    }
}

/// Rebuilds a card from one source: the base record for the reset selector,
/// a variation otherwise. The slug stays the base record's; a source without
/// a theme keeps the previously applied colors; a themed source gets a fresh
/// bubble layer and, when symbolic, the theme marker.
pub fn updated_card(
    base: &Record,
    source: &dyn CardSource,
    previous: CardColors,
    rng: &mut impl Rng,
) -> CardView {
    let theme = source.theme();

    CardView {
        slug: card_slug(&base.name),
        title: source.name().to_string(),
        year: text(source.created()),
        description: text(source.description()),
        consoles: text(source.consoles()),
        info_link: link(source.info_link()),
        // The secondary link only ever shows if the base card rendered one;
        // a variant can fill or hide it, not add it.
        hlb_link: if base.hlb_link.is_some() {
            source.hlb_link().map(String::from)
        } else {
            None
        },
        portraits: PortraitBlock::from_refs(&source.portraits()),
        colors: theme.map_or(previous, resolve_colors),
        marker: theme.and_then(crate::domain::Theme::symbolic),
        bubbles: theme.map_or_else(Vec::new, |t| bubble_layer(t, rng)),
    }
}

/// Builds the selector row for a record: nothing when it has no variations,
/// otherwise one reset selector followed by one selector per variation, each
/// with a random entrance delay so they do not all animate in at once.
pub fn selector_row(record: &Record, rng: &mut impl Rng) -> Vec<SelectorView> {
    if record.variations.is_empty() {
        return Vec::new();
    }

    let mut selectors = vec![SelectorView {
        label: "Back to default".to_string(),
        icon: None,
        entrance_delay: rng.gen_range(0.0..SELECTOR_ENTRANCE_MAX_DELAY_SECS),
        target: VariantTarget::Default,
    }];

    for (index, variation) in record.variations.iter().enumerate() {
        selectors.push(SelectorView {
            label: variation.name.clone().unwrap_or_default(),
            icon: variation.bubble_icon.clone(),
            entrance_delay: rng.gen_range(0.0..SELECTOR_ENTRANCE_MAX_DELAY_SECS),
            target: VariantTarget::Variation(index),
        });
    }

    selectors
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn link(value: Option<&str>) -> String {
    value.unwrap_or("#").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PortraitLayout, Theme};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    fn record(json: &str) -> Record {
        serde_json::from_str(json).expect("test record parses")
    }

    #[test]
    fn initial_card_carries_no_bubbles_even_when_themed() {
        let base = record(r#"{"nome": "Persona Q", "theme": "pq"}"#);
        let view = initial_card(&base);

        assert!(view.bubbles.is_empty());
        assert_eq!(view.marker, None);
        assert_eq!(view.colors, crate::view::theme::symbolic_card_colors(SymbolicTheme::Pq));
    }

    #[test]
    fn slug_derives_from_the_base_record_across_updates() {
        let base = record(
            r#"{"nome": "Persona 5", "variations": [{"nome": "Persona 5 Royal"}]}"#,
        );
        let view = updated_card(&base, &base.variations[0], CardColors::default(), &mut rng());

        assert_eq!(view.slug, "persona-5");
        assert_eq!(view.title, "Persona 5 Royal");
    }

    #[test]
    fn reset_restores_the_base_title_exactly() {
        let base = record(r#"{"nome": "Persona 5", "data_criacao": "2016"}"#);
        let view = updated_card(&base, &base, CardColors::default(), &mut rng());

        assert_eq!(view.title, "Persona 5");
        assert_eq!(view.year, "2016");
    }

    #[test]
    fn themed_update_generates_the_full_layer_and_marker() {
        let base = record(
            r#"{"nome": "Persona Q", "variations": [{"nome": "Persona Q2", "theme": "pq2"}]}"#,
        );
        let view = updated_card(&base, &base.variations[0], CardColors::default(), &mut rng());

        assert_eq!(view.bubbles.len(), crate::view::BUBBLE_COUNT);
        assert_eq!(view.marker, Some(SymbolicTheme::Pq2));
    }

    #[test]
    fn unthemed_update_keeps_previous_colors_and_clears_effects() {
        let base = record(
            r##"{"nome": "Persona 3", "theme": {"primary": "#112233"}, "variations": [{"nome": "FES"}]}"##,
        );
        let previous = initial_card(&base).colors;
        let view = updated_card(&base, &base.variations[0], previous, &mut rng());

        assert_eq!(view.colors, previous);
        assert!(view.bubbles.is_empty());
        assert_eq!(view.marker, None);
    }

    #[test]
    fn portrait_layout_matches_between_initial_and_updated() {
        let base = record(
            r#"{"nome": "PQ2", "protagonistas": ["a", "b", "c", "d"],
                "variations": [{"nome": "alt", "protagonistas": ["a", "b", "c", "d"]}]}"#,
        );

        let first = initial_card(&base);
        let second = updated_card(&base, &base.variations[0], CardColors::default(), &mut rng());

        assert_eq!(first.portraits.layout(), PortraitLayout::Multi);
        assert_eq!(first.portraits.layout(), second.portraits.layout());
    }

    #[test]
    fn missing_secondary_link_is_suppressed_not_removed() {
        let base = record(
            r#"{"nome": "Persona 5", "hlb": "https://example.test/p5",
                "variations": [{"nome": "Dancing"}]}"#,
        );

        assert_eq!(
            initial_card(&base).hlb_link.as_deref(),
            Some("https://example.test/p5")
        );

        let swapped = updated_card(&base, &base.variations[0], CardColors::default(), &mut rng());
        assert_eq!(swapped.hlb_link, None);
    }

    #[test]
    fn a_variant_cannot_add_a_secondary_link_the_base_never_had() {
        let base = record(
            r#"{"nome": "Persona 4", "variations": [
                {"nome": "Golden", "hlb": "https://hlb.test/golden"}
            ]}"#,
        );

        let swapped = updated_card(&base, &base.variations[0], CardColors::default(), &mut rng());
        assert_eq!(swapped.hlb_link, None);
    }

    #[test]
    fn selector_row_is_reset_plus_one_per_variation() {
        let base = record(
            r#"{"nome": "Persona Q", "variations": [
                {"nome": "Persona Q2", "bubble_icon": "q2.png"},
                {"nome": "Arena"}
            ]}"#,
        );

        let selectors = selector_row(&base, &mut rng());
        assert_eq!(selectors.len(), 3);
        assert_eq!(selectors[0].target, VariantTarget::Default);
        assert_eq!(selectors[1].target, VariantTarget::Variation(0));
        assert_eq!(selectors[1].icon.as_deref(), Some("q2.png"));
        assert!(selectors
            .iter()
            .all(|s| (0.0..SELECTOR_ENTRANCE_MAX_DELAY_SECS).contains(&s.entrance_delay)));
    }

    #[test]
    fn records_without_variations_get_no_selector_row() {
        let base = record(r#"{"nome": "Catherine"}"#);
        assert!(selector_row(&base, &mut rng()).is_empty());
    }

    #[test]
    fn absent_info_link_renders_as_anchor_placeholder() {
        let base = record(r#"{"nome": "Persona 1"}"#);
        assert_eq!(initial_card(&base).info_link, "#");
    }

    #[test]
    fn structured_theme_in_update_applies_fallback_colors() {
        let base = record(
            r##"{"nome": "P5", "variations": [
                {"nome": "Royal", "theme": {"primary": "#e00040", "secondary": "#ffffff"}}
            ]}"##,
        );
        let view = updated_card(&base, &base.variations[0], CardColors::default(), &mut rng());

        assert_eq!(
            view.colors.background,
            Some(ratatui::style::Color::Rgb(0xe0, 0x00, 0x40))
        );
        assert!(matches!(base.variations[0].theme, Some(Theme::Colors(_))));
    }
}
