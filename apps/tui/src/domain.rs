use serde::Deserialize;

/// One gallery entry, bound to the dataset's field names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(rename = "data_criacao", default)]
    pub created: Option<String>,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "Consoles", default)]
    pub consoles: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(rename = "hlb", default)]
    pub hlb_link: Option<String>,
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(rename = "protagonista", default)]
    pub protagonist: Option<String>,
    #[serde(rename = "protagonistas", default)]
    pub protagonists: Option<Vec<String>>,
    #[serde(default)]
    pub variations: Vec<Variation>,
}

/// An alternate skin of a record. Same shape minus nested variations; the
/// `bubble_icon` is only used in the selector row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Variation {
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(rename = "data_criacao", default)]
    pub created: Option<String>,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "Consoles", default)]
    pub consoles: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(rename = "hlb", default)]
    pub hlb_link: Option<String>,
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(rename = "protagonista", default)]
    pub protagonist: Option<String>,
    #[serde(rename = "protagonistas", default)]
    pub protagonists: Option<Vec<String>>,
    #[serde(default)]
    pub bubble_icon: Option<String>,
}

/// Either a symbolic tag selecting a predefined decorative palette, or an
/// explicit set of colors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Theme {
    Tag(String),
    Colors(ThemeColors),
}

impl Theme {
    pub fn symbolic(&self) -> Option<SymbolicTheme> {
        match self {
            Self::Tag(tag) => SymbolicTheme::parse(tag),
            Self::Colors(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThemeColors {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default)]
    pub tertiary: Option<String>,
    #[serde(rename = "bg", default)]
    pub background: Option<String>,
}

/// The symbolic themes the dataset uses as bare strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolicTheme {
    Pq,
    Pq2,
}

impl SymbolicTheme {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pq" => Some(Self::Pq),
            "pq2" => Some(Self::Pq2),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pq => "pq",
            Self::Pq2 => "pq2",
        }
    }
}

/// Portrait block shape, a pure function of how many portrait refs a source
/// carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortraitLayout {
    Placeholder,
    Single,
    Pair,
    Multi,
}

impl PortraitLayout {
    pub const fn from_count(count: usize) -> Self {
        match count {
            0 => Self::Placeholder,
            1 => Self::Single,
            2 => Self::Pair,
            _ => Self::Multi,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Placeholder => "placeholder",
            Self::Single => "single",
            Self::Pair => "pair",
            Self::Multi => "multi",
        }
    }
}

/// Common read surface over a record and its variations, so card views can
/// be built from either without caring which one they got.
pub trait CardSource {
    fn name(&self) -> &str;
    fn created(&self) -> Option<&str>;
    fn description(&self) -> Option<&str>;
    fn consoles(&self) -> Option<&str>;
    fn info_link(&self) -> Option<&str>;
    fn hlb_link(&self) -> Option<&str>;
    fn theme(&self) -> Option<&Theme>;

    /// Effective portrait refs: the list when present and non-empty,
    /// otherwise the singular ref, otherwise nothing.
    fn portraits(&self) -> Vec<&str>;
}

fn effective_portraits<'a>(
    list: Option<&'a Vec<String>>,
    single: Option<&'a String>,
) -> Vec<&'a str> {
    match list {
        Some(refs) if !refs.is_empty() => refs.iter().map(String::as_str).collect(),
        _ => single.map(String::as_str).into_iter().collect(),
    }
}

impl CardSource for Record {
    fn name(&self) -> &str {
        &self.name
    }

    fn created(&self) -> Option<&str> {
        self.created.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn consoles(&self) -> Option<&str> {
        self.consoles.as_deref()
    }

    fn info_link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    fn hlb_link(&self) -> Option<&str> {
        self.hlb_link.as_deref()
    }

    fn theme(&self) -> Option<&Theme> {
        self.theme.as_ref()
    }

    fn portraits(&self) -> Vec<&str> {
        effective_portraits(self.protagonists.as_ref(), self.protagonist.as_ref())
    }
}

impl CardSource for Variation {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    fn created(&self) -> Option<&str> {
        self.created.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn consoles(&self) -> Option<&str> {
        self.consoles.as_deref()
    }

    fn info_link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    fn hlb_link(&self) -> Option<&str> {
        self.hlb_link.as_deref()
    }

    fn theme(&self) -> Option<&Theme> {
        self.theme.as_ref()
    }

    fn portraits(&self) -> Vec<&str> {
        effective_portraits(self.protagonists.as_ref(), self.protagonist.as_ref())
    }
}

/// Stable card identifier: lowercased name with every non-alphanumeric
/// character mapped to a hyphen. Derived once from the record name;
/// variation swaps never change it.
pub fn card_slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Parses a `#rrggbb` hex string (leading `#` optional).
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let digits = value.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let red = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let green = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((red, green, blue))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_and_hyphenates() {
        assert_eq!(card_slug("Persona 5"), "persona-5");
        assert_eq!(
            card_slug("Persona Q2: New Cinema Labyrinth"),
            "persona-q2--new-cinema-labyrinth"
        );
        assert_eq!(card_slug("already-fine-123"), "already-fine-123");
    }

    #[test]
    fn slug_stays_in_its_alphabet_for_non_ascii() {
        assert_eq!(card_slug("Café"), card_slug("Café"));
        assert!(card_slug("Café")
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn portrait_layout_follows_count() {
        assert_eq!(PortraitLayout::from_count(0), PortraitLayout::Placeholder);
        assert_eq!(PortraitLayout::from_count(1), PortraitLayout::Single);
        assert_eq!(PortraitLayout::from_count(2), PortraitLayout::Pair);
        assert_eq!(PortraitLayout::from_count(3), PortraitLayout::Multi);
        assert_eq!(PortraitLayout::from_count(4), PortraitLayout::Multi);
    }

    #[test]
    fn empty_portrait_list_falls_back_to_singular() {
        let record: Record = serde_json::from_str(
            r#"{"nome": "Persona 3", "protagonistas": [], "protagonista": "p3.png"}"#,
        )
        .expect("record parses");

        assert_eq!(record.portraits(), vec!["p3.png"]);
    }

    #[test]
    fn portrait_list_wins_over_singular() {
        let record: Record = serde_json::from_str(
            r#"{"nome": "Persona 4", "protagonistas": ["a.png", "b.png"], "protagonista": "c.png"}"#,
        )
        .expect("record parses");

        assert_eq!(record.portraits(), vec!["a.png", "b.png"]);
    }

    #[test]
    fn theme_parses_symbolic_tag() {
        let record: Record =
            serde_json::from_str(r#"{"nome": "Persona Q", "theme": "pq"}"#).expect("record parses");

        let theme = record.theme.expect("theme present");
        assert_eq!(theme, Theme::Tag("pq".to_string()));
        assert_eq!(theme.symbolic(), Some(SymbolicTheme::Pq));
    }

    #[test]
    fn theme_parses_structured_colors() {
        let record: Record = serde_json::from_str(
            r##"{"nome": "Persona 5", "theme": {"primary": "#ff0000", "secondary": "#ffffff"}}"##,
        )
        .expect("record parses");

        match record.theme.expect("theme present") {
            Theme::Colors(colors) => {
                assert_eq!(colors.primary.as_deref(), Some("#ff0000"));
                assert_eq!(colors.background, None);
            }
            Theme::Tag(tag) => panic!("expected structured colors, got tag {tag}"),
        }
    }

    #[test]
    fn unknown_symbolic_tag_is_kept_but_not_symbolic() {
        let theme = Theme::Tag("sonic".to_string());
        assert_eq!(theme.symbolic(), None);
    }

    #[test]
    fn hex_parsing_accepts_hash_prefix() {
        assert_eq!(parse_hex_color("#1f2e3d"), Some((0x1f, 0x2e, 0x3d)));
        assert_eq!(parse_hex_color("ffffff"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color(" #000000 "), Some((0, 0, 0)));
    }

    #[test]
    fn hex_parsing_rejects_malformed_values() {
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("red"), None);
        assert_eq!(parse_hex_color("#12345g"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn variation_without_name_reads_as_empty() {
        let variation: Variation =
            serde_json::from_str(r#"{"bubble_icon": "icon.png"}"#).expect("variation parses");

        assert_eq!(CardSource::name(&variation), "");
        assert_eq!(variation.bubble_icon.as_deref(), Some("icon.png"));
    }
}
