use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::Record;
use crate::search::filter_indices;
use crate::view::{self, CardView, SelectorView, VariantTarget};

/// Rows one card occupies on screen, borders included.
pub const CARD_HEIGHT: u16 = 12;
/// Blank rows between cards.
pub const CARD_GAP: u16 = 1;
pub const CARD_STRIDE: u16 = CARD_HEIGHT + CARD_GAP;

/// Scroll offset (in rows) past which the back-to-top affordance shows.
pub const SCROLL_TOP_THRESHOLD: u16 = 300;

#[derive(Debug, PartialEq, Eq)]
pub enum InputState {
    Browsing,
    Searching,
}

/// Per-card UI state. Rebuilt from the record whenever the gallery
/// re-renders; variant selections never outlive a re-render.
#[derive(Debug)]
pub struct CardState {
    pub record_index: usize,
    pub view: CardView,
    pub selectors: Vec<SelectorView>,
    pub selector_index: usize,
    pub active: VariantTarget,
    pub rendered_at: Instant,
    pub updated_at: Option<Instant>,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub input_state: InputState,
    pub search_input: String,
    pub active_query: String,
    pub records: Vec<Record>,
    pub cards: Vec<CardState>,
    pub selected_card: usize,
    pub scroll_offset: u16,
    pub scroll_target: Option<u16>,
    pub viewport_rows: u16,
    pub animation_counter: f64,
    pub last_frame: Instant,
    pub show_help: bool,
    pub status_message: String,
    pub rng: StdRng,
}

impl App {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            running: true,
            input_state: InputState::Browsing,
            search_input: String::new(),
            active_query: String::new(),
            records: Vec::new(),
            cards: Vec::new(),
            selected_card: 0,
            scroll_offset: 0,
            scroll_target: None,
            viewport_rows: 24,
            animation_counter: 0.0,
            last_frame: Instant::now(),
            show_help: false,
            status_message: String::new(),
            rng: seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64),
        }
    }

    /// Installs the loaded record set and triggers the initial full render.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.active_query.clear();
        self.rebuild_cards();
    }

    /// Applies the typed query and re-renders the gallery from scratch.
    pub fn run_search(&mut self) {
        self.active_query = self.search_input.clone();
        self.rebuild_cards();

        self.status_message = if self.active_query.is_empty() {
            format!("Showing all {} cards", self.cards.len())
        } else {
            format!(
                "{} cards match \"{}\"",
                self.cards.len(),
                self.active_query
            )
        };
    }

    /// Clears prior output and builds one fresh card per matching record, in
    /// source order. Any previously selected variants are discarded.
    fn rebuild_cards(&mut self) {
        let now = Instant::now();
        let visible = filter_indices(&self.records, &self.active_query);

        self.cards = visible
            .into_iter()
            .map(|record_index| {
                let record = &self.records[record_index];
                CardState {
                    record_index,
                    view: view::initial_card(record),
                    selectors: view::selector_row(record, &mut self.rng),
                    selector_index: 0,
                    active: VariantTarget::Default,
                    rendered_at: now,
                    updated_at: None,
                }
            })
            .collect();

        self.selected_card = 0;
        self.clamp_scroll();
    }

    /// Applies whatever the selected card's highlighted selector points at.
    pub fn apply_selected_variant(&mut self) {
        let target = self
            .cards
            .get(self.selected_card)
            .and_then(|card| card.selectors.get(card.selector_index))
            .map(|selector| selector.target);

        if let Some(target) = target {
            self.apply_variant(self.selected_card, target);
        }
    }

    /// Resets the selected card to its record's own data, same as activating
    /// its reset selector.
    pub fn reset_selected_card(&mut self) {
        if self
            .cards
            .get(self.selected_card)
            .is_some_and(|card| !card.selectors.is_empty())
        {
            self.apply_variant(self.selected_card, VariantTarget::Default);
        }
    }

    /// The Card Updater: rebuilds exactly one card's view from one source.
    /// All other cards are untouched.
    fn apply_variant(&mut self, card_index: usize, target: VariantTarget) {
        let Some(card) = self.cards.get_mut(card_index) else {
            return;
        };
        let record = &self.records[card.record_index];

        let view = match target {
            VariantTarget::Default => {
                view::updated_card(record, record, card.view.colors, &mut self.rng)
            }
            VariantTarget::Variation(index) => {
                let Some(variation) = record.variations.get(index) else {
                    return;
                };
                view::updated_card(record, variation, card.view.colors, &mut self.rng)
            }
        };

        let message = match target {
            VariantTarget::Default => format!("{} reset to default", record.name),
            VariantTarget::Variation(_) => format!("Showing {}", view.title),
        };

        card.view = view;
        card.active = target;
        card.updated_at = Some(Instant::now());
        self.status_message = message;
    }

    pub fn select_next_card(&mut self) {
        if !self.cards.is_empty() && self.selected_card + 1 < self.cards.len() {
            self.selected_card += 1;
            self.ensure_selected_visible();
        }
    }

    pub fn select_prev_card(&mut self) {
        if self.selected_card > 0 {
            self.selected_card -= 1;
            self.ensure_selected_visible();
        }
    }

    fn ensure_selected_visible(&mut self) {
        self.scroll_target = None;

        let top = u16::try_from(self.selected_card)
            .unwrap_or(u16::MAX)
            .saturating_mul(CARD_STRIDE);
        let bottom = top.saturating_add(CARD_HEIGHT);

        if top < self.scroll_offset {
            self.scroll_offset = top;
        } else if bottom > self.scroll_offset + self.viewport_rows {
            self.scroll_offset = bottom.saturating_sub(self.viewport_rows);
        }
    }

    /// Total gallery height in rows.
    pub fn content_rows(&self) -> u16 {
        u16::try_from(self.cards.len())
            .unwrap_or(u16::MAX)
            .saturating_mul(CARD_STRIDE)
    }

    fn max_scroll(&self) -> u16 {
        self.content_rows().saturating_sub(self.viewport_rows)
    }

    fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll_target = None;
        let current = i32::from(self.scroll_offset);
        let next = (current + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll_offset = u16::try_from(next).unwrap_or(0);
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll_target = None;
        self.scroll_offset = self.max_scroll();
    }

    /// The affordance's activation: ease back to the top instead of jumping.
    pub fn begin_scroll_to_top(&mut self) {
        self.scroll_target = Some(0);
    }

    /// Whether the back-to-top affordance is visible.
    pub const fn scroll_indicator_visible(&self) -> bool {
        self.scroll_offset > SCROLL_TOP_THRESHOLD
    }

    /// Frame tick: advances the animation counter and the smooth-scroll
    /// easing.
    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        // Update animation counter (cycles between 0 and 2*PI)
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }

        self.step_smooth_scroll();
    }

    /// One easing step toward the scroll target: a quarter of the remaining
    /// distance per frame, at least one row, so the motion decelerates and
    /// always terminates.
    pub fn step_smooth_scroll(&mut self) {
        let Some(target) = self.scroll_target else {
            return;
        };

        if self.scroll_offset == target {
            self.scroll_target = None;
            return;
        }

        let distance = if self.scroll_offset > target {
            self.scroll_offset - target
        } else {
            target - self.scroll_offset
        };
        let step = (distance / 4).max(1);

        if self.scroll_offset > target {
            self.scroll_offset -= step;
        } else {
            self.scroll_offset += step;
        }

        if self.scroll_offset == target {
            self.scroll_target = None;
        }
    }

    /// Seconds since a card was rendered or last updated, driving the
    /// decorative entrance/bubble animations.
    pub fn card_elapsed(&self, card: &CardState) -> (f64, Option<f64>) {
        let rendered = card.rendered_at.elapsed().as_secs_f64();
        let updated = card.updated_at.map(|at| at.elapsed().as_secs_f64());
        (rendered, updated)
    }
}
