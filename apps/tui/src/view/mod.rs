// Pure view layer: data in, declarative card descriptions out.
// The ui module binds these to ratatui; nothing here touches a terminal.

pub mod bubbles;
pub mod card;
pub mod theme;

pub use bubbles::{Bubble, BUBBLE_COUNT, MAX_BUBBLE_DELAY_SECS};
pub use card::{initial_card, selector_row, updated_card, CardView, PortraitBlock, SelectorView, VariantTarget};
pub use theme::CardColors;
