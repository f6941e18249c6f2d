use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// A small char-cell canvas one card is composed on. Text goes in first,
/// decorative overlays (bubbles) go on top of whatever is still blank, and
/// the whole thing collapses into styled lines at the end.
#[derive(Debug, Clone)]
pub struct CardGrid {
    width: u16,
    cells: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, PartialEq)]
struct Cell {
    ch: char,
    style: Style,
}

impl CardGrid {
    pub fn new(width: u16, height: u16, base: Style) -> Self {
        let row = vec![
            Cell {
                ch: ' ',
                style: base,
            };
            width as usize
        ];

        Self {
            width,
            cells: vec![row; height as usize],
        }
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.cells.len()).unwrap_or(u16::MAX)
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub fn put_char(&mut self, row: u16, col: u16, ch: char, style: Style) {
        if let Some(cell) = self
            .cells
            .get_mut(row as usize)
            .and_then(|cells| cells.get_mut(col as usize))
        {
            cell.ch = ch;
            cell.style = style;
        }
    }

    /// Writes a string starting at (row, col); anything past the right edge
    /// is clipped.
    pub fn put_str(&mut self, row: u16, col: u16, text: &str, style: Style) {
        for (offset, ch) in text.chars().enumerate() {
            let Ok(offset) = u16::try_from(offset) else {
                break;
            };
            let target = col.saturating_add(offset);
            if target >= self.width {
                break;
            }
            self.put_char(row, target, ch, style);
        }
    }

    /// Writes a string centered on the row (left-biased for odd leftovers).
    pub fn put_str_centered(&mut self, row: u16, text: &str, style: Style) {
        let len = u16::try_from(text.chars().count()).unwrap_or(self.width);
        let col = self.width.saturating_sub(len) / 2;
        self.put_str(row, col, text, style);
    }

    /// Writes a string so its last character lands on `end_col`.
    pub fn put_str_right(&mut self, row: u16, end_col: u16, text: &str, style: Style) {
        let len = u16::try_from(text.chars().count()).unwrap_or(0);
        let col = end_col.saturating_add(1).saturating_sub(len);
        self.put_str(row, col, text, style);
    }

    pub fn is_blank(&self, row: u16, col: u16) -> bool {
        self.cells
            .get(row as usize)
            .and_then(|cells| cells.get(col as usize))
            .is_some_and(|cell| cell.ch == ' ')
    }

    /// Collapses the grid into lines, merging runs of equally-styled cells
    /// into single spans.
    pub fn into_lines(self) -> Vec<Line<'static>> {
        self.cells
            .into_iter()
            .map(|row| {
                let mut spans: Vec<Span<'static>> = Vec::new();
                let mut run = String::new();
                let mut run_style: Option<Style> = None;

                for cell in row {
                    match run_style {
                        Some(style) if style == cell.style => run.push(cell.ch),
                        Some(style) => {
                            spans.push(Span::styled(std::mem::take(&mut run), style));
                            run.push(cell.ch);
                            run_style = Some(cell.style);
                        }
                        None => {
                            run.push(cell.ch);
                            run_style = Some(cell.style);
                        }
                    }
                }

                if let Some(style) = run_style {
                    spans.push(Span::styled(run, style));
                }

                Line::from(spans)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Style};

    fn plain() -> Style {
        Style::default()
    }

    #[test]
    fn grid_starts_blank_at_the_requested_size() {
        let grid = CardGrid::new(10, 4, plain());
        let lines = grid.clone().into_lines();

        assert_eq!(grid.height(), 4);
        assert_eq!(lines.len(), 4);
        assert!(lines
            .iter()
            .all(|line| line.spans.iter().map(|s| s.content.chars().count()).sum::<usize>() == 10));
    }

    #[test]
    fn put_str_clips_at_the_right_edge() {
        let mut grid = CardGrid::new(6, 1, plain());
        grid.put_str(0, 3, "abcdef", plain());

        let lines = grid.into_lines();
        let text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "   abc");
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut grid = CardGrid::new(4, 2, plain());
        grid.put_char(5, 0, 'x', plain());
        grid.put_char(0, 9, 'x', plain());

        let lines = grid.into_lines();
        let text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "    ");
    }

    #[test]
    fn centered_and_right_aligned_text_land_where_expected() {
        let mut grid = CardGrid::new(11, 2, plain());
        grid.put_str_centered(0, "abc", plain());
        grid.put_str_right(1, 9, "xy", plain());

        let lines = grid.into_lines();
        let center: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        let right: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(center, "    abc    ");
        assert_eq!(right, "        xy ");
    }

    #[test]
    fn styled_runs_merge_into_single_spans() {
        let red = Style::default().fg(Color::Red);
        let mut grid = CardGrid::new(4, 1, plain());
        grid.put_str(0, 0, "ab", red);

        let lines = grid.into_lines();
        assert_eq!(lines[0].spans.len(), 2);
        assert_eq!(lines[0].spans[0].content.as_ref(), "ab");
        assert_eq!(lines[0].spans[1].content.as_ref(), "  ");
    }

    #[test]
    fn blankness_reflects_written_cells() {
        let mut grid = CardGrid::new(3, 1, plain());
        grid.put_char(0, 1, '•', plain());

        assert!(grid.is_blank(0, 0));
        assert!(!grid.is_blank(0, 1));
        assert!(!grid.is_blank(2, 2)); // out of range is not blank
    }
}
