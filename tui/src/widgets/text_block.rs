//! TextBlock Widget
//!
//! A borderless, scrollable region of styled text. Each unit is one
//! logical paragraph line with its own style; the widget wraps units to
//! the render width, so callers never deal with terminal geometry.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::StatefulWidget;
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

/// One logical line of content, pre-styling, pre-wrapping
#[derive(Clone, Debug)]
pub struct StyledUnit {
    /// Text content; empty means a blank spacer line
    pub text: String,
    /// Style applied to every wrapped row of this unit
    pub style: Style,
    /// Center the unit instead of left-aligning it
    pub centered: bool,
}

impl StyledUnit {
    /// A left-aligned unit
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            centered: false,
        }
    }

    /// A centered unit
    pub fn centered(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            centered: true,
        }
    }

    /// A blank spacer line
    #[must_use]
    pub fn blank() -> Self {
        Self::new("", Style::default())
    }
}

/// State for a scrollable text block
#[derive(Debug, Default)]
pub struct TextBlockState {
    /// Scroll offset (lines from top)
    pub scroll_offset: usize,
    /// Total wrapped lines at the last render
    pub total_lines: usize,
}

impl TextBlockState {
    /// Scroll by delta (positive = down)
    pub fn scroll(&mut self, delta: i32) {
        let new_offset = self.scroll_offset as i32 + delta;
        self.scroll_offset = new_offset.max(0) as usize;
    }

    /// Jump back to the top (used when the page changes)
    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }
}

/// A borderless, scrollable styled text block
pub struct TextBlock<'a> {
    units: &'a [StyledUnit],
}

impl<'a> TextBlock<'a> {
    /// Widget over a prepared list of units
    #[must_use]
    pub fn new(units: &'a [StyledUnit]) -> Self {
        Self { units }
    }
}

impl StatefulWidget for TextBlock<'_> {
    type State = TextBlockState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Wrap every unit to the area width, carrying its style along.
        let width = area.width as usize;
        let wrapped: Vec<(String, Style, bool)> = self
            .units
            .iter()
            .flat_map(|unit| {
                if unit.text.is_empty() {
                    vec![(String::new(), unit.style, unit.centered)]
                } else {
                    wrap(&unit.text, width)
                        .into_iter()
                        .map(|row| (row.into_owned(), unit.style, unit.centered))
                        .collect()
                }
            })
            .collect();

        state.total_lines = wrapped.len();

        // Clamp scroll to the content.
        let max_scroll = state.total_lines.saturating_sub(area.height as usize);
        state.scroll_offset = state.scroll_offset.min(max_scroll);

        for (i, (line, style, centered)) in wrapped
            .iter()
            .skip(state.scroll_offset)
            .take(area.height as usize)
            .enumerate()
        {
            let x = if *centered {
                let line_width = line.width() as u16;
                area.x + area.width.saturating_sub(line_width) / 2
            } else {
                area.x
            };
            let y = area.y + i as u16;
            buf.set_string(x, y, line, *style);
        }
    }
}
