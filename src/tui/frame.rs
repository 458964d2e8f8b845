use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::theme::Theme;

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// Clears and draws a rounded, theme-bordered box with a bold title overlaid
/// on the top border. Returns the inner area.
pub fn draw_box(frame: &mut ratatui::Frame, area: Rect, title: &str, theme: &Theme) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(theme.dim_style())
        .title(Span::styled(
            format!(" {title} "),
            theme.primary_style().add_modifier(ratatui::style::Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// One padded content line inside a box: a left part and a right-aligned
/// part separated by at least `min_gap` spaces.
pub fn spread_line<'a>(
    left: Vec<Span<'a>>,
    right: Vec<Span<'a>>,
    inner_width: usize,
    min_gap: usize,
) -> Line<'a> {
    let left_width: usize = left.iter().map(|s| s.content.chars().count()).sum();
    let right_width: usize = right.iter().map(|s| s.content.chars().count()).sum();
    let gap = inner_width
        .saturating_sub(left_width + right_width)
        .max(min_gap);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(gap)));
    spans.extend(right);
    Line::from(spans)
}

/// Renders dim hint text at the bottom of `inner`.
pub fn draw_hint(frame: &mut ratatui::Frame, inner: Rect, hint: &str, style: Style) {
    if inner.height == 0 {
        return;
    }
    let hint_area = Rect {
        x: inner.x,
        y: inner.y + inner.height - 1,
        width: inner.width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {hint}"), style))),
        hint_area,
    );
}

#[cfg(test)]
#[path = "../tests/tui/frame_tests.rs"]
mod tests;
