//! Shared pane helpers: bordered blocks and scrolled line lists

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Bordered block whose border reflects focus
pub fn pane_block(title: String, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Render `lines` inside `block`, starting at `scroll_offset`.
///
/// The offset is clamped so the last page stays full; an offset of
/// `usize::MAX` therefore means "scroll to the bottom".
pub fn render_scrolled_lines<'a>(
    frame: &mut Frame,
    area: Rect,
    block: Block<'a>,
    lines: Vec<Line<'a>>,
    empty_message: &str,
    scroll_offset: &mut usize,
) {
    if lines.is_empty() {
        *scroll_offset = 0;
        let paragraph = Paragraph::new(empty_message.to_string())
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    *scroll_offset = clamp_scroll(*scroll_offset, lines.len(), visible_height);

    let visible: Vec<Line<'a>> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}

/// Clamp a scroll offset so that a full page is shown whenever possible.
pub fn clamp_scroll(offset: usize, total_items: usize, visible_height: usize) -> usize {
    if total_items > visible_height {
        offset.min(total_items - visible_height)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        assert_eq!(clamp_scroll(5, 3, 10), 0);
        assert_eq!(clamp_scroll(5, 20, 10), 5);
        assert_eq!(clamp_scroll(usize::MAX, 20, 10), 10);
    }
}
