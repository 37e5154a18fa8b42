//! Parse tree pane: indented outline of the tree

use super::utils::{pane_block, render_scrolled_lines};
use crate::parser::tree::ParseTreeNode;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

fn collect_lines(node: &ParseTreeNode, depth: usize, lines: &mut Vec<Line<'static>>) {
    let style = if node.kind.is_terminal() {
        Style::default().fg(DEFAULT_THEME.fg)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD)
    };

    lines.push(Line::from(vec![
        Span::styled("│ ".repeat(depth), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(node.label().to_string(), style),
    ]));

    for child in &node.children {
        collect_lines(child, depth + 1, lines);
    }
}

/// Render the parse tree pane
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    tree: &ParseTreeNode,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(format!(" Parse Tree: {} nodes ", tree.node_count()), is_focused);

    let mut lines = Vec::new();
    collect_lines(tree, 0, &mut lines);

    render_scrolled_lines(frame, area, block, lines, "(empty tree)", scroll_offset);
}
