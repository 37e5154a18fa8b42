//! Three-address code pane
//!
//! Lists the generated instructions. When the run was driven by an equation,
//! the equation tree's edges are listed above the instructions.

use super::utils::{pane_block, render_scrolled_lines};
use crate::equation::SyntaxTreeNode;
use crate::tac::Instruction;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Temporaries are the generated `t<N>` names
fn is_temporary(name: &str) -> bool {
    name.strip_prefix('t')
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}

fn operand_span(name: &str) -> Span<'static> {
    let color = if is_temporary(name) {
        DEFAULT_THEME.temporary
    } else {
        DEFAULT_THEME.fg
    };
    Span::styled(name.to_string(), Style::default().fg(color))
}

fn instruction_line(idx: usize, instruction: &Instruction) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:3}: ", idx),
        Style::default().fg(DEFAULT_THEME.comment),
    )];
    let op_style = Style::default()
        .fg(DEFAULT_THEME.secondary)
        .add_modifier(Modifier::BOLD);

    match instruction {
        Instruction::Copy { dest, src } => {
            spans.push(operand_span(dest));
            spans.push(Span::styled(" = ", op_style));
            spans.push(operand_span(src));
        }
        Instruction::Binary {
            dest,
            left,
            op,
            right,
        } => {
            spans.push(operand_span(dest));
            spans.push(Span::styled(" = ", op_style));
            spans.push(operand_span(left));
            spans.push(Span::styled(format!(" {} ", op), op_style));
            spans.push(operand_span(right));
        }
    }

    Line::from(spans)
}

/// Render the TAC pane
pub fn render_tac_pane(
    frame: &mut Frame,
    area: Rect,
    instructions: &[Instruction],
    equation: Option<&SyntaxTreeNode>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = match equation {
        Some(_) => " Three-Address Code (equation) ",
        None => " Three-Address Code (program) ",
    };
    let block = pane_block(title.to_string(), is_focused);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(tree) = equation {
        lines.extend(tree.edges().into_iter().map(|edge| {
            Line::from(Span::styled(edge, Style::default().fg(DEFAULT_THEME.comment)))
        }));
        lines.push(Line::from(""));
    }
    lines.extend(
        instructions
            .iter()
            .enumerate()
            .map(|(idx, instruction)| instruction_line(idx, instruction)),
    );

    render_scrolled_lines(frame, area, block, lines, "(no instructions)", scroll_offset);
}
