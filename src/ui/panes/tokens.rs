//! Token list pane: every classified token with its index and kind

use super::utils::{pane_block, render_scrolled_lines};
use crate::parser::lexer::{Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};
use rustc_hash::FxHashMap;

fn kind_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::ReservedWord => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        TokenKind::Identifier => Style::default().fg(DEFAULT_THEME.fg),
        TokenKind::Number => Style::default().fg(DEFAULT_THEME.number),
        TokenKind::String => Style::default().fg(DEFAULT_THEME.string),
        TokenKind::Symbol => Style::default().fg(DEFAULT_THEME.primary),
        TokenKind::Error => Style::default().fg(DEFAULT_THEME.error),
    }
}

/// Pane title with a per-kind count, e.g. ` Tokens: 12 (4 RESERVEDWORD, 8 SYMBOL) `
fn tokens_title(tokens: &[Token]) -> String {
    let mut counts: FxHashMap<TokenKind, usize> = FxHashMap::default();
    for token in tokens {
        *counts.entry(token.kind()).or_default() += 1;
    }

    let order = [
        TokenKind::ReservedWord,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Symbol,
        TokenKind::Error,
    ];
    let summary: Vec<String> = order
        .iter()
        .filter_map(|kind| counts.get(kind).map(|n| format!("{} {}", n, kind)))
        .collect();

    if summary.is_empty() {
        " Tokens ".to_string()
    } else {
        format!(" Tokens: {} ({}) ", tokens.len(), summary.join(", "))
    }
}

/// Render the token list pane
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(tokens_title(tokens), is_focused);

    let lines: Vec<Line> = tokens
        .iter()
        .enumerate()
        .map(|(idx, token)| {
            Line::from(vec![
                Span::styled(
                    format!("{:4} ", idx),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(format!("{:<13}", token.kind()), kind_style(token.kind())),
                Span::styled(token.text().to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            ])
        })
        .collect();

    render_scrolled_lines(frame, area, block, lines, "(no tokens)", scroll_offset);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::Lexer;

    #[test]
    fn test_tokens_title_counts_kinds() {
        let tokens = Lexer::new().tokenize("int x = 10;");
        assert_eq!(
            tokens_title(&tokens),
            " Tokens: 5 (1 RESERVEDWORD, 1 IDENTIFIER, 1 NUMBER, 2 SYMBOL) "
        );
        assert_eq!(tokens_title(&[]), " Tokens ");
    }
}
