//! Source code pane rendering with syntax highlighting
//!
//! Displays the cleaned source (comments already removed) with line numbers.
//! Highlighting uses a simple character-by-character scan rather than the
//! real lexer, so it also works on text the parser rejected.

use super::utils::{pane_block, render_scrolled_lines};
use crate::parser::lexer::RESERVED_WORDS;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Simple syntax highlighting for one source line
fn highlight_source_line(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut current_word = String::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Handle strings
        if c == '"' {
            flush_word(&mut current_word, &mut spans);
            let mut end = i + 1;
            while end < chars.len() && chars[end] != '"' {
                end += 1;
            }
            end = (end + 1).min(chars.len());
            spans.push(Span::styled(
                chars[i..end].iter().collect::<String>(),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        if c.is_alphanumeric() || c == '_' || c == '#' {
            current_word.push(c);
        } else {
            flush_word(&mut current_word, &mut spans);
            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
        }
        i += 1;
    }

    flush_word(&mut current_word, &mut spans);
    Line::from(spans)
}

fn flush_word(word: &mut String, spans: &mut Vec<Span<'static>>) {
    if !word.is_empty() {
        let style = word_style(word);
        spans.push(Span::styled(std::mem::take(word), style));
    }
}

fn word_style(word: &str) -> Style {
    match word {
        "int" | "float" | "void" => Style::default().fg(DEFAULT_THEME.type_name),
        _ if RESERVED_WORDS.contains(&word) => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        _ if word.chars().all(|c| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Source (comments removed) ".to_string(), is_focused);

    let lines: Vec<Line> = source_code
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            let mut spans = vec![Span::styled(
                format!("{:4} ", idx + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            spans.extend(highlight_source_line(line).spans);
            Line::from(spans)
        })
        .collect();

    render_scrolled_lines(frame, area, block, lines, "(empty source)", scroll_offset);
}
