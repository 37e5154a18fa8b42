//! Comment removal
//!
//! Runs before tokenization. Line comments (`// ...`) are cut up to the end of
//! the line; the newline itself survives so the line structure of the code
//! outside comments is unchanged. Block comments (`/* ... */`) are removed
//! entirely, newlines included. Block comments do not nest, and an
//! unterminated block comment swallows the rest of the input.

use std::iter::Peekable;
use std::str::Chars;

/// Strip all `//` and `/* */` comments from `source`.
///
/// Quotes are not tracked, so a `//` inside a string literal also starts a
/// comment.
pub fn strip_comments(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut in_block = false;

    while let Some(c) = chars.next() {
        if in_block {
            if c == '*' && chars.peek() == Some(&'/') {
                chars.next();
                in_block = false;
            }
            continue;
        }

        match (c, chars.peek()) {
            ('/', Some('/')) => skip_line(&mut chars),
            ('/', Some('*')) => {
                chars.next();
                in_block = true;
            }
            _ => result.push(c),
        }
    }

    if in_block {
        log::debug!("unterminated block comment runs to end of input");
    }

    result
}

/// Consume characters up to, but not including, the next newline.
fn skip_line(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|&c| c != '\n').is_some() {}
}
