//! Command template expansion
//!
//! Placeholders:
//! - `%1`, `%2`, ... positional arguments (1-based, all digits are consumed)
//! - `%@` every argument after the highest referenced position
//! - `%%` a literal percent sign
//!
//! Any other `%` (including `%0`) is kept as written.

use crate::domain::Shortcut;
use crate::error::{Result, ShortcutError};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Positional(usize),
    Rest,
}

fn tokenize(template: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let bytes = template.as_bytes();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }

        let (token, len) = match bytes.get(i + 1) {
            Some(b'%') => (Token::Text("%"), 2),
            Some(b'@') => (Token::Rest, 2),
            Some(b'1'..=b'9') => {
                let digits = bytes[i + 1..]
                    .iter()
                    .take_while(|b| b.is_ascii_digit())
                    .count();
                // Digits are ASCII, so the slice is on char boundaries
                match template[i + 1..i + 1 + digits].parse::<usize>() {
                    Ok(index) => (Token::Positional(index), 1 + digits),
                    Err(_) => {
                        i += 1;
                        continue;
                    }
                }
            }
            _ => {
                i += 1;
                continue;
            }
        };

        if literal_start < i {
            tokens.push(Token::Text(&template[literal_start..i]));
        }
        tokens.push(token);
        i += len;
        literal_start = i;
    }

    if literal_start < template.len() {
        tokens.push(Token::Text(&template[literal_start..]));
    }
    tokens
}

/// Highest positional placeholder referenced by `template`, 0 if none
pub fn max_placeholder(template: &str) -> usize {
    tokenize(template)
        .into_iter()
        .filter_map(|t| match t {
            Token::Positional(index) => Some(index),
            _ => None,
        })
        .max()
        .unwrap_or(0)
}

/// Substitute `args` into the shortcut's command template.
///
/// Fails with `Arity` when a positional placeholder has no argument. Surplus
/// arguments go to `%@` when present, otherwise they are appended verbatim.
pub fn expand(shortcut: &Shortcut, args: &[String]) -> Result<String> {
    let tokens = tokenize(&shortcut.command);

    let highest = tokens
        .iter()
        .filter_map(|t| match t {
            Token::Positional(index) => Some(*index),
            _ => None,
        })
        .max()
        .unwrap_or(0);

    if highest > args.len() {
        return Err(ShortcutError::Arity {
            name: shortcut.name.clone(),
            scope: shortcut.scope,
            index: highest,
            supplied: args.len(),
        });
    }

    let surplus = args[highest..].join(" ");
    let has_rest = tokens.contains(&Token::Rest);

    let mut out = String::with_capacity(shortcut.command.len() + surplus.len());
    for token in &tokens {
        match token {
            Token::Text(text) => out.push_str(text),
            Token::Positional(index) => out.push_str(&args[index - 1]),
            Token::Rest => out.push_str(&surplus),
        }
    }

    if !has_rest && !surplus.is_empty() {
        if !out.is_empty() && !out.ends_with(char::is_whitespace) {
            out.push(' ');
        }
        out.push_str(&surplus);
    }

    Ok(out)
}
