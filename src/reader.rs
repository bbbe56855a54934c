//! Single-form reader.
//!
//! The engine's evaluation surface is a single atomic form: a literal
//! or a symbol. This is deliberately not an S-expression reader;
//! compilation and general interpretation live outside this crate.

use crate::error::VellumError;
use crate::symbol::Sym;
use crate::value::Value;

/// One parsed form
#[derive(Debug, Clone, PartialEq)]
pub enum Form {
    Literal(Value),
    Symbol(Sym),
}

/// Read exactly one form from `src`.
///
/// Accepts `nil`, `true`/`false`, integers, floats, double-quoted
/// strings with `\" \\ \n \t \r` escapes, and symbols. Surrounding
/// whitespace is ignored; anything after the form is an error.
pub fn read_str(src: &str) -> Result<Form, VellumError> {
    let src = src.trim();
    if src.is_empty() {
        return Err(VellumError::syntax_error("empty input"));
    }

    if src.starts_with('"') {
        return read_string(src);
    }

    let token = match src.find(char::is_whitespace) {
        Some(end) => {
            if !src[end..].trim().is_empty() {
                return Err(VellumError::syntax_error("expected a single form"));
            }
            &src[..end]
        }
        None => src,
    };

    Ok(read_atom(token))
}

fn read_atom(token: &str) -> Form {
    match token {
        "nil" => return Form::Literal(Value::Nil),
        "true" => return Form::Literal(Value::Bool(true)),
        "false" => return Form::Literal(Value::Bool(false)),
        _ => {}
    }

    if looks_numeric(token) {
        if let Ok(n) = token.parse::<i64>() {
            return Form::Literal(Value::Int(n));
        }
        if let Ok(f) = token.parse::<f64>() {
            return Form::Literal(Value::Float(f));
        }
    }

    Form::Symbol(Sym::parse(token))
}

/// Whether a token should even attempt numeric parsing. Guards against
/// `f64::from_str` accepting words like `inf` and `NaN`, which read as
/// symbols here.
fn looks_numeric(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('+') | Some('-') | Some('.') => {
            matches!(chars.next(), Some(c) if c.is_ascii_digit() || c == '.')
        }
        _ => false,
    }
}

fn read_string(src: &str) -> Result<Form, VellumError> {
    let mut out = String::new();
    let mut chars = src[1..].char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                let rest = &src[1 + i + 1..];
                if !rest.trim().is_empty() {
                    return Err(VellumError::syntax_error("expected a single form"));
                }
                return Ok(Form::Literal(Value::from(out)));
            }
            '\\' => match chars.next() {
                Some((_, '"')) => out.push('"'),
                Some((_, '\\')) => out.push('\\'),
                Some((_, 'n')) => out.push('\n'),
                Some((_, 't')) => out.push('\t'),
                Some((_, 'r')) => out.push('\r'),
                Some((_, other)) => {
                    return Err(VellumError::syntax_error(format!(
                        "unknown escape: \\{}",
                        other
                    )));
                }
                None => break,
            },
            other => out.push(other),
        }
    }

    Err(VellumError::syntax_error("unterminated string"))
}
