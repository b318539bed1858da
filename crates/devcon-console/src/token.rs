//! Input-line tokenizer.
//!
//! Splits a command line into whitespace-separated tokens. A double quote
//! toggles grouping: whitespace inside a quoted run stays part of the
//! current token, and the quote characters themselves are stripped. There
//! is no escape character. An unterminated quote is not an error; the run
//! simply extends to the end of the input.

/// Tokenize one input line.
///
/// Never produces empty tokens: repeated, leading, and trailing whitespace
/// collapses. `a "" b` yields `["a", "b"]` for the same reason — an empty
/// quoted run contributes nothing to the accumulator.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in input.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if !in_quotes && ch.is_whitespace() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(ch);
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
