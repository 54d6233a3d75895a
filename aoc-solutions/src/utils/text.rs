//! Input splitting helpers
//!
//! Puzzle inputs arrive as raw text. These helpers tolerate `\r\n` line
//! endings and stray surrounding whitespace so that solvers only deal with
//! content.

use std::str::FromStr;

use anyhow::{Context, anyhow};

/// Non-empty lines with surrounding whitespace removed
pub fn lines(input: &str) -> impl Iterator<Item = &str> {
    input.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Blocks of text separated by one or more blank lines
pub fn sections(input: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut offset = 0;

    for raw in input.split_inclusive('\n') {
        let is_blank = raw.trim().is_empty();
        match (is_blank, start) {
            (false, None) => start = Some(offset),
            (true, Some(s)) => {
                sections.push(input[s..end].trim());
                start = None;
            }
            _ => {}
        }
        offset += raw.len();
        if !is_blank {
            end = offset;
        }
    }
    if let Some(s) = start {
        sections.push(input[s..end].trim());
    }
    sections
}

/// Whitespace-separated fields of a line
pub fn fields(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// Every (optionally negative) integer embedded in `text`, in order
///
/// Anything that is not a digit or a minus sign directly in front of a digit
/// is a separator, so `"p=0,4 v=-3,3"` yields `[0, 4, -3, 3]`.
pub fn numbers<T>(text: &str) -> anyhow::Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let bytes = text.as_bytes();
    let mut numbers = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let negative = bytes[i] == b'-' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if !(negative || bytes[i].is_ascii_digit()) {
            i += 1;
            continue;
        }
        let start = i;
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let token = &text[start..i];
        numbers.push(
            token
                .parse()
                .with_context(|| format!("number out of range: {token}"))?,
        );
    }
    Ok(numbers)
}

/// Exactly `N` integers from `text`
pub fn numbers_n<T, const N: usize>(text: &str) -> anyhow::Result<[T; N]>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let found = numbers(text)?;
    let count = found.len();
    found
        .try_into()
        .map_err(|_| anyhow!("expected {N} numbers, found {count} in {text:?}"))
}

/// Parse every item with `parse`, labelling failures with a 1-based index
pub fn parse_all<'a, T, I, F>(items: I, mut parse: F) -> anyhow::Result<Vec<T>>
where
    I: IntoIterator<Item = &'a str>,
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| parse(item).with_context(|| format!("(line {}) {item:?}", idx + 1)))
        .collect()
}
