//! Splits a post body into quote tags and the text between them.

use winnow::combinator::{alt, delimited, not, preceded, repeat};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{literal, take, take_till};

pub const OPEN_TAG: &str = "[QUOTE=";
pub const CLOSE_TAG: &str = "[/QUOTE]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'i> {
    Text(&'i str),
    Open(&'i str), // author
    Close,
}

pub(crate) struct Lexer<'i> {
    input: &'i str,
}

impl<'i> Lexer<'i> {
    pub(crate) fn new(input: &'i str) -> Self {
        Self { input }
    }
}

impl<'i> Iterator for Lexer<'i> {
    type Item = Token<'i>;

    fn next(&mut self) -> Option<Token<'i>> {
        if self.input.is_empty() {
            return None;
        }
        alt((close_tag, open_tag, text))
            .parse_next(&mut self.input)
            .ok()
    }
}

fn close_tag<'i>(input: &mut &'i str) -> ModalResult<Token<'i>> {
    literal(CLOSE_TAG).value(Token::Close).parse_next(input)
}

// An author runs to the first ']' and may not swallow another tag. The scan
// stops at the next tag, so a failed opening never looks past it.
fn open_tag<'i>(input: &mut &'i str) -> ModalResult<Token<'i>> {
    delimited(OPEN_TAG, author, ']')
        .map(Token::Open)
        .parse_next(input)
}

fn author<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    repeat::<_, _, (), _, _>(
        0..,
        alt((
            take_till(1.., ['[', ']']),
            preceded(not(alt((OPEN_TAG, "[/QUOTE"))), "["),
        )),
    )
    .take()
    .parse_next(input)
}

// A '[' that starts no tag is a one-character text token.
fn text<'i>(input: &mut &'i str) -> ModalResult<Token<'i>> {
    alt((take_till(1.., '['), take(1usize)))
        .map(Token::Text)
        .parse_next(input)
}
