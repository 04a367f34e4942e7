//! STAR/CIF tokenizer
//!
//! Built on nom combinators. Value tokens borrow from the input.

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_till, take_while1},
    character::complete::{char, multispace1, not_line_ending},
    combinator::{map, value},
    multi::many0,
    sequence::preceded,
    IResult,
};

/// A CIF token
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    /// `data_<name>` block header
    DataBlock(&'a str),
    /// `loop_` keyword
    Loop,
    /// `_category.item` tag, leading underscore included
    Tag(&'a str),
    /// Bare or quoted value
    Value(&'a str),
    /// `;`-delimited multi-line text
    Text(&'a str),
    /// `.` (inapplicable) or `?` (unknown)
    Null,
}

impl<'a> Token<'a> {
    /// The textual value, `None` for structural tokens and nulls
    pub fn value(&self) -> Option<&'a str> {
        match self {
            Token::Value(s) | Token::Text(s) => Some(*s),
            _ => None,
        }
    }

    /// True for tokens that can appear as a loop cell
    pub fn is_cell(&self) -> bool {
        matches!(self, Token::Value(_) | Token::Text(_) | Token::Null)
    }
}

fn skip_ws_comments(input: &str) -> IResult<&str, ()> {
    value(
        (),
        many0(alt((
            value((), multispace1),
            value((), preceded(char('#'), not_line_ending)),
        ))),
    )(input)
}

fn data_block(input: &str) -> IResult<&str, Token<'_>> {
    map(
        preceded(tag_no_case("data_"), take_till(char::is_whitespace)),
        Token::DataBlock,
    )(input)
}

fn loop_keyword(input: &str) -> IResult<&str, Token<'_>> {
    value(Token::Loop, tag_no_case("loop_"))(input)
}

fn tag_name(input: &str) -> IResult<&str, Token<'_>> {
    let (rest, _) = char('_')(input)?;
    let (rest, body) = take_while1(|c: char| !c.is_whitespace())(rest)?;
    // include the underscore in the borrowed slice
    let tag = &input[..body.len() + 1];
    Ok((rest, Token::Tag(tag)))
}

/// Quoted value: the closing quote only counts when followed by whitespace
/// or end of input, so `'N1'H'` style names survive.
fn quoted(input: &str) -> IResult<&str, Token<'_>> {
    let quote = match input.chars().next() {
        Some(q @ ('\'' | '"')) => q,
        _ => {
            return Err(nom::Err::Error(nom::error::Error::new(
                input,
                nom::error::ErrorKind::Char,
            )))
        }
    };

    let body = &input[1..];
    let mut search = 0;
    while let Some(offset) = body[search..].find(quote) {
        let end = search + offset;
        let after = &body[end + 1..];
        if after.is_empty() || after.starts_with(char::is_whitespace) {
            return Ok((after, Token::Value(&body[..end])));
        }
        search = end + 1;
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Char,
    )))
}

/// `;` text field, terminated by a line starting with `;`
fn text_field(input: &str) -> IResult<&str, Token<'_>> {
    let (body, _) = char(';')(input)?;
    match body.find("\n;") {
        Some(end) => Ok((&body[end + 2..], Token::Text(body[..end].trim_end_matches('\r')))),
        None => Ok(("", Token::Text(body))),
    }
}

fn bare_value(input: &str) -> IResult<&str, Token<'_>> {
    map(take_while1(|c: char| !c.is_whitespace()), |v| match v {
        "." | "?" => Token::Null,
        other => Token::Value(other),
    })(input)
}

/// Parse the next token, `Ok((rest, None))` at end of input
pub fn next_token(input: &str) -> IResult<&str, Option<Token<'_>>> {
    let (input, _) = skip_ws_comments(input)?;
    if input.is_empty() {
        return Ok((input, None));
    }
    map(
        alt((data_block, loop_keyword, tag_name, quoted, text_field, bare_value)),
        Some,
    )(input)
}

/// Streaming tokenizer over a CIF document
pub struct Lexer<'a> {
    rest: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { rest: input }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match next_token(self.rest) {
                Ok((rest, token)) => {
                    self.rest = rest;
                    return token;
                }
                Err(_) => {
                    // skip one character and resync
                    let mut chars = self.rest.chars();
                    chars.next()?;
                    self.rest = chars.as_str();
                }
            }
        }
    }
}

/// Tokenize a whole CIF document
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}
