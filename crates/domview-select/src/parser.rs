//! Parser for the selector text form
//!
//! Grammar: `all`, or clauses joined by `and`, where a clause is one of
//! `chain <pattern>`, `resi <spec>`, `name <pattern>` (short forms `c.`,
//! `i.`, `n.`). Each keyword may appear at most once.

use nom::combinator::all_consuming;

use crate::error::{SelectError, SelectResult};
use crate::pattern::{Pattern, ResiSpec};
use crate::range::{bound_pair, RangeSegment};
use crate::selector::AtomSelector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Chain,
    Resi,
    Name,
}

impl Keyword {
    fn lookup(word: &str) -> Option<Keyword> {
        match word.to_ascii_lowercase().as_str() {
            "chain" | "c." => Some(Keyword::Chain),
            "resi" | "i." => Some(Keyword::Resi),
            "name" | "n." => Some(Keyword::Name),
            _ => None,
        }
    }
}

/// Parse selector text into an [`AtomSelector`]
pub fn parse_selector(input: &str) -> SelectResult<AtomSelector> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    match tokens.as_slice() {
        [] => return Err(SelectError::UnexpectedEof),
        [word] if word.eq_ignore_ascii_case("all") => return Ok(AtomSelector::all()),
        _ => {}
    }

    let mut selector = AtomSelector::all();
    let mut stream = tokens.into_iter();

    loop {
        let word = stream.next().ok_or(SelectError::UnexpectedEof)?;
        let keyword =
            Keyword::lookup(word).ok_or_else(|| SelectError::UnknownKeyword(word.to_string()))?;
        let arg = stream.next().ok_or(SelectError::UnexpectedEof)?;

        let duplicate = match keyword {
            Keyword::Chain => selector.chain.replace(Pattern::parse(arg)).is_some(),
            Keyword::Resi => selector.resi.replace(parse_resi_spec(arg)?).is_some(),
            Keyword::Name => selector.name.replace(Pattern::parse(arg)).is_some(),
        };
        if duplicate {
            return Err(SelectError::DuplicateKeyword(word.to_string()));
        }

        match stream.next() {
            None => break,
            Some(op) if op.eq_ignore_ascii_case("and") => continue,
            Some(other) => return Err(SelectError::UnexpectedToken(other.to_string())),
        }
    }

    Ok(selector)
}

/// Parse `10`, `10-50`, `-5--2`, `52A` or `10-50+60+70A-72` into a residue spec
pub fn parse_resi_spec(text: &str) -> SelectResult<ResiSpec> {
    let invalid = || SelectError::InvalidResidue(text.to_string());
    let items = text
        .split('+')
        .map(|part| {
            let (_, (start, end)) = all_consuming(bound_pair)(part).map_err(|_| invalid())?;
            if start > end {
                return Err(invalid());
            }
            Ok(RangeSegment { chain: None, start, end }.resi_item())
        })
        .collect::<SelectResult<Vec<_>>>()?;
    Ok(ResiSpec { items })
}
