//! Selector path parser.
//!
//! Grammar per whitespace-separated segment (after [`normalize::normalize`]):
//!
//! ```text
//! segment   := ('#' id) | ('>'? body)
//! body      := names | name? attribute? index?
//! names     := name ('|' name)+
//! attribute := '[' attr-name ('="' value '"')? ']'
//! index     := '(' digits ')'
//! ```
//!
//! An id segment is only allowed in first position. Names, attribute names and
//! attribute values must not contain any of `#>[]="()`.
use crate::error::GrammarError;
use compact_str::CompactString;
use smallvec::SmallVec;

pub mod ast;
pub mod normalize;

use ast::{AttributeFilter, NodeNames, Path, Selector};

const RESERVED: &[char] = &['#', '>', '[', ']', '=', '"', '(', ')'];

fn has_reserved(s: &str) -> bool {
    s.contains(RESERVED)
}

/// Parse path text into an ordered selector sequence.
pub fn parse(path: &str) -> Result<Path, GrammarError> {
    normalize::tokens(path)
        .iter()
        .enumerate()
        .map(|(position, token)| parse_segment(token, position))
        .collect::<Result<Vec<_>, _>>()
        .map(Path::new)
}

impl core::str::FromStr for Path {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

fn parse_segment(token: &str, position: usize) -> Result<Selector, GrammarError> {
    let mut is_id = false;
    let mut is_direct_child = false;
    let mut rest = token;

    if let Some(id) = token.strip_prefix('#') {
        if position > 0 {
            return Err(GrammarError::IdNotAtStart);
        }
        if id.is_empty() {
            return Err(GrammarError::IdMissingName);
        }
        is_id = true;
        rest = id;
    } else if let Some(name) = token.strip_prefix('>') {
        if name.is_empty() {
            return Err(GrammarError::DirectChildMissingName);
        }
        is_direct_child = true;
        rest = name;
    }

    // Alternation members are validated before any bracket/paren stripping, so
    // `p(1)|p(3)` is a bad alternation rather than two indexed names.
    if rest.contains('|') {
        if is_id {
            return Err(GrammarError::AlternationWithId);
        }
        let names: SmallVec<[CompactString; 4]> = rest.split('|').map(CompactString::from).collect();
        if names.len() < 2 || names.iter().any(CompactString::is_empty) {
            return Err(GrammarError::AlternationMissingNames);
        }
        if names.iter().any(|n| has_reserved(n)) {
            return Err(GrammarError::AlternationReservedCharacter);
        }
        return Ok(Selector {
            names: NodeNames::OneOf(names),
            is_id,
            is_direct_child,
            attribute: None,
            index: None,
        });
    }

    let (rest, attribute) = split_attribute(rest)?;
    // `#[x]` and `#(1)` leave no id to look up.
    if is_id && (rest.is_empty() || rest.starts_with('(')) {
        return Err(GrammarError::IdMissingName);
    }
    let (name, index) = split_index(&rest)?;

    if has_reserved(name) {
        return Err(GrammarError::ReservedCharacterInName);
    }
    let names = if name.is_empty() { NodeNames::Any } else { NodeNames::Single(name.into()) };

    Ok(Selector { names, is_id, is_direct_child, attribute, index })
}

/// Extract a `[...]` suffix, returning the remaining name portion.
fn split_attribute(token: &str) -> Result<(String, Option<AttributeFilter>), GrammarError> {
    let Some(open) = token.find('[') else {
        return Ok((token.to_owned(), None));
    };
    let Some(close) = token.rfind(']').filter(|&close| close > open) else {
        // Unbalanced bracket stays in the name and is reported there.
        return Ok((token.to_owned(), None));
    };
    let remainder = format!("{}{}", &token[..open], &token[close + 1..]);
    let content = token[open + 1..close].trim();

    let (name, value) = match content.split_once("=\"") {
        Some((name, quoted)) => {
            let value = quoted
                .strip_suffix('"')
                .filter(|v| !v.is_empty())
                .ok_or(GrammarError::AttributeReservedCharacter)?;
            (name.trim(), Some(value))
        }
        None => (content, None),
    };
    if name.is_empty() || has_reserved(name) || value.is_some_and(has_reserved) {
        return Err(GrammarError::AttributeReservedCharacter);
    }

    let filter = AttributeFilter { name: name.into(), value: value.map(str::to_owned) };
    Ok((remainder, Some(filter)))
}

/// Extract a trailing `(n)` index.
fn split_index(token: &str) -> Result<(&str, Option<usize>), GrammarError> {
    let (Some(open), Some(close)) = (token.find('('), token.rfind(')')) else {
        return Ok((token, None));
    };
    if close <= open + 1 {
        // `()` or `)(`: not an index, reported as a reserved character in the name.
        return Ok((token, None));
    }
    let name = &token[..open];
    let digits = &token[open + 1..close];
    if name.is_empty() || close + 1 != token.len() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GrammarError::InvalidIndex);
    }
    let index = digits.parse::<usize>().map_err(|_| GrammarError::InvalidIndex)?;
    Ok((name, Some(index)))
}
