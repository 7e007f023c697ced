//! Parsing of integer sequences from text.
//!
//! Integers may be separated by commas, whitespace, or both, and the whole
//! list may be wrapped in square brackets, so `1 2 3`, `1,2,3` and
//! `[1, 2, 3]` are all the same sequence.

use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace0, multispace1, one_of},
    combinator::{eof, opt, recognize},
    sequence::pair,
    IResult, Parser,
};
use nom_supreme::{
    error::ErrorTree,
    final_parser::{final_parser, Location},
    multi::collect_separated_terminated,
    ParserExt,
};

fn parse_integer(input: &str) -> IResult<&str, i64, ErrorTree<&str>> {
    recognize(pair(opt(one_of("+-")), digit1))
        .parse_from_str()
        .context("integer")
        .parse(input)
}

fn parse_separator(input: &str) -> IResult<&str, (), ErrorTree<&str>> {
    alt((
        multispace0
            .precedes(char(','))
            .terminated(multispace0)
            .value(()),
        multispace1.value(()),
    ))
    .context("separator")
    .parse(input)
}

fn parse_bare_sequence(input: &str) -> IResult<&str, Vec<i64>, ErrorTree<&str>> {
    alt((
        eof.value(Vec::new()),
        collect_separated_terminated(parse_integer, parse_separator, eof),
    ))
    .parse(input)
}

fn parse_bracketed_sequence(input: &str) -> IResult<&str, Vec<i64>, ErrorTree<&str>> {
    char('[')
        .terminated(multispace0)
        .precedes(alt((
            char(']').value(Vec::new()),
            collect_separated_terminated(
                parse_integer,
                parse_separator,
                multispace0.precedes(char(']')),
            ),
        )))
        .context("bracketed list")
        .parse(input)
}

fn parse_any_sequence(input: &str) -> IResult<&str, Vec<i64>, ErrorTree<&str>> {
    alt((parse_bracketed_sequence, parse_bare_sequence))
        .context("sequence")
        .parse(input)
}

/// Parse a whole input buffer into a sequence of integers. Surrounding
/// whitespace is ignored; an empty buffer is an empty sequence.
pub fn parse_sequence(input: &str) -> Result<Vec<i64>, ErrorTree<Location>> {
    final_parser(parse_any_sequence)(input.trim())
}
