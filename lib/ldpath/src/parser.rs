//! nom grammar for path-query programs.
//!
//! Whitespace and `/* ... */` comments are allowed between any two tokens.

use crate::ast::{RawAtom, RawItem, RawPath, RawStep};
use crate::error::LdPathParseError;
use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_until};
use nom::character::complete::{alpha1, alphanumeric1, char, multispace1};
use nom::combinator::{map, opt, recognize, value};
use nom::error::{convert_error, VerboseError};
use nom::multi::{many0, many0_count, separated_list1};
use nom::sequence::{delimited, pair, preceded, separated_pair, terminated, tuple};
use nom::{Finish, IResult};

type ParseResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

pub(crate) fn parse_program(input: &str) -> Result<Vec<RawItem>, LdPathParseError> {
    match program(input).finish() {
        Ok(("", items)) => Ok(items),
        Ok((rest, _)) => Err(LdPathParseError::Syntax(format!(
            "unexpected input at '{}'",
            rest.chars().take(32).collect::<String>()
        ))),
        Err(error) => Err(LdPathParseError::Syntax(convert_error(input, error))),
    }
}

fn program(input: &str) -> ParseResult<'_, Vec<RawItem>> {
    preceded(sp, many0(terminated(item, sp)))(input)
}

fn item(input: &str) -> ParseResult<'_, RawItem> {
    alt((prefix_decl, field_def))(input)
}

/// `@prefix foo : <http://example.org/foo#> ;`
fn prefix_decl(input: &str) -> ParseResult<'_, RawItem> {
    let (input, _) = tag("@prefix")(input)?;
    let (input, prefix) = preceded(sp, identifier)(input)?;
    let (input, _) = delimited(sp, char(':'), sp)(input)?;
    let (input, iri) = iri_ref(input)?;
    let (input, _) = preceded(sp, char(';'))(input)?;
    Ok((
        input,
        RawItem::Prefix {
            prefix: prefix.to_owned(),
            iri: iri.to_owned(),
        },
    ))
}

/// `name = path :: datatype ;` with the coercion part optional.
fn field_def(input: &str) -> ParseResult<'_, RawItem> {
    let (input, name) = field_name(input)?;
    let (input, _) = delimited(sp, char('='), sp)(input)?;
    let (input, path) = path(input)?;
    let (input, datatype) = opt(preceded(delimited(sp, tag("::"), sp), atom))(input)?;
    let (input, _) = preceded(sp, char(';'))(input)?;
    Ok((
        input,
        RawItem::Field {
            name,
            path,
            datatype,
        },
    ))
}

fn field_name(input: &str) -> ParseResult<'_, String> {
    alt((
        map(identifier, ToOwned::to_owned),
        map(string_literal, ToOwned::to_owned),
    ))(input)
}

fn path(input: &str) -> ParseResult<'_, RawPath> {
    map(
        separated_list1(delimited(sp, char('|'), sp), sequence),
        |branches| RawPath { branches },
    )(input)
}

fn sequence(input: &str) -> ParseResult<'_, Vec<RawStep>> {
    separated_list1(delimited(sp, char('/'), sp), step)(input)
}

fn step(input: &str) -> ParseResult<'_, RawStep> {
    alt((
        value(RawStep::Context, char('.')),
        map(preceded(pair(char('^'), sp), atom), RawStep::Reverse),
        map(atom, RawStep::Forward),
        map(
            delimited(pair(char('('), sp), path, pair(sp, char(')'))),
            RawStep::Group,
        ),
    ))(input)
}

fn atom(input: &str) -> ParseResult<'_, RawAtom> {
    alt((
        map(iri_ref, |iri| RawAtom::Iri(iri.to_owned())),
        map(
            separated_pair(identifier, char(':'), identifier),
            |(prefix, local)| RawAtom::QName {
                prefix: prefix.to_owned(),
                local: local.to_owned(),
            },
        ),
    ))(input)
}

fn iri_ref(input: &str) -> ParseResult<'_, &str> {
    delimited(char('<'), is_not(">"), char('>'))(input)
}

fn string_literal(input: &str) -> ParseResult<'_, &str> {
    delimited(char('"'), is_not("\""), char('"'))(input)
}

fn identifier(input: &str) -> ParseResult<'_, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0_count(alt((alphanumeric1, tag("_"), tag("-")))),
    ))(input)
}

fn sp(input: &str) -> ParseResult<'_, ()> {
    value(
        (),
        many0_count(alt((value((), multispace1), block_comment))),
    )(input)
}

fn block_comment(input: &str) -> ParseResult<'_, ()> {
    value((), tuple((tag("/*"), take_until("*/"), tag("*/"))))(input)
}
