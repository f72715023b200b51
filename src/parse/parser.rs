use super::{ast::RollRequest, lexer::*};
use crate::common::*;
use logos_iter::LogosIter;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

type PResult<T = RollRequest> = Result<T, ParseError>;

/// The most dice a single term may roll.
pub const MAX_DICE: UInt = 1000;

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("error at position {} ({slice:?}): {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Range<usize>,
    pub slice: String,
}

#[derive(Debug, PartialEq)]
pub enum ParseErrorKind {
    UnexpectedToken {
        found: Option<TokenKind>,
        expected: Vec<TokenKind>,
    },
    UnexpectedString {
        expected: Vec<TokenKind>,
    },
    TrailingInput,
    IntegerOverflow,
    ZeroSides,
    TooManyDice(UInt),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken {
                found: Some(found),
                expected,
            } => {
                write!(f, "unexpected token: found {}, expected ", found)?;
                fmt_expected(expected, f)
            }
            Self::UnexpectedToken {
                found: None,
                expected,
            } => {
                write!(f, "unexpected end of input, expected ")?;
                fmt_expected(expected, f)
            }
            Self::UnexpectedString { expected } => {
                write!(f, "expected ")?;
                fmt_expected(expected, f)
            }
            Self::TrailingInput => write!(f, "unexpected input after the roll"),
            Self::IntegerOverflow => write!(f, "number is too large"),
            Self::ZeroSides => write!(f, "dice must have at least one side"),
            Self::TooManyDice(n) => write!(f, "cannot roll {} dice, the limit is {}", n, MAX_DICE),
        }
    }
}

fn fmt_expected(expected: &[TokenKind], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let len = expected.len();

    if expected.is_empty() {
        Ok(())
    } else if len == 1 {
        f.write_str(expected[0].as_str())
    } else if len == 2 {
        write!(f, "{} or {}", expected[0], expected[1])
    } else {
        for exp in &expected[..len - 1] {
            write!(f, "{}, ", exp)?;
        }
        write!(f, "or {}", expected[len - 1])
    }
}

/// The digits of a consumed integer token and where they sit in the source.
struct Literal<'a> {
    digits: &'a str,
    span: Range<usize>,
}

impl Literal<'_> {
    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            span: self.span.clone(),
            slice: self.digits.to_string(),
        }
    }

    fn value<T: FromStr>(&self) -> PResult<T> {
        self.digits
            .parse()
            .map_err(|_| self.error(ParseErrorKind::IntegerOverflow))
    }
}

pub struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            source: s,
            lexer: lexer(s),
        }
    }

    pub fn parse(mut self) -> PResult {
        let roll = self.parse_roll()?;
        if self.lexer.peek().is_some() {
            self.advance();
            return self.error(ParseErrorKind::TrailingInput);
        }
        Ok(roll)
    }

    fn advance(&mut self) -> Option<TokenKind> {
        self.lexer.next()
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.lexer.peek().map_or(false, |&peeked| peeked == kind)
    }

    fn matches_any(&mut self, options: &[TokenKind]) -> bool {
        self.lexer
            .peek()
            .map_or(false, |peeked| options.contains(peeked))
    }

    fn consume(&mut self, expected: TokenKind) -> PResult<()> {
        if self.matches(expected) {
            self.advance();
            Ok(())
        } else {
            self.unexpected_token(vec![expected])
        }
    }

    fn error<T>(&mut self, kind: ParseErrorKind) -> PResult<T> {
        Err(ParseError {
            kind,
            span: self.lexer.span(),
            slice: self.lexer.slice().to_string(),
        })
    }

    fn unexpected_token<T>(&mut self, expected: Vec<TokenKind>) -> PResult<T> {
        match self.advance() {
            None => {
                let end = self.source.len();
                Err(ParseError {
                    kind: ParseErrorKind::UnexpectedToken {
                        found: None,
                        expected,
                    },
                    span: end..end,
                    slice: String::new(),
                })
            }
            Some(TokenKind::Error) => self.error(ParseErrorKind::UnexpectedString { expected }),
            found => self.error(ParseErrorKind::UnexpectedToken { found, expected }),
        }
    }

    fn parse_roll(&mut self) -> PResult {
        match self.lexer.peek().copied() {
            Some(TokenKind::Die) => self.parse_dice(1),
            Some(TokenKind::Integer) => {
                let literal = self.integer()?;
                if !self.matches(TokenKind::Die) {
                    return literal.value().map(RollRequest::modifier_only);
                }
                let count = literal.value()?;
                if count > MAX_DICE {
                    return Err(literal.error(ParseErrorKind::TooManyDice(count)));
                }
                self.parse_dice(count)
            }
            Some(TokenKind::Plus | TokenKind::Minus) => {
                self.parse_signed().map(RollRequest::modifier_only)
            }
            _ => self.unexpected_token(vec![
                TokenKind::Integer,
                TokenKind::Die,
                TokenKind::Plus,
                TokenKind::Minus,
            ]),
        }
    }

    fn parse_dice(&mut self, count: UInt) -> PResult {
        self.consume(TokenKind::Die)?;
        let literal = self.integer()?;
        let sides = match NonZeroUInt::new(literal.value()?) {
            Some(sides) => sides,
            None => return Err(literal.error(ParseErrorKind::ZeroSides)),
        };
        let keep = self.parse_keep()?;
        let modifier = if self.matches_any(TokenKind::SIGNS) {
            self.parse_signed()?
        } else {
            0
        };

        Ok(RollRequest::dice(count, sides)
            .with_keep(keep)
            .with_modifier(modifier))
    }

    fn parse_keep(&mut self) -> PResult<KeepMode> {
        let keep = match self.lexer.peek().copied() {
            Some(TokenKind::KeepHighest) => KeepMode::Highest,
            Some(TokenKind::KeepLowest) => KeepMode::Lowest,
            _ => return Ok(KeepMode::None),
        };
        self.advance();
        // The count is required, but only a single die is ever kept.
        self.integer()?.value::<UInt>()?;
        Ok(keep)
    }

    fn parse_signed(&mut self) -> PResult<Int> {
        let negative = match self.lexer.peek().copied() {
            Some(TokenKind::Minus) => true,
            Some(TokenKind::Plus) => false,
            _ => return self.unexpected_token(TokenKind::SIGNS.to_vec()),
        };
        self.advance();
        let magnitude: Int = self.integer()?.value()?;
        Ok(if negative { -magnitude } else { magnitude })
    }

    fn integer(&mut self) -> PResult<Literal<'a>> {
        self.consume(TokenKind::Integer)?;
        let span = self.lexer.span();
        let source = self.source;
        Ok(Literal {
            digits: &source[span.clone()],
            span,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> PResult {
        Parser::new(s).parse()
    }

    fn dice(count: UInt, sides: UInt) -> RollRequest {
        RollRequest::dice(count, NonZeroUInt::new(sides).unwrap())
    }

    fn check(s: &str, expected: RollRequest) {
        assert_eq!(parse(s).unwrap(), expected);
    }

    fn check_err(s: &str, expected: ParseErrorKind) {
        assert_eq!(parse(s).unwrap_err().kind, expected);
    }

    #[test]
    fn test_parse_dice() {
        check("1d20", dice(1, 20));
        check("d4", dice(1, 4));
        check("2d6+3", dice(2, 6).with_modifier(3));
        check("d4-1", dice(1, 4).with_modifier(-1));
        check("0d6+2", dice(0, 6).with_modifier(2));
    }

    #[test]
    fn test_parse_keep() {
        check("2d20kh1", dice(2, 20).with_keep(KeepMode::Highest));
        check("2d20kl1+5", dice(2, 20).with_keep(KeepMode::Lowest).with_modifier(5));
        check("4d6kh3", dice(4, 6).with_keep(KeepMode::Highest));
        assert_eq!(parse("1d20kh1").unwrap().keep(), KeepMode::None);
        assert_eq!(parse("d20kl1").unwrap().keep(), KeepMode::None);
        assert_eq!(parse("0d20kh1").unwrap().keep(), KeepMode::None);
    }

    #[test]
    fn test_parse_modifier() {
        check("+3", RollRequest::modifier_only(3));
        check("5", RollRequest::modifier_only(5));
        check("-2", RollRequest::modifier_only(-2));
        check("-0", RollRequest::modifier_only(0));
        check("5000000000", RollRequest::modifier_only(5_000_000_000));
        check("-5000000000", RollRequest::modifier_only(-5_000_000_000));
        check("1d6+5000000000", dice(1, 6).with_modifier(5_000_000_000));
        check_err("99999999999999999999", ParseErrorKind::IntegerOverflow);
    }

    #[test]
    fn test_parse_errors() {
        check_err(
            "",
            ParseErrorKind::UnexpectedToken {
                found: None,
                expected: vec![TokenKind::Integer, TokenKind::Die, TokenKind::Plus, TokenKind::Minus],
            },
        );
        check_err(
            "d",
            ParseErrorKind::UnexpectedToken {
                found: None,
                expected: vec![TokenKind::Integer],
            },
        );
        check_err(
            "2dx",
            ParseErrorKind::UnexpectedString {
                expected: vec![TokenKind::Integer],
            },
        );
        check_err(
            "2d20kh",
            ParseErrorKind::UnexpectedToken {
                found: None,
                expected: vec![TokenKind::Integer],
            },
        );
        check_err("2d0", ParseErrorKind::ZeroSides);
        check_err("2d6+3+1", ParseErrorKind::TrailingInput);
        check_err("1d20-", ParseErrorKind::UnexpectedToken { found: None, expected: vec![TokenKind::Integer] });
        check_err("1001d6", ParseErrorKind::TooManyDice(1001));
        check_err("1d99999999999", ParseErrorKind::IntegerOverflow);
        check_err("5000000000d6", ParseErrorKind::IntegerOverflow);
        check_err("2d20kh5000000000", ParseErrorKind::IntegerOverflow);
        assert!(parse("abc").is_err());
        assert!(parse("--3").is_err());
        assert!(parse("1d20+").is_err());
    }

    #[test]
    fn test_error_position() {
        let err = parse("2d6x").unwrap_err();
        assert_eq!(err.span.start, 3);
        assert_eq!(err.slice, "x");
        assert_eq!(parse("d").unwrap_err().span, 1..1);
        assert_eq!(parse("1001d6").unwrap_err().span, 0..4);
        assert_eq!(parse("1d0").unwrap_err().span, 2..3);
    }

    #[test]
    fn test_error_display() {
        let err = parse("2d0").unwrap_err();
        assert_eq!(err.to_string(), "error at position 2 (\"0\"): dice must have at least one side");
        let err = parse("+").unwrap_err();
        assert_eq!(err.to_string(), "error at position 1 (\"\"): unexpected end of input, expected <integer>");
    }
}
