use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

/// Lexes notation that has already been lowercased and stripped of whitespace.
pub fn lexer(s: &str) -> Lexer<'_> {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    #[regex(r"[0-9]+")]
    Integer,

    #[token("d")]
    Die,

    #[token("kh")]
    KeepHighest,
    #[token("kl")]
    KeepLowest,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    #[error]
    Error,
}

impl TokenKind {
    pub const SIGNS: &'static [Self] = &[Self::Plus, Self::Minus];

    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;

        match self {
            Integer => "<integer>",
            Die => "'d'",
            KeepHighest => "'kh'",
            KeepLowest => "'kl'",
            Plus => "'+'",
            Minus => "'-'",
            Error => "<error>",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    fn kinds(s: &str) -> Vec<TokenKind> {
        TokenKind::lexer(s).collect()
    }

    #[test]
    fn test_lex_dice() {
        assert_eq!(kinds("2d20kh1+5"), vec![Integer, Die, Integer, KeepHighest, Integer, Plus, Integer]);
        assert_eq!(kinds("d4-1"), vec![Die, Integer, Minus, Integer]);
        assert_eq!(kinds("2d20kl1"), vec![Integer, Die, Integer, KeepLowest, Integer]);
    }

    #[test]
    fn test_lex_errors() {
        assert_eq!(kinds("2dx"), vec![Integer, Die, Error]);
        assert!(kinds("4d6k3").contains(&Error));
        assert!(kinds("1.5").contains(&Error));
    }
}
