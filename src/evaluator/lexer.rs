use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in an expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token<'a> {
    /// Numeric literal tokens such as `3.14`, `.5` or `42`.
    ///
    /// Any run of digits and points forms one literal; whether it is well
    /// formed (`1.2.3` is not) is decided when it is parsed.
    #[regex(r"[0-9.]+", |lex| lex.slice())]
    Number(&'a str),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// A token paired with the byte offset where it starts in the source.
pub type Spanned<'a> = (Token<'a>, usize);

/// Splits an expression into positioned tokens.
///
/// # Errors
/// Returns [`ParseError::InvalidCharacter`] for the first character that
/// cannot start a token.
///
/// # Example
/// ```
/// use quickcalc::evaluator::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(1.5 + 2)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::LParen, 0),
///                 (Token::Number("1.5"), 1),
///                 (Token::Plus, 5),
///                 (Token::Number("2"), 7),
///                 (Token::RParen, 8),]);
///
/// assert!(tokenize("2 % 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned<'_>>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(tok) = token {
            tokens.push((tok, position));
        } else {
            let character = source[position..].chars().next().unwrap_or_default();
            return Err(ParseError::InvalidCharacter { character, position });
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_points_form_one_literal() {
        let tokens = tokenize("1.2.3").unwrap();
        assert_eq!(tokens, vec![(Token::Number("1.2.3"), 0)]);
    }

    #[test]
    fn whitespace_is_dropped() {
        let tokens = tokenize(" \t3\n*\r4 ").unwrap();
        assert_eq!(tokens,
                   vec![(Token::Number("3"), 2), (Token::Star, 4), (Token::Number("4"), 6)]);
    }

    #[test]
    fn reports_first_invalid_character() {
        assert_eq!(tokenize("1 + x"),
                   Err(ParseError::InvalidCharacter { character: 'x',
                                                      position:  4, }));
        assert_eq!(tokenize("2 × 3"),
                   Err(ParseError::InvalidCharacter { character: '×',
                                                      position:  2, }));
    }

    #[test]
    fn empty_source_has_no_tokens() {
        assert_eq!(tokenize(""), Ok(Vec::new()));
        assert_eq!(tokenize("   "), Ok(Vec::new()));
    }
}
