//! Token kind enumeration.

/// The kind of a lexical token.
///
/// Keywords are recognized after an identifier has been scanned in full:
/// the scanner always takes the longest identifier match and then checks
/// it against the keyword spellings, so `returning` lexes as `Identifier`
/// rather than `KwReturn` followed by `Identifier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Eof,
    Identifier,
    Number,
    Str,

    KwInt,
    KwReturn,
    KwIf,
    KwElse,
    KwWhile,

    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
    Comma,
    Star,
    Plus,
    Minus,
    Slash,
    Equal,
    EqualEqual,

    /// A byte that matched none of the above; the scanner still advances
    /// past it and keeps going rather than halting.
    Unknown,
}

impl TokenKind {
    /// Looks up the keyword kind for an already-scanned identifier lexeme,
    /// falling back to `Identifier` when it isn't a reserved word.
    pub fn keyword_or_identifier(lexeme: &str) -> TokenKind {
        match lexeme {
            "int" => TokenKind::KwInt,
            "return" => TokenKind::KwReturn,
            "if" => TokenKind::KwIf,
            "else" => TokenKind::KwElse,
            "while" => TokenKind::KwWhile,
            _ => TokenKind::Identifier,
        }
    }

    /// A short human-readable name, used in parser diagnostics such as
    /// "unexpected token Semicolon".
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Eof => "end of input",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Str => "string",
            TokenKind::KwInt => "'int'",
            TokenKind::KwReturn => "'return'",
            TokenKind::KwIf => "'if'",
            TokenKind::KwElse => "'else'",
            TokenKind::KwWhile => "'while'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Semicolon => "';'",
            TokenKind::Comma => "','",
            TokenKind::Star => "'*'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Slash => "'/'",
            TokenKind::Equal => "'='",
            TokenKind::EqualEqual => "'=='",
            TokenKind::Unknown => "unrecognized byte",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes_all_keywords() {
        assert_eq!(TokenKind::keyword_or_identifier("int"), TokenKind::KwInt);
        assert_eq!(
            TokenKind::keyword_or_identifier("return"),
            TokenKind::KwReturn
        );
        assert_eq!(TokenKind::keyword_or_identifier("if"), TokenKind::KwIf);
        assert_eq!(TokenKind::keyword_or_identifier("else"), TokenKind::KwElse);
        assert_eq!(
            TokenKind::keyword_or_identifier("while"),
            TokenKind::KwWhile
        );
    }

    #[test]
    fn test_keyword_prefix_is_still_an_identifier() {
        assert_eq!(
            TokenKind::keyword_or_identifier("returning"),
            TokenKind::Identifier
        );
        assert_eq!(
            TokenKind::keyword_or_identifier("internal"),
            TokenKind::Identifier
        );
    }
}
