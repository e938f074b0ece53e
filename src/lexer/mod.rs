//! Lexical analysis for nanocc.
//!
//! The [`Scanner`] turns a source buffer into a stream of [`Token`]s on
//! demand, with one-token lookahead (`peek`/`next`). It never halts on
//! malformed input: unrecognized bytes become [`TokenKind::Unknown`] and
//! scanning continues, leaving error recovery to the parser.

use crate::token::{Token, TokenKind};

pub struct Scanner<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    line: usize,
    column: usize,
    lookahead: Option<Token<'a>>,
}

impl<'a> Scanner<'a> {
    /// Creates a new `Scanner` over the given source buffer.
    ///
    /// The scanner starts at the beginning of `source` with line and
    /// column numbers initialized to 1. No lookahead token is produced
    /// yet; the first call to [`peek`](Scanner::peek) or
    /// [`next`](Scanner::next) scans it on demand.
    ///
    /// # Arguments
    ///
    /// * `source` - The source text to tokenize.
    ///
    /// # Returns
    ///
    /// A new `Scanner` instance ready to scan `source`.
    pub fn new(source: &'a str) -> Self {
        Scanner {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            line: 1,
            column: 1,
            lookahead: None,
        }
    }

    /// Returns the token that [`next`](Scanner::next) would return, without
    /// advancing the scanner.
    ///
    /// The result is cached, so repeated calls to `peek` between calls to
    /// `next` re-scan nothing.
    ///
    /// # Returns
    ///
    /// The next [`Token`] in the source, which may be [`TokenKind::Eof`].
    pub fn peek(&mut self) -> Token<'a> {
        if self.lookahead.is_none() {
            self.lookahead = Some(self.scan_token());
        }
        self.lookahead
            .expect("peek: lookahead was just populated above")
    }

    /// Returns the next token and advances the scanner past it.
    ///
    /// Skips any intervening whitespace and comments first. Never halts on
    /// malformed input: unrecognized bytes come back as
    /// [`TokenKind::Unknown`] rather than an error.
    ///
    /// # Returns
    ///
    /// The next [`Token`] in the source. Once the source is exhausted,
    /// repeated calls keep returning [`TokenKind::Eof`] at the same
    /// position.
    pub fn next(&mut self) -> Token<'a> {
        if let Some(token) = self.lookahead.take() {
            return token;
        }
        self.scan_token()
    }

    fn current(&self) -> u8 {
        *self.bytes.get(self.pos).unwrap_or(&0)
    }

    fn at(&self, offset: usize) -> u8 {
        *self.bytes.get(self.pos + offset).unwrap_or(&0)
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        let c = self.bytes[self.pos];
        self.pos += 1;
        if c == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.current() {
                b' ' | b'\t' | b'\r' | b'\n' => self.advance(),
                b'/' if self.at(1) == b'/' => {
                    while !self.is_eof() && self.current() != b'\n' {
                        self.advance();
                    }
                }
                b'/' if self.at(1) == b'*' => {
                    self.advance();
                    self.advance();
                    loop {
                        if self.is_eof() {
                            break;
                        }
                        if self.current() == b'*' && self.at(1) == b'/' {
                            self.advance();
                            self.advance();
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn scan_token(&mut self) -> Token<'a> {
        self.skip_whitespace_and_comments();

        let start = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        if self.is_eof() {
            return self.make_token(TokenKind::Eof, start, start_line, start_column);
        }

        let c = self.current();

        if is_identifier_start(c) {
            return self.scan_identifier(start, start_line, start_column);
        }
        if c.is_ascii_digit() {
            return self.scan_number(start, start_line, start_column);
        }
        if c == b'"' {
            return self.scan_string(start, start_line, start_column);
        }

        self.advance();
        let kind = match c {
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b';' => TokenKind::Semicolon,
            b',' => TokenKind::Comma,
            b'*' => TokenKind::Star,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'/' => TokenKind::Slash,
            b'=' => {
                if self.current() == b'=' {
                    self.advance();
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                }
            }
            _ => TokenKind::Unknown,
        };
        self.make_token(kind, start, start_line, start_column)
    }

    fn scan_identifier(&mut self, start: usize, line: usize, column: usize) -> Token<'a> {
        while is_identifier_part(self.current()) {
            self.advance();
        }
        let lexeme = &self.source[start..self.pos];
        let kind = TokenKind::keyword_or_identifier(lexeme);
        Token::new(kind, lexeme, line, column)
    }

    fn scan_number(&mut self, start: usize, line: usize, column: usize) -> Token<'a> {
        while self.current().is_ascii_digit() {
            self.advance();
        }
        if self.current() == b'.' && self.at(1).is_ascii_digit() {
            self.advance();
            while self.current().is_ascii_digit() {
                self.advance();
            }
        }
        self.make_token(TokenKind::Number, start, line, column)
    }

    fn scan_string(&mut self, start: usize, line: usize, column: usize) -> Token<'a> {
        self.advance(); // opening quote
        loop {
            if self.is_eof() {
                break;
            }
            if self.current() == b'"' {
                self.advance();
                break;
            }
            if self.current() == b'\\' && !self.is_eof_at(1) {
                self.advance();
            }
            self.advance();
        }
        self.make_token(TokenKind::Str, start, line, column)
    }

    fn is_eof_at(&self, offset: usize) -> bool {
        self.pos + offset >= self.bytes.len()
    }

    fn make_token(&self, kind: TokenKind, start: usize, line: usize, column: usize) -> Token<'a> {
        Token::new(kind, &self.source[start..self.pos], line, column)
    }
}

fn is_identifier_start(c: u8) -> bool {
    c == b'_' || c.is_ascii_alphabetic()
}

fn is_identifier_part(c: u8) -> bool {
    c == b'_' || c.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests;
