//! Recursive-descent parser for nanocc.
//!
//! Builds a [`TranslationUnit`] from a source buffer with one token of
//! lookahead pulled lazily from the [`Scanner`]. On the first syntax
//! error, `expect` records a single diagnostic line and flips
//! [`ParserStatus`] to `Error`; every constructor downstream checks the
//! status (via `?` on the `Option`-returning helpers) before doing
//! further work, so a failed parse unwinds to a partial-but-safe
//! `TranslationUnit` rather than panicking or leaving dangling state.

mod error;

pub use error::ParserStatus;

use crate::ast::{BinaryOp, Block, Expr, FunctionDecl, Stmt, TranslationUnit, UnaryOp};
use crate::lexer::Scanner;
use crate::token::{Token, TokenKind};

pub struct Parser<'a> {
    scanner: Scanner<'a>,
    lookahead: Token<'a>,
    status: ParserStatus,
    diagnostic: Option<String>,
}

impl<'a> Parser<'a> {
    /// Creates a new `Parser` over the given source buffer.
    ///
    /// Pulls the first token from a freshly constructed [`Scanner`] to
    /// prime one-token lookahead; the parser starts in [`ParserStatus::Ok`]
    /// with no diagnostic recorded.
    ///
    /// # Arguments
    ///
    /// * `source` - The source text to parse.
    ///
    /// # Returns
    ///
    /// A new `Parser` instance ready to parse `source`.
    pub fn new(source: &'a str) -> Self {
        let mut scanner = Scanner::new(source);
        let lookahead = scanner.next();
        Parser {
            scanner,
            lookahead,
            status: ParserStatus::Ok,
            diagnostic: None,
        }
    }

    /// Parses a whole translation unit.
    ///
    /// Always returns a tree, even on failure: on the first syntax error
    /// parsing stops and the tree returned is the partial one built up to
    /// the failure point, safe to drop like any other value.
    ///
    /// # Returns
    ///
    /// The parsed [`TranslationUnit`]. Check [`status`](Parser::status)
    /// afterward to tell a complete parse from a partial one.
    pub fn parse(&mut self) -> TranslationUnit<'a> {
        let mut unit = TranslationUnit::default();
        while !self.failed() && !self.check(TokenKind::Eof) {
            match self.parse_function_decl() {
                Some(function) => unit.functions.push(function),
                None => break,
            }
        }
        unit
    }

    /// Whether parsing has hit a syntax error yet.
    ///
    /// # Returns
    ///
    /// [`ParserStatus::Error`] once the first syntax error has been
    /// recorded, [`ParserStatus::Ok`] otherwise.
    pub fn status(&self) -> ParserStatus {
        self.status
    }

    /// The first (and only) diagnostic line produced, if parsing failed.
    ///
    /// # Returns
    ///
    /// `Some(message)` in the form `"Parser error at line L col C: ..."`
    /// after the first syntax error; `None` if parsing has not failed.
    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    fn failed(&self) -> bool {
        self.status == ParserStatus::Error
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.lookahead.kind == kind
    }

    fn advance(&mut self) -> Token<'a> {
        let current = self.lookahead;
        self.lookahead = self.scanner.next();
        current
    }

    fn error_at(&mut self, token: Token<'a>, message: String) {
        if self.diagnostic.is_none() {
            self.diagnostic = Some(format!(
                "Parser error at line {} col {}: {}",
                token.line, token.column, message
            ));
        }
        self.status = ParserStatus::Error;
    }

    fn expect(&mut self, kind: TokenKind, label: &str) -> Option<Token<'a>> {
        if self.failed() {
            return None;
        }
        if self.check(kind) {
            Some(self.advance())
        } else {
            let token = self.lookahead;
            self.error_at(token, format!("expected {label}"));
            None
        }
    }

    fn parse_function_decl(&mut self) -> Option<FunctionDecl<'a>> {
        self.expect(TokenKind::KwInt, "'int'")?;
        let name = self.expect(TokenKind::Identifier, "function name")?;
        self.expect(TokenKind::LParen, "'('")?;
        self.expect(TokenKind::RParen, "')'")?;
        let body = self.parse_block()?;
        Some(FunctionDecl {
            name: name.lexeme,
            body,
        })
    }

    fn parse_block(&mut self) -> Option<Block<'a>> {
        self.expect(TokenKind::LBrace, "'{'")?;
        let mut statements = Vec::new();
        while !self.failed() && !self.check(TokenKind::RBrace) && !self.check(TokenKind::Eof) {
            statements.push(self.parse_statement()?);
        }
        self.expect(TokenKind::RBrace, "'}'")?;
        Some(Block { statements })
    }

    fn parse_statement(&mut self) -> Option<Stmt<'a>> {
        match self.lookahead.kind {
            TokenKind::KwInt => self.parse_var_decl(),
            TokenKind::KwReturn => self.parse_return_stmt(),
            TokenKind::LBrace => self.parse_block().map(Stmt::Block),
            TokenKind::Identifier => self.parse_assignment(),
            _ => self.unexpected_token(),
        }
    }

    fn parse_var_decl(&mut self) -> Option<Stmt<'a>> {
        self.expect(TokenKind::KwInt, "'int'")?;
        let name = self.expect(TokenKind::Identifier, "variable name")?;
        let init = if self.check(TokenKind::Equal) {
            self.advance();
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.expect(TokenKind::Semicolon, "';'")?;
        Some(Stmt::VarDecl {
            name: name.lexeme,
            init,
        })
    }

    fn parse_return_stmt(&mut self) -> Option<Stmt<'a>> {
        self.expect(TokenKind::KwReturn, "'return'")?;
        let expr = self.parse_expression()?;
        self.expect(TokenKind::Semicolon, "';'")?;
        Some(Stmt::Return(expr))
    }

    fn parse_assignment(&mut self) -> Option<Stmt<'a>> {
        let target = self.expect(TokenKind::Identifier, "identifier")?;
        self.expect(TokenKind::Equal, "'='")?;
        let value = self.parse_expression()?;
        self.expect(TokenKind::Semicolon, "';'")?;
        Some(Stmt::Assignment {
            target: target.lexeme,
            value,
        })
    }

    /// `unary (('+'|'-') unary)*` — a left-folding loop, so `a - b - c`
    /// parses as `(a - b) - c`.
    fn parse_expression(&mut self) -> Option<Expr<'a>> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.lookahead.kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Some(left)
    }

    /// `('+'|'-') unary | primary` — right-associative via recursion.
    fn parse_unary(&mut self) -> Option<Expr<'a>> {
        let op = match self.lookahead.kind {
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Minus => UnaryOp::Minus,
            _ => return self.parse_primary(),
        };
        self.advance();
        let operand = self.parse_unary()?;
        Some(Expr::Unary {
            op,
            operand: Box::new(operand),
        })
    }

    fn parse_primary(&mut self) -> Option<Expr<'a>> {
        match self.lookahead.kind {
            TokenKind::Number => Some(Expr::NumberLiteral(self.advance().lexeme)),
            TokenKind::Identifier => Some(Expr::Identifier(self.advance().lexeme)),
            TokenKind::LParen => {
                self.advance();
                // Parentheses are not their own AST node — the inner
                // expression is returned directly.
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RParen, "')'")?;
                Some(inner)
            }
            _ => self.unexpected_token(),
        }
    }

    fn unexpected_token<T>(&mut self) -> Option<T> {
        let token = self.lookahead;
        self.error_at(token, format!("unexpected token {}", token.kind.describe()));
        None
    }
}
