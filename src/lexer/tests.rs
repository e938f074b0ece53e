use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    let mut scanner = Scanner::new(source);
    let mut out = Vec::new();
    loop {
        let token = scanner.next();
        let done = token.kind == TokenKind::Eof;
        out.push(token.kind);
        if done {
            break;
        }
    }
    out
}

#[test]
fn test_empty_source_is_a_single_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn test_skips_whitespace_and_line_comments() {
    let tokens = kinds("  int // a comment\n  x ;");
    assert_eq!(
        tokens,
        vec![
            TokenKind::KwInt,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_block_comment_is_consumed() {
    let tokens = kinds("int /* skip\nme */ x;");
    assert_eq!(
        tokens,
        vec![
            TokenKind::KwInt,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_unterminated_block_comment_reaches_eof_cleanly() {
    assert_eq!(kinds("int x /* never closes"), vec![TokenKind::KwInt, TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn test_keywords_are_recognized() {
    assert_eq!(
        kinds("int return if else while"),
        vec![
            TokenKind::KwInt,
            TokenKind::KwReturn,
            TokenKind::KwIf,
            TokenKind::KwElse,
            TokenKind::KwWhile,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_identifier_continuation_allows_digits_and_underscore() {
    let mut scanner = Scanner::new("_abc123 return_value");
    let first = scanner.next();
    assert_eq!(first.kind, TokenKind::Identifier);
    assert_eq!(first.lexeme, "_abc123");
    let second = scanner.next();
    assert_eq!(second.kind, TokenKind::Identifier);
    assert_eq!(second.lexeme, "return_value");
}

#[test]
fn test_number_literal_with_fractional_part() {
    let mut scanner = Scanner::new("42 3.14 7.");
    assert_eq!(scanner.next().lexeme, "42");
    assert_eq!(scanner.next().lexeme, "3.14");
    // '7.' has no digit after the dot, so the dot is not consumed as part
    // of the number.
    let seven = scanner.next();
    assert_eq!(seven.lexeme, "7");
    assert_eq!(scanner.next().kind, TokenKind::Unknown); // the lone '.'
}

#[test]
fn test_double_equal_is_one_token_single_equal_is_another() {
    let mut scanner = Scanner::new("= ==");
    assert_eq!(scanner.next().kind, TokenKind::Equal);
    assert_eq!(scanner.next().kind, TokenKind::EqualEqual);
}

#[test]
fn test_slash_is_not_consumed_as_comment_start_without_second_slash_or_star() {
    let mut scanner = Scanner::new("a / b");
    scanner.next();
    assert_eq!(scanner.next().kind, TokenKind::Slash);
}

#[test]
fn test_string_literal_includes_both_quotes() {
    let mut scanner = Scanner::new(r#""hello\n""#);
    let token = scanner.next();
    assert_eq!(token.kind, TokenKind::Str);
    assert_eq!(token.lexeme, r#""hello\n""#);
}

#[test]
fn test_unterminated_string_still_produces_a_token() {
    let mut scanner = Scanner::new(r#""never closes"#);
    let token = scanner.next();
    assert_eq!(token.kind, TokenKind::Str);
    assert_eq!(token.lexeme, r#""never closes"#);
}

#[test]
fn test_unknown_byte_still_advances() {
    let mut scanner = Scanner::new("@ x");
    let first = scanner.next();
    assert_eq!(first.kind, TokenKind::Unknown);
    assert_eq!(first.lexeme, "@");
    assert_eq!(scanner.next().kind, TokenKind::Identifier);
}

#[test]
fn test_eof_is_produced_repeatedly_at_end_of_input() {
    let mut scanner = Scanner::new("x");
    scanner.next();
    let a = scanner.next();
    let b = scanner.next();
    assert_eq!(a.kind, TokenKind::Eof);
    assert_eq!(b.kind, TokenKind::Eof);
    assert_eq!(a.line, b.line);
    assert_eq!(a.column, b.column);
}

#[test]
fn test_peek_does_not_advance() {
    let mut scanner = Scanner::new("int x");
    let peeked = scanner.peek();
    assert_eq!(peeked.kind, TokenKind::KwInt);
    let next = scanner.next();
    assert_eq!(next.kind, TokenKind::KwInt);
    assert_eq!(scanner.next().kind, TokenKind::Identifier);
}

#[test]
fn test_line_and_column_tracking_across_newlines() {
    let mut scanner = Scanner::new("int\nx");
    let first = scanner.next();
    assert_eq!((first.line, first.column), (1, 1));
    let second = scanner.next();
    assert_eq!((second.line, second.column), (2, 1));
}

#[test]
fn test_scanner_is_deterministic_across_repeated_runs() {
    let source = "int main() { return 20 + 22 - 2; }";
    let collect = |src: &str| {
        let mut scanner = Scanner::new(src);
        let mut tokens = Vec::new();
        loop {
            let t = scanner.next();
            let done = t.kind == TokenKind::Eof;
            tokens.push((t.kind, t.lexeme.to_string(), t.line, t.column));
            if done {
                break;
            }
        }
        tokens
    };
    assert_eq!(collect(source), collect(source));
}
