use super::*;

#[test]
fn kind_names_match_dump_format() {
    assert_eq!(TokenKind::Identifier.name(), "IDENTIFIER");
    assert_eq!(TokenKind::StringLiteral.name(), "STRING_LITERAL");
    assert_eq!(TokenKind::Eof.name(), "EOF");
}

#[test]
fn display_renders_dump_line() {
    let tok = Token::new(TokenKind::Keyword, "if", 1, 5);
    assert_eq!(tok.to_string(), "Token(KEYWORD, 'if', line=1, column=5)");
}

#[test]
fn is_eof_only_for_eof() {
    assert!(Token::new(TokenKind::Eof, "", 3, 1).is_eof());
    assert!(!Token::new(TokenKind::Comma, ",", 3, 1).is_eof());
}
