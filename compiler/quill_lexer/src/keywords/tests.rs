use super::is_keyword;

#[test]
fn all_reserved_words_are_keywords() {
    let reserved = [
        "if", "else", "while", "for", "return", "int", "string", "bool", "class", "void",
    ];
    for word in reserved {
        assert!(is_keyword(word), "{word} should be reserved");
    }
}

#[test]
fn near_misses_are_not_keywords() {
    for word in ["ifx", "If", "IF", "in", "integer", "classy", "returns", "voi"] {
        assert!(!is_keyword(word), "{word} should not be reserved");
    }
}

#[test]
fn length_guard_rejects_out_of_range() {
    assert!(!is_keyword(""));
    assert!(!is_keyword("a"));
    assert!(!is_keyword("abcdefg"));
}
