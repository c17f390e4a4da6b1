use super::Lexer;
use crate::token::Token;
use lastbreach_util::Interner;
use std::rc::Rc;

fn lex_all(src: &str, interner: &mut Interner) -> Vec<Token> {
    let file: Rc<str> = Rc::from("test.lbx");
    let mut lexer = Lexer::new(src, file, interner);
    let mut out = Vec::new();
    loop {
        let tok = lexer.next_token().expect("lex error").tok;
        if tok == Token::Eof {
            break;
        }
        out.push(tok);
    }
    out
}

#[test]
fn punctuation_and_operators() {
    let mut interner = Interner::new();
    let toks = lex_all("{ } ( ) [ ] : ; , . .. = == != < <= > >=", &mut interner);
    assert_eq!(
        toks,
        vec![
            Token::LBrace,
            Token::RBrace,
            Token::LParen,
            Token::RParen,
            Token::LBracket,
            Token::RBracket,
            Token::Colon,
            Token::Semi,
            Token::Comma,
            Token::Dot,
            Token::DotDot,
            Token::Assign,
            Token::Eq,
            Token::Neq,
            Token::Lt,
            Token::Lte,
            Token::Gt,
            Token::Gte,
        ]
    );
}

#[test]
fn leading_dot_digit_is_a_number() {
    let mut interner = Interner::new();
    let toks = lex_all(".5", &mut interner);
    assert_eq!(toks, vec![Token::Number(0.5)]);
}

#[test]
fn dotdot_is_not_swallowed_by_number() {
    let mut interner = Interner::new();
    let toks = lex_all("1..5", &mut interner);
    assert_eq!(
        toks,
        vec![Token::Number(1.0), Token::DotDot, Token::Number(5.0)]
    );
}

#[test]
fn bare_dot_not_followed_by_digit_is_dot() {
    let mut interner = Interner::new();
    let toks = lex_all("char.name", &mut interner);
    match toks.as_slice() {
        [Token::Ident(_), Token::Dot, Token::Ident(_)] => {}
        other => panic!("unexpected tokens: {other:?}"),
    }
}

#[test]
fn numeric_suffixes() {
    let mut interner = Interner::new();
    let toks = lex_all("42% 3t 7.5", &mut interner);
    assert_eq!(
        toks,
        vec![Token::Percent(42.0), Token::Duration(3), Token::Number(7.5)]
    );
}

#[test]
fn keywords_lex_as_plain_idents() {
    let mut interner = Interner::new();
    let toks = lex_all("let task and or not true false", &mut interner);
    assert_eq!(toks.len(), 7);
    assert!(toks.iter().all(|t| matches!(t, Token::Ident(_))));
}

#[test]
fn string_escapes_are_preserved_raw() {
    let mut interner = Interner::new();
    let toks = lex_all(r#""a\nb\"c""#, &mut interner);
    match toks.as_slice() {
        [Token::Str(sym)] => {
            assert_eq!(interner.resolve(*sym), "a\\nb\\\"c");
        }
        other => panic!("unexpected tokens: {other:?}"),
    }
}

#[test]
fn line_comment_and_hash_comment_are_skipped() {
    let mut interner = Interner::new();
    let toks = lex_all("1 // comment\n2 # also a comment\n3", &mut interner);
    assert_eq!(
        toks,
        vec![Token::Number(1.0), Token::Number(2.0), Token::Number(3.0)]
    );
}

#[test]
fn block_comment_does_not_nest() {
    let mut interner = Interner::new();
    let toks = lex_all("1 /* a /* b */ c */ 2", &mut interner);
    // the first `*/` closes the comment, leaving `c */ 2` as live source.
    assert_eq!(toks.len(), 4);
    assert_eq!(toks[0], Token::Number(1.0));
}

#[test]
fn unterminated_block_comment_is_an_error() {
    let mut interner = Interner::new();
    let file: Rc<str> = Rc::from("test.lbx");
    let mut lexer = Lexer::new("1 /* never closed", file, &mut interner);
    assert_eq!(lexer.next_token().unwrap().tok, Token::Number(1.0));
    assert!(lexer.next_token().is_err());
}

#[test]
fn same_text_interns_to_same_symbol_across_tokens() {
    let mut interner = Interner::new();
    let toks = lex_all("station station", &mut interner);
    match toks.as_slice() {
        [Token::Ident(a), Token::Ident(b)] => assert_eq!(a, b),
        other => panic!("unexpected tokens: {other:?}"),
    }
}

proptest::proptest! {
    #[test]
    fn any_decimal_literal_round_trips_through_parse(int_part in 0u32..100000, frac_part in 0u32..1000) {
        let src = format!("{int_part}.{frac_part}");
        let mut interner = Interner::new();
        let toks = lex_all(&src, &mut interner);
        let expected: f64 = src.parse().unwrap();
        proptest::prop_assert_eq!(toks, vec![Token::Number(expected)]);
    }

    #[test]
    fn percent_suffix_preserves_the_numeric_value(value in 0u32..1000) {
        let src = format!("{value}%");
        let mut interner = Interner::new();
        let toks = lex_all(&src, &mut interner);
        proptest::prop_assert_eq!(toks, vec![Token::Percent(value as f64)]);
    }

    #[test]
    fn duration_suffix_rounds_to_nearest_tick(value in 0u32..1000) {
        let src = format!("{value}t");
        let mut interner = Interner::new();
        let toks = lex_all(&src, &mut interner);
        proptest::prop_assert_eq!(toks, vec![Token::Duration(value as i64)]);
    }

    #[test]
    fn arbitrary_identifiers_lex_to_a_single_ident_token(
        head in "[a-zA-Z_]",
        tail in "[a-zA-Z0-9_]{0,15}"
    ) {
        let src = format!("{head}{tail}");
        let mut interner = Interner::new();
        let toks = lex_all(&src, &mut interner);
        proptest::prop_assert_eq!(toks.len(), 1);
        proptest::prop_assert!(matches!(toks[0], Token::Ident(_)));
    }
}
