// tests/parser_tests.rs

use dbquery::ast::{Aggregator, Composite, Element, Operator};
use dbquery::lexer::Lexer;
use dbquery::parser::{Parser, classify};
use dbquery::symbols::SymbolTable;
use dbquery::{QueryError, Session, TranslateOptions, Translator, parse};

/// Symbol table with `[[a]]`, `{1}`, `[[b]]`, `{2}` already extracted as
/// @@ELEM00..@@ELEM03.
fn extracted() -> SymbolTable {
    let mut symbols = SymbolTable::new("@@");
    symbols.bind(Element::Key("a".into()));
    symbols.bind(Element::Value("1".into()));
    symbols.bind(Element::Key("b".into()));
    symbols.bind(Element::Value("2".into()));
    symbols
}

fn resolve(working: &str, symbols: &mut SymbolTable) -> Result<Composite, QueryError> {
    Parser::new(Lexer::new(working), symbols)?.parse()
}

fn leaf(key: &str, op: Operator, value: &str) -> Element {
    Element::Composite(Composite::new(vec![
        Element::Key(key.into()),
        Element::Operator(op),
        Element::Value(value.into()),
    ]))
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_classify_every_operator() {
    let cases = [
        ("==", Operator::Eq),
        ("!=", Operator::Ne),
        ("<", Operator::Lt),
        (">", Operator::Gt),
        ("<=", Operator::Le),
        (">=", Operator::Ge),
        ("IN", Operator::In),
    ];
    for (token, expected) in cases {
        assert_eq!(classify(token).unwrap(), Element::Operator(expected), "Failed for: {}", token);
    }
}

#[test]
fn test_classify_aggregators() {
    assert_eq!(classify("AND").unwrap(), Element::Aggregator(Aggregator::And));
    assert_eq!(classify("OR").unwrap(), Element::Aggregator(Aggregator::Or));
}

#[test]
fn test_classify_is_case_sensitive() {
    for token in ["and", "or", "in", "=", "=>", "BETWEEN", "LIKE"] {
        assert!(
            matches!(classify(token), Err(QueryError::InvalidOperatorOrAggregator(_))),
            "Expected rejection for: {}",
            token
        );
    }
}

// ============================================================================
// Group resolution
// ============================================================================

#[test]
fn test_single_group() {
    let mut symbols = extracted();
    let root = resolve("(@@ELEM00 == @@ELEM01)", &mut symbols).unwrap();

    assert_eq!(
        root.elements,
        vec![
            Element::Key("a".into()),
            Element::Operator(Operator::Eq),
            Element::Value("1".into()),
        ]
    );
    // The operator and the group itself are bound.
    assert_eq!(symbols.len(), 6);
    assert_eq!(symbols.get("@@ELEM04"), Some(&Element::Operator(Operator::Eq)));
}

#[test]
fn test_redundant_parens_collapse() {
    let mut plain = extracted();
    let mut wrapped = extracted();
    let a = resolve("@@ELEM00 == @@ELEM01", &mut plain).unwrap();
    let b = resolve("(((@@ELEM00 == @@ELEM01)))", &mut wrapped).unwrap();

    assert_eq!(a, b);
    assert_eq!(plain.len(), wrapped.len());
}

#[test]
fn test_nested_groups() {
    let mut symbols = extracted();
    let root = resolve("(@@ELEM00 == @@ELEM01) OR (@@ELEM02 != @@ELEM03)", &mut symbols).unwrap();

    assert_eq!(
        root.elements,
        vec![
            leaf("a", Operator::Eq, "1"),
            Element::Aggregator(Aggregator::Or),
            leaf("b", Operator::Ne, "2"),
        ]
    );
    assert_eq!(root.depth(), 2);
}

#[test]
fn test_group_of_placeholders_only_is_wrapped() {
    let mut symbols = extracted();
    let root = resolve("(@@ELEM00 == @@ELEM01) (@@ELEM02 == @@ELEM03)", &mut symbols).unwrap();
    assert_eq!(root.len(), 2);
}

#[test]
fn test_unknown_word() {
    let mut symbols = extracted();
    let result = resolve("(@@ELEM00 LIKE @@ELEM01)", &mut symbols);
    assert!(matches!(result, Err(QueryError::InvalidOperatorOrAggregator(t)) if t == "LIKE"));

    // Looks like a placeholder but was never bound.
    let result = resolve("(@@ELEM00 == @@ELEM99)", &mut symbols);
    assert!(matches!(result, Err(QueryError::InvalidOperatorOrAggregator(t)) if t == "@@ELEM99"));
}

#[test]
fn test_empty_group() {
    let mut symbols = extracted();
    let result = resolve("(@@ELEM00 == @@ELEM01) AND ()", &mut symbols);
    assert!(matches!(result, Err(QueryError::InvalidSyntax(msg)) if msg.contains("empty group")));
}

#[test]
fn test_root_must_be_a_group() {
    let mut symbols = extracted();
    assert!(matches!(
        resolve("(@@ELEM00)", &mut symbols),
        Err(QueryError::IncompleteExpression(_))
    ));
    assert!(matches!(resolve("", &mut symbols), Err(QueryError::IncompleteExpression(_))));
}

#[test]
fn test_nesting_limit() {
    let mut symbols = extracted();
    let mut parser = Parser::new(Lexer::new("((@@ELEM00 == @@ELEM01))"), &mut symbols)
        .unwrap()
        .with_max_depth(1);
    assert!(matches!(parser.parse(), Err(QueryError::InvalidSyntax(_))));

    let mut symbols = extracted();
    let mut parser = Parser::new(Lexer::new("((@@ELEM00 == @@ELEM01))"), &mut symbols)
        .unwrap()
        .with_max_depth(2);
    assert!(parser.parse().is_ok());
}

// ============================================================================
// Sessions
// ============================================================================

#[test]
fn test_session_binds_every_element() {
    let mut session = Session::new(r#"[[year]] != {"2018"}"#, &TranslateOptions::default()).unwrap();
    session.parse(r#"[[year]] != {"2018"}"#).unwrap();

    // value, key, operator, group
    assert_eq!(session.symbols().len(), 4);
    assert_eq!(session.prefix(), "@@");
    assert_eq!(
        session.symbols().get("@@ELEM00"),
        Some(&Element::Value("\"2018\"".into()))
    );
    assert_eq!(session.symbols().get("@@ELEM01"), Some(&Element::Key("year".into())));
}

#[test]
fn test_session_resets_between_runs() {
    let expr = r#"([[a]] == {"1"}) OR ([[b]] == {"2"})"#;
    let mut session = Session::new(expr, &TranslateOptions::default()).unwrap();
    let first = session.parse(expr).unwrap();
    let bound = session.symbols().len();
    let second = session.parse(expr).unwrap();

    assert_eq!(first, second);
    assert_eq!(session.symbols().len(), bound);
}

#[test]
fn test_session_rejects_text_containing_its_prefix() {
    let mut session = Session::new("[[a]] == {\"1\"}", &TranslateOptions::default()).unwrap();
    let result = session.parse("[[a]] == {\"@@\"}");
    assert!(matches!(result, Err(QueryError::PrefixCollision { .. })));
}

#[test]
fn test_prefix_grows_when_input_uses_it() {
    let expr = r#"[[a]] == {"@@ and @@@"}"#;
    let mut session = Session::new(expr, &TranslateOptions::default()).unwrap();
    assert_eq!(session.prefix(), "@@@@");

    let root = session.parse(expr).unwrap();
    assert_eq!(root.elements[2], Element::Value("\"@@ and @@@\"".into()));
}

#[test]
fn test_parse_keeps_escaped_markers_in_values() {
    let root = parse(r#"[[artist]] == {"\"John\" Co\{ltt\}ran\[@@@ e\]"}"#).unwrap();
    assert_eq!(
        root.elements,
        vec![
            Element::Key("artist".into()),
            Element::Operator(Operator::Eq),
            Element::Value(r#""\"John\" Co\{ltt\}ran\[@@@ e\]""#.into()),
        ]
    );
}

#[test]
fn test_translator_max_depth_option() {
    let translator = Translator::new(TranslateOptions::default().with_max_depth(2)).unwrap();
    assert!(translator.parse(r#"(([[a]] == {"1"}))"#).is_ok());
    assert!(matches!(
        translator.parse(r#"((([[a]] == {"1"})))"#),
        Err(QueryError::InvalidSyntax(_))
    ));
}
