// Integration tests for comment removal, lexing and parsing

use tacfront::parser::comments::strip_comments;
use tacfront::parser::lexer::{Lexer, TokenKind};
use tacfront::parser::parse::{ParseError, Parser};
use tacfront::parser::tree::{NodeKind, ParseTreeNode};

fn parse(source: &str) -> Result<ParseTreeNode, ParseError> {
    Parser::from_source(source).parse_program()
}

fn count_kind(node: &ParseTreeNode, kind: &NodeKind) -> usize {
    let own = usize::from(&node.kind == kind);
    own + node
        .children
        .iter()
        .map(|child| count_kind(child, kind))
        .sum::<usize>()
}

#[test]
fn test_comment_free_text_is_unchanged() {
    let source = "int x = 1;\ncout << x;\n";
    assert_eq!(strip_comments(source), source);
}

#[test]
fn test_comments_removed_before_lexing() {
    let tokens = Lexer::new().tokenize(&strip_comments("a /* b */ c // d\ne"));
    let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
    assert_eq!(texts, vec!["a", "c", "e"]);
}

#[test]
fn test_token_kinds_for_a_statement() {
    let tokens = Lexer::new().tokenize("cout << \"hi\" << x1 + 42;");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::ReservedWord,
            TokenKind::ReservedWord,
            TokenKind::String,
            TokenKind::ReservedWord,
            TokenKind::Identifier,
            TokenKind::Symbol,
            TokenKind::Number,
            TokenKind::Symbol,
        ]
    );
}

#[test]
fn test_program_with_every_statement_form() {
    let source = "\
#include <iostream>
using namespace std;
int main() {
    int n = 3, m;
    float f;
    cin >> n >> m;
    for (m = 0;; n; m + 1) { continue; }
    while (n) { n = n - 1; if (m) break; }
    cout << n << \"done\";
    show(n, m);
    return n;
}
";
    let tree = parse(source).unwrap();

    assert_eq!(tree.kind, NodeKind::Root);
    assert_eq!(count_kind(&tree, &NodeKind::IncludeStatement), 1);
    assert_eq!(count_kind(&tree, &NodeKind::UsingNamespaceStatement), 1);
    assert_eq!(count_kind(&tree, &NodeKind::MainStatement), 1);
    assert_eq!(count_kind(&tree, &NodeKind::VariableDeclaration), 2);
    assert_eq!(count_kind(&tree, &NodeKind::InputStatement), 1);
    assert_eq!(count_kind(&tree, &NodeKind::ForStatement), 1);
    assert_eq!(count_kind(&tree, &NodeKind::WhileStatement), 1);
    assert_eq!(count_kind(&tree, &NodeKind::IfStatement), 1);
    assert_eq!(count_kind(&tree, &NodeKind::ContinueStatement), 1);
    assert_eq!(count_kind(&tree, &NodeKind::BreakStatement), 1);
    assert_eq!(count_kind(&tree, &NodeKind::OutputStatement), 1);
    assert_eq!(count_kind(&tree, &NodeKind::CallStatement), 1);
    assert_eq!(count_kind(&tree, &NodeKind::ReturnStatement), 1);
    assert_eq!(count_kind(&tree, &NodeKind::Assignment), 2);
}

#[test]
fn test_every_statement_is_wrapped() {
    let tree = parse("x = 1; y = 2;").unwrap();
    assert!(tree
        .children
        .iter()
        .all(|child| child.kind == NodeKind::Statement && child.children.len() == 1));
}

#[test]
fn test_empty_program_is_a_bare_root() {
    let tree = parse("// nothing here\n").unwrap();
    assert_eq!(tree.kind, NodeKind::Root);
    assert!(tree.children.is_empty());
}

#[test]
fn test_first_error_stops_parsing() {
    let err = parse("x = 1; y = ; z = 3;").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parse error at token 6: expected number, identifier, string or '(', found SYMBOL (;)"
    );
}

#[test]
fn test_missing_semicolon_at_end_of_input() {
    let err = parse("return 0").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEnd { .. }));
}

#[test]
fn test_tree_outline_matches_display() {
    let tree = parse("x = 1;").unwrap();
    let expected: String = tree.outline().iter().map(|line| format!("{line}\n")).collect();
    assert_eq!(tree.to_string(), expected);
    assert_eq!(tree.outline()[0], "root");
    assert_eq!(tree.outline()[1], "  statement");
}
