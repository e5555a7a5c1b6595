#![allow(dead_code)]

use portugol_lexer::{Analysis, Token, TokenKind, tokenize};

/// Tokenize and assert the run produced no diagnostics.
pub fn lex_clean(input: &str) -> Vec<Token> {
    let analysis = tokenize(input);
    assert!(
        analysis.is_clean(),
        "expected no diagnostics for {input:?}:\n{}",
        render(&analysis)
    );
    analysis.tokens
}

/// Rendered diagnostic lines for one input, in discovery order.
pub fn messages(input: &str) -> Vec<String> {
    tokenize(input)
        .diagnostics
        .iter()
        .map(ToString::to_string)
        .collect()
}

pub fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

pub fn lexemes(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.lexeme.as_str()).collect()
}

fn render(analysis: &Analysis) -> String {
    analysis
        .diagnostics
        .iter()
        .map(|d| format!("  {d}\n"))
        .collect()
}
