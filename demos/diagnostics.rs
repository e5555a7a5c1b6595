//! Demonstrate structured diagnostics for broken input.

use portugol_lexer::DiagnosticKind;

fn main() {
    let input = "\
variavel total = 2.3.4;
variavel 1nome = \"aberta
se (total @ 10) { /* nunca fecha
";

    let analysis = portugol_lexer::tokenize(input);

    println!("Tokens: {}", analysis.tokens.len());
    println!("Diagnostics: {}", analysis.diagnostics.len());
    println!();

    for diagnostic in &analysis.diagnostics {
        println!("{diagnostic}");
        match &diagnostic.kind {
            DiagnosticKind::InvalidCharacter(ch) => {
                println!("  offending character: {ch:?}");
            }
            DiagnosticKind::MalformedIdentifier { fragment }
            | DiagnosticKind::MalformedNumber { fragment }
            | DiagnosticKind::UnterminatedString { fragment } => {
                println!("  offending run: {fragment:?}");
            }
            DiagnosticKind::IdentifierTooLong { fragment }
            | DiagnosticKind::NumberTooLong { fragment } => {
                println!("  overlong run: {fragment:?}");
            }
            DiagnosticKind::UnclosedComment => {
                println!("  comment still open at end of input");
            }
        }
    }
}
