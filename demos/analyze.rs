//! Tokenize a small program and list what the lexer found.

fn main() {
    let input = "\
funcao soma(a: inteiro, b: inteiro) {
    retornar a + b;
}
";

    let analysis = portugol_lexer::tokenize(input);

    println!("Tokens: {}", analysis.tokens.len());
    for token in &analysis.tokens {
        println!("  {token}");
    }

    if analysis.is_clean() {
        println!("\nNo lexical problems.");
    } else {
        println!("\nDiagnostics:");
        for diagnostic in &analysis.diagnostics {
            println!("  {diagnostic}");
        }
    }
}
