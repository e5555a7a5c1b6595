use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::token::{Token, TokenKind};

/// Reserved words, looked up once an identifier run has been cut.
/// Matching is exact and case-sensitive.
const KEYWORDS: &[(&str, TokenKind)] = &[
    ("variavel", TokenKind::VariableDecl),
    ("se", TokenKind::If),
    ("senao", TokenKind::Else),
    ("enquanto", TokenKind::While),
    ("para", TokenKind::For),
    ("funcao", TokenKind::Function),
    ("retornar", TokenKind::Return),
    ("inteiro", TokenKind::TypeName),
    ("decimal", TokenKind::TypeName),
    ("texto", TokenKind::TypeName),
    ("logico", TokenKind::TypeName),
];

/// Operator and punctuation table. Two-character forms precede their
/// one-character prefixes; the first match wins, so maximal munch falls
/// out of table order.
const OPERATORS: &[(&str, TokenKind)] = &[
    ("==", TokenKind::Equality),
    ("<=", TokenKind::LessEqual),
    (">=", TokenKind::GreaterEqual),
    ("=", TokenKind::Assign),
    ("<", TokenKind::LessThan),
    (">", TokenKind::GreaterThan),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("(", TokenKind::OpenParen),
    (")", TokenKind::CloseParen),
    ("{", TokenKind::OpenBrace),
    ("}", TokenKind::CloseBrace),
    (";", TokenKind::Semicolon),
    (",", TokenKind::Comma),
    (":", TokenKind::Colon),
];

/// Length limits applied to ill-formed runs. Well-formed tokens are never
/// length-checked.
const MAX_IDENTIFIER_LEN: usize = 20;
const MAX_NUMBER_LEN: usize = 10;

/// Result of one analysis run: tokens and diagnostics in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Analysis {
    /// `true` when the run produced no diagnostics.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Tokenize a source string into tokens and lexical diagnostics.
///
/// Never fails and never stops early: unrecognized input is reported
/// through the diagnostics sequence and scanning continues, so a single
/// call surfaces every lexical problem in the text.
#[must_use]
pub fn tokenize(input: &str) -> Analysis {
    Lexer::new(input).run()
}

struct Lexer {
    /// Source characters plus one trailing sentinel space, so the final
    /// run is always cut by whitespace.
    source: Vec<char>,
    pos: usize,
    line: usize,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl Lexer {
    fn new(input: &str) -> Self {
        let mut source: Vec<char> = input.chars().collect();
        source.push(' ');
        Self {
            source,
            pos: 0,
            line: 1,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    fn run(mut self) -> Analysis {
        while self.pos < self.source.len() {
            self.skip_whitespace();
            if self.pos >= self.source.len() {
                break;
            }

            let ch = self.source[self.pos];
            if ch == '/' && matches!(self.peek_at(1), Some('/' | '*')) {
                self.skip_comment();
            } else if ch.is_alphabetic() {
                self.scan_identifier();
            } else if ch.is_ascii_digit() {
                self.scan_number();
            } else if ch == '"' {
                self.scan_quoted_run();
            } else if !self.scan_operator() {
                // Invalid character: report it, skip it, keep scanning.
                self.pos += 1;
                self.report(DiagnosticKind::InvalidCharacter(ch));
            }
        }

        Analysis {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.source.get(self.pos + offset).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.source.get(self.pos) {
            if !ch.is_whitespace() {
                break;
            }
            if ch == '\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    /// `//` runs to end of line; `/*` runs to the first `*/` (blocks do
    /// not nest). A block left open at end of input is diagnosed on the
    /// line it was opened.
    fn skip_comment(&mut self) {
        if self.peek_at(1) == Some('/') {
            self.pos += 2;
            while self.pos < self.source.len() && self.source[self.pos] != '\n' {
                self.pos += 1;
            }
            return;
        }

        let opened_on = self.line;
        self.pos += 2;
        while self.pos < self.source.len() {
            match self.source[self.pos] {
                '*' if self.peek_at(1) == Some('/') => {
                    self.pos += 2;
                    return;
                }
                '\n' => {
                    self.line += 1;
                    self.pos += 1;
                }
                _ => self.pos += 1,
            }
        }
        self.report_at(opened_on, DiagnosticKind::UnclosedComment);
    }

    fn scan_identifier(&mut self) {
        let line = self.line;
        let start = self.pos;
        while self.pos < self.source.len() && is_identifier_char(self.source[self.pos]) {
            self.pos += 1;
        }

        let lexeme: String = self.source[start..self.pos].iter().collect();
        let kind = keyword_kind(&lexeme).unwrap_or(TokenKind::Identifier);
        self.tokens.push(Token { kind, lexeme, line });
    }

    fn scan_number(&mut self) {
        let line = self.line;
        let start = self.pos;
        while self.pos < self.source.len() && self.source[self.pos].is_ascii_digit() {
            self.pos += 1;
        }

        match self.source.get(self.pos) {
            // Digits running straight into an identifier tail: `1abc`.
            Some(&ch) if ch.is_alphabetic() || ch == '_' => {
                while self.pos < self.source.len() && is_identifier_char(self.source[self.pos]) {
                    self.pos += 1;
                }
                let run: String = self.source[start..self.pos].iter().collect();
                let shape = DiagnosticKind::MalformedIdentifier {
                    fragment: run.clone(),
                };
                self.report_run(shape, &run);
            }
            // Only the two-dot shape is consumed here; anything else
            // keeps the integer and leaves the dot to the invalid path.
            Some(&'.') => {
                let mut end = self.pos;
                while end < self.source.len()
                    && (self.source[end].is_ascii_digit() || self.source[end] == '.')
                {
                    end += 1;
                }
                let run: String = self.source[start..end].iter().collect();
                if is_two_dot_number(&run) {
                    self.pos = end;
                    let shape = DiagnosticKind::MalformedNumber {
                        fragment: run.clone(),
                    };
                    self.report_run(shape, &run);
                } else {
                    self.emit_integer(start, line);
                }
            }
            _ => self.emit_integer(start, line),
        }
    }

    /// The language has no string tokens. A quoted run is consumed whole:
    /// unterminated ones report `UnterminatedString`, and every run ends
    /// with the generic invalid-character report for the quote itself.
    fn scan_quoted_run(&mut self) {
        let start = self.pos;
        let input_end = self.source.len() - 1; // sentinel is never content
        self.pos += 1;

        while self.pos < input_end && self.source[self.pos] != '\n' {
            if self.source[self.pos] == '"' {
                self.pos += 1;
                self.report(DiagnosticKind::InvalidCharacter('"'));
                return;
            }
            self.pos += 1;
        }

        let run: String = self.source[start..self.pos].iter().collect();
        let shape = DiagnosticKind::UnterminatedString {
            fragment: run.clone(),
        };
        self.report_run(shape, &run);
        self.report(DiagnosticKind::InvalidCharacter('"'));
    }

    fn scan_operator(&mut self) -> bool {
        let line = self.line;
        for &(text, kind) in OPERATORS {
            if self.matches_at(text) {
                self.pos += text.len(); // operators are ASCII
                self.tokens.push(Token {
                    kind,
                    lexeme: text.to_string(),
                    line,
                });
                return true;
            }
        }
        false
    }

    fn matches_at(&self, text: &str) -> bool {
        text.chars()
            .enumerate()
            .all(|(i, ch)| self.source.get(self.pos + i) == Some(&ch))
    }

    fn emit_integer(&mut self, start: usize, line: usize) {
        let lexeme: String = self.source[start..self.pos].iter().collect();
        self.tokens.push(Token {
            kind: TokenKind::IntegerLiteral,
            lexeme,
            line,
        });
    }

    /// Report one ill-formed run: its shape diagnostic followed by the
    /// shape-blind length checks. The checks are independent; several may
    /// fire for the same run.
    fn report_run(&mut self, shape: DiagnosticKind, run: &str) {
        self.report(shape);
        let len = run.chars().count();
        if len > MAX_IDENTIFIER_LEN {
            self.report(DiagnosticKind::IdentifierTooLong {
                fragment: run.to_string(),
            });
        }
        if len > MAX_NUMBER_LEN {
            self.report(DiagnosticKind::NumberTooLong {
                fragment: run.to_string(),
            });
        }
    }

    fn report(&mut self, kind: DiagnosticKind) {
        self.report_at(self.line, kind);
    }

    fn report_at(&mut self, line: usize, kind: DiagnosticKind) {
        self.diagnostics.push(Diagnostic { kind, line });
    }
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn keyword_kind(lexeme: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|&&(word, _)| word == lexeme)
        .map(|&(_, kind)| kind)
}

/// Exact shape `digits '.' [digits] '.' digits`, the malformed-number
/// pattern of the error catalog.
fn is_two_dot_number(run: &str) -> bool {
    let mut parts = run.split('.');
    let (Some(head), Some(mid), Some(tail), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    !head.is_empty()
        && !tail.is_empty()
        && head.chars().all(|ch| ch.is_ascii_digit())
        && mid.chars().all(|ch| ch.is_ascii_digit())
        && tail.chars().all(|ch| ch.is_ascii_digit())
}
