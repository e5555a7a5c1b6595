use std::fmt;

/// Classifies one lexical problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Character that cannot start any token.
    InvalidCharacter(char),
    /// Digit run continued by identifier characters (`1abc`).
    MalformedIdentifier { fragment: String },
    /// Run longer than the 20-character identifier limit.
    IdentifierTooLong { fragment: String },
    /// Digit run with two decimal points (`2.3.4`).
    MalformedNumber { fragment: String },
    /// Run longer than the 10-character number limit.
    NumberTooLong { fragment: String },
    /// Block comment still open at end of input.
    UnclosedComment,
    /// Quoted run with no closing `"` before end of line.
    UnterminatedString { fragment: String },
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter(ch) => {
                write!(f, "invalid character '{ch}'")
            }
            Self::MalformedIdentifier { fragment } => {
                write!(f, "malformed identifier '{fragment}'")
            }
            Self::IdentifierTooLong { fragment } => {
                write!(f, "identifier too long '{fragment}'")
            }
            Self::MalformedNumber { fragment } => {
                write!(f, "malformed number '{fragment}'")
            }
            Self::NumberTooLong { fragment } => {
                write!(f, "number too long '{fragment}'")
            }
            Self::UnclosedComment => {
                write!(f, "unclosed comment")
            }
            Self::UnterminatedString { fragment } => {
                write!(f, "unterminated string '{fragment}'")
            }
        }
    }
}

/// One lexical problem, keyed to the 1-based line it was found on.
///
/// Diagnostics are reports, never failures: the scan that produced them
/// always ran to completion. Consumers correlate them to source lines
/// through the `Line <n>` prefix of the rendered message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Line {line}: {kind}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: usize,
}
