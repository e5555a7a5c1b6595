//! Lexical analyzer for a small Portuguese-keyword teaching language.
//!
//! A hand-written, single-pass scanner that turns raw source text into a
//! sequence of classified tokens while collecting line-accurate lexical
//! diagnostics in the same pass. Scanning never fails: every problem is
//! reported as data and the scan runs to end of input, so one call
//! surfaces every lexical error in the text.
//!
//! # Quick start
//!
//! ## Tokenize a declaration
//!
//! ```
//! use portugol_lexer::{TokenKind, tokenize};
//!
//! let analysis = tokenize("variavel x = 10;");
//! assert!(analysis.is_clean());
//!
//! let kinds: Vec<_> = analysis.tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::VariableDecl,
//!         TokenKind::Identifier,
//!         TokenKind::Assign,
//!         TokenKind::IntegerLiteral,
//!         TokenKind::Semicolon,
//!     ]
//! );
//! ```
//!
//! ## Collect diagnostics
//!
//! ```
//! use portugol_lexer::tokenize;
//!
//! let analysis = tokenize("x = 5 @ 3;");
//! assert_eq!(analysis.diagnostics.len(), 1);
//! assert_eq!(
//!     analysis.diagnostics[0].to_string(),
//!     "Line 1: invalid character '@'"
//! );
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod diagnostic;
pub mod lexer;
pub mod token;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use lexer::{Analysis, tokenize};
pub use token::{Token, TokenKind};
