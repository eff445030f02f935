//! # Parsing
//!
//! A single left-to-right pass over the characters of the input. There is no
//! lookahead and no backtracking: every character is handled once by
//! [`dispatch::process`], which mutates a [`SourceCursor`] holding the stack
//! of open constructs.
//!
//! ## Modules
//!
//! - **`cursor`**: position, line, raw text, open stack and pending text run
//! - **`pending`**: open constructs and how each one ends
//! - **`dispatch`**: the per-character transition function
//! - **`kinds`**: delimiter characters owned by each construct
//! - **`snapshot`**: serializable outlines and invariant checks for tests
//!
//! ## Errors
//!
//! Structural violations abort the parse with a [`ParseError`]. Constructs
//! left open at the end of input are dropped from the tree and reported as
//! [`Diagnostic`]s on the returned [`Root`], or as an error in strict mode.

pub mod cursor;
pub mod dispatch;
pub mod error;
pub mod kinds;
pub mod pending;
pub mod snapshot;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    ast::{Diagnostic, Root},
    io,
};

pub use cursor::{Input, SourceCursor};
pub use error::{ConstructKind, ParseError};

/// Parser behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Treat constructs left open at the end of input as an error instead of
    /// dropping them with a diagnostic.
    pub strict_eof: bool,
}

/// Entry point for parsing sources with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parses a complete source text.
    pub fn parse(&self, source: &str) -> Result<Root, ParseError> {
        log::debug!("parsing {} bytes", source.len());
        let mut cur = SourceCursor::with_capacity(source.len());
        for c in source.chars() {
            dispatch::process(&mut cur, Input::Char(c))?;
        }
        dispatch::process(&mut cur, Input::End)?;
        self.finish(cur)
    }

    /// Reads and parses a file. A missing or unreadable file is an error.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Root, ParseError> {
        let path = path.as_ref();
        let source = io::read_source(path)?;
        log::debug!("read {}", path.display());
        self.parse(&source)
    }

    fn finish(&self, mut cur: SourceCursor) -> Result<Root, ParseError> {
        dispatch::flush_text(&mut cur);

        let diagnostics: Vec<Diagnostic> = cur
            .open
            .iter()
            .map(|pending| {
                let opening = pending.opening();
                Diagnostic {
                    kind: pending.kind(),
                    line: opening.start_line,
                    position: opening.start,
                    delimiter: opening.delimiter.clone(),
                }
            })
            .collect();

        if let Some(innermost) = diagnostics.last() {
            log::warn!(
                "input ended with {} open construct(s); innermost: {innermost}",
                diagnostics.len()
            );
            if self.options.strict_eof {
                return Err(ParseError::UnterminatedConstruct {
                    kind: innermost.kind,
                    line: innermost.line,
                    position: innermost.position,
                });
            }
        }

        log::debug!(
            "parsed {} top-level nodes over {} lines",
            cur.finished.len(),
            cur.line
        );
        Ok(Root::parsed(cur.finished, cur.raw, cur.line, diagnostics))
    }
}

/// Parses `source` with default options.
pub fn parse(source: &str) -> Result<Root, ParseError> {
    Parser::new().parse(source)
}

/// Reads and parses the file at `path` with default options.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Root, ParseError> {
    Parser::new().parse_file(path)
}
