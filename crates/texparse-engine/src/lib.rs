//! # texparse-engine
//!
//! Single-pass structural parser for TeX/LaTeX-like markup.
//!
//! [`parse`] turns source text into a [`Root`] of commands, arguments,
//! environments, comments and text. The tree is editable: every node
//! serializes itself back to markup with `string()`, and commands notice
//! argument edits made after parsing.
//!
//! ```
//! use texparse_engine::{Element, parse};
//!
//! let mut root = parse("\\section{Intro} Hello").unwrap();
//! assert_eq!(root.string(), "\\section{Intro} Hello");
//!
//! let section = root.find_command_mut("section").unwrap();
//! section.replace_arg(0, texparse_engine::ast::Argument::braced(vec![
//!     texparse_engine::ast::Text::new("Overview").into(),
//! ]));
//! assert_eq!(root.string(), "\\section{Overview} Hello");
//! ```
//!
//! This is a structural tokenizer only: no macro expansion and no error
//! recovery.

pub mod ast;
pub mod io;
pub mod outline;
pub mod parsing;
pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use ast::{Argument, Command, Comment, Diagnostic, Environment, Node, NodeKind, Root, Span, Text};
pub use io::IoError;
pub use parsing::{ConstructKind, ParseError, ParseOptions, Parser, parse, parse_file};
pub use query::Element;
