//! # Construct Syntax
//!
//! Each construct type owns its delimiter characters. The dispatcher and the
//! pending constructs call these; they never hardcode `\`, `{` or `%`.
//!
//! - **`CommandSyntax`**: escape character, name characters, continuation characters
//! - **`ArgumentSyntax`**: opener/closer pairs `{}` and `[]`
//! - **`CommentSyntax`**: `%` up to the line break
//! - **`EnvironmentSyntax`**: `\begin{name}` / `\end{name}`

pub mod argument;
pub mod command;
pub mod comment;
pub mod environment;

pub use argument::ArgumentSyntax;
pub use command::CommandSyntax;
pub use comment::CommentSyntax;
pub use environment::EnvironmentSyntax;
