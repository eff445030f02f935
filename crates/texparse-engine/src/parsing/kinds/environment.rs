use super::{ArgumentSyntax, CommandSyntax};

/// `\begin{name} ... \end{name}` blocks.
pub struct EnvironmentSyntax;

impl EnvironmentSyntax {
    pub const BEGIN: &'static str = "begin";
    pub const END: &'static str = "end";

    /// Returns true if a command start delimiter opens an environment.
    pub fn is_begin(start_delimiter: &str) -> bool {
        CommandSyntax::name_of(start_delimiter) == Self::BEGIN
            && start_delimiter.starts_with(CommandSyntax::ESCAPE)
    }

    /// Canonical start delimiter for a programmatically named environment.
    pub fn start_delimiter(name: &str) -> String {
        Self::wrap(Self::BEGIN, name)
    }

    /// Canonical end delimiter for a programmatically named environment.
    pub fn end_delimiter(name: &str) -> String {
        Self::wrap(Self::END, name)
    }

    fn wrap(command: &str, name: &str) -> String {
        format!(
            "{}{}{name}{}",
            CommandSyntax::delimiter_for(command),
            ArgumentSyntax::BRACE_OPEN,
            ArgumentSyntax::BRACE_CLOSE
        )
    }
}
