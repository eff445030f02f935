/// Control sequences: `\` followed by an alphanumeric name.
pub struct CommandSyntax;

impl CommandSyntax {
    /// Opens a command. Also the only character that escapes another one.
    pub const ESCAPE: char = '\\';

    /// Characters that keep a command open once its name is complete.
    pub const CONTINUATIONS: [char; 3] = [' ', '[', '{'];

    /// Returns true if `c` extends a command name.
    pub fn is_name_char(c: char) -> bool {
        c.is_ascii_alphanumeric()
    }

    /// Returns true if `c` keeps a command with a complete name open.
    pub fn continues(c: char) -> bool {
        Self::CONTINUATIONS.contains(&c)
    }

    /// Command name from its start delimiter (`\foo` -> `foo`).
    pub fn name_of(start_delimiter: &str) -> &str {
        start_delimiter
            .strip_prefix(Self::ESCAPE)
            .unwrap_or(start_delimiter)
    }

    /// Start delimiter for a command name (`foo` -> `\foo`).
    pub fn delimiter_for(name: &str) -> String {
        format!("{}{name}", Self::ESCAPE)
    }
}
