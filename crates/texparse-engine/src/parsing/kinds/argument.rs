/// Command arguments: `{...}` (required) and `[...]` (optional).
pub struct ArgumentSyntax;

impl ArgumentSyntax {
    pub const BRACE_OPEN: char = '{';
    pub const BRACE_CLOSE: char = '}';
    pub const BRACKET_OPEN: char = '[';
    pub const BRACKET_CLOSE: char = ']';

    /// Returns true if `c` opens an argument.
    pub fn opens(c: char) -> bool {
        c == Self::BRACE_OPEN || c == Self::BRACKET_OPEN
    }

    /// The closer matching `open`, or `None` for an unknown opener.
    pub fn closer(open: char) -> Option<char> {
        match open {
            Self::BRACE_OPEN => Some(Self::BRACE_CLOSE),
            Self::BRACKET_OPEN => Some(Self::BRACKET_CLOSE),
            _ => None,
        }
    }
}
