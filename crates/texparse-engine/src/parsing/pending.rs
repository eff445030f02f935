use crate::ast::{Argument, Command, Comment, Environment, Node, Span, strip_delimiters};

use super::{
    ConstructKind, ParseError,
    cursor::{Input, SourceCursor},
    kinds::{ArgumentSyntax, CommandSyntax, CommentSyntax, EnvironmentSyntax},
};

/// State shared by every open construct.
#[derive(Debug)]
pub struct Opening {
    pub start: usize,
    pub start_line: usize,
    /// Grows until `complete` is set.
    pub delimiter: String,
    /// Finished child nodes, in order.
    pub children: Vec<Node>,
    pub complete: bool,
}

impl Opening {
    fn new(start: usize, start_line: usize, delimiter: String) -> Self {
        Self {
            start,
            start_line,
            delimiter,
            children: Vec::new(),
            complete: false,
        }
    }
}

/// How an open construct ends on the current character.
#[derive(Debug, Default)]
pub struct EndDelimiter {
    pub delimiter: String,
    /// Whether the current character belongs to the construct.
    pub consumes: bool,
    /// Explicit end offset and line, when the end was a finished child.
    pub until: Option<(usize, usize)>,
}

/// A construct on the open stack.
#[derive(Debug)]
pub enum Pending {
    Command(Opening),
    Argument(Opening),
    Environment {
        opening: Opening,
        name: String,
        begin_args: Vec<Argument>,
    },
    Comment(Opening),
}

impl Pending {
    pub fn command(start: usize, line: usize) -> Self {
        Pending::Command(Opening::new(
            start,
            line,
            CommandSyntax::ESCAPE.to_string(),
        ))
    }

    pub fn argument(start: usize, line: usize, opener: char) -> Self {
        Pending::Argument(Opening::new(start, line, opener.to_string()))
    }

    pub fn comment(start: usize, line: usize) -> Self {
        Pending::Comment(Opening::new(start, line, CommentSyntax::OPEN.to_string()))
    }

    /// Opens an environment in place of a finished `\begin` command.
    ///
    /// The first argument must end in text, which becomes the name. The
    /// command's arguments move into the environment.
    ///
    /// This deliberately differs from binding the name to the *last*
    /// argument: the first keeps `\begin{figure}[ht]` and
    /// `\begin{tabular}{ll}` named `figure` and `tabular`; the matching
    /// `\end` is looked up by its first argument as well.
    pub fn environment(begin: Command) -> Result<Self, ParseError> {
        let span = begin.span().unwrap_or_default();
        let malformed = |reason| ParseError::MalformedEnvironmentStart {
            line: span.start_line,
            reason,
        };
        let name = begin
            .first_arg()
            .ok_or_else(|| malformed("missing name argument"))?
            .trailing_text()
            .ok_or_else(|| malformed("name argument does not end in text"))?
            .to_owned();

        let mut opening = Opening::new(span.start, span.start_line, begin.string());
        opening.complete = true;
        let begin_args = begin
            .into_children()
            .into_iter()
            .filter_map(|child| match child {
                Node::Argument(arg) => Some(arg),
                _ => None,
            })
            .collect();

        Ok(Pending::Environment {
            opening,
            name,
            begin_args,
        })
    }

    pub fn kind(&self) -> ConstructKind {
        match self {
            Pending::Command(_) => ConstructKind::Command,
            Pending::Argument(_) => ConstructKind::Argument,
            Pending::Environment { .. } => ConstructKind::Environment,
            Pending::Comment(_) => ConstructKind::Comment,
        }
    }

    pub fn opening(&self) -> &Opening {
        match self {
            Pending::Command(o) | Pending::Argument(o) | Pending::Comment(o) => o,
            Pending::Environment { opening, .. } => opening,
        }
    }

    pub fn opening_mut(&mut self) -> &mut Opening {
        match self {
            Pending::Command(o) | Pending::Argument(o) | Pending::Comment(o) => o,
            Pending::Environment { opening, .. } => opening,
        }
    }

    /// Whether `input` completes the start delimiter.
    ///
    /// A command name runs over alphanumerics; every other construct's start
    /// delimiter is a single character.
    pub fn completes_start(&self, input: Input) -> bool {
        match self {
            Pending::Command(_) => !input.char().is_some_and(CommandSyntax::is_name_char),
            _ => true,
        }
    }

    /// Whether this construct is a `\begin` command.
    pub fn is_begin(&self) -> bool {
        matches!(self, Pending::Command(o) if EnvironmentSyntax::is_begin(&o.delimiter))
    }

    /// Tests whether the construct ends on `current`.
    ///
    /// An environment ends once its last finished child is the matching
    /// `\end` command, which is removed and becomes the end delimiter.
    pub fn end_delimiter(&mut self, current: Input) -> Result<Option<EndDelimiter>, ParseError> {
        match self {
            Pending::Command(_) => {
                let continues = current.char().is_some_and(CommandSyntax::continues);
                Ok((!continues).then(EndDelimiter::default))
            }
            Pending::Argument(opening) => {
                let closer = opening
                    .delimiter
                    .chars()
                    .last()
                    .and_then(ArgumentSyntax::closer)
                    .ok_or_else(|| ParseError::UnknownArgumentDelimiter {
                        delimiter: opening.delimiter.clone(),
                        line: opening.start_line,
                    })?;
                Ok(current.is(closer).then(|| EndDelimiter {
                    delimiter: closer.to_string(),
                    consumes: true,
                    until: None,
                }))
            }
            Pending::Comment(_) => Ok(current.is(CommentSyntax::CLOSE).then(|| EndDelimiter {
                delimiter: CommentSyntax::CLOSE.to_string(),
                consumes: true,
                until: None,
            })),
            Pending::Environment { opening, name, .. } => {
                let closes = opening
                    .children
                    .last()
                    .and_then(Node::as_command)
                    .is_some_and(|command| ends_environment(command, name));
                if !closes {
                    return Ok(None);
                }
                let Some(end_command) = opening.children.pop() else {
                    return Ok(None);
                };
                let until = end_command.span().map(|s| (s.end, s.end_line));
                Ok(Some(EndDelimiter {
                    delimiter: end_command.string(),
                    consumes: false,
                    until,
                }))
            }
        }
    }

    /// Converts the closed construct into its node.
    pub fn finalize(self, end: EndDelimiter, cur: &SourceCursor) -> Node {
        let end_delimiter = end.delimiter;
        let (end, end_line) = end.until.unwrap_or_else(|| {
            let offset = if end.consumes {
                cur.consumed_end()
            } else {
                cur.position
            };
            (offset, cur.line)
        });
        let opening = self.opening();
        let span = Span {
            start: opening.start,
            end,
            start_line: opening.start_line,
            end_line,
        };
        let full_text = cur.literal(span.start, span.end).to_owned();

        match self {
            Pending::Command(o) => {
                Command::parsed(o.delimiter, end_delimiter, o.children, span, full_text).into()
            }
            Pending::Argument(o) => {
                Argument::parsed(o.delimiter, end_delimiter, o.children, span, full_text).into()
            }
            Pending::Comment(o) => {
                let text = strip_delimiters(&full_text, &o.delimiter, &end_delimiter);
                Comment::parsed(text, o.delimiter, end_delimiter, span, full_text).into()
            }
            Pending::Environment {
                opening,
                name,
                begin_args,
            } => Environment::parsed(
                name,
                opening.delimiter,
                begin_args,
                end_delimiter,
                opening.children,
                span,
                full_text,
            )
            .into(),
        }
    }
}

fn ends_environment(command: &Command, name: &str) -> bool {
    command.name() == EnvironmentSyntax::END
        && command
            .first_arg()
            .and_then(Argument::trailing_text)
            .is_some_and(|text| text == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Text;

    fn begin_command(args: Vec<Argument>) -> Command {
        Command::new(EnvironmentSyntax::BEGIN, args)
    }

    #[test]
    fn command_start_runs_over_alphanumerics() {
        let pending = Pending::command(0, 0);
        assert!(!pending.completes_start(Input::Char('a')));
        assert!(!pending.completes_start(Input::Char('9')));
        assert!(pending.completes_start(Input::Char('{')));
        assert!(pending.completes_start(Input::End));
    }

    #[test]
    fn command_ends_without_consuming() {
        let mut pending = Pending::command(0, 0);
        assert!(pending.end_delimiter(Input::Char(' ')).unwrap().is_none());
        assert!(pending.end_delimiter(Input::Char('[')).unwrap().is_none());
        let end = pending.end_delimiter(Input::Char('x')).unwrap().unwrap();
        assert!(!end.consumes);
        assert!(pending.end_delimiter(Input::End).unwrap().is_some());
    }

    #[test]
    fn argument_ends_on_matching_closer() {
        let mut pending = Pending::argument(0, 0, '[');
        assert!(pending.end_delimiter(Input::Char('}')).unwrap().is_none());
        let end = pending.end_delimiter(Input::Char(']')).unwrap().unwrap();
        assert_eq!(end.delimiter, "]");
        assert!(end.consumes);
    }

    #[test]
    fn unknown_opener_is_an_error() {
        let mut pending = Pending::argument(0, 4, '(');
        let err = pending.end_delimiter(Input::Char(')')).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnknownArgumentDelimiter { ref delimiter, line: 4 } if delimiter == "("
        ));
    }

    #[test]
    fn environment_takes_name_from_first_argument() {
        let begin = begin_command(vec![
            Argument::braced(vec![Text::new("tabular").into()]),
            Argument::braced(vec![Text::new("ll").into()]),
        ]);
        let pending = Pending::environment(begin).unwrap();
        let Pending::Environment {
            name, begin_args, ..
        } = &pending
        else {
            panic!("expected environment");
        };
        assert_eq!(name, "tabular");
        assert_eq!(begin_args.len(), 2);
        assert_eq!(pending.opening().delimiter, "\\begin{tabular}{ll}");
        assert!(pending.opening().complete);
    }

    #[test]
    fn environment_without_name_is_malformed() {
        let err = Pending::environment(begin_command(vec![])).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedEnvironmentStart {
                reason: "missing name argument",
                ..
            }
        ));

        let err = Pending::environment(begin_command(vec![Argument::braced(vec![])])).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedEnvironmentStart {
                reason: "name argument does not end in text",
                ..
            }
        ));
    }

    #[test]
    fn environment_closes_on_matching_end_child() {
        let begin = begin_command(vec![Argument::braced(vec![Text::new("a").into()])]);
        let mut pending = Pending::environment(begin).unwrap();
        let end_b = Command::new(
            EnvironmentSyntax::END,
            vec![Argument::braced(vec![Text::new("b").into()])],
        );
        pending.opening_mut().children.push(end_b.into());
        assert!(pending.end_delimiter(Input::Char('x')).unwrap().is_none());

        let end_a = Command::new(
            EnvironmentSyntax::END,
            vec![Argument::braced(vec![Text::new("a").into()])],
        );
        pending.opening_mut().children.push(end_a.into());
        let end = pending.end_delimiter(Input::Char('x')).unwrap().unwrap();
        assert_eq!(end.delimiter, "\\end{a}");
        assert!(!end.consumes);
        assert_eq!(pending.opening().children.len(), 1);
    }
}
