//! Per-character transition function.
//!
//! Each character is offered, in order, to:
//!
//! 1. the open construct's start delimiter, if still incomplete
//! 2. the special characters `\`, `{`, `[` and `%` (unless escaped)
//! 3. the closing loop, which may close several constructs at once
//! 4. the pending text run

use crate::ast::Node;

use super::{
    ParseError,
    cursor::{Input, SourceCursor},
    kinds::{ArgumentSyntax, CommandSyntax, CommentSyntax},
    pending::{EndDelimiter, Pending},
};

/// Consumes one input step.
pub fn process(cur: &mut SourceCursor, input: Input) -> Result<(), ParseError> {
    cur.begin(input);

    let mut handled = continue_start_delimiter(cur, input);

    if !handled
        && cur.is_escapable()
        && let Input::Char(c) = input
    {
        handled = dispatch_special(cur, c)?;
    }

    if !handled {
        handled = resolve_closings(cur)?;
    }

    if !handled && let Input::Char(c) = input {
        cur.text.push(c, cur.position, cur.line);
    }

    cur.advance();
    Ok(())
}

fn continue_start_delimiter(cur: &mut SourceCursor, input: Input) -> bool {
    let Some(top) = cur.open.last_mut() else {
        return false;
    };
    if top.opening().complete {
        return false;
    }
    if top.completes_start(input) {
        top.opening_mut().complete = true;
        return false;
    }
    match input {
        Input::Char(c) => {
            top.opening_mut().delimiter.push(c);
            true
        }
        Input::End => false,
    }
}

fn dispatch_special(cur: &mut SourceCursor, c: char) -> Result<bool, ParseError> {
    match c {
        CommandSyntax::ESCAPE => {
            if matches!(cur.top(), Some(Pending::Command(_))) {
                force_close_command(cur)?;
            }
            let command = Pending::command(cur.position, cur.line);
            open(cur, command);
            Ok(true)
        }
        c if ArgumentSyntax::opens(c) => match cur.top() {
            Some(Pending::Command(_)) => {
                let argument = Pending::argument(cur.position, cur.line, c);
                open(cur, argument);
                Ok(true)
            }
            // Braces inside a comment are plain text.
            Some(Pending::Comment(_)) => Ok(false),
            _ => Err(ParseError::UnexpectedArgumentOpen {
                line: cur.line,
                position: cur.position,
            }),
        },
        CommentSyntax::OPEN => {
            let comment = Pending::comment(cur.position, cur.line);
            open(cur, comment);
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Closes the open command because a new one starts.
///
/// Closing an `\end` command this way can complete an environment right
/// away, so the closing loop runs again before the new command opens.
fn force_close_command(cur: &mut SourceCursor) -> Result<(), ParseError> {
    let current = cur.current;
    let end = match cur.open.last_mut() {
        Some(top) => top.end_delimiter(current)?.unwrap_or_default(),
        None => return Ok(()),
    };
    close_top(cur, end)?;
    resolve_closings(cur)?;
    Ok(())
}

/// Closes constructs for as long as the top one ends on the current
/// character. Returns true if the character was consumed.
fn resolve_closings(cur: &mut SourceCursor) -> Result<bool, ParseError> {
    loop {
        let current = cur.current;
        let Some(top) = cur.open.last_mut() else {
            return Ok(false);
        };
        if !top.opening().complete {
            return Ok(false);
        }
        let Some(end) = top.end_delimiter(current)? else {
            return Ok(false);
        };
        let consumes = end.consumes;
        close_top(cur, end)?;
        if consumes {
            return Ok(true);
        }
    }
}

/// Pops the top construct and places its node.
///
/// A `\begin` command is replaced by an open environment. A finished command
/// hands its trailing text back to the pending run. Pending text is not
/// flushed into a closing environment: it follows the `\end` command and
/// belongs to the next sibling.
fn close_top(cur: &mut SourceCursor, end: EndDelimiter) -> Result<(), ParseError> {
    if !matches!(cur.top(), Some(Pending::Environment { .. })) {
        flush_text(cur);
    }
    let Some(top) = cur.open.pop() else {
        return Ok(());
    };
    let kind = top.kind();
    let begins_environment = top.is_begin();

    let node = top.finalize(end, cur);
    log::trace!(
        "closed {kind} at {:?}",
        node.span().map(|s| s.start..s.end)
    );

    match node {
        Node::Command(mut command) => {
            if let Some(trailing) = command.take_trailing_text() {
                cur.text.seed(trailing);
            }
            if begins_environment {
                let environment = Pending::environment(command)?;
                log::trace!("opened environment at byte {}", environment.opening().start);
                cur.open.push(environment);
            } else {
                attach(cur, command.into());
            }
        }
        node => attach(cur, node),
    }
    Ok(())
}

fn open(cur: &mut SourceCursor, pending: Pending) {
    flush_text(cur);
    log::trace!("opened {} at byte {}", pending.kind(), pending.opening().start);
    cur.open.push(pending);
}

/// Moves the pending text run into the tree as a text node.
pub(super) fn flush_text(cur: &mut SourceCursor) {
    let text = std::mem::take(&mut cur.text);
    if let Some(node) = text.into_node(cur.position, cur.line) {
        attach(cur, node);
    }
}

fn attach(cur: &mut SourceCursor, node: Node) {
    match cur.open.last_mut() {
        Some(parent) => parent.opening_mut().children.push(node),
        None => cur.finished.push(node),
    }
}
