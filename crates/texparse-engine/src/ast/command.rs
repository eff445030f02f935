//! Commands and their argument cache.
//!
//! A command's arguments are not stored separately: they are the
//! [`Argument`] entries of `children`, in order. Parsed commands also keep the
//! literal text they were parsed from, which may contain whitespace or
//! comments between arguments.
//!
//! Every serializing read compares the current arguments against the
//! arguments seen on the previous read. When they differ the command is
//! dirty: its inner string becomes the concatenation of its arguments and the
//! non-argument children are dropped at the next mutable access.

use std::cell::RefCell;

use super::{Argument, Node, Span, concat, repr::delimited, strip_delimiters};
use super::leaf::Text;
use crate::parsing::kinds::CommandSyntax;

#[derive(Debug, Clone, Default)]
struct ArgsCache {
    /// Argument serialization as of the last read.
    args_string: String,
    /// Inner string to serve while arguments are unchanged.
    inner_text: Option<String>,
    /// Set when arguments changed and non-argument children are outdated.
    stale_children: bool,
}

/// `\name` followed by its arguments.
#[derive(Debug, Clone)]
pub struct Command {
    name: String,
    start_delimiter: String,
    end_delimiter: String,
    children: Vec<Node>,
    span: Option<Span>,
    full_text: Option<String>,
    cache: RefCell<ArgsCache>,
}

impl Command {
    /// Builds a command from scratch. It has no span and no literal text.
    pub fn new(name: impl Into<String>, args: Vec<Argument>) -> Self {
        let name = name.into();
        let children: Vec<Node> = args.into_iter().map(Node::from).collect();
        let cache = ArgsCache {
            args_string: concat(&children),
            ..ArgsCache::default()
        };
        Self {
            start_delimiter: CommandSyntax::delimiter_for(&name),
            name,
            end_delimiter: String::new(),
            children,
            span: None,
            full_text: None,
            cache: RefCell::new(cache),
        }
    }

    pub(crate) fn parsed(
        start_delimiter: String,
        end_delimiter: String,
        children: Vec<Node>,
        span: Span,
        full_text: String,
    ) -> Self {
        let cache = ArgsCache {
            args_string: concat(children.iter().filter(|c| c.is_argument())),
            inner_text: Some(strip_delimiters(&full_text, &start_delimiter, &end_delimiter)),
            stale_children: false,
        };
        Self {
            name: CommandSyntax::name_of(&start_delimiter).to_owned(),
            start_delimiter,
            end_delimiter,
            children,
            span: Some(span),
            full_text: Some(full_text),
            cache: RefCell::new(cache),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the command, rewriting its start delimiter.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.start_delimiter = CommandSyntax::delimiter_for(&self.name);
    }

    pub fn start_delimiter(&self) -> &str {
        &self.start_delimiter
    }

    pub fn end_delimiter(&self) -> &str {
        &self.end_delimiter
    }

    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// The literal text this command was parsed from.
    pub fn full_text(&self) -> Option<&str> {
        self.full_text.as_deref()
    }

    /// Children in order.
    ///
    /// Argument edits made through `replace_arg`, `push_arg` or `remove_arg`
    /// prune non-argument children right away. An edit made inside a borrow
    /// from `arg_mut` or `args_mut` shows up in `string()` at once, but the
    /// outdated whitespace and comment children stay here until the next
    /// mutable access to the command.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Mutable children.
    ///
    /// Editing children directly bypasses the parsed literal, so the inner
    /// string is rebuilt from children afterwards.
    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        self.settle();
        self.cache.get_mut().inner_text = None;
        &mut self.children
    }

    pub fn last_child(&self) -> Option<&Node> {
        self.children.last()
    }

    pub fn args(&self) -> impl Iterator<Item = &Argument> {
        self.children.iter().filter_map(Node::as_argument)
    }

    pub fn args_mut(&mut self) -> impl Iterator<Item = &mut Argument> {
        self.settle();
        self.children.iter_mut().filter_map(Node::as_argument_mut)
    }

    pub fn arg(&self, index: usize) -> Option<&Argument> {
        self.args().nth(index)
    }

    pub fn arg_mut(&mut self, index: usize) -> Option<&mut Argument> {
        self.args_mut().nth(index)
    }

    pub fn first_arg(&self) -> Option<&Argument> {
        self.args().next()
    }

    pub fn last_arg(&self) -> Option<&Argument> {
        self.args().last()
    }

    pub fn arg_count(&self) -> usize {
        self.args().count()
    }

    /// Replaces the argument at `index`, returning the old one.
    pub fn replace_arg(&mut self, index: usize, arg: Argument) -> Option<Argument> {
        self.settle();
        let slot = self.child_index_of_arg(index)?;
        let old = std::mem::replace(&mut self.children[slot], arg.into());
        self.settle();
        match old {
            Node::Argument(old) => Some(old),
            _ => None,
        }
    }

    pub fn push_arg(&mut self, arg: Argument) {
        self.settle();
        self.children.push(arg.into());
        self.settle();
    }

    pub fn remove_arg(&mut self, index: usize) -> Option<Argument> {
        self.settle();
        let slot = self.child_index_of_arg(index)?;
        let old = self.children.remove(slot);
        self.settle();
        match old {
            Node::Argument(old) => Some(old),
            _ => None,
        }
    }

    /// Replaces all children with `args`.
    pub fn set_args(&mut self, args: Vec<Argument>) {
        self.children = args.into_iter().map(Node::from).collect();
        let cache = self.cache.get_mut();
        cache.args_string = concat(&self.children);
        cache.inner_text = None;
        cache.stale_children = false;
    }

    /// Takes ownership of the children, leaving the command empty.
    pub(crate) fn into_children(self) -> Vec<Node> {
        self.children
    }

    /// Moves a trailing text child out of the command.
    ///
    /// The command's literal text and span shrink by exactly that text.
    pub(crate) fn take_trailing_text(&mut self) -> Option<Text> {
        if !matches!(self.children.last(), Some(Node::Text(_))) {
            return None;
        }
        let Some(Node::Text(text)) = self.children.pop() else {
            return None;
        };
        let len = text.text().len();
        if let Some(full) = self.full_text.as_mut() {
            full.truncate(full.len().saturating_sub(len));
            let inner = strip_delimiters(full, &self.start_delimiter, &self.end_delimiter);
            self.cache.get_mut().inner_text = Some(inner);
        }
        if let Some(span) = self.span.as_mut() {
            match text.span() {
                Some(text_span) => {
                    span.end = text_span.start;
                    span.end_line = text_span.start_line;
                }
                None => span.end = span.end.saturating_sub(len),
            }
        }
        Some(text)
    }

    pub fn inner_string(&self) -> String {
        self.refresh()
    }

    pub fn string(&self) -> String {
        format!(
            "{}{}{}",
            self.start_delimiter,
            self.inner_string(),
            self.end_delimiter
        )
    }

    pub fn repr(&self) -> String {
        self.repr_at(0)
    }

    pub(crate) fn repr_at(&self, level: usize) -> String {
        self.refresh();
        let stale = self.cache.borrow().stale_children;
        let visible = self.children.iter().filter(|c| !stale || c.is_argument());
        delimited("Command", level, &format!("{}: ", self.name), visible, "")
    }

    fn args_string(&self) -> String {
        self.args().map(Argument::string).collect()
    }

    /// Compares current arguments with the cached ones and returns the inner
    /// string to serve.
    fn refresh(&self) -> String {
        let fresh = self.args_string();
        let mut cache = self.cache.borrow_mut();
        if fresh != cache.args_string {
            log::trace!("command \\{} arguments changed", self.name);
            cache.args_string = fresh.clone();
            cache.inner_text = Some(fresh.clone());
            cache.stale_children = !self.children.iter().all(Node::is_argument);
            return fresh;
        }
        match &cache.inner_text {
            Some(inner) => inner.clone(),
            None => concat(&self.children),
        }
    }

    /// Applies a pending argument change to `children`.
    fn settle(&mut self) {
        self.refresh();
        let cache = self.cache.get_mut();
        if cache.stale_children {
            self.children.retain(Node::is_argument);
            cache.stale_children = false;
        }
    }

    fn child_index_of_arg(&self, index: usize) -> Option<usize> {
        self.children
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_argument())
            .nth(index)
            .map(|(i, _)| i)
    }
}
