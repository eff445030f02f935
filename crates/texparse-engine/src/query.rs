//! Name-based search over a tree.
//!
//! Traversal is depth-first and pre-order over children in insertion order.
//! A matching node is never searched for further matches inside it.

use crate::ast::{Argument, Command, Environment, Node, Root};

/// Anything with children that can be searched.
pub trait Element {
    fn children(&self) -> &[Node];

    fn children_mut(&mut self) -> &mut [Node];

    /// First command named `name`.
    fn find_command(&self, name: &str) -> Option<&Command> {
        first_match(self.children(), &|node| {
            node.as_command().filter(|c| c.name() == name)
        })
    }

    /// First command whose name is any of `names`.
    fn find_command_any(&self, names: &[&str]) -> Option<&Command> {
        first_match(self.children(), &|node| {
            node.as_command().filter(|c| names.contains(&c.name()))
        })
    }

    /// All outermost commands named `name`.
    fn find_commands(&self, name: &str) -> Vec<&Command> {
        let mut out = Vec::new();
        all_matches(
            self.children(),
            &|node| node.as_command().filter(|c| c.name() == name),
            &mut out,
        );
        out
    }

    /// First environment named `name`.
    fn find_env(&self, name: &str) -> Option<&Environment> {
        first_match(self.children(), &|node| {
            node.as_environment().filter(|e| e.name() == name)
        })
    }

    /// All outermost environments named `name`.
    fn find_envs(&self, name: &str) -> Vec<&Environment> {
        let mut out = Vec::new();
        all_matches(
            self.children(),
            &|node| node.as_environment().filter(|e| e.name() == name),
            &mut out,
        );
        out
    }

    fn find_command_mut(&mut self, name: &str) -> Option<&mut Command> {
        let node = first_match_mut(self.children_mut(), &|node| {
            node.as_command().is_some_and(|c| c.name() == name)
        })?;
        node.as_command_mut()
    }

    fn find_env_mut(&mut self, name: &str) -> Option<&mut Environment> {
        let node = first_match_mut(self.children_mut(), &|node| {
            node.as_environment().is_some_and(|e| e.name() == name)
        })?;
        node.as_environment_mut()
    }
}

fn first_match<'a, T>(
    children: &'a [Node],
    test: &dyn Fn(&'a Node) -> Option<&'a T>,
) -> Option<&'a T> {
    children
        .iter()
        .find_map(|child| test(child).or_else(|| first_match(child.children(), test)))
}

fn all_matches<'a, T>(
    children: &'a [Node],
    test: &dyn Fn(&'a Node) -> Option<&'a T>,
    out: &mut Vec<&'a T>,
) {
    for child in children {
        match test(child) {
            Some(found) => out.push(found),
            None => all_matches(child.children(), test, out),
        }
    }
}

fn first_match_mut<'a>(
    children: &'a mut [Node],
    test: &dyn Fn(&Node) -> bool,
) -> Option<&'a mut Node> {
    for child in children {
        if test(child) {
            return Some(child);
        }
        if let Some(found) = first_match_mut(child.children_mut(), test) {
            return Some(found);
        }
    }
    None
}

impl Element for Root {
    fn children(&self) -> &[Node] {
        Root::children(self)
    }

    fn children_mut(&mut self) -> &mut [Node] {
        Root::children_mut(self)
    }
}

impl Element for Node {
    fn children(&self) -> &[Node] {
        Node::children(self)
    }

    fn children_mut(&mut self) -> &mut [Node] {
        Node::children_mut(self)
    }
}

impl Element for Command {
    fn children(&self) -> &[Node] {
        Command::children(self)
    }

    fn children_mut(&mut self) -> &mut [Node] {
        Command::children_mut(self)
    }
}

impl Element for Argument {
    fn children(&self) -> &[Node] {
        Argument::children(self)
    }

    fn children_mut(&mut self) -> &mut [Node] {
        Argument::children_mut(self)
    }
}

impl Element for Environment {
    fn children(&self) -> &[Node] {
        Environment::children(self)
    }

    fn children_mut(&mut self) -> &mut [Node] {
        Environment::children_mut(self)
    }
}
