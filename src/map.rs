//! The command registry: registration, lookup, and token resolution.

use std::collections::BTreeMap;

use tracing::debug;

use crate::command::{Argument, Command};
use crate::error::{Error, Result};

/// An ordered mapping from command name to [`Command`].
///
/// Names are unique within one map. A map is built once at shell startup via
/// [`CommandMap::add`] and then read many times by resolution and completion;
/// there is no interior mutability and no locking, so registration must
/// finish before lookups start.
#[derive(Default)]
pub struct CommandMap {
    commands: BTreeMap<String, Box<dyn Command>>,
}

impl CommandMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `command` under `name`.
    ///
    /// Fails with [`Error::DuplicateCommand`] if `name` is already taken and
    /// leaves the map unchanged. Whether a duplicate is fatal (startup
    /// misconfiguration) or ignorable is the caller's call.
    pub fn add(&mut self, name: impl Into<String>, command: impl Command + 'static) -> Result<()> {
        let name = name.into();
        if self.commands.contains_key(&name) {
            return Err(Error::DuplicateCommand(name));
        }
        debug!(%name, "registered command");
        self.commands.insert(name, Box::new(command));
        Ok(())
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|command| command.as_ref())
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Registered names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Entries whose name starts with `prefix`, in sorted order.
    ///
    /// The empty prefix yields every entry. Matching is byte-wise and
    /// case-sensitive, anchored at the start of the name. The result is a
    /// fresh view; it does not alias the map.
    pub fn completions(&self, prefix: &str) -> Vec<(&str, &dyn Command)> {
        self.commands
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(name, command)| (name.as_str(), command.as_ref()))
            .collect()
    }

    /// Resolve a token sequence to a command and its residual arguments.
    ///
    /// Every Container on the path consumes exactly one token and resolution
    /// recurses into its sub-map; the first non-Container command terminates
    /// the walk and the remaining tokens become its arguments (possibly
    /// none). Resolution is greedy and exact, with no backtracking: a miss at
    /// any depth fails with [`Error::NoMatchingCommand`] carrying the full
    /// original token sequence.
    pub fn find<'a>(&'a self, tokens: &'a [Argument]) -> Result<(&'a dyn Command, &'a [Argument])> {
        self.find_at(tokens, tokens)
    }

    fn find_at<'a>(
        &'a self,
        original: &[Argument],
        tokens: &'a [Argument],
    ) -> Result<(&'a dyn Command, &'a [Argument])> {
        let (first, rest) = tokens
            .split_first()
            .ok_or_else(|| Error::NoMatchingCommand(original.to_vec()))?;
        let command = self
            .get(first)
            .ok_or_else(|| Error::NoMatchingCommand(original.to_vec()))?;

        match command.sub_commands() {
            Some(sub) => sub.find_at(original, rest),
            None => Ok((command, rest)),
        }
    }

    /// Resolve a token sequence and execute the command it names.
    ///
    /// Resolution failures propagate without executing anything; a resolved
    /// command's own error passes through unchanged.
    pub fn exec(&self, tokens: &[Argument]) -> Result<()> {
        let (command, args) = self.find(tokens)?;
        debug!(name = %tokens[0], args = args.len(), "dispatching command");
        command.exec(args)?;
        Ok(())
    }
}
