//! The command contract and the built-in command shapes.
//!
//! A [`Command`] has one mandatory capability (execution) and two optional
//! ones, modeled as defaulted methods returning `Option`:
//!
//! - *Container*: [`Command::sub_commands`] exposes a nested [`CommandMap`]
//!   of sub-commands. [`TreeCommand`] is the built-in container.
//! - *Completable*: [`Command::completions`] generates completion strings for
//!   the command's own argument position (file names, session ids, ...).
//!
//! Traversal code checks for a capability by asking "is it `Some`?" instead
//! of relying on an inheritance hierarchy or type-tag switches, so any value
//! can advertise any combination.

use crate::map::CommandMap;

/// One whitespace-delimited token of an input line.
///
/// Tokens are opaque: no quoting or escaping rules apply.
pub type Argument = String;

/// The contract every shell command satisfies.
pub trait Command {
    /// Execute the command with the residual arguments left over after
    /// resolution.
    ///
    /// Implementations may fail with any error; the library propagates it
    /// unchanged through [`CommandMap::exec`].
    fn exec(&self, args: &[Argument]) -> Result<(), anyhow::Error>;

    /// Container capability: the nested map of sub-commands, if this command
    /// is a group. Defaults to `None` (plain leaf).
    fn sub_commands(&self) -> Option<&CommandMap> {
        None
    }

    /// Completable capability: completions for an argument that currently
    /// reads `partial`.
    ///
    /// `None` (the default) means the capability is absent, which is distinct
    /// from `Some(vec![])` (capability present, nothing matches right now).
    fn completions(&self, partial: &str) -> Option<Vec<String>> {
        let _ = partial;
        None
    }
}

impl std::fmt::Debug for dyn Command + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Command")
    }
}

/// A leaf command backed by a closure.
///
/// Saves defining a struct for commands with no state of their own:
///
/// ```rust
/// use cmdtree::{CommandMap, FnCommand};
///
/// let mut commands = CommandMap::new();
/// commands
///     .add("version", FnCommand::new(|_args| {
///         println!("cmdtree 0.1.0");
///         Ok(())
///     }))
///     .unwrap();
/// ```
pub struct FnCommand<F> {
    f: F,
}

impl<F> FnCommand<F>
where
    F: Fn(&[Argument]) -> Result<(), anyhow::Error>,
{
    /// Wrap `f` as a command.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Command for FnCommand<F>
where
    F: Fn(&[Argument]) -> Result<(), anyhow::Error>,
{
    fn exec(&self, args: &[Argument]) -> Result<(), anyhow::Error> {
        (self.f)(args)
    }
}

/// A command group: wraps a [`CommandMap`] and exposes it through the
/// Container capability.
///
/// Executing a `TreeCommand` is a no-op that always succeeds. Selecting a
/// group with no trailing sub-command token is a legitimate terminal state,
/// not an error; a shell that wants "help for this group" behavior can
/// inspect the resolved command's [`Command::sub_commands`].
pub struct TreeCommand {
    commands: CommandMap,
}

impl TreeCommand {
    /// Wrap `commands` as a single command value.
    ///
    /// The tree takes exclusive ownership of its sub-map; hierarchies form a
    /// tree, never a graph.
    pub fn new(commands: CommandMap) -> Self {
        Self { commands }
    }
}

impl Command for TreeCommand {
    fn exec(&self, _args: &[Argument]) -> Result<(), anyhow::Error> {
        Ok(())
    }

    fn sub_commands(&self) -> Option<&CommandMap> {
        Some(&self.commands)
    }
}
