//! Line completion against a command hierarchy.
//!
//! The completer replays the same token walk as resolution: every token
//! before the cursor must match a name exactly, while the token under the
//! cursor is matched by prefix and produces the candidates. At each exact
//! match the walk descends according to the command's capabilities, into a
//! sub-map for a Container or into dynamically generated completions for a
//! Completable.
//!
//! Unlike resolution, completion is advisory and never fails: empty,
//! unmatched, or otherwise unpromising input just yields fewer candidates.

use tracing::trace;

use crate::command::Command;
use crate::map::CommandMap;

/// The result of completing a line at a cursor position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion<'l> {
    /// The already-resolved, space-joined prefix of the line.
    pub head: String,
    /// Suggestions for the token under the cursor, sorted ascending.
    pub candidates: Vec<String>,
    /// The untouched remainder of the line after the cursor. A line editor
    /// reattaches this after inserting a chosen candidate.
    pub tail: &'l str,
}

/// Completes input lines against a fixed top-level [`CommandMap`].
///
/// The completer borrows its map, which pins the hierarchy for the
/// completer's lifetime: registration has to finish before completion
/// starts.
pub struct Completer<'a> {
    commands: &'a CommandMap,
}

/// One level of the completion walk.
enum Level<'a> {
    /// A real map of (sub-)commands.
    Map(&'a CommandMap),
    /// Synthesized from a Completable's dynamic completions. Every key leads
    /// back to the same command, so deeper argument positions keep consulting
    /// it.
    Dynamic(Vec<String>, &'a dyn Command),
    /// A capability-less leaf matched exactly; later fields complete to
    /// nothing.
    Exhausted,
}

impl<'a> Level<'a> {
    /// Entries at this level whose key starts with `prefix`.
    fn matches(&self, prefix: &str) -> Vec<(String, &'a dyn Command)> {
        match self {
            Level::Map(map) => map
                .completions(prefix)
                .into_iter()
                .map(|(name, command)| (name.to_owned(), command))
                .collect(),
            Level::Dynamic(keys, command) => keys
                .iter()
                .filter(|key| key.starts_with(prefix))
                .map(|key| (key.clone(), *command))
                .collect(),
            Level::Exhausted => Vec::new(),
        }
    }
}

impl<'a> Completer<'a> {
    /// Create a completer over `commands`.
    pub fn new(commands: &'a CommandMap) -> Self {
        Self { commands }
    }

    /// Complete `input` with the cursor at the end of the line.
    ///
    /// Returns full command strings (resolved head plus candidate), ready to
    /// show in a completion list:
    ///
    /// ```rust
    /// use cmdtree::{CommandMap, Completer, FnCommand};
    ///
    /// let mut commands = CommandMap::new();
    /// commands.add("halt", FnCommand::new(|_args| Ok(())))?;
    /// commands.add("help", FnCommand::new(|_args| Ok(())))?;
    ///
    /// let completer = Completer::new(&commands);
    /// assert_eq!(completer.complete("h"), vec!["halt", "help"]);
    /// # Ok::<(), cmdtree::Error>(())
    /// ```
    pub fn complete(&self, input: &str) -> Vec<String> {
        let completion = self.complete_at(input, input.len());
        completion
            .candidates
            .iter()
            .map(|candidate| format!("{}{}", completion.head, candidate))
            .collect()
    }

    /// Complete `line` at byte position `cursor`.
    ///
    /// `cursor` must lie within the line on a character boundary; text after
    /// it passes through as [`Completion::tail`] without being examined.
    pub fn complete_at<'l>(&self, line: &'l str, cursor: usize) -> Completion<'l> {
        debug_assert!(line.is_char_boundary(cursor));
        let tail = &line[cursor..];
        let before = &line[..cursor];

        let mut fields: Vec<&str> = before.split_whitespace().collect();
        // The token under the cursor may be empty (blank line, or a line
        // ending in whitespace); materialize it so there is always a field to
        // match against.
        if fields.is_empty() || before.ends_with(char::is_whitespace) {
            fields.push("");
        }

        let mut head = String::new();
        let mut candidates = Vec::new();
        let mut level = Level::Map(self.commands);

        for (i, field) in fields.iter().enumerate() {
            let last = i == fields.len() - 1;
            for (name, command) in level.matches(field) {
                if name == *field {
                    // Fully resolved. Names are unique per level, so stop
                    // scanning and descend.
                    head.push_str(&name);
                    head.push(' ');
                    let next_field = fields.get(i + 1).copied().unwrap_or("");
                    level = Self::descend(command, next_field);
                    break;
                } else if last {
                    candidates.push(name);
                }
            }
        }

        candidates.sort();
        trace!(%head, candidates = candidates.len(), "completed line");
        Completion {
            head,
            candidates,
            tail,
        }
    }

    /// Pick the next level after an exact match, by capability.
    fn descend(command: &'a dyn Command, next_field: &str) -> Level<'a> {
        if let Some(sub) = command.sub_commands() {
            Level::Map(sub)
        } else if let Some(keys) = command.completions(next_field) {
            Level::Dynamic(keys, command)
        } else {
            Level::Exhausted
        }
    }
}
