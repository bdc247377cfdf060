//! # cmdtree
//!
//! Building blocks for interactive command-line shells: a hierarchical
//! registry of named commands, exact resolution of input lines against that
//! hierarchy, and prefix completion for a line editor's tab handler.
//!
//! Both halves walk the same structure. On Enter a shell calls
//! [`CommandMap::exec`], which requires an exact match for every token on the
//! path and hands the leftover tokens to the resolved command as arguments.
//! On Tab it calls [`Completer::complete`], which matches every token exactly
//! except the one under the cursor, matched by prefix.
//!
//! ## Quick start
//!
//! ```rust
//! use cmdtree::{CommandMap, Completer, FnCommand, TreeCommand};
//!
//! let mut net = CommandMap::new();
//! net.add("connect", FnCommand::new(|args| {
//!     println!("connecting to {:?}", args);
//!     Ok(())
//! }))?;
//!
//! let mut shell = CommandMap::new();
//! shell.add("net", TreeCommand::new(net))?;
//! shell.add("quit", FnCommand::new(|_args| Ok(())))?;
//!
//! // Enter: resolve and run.
//! let line = ["net".to_string(), "connect".to_string(), "example.com".to_string()];
//! shell.exec(&line)?;
//!
//! // Tab: complete.
//! let completer = Completer::new(&shell);
//! assert_eq!(completer.complete("net c"), vec!["net connect"]);
//! # Ok::<(), cmdtree::Error>(())
//! ```
//!
//! The library does no I/O and installs no global state; each shell instance
//! owns its own [`CommandMap`] and [`Completer`]. Wiring up a terminal or
//! readline front end is the caller's job.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod command;
pub mod complete;
pub mod error;
pub mod map;

pub use self::command::{Argument, Command, FnCommand, TreeCommand};
pub use self::complete::{Completer, Completion};
pub use self::error::{Error, Result};
pub use self::map::CommandMap;
