//! Integration tests for line completion.
//!
//! The scenarios mirror what a readline tab handler sees: a partially typed
//! line, a cursor, and a fixed command hierarchy.

use cmdtree::{Argument, Command, CommandMap, Completer, TreeCommand};

struct Nop;

impl Command for Nop {
    fn exec(&self, _args: &[Argument]) -> Result<(), anyhow::Error> {
        Ok(())
    }
}

/// Completable leaf mimicking file-name completion over a fixed listing.
struct Open;

impl Command for Open {
    fn exec(&self, _args: &[Argument]) -> Result<(), anyhow::Error> {
        Ok(())
    }

    fn completions(&self, partial: &str) -> Option<Vec<String>> {
        let listing = ["notes.txt", "todo.txt", "main.rs"];
        Some(
            listing
                .iter()
                .filter(|name| name.starts_with(partial))
                .map(|name| name.to_string())
                .collect(),
        )
    }
}

fn flat_names() -> CommandMap {
    let mut map = CommandMap::new();
    for name in ["john", "james", "mary", "nancy"] {
        map.add(name, Nop).unwrap();
    }
    map
}

fn hierarchy() -> CommandMap {
    let mut sub = CommandMap::new();
    for name in ["jacob", "jingleheimer", "schmidt"] {
        sub.add(name, Nop).unwrap();
    }

    let mut map = CommandMap::new();
    map.add("john", TreeCommand::new(sub)).unwrap();
    map.add("james", Nop).unwrap();
    map.add("mary", Nop).unwrap();
    map.add("nancy", Nop).unwrap();
    map
}

#[test]
fn test_empty_line_lists_all_top_level_commands() {
    let map = flat_names();
    let completer = Completer::new(&map);
    assert_eq!(
        completer.complete(""),
        vec!["james", "john", "mary", "nancy"]
    );
}

#[test]
fn test_prefix_filters_top_level_commands() {
    let map = flat_names();
    let completer = Completer::new(&map);
    assert_eq!(completer.complete("j"), vec!["james", "john"]);
    assert_eq!(completer.complete("ma"), vec!["mary"]);
    assert!(completer.complete("x").is_empty());
}

#[test]
fn test_trailing_space_completes_next_level() {
    let map = hierarchy();
    let completer = Completer::new(&map);
    assert_eq!(
        completer.complete("john "),
        vec!["john jacob", "john jingleheimer", "john schmidt"]
    );
}

#[test]
fn test_second_field_prefix_filters_sub_commands() {
    let map = hierarchy();
    let completer = Completer::new(&map);
    assert_eq!(
        completer.complete("john j"),
        vec!["john jacob", "john jingleheimer"]
    );
}

#[test]
fn test_candidates_are_sorted() {
    let mut map = CommandMap::new();
    for name in ["zeta", "alpha", "mu"] {
        map.add(name, Nop).unwrap();
    }
    let completer = Completer::new(&map);
    assert_eq!(completer.complete(""), vec!["alpha", "mu", "zeta"]);
}

#[test]
fn test_completable_leaf_completes_file_names() {
    let mut map = CommandMap::new();
    map.add("open", Open).unwrap();
    let completer = Completer::new(&map);

    assert_eq!(
        completer.complete("open "),
        vec!["open main.rs", "open notes.txt", "open todo.txt"]
    );
    assert_eq!(
        completer.complete("open t"),
        vec!["open todo.txt"]
    );
}

#[test]
fn test_completable_leaf_serves_every_argument_position() {
    let mut map = CommandMap::new();
    map.add("open", Open).unwrap();
    let completer = Completer::new(&map);

    assert_eq!(
        completer.complete("open notes.txt to"),
        vec!["open notes.txt todo.txt"]
    );
}

#[test]
fn test_mid_line_cursor_preserves_tail() {
    let map = hierarchy();
    let completer = Completer::new(&map);

    // Cursor right after "john j"; the rest of the line is untouched.
    let line = "john j extra words";
    let completion = completer.complete_at(line, 6);
    assert_eq!(completion.head, "john ");
    assert_eq!(completion.candidates, vec!["jacob", "jingleheimer"]);
    assert_eq!(completion.tail, " extra words");
}

#[test]
fn test_completion_is_idempotent() {
    let map = hierarchy();
    let completer = Completer::new(&map);

    let first = completer.complete("john j");
    let second = completer.complete("john j");
    assert_eq!(first, second);

    let again = completer.complete_at("john ", 5);
    assert_eq!(again, completer.complete_at("john ", 5));
}

#[test]
fn test_completer_never_fails_on_garbage() {
    let map = hierarchy();
    let completer = Completer::new(&map);

    for line in ["", " ", "john john john", "mary lamb fleece", "\t \t"] {
        // Best-effort: any input yields a (possibly empty) candidate list.
        let _ = completer.complete(line);
    }
}
