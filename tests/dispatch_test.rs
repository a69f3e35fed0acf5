//! Integration tests for first-match-wins dispatch.
//!
//! These tests verify that:
//! - Rules are tried in declaration order and the first match wins
//! - Rules after the winning one are never evaluated
//! - Unmatched inputs fall through to the mandatory default
//! - Closed enums can opt into type-based dispatch through `Narrow`

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod common;

use std::cell::Cell;
use std::error::Error;
use std::io;
use std::rc::Rc;

use verdict::prelude::*;

type Failure = Box<dyn Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
#[error("access denied to {resource}")]
struct AccessDenied {
    resource: String,
}

#[derive(Debug, thiserror::Error)]
#[error("runtime fault: {0}")]
struct RuntimeFault(String);

/// Wrap `rule` so every evaluation bumps `calls`.
fn counted<I, O>(calls: Rc<Cell<u32>>, rule: impl Fn(I) -> Outcome<O, I>) -> impl Fn(I) -> Outcome<O, I> {
    move |input| {
        calls.set(calls.get() + 1);
        rule(input)
    }
}

struct Handlers {
    io_rule_calls: Rc<Cell<u32>>,
    access_rule_calls: Rc<Cell<u32>>,
}

impl Handlers {
    fn new() -> Self {
        Self {
            io_rule_calls: Rc::new(Cell::new(0)),
            access_rule_calls: Rc::new(Cell::new(0)),
        }
    }

    fn dispatcher(&self) -> Dispatcher<Failure, String, impl Fn(Failure) -> String> {
        Match::new()
            .when(counted(
                Rc::clone(&self.io_rule_calls),
                if_type(|e: io::Error| format!("retry after io error: {e}")),
            ))
            .when(counted(
                Rc::clone(&self.access_rule_calls),
                if_type(|e: AccessDenied| format!("ask for access to {}", e.resource)),
            ))
            .otherwise(|e: Failure| format!("give up: {e}"))
    }
}

/// Test that an io failure is handled by the first rule only.
///
/// # GIVEN
/// A dispatcher with an io rule, then an access rule, then a default
///
/// # WHEN
/// An io failure is dispatched
///
/// # THEN
/// The io rule's output is returned and the access rule is never evaluated
#[test]
fn test_io_failure_matches_first_rule_and_stops() {
    common::init_tracing();

    // GIVEN
    let handlers = Handlers::new();
    let dispatcher = handlers.dispatcher();

    // WHEN
    let failure: Failure = Box::new(io::Error::new(io::ErrorKind::TimedOut, "socket timeout"));
    let handled = dispatcher.apply(failure);

    // THEN
    assert_eq!(handled, "retry after io error: socket timeout");
    assert_eq!(handlers.io_rule_calls.get(), 1);
    assert_eq!(handlers.access_rule_calls.get(), 0, "later rules must not run");
}

/// Test that a failure matching no rule reaches the default.
///
/// # GIVEN
/// The same dispatcher
///
/// # WHEN
/// A runtime fault that neither rule recognises is dispatched
///
/// # THEN
/// Both rules decline and the default's output is returned
#[test]
fn test_unrecognised_failure_falls_through_to_default() {
    common::init_tracing();

    // GIVEN
    let handlers = Handlers::new();
    let dispatcher = handlers.dispatcher();

    // WHEN
    let failure: Failure = Box::new(RuntimeFault("null reference".to_string()));
    let handled = dispatcher.apply(failure);

    // THEN
    assert_eq!(handled, "give up: runtime fault: null reference");
    assert_eq!(handlers.io_rule_calls.get(), 1);
    assert_eq!(handlers.access_rule_calls.get(), 1);
}

/// Test that the second rule handles what the first declines.
///
/// # GIVEN
/// The same dispatcher
///
/// # WHEN
/// An access failure is dispatched
///
/// # THEN
/// The access rule's output is returned and the default is not used
#[test]
fn test_second_rule_handles_what_first_declines() {
    common::init_tracing();

    let handlers = Handlers::new();
    let dispatcher = handlers.dispatcher();

    let failure: Failure = Box::new(AccessDenied {
        resource: "/etc/shadow".to_string(),
    });

    assert_eq!(dispatcher.apply(failure), "ask for access to /etc/shadow");
}

/// Test that one dispatcher serves many inputs.
///
/// # GIVEN
/// A dispatcher built once
///
/// # WHEN
/// Several failures of different kinds are dispatched through it in turn
///
/// # THEN
/// Each gets the handler for its own kind
#[test]
fn test_dispatcher_is_reusable() {
    common::init_tracing();

    let handlers = Handlers::new();
    let dispatcher = handlers.dispatcher();

    let failures: Vec<Failure> = vec![
        Box::new(RuntimeFault("a".to_string())),
        Box::new(io::Error::other("b")),
        Box::new(AccessDenied {
            resource: "c".to_string(),
        }),
    ];
    let handled: Vec<String> = failures.into_iter().map(|f| dispatcher.apply(f)).collect();

    assert_eq!(
        handled,
        vec![
            "give up: runtime fault: a".to_string(),
            "retry after io error: b".to_string(),
            "ask for access to c".to_string(),
        ]
    );
}

// ==========================================================================
// Closed enums
// ==========================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum StorageFault {
    Missing(String),
    Corrupt(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Fault {
    Storage(StorageFault),
    Permission(String),
    Internal(String),
}

impl Narrow<StorageFault> for Fault {
    fn narrow(self) -> Result<StorageFault, Self> {
        match self {
            Self::Storage(fault) => Ok(fault),
            other => Err(other),
        }
    }
}

/// Test that narrowing to a category enum matches every variant inside it.
///
/// # GIVEN
/// A closed `Fault` enum that narrows to its nested `StorageFault` category
///
/// # WHEN
/// Faults from inside and outside the category are dispatched on the category
///
/// # THEN
/// Every storage variant matches the category rule and the rest use later
/// rules or the default
#[test]
fn test_closed_enum_category_dispatch() {
    common::init_tracing();

    let describe = Match::new()
        .when(if_type(|fault: StorageFault| match fault {
            StorageFault::Missing(what) => format!("restore {what}"),
            StorageFault::Corrupt(what) => format!("repair {what}"),
        }))
        .when(if_is(
            |fault: &Fault| matches!(fault, Fault::Permission(_)),
            |_| "escalate".to_string(),
        ))
        .otherwise(|fault: Fault| format!("page on-call: {fault:?}"));

    assert_eq!(
        describe.apply(Fault::Storage(StorageFault::Missing("index".to_string()))),
        "restore index"
    );
    assert_eq!(
        describe.apply(Fault::Storage(StorageFault::Corrupt("wal".to_string()))),
        "repair wal"
    );
    assert_eq!(describe.apply(Fault::Permission("root".to_string())), "escalate");
    assert_eq!(
        describe.apply(Fault::Internal("oops".to_string())),
        r#"page on-call: Internal("oops")"#
    );
}

/// Test the single-value form of dispatch.
///
/// # GIVEN
/// A value bound with `match_value`
///
/// # WHEN
/// Rules are added and `otherwise` is called
///
/// # THEN
/// The table runs immediately and the first match wins
#[test]
fn test_match_value_runs_immediately() {
    common::init_tracing();

    let verdict = match_value(12)
        .when(if_equals(7, |_| "lucky".to_string()))
        .when(if_is(|n: &i32| n % 2 == 0, |n| format!("{n} is even")))
        .when(if_is(|n: &i32| *n > 10, |_| "big".to_string()))
        .otherwise(|n| format!("{n} is unremarkable"));

    assert_eq!(verdict, "12 is even");
}
