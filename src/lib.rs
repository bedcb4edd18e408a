//! # use-client lint rules
//!
//! Decides whether a React module needs the `'use client'` directive and offers
//! the fix that inserts it.
//!
//! ## Rules
//!
//! 1. **browser-api**: a browser-only global (`window`, `document`,
//!    `localStorage`, ...) is read and not shadowed by a local binding.
//! 2. **event-handler**: a native element (`<button>`, `<div>`) carries an
//!    `on<Event>` attribute.
//! 3. **use-client-hook**: a hook (`useState`, `React.useEffect`) is called
//!    inside a component definition.
//!
//! ## Invariants
//!
//! 1. **Directive first**: a leading `'use client'` or `'use server'` directive
//!    turns every rule off for the file.
//! 2. **One finding per rule per file**: all causes a rule sees are collected,
//!    deduplicated in first-seen order, and reported once at the program root.
//! 3. **Idempotent fix**: applying a fix and linting again yields no findings.

#[cfg(feature = "napi")]
use napi_derive::napi;

pub mod browser_api;
pub mod browser_globals;
pub mod cache;
pub mod client_hook;
pub mod config;
pub mod context;
pub mod directive;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod event_handler;
pub mod naming;
pub mod plugin;
pub mod report;
pub mod rule;
pub mod visitor;

#[cfg(test)]
mod engine_tests;

pub use cache::ResultCache;
pub use config::{IgnorePath, LintConfig, RuleOptions};
pub use discovery::{lint_directory, FileFailure, FileReport, ProjectReport};
pub use engine::{FixOutput, Linter, MAX_FIX_PASSES};
pub use error::{LintError, Result};
pub use report::{apply_fixes, Finding, Fix, SourceLocation};
pub use rule::{Rule, RuleKind, RuleMeta};

#[cfg(feature = "napi")]
pub use engine::{fix_source_native, lint_source_native};

#[cfg(feature = "napi")]
#[napi]
pub fn describe_plugin_native() -> serde_json::Value {
    plugin::describe()
}
