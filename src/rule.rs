//! Rule interface.
//!
//! A rule is a set of callbacks keyed by node type, plus one program-enter and
//! one program-exit hook. `RuleVisitor` drives every active rule through a
//! single traversal; a rule only reports from `exit_program`.

use indexmap::IndexSet;
use oxc_ast::ast::{CallExpression, IdentifierReference, JSXOpeningElement, Program};
use serde::Serialize;
use tracing::{debug, trace};

use crate::context::{LintContext, ReadPosition};
use crate::directive::{scan_directives, DirectiveState};
use crate::report::{Finding, Fix};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Suggestion,
}

/// Static description of a rule, as exposed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: RuleKind,
    pub fixable: bool,
}

pub trait Rule: Send {
    fn meta(&self) -> &'static RuleMeta;

    fn enter_program(&mut self, _ctx: &LintContext<'_>, _program: &Program<'_>) {}

    /// Called for every identifier reference. `position` is set when the
    /// reference sits in a read position.
    fn identifier_reference(
        &mut self,
        _ctx: &LintContext<'_>,
        _ident: &IdentifierReference<'_>,
        _position: Option<ReadPosition>,
    ) {
    }

    fn jsx_opening_element(&mut self, _ctx: &LintContext<'_>, _element: &JSXOpeningElement<'_>) {}

    fn call_expression(&mut self, _ctx: &LintContext<'_>, _call: &CallExpression<'_>) {}

    fn exit_program(&mut self, ctx: &LintContext<'_>) -> Option<Finding>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// CAUSE COLLECTION
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Scanning,
    DirectiveFound,
    Done,
}

/// Directive state plus the deduplicated causes one rule has seen in a file.
#[derive(Debug, Default)]
pub struct CauseCollector {
    phase: Phase,
    directives: DirectiveState,
    causes: IndexSet<String>,
}

impl CauseCollector {
    pub fn enter(&mut self, program: &Program<'_>) {
        self.directives = scan_directives(program);
        self.causes.clear();
        self.phase = if self.directives.has_any() {
            Phase::DirectiveFound
        } else {
            Phase::Scanning
        };
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Visitors do nothing unless this holds.
    pub fn is_scanning(&self) -> bool {
        self.phase == Phase::Scanning
    }

    pub fn add(&mut self, cause: impl Into<String>) {
        if !self.is_scanning() {
            return;
        }
        let cause = cause.into();
        trace!(cause = %cause, "cause recorded");
        self.causes.insert(cause);
    }

    pub fn causes(&self) -> impl Iterator<Item = &str> {
        self.causes.iter().map(String::as_str)
    }

    /// Close the file. Emits a finding when no `'use client'` directive is
    /// present and at least one cause was recorded.
    pub fn finish(
        &mut self,
        meta: &RuleMeta,
        ctx: &LintContext<'_>,
        message: fn(&str) -> String,
    ) -> Option<Finding> {
        self.phase = Phase::Done;
        if self.directives.has_client_directive || self.causes.is_empty() {
            return None;
        }

        let causes: Vec<String> = self.causes.drain(..).collect();
        debug!(rule = meta.name, file = ctx.file_path(), causes = ?causes, "missing 'use client'");

        Some(Finding {
            rule: meta.name.to_string(),
            message: message(&causes.join(", ")),
            causes,
            file: ctx.file_path().to_string(),
            location: ctx.root_location(),
            fix: meta.fixable.then(|| Fix::insert_use_client(ctx.program_start())),
        })
    }
}
