//! `browser-api`: browser-only globals read outside a `'use client'` file.

use oxc_ast::ast::{IdentifierReference, Program};

use crate::browser_globals::is_browser_global;
use crate::context::{LintContext, ReadPosition};
use crate::report::{browser_api_message, Finding};
use crate::rule::{CauseCollector, Rule, RuleKind, RuleMeta};

pub const META: RuleMeta = RuleMeta {
    name: "browser-api",
    description: "Add 'use client' directive if browser api is used in a React file",
    kind: RuleKind::Suggestion,
    fixable: true,
};

#[derive(Debug, Default)]
pub struct BrowserApi {
    collector: CauseCollector,
}

impl BrowserApi {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Rule for BrowserApi {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn enter_program(&mut self, _ctx: &LintContext<'_>, program: &Program<'_>) {
        self.collector.enter(program);
    }

    fn identifier_reference(
        &mut self,
        ctx: &LintContext<'_>,
        ident: &IdentifierReference<'_>,
        position: Option<ReadPosition>,
    ) {
        if !self.collector.is_scanning() {
            return;
        }
        let name = ident.name.as_str();
        if !is_browser_global(name) {
            return;
        }
        // A local binding with the same name shadows the global.
        if position.is_some() && ctx.is_global_reference(ident) {
            self.collector.add(name);
        }
    }

    fn exit_program(&mut self, ctx: &LintContext<'_>) -> Option<Finding> {
        self.collector.finish(&META, ctx, browser_api_message)
    }
}
