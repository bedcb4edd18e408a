//! `use-client-hook`: hooks called inside component definitions.
//!
//! A call is a hook call when its callee is a hook-shaped identifier
//! (`useState(..)`) or `React.<hook>` / `react.<hook>`. It only counts when one
//! of its ancestors defines a component: `function Foo() {}` or
//! `const Foo = () => {}`.

use oxc_ast::ast::{CallExpression, ChainElement, Expression, Program};

use crate::context::{Ancestor, LintContext};
use crate::naming::{is_component_name, is_hook_name};
use crate::report::{client_hook_message, Finding};
use crate::rule::{CauseCollector, Rule, RuleKind, RuleMeta};

pub const META: RuleMeta = RuleMeta {
    name: "use-client-hook",
    description: "Add 'use client' directive if client side hooks are used in a React file",
    kind: RuleKind::Suggestion,
    fixable: true,
};

const REACT_NAMESPACES: &[&str] = &["React", "react"];

#[derive(Debug, Default)]
pub struct ClientHook {
    collector: CauseCollector,
}

impl ClientHook {
    pub fn new() -> Self {
        Self::default()
    }
}

/// `useX` or `React.useX`.
pub fn is_hook_callee(callee: &Expression<'_>) -> bool {
    match callee.without_parentheses() {
        Expression::Identifier(id) => is_hook_name(id.name.as_str()),
        Expression::StaticMemberExpression(member) => {
            let Expression::Identifier(object) = member.object.without_parentheses() else {
                return false;
            };
            REACT_NAMESPACES.contains(&object.name.as_str())
                && is_hook_name(member.property.name.as_str())
        }
        _ => false,
    }
}

/// Innermost ancestor that defines a component, by name.
pub fn enclosing_component(ancestors: &[Ancestor]) -> Option<&str> {
    ancestors.iter().rev().find_map(|ancestor| match ancestor {
        Ancestor::Function {
            name: Some(name),
            is_declaration: true,
        } if is_component_name(name) => Some(name.as_str()),
        Ancestor::VariableDeclarator {
            name: Some(name),
            init_is_arrow: true,
        } if is_component_name(name) => Some(name.as_str()),
        _ => None,
    })
}

/// Display name of a callee: `useState`, `React.useEffect`, `this.use`.
/// Calls resolve through to their own callee.
pub fn callee_name(callee: &Expression<'_>) -> Option<String> {
    match callee {
        Expression::Identifier(id) => Some(id.name.to_string()),
        Expression::ThisExpression(_) => Some("this".to_string()),
        Expression::Super(_) => Some("super".to_string()),
        Expression::StaticMemberExpression(member) => {
            let object = callee_name(&member.object)?;
            Some(format!("{}.{}", object, member.property.name))
        }
        Expression::ComputedMemberExpression(member) => {
            let Expression::Identifier(property) = &member.expression else {
                return None;
            };
            let object = callee_name(&member.object)?;
            Some(format!("{}.{}", object, property.name))
        }
        Expression::CallExpression(call) => callee_name(&call.callee),
        Expression::ChainExpression(chain) => match &chain.expression {
            ChainElement::CallExpression(call) => callee_name(&call.callee),
            ChainElement::StaticMemberExpression(member) => {
                let object = callee_name(&member.object)?;
                Some(format!("{}.{}", object, member.property.name))
            }
            _ => None,
        },
        Expression::ParenthesizedExpression(paren) => callee_name(&paren.expression),
        _ => None,
    }
}

impl Rule for ClientHook {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn enter_program(&mut self, _ctx: &LintContext<'_>, program: &Program<'_>) {
        self.collector.enter(program);
    }

    fn call_expression(&mut self, ctx: &LintContext<'_>, call: &CallExpression<'_>) {
        if !self.collector.is_scanning() || !is_hook_callee(&call.callee) {
            return;
        }
        if enclosing_component(ctx.ancestors()).is_none() {
            return;
        }
        self.collector
            .add(callee_name(&call.callee).unwrap_or_default());
    }

    fn exit_program(&mut self, ctx: &LintContext<'_>) -> Option<Finding> {
        self.collector.finish(&META, ctx, client_hook_message)
    }
}
