//! `event-handler`: `on<Event>` attributes on native elements.
//!
//! Only lowercase tags are inspected. A capitalized tag is a component, and
//! handing it an `onClick` prop is not by itself a reason for this file to be
//! a client module.

use oxc_ast::ast::{JSXAttributeItem, JSXAttributeName, JSXElementName, JSXOpeningElement, Program};

use crate::context::LintContext;
use crate::naming::{is_event_handler_name, is_native_tag};
use crate::report::{event_handler_message, Finding};
use crate::rule::{CauseCollector, Rule, RuleKind, RuleMeta};

pub const META: RuleMeta = RuleMeta {
    name: "event-handler",
    description: "Add 'use client' directive if event handlers are used in a React file",
    kind: RuleKind::Suggestion,
    fixable: true,
};

#[derive(Debug, Default)]
pub struct EventHandler {
    collector: CauseCollector,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Plain tag name of an opening element; `None` for member, namespaced and
/// `this` tags.
pub fn tag_name<'e>(name: &'e JSXElementName<'_>) -> Option<&'e str> {
    match name {
        JSXElementName::Identifier(id) => Some(id.name.as_str()),
        JSXElementName::IdentifierReference(id) => Some(id.name.as_str()),
        _ => None,
    }
}

impl Rule for EventHandler {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn enter_program(&mut self, _ctx: &LintContext<'_>, program: &Program<'_>) {
        self.collector.enter(program);
    }

    fn jsx_opening_element(&mut self, _ctx: &LintContext<'_>, element: &JSXOpeningElement<'_>) {
        if !self.collector.is_scanning() {
            return;
        }
        match tag_name(&element.name) {
            Some(tag) if is_native_tag(tag) => {}
            _ => return,
        }

        for item in &element.attributes {
            let JSXAttributeItem::Attribute(attr) = item else {
                continue;
            };
            if let JSXAttributeName::Identifier(id) = &attr.name {
                if is_event_handler_name(id.name.as_str()) {
                    self.collector.add(id.name.as_str());
                }
            }
        }
    }

    fn exit_program(&mut self, ctx: &LintContext<'_>) -> Option<Finding> {
        self.collector.finish(&META, ctx, event_handler_message)
    }
}
