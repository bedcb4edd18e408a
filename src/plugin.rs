//! Plugin descriptor and rule registry.

use serde_json::{json, Value};

use crate::browser_api::{self, BrowserApi};
use crate::client_hook::{self, ClientHook};
use crate::config::options_schema;
use crate::event_handler::{self, EventHandler};
use crate::rule::{Rule, RuleMeta};

pub const PLUGIN_NAME: &str = env!("CARGO_PKG_NAME");
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Every rule the plugin ships, in registration order.
pub const RULES: &[RuleMeta] = &[event_handler::META, client_hook::META, browser_api::META];

pub fn find_rule(name: &str) -> Option<&'static RuleMeta> {
    RULES.iter().find(|meta| meta.name == name)
}

/// Fresh per-file instance of the rule called `name`.
pub fn create_rule(name: &str) -> Option<Box<dyn Rule>> {
    match name {
        n if n == browser_api::META.name => Some(Box::new(BrowserApi::new())),
        n if n == event_handler::META.name => Some(Box::new(EventHandler::new())),
        n if n == client_hook::META.name => Some(Box::new(ClientHook::new())),
        _ => None,
    }
}

/// Host-facing description of one rule: kind, fixability, docs and options.
pub fn describe_rule(meta: &RuleMeta) -> Value {
    json!({
        "type": meta.kind,
        "fixable": if meta.fixable { Value::from("code") } else { Value::Null },
        "docs": { "description": meta.description },
        "schema": options_schema(),
    })
}

/// `{ meta: { name, version }, rules: { <name>: { meta } } }`
pub fn describe() -> Value {
    let rules: serde_json::Map<String, Value> = RULES
        .iter()
        .map(|meta| (meta.name.to_string(), json!({ "meta": describe_rule(meta) })))
        .collect();
    json!({
        "meta": { "name": PLUGIN_NAME, "version": PLUGIN_VERSION },
        "rules": rules,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names() {
        let names: Vec<&str> = RULES.iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["event-handler", "use-client-hook", "browser-api"]);
        for name in names {
            let rule = create_rule(name).expect("registered rule");
            assert_eq!(rule.meta().name, name);
        }
        assert!(find_rule("no-such-rule").is_none());
        assert!(create_rule("no-such-rule").is_none());
    }

    #[test]
    fn test_describe() {
        let plugin = describe();
        assert_eq!(plugin["meta"]["name"], json!(PLUGIN_NAME));
        let rule = &plugin["rules"]["browser-api"]["meta"];
        assert_eq!(rule["type"], json!("suggestion"));
        assert_eq!(rule["fixable"], json!("code"));
        assert_eq!(
            rule["docs"]["description"],
            json!("Add 'use client' directive if browser api is used in a React file")
        );
        assert!(rule["schema"].is_array());
    }
}
