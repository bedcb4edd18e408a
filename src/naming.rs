//! Name Classifier
//!
//! Shape-based predicates for identifiers. A "component" is a PascalCase
//! name, a "hook" is `use` or `use` followed by an uppercase letter or digit.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref COMPONENT_NAME_RE: Regex = Regex::new(r"^[A-Z][a-zA-Z0-9]*$").unwrap();
    static ref HOOK_NAME_RE: Regex = Regex::new(r"^use[A-Z0-9]").unwrap();
    static ref NATIVE_TAG_RE: Regex = Regex::new(r"^[a-z]").unwrap();
    static ref EVENT_HANDLER_RE: Regex = Regex::new(r"^on[A-Z]").unwrap();
}

/// Check if a name looks like a component (`Foo`, `F1oo2`)
pub fn is_component_name(name: &str) -> bool {
    COMPONENT_NAME_RE.is_match(name)
}

/// Check if a name looks like a hook (`use`, `useState`, `use3d`)
pub fn is_hook_name(name: &str) -> bool {
    name == "use" || HOOK_NAME_RE.is_match(name)
}

/// Check if a markup tag refers to a host element rather than a component.
/// `div` and `my-element` are native, `Button` and `_x` are not.
pub fn is_native_tag(tag_name: &str) -> bool {
    NATIVE_TAG_RE.is_match(tag_name)
}

/// Check if an attribute name has the `on<Event>` shape (`onClick`, `onKeyDown`)
pub fn is_event_handler_name(attr_name: &str) -> bool {
    EVENT_HANDLER_RE.is_match(attr_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_component_name() {
        assert!(is_component_name("Foo"));
        assert!(is_component_name("F1oo2"));
        assert!(is_component_name("MyComponent"));
        assert!(!is_component_name("foo"));
        assert!(!is_component_name(""));
        assert!(!is_component_name("My_Component"));
        assert!(!is_component_name("$Foo"));
    }

    #[test]
    fn test_is_hook_name() {
        assert!(is_hook_name("use"));
        assert!(is_hook_name("useState"));
        assert!(is_hook_name("use3d"));
        assert!(!is_hook_name("user"));
        assert!(!is_hook_name("USE"));
        assert!(!is_hook_name("usestate"));
        assert!(!is_hook_name(""));
    }

    #[test]
    fn test_is_native_tag() {
        assert!(is_native_tag("div"));
        assert!(is_native_tag("my-element"));
        assert!(!is_native_tag("Button"));
        assert!(!is_native_tag("_private"));
        assert!(!is_native_tag(""));
    }

    #[test]
    fn test_is_event_handler_name() {
        assert!(is_event_handler_name("onClick"));
        assert!(is_event_handler_name("onKeyDown"));
        assert!(!is_event_handler_name("onclick"));
        assert!(!is_event_handler_name("on"));
        assert!(!is_event_handler_name("className"));
    }
}
