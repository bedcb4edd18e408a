//! Rule options and project configuration.
//!
//! Every rule accepts one optional options object, `{ ignorePath }`, where
//! `ignorePath` is a glob or a list of globs matched against the file path
//! relative to the project root. Options are validated and compiled here, so a
//! bad value is rejected before any file is analyzed.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use crate::error::{LintError, Result};
use crate::plugin;

// ═══════════════════════════════════════════════════════════════════════════════
// RULE OPTIONS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IgnorePath {
    Single(String),
    Multiple(Vec<String>),
}

impl Default for IgnorePath {
    fn default() -> Self {
        IgnorePath::Multiple(Vec::new())
    }
}

impl IgnorePath {
    pub fn patterns(&self) -> Vec<&str> {
        match self {
            IgnorePath::Single(p) => vec![p.as_str()],
            IgnorePath::Multiple(ps) => ps.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleOptions {
    #[serde(default)]
    pub ignore_path: IgnorePath,
}

impl RuleOptions {
    pub fn ignoring<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RuleOptions {
            ignore_path: IgnorePath::Multiple(patterns.into_iter().map(Into::into).collect()),
        }
    }

    /// Read the options of `rule` from a host value: `null`, an options
    /// object, or an options array holding at most one object.
    pub fn from_value(rule: &str, value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(RuleOptions::default()),
            Value::Array(items) => match items.as_slice() {
                [] => Ok(RuleOptions::default()),
                [first] => Self::from_value(rule, first),
                _ => Err(LintError::Config {
                    rule: rule.to_string(),
                    reason: format!("expected at most 1 options object, got {}", items.len()),
                }),
            },
            Value::Object(_) => {
                serde_json::from_value(value.clone()).map_err(|e| LintError::Config {
                    rule: rule.to_string(),
                    reason: e.to_string(),
                })
            }
            other => Err(LintError::Config {
                rule: rule.to_string(),
                reason: format!("expected an options object, got {}", other),
            }),
        }
    }

    pub fn matcher(&self) -> Result<IgnoreMatcher> {
        IgnoreMatcher::new(&self.ignore_path.patterns())
    }
}

/// JSON schema of a rule's options array.
pub fn options_schema() -> Value {
    json!([
        {
            "type": "object",
            "properties": {
                "ignorePath": {
                    "anyOf": [
                        { "type": "string" },
                        { "type": "array", "items": { "type": "string" } }
                    ]
                }
            },
            "additionalProperties": false
        }
    ])
}

// ═══════════════════════════════════════════════════════════════════════════════
// IGNORE MATCHING
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    set: GlobSet,
}

impl IgnoreMatcher {
    pub fn new(patterns: &[&str]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = GlobBuilder::new(strip_dot_slash(pattern))
                .literal_separator(true)
                .build()
                .map_err(|source| LintError::InvalidGlob {
                    pattern: pattern.to_string(),
                    source,
                })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|source| LintError::InvalidGlob {
            pattern: patterns.join(", "),
            source,
        })?;
        Ok(IgnoreMatcher { set })
    }

    /// `relative_path` uses `/` separators (see [`relative_path`]). Paths that
    /// leave the root never match.
    pub fn is_match(&self, relative_path: &str) -> bool {
        let path = strip_dot_slash(relative_path);
        if path == ".." || path.starts_with("../") {
            return false;
        }
        !self.set.is_empty() && self.set.is_match(path)
    }
}

fn strip_dot_slash(s: &str) -> &str {
    s.strip_prefix("./").unwrap_or(s)
}

fn normal_part(c: &Component<'_>) -> Option<String> {
    match c {
        Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
        Component::ParentDir => Some("..".to_string()),
        Component::RootDir | Component::Prefix(_) | Component::CurDir => None,
    }
}

/// Path of `file` relative to `root`, joined with `/`. A file outside `root`
/// climbs out with `..` segments; a relative file under an absolute root (or
/// the reverse) keeps its own path.
pub fn relative_path(root: &Path, file: &Path) -> String {
    let parts: Vec<String> = match file.strip_prefix(root) {
        Ok(rel) => rel.components().filter_map(|c| normal_part(&c)).collect(),
        Err(_) if root.is_absolute() != file.is_absolute() => {
            file.components().filter_map(|c| normal_part(&c)).collect()
        }
        Err(_) => {
            let root_parts: Vec<Component<'_>> = root.components().collect();
            let file_parts: Vec<Component<'_>> = file.components().collect();
            let common = root_parts
                .iter()
                .zip(&file_parts)
                .take_while(|(a, b)| a == b)
                .count();
            let ups = root_parts[common..]
                .iter()
                .filter(|c| matches!(c, Component::Normal(_)))
                .count();
            std::iter::repeat("..".to_string())
                .take(ups)
                .chain(file_parts[common..].iter().filter_map(normal_part))
                .collect()
        }
    };
    parts.join("/")
}

// ═══════════════════════════════════════════════════════════════════════════════
// PROJECT CONFIG
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct RuleSettings {
    pub options: RuleOptions,
    pub ignore: IgnoreMatcher,
}

/// Enabled rules and their compiled options.
#[derive(Debug, Clone)]
pub struct LintConfig {
    pub root: PathBuf,
    rules: BTreeMap<String, RuleSettings>,
}

impl LintConfig {
    /// No rules enabled.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LintConfig {
            root: root.into(),
            rules: BTreeMap::new(),
        }
    }

    /// All rules enabled with default options.
    pub fn recommended(root: impl Into<PathBuf>) -> Self {
        let mut config = LintConfig::new(root);
        for meta in plugin::RULES {
            config.rules.insert(
                meta.name.to_string(),
                RuleSettings {
                    options: RuleOptions::default(),
                    ignore: IgnoreMatcher {
                        set: GlobSet::empty(),
                    },
                },
            );
        }
        config
    }

    pub fn with_rule(mut self, name: &str, options: RuleOptions) -> Result<Self> {
        self.set_rule(name, options)?;
        Ok(self)
    }

    pub fn set_rule(&mut self, name: &str, options: RuleOptions) -> Result<()> {
        if plugin::find_rule(name).is_none() {
            return Err(LintError::UnknownRule(name.to_string()));
        }
        let ignore = options.matcher()?;
        self.rules
            .insert(name.to_string(), RuleSettings { options, ignore });
        Ok(())
    }

    /// Parse `{ "root"?: string, "rules": { "<rule>": options | null } }`.
    /// `root` in the document overrides `default_root`.
    pub fn from_json(json: &str, default_root: impl Into<PathBuf>) -> Result<Self> {
        let doc: Value = serde_json::from_str(json)?;
        let root = doc
            .get("root")
            .and_then(Value::as_str)
            .map(PathBuf::from)
            .unwrap_or_else(|| default_root.into());

        let mut config = LintConfig::new(root);
        match doc.get("rules") {
            None | Some(Value::Null) => {}
            Some(Value::Object(rules)) => {
                for (name, value) in rules {
                    let options = RuleOptions::from_value(name, value)?;
                    config.set_rule(name, options)?;
                }
            }
            Some(other) => {
                return Err(LintError::Config {
                    rule: "*".to_string(),
                    reason: format!("\"rules\" must be an object, got {}", other),
                })
            }
        }
        Ok(config)
    }

    pub fn rule(&self, name: &str) -> Option<&RuleSettings> {
        self.rules.get(name)
    }

    pub fn enabled_rules(&self) -> impl Iterator<Item = (&str, &RuleSettings)> {
        self.rules.iter().map(|(name, settings)| (name.as_str(), settings))
    }

    /// Stable description of the enabled rules and options, for cache keys.
    pub fn fingerprint(&self) -> String {
        let rules: BTreeMap<&str, &RuleOptions> = self
            .rules
            .iter()
            .map(|(name, settings)| (name.as_str(), &settings.options))
            .collect();
        serde_json::to_string(&rules).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_accept_string_or_list() {
        let single = RuleOptions::from_value("browser-api", &json!({ "ignorePath": "**/legacy/**" }))
            .unwrap();
        assert_eq!(single.ignore_path.patterns(), vec!["**/legacy/**"]);

        let many = RuleOptions::from_value(
            "browser-api",
            &json!([{ "ignorePath": ["a/**", "b/*.tsx"] }]),
        )
        .unwrap();
        assert_eq!(many.ignore_path.patterns(), vec!["a/**", "b/*.tsx"]);

        let none = RuleOptions::from_value("browser-api", &Value::Null).unwrap();
        assert!(none.ignore_path.patterns().is_empty());
    }

    #[test]
    fn test_malformed_options_rejected() {
        assert!(RuleOptions::from_value("event-handler", &json!({ "ignorePath": 3 })).is_err());
        assert!(RuleOptions::from_value("event-handler", &json!({ "ignorePaths": "x" })).is_err());
        assert!(RuleOptions::from_value("event-handler", &json!("x")).is_err());
        assert!(RuleOptions::from_value("event-handler", &json!([{}, {}])).is_err());
    }

    #[test]
    fn test_invalid_glob_rejected() {
        let options = RuleOptions::ignoring(["src/[legacy"]);
        let err = options.matcher().unwrap_err();
        assert!(matches!(err, LintError::InvalidGlob { .. }));
    }

    #[test]
    fn test_ignore_matching() {
        let matcher = RuleOptions::ignoring(["**/legacy/**"]).matcher().unwrap();
        assert!(matcher.is_match("src/legacy/Foo.tsx"));
        assert!(matcher.is_match("legacy/Foo.tsx"));
        assert!(!matcher.is_match("src/modern/Foo.tsx"));

        let star = RuleOptions::ignoring(["src/*.tsx"]).matcher().unwrap();
        assert!(star.is_match("src/Foo.tsx"));
        assert!(!star.is_match("src/nested/Foo.tsx"));

        let empty = RuleOptions::default().matcher().unwrap();
        assert!(!empty.is_match("src/Foo.tsx"));
    }

    #[test]
    fn test_relative_path() {
        let root = Path::new("/project");
        assert_eq!(
            relative_path(root, Path::new("/project/src/legacy/Foo.tsx")),
            "src/legacy/Foo.tsx"
        );
        assert_eq!(relative_path(root, Path::new("src/Foo.tsx")), "src/Foo.tsx");
        assert_eq!(
            relative_path(root, Path::new("/other/legacy/x.tsx")),
            "../other/legacy/x.tsx"
        );
        assert_eq!(
            relative_path(Path::new("/project/app"), Path::new("/project/lib/a.ts")),
            "../lib/a.ts"
        );
    }

    #[test]
    fn test_files_outside_root_never_ignored() {
        let matcher = RuleOptions::ignoring(["**/legacy/**"]).matcher().unwrap();
        let rel = relative_path(Path::new("/project"), Path::new("/other/legacy/x.tsx"));
        assert!(!matcher.is_match(&rel));
        assert!(matcher.is_match(&relative_path(
            Path::new("/project"),
            Path::new("/project/legacy/x.tsx")
        )));
    }

    #[test]
    fn test_config_from_json() {
        let config = LintConfig::from_json(
            r#"{ "root": "/repo", "rules": { "browser-api": { "ignorePath": "**/legacy/**" }, "event-handler": null } }"#,
            "/ignored",
        )
        .unwrap();
        assert_eq!(config.root, PathBuf::from("/repo"));
        assert!(config.rule("browser-api").is_some());
        assert!(config.rule("event-handler").is_some());
        assert!(config.rule("use-client-hook").is_none());
    }

    #[test]
    fn test_unknown_rule_rejected() {
        let err = LintConfig::from_json(r#"{ "rules": { "no-such-rule": null } }"#, "/").unwrap_err();
        assert!(matches!(err, LintError::UnknownRule(name) if name == "no-such-rule"));
    }

    #[test]
    fn test_schema_shape() {
        let schema = options_schema();
        assert_eq!(schema[0]["additionalProperties"], json!(false));
        assert!(schema[0]["properties"]["ignorePath"]["anyOf"].is_array());
    }

    #[test]
    fn test_fingerprint_changes_with_options() {
        let a = LintConfig::recommended("/");
        let b = LintConfig::recommended("/")
            .with_rule("browser-api", RuleOptions::ignoring(["x/**"]))
            .unwrap();
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
