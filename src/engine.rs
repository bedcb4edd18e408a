//! Per-file linting and multi-pass fixing.

#[cfg(feature = "napi")]
use napi_derive::napi;
use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::config::{relative_path, LintConfig};
use crate::context::LintContext;
use crate::error::{LintError, Result};
use crate::plugin::create_rule;
use crate::report::{apply_fixes, Finding, Fix};
use crate::rule::Rule;
use crate::visitor::RuleVisitor;

/// Upper bound on lint-then-fix rounds for one file.
pub const MAX_FIX_PASSES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct FixOutput {
    pub output: String,
    pub fixed: bool,
    pub remaining: Vec<Finding>,
}

pub struct Linter {
    config: LintConfig,
}

impl Linter {
    pub fn new(config: LintConfig) -> Self {
        Linter { config }
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Fresh instances of every enabled rule that is not ignored for `path`.
    fn active_rules(&self, path: &Path) -> Vec<Box<dyn Rule>> {
        let rel = relative_path(&self.config.root, path);
        self.config
            .enabled_rules()
            .filter_map(|(name, settings)| {
                if settings.ignore.is_match(&rel) {
                    debug!(rule = name, file = %rel, "skipped by ignorePath");
                    return None;
                }
                create_rule(name)
            })
            .collect()
    }

    /// Run the active rules over an already parsed program.
    pub fn lint_program<'a>(&self, path: &Path, program: &'a Program<'a>) -> Vec<Finding> {
        let mut rules = self.active_rules(path);
        if rules.is_empty() {
            return Vec::new();
        }

        let semantic = SemanticBuilder::new().build(program).semantic;
        let ctx = LintContext::new(path.to_string_lossy(), program, semantic.scoping());
        RuleVisitor::new(ctx, &mut rules).run(program)
    }

    /// Parse `source` as the file at `path` and lint it.
    pub fn lint_source(&self, path: &Path, source: &str) -> Result<Vec<Finding>> {
        let allocator = Allocator::default();
        let source_type = SourceType::from_path(path).unwrap_or_else(|_| {
            SourceType::default()
                .with_module(true)
                .with_typescript(true)
                .with_jsx(true)
        });

        let ret = Parser::new(&allocator, source, source_type).parse();
        if !ret.errors.is_empty() {
            let message = ret
                .errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(LintError::Parse {
                path: path.to_path_buf(),
                message,
            });
        }

        let program = allocator.alloc(ret.program);
        Ok(self.lint_program(path, program))
    }

    /// Lint and apply fixes until nothing is left to fix.
    pub fn fix_source(&self, path: &Path, source: &str) -> Result<FixOutput> {
        let mut output = source.to_string();
        let mut fixed = false;

        for pass in 0..MAX_FIX_PASSES {
            let findings = self.lint_source(path, &output)?;
            let fixes: Vec<Fix> = findings.iter().filter_map(|f| f.fix.clone()).collect();
            if fixes.is_empty() {
                return Ok(FixOutput {
                    output,
                    fixed,
                    remaining: findings,
                });
            }

            let (next, applied) = apply_fixes(&output, &fixes);
            if applied == 0 {
                return Ok(FixOutput {
                    output,
                    fixed,
                    remaining: findings,
                });
            }
            debug!(file = %path.display(), pass, applied, "fixes applied");
            output = next;
            fixed = true;
        }

        let remaining = self.lint_source(path, &output)?;
        Ok(FixOutput {
            output,
            fixed,
            remaining,
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// NAPI EXPORTS
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "napi")]
fn native_linter(config_json: Option<String>) -> napi::Result<Linter> {
    let config = match config_json {
        Some(json) => LintConfig::from_json(&json, "")
            .map_err(|e| napi::Error::from_reason(e.to_string()))?,
        None => LintConfig::recommended(""),
    };
    Ok(Linter::new(config))
}

#[cfg(feature = "napi")]
#[napi]
pub fn lint_source_native(
    file_path: String,
    source: String,
    config_json: Option<String>,
) -> napi::Result<serde_json::Value> {
    let linter = native_linter(config_json)?;
    let findings = linter
        .lint_source(Path::new(&file_path), &source)
        .map_err(|e| napi::Error::from_reason(e.to_string()))?;
    serde_json::to_value(findings).map_err(|e| napi::Error::from_reason(e.to_string()))
}

#[cfg(feature = "napi")]
#[napi]
pub fn fix_source_native(
    file_path: String,
    source: String,
    config_json: Option<String>,
) -> napi::Result<String> {
    let linter = native_linter(config_json)?;
    linter
        .fix_source(Path::new(&file_path), &source)
        .map(|fixed| fixed.output)
        .map_err(|e| napi::Error::from_reason(e.to_string()))
}
