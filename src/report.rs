#[cfg(feature = "napi")]
use napi_derive::napi;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════════
// MESSAGES
// ═══════════════════════════════════════════════════════════════════════════════

/// Text inserted at the top of a file by every fix.
pub const USE_CLIENT_LINE: &str = "'use client'\n";

pub fn browser_api_message(causes: &str) -> String {
    format!(
        "This file contains browser api \"{}\", but it lacks the required 'use client' directive",
        causes
    )
}

pub fn event_handler_message(causes: &str) -> String {
    format!(
        "This file contains HTML elements with event handler \"{}\", but it lacks the required 'use client' directive",
        causes
    )
}

pub fn client_hook_message(causes: &str) -> String {
    format!(
        "This file contains client-side React Hooks \"{}\", but it lacks the required 'use client' directive",
        causes
    )
}

// ═══════════════════════════════════════════════════════════════════════════════
// FINDING
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    /// 1-based line/column of a byte offset in `source`.
    pub fn from_offset(source: &str, offset: u32) -> Self {
        let offset = (offset as usize).min(source.len());
        let before = source.get(..offset).unwrap_or(source);
        let line = before.matches('\n').count() as u32 + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[line_start..].chars().count() as u32 + 1;
        SourceLocation { line, column }
    }
}

/// A text insertion at a byte offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct Fix {
    pub offset: u32,
    pub text: String,
}

impl Fix {
    pub fn insert_use_client(offset: u32) -> Self {
        Fix {
            offset,
            text: USE_CLIENT_LINE.to_string(),
        }
    }
}

/// One report from one rule for one file. Always anchored at the program root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub rule: String,
    pub message: String,
    pub causes: Vec<String>,
    pub file: String,
    pub location: SourceLocation,
    pub fix: Option<Fix>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// FIX APPLICATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Apply `fixes` to `source`.
///
/// Fixes are applied in offset order; a fix that starts at or before the end
/// of an already-applied one is skipped, so several rules asking for the same
/// insertion produce it once. Returns the new text and the number applied.
pub fn apply_fixes(source: &str, fixes: &[Fix]) -> (String, usize) {
    let mut ordered: Vec<&Fix> = fixes
        .iter()
        .filter(|fix| (fix.offset as usize) <= source.len())
        .collect();
    ordered.sort_by_key(|fix| fix.offset);

    let mut output = String::with_capacity(source.len() + USE_CLIENT_LINE.len());
    let mut cursor = 0usize;
    let mut applied = 0usize;
    let mut last_end: Option<usize> = None;

    for fix in ordered {
        let offset = fix.offset as usize;
        if last_end.is_some_and(|end| offset <= end) {
            continue;
        }
        if !source.is_char_boundary(offset) {
            continue;
        }
        output.push_str(&source[cursor..offset]);
        output.push_str(&fix.text);
        cursor = offset;
        last_end = Some(offset);
        applied += 1;
    }

    output.push_str(&source[cursor..]);
    (output, applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_from_offset() {
        let source = "// header\nconst a = 1;\n";
        assert_eq!(
            SourceLocation::from_offset(source, 0),
            SourceLocation { line: 1, column: 1 }
        );
        assert_eq!(
            SourceLocation::from_offset(source, 10),
            SourceLocation { line: 2, column: 1 }
        );
        assert_eq!(
            SourceLocation::from_offset(source, 16),
            SourceLocation { line: 2, column: 7 }
        );
    }

    #[test]
    fn test_apply_single_fix() {
        let (out, applied) = apply_fixes("const a = 1;\n", &[Fix::insert_use_client(0)]);
        assert_eq!(out, "'use client'\nconst a = 1;\n");
        assert_eq!(applied, 1);
    }

    #[test]
    fn test_same_insertion_applied_once() {
        let fixes = vec![Fix::insert_use_client(10), Fix::insert_use_client(10)];
        let (out, applied) = apply_fixes("// header\nconst a = 1;", &fixes);
        assert_eq!(out, "// header\n'use client'\nconst a = 1;");
        assert_eq!(applied, 1);
    }

    #[test]
    fn test_out_of_range_fix_ignored() {
        let (out, applied) = apply_fixes("x", &[Fix::insert_use_client(99)]);
        assert_eq!(out, "x");
        assert_eq!(applied, 0);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            browser_api_message("window"),
            "This file contains browser api \"window\", but it lacks the required 'use client' directive"
        );
        assert!(event_handler_message("onClick").contains("event handler \"onClick\""));
        assert!(client_hook_message("useState, useEffect").contains("\"useState, useEffect\""));
    }
}
