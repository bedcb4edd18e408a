//! Directive Scanner
//!
//! Reads the leading run of string-literal statements at the top of a program
//! and records whether `'use client'` or `'use server'` is among them.

use oxc_ast::ast::{Expression, Program, Statement};
use serde::{Deserialize, Serialize};

pub const USE_CLIENT: &str = "use client";
pub const USE_SERVER: &str = "use server";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveState {
    pub has_client_directive: bool,
    pub has_server_directive: bool,
}

impl DirectiveState {
    /// Either directive makes every rule inert for the file.
    pub fn has_any(&self) -> bool {
        self.has_client_directive || self.has_server_directive
    }

    /// Record one leading literal. Returns true once a directive has been seen.
    fn observe(&mut self, value: &str) -> bool {
        match value {
            USE_CLIENT => self.has_client_directive = true,
            USE_SERVER => self.has_server_directive = true,
            _ => {}
        }
        self.has_any()
    }
}

/// Scan the directive prologue of `program`.
///
/// The parser already splits the prologue into `program.directives`; a string
/// statement that it left in the body (for example a parenthesized one) is
/// still accepted as long as it is part of the leading run. Literals that match
/// neither directive do not stop the scan, the first other statement does.
pub fn scan_directives(program: &Program) -> DirectiveState {
    let mut state = DirectiveState::default();

    for directive in &program.directives {
        if state.observe(directive.expression.value.as_str()) {
            return state;
        }
    }

    for stmt in &program.body {
        let Statement::ExpressionStatement(expr_stmt) = stmt else {
            break;
        };
        let Expression::StringLiteral(literal) = expr_stmt.expression.without_parentheses() else {
            break;
        };
        if state.observe(literal.value.as_str()) {
            break;
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn scan(code: &str) -> DirectiveState {
        let allocator = Allocator::default();
        let source_type = SourceType::default()
            .with_module(true)
            .with_typescript(true)
            .with_jsx(true);
        let ret = Parser::new(&allocator, code, source_type).parse();
        assert!(ret.errors.is_empty(), "parse errors: {:?}", ret.errors);
        scan_directives(&ret.program)
    }

    #[test]
    fn test_use_client_detected() {
        let state = scan("'use client'\nexport const a = 1;");
        assert!(state.has_client_directive);
        assert!(!state.has_server_directive);
    }

    #[test]
    fn test_use_server_detected() {
        let state = scan("\"use server\";\nexport async function save() {}");
        assert!(state.has_server_directive);
        assert!(state.has_any());
    }

    #[test]
    fn test_scans_past_use_strict() {
        let state = scan("'use strict'\n'use client'\nexport const a = 1;");
        assert!(state.has_client_directive);
    }

    #[test]
    fn test_scans_past_several_unknown_literals() {
        let state = scan("'a'\n'b'\n'use client'\nexport const a = 1;");
        assert!(state.has_client_directive);
    }

    #[test]
    fn test_comment_is_not_a_directive() {
        let state = scan("// 'use client'\nexport const a = 1;");
        assert!(!state.has_any());
    }

    #[test]
    fn test_literal_after_code_is_not_a_directive() {
        let state = scan("import x from 'x';\n'use client';\nexport const a = x;");
        assert!(!state.has_any());
    }

    #[test]
    fn test_nested_literal_is_not_a_directive() {
        let state = scan("function f() { 'use client'; }");
        assert!(!state.has_any());
    }

    #[test]
    fn test_parenthesized_leading_literal() {
        let state = scan("('use client');\nexport const a = 1;");
        assert!(state.has_client_directive);
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(scan(""), DirectiveState::default());
    }
}
