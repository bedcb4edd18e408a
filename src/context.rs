//! Per-file state shared by all rules during one traversal.

use oxc_ast::ast::{IdentifierReference, Program};
use oxc_semantic::Scoping;
use oxc_span::GetSpan;

use crate::report::SourceLocation;

/// A frame on the traversal's ancestor stack. Only nodes that can define a
/// component are recorded; the stack is innermost-last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ancestor {
    Function {
        name: Option<String>,
        is_declaration: bool,
    },
    VariableDeclarator {
        name: Option<String>,
        init_is_arrow: bool,
    },
}

/// Syntactic position of an identifier that counts as reading it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadPosition {
    /// `window.location`, `window[key]`
    MemberObject,
    /// `alert()`
    Callee,
    /// `document;`
    Bare,
    /// `const w = window`
    DeclaratorInit,
}

pub struct LintContext<'s> {
    file_path: String,
    source_text: &'s str,
    scoping: &'s Scoping,
    program_start: u32,
    ancestors: Vec<Ancestor>,
}

impl<'s> LintContext<'s> {
    pub fn new<'a: 's>(
        file_path: impl Into<String>,
        program: &Program<'a>,
        scoping: &'s Scoping,
    ) -> Self {
        let program_start = program
            .directives
            .first()
            .map(|d| d.span.start)
            .or_else(|| program.body.first().map(|stmt| stmt.span().start))
            .unwrap_or(program.span.start);

        LintContext {
            file_path: file_path.into(),
            source_text: program.source_text,
            scoping,
            program_start,
            ancestors: Vec::new(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Offset of the program's first node, where the directive is inserted.
    pub fn program_start(&self) -> u32 {
        self.program_start
    }

    pub fn root_location(&self) -> SourceLocation {
        SourceLocation::from_offset(self.source_text, self.program_start)
    }

    /// Enclosing frames, outermost first.
    pub fn ancestors(&self) -> &[Ancestor] {
        &self.ancestors
    }

    pub(crate) fn push_ancestor(&mut self, ancestor: Ancestor) {
        self.ancestors.push(ancestor);
    }

    pub(crate) fn pop_ancestor(&mut self) {
        self.ancestors.pop();
    }

    /// True when `ident` resolves to no binding in any enclosing scope.
    /// An identifier the semantic pass did not resolve at all is not global.
    pub fn is_global_reference(&self, ident: &IdentifierReference) -> bool {
        match ident.reference_id.get() {
            Some(reference_id) => self
                .scoping
                .get_reference(reference_id)
                .symbol_id()
                .is_none(),
            None => false,
        }
    }
}
