use oxc_ast::ast::{
    ArrowFunctionExpression, BindingPattern, CallExpression, ComputedMemberExpression, Expression, ExpressionStatement, Function,
    FunctionType, IdentifierReference, JSXOpeningElement, PrivateFieldExpression, Program,
    Statement, StaticMemberExpression, VariableDeclarator,
};
use oxc_ast_visit::{walk, Visit};
use oxc_span::Span;
use oxc_syntax::scope::ScopeFlags;

use crate::context::{Ancestor, LintContext, ReadPosition};
use crate::report::Finding;
use crate::rule::Rule;

/// RuleVisitor is the single authoritative traversal for a file.
///
/// Rules:
/// 1. One pre-order pass per file; every active rule sees every node it asks for.
/// 2. `enter_program` runs for all rules before any node callback, `exit_program`
///    after the last one.
/// 3. The ancestor stack holds function and declarator frames only, pushed on the
///    way down and popped on the way up.
/// 4. Rules never recurse on their own.
pub struct RuleVisitor<'r, 's> {
    ctx: LintContext<'s>,
    rules: &'r mut [Box<dyn Rule>],
    /// Identifiers their parent marked as being read, matched by span.
    pending_reads: Vec<(Span, ReadPosition)>,
    /// Statements that stand for a concise arrow body (`() => window`).
    concise_bodies: Vec<Span>,
}

impl<'r, 's> RuleVisitor<'r, 's> {
    pub fn new(ctx: LintContext<'s>, rules: &'r mut [Box<dyn Rule>]) -> Self {
        Self {
            ctx,
            rules,
            pending_reads: Vec::new(),
            concise_bodies: Vec::new(),
        }
    }

    /// Run all rules over `program` and collect what they report.
    pub fn run(mut self, program: &Program<'_>) -> Vec<Finding> {
        self.visit_program(program);
        let ctx = &self.ctx;
        self.rules
            .iter_mut()
            .filter_map(|rule| rule.exit_program(ctx))
            .collect()
    }

    fn mark_read(&mut self, expr: &Expression<'_>, position: ReadPosition) {
        if let Expression::Identifier(ident) = expr.without_parentheses() {
            self.pending_reads.push((ident.span, position));
        }
    }

    fn with_ancestor(&mut self, ancestor: Ancestor, walk: impl FnOnce(&mut Self)) {
        self.ctx.push_ancestor(ancestor);
        walk(self);
        self.ctx.pop_ancestor();
    }
}

impl<'a> Visit<'a> for RuleVisitor<'_, '_> {
    fn visit_program(&mut self, program: &Program<'a>) {
        for rule in self.rules.iter_mut() {
            rule.enter_program(&self.ctx, program);
        }
        walk::walk_program(self, program);
    }

    fn visit_identifier_reference(&mut self, ident: &IdentifierReference<'a>) {
        let position = self
            .pending_reads
            .iter()
            .rposition(|(span, _)| *span == ident.span)
            .map(|index| self.pending_reads.swap_remove(index).1);
        for rule in self.rules.iter_mut() {
            rule.identifier_reference(&self.ctx, ident, position);
        }
        walk::walk_identifier_reference(self, ident);
    }

    fn visit_static_member_expression(&mut self, member: &StaticMemberExpression<'a>) {
        self.mark_read(&member.object, ReadPosition::MemberObject);
        walk::walk_static_member_expression(self, member);
    }

    fn visit_computed_member_expression(&mut self, member: &ComputedMemberExpression<'a>) {
        self.mark_read(&member.object, ReadPosition::MemberObject);
        walk::walk_computed_member_expression(self, member);
    }

    fn visit_private_field_expression(&mut self, member: &PrivateFieldExpression<'a>) {
        self.mark_read(&member.object, ReadPosition::MemberObject);
        walk::walk_private_field_expression(self, member);
    }

    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        for rule in self.rules.iter_mut() {
            rule.call_expression(&self.ctx, call);
        }
        self.mark_read(&call.callee, ReadPosition::Callee);
        walk::walk_call_expression(self, call);
    }

    fn visit_expression_statement(&mut self, stmt: &ExpressionStatement<'a>) {
        if self.concise_bodies.last() == Some(&stmt.span) {
            self.concise_bodies.pop();
        } else {
            self.mark_read(&stmt.expression, ReadPosition::Bare);
        }
        walk::walk_expression_statement(self, stmt);
    }

    fn visit_arrow_function_expression(&mut self, arrow: &ArrowFunctionExpression<'a>) {
        if arrow.expression {
            if let Some(Statement::ExpressionStatement(stmt)) = arrow.body.statements.first() {
                self.concise_bodies.push(stmt.span);
            }
        }
        walk::walk_arrow_function_expression(self, arrow);
    }

    fn visit_jsx_opening_element(&mut self, element: &JSXOpeningElement<'a>) {
        for rule in self.rules.iter_mut() {
            rule.jsx_opening_element(&self.ctx, element);
        }
        walk::walk_jsx_opening_element(self, element);
    }

    fn visit_function(&mut self, func: &Function<'a>, flags: ScopeFlags) {
        let ancestor = Ancestor::Function {
            name: func.id.as_ref().map(|id| id.name.to_string()),
            is_declaration: matches!(func.r#type, FunctionType::FunctionDeclaration),
        };
        self.with_ancestor(ancestor, |v| walk::walk_function(v, func, flags));
    }

    fn visit_variable_declarator(&mut self, decl: &VariableDeclarator<'a>) {
        let ancestor = Ancestor::VariableDeclarator {
            name: match &decl.id {
                BindingPattern::BindingIdentifier(id) => Some(id.name.to_string()),
                _ => None,
            },
            init_is_arrow: matches!(
                decl.init.as_ref().map(Expression::without_parentheses),
                Some(Expression::ArrowFunctionExpression(_))
            ),
        };
        if let Some(init) = &decl.init {
            self.mark_read(init, ReadPosition::DeclaratorInit);
        }
        self.with_ancestor(ancestor, |v| walk::walk_variable_declarator(v, decl));
    }
}
