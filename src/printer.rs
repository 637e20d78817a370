//! Renders a syntax tree as nested s-expressions, e.g. `(* (- 123) (group 45.67))`.

use crate::ast::*;

#[derive(Default)]
pub struct AstPrinter {}

impl AstPrinter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn expr(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    pub fn stmt(&mut self, stmt: &Stmt) -> String {
        stmt.accept(self)
    }

    pub fn program(&mut self, stmts: &[Stmt]) -> String {
        stmts
            .iter()
            .map(|stmt| self.stmt(stmt))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn parenthesize(name: &str, parts: impl IntoIterator<Item = String>) -> String {
    let mut out = format!("({name}");
    for part in parts {
        out.push(' ');
        out.push_str(&part);
    }
    out.push(')');
    out
}

impl ExprVisitor for AstPrinter {
    type Result = String;

    fn visit_unary(&mut self, node: &Unary) -> String {
        let right = self.expr(&node.right);
        parenthesize(node.operator.lexeme(), [right])
    }

    fn visit_binary(&mut self, node: &Binary) -> String {
        let left = self.expr(&node.left);
        let right = self.expr(&node.right);
        parenthesize(node.operator.lexeme(), [left, right])
    }

    fn visit_literal(&mut self, node: &Literal) -> String {
        node.value.lexeme().to_owned()
    }

    fn visit_grouping(&mut self, node: &Grouping) -> String {
        let inner = self.expr(&node.expression);
        parenthesize("group", [inner])
    }

    fn visit_variable(&mut self, node: &Variable) -> String {
        node.name.lexeme().to_owned()
    }

    fn visit_assign(&mut self, node: &Assign) -> String {
        let value = self.expr(&node.value);
        parenthesize("=", [node.name.lexeme().to_owned(), value])
    }

    fn visit_logical(&mut self, node: &Logical) -> String {
        let left = self.expr(&node.left);
        let right = self.expr(&node.right);
        parenthesize(node.operator.lexeme(), [left, right])
    }

    fn visit_call(&mut self, node: &Call) -> String {
        let mut parts = vec![self.expr(&node.callee)];
        for argument in &node.arguments {
            parts.push(self.expr(argument));
        }
        parenthesize("call", parts)
    }
}

impl StmtVisitor for AstPrinter {
    type Result = String;

    fn visit_block(&mut self, node: &Block) -> String {
        let parts = node
            .statements
            .iter()
            .map(|stmt| self.stmt(stmt))
            .collect::<Vec<_>>();
        parenthesize("block", parts)
    }

    fn visit_expression(&mut self, node: &Expression) -> String {
        let expr = self.expr(&node.expression);
        parenthesize(";", [expr])
    }

    fn visit_print(&mut self, node: &Print) -> String {
        let expr = self.expr(&node.expression);
        parenthesize("print", [expr])
    }

    fn visit_var(&mut self, node: &Var) -> String {
        let name = node.name.lexeme().to_owned();
        match &node.initializer {
            Some(initializer) => {
                let value = self.expr(initializer);
                parenthesize("var", [name, "=".to_owned(), value])
            }
            None => parenthesize("var", [name]),
        }
    }

    fn visit_ifstmt(&mut self, node: &IfStmt) -> String {
        let mut parts = vec![self.expr(&node.condition), self.stmt(&node.then_branch)];
        if let Some(else_branch) = &node.else_branch {
            parts.push(self.stmt(else_branch));
        }
        parenthesize("if", parts)
    }

    fn visit_whilestmt(&mut self, node: &WhileStmt) -> String {
        let condition = self.expr(&node.condition);
        let body = self.stmt(&node.body);
        parenthesize("while", [condition, body])
    }

    fn visit_function(&mut self, node: &Function) -> String {
        let params = node
            .params
            .iter()
            .map(|param| param.lexeme())
            .collect::<Vec<_>>()
            .join(" ");
        let mut parts = vec![format!("{}({params})", node.name.lexeme())];
        for stmt in &node.body {
            parts.push(self.stmt(stmt));
        }
        parenthesize("fun", parts)
    }

    fn visit_returnstmt(&mut self, node: &ReturnStmt) -> String {
        match &node.value {
            Some(value) => {
                let value = self.expr(value);
                parenthesize("return", [value])
            }
            None => parenthesize("return", []),
        }
    }

    fn visit_class(&mut self, node: &Class) -> String {
        let mut parts = vec![node.name.lexeme().to_owned()];
        for method in &node.methods {
            parts.push(self.visit_function(method));
        }
        parenthesize("class", parts)
    }
}
