// This file is @generated by astgen. Do not edit it by hand.

use crate::token::Token;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Unary(Unary),
    Binary(Binary),
    Literal(Literal),
    Grouping(Grouping),
    Variable(Variable),
    Assign(Assign),
    Logical(Logical),
    Call(Call),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Unary {
    pub operator: Token,
    pub right: Box<Expr>,
}

impl Unary {
    pub fn new(operator: Token, right: impl Into<Box<Expr>>) -> Self {
        Self {
            operator,
            right: right.into(),
        }
    }
}

impl From<Unary> for Expr {
    fn from(node: Unary) -> Self {
        Self::Unary(node)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binary {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

impl Binary {
    pub fn new(left: impl Into<Box<Expr>>, operator: Token, right: impl Into<Box<Expr>>) -> Self {
        Self {
            left: left.into(),
            operator,
            right: right.into(),
        }
    }
}

impl From<Binary> for Expr {
    fn from(node: Binary) -> Self {
        Self::Binary(node)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    pub value: Token,
}

impl Literal {
    pub fn new(value: Token) -> Self {
        Self {
            value,
        }
    }
}

impl From<Literal> for Expr {
    fn from(node: Literal) -> Self {
        Self::Literal(node)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grouping {
    pub expression: Box<Expr>,
}

impl Grouping {
    pub fn new(expression: impl Into<Box<Expr>>) -> Self {
        Self {
            expression: expression.into(),
        }
    }
}

impl From<Grouping> for Expr {
    fn from(node: Grouping) -> Self {
        Self::Grouping(node)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    pub name: Token,
}

impl Variable {
    pub fn new(name: Token) -> Self {
        Self {
            name,
        }
    }
}

impl From<Variable> for Expr {
    fn from(node: Variable) -> Self {
        Self::Variable(node)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assign {
    pub name: Token,
    pub value: Box<Expr>,
}

impl Assign {
    pub fn new(name: Token, value: impl Into<Box<Expr>>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

impl From<Assign> for Expr {
    fn from(node: Assign) -> Self {
        Self::Assign(node)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Logical {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

impl Logical {
    pub fn new(left: impl Into<Box<Expr>>, operator: Token, right: impl Into<Box<Expr>>) -> Self {
        Self {
            left: left.into(),
            operator,
            right: right.into(),
        }
    }
}

impl From<Logical> for Expr {
    fn from(node: Logical) -> Self {
        Self::Logical(node)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Call {
    pub callee: Box<Expr>,
    pub paren: Token,
    pub arguments: Vec<Expr>,
}

impl Call {
    pub fn new(callee: impl Into<Box<Expr>>, paren: Token, arguments: Vec<Expr>) -> Self {
        Self {
            callee: callee.into(),
            paren,
            arguments,
        }
    }
}

impl From<Call> for Expr {
    fn from(node: Call) -> Self {
        Self::Call(node)
    }
}

pub trait ExprVisitor {
    type Result;

    fn visit_unary(&mut self, node: &Unary) -> Self::Result;
    fn visit_binary(&mut self, node: &Binary) -> Self::Result;
    fn visit_literal(&mut self, node: &Literal) -> Self::Result;
    fn visit_grouping(&mut self, node: &Grouping) -> Self::Result;
    fn visit_variable(&mut self, node: &Variable) -> Self::Result;
    fn visit_assign(&mut self, node: &Assign) -> Self::Result;
    fn visit_logical(&mut self, node: &Logical) -> Self::Result;
    fn visit_call(&mut self, node: &Call) -> Self::Result;
}

pub trait ExprAccept {
    fn accept<V: ExprVisitor>(&self, visitor: &mut V) -> V::Result;
}

impl ExprAccept for Expr {
    fn accept<V: ExprVisitor>(&self, visitor: &mut V) -> V::Result {
        match self {
            Self::Unary(node) => visitor.visit_unary(node),
            Self::Binary(node) => visitor.visit_binary(node),
            Self::Literal(node) => visitor.visit_literal(node),
            Self::Grouping(node) => visitor.visit_grouping(node),
            Self::Variable(node) => visitor.visit_variable(node),
            Self::Assign(node) => visitor.visit_assign(node),
            Self::Logical(node) => visitor.visit_logical(node),
            Self::Call(node) => visitor.visit_call(node),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stmt {
    Block(Block),
    Expression(Expression),
    Print(Print),
    Var(Var),
    IfStmt(IfStmt),
    WhileStmt(WhileStmt),
    Function(Function),
    ReturnStmt(ReturnStmt),
    Class(Class),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self {
            statements,
        }
    }
}

impl From<Block> for Stmt {
    fn from(node: Block) -> Self {
        Self::Block(node)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression {
    pub expression: Box<Expr>,
}

impl Expression {
    pub fn new(expression: impl Into<Box<Expr>>) -> Self {
        Self {
            expression: expression.into(),
        }
    }
}

impl From<Expression> for Stmt {
    fn from(node: Expression) -> Self {
        Self::Expression(node)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Print {
    pub expression: Box<Expr>,
}

impl Print {
    pub fn new(expression: impl Into<Box<Expr>>) -> Self {
        Self {
            expression: expression.into(),
        }
    }
}

impl From<Print> for Stmt {
    fn from(node: Print) -> Self {
        Self::Print(node)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Var {
    pub name: Token,
    pub initializer: Option<Box<Expr>>,
}

impl Var {
    pub fn new(name: Token, initializer: Option<Box<Expr>>) -> Self {
        Self {
            name,
            initializer,
        }
    }
}

impl From<Var> for Stmt {
    fn from(node: Var) -> Self {
        Self::Var(node)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IfStmt {
    pub condition: Box<Expr>,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
}

impl IfStmt {
    pub fn new(condition: impl Into<Box<Expr>>, then_branch: impl Into<Box<Stmt>>, else_branch: Option<Box<Stmt>>) -> Self {
        Self {
            condition: condition.into(),
            then_branch: then_branch.into(),
            else_branch,
        }
    }
}

impl From<IfStmt> for Stmt {
    fn from(node: IfStmt) -> Self {
        Self::IfStmt(node)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WhileStmt {
    pub condition: Box<Expr>,
    pub body: Box<Stmt>,
}

impl WhileStmt {
    pub fn new(condition: impl Into<Box<Expr>>, body: impl Into<Box<Stmt>>) -> Self {
        Self {
            condition: condition.into(),
            body: body.into(),
        }
    }
}

impl From<WhileStmt> for Stmt {
    fn from(node: WhileStmt) -> Self {
        Self::WhileStmt(node)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Function {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

impl Function {
    pub fn new(name: Token, params: Vec<Token>, body: Vec<Stmt>) -> Self {
        Self {
            name,
            params,
            body,
        }
    }
}

impl From<Function> for Stmt {
    fn from(node: Function) -> Self {
        Self::Function(node)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReturnStmt {
    pub keyword: Token,
    pub value: Option<Box<Expr>>,
}

impl ReturnStmt {
    pub fn new(keyword: Token, value: Option<Box<Expr>>) -> Self {
        Self {
            keyword,
            value,
        }
    }
}

impl From<ReturnStmt> for Stmt {
    fn from(node: ReturnStmt) -> Self {
        Self::ReturnStmt(node)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Class {
    pub name: Token,
    pub methods: Vec<Function>,
}

impl Class {
    pub fn new(name: Token, methods: Vec<Function>) -> Self {
        Self {
            name,
            methods,
        }
    }
}

impl From<Class> for Stmt {
    fn from(node: Class) -> Self {
        Self::Class(node)
    }
}

pub trait StmtVisitor {
    type Result;

    fn visit_block(&mut self, node: &Block) -> Self::Result;
    fn visit_expression(&mut self, node: &Expression) -> Self::Result;
    fn visit_print(&mut self, node: &Print) -> Self::Result;
    fn visit_var(&mut self, node: &Var) -> Self::Result;
    fn visit_ifstmt(&mut self, node: &IfStmt) -> Self::Result;
    fn visit_whilestmt(&mut self, node: &WhileStmt) -> Self::Result;
    fn visit_function(&mut self, node: &Function) -> Self::Result;
    fn visit_returnstmt(&mut self, node: &ReturnStmt) -> Self::Result;
    fn visit_class(&mut self, node: &Class) -> Self::Result;
}

pub trait StmtAccept {
    fn accept<V: StmtVisitor>(&self, visitor: &mut V) -> V::Result;
}

impl StmtAccept for Stmt {
    fn accept<V: StmtVisitor>(&self, visitor: &mut V) -> V::Result {
        match self {
            Self::Block(node) => visitor.visit_block(node),
            Self::Expression(node) => visitor.visit_expression(node),
            Self::Print(node) => visitor.visit_print(node),
            Self::Var(node) => visitor.visit_var(node),
            Self::IfStmt(node) => visitor.visit_ifstmt(node),
            Self::WhileStmt(node) => visitor.visit_whilestmt(node),
            Self::Function(node) => visitor.visit_function(node),
            Self::ReturnStmt(node) => visitor.visit_returnstmt(node),
            Self::Class(node) => visitor.visit_class(node),
        }
    }
}
