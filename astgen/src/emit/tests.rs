use indoc::indoc;

use crate::config::{GenConfig, Indirection};
use crate::grammar::{GrammarModel, parse};

const LOX: &str = include_str!("../../../grammar/lox.ast");
const EXPR: &str = include_str!("../../../grammar/expr.ast");

fn model(src: &str) -> GrammarModel {
    GrammarModel::load(parse(src).unwrap()).unwrap()
}

fn generate(src: &str) -> String {
    generate_with(src, &GenConfig::default())
}

fn generate_with(src: &str, config: &GenConfig) -> String {
    crate::generate(&model(src), config)
}

/// The first emitted fragment which starts with `prefix`, with tabs expanded.
fn fragment(src: &str, config: &GenConfig, prefix: &str) -> String {
    let out = super::emit(&model(src), config);
    let found = out
        .fragments()
        .iter()
        .find(|f| f.starts_with(prefix))
        .unwrap_or_else(|| panic!("no fragment starting with {prefix:?}"));
    found.trim_end().replace('\t', "    ")
}

#[test]
fn single_variant() {
    let out = generate(indoc! {"
        use crate::token::Token;

        Expr Literal { value: Token };
    "});

    insta::assert_snapshot!(out.trim_end(), @r"
    // This file is @generated by astgen. Do not edit it by hand.

    use crate::token::Token;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Expr {
        Literal(Literal),
    }

    #[derive(Debug, Clone, PartialEq)]
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

    pub trait ExprVisitor {
        type Result;

        fn visit_literal(&mut self, node: &Literal) -> Self::Result;
    }

    pub trait ExprAccept {
        fn accept<V: ExprVisitor>(&self, visitor: &mut V) -> V::Result;
    }

    impl ExprAccept for Expr {
        fn accept<V: ExprVisitor>(&self, visitor: &mut V) -> V::Result {
            match self {
                Self::Literal(node) => visitor.visit_literal(node),
            }
        }
    }
    ");
}

#[test]
fn output_ends_with_one_newline() {
    let out = generate(LOX);
    assert!(out.ends_with("}\n"));
    assert!(!out.ends_with("\n\n"));
    assert!(!out.contains('\t'));
    assert!(!out.contains("\n\n\n"));
}

#[test]
fn recursive_fields_use_indirection() {
    let src = indoc! {"
        Stmt Block { statements: [Stmt] };
        Stmt If { condition: Expr, then_branch: Stmt, else_branch: Stmt? };
        Expr Number { value: f64 };
    "};
    let config = GenConfig::default();

    insta::assert_snapshot!(fragment(src, &config, "#[derive(Debug, Clone, PartialEq)]\npub struct If"), @r"
    #[derive(Debug, Clone, PartialEq)]
    pub struct If {
        pub condition: Box<Expr>,
        pub then_branch: Box<Stmt>,
        pub else_branch: Option<Box<Stmt>>,
    }
    ");

    insta::assert_snapshot!(fragment(src, &config, "impl If "), @r"
    impl If {
        pub fn new(condition: impl Into<Box<Expr>>, then_branch: impl Into<Box<Stmt>>, else_branch: Option<Box<Stmt>>) -> Self {
            Self {
                condition: condition.into(),
                then_branch: then_branch.into(),
                else_branch,
            }
        }
    }
    ");

    insta::assert_snapshot!(fragment(src, &config, "#[derive(Debug, Clone, PartialEq)]\npub struct Block"), @r"
    #[derive(Debug, Clone, PartialEq)]
    pub struct Block {
        pub statements: Vec<Stmt>,
    }
    ");
}

#[test]
fn nested_wrappers() {
    let out = generate("Expr List { items: [Expr?], tail: [Expr]?, grid: [[Expr]], last: Expr? };");

    assert!(out.contains("    pub items: Vec<Option<Expr>>,\n"));
    assert!(out.contains("    pub tail: Option<Vec<Expr>>,\n"));
    assert!(out.contains("    pub grid: Vec<Vec<Expr>>,\n"));
    assert!(out.contains("    pub last: Option<Box<Expr>>,\n"));
}

#[test]
fn variant_records_are_nodes() {
    let out = generate(indoc! {"
        Stmt Function { arity: u8 };
        Stmt Class { methods: [Function], initializer: Function? };
    "});

    assert!(out.contains("    pub methods: Vec<Function>,\n"));
    assert!(out.contains("    pub initializer: Option<Box<Function>>,\n"));
}

#[test]
fn variant_without_fields() {
    let src = "Expr Nil; Expr Number { value: f64 };";
    let config = GenConfig::default();

    insta::assert_snapshot!(fragment(src, &config, "#[derive(Debug, Clone, PartialEq)]\npub struct Nil"), @r"
    #[derive(Debug, Clone, PartialEq)]
    pub struct Nil;
    ");

    insta::assert_snapshot!(fragment(src, &config, "impl Nil "), @r"
    impl Nil {
        pub fn new() -> Self {
            Self
        }
    }
    ");
}

#[test]
fn keyword_fields() {
    let src = "Expr Cast { type: u8, value: f64 };";
    let config = GenConfig::default();

    insta::assert_snapshot!(fragment(src, &config, "impl Cast "), @r"
    impl Cast {
        pub fn new(r#type: u8, value: f64) -> Self {
            Self {
                r#type,
                value,
            }
        }
    }
    ");
}

#[test]
fn visitor_names_are_lowercased() {
    let src = "Stmt IfStmt { then_branch: Stmt }; Stmt ReturnStmt { value: Expr? }; Expr Nil;";
    let config = GenConfig::default();

    insta::assert_snapshot!(fragment(src, &config, "pub trait StmtVisitor"), @r"
    pub trait StmtVisitor {
        type Result;

        fn visit_ifstmt(&mut self, node: &IfStmt) -> Self::Result;
        fn visit_returnstmt(&mut self, node: &ReturnStmt) -> Self::Result;
    }
    ");

    insta::assert_snapshot!(fragment(src, &config, "impl StmtAccept"), @r"
    impl StmtAccept for Stmt {
        fn accept<V: StmtVisitor>(&self, visitor: &mut V) -> V::Result {
            match self {
                Self::IfStmt(node) => visitor.visit_ifstmt(node),
                Self::ReturnStmt(node) => visitor.visit_returnstmt(node),
            }
        }
    }
    ");
}

#[test]
fn rc_indirection() {
    let config = GenConfig {
        indirection: Indirection::Rc,
        ..GenConfig::default()
    };
    let out = generate_with(
        indoc! {"
            use crate::token::Token;
            Expr Grouping { expression: Expr };
            Expr Literal { value: Token };
        "},
        &config,
    );

    assert!(out.contains("\n\nuse std::rc::Rc;\nuse crate::token::Token;\n\n"));
    assert!(out.contains("    pub expression: Rc<Expr>,\n"));
    assert!(out.contains("    pub fn new(expression: impl Into<Rc<Expr>>) -> Self {\n"));
}

#[test]
fn indirection_import_only_when_used() {
    let config = GenConfig {
        indirection: Indirection::Arc,
        ..GenConfig::default()
    };

    let out = generate_with("Stmt Block { statements: [Stmt] };", &config);
    assert!(!out.contains("use std::sync::Arc;"));

    let out = generate_with("Stmt Expression { expression: Stmt };", &config);
    assert!(out.contains("use std::sync::Arc;"));
    assert!(out.contains("    pub expression: Arc<Stmt>,\n"));
}

#[test]
fn configured_derives() {
    let config = GenConfig {
        derives: vec!["Debug".into(), "Hash".into()],
        ..GenConfig::default()
    };
    let out = generate_with("Expr Number { value: u64 }; Expr Nil;", &config);
    assert_eq!(out.matches("#[derive(Debug, Hash)]\n").count(), 3);

    let config = GenConfig {
        derives: vec![],
        ..GenConfig::default()
    };
    let out = generate_with("Expr Number { value: u64 }; Expr Nil;", &config);
    assert!(!out.contains("#[derive"));
    assert!(out.contains("\n\npub enum Expr {\n"));
    assert!(out.contains("\n\npub struct Nil;\n"));
}

#[test]
fn deterministic() {
    let first = generate(LOX);
    for _ in 0..5 {
        assert_eq!(generate(LOX), first);
    }
}

#[test]
fn dispatch_is_exhaustive() {
    let model = model(LOX);
    let out = crate::generate(&model, &GenConfig::default());

    for category in model.categories() {
        let name = &category.name;
        let visitor = section(&out, &format!("pub trait {name}Visitor {{"));
        let acceptor = section(&out, &format!("impl {name}Accept for {name} {{"));

        assert_eq!(visitor.matches("    fn visit_").count(), category.variants.len());
        assert_eq!(acceptor.matches(" => visitor.").count(), category.variants.len());

        for variant in &category.variants {
            let method = variant.visit_method();
            let v = &variant.name;
            assert_eq!(
                visitor
                    .matches(&format!("fn {method}(&mut self, node: &{v}) -> Self::Result;"))
                    .count(),
                1
            );
            assert_eq!(
                acceptor
                    .matches(&format!("Self::{v}(node) => visitor.{method}(node),"))
                    .count(),
                1
            );
        }
    }
}

/// Text from `start` up to and including the next unindented `}`.
fn section<'a>(out: &'a str, start: &str) -> &'a str {
    let begin = out
        .find(start)
        .unwrap_or_else(|| panic!("missing {start:?}"));
    let rest = &out[begin..];
    let end = rest.find("\n}").map_or(rest.len(), |i| i + 2);
    &rest[..end]
}

#[test]
fn field_order_is_preserved() {
    let out = generate("Expr Binary { right: Expr, operator: u8, left: Expr };");

    let record = section(&out, "pub struct Binary {");
    let ctor = section(&out, "impl Binary {");

    let positions = |text: &str, needles: [&str; 3]| {
        needles
            .iter()
            .map(|needle| text.find(needle).unwrap())
            .collect::<Vec<_>>()
    };
    let is_sorted = |v: &[usize]| v.windows(2).all(|w| w[0] < w[1]);

    assert!(is_sorted(&positions(record, ["pub right", "pub operator", "pub left"])));
    assert!(is_sorted(&positions(
        ctor,
        ["new(right", "operator: u8", "left: impl"]
    )));
    assert!(is_sorted(&positions(
        ctor,
        ["right: right.into()", "operator,", "left: left.into()"]
    )));
}

#[test]
fn categories_keep_declaration_order() {
    let out = generate("Stmt Print { expression: Expr }; Expr Nil;");
    let stmt = out.find("pub enum Stmt").unwrap();
    let stmt_accept = out.find("impl StmtAccept for Stmt").unwrap();
    let expr = out.find("pub enum Expr").unwrap();
    assert!(stmt < stmt_accept);
    assert!(stmt_accept < expr);
}

#[test]
fn independent_grammars() {
    let full = generate(LOX);
    let reduced = generate(EXPR);

    assert!(full.contains("pub trait StmtVisitor"));
    assert!(full.contains("fn visit_call("));

    assert!(!reduced.contains("Stmt"));
    assert!(!reduced.contains("visit_call"));
    assert!(!reduced.contains("visit_variable"));
    assert_eq!(reduced.matches(" => visitor.").count(), 4);

    // the reduced grammar doesn't leak into later runs
    assert_eq!(generate(LOX), full);
}

#[test]
fn builder_matches_parsed_grammar() {
    use crate::grammar::{GrammarSpec, TypeSpec, VariantSpec};

    let spec = GrammarSpec::new()
        .external("crate::token::Token")
        .unwrap()
        .category(
            "Expr",
            [
                VariantSpec::new("Unary")
                    .field("operator", TypeSpec::named("Token"))
                    .field("right", TypeSpec::named("Expr")),
                VariantSpec::new("Binary")
                    .field("left", TypeSpec::named("Expr"))
                    .field("operator", TypeSpec::named("Token"))
                    .field("right", TypeSpec::named("Expr")),
                VariantSpec::new("Literal").field("value", TypeSpec::named("Token")),
                VariantSpec::new("Grouping").field("expression", TypeSpec::named("Expr")),
            ],
        );
    let model = GrammarModel::load(spec).unwrap();

    assert_eq!(
        crate::generate(&model, &GenConfig::default()),
        generate(EXPR)
    );
}

#[test]
fn committed_lox_ast_is_up_to_date() {
    let config = GenConfig {
        derives: ["Debug", "Clone", "PartialEq", "Eq", "Hash"]
            .map(String::from)
            .to_vec(),
        ..GenConfig::default()
    };
    let committed = include_str!("../../../src/ast.rs");
    assert_eq!(
        generate_with(LOX, &config),
        committed,
        "src/ast.rs is stale, run `cargo x codegen`"
    );
}
