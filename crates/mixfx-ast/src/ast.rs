//! Effect file AST.
//!
//! The closed set of node variants produced by the effect parser and
//! consumed by the compiler passes. The tree is immutable once built;
//! passes attach per-block information out of band, keyed by [`BlockId`].

use alloc::{boxed::Box, string::String, vec::Vec};
use core::fmt;

use crate::{
    block_id::BlockId,
    ident::{Identifier, Literal, LiteralValue},
    span::Span,
    variable::Variable,
};

/// A parsed effect file.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderFile {
    /// Path the file was parsed from, used for diagnostics and `#line`
    /// markers in the generated output.
    pub path: String,
    /// Top-level declarations in source order.
    pub declarations: Vec<Declaration>,
}

impl ShaderFile {
    pub fn new(path: impl Into<String>) -> Self {
        ShaderFile {
            path: path.into(),
            declarations: Vec::new(),
        }
    }
}

/// A file-level or namespace-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Namespace(NamespaceBlock),
    Enum(EnumType),
    Parameters(ParametersBlock),
    ClassType(ShaderClassType),
    Block(ShaderBlock),
    /// Import directive.
    Using(UsingStatement),
    /// A stray `using params` at declaration level. Always a scope error;
    /// kept representable so the analyzer can report it instead of the
    /// parser having to reject it.
    UsingParameters(UsingParametersStatement),
}

/// `namespace Name { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceBlock {
    pub name: String,
    pub declarations: Vec<Declaration>,
    pub span: Span,
}

/// An enum declaration with its values in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    pub name: String,
    pub values: Vec<EnumValue>,
    pub span: Span,
}

/// One enum member, optionally with an explicit value.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub name: String,
    pub value: Option<Expression>,
    pub span: Span,
}

/// A `params Name { ... }` parameter group declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ParametersBlock {
    pub name: String,
    pub variables: Vec<Variable>,
    pub span: Span,
}

/// A shader class type; only its member variables matter to this compiler.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderClassType {
    pub name: String,
    pub members: Vec<Variable>,
    pub span: Span,
}

/// An `effect Name { ... }` mixin block.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderBlock {
    pub id: BlockId,
    pub name: String,
    pub statements: Vec<Statement>,
    pub span: Span,
}

/// A statement inside a shader block.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Mixin(MixinStatement),
    Using(UsingStatement),
    UsingParameters(UsingParametersStatement),
    ForEach(ForEachStatement),
    Expression(ExpressionStatement),
}

impl Statement {
    pub fn span(&self) -> Span {
        match self {
            Statement::Mixin(stmt) => stmt.span,
            Statement::Using(stmt) => stmt.span,
            Statement::UsingParameters(stmt) => stmt.span,
            Statement::ForEach(stmt) => stmt.span,
            Statement::Expression(stmt) => stmt.span,
        }
    }
}

/// The composition semantics of a `mixin` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixinKind {
    /// Mix the target into the current tree node.
    Default,
    /// Mix the target into a new child node of the current node.
    Child,
    /// Remove a previously mixed target from the current node.
    Remove,
    /// Duplicate the parent's composed mixin into the current node.
    Clone,
    /// Inject a name/value macro into the current mixin.
    Macro,
    /// Attach a freshly composed sub-mixin to a named slot.
    Compose,
}

/// A `mixin` statement. `Clone` takes no target; every other kind
/// requires one.
#[derive(Debug, Clone, PartialEq)]
pub struct MixinStatement {
    pub kind: MixinKind,
    pub target: Option<Expression>,
    pub span: Span,
}

impl MixinStatement {
    pub fn new(kind: MixinKind, target: Expression, span: Span) -> Self {
        MixinStatement {
            kind,
            target: Some(target),
            span,
        }
    }

    /// A `mixin clone;` statement.
    pub fn clone_current(span: Span) -> Self {
        MixinStatement {
            kind: MixinKind::Clone,
            target: None,
            span,
        }
    }
}

/// A `using Name.Space;` import directive.
#[derive(Debug, Clone, PartialEq)]
pub struct UsingStatement {
    pub path: String,
    pub span: Span,
}

impl UsingStatement {
    pub fn new(path: impl Into<String>, span: Span) -> Self {
        UsingStatement {
            path: path.into(),
            span,
        }
    }
}

/// A `using params` statement.
///
/// Without a body it declares a parameter group for the enclosing block;
/// with a body it pushes the referenced parameters around the nested
/// statements at generation time.
#[derive(Debug, Clone, PartialEq)]
pub struct UsingParametersStatement {
    pub name: Expression,
    pub body: Option<Vec<Statement>>,
    pub span: Span,
}

impl UsingParametersStatement {
    pub fn new(name: Expression, body: Option<Vec<Statement>>, span: Span) -> Self {
        UsingParametersStatement { name, body, span }
    }
}

/// A `foreach` statement. Without a bound variable the collection must be
/// a declared-parameter member access and the body runs under pushed
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ForEachStatement {
    pub variable: Option<String>,
    pub collection: Expression,
    pub body: Vec<Statement>,
    pub span: Span,
}

impl ForEachStatement {
    pub fn new(
        variable: Option<String>,
        collection: Expression,
        body: Vec<Statement>,
        span: Span,
    ) -> Self {
        ForEachStatement {
            variable,
            collection,
            body,
            span,
        }
    }
}

/// An expression used as a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expr: Expression,
    pub span: Span,
}

impl ExpressionStatement {
    pub fn new(expr: Expression, span: Span) -> Self {
        ExpressionStatement { expr, span }
    }
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Variable(VariableReference),
    Member(MemberReference),
    Assignment(AssignmentExpression),
    Literal(Literal),
}

impl Expression {
    /// A reference to a plain identifier.
    pub fn variable(name: impl Into<String>, span: Span) -> Self {
        Expression::Variable(VariableReference {
            name: Identifier::plain(name),
            span,
        })
    }

    /// A reference to an identifier that may carry generic arguments.
    pub fn generic_variable(name: Identifier, span: Span) -> Self {
        Expression::Variable(VariableReference { name, span })
    }

    /// A member access `target.member`.
    pub fn member(target: Expression, member: impl Into<String>, span: Span) -> Self {
        Expression::Member(MemberReference {
            target: Box::new(target),
            member: member.into(),
            span,
        })
    }

    /// An assignment `target op value`.
    pub fn assignment(
        target: Expression,
        operator: AssignmentOperator,
        value: Expression,
        span: Span,
    ) -> Self {
        Expression::Assignment(AssignmentExpression {
            target: Box::new(target),
            operator,
            value: Box::new(value),
            span,
        })
    }

    /// A literal value.
    pub fn literal(value: LiteralValue, span: Span) -> Self {
        Expression::Literal(Literal::new(value, span))
    }

    pub fn span(&self) -> Span {
        match self {
            Expression::Variable(var) => var.span,
            Expression::Member(member) => member.span,
            Expression::Assignment(assign) => assign.span,
            Expression::Literal(literal) => literal.span,
        }
    }

    /// The name when this is a bare, non-generic variable reference.
    pub fn as_plain_variable(&self) -> Option<&str> {
        match self {
            Expression::Variable(var) if !var.name.is_generic() => Some(&var.name.text),
            _ => None,
        }
    }
}

/// A reference to a named entity.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableReference {
    pub name: Identifier,
    pub span: Span,
}

/// A member access `target.member`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberReference {
    pub target: Box<Expression>,
    pub member: String,
    pub span: Span,
}

/// Assignment operators recognized by the DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOperator {
    /// `=`
    Assign,
    /// `+=`
    Append,
}

impl fmt::Display for AssignmentOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentOperator::Assign => f.write_str("="),
            AssignmentOperator::Append => f.write_str("+="),
        }
    }
}

/// An assignment expression `target op value`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpression {
    pub target: Box<Expression>,
    pub operator: AssignmentOperator,
    pub value: Box<Expression>,
    pub span: Span,
}
