//! AST for the mixfx effect-mixin language.
//!
//! This crate defines the tree produced by the external effect parser and
//! consumed by the `mixfx-codegen` passes, together with source spans,
//! block identities and the member-variable classification rule.

#![no_std]

extern crate alloc;

mod ast;
mod block_id;
mod ident;
mod span;
mod variable;

pub use ast::{
    AssignmentExpression, AssignmentOperator, Declaration, EnumType, EnumValue, Expression,
    ExpressionStatement, ForEachStatement, MemberReference, MixinKind, MixinStatement,
    NamespaceBlock, ParametersBlock, ShaderBlock, ShaderClassType, ShaderFile, Statement,
    UsingParametersStatement, UsingStatement, VariableReference,
};
pub use block_id::BlockId;
pub use ident::{GenericIdentifier, Identifier, Literal, LiteralValue};
pub use span::Span;
pub use variable::{Qualifier, Variable};
