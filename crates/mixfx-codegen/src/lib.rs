//! Source-to-source compiler for mixfx effect files.
//!
//! This crate turns the effect AST produced by the external parser into
//! generated host source that builds shader mixin trees against the
//! runtime registry. Compilation is two sequential passes over the tree —
//! a read-only scope analysis and a syntax-directed code generator —
//! sharing one diagnostics sink. The second pass needs the first to have
//! finished a whole block before generating any of it: a `using params`
//! anywhere in a block is visible to every statement of that block.

#![no_std]

extern crate alloc;

mod codegen;
mod decl;
mod diagnostics;
mod expr;
mod scope;
mod stmt;
mod writer;

pub use codegen::{generate, generate_with_options, DEFAULT_NAMESPACE};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use scope::{analyze, BlockScope, ScopeInfo};
pub use writer::SourceWriter;

use alloc::string::String;

use mixfx_ast::ShaderFile;

/// Compile an effect file: scope analysis followed by code generation.
///
/// Returns the generated source, or `None` when any error is recorded —
/// whether brought in by the caller (upstream parse) or produced by either
/// pass. Diagnostics accumulate in full either way; there is no partial
/// output.
pub fn compile(file: &ShaderFile, diagnostics: &mut Diagnostics) -> Option<String> {
    if diagnostics.has_errors() {
        return None;
    }
    let scopes = analyze(file, diagnostics);
    if diagnostics.has_errors() {
        return None;
    }
    generate(file, &scopes, diagnostics)
}
