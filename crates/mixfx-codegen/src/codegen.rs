//! Code generation over an analyzed effect file.
//!
//! Second of the two compiler passes: translates declarations into host
//! builder source against the runtime mixin contract, driven entirely by
//! the scope information computed by [`crate::scope::analyze`].

use alloc::format;
use alloc::string::String;
use alloc::vec;

use mixfx_ast::{Declaration, NamespaceBlock, ShaderFile};

use crate::{
    diagnostics::Diagnostics,
    scope::{BlockScope, ScopeInfo},
    writer::SourceWriter,
};

/// Namespace wrapped around class types declared outside any namespace.
pub const DEFAULT_NAMESPACE: &str = "Shaders.Effects.Modules";

/// Import directives emitted ahead of the generated declarations. Fixed
/// list; the generated code always compiles against the same runtime
/// surface.
const PREAMBLE: &[&str] = &[
    "using System;",
    "using Shaders.Core;",
    "using Shaders.Effects;",
    "using Shaders.Graphics;",
    "using Shaders.Mixins;",
];

/// Mutable state threaded through one generation pass.
///
/// Explicit on purpose: generation holds no ambient state, so independent
/// invocations never observe each other.
pub(crate) struct GenContext<'a> {
    pub(crate) writer: SourceWriter,
    pub(crate) diagnostics: &'a mut Diagnostics,
    pub(crate) scopes: &'a ScopeInfo,
    /// Declared parameters of the block being generated, when inside one.
    pub(crate) current_block: Option<&'a BlockScope>,
    /// Nesting depth used to synthesize distinct loop variable names.
    pub(crate) loop_depth: u32,
}

/// Generate host source for an analyzed effect file.
///
/// Returns `None` when any error is present — recorded before the call
/// (parse or scope analysis) or during generation itself. Generation runs
/// to completion over recoverable statement errors so the sink ends up
/// with the full defect list.
pub fn generate(
    file: &ShaderFile,
    scopes: &ScopeInfo,
    diagnostics: &mut Diagnostics,
) -> Option<String> {
    generate_with_options(file, scopes, diagnostics, true)
}

/// Same as [`generate`], with control over `#line` marker emission.
pub fn generate_with_options(
    file: &ShaderFile,
    scopes: &ScopeInfo,
    diagnostics: &mut Diagnostics,
    line_markers: bool,
) -> Option<String> {
    if diagnostics.has_errors() {
        return None;
    }

    let file = qualify_orphan_class_types(file);

    let mut writer = SourceWriter::new(file.path.clone());
    writer.set_line_markers(line_markers);
    write_header(&mut writer, &file.path);

    // A file with no mixin-bearing content is a valid terminal outcome,
    // not a failure.
    if !scopes.has_mixin && !scopes.has_bindable_class_type {
        writer.write_line("// Nothing to generate");
        return Some(writer.finish());
    }

    for using in PREAMBLE {
        writer.write_line(using);
    }
    writer.newline();

    let mut ctx = GenContext {
        writer,
        diagnostics: &mut *diagnostics,
        scopes,
        current_block: None,
        loop_depth: 0,
    };
    for declaration in &file.declarations {
        crate::decl::codegen::generate_declaration(&mut ctx, declaration);
    }

    let writer = ctx.writer;
    if diagnostics.has_errors() {
        return None;
    }
    Some(writer.finish())
}

fn write_header(writer: &mut SourceWriter, path: &str) {
    writer.write_line("// <auto-generated>");
    writer.write_line("// Do not edit this file yourself!");
    writer.write_line("//");
    writer.write_line(&format!("// This code was generated from '{}'.", path));
    writer.write_line("// Re-save the effect file to regenerate it.");
    writer.write_line("// </auto-generated>");
    writer.newline();
}

/// Wrap file-level class types in the default namespace.
///
/// Generated key classes must live in a namespace; effect files may
/// declare class types at file level, so those are rehomed under
/// [`DEFAULT_NAMESPACE`]. Pure transformation: the input tree is left
/// untouched.
fn qualify_orphan_class_types(file: &ShaderFile) -> ShaderFile {
    let declarations = file
        .declarations
        .iter()
        .map(|declaration| match declaration {
            Declaration::ClassType(class_type) => Declaration::Namespace(NamespaceBlock {
                name: String::from(DEFAULT_NAMESPACE),
                declarations: vec![Declaration::ClassType(class_type.clone())],
                span: class_type.span,
            }),
            other => other.clone(),
        })
        .collect();
    ShaderFile {
        path: file.path.clone(),
        declarations,
    }
}
