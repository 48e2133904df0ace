//! Filecheck-driven tests over generated effect source.
//!
//! Whole generated units are matched against `check:`/`nextln:` directive
//! blocks. Effect inputs are built as in-code ASTs because the DSL parser
//! is an external collaborator of the compiler under test.

use filecheck::{CheckerBuilder, NO_VARIABLES};
use mixfx_ast::ShaderFile;
use mixfx_codegen::{analyze, generate_with_options, Diagnostics};

/// Compile an effect file with `#line` markers suppressed.
///
/// Markers interleave with the structural lines the directives pin down,
/// so filetests keep them off.
pub fn compile_effect(file: &ShaderFile) -> (Option<String>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let scopes = analyze(file, &mut diagnostics);
    let source = if diagnostics.has_errors() {
        None
    } else {
        generate_with_options(file, &scopes, &mut diagnostics, false)
    };
    (source, diagnostics)
}

/// Match generated source against filecheck directives.
///
/// Each non-empty line of `directives` must be a filecheck directive such
/// as `check:` or `nextln:`. Returns the checker's explanation on failure.
pub fn match_output(actual: &str, directives: &str) -> Result<(), String> {
    let mut builder = CheckerBuilder::new();
    for line in directives.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        builder
            .directive(trimmed)
            .map_err(|e| format!("bad filecheck directive '{}': {}", trimmed, e))?;
    }
    let checker = builder.finish();

    if checker
        .check(actual, NO_VARIABLES)
        .map_err(|e| format!("filecheck error: {}", e))?
    {
        Ok(())
    } else {
        let (_, explain) = checker
            .explain(actual, NO_VARIABLES)
            .map_err(|e| format!("filecheck explain error: {}", e))?;
        Err(format!("filecheck failed:\n{}", explain))
    }
}

/// Assert that generated source matches filecheck directives.
///
/// # Panics
///
/// Panics with the checker's explanation when matching fails.
pub fn assert_output(actual: &str, directives: &str) {
    if let Err(explain) = match_output(actual, directives) {
        panic!("{}\n\nActual output:\n{}", explain, actual);
    }
}
