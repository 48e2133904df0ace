//! Tests for failure semantics: upstream errors, accumulation, and the
//! all-or-nothing output contract.


use fx_test::{block, file_with, member, mixin, var};
use mixfx_ast::{MixinKind, Span};
use mixfx_codegen::{analyze, compile, generate, Diagnostics};

#[test]
fn test_upstream_parse_errors_abort_generation() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.error("unexpected token 'mxiin'", Span::new(2, 1));

    let file = file_with(vec![block(
        0,
        "ForwardEffect",
        vec![mixin(MixinKind::Default, var("BaseShading"))],
    )]);

    assert!(compile(&file, &mut diagnostics).is_none());
    // The parse error is still the only diagnostic: neither pass ran.
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_generate_refuses_error_laden_sink() {
    let file = file_with(vec![block(
        0,
        "ForwardEffect",
        vec![mixin(MixinKind::Default, var("BaseShading"))],
    )]);

    let mut clean = Diagnostics::new();
    let scopes = analyze(&file, &mut clean);

    let mut tainted = Diagnostics::new();
    tainted.error("unexpected token", Span::new(1, 1));
    assert!(generate(&file, &scopes, &mut tainted).is_none());
}

#[test]
fn test_compile_succeeds_end_to_end() {
    let file = file_with(vec![block(
        0,
        "ForwardEffect",
        vec![mixin(MixinKind::Default, var("BaseShading"))],
    )]);

    let mut diagnostics = Diagnostics::new();
    let source = compile(&file, &mut diagnostics).expect("compilation should succeed");
    assert!(source.contains("context.Mixin(mixin, \"BaseShading\");"));
    assert!(diagnostics.is_empty());
}

#[test]
fn test_no_partial_output_with_generation_errors() {
    // The valid first statement would generate fine, but one error later
    // in the block withholds the whole unit.
    let file = file_with(vec![block(
        0,
        "ForwardEffect",
        vec![
            mixin(MixinKind::Default, var("BaseShading")),
            mixin(MixinKind::Macro, member("Lighting", "LightCount")),
        ],
    )]);

    let mut diagnostics = Diagnostics::new();
    assert!(compile(&file, &mut diagnostics).is_none());
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_all_generation_errors_accumulate() {
    let file = file_with(vec![block(
        0,
        "ForwardEffect",
        vec![
            mixin(MixinKind::Macro, member("Lighting", "LightCount")),
            mixin(MixinKind::Compose, var("DirectLighting")),
            mixin(MixinKind::Default, var("BaseShading")),
        ],
    )]);

    let mut diagnostics = Diagnostics::new();
    assert!(compile(&file, &mut diagnostics).is_none());
    assert_eq!(diagnostics.len(), 2);

    let markers = diagnostics.error_markers();
    assert_eq!(markers.lines().count(), 2);
    assert!(markers.lines().all(|line| line.starts_with("#error ")));
}
