//! Tests for declaration-level generation: enums, parameter holders, key
//! classes, namespaces, and the terminal outcomes.


use fx_test::{block, file_with, int, mixin, sp, var, FxTest};
use mixfx_ast::{
    Declaration, EnumType, EnumValue, Expression, LiteralValue, MixinKind, NamespaceBlock,
    ParametersBlock, Qualifier, ShaderClassType, UsingStatement, Variable,
};

fn enum_decl() -> Declaration {
    Declaration::Enum(EnumType {
        name: "LightKind".into(),
        values: vec![
            EnumValue {
                name: "Point".into(),
                value: None,
                span: sp(4),
            },
            EnumValue {
                name: "Spot".into(),
                value: Some(int(4)),
                span: sp(5),
            },
        ],
        span: sp(3),
    })
}

fn parameters_decl() -> Declaration {
    let mut intensity = Variable::new("float", "Intensity", sp(9));
    intensity.initializer = Some(Expression::literal(LiteralValue::Float(1.0), sp(9)));
    Declaration::Parameters(ParametersBlock {
        name: "MaterialParameters".into(),
        variables: vec![Variable::new("Texture", "AlbedoMap", sp(8)), intensity],
        span: sp(7),
    })
}

fn class_type_decl() -> Declaration {
    let mut position = Variable::new("float4", "Position", sp(13));
    position.qualifiers = vec![Qualifier::Stream];
    let mut exposure = Variable::new("float", "Exposure", sp(14));
    exposure.initializer = Some(Expression::literal(LiteralValue::Float(1.0), sp(14)));
    Declaration::ClassType(ShaderClassType {
        name: "BasicShader".into(),
        members: vec![
            Variable::new("Texture", "DiffuseMap", sp(12)),
            position,
            exposure,
        ],
        span: sp(11),
    })
}

#[test]
fn test_enum_generation_preserves_member_order() {
    let file = file_with(vec![enum_decl(), parameters_decl()]);
    let test = FxTest::compile(&file);
    test.assert_ordered(&["public enum LightKind", "Point,", "Spot = 4,"]);
}

#[test]
fn test_parameters_block_generates_holder_class() {
    let file = file_with(vec![parameters_decl()]);
    let test = FxTest::compile(&file);
    test.assert_ordered(&[
        "public partial class MaterialParameters : ShaderMixinParameters",
        "public Texture AlbedoMap;",
        "public float Intensity = 1.0;",
    ]);
}

#[test]
fn test_class_type_generates_keys_companion() {
    let file = file_with(vec![class_type_decl()]);
    let test = FxTest::compile(&file);
    test.assert_contains("public static partial class BasicShaderKeys");
    test.assert_contains(
        "public static readonly ParameterKey<Texture> DiffuseMap = ParameterKeys.New<Texture>();",
    );
    test.assert_contains(
        "public static readonly ParameterKey<float> Exposure = ParameterKeys.New<float>(1.0);",
    );
    // Stream members never surface as keys.
    test.assert_not_contains("Position");
}

#[test]
fn test_orphan_class_type_gains_default_namespace() {
    let file = file_with(vec![class_type_decl()]);
    let test = FxTest::compile(&file);
    test.assert_ordered(&[
        "namespace Shaders.Effects.Modules",
        "public static partial class BasicShaderKeys",
    ]);
}

#[test]
fn test_explicit_namespace_is_preserved() {
    let file = file_with(vec![Declaration::Namespace(NamespaceBlock {
        name: "MyGame.Effects".into(),
        declarations: vec![class_type_decl()],
        span: sp(1),
    })]);
    let test = FxTest::compile(&file);
    test.assert_ordered(&[
        "namespace MyGame.Effects",
        "public static partial class BasicShaderKeys",
    ]);
    test.assert_not_contains("Shaders.Effects.Modules");
}

#[test]
fn test_file_level_using_directive_passes_through() {
    let file = file_with(vec![
        Declaration::Using(UsingStatement::new("Shading.Common", sp(1))),
        parameters_decl(),
    ]);
    let test = FxTest::compile(&file);
    test.assert_contains("using Shading.Common;");
}

#[test]
fn test_empty_file_generates_nothing_marker() {
    let test = FxTest::compile(&file_with(vec![]));

    assert!(test.diagnostics.is_empty());
    test.assert_contains("// Nothing to generate");
    test.assert_not_contains("using System;");
}

#[test]
fn test_enum_alone_is_not_mixin_bearing() {
    // An enum on its own does not qualify the file for generation.
    let test = FxTest::compile(&file_with(vec![enum_decl()]));

    assert!(test.diagnostics.is_empty());
    test.assert_contains("// Nothing to generate");
    test.assert_not_contains("LightKind");
}

#[test]
fn test_stream_only_class_type_is_not_mixin_bearing() {
    let mut position = Variable::new("float4", "Position", sp(2));
    position.qualifiers = vec![Qualifier::Stream];
    let file = file_with(vec![Declaration::ClassType(ShaderClassType {
        name: "SurfaceStreams".into(),
        members: vec![position],
        span: sp(1),
    })]);
    let test = FxTest::compile(&file);
    test.assert_contains("// Nothing to generate");
}

#[test]
fn test_generation_is_deterministic() {
    let file = file_with(vec![
        enum_decl(),
        parameters_decl(),
        class_type_decl(),
        block(
            0,
            "ForwardEffect",
            vec![mixin(MixinKind::Default, var("BaseShading"))],
        ),
    ]);

    let first = FxTest::compile(&file);
    let second = FxTest::compile(&file);
    assert_eq!(first.source(), second.source());

    let first_diags: Vec<_> = first.diagnostics.iter().collect();
    let second_diags: Vec<_> = second.diagnostics.iter().collect();
    assert_eq!(first_diags, second_diags);
}

#[test]
fn test_line_markers_reference_the_effect_source() {
    let file = file_with(vec![parameters_decl()]);
    let test = FxTest::compile_with_markers(&file, true);
    test.assert_contains("#line 7 \"test.mixfx\"");
    test.assert_contains("#line 8 \"test.mixfx\"");
}
