//! Whole-unit filetests: realistic effect files checked line-by-line.

use mixfx_ast::{
    AssignmentOperator, BlockId, Declaration, Expression, ForEachStatement, LiteralValue,
    MixinKind, MixinStatement, ParametersBlock, ShaderBlock, ShaderFile, Span, Statement,
    UsingParametersStatement, Variable,
};
use mixfx_filetests::{assert_output, compile_effect};

fn sp(line: u32) -> Span {
    Span::new(line, 1)
}

fn mixin(kind: MixinKind, target: Expression) -> Statement {
    Statement::Mixin(MixinStatement::new(kind, target, sp(0)))
}

fn var(name: &str) -> Expression {
    Expression::variable(name, sp(0))
}

fn member(scope: &str, member_name: &str) -> Expression {
    Expression::member(var(scope), member_name, sp(0))
}

/// A deferred-lighting style effect: parameter group, base mixins, a
/// composed shadow filter and a per-light loop.
fn deferred_effect() -> ShaderFile {
    let statements = vec![
        Statement::UsingParameters(UsingParametersStatement::new(var("Lighting"), None, sp(4))),
        mixin(MixinKind::Default, var("GBufferBase")),
        mixin(
            MixinKind::Macro,
            Expression::assignment(
                var("DEFERRED_MAX_LIGHTS"),
                AssignmentOperator::Assign,
                Expression::literal(LiteralValue::Int(64), sp(7)),
                sp(7),
            ),
        ),
        mixin(
            MixinKind::Compose,
            Expression::assignment(
                var("shadowFilter"),
                AssignmentOperator::Assign,
                var("PcfShadowFilter"),
                sp(9),
            ),
        ),
        Statement::ForEach(ForEachStatement::new(
            None,
            member("Lighting", "DirectLights"),
            vec![mixin(MixinKind::Default, var("DirectLightGroup"))],
            sp(11),
        )),
    ];

    ShaderFile {
        path: "fx/deferred.mixfx".into(),
        declarations: vec![
            Declaration::Parameters(ParametersBlock {
                name: "Lighting".into(),
                variables: vec![Variable::new("LightData[]", "DirectLights", sp(2))],
                span: sp(1),
            }),
            Declaration::Block(ShaderBlock {
                id: BlockId::new(0),
                name: "DeferredLightingEffect".into(),
                statements,
                span: sp(3),
            }),
        ],
    }
}

#[test]
fn test_deferred_effect_unit() {
    let (source, diagnostics) = compile_effect(&deferred_effect());
    assert!(diagnostics.is_empty(), "unexpected diagnostics: {:?}", diagnostics);

    assert_output(
        source.as_deref().unwrap(),
        r#"
        check: // <auto-generated>
        check: using Shaders.Mixins;
        check: public partial class Lighting : ShaderMixinParameters
        nextln: {
        nextln: public LightData[] DirectLights;
        nextln: }
        check: internal partial class DeferredLightingEffect : IShaderMixinBuilder
        check: public void Generate(MixinTree mixin, MixinContext context)
        check: context.Mixin(mixin, "GBufferBase");
        check: mixin.Mixin.AddMacro("DEFERRED_MAX_LIGHTS", 64);
        check: var __subMixin = new MixinTree() { Parent = mixin };
        nextln: context.Mixin(__subMixin, "PcfShadowFilter");
        nextln: mixin.Mixin.AddComposition("shadowFilter", __subMixin.Mixin);
        check: foreach(var ____1 in context.GetParam(Lighting.DirectLights))
        check: context.PushParameters(____1);
        nextln: context.Mixin(mixin, "DirectLightGroup");
        check: context.PopParameters();
        check: [ModuleInitializer]
        check: Registry.Register("DeferredLightingEffect", new DeferredLightingEffect());
        "#,
    );
}

#[test]
fn test_scoped_parameters_unit() {
    let statements = vec![
        Statement::UsingParameters(UsingParametersStatement::new(var("Material"), None, sp(3))),
        Statement::UsingParameters(UsingParametersStatement::new(
            member("Material", "SpecularParams"),
            Some(vec![mixin(MixinKind::Default, var("SpecularLighting"))]),
            sp(4),
        )),
    ];
    let file = ShaderFile {
        path: "fx/specular.mixfx".into(),
        declarations: vec![Declaration::Block(ShaderBlock {
            id: BlockId::new(0),
            name: "SpecularEffect".into(),
            statements,
            span: sp(2),
        })],
    };

    let (source, diagnostics) = compile_effect(&file);
    assert!(diagnostics.is_empty());

    assert_output(
        source.as_deref().unwrap(),
        r#"
        check: context.PushParameters(context.GetParam(Material.SpecularParams));
        nextln: context.Mixin(mixin, "SpecularLighting");
        nextln: context.PopParameters();
        "#,
    );
}

#[test]
fn test_rejected_effect_reports_not_generates() {
    let file = ShaderFile {
        path: "fx/broken.mixfx".into(),
        declarations: vec![Declaration::Block(ShaderBlock {
            id: BlockId::new(0),
            name: "BrokenEffect".into(),
            statements: vec![mixin(MixinKind::Macro, member("Lighting", "LightCount"))],
            span: sp(1),
        })],
    };

    let (source, diagnostics) = compile_effect(&file);
    assert!(source.is_none());

    assert_output(
        &diagnostics.error_markers(),
        r#"
        check: #error error: invalid syntax, expecting 'mixin macro Parameters.NameOfProperty' or 'mixin macro nameOfProperty = value'
        "#,
    );
}
