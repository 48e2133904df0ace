//! Code generation for effect declarations.
//!
//! One generated unit per qualifying declaration: an enum, a
//! parameter-holder class, a `<Name>Keys` companion class, or a mixin
//! builder class registered with the runtime registry at module
//! initialization.

use alloc::format;

use mixfx_ast::{
    Declaration, EnumType, NamespaceBlock, ParametersBlock, ShaderBlock, ShaderClassType,
};

use crate::codegen::GenContext;
use crate::expr::codegen::write_expression;
use crate::stmt::codegen::generate_statement;

pub(crate) fn generate_declaration(ctx: &mut GenContext<'_>, declaration: &Declaration) {
    match declaration {
        Declaration::Namespace(namespace) => generate_namespace(ctx, namespace),
        Declaration::Enum(enum_type) => generate_enum(ctx, enum_type),
        Declaration::Parameters(block) => generate_parameters_block(ctx, block),
        Declaration::ClassType(class_type) => generate_class_type(ctx, class_type),
        Declaration::Block(block) => generate_shader_block(ctx, block),
        Declaration::Using(stmt) => {
            ctx.writer.link_line(stmt.span);
            let directive = format!("using {};", stmt.path);
            ctx.writer.write_line(&directive);
        }
        // Already reported by the analyzer; nothing to emit.
        Declaration::UsingParameters(_) => {}
    }
}

fn generate_namespace(ctx: &mut GenContext<'_>, namespace: &NamespaceBlock) {
    ctx.writer.link_line(namespace.span);
    let head = format!("namespace {}", namespace.name);
    ctx.writer.write(&head);
    ctx.writer.open_brace();
    for declaration in &namespace.declarations {
        generate_declaration(ctx, declaration);
    }
    ctx.writer.close_brace();
}

/// Enums pass through with their member list in original order.
fn generate_enum(ctx: &mut GenContext<'_>, enum_type: &EnumType) {
    ctx.writer.link_line(enum_type.span);
    let head = format!("public enum {}", enum_type.name);
    ctx.writer.write(&head);
    ctx.writer.open_brace();
    for value in &enum_type.values {
        ctx.writer.link_line(value.span);
        ctx.writer.write(&value.name);
        if let Some(expr) = &value.value {
            ctx.writer.write(" = ");
            write_expression(ctx, expr);
        }
        ctx.writer.write_line(",");
    }
    ctx.writer.close_brace();
}

/// A parameter group becomes a holder class on the base mixin-parameters
/// contract, one field per declared variable in order.
fn generate_parameters_block(ctx: &mut GenContext<'_>, block: &ParametersBlock) {
    ctx.writer.link_line(block.span);
    let head = format!("public partial class {} : ShaderMixinParameters", block.name);
    ctx.writer.write(&head);
    ctx.writer.open_brace();
    for variable in &block.variables {
        ctx.writer.link_line(variable.span);
        let field = format!("public {} {}", variable.ty, variable.name);
        ctx.writer.write(&field);
        if let Some(init) = &variable.initializer {
            ctx.writer.write(" = ");
            write_expression(ctx, init);
        }
        ctx.writer.write_line(";");
    }
    ctx.writer.close_brace();
}

/// A class type gets a `<Name>Keys` companion holding one static parameter
/// key per bindable member. Fixed name-mangling convention.
fn generate_class_type(ctx: &mut GenContext<'_>, class_type: &ShaderClassType) {
    ctx.writer.link_line(class_type.span);
    let head = format!("public static partial class {}Keys", class_type.name);
    ctx.writer.write(&head);
    ctx.writer.open_brace();
    for member in class_type
        .members
        .iter()
        .filter(|member| member.is_parameter_key())
    {
        ctx.writer.link_line(member.span);
        let field = format!(
            "public static readonly ParameterKey<{}> {} = ParameterKeys.New<{}>(",
            member.ty, member.name, member.ty
        );
        ctx.writer.write(&field);
        if let Some(init) = &member.initializer {
            write_expression(ctx, init);
        }
        ctx.writer.write_line(");");
    }
    ctx.writer.close_brace();
}

/// A shader block becomes a mixin builder class: a `Generate` method
/// translating the block's statements, plus a module-initializer hook
/// registering the builder under the block's name.
fn generate_shader_block(ctx: &mut GenContext<'_>, block: &ShaderBlock) {
    ctx.writer.link_line(block.span);
    ctx.current_block = ctx.scopes.block(block.id);

    let head = format!("internal partial class {} : IShaderMixinBuilder", block.name);
    ctx.writer.write(&head);
    ctx.writer.open_brace();

    ctx.writer
        .write("public void Generate(MixinTree mixin, MixinContext context)");
    ctx.writer.open_brace();
    for statement in &block.statements {
        generate_statement(ctx, statement);
    }
    ctx.writer.close_brace();

    ctx.writer.newline();
    ctx.writer.write_line("[ModuleInitializer]");
    ctx.writer.write("internal static void __Initialize__()");
    ctx.writer.open_brace();
    let register = format!("Registry.Register(\"{0}\", new {0}());", block.name);
    ctx.writer.write_line(&register);
    ctx.writer.close_brace();

    ctx.writer.close_brace();
    ctx.current_block = None;
}
