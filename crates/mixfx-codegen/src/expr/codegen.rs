//! Code generation for effect expressions.
//!
//! Expression emission is where declared-parameter accesses are rewritten
//! into runtime context calls: a member access whose target names a
//! parameter group declared by the enclosing block becomes
//! `context.GetParam(...)` (or `context.SetParam(...)` when assigned to).
//! The substitution is purely local and syntax-directed.

use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use mixfx_ast::{AssignmentExpression, Expression, GenericIdentifier};

use crate::codegen::GenContext;

/// Write an expression, substituting declared-parameter member accesses
/// with runtime context lookups.
pub(crate) fn write_expression(ctx: &mut GenContext<'_>, expression: &Expression) {
    match expression {
        Expression::Variable(var) => {
            let text = var.name.to_string();
            ctx.writer.write(&text);
        }
        Expression::Literal(literal) => {
            let text = literal.value.to_string();
            ctx.writer.write(&text);
        }
        Expression::Member(member) => {
            if let Some((scope, key)) = try_parameters(ctx, expression) {
                let call = format!("context.GetParam({}.{})", scope, key);
                ctx.writer.write(&call);
            } else {
                write_expression(ctx, &member.target);
                ctx.writer.write(".").write(&member.member);
            }
        }
        Expression::Assignment(assign) => write_assignment(ctx, assign),
    }
}

fn write_assignment(ctx: &mut GenContext<'_>, assign: &AssignmentExpression) {
    if let Some((scope, key)) = try_parameters(ctx, &assign.target) {
        let call = format!("context.SetParam({}.{}, ", scope, key);
        ctx.writer.write(&call);
        write_expression(ctx, &assign.value);
        ctx.writer.write(")");
    } else {
        write_expression(ctx, &assign.target);
        let op = format!(" {} ", assign.operator);
        ctx.writer.write(&op);
        write_expression(ctx, &assign.value);
    }
}

/// Resolve an expression to a `Scope.Key` declared-parameter access.
///
/// Succeeds only for a member reference whose target is a bare variable
/// naming a parameter group declared by the enclosing shader block.
pub(crate) fn try_parameters<'e>(
    ctx: &GenContext<'_>,
    expression: &'e Expression,
) -> Option<(&'e str, &'e str)> {
    let Expression::Member(member) = expression else {
        return None;
    };
    let scope = member.target.as_plain_variable()?;
    let block = ctx.current_block?;
    block
        .contains(scope)
        .then(|| (scope, member.member.as_str()))
}

/// Split a mixin target into its name expression and generic arguments.
///
/// `Blur<Sizes.Large, 4>` yields the name `Blur` plus one synthesized
/// argument expression per sub-identifier, in declaration order: a
/// two-segment dotted identifier becomes a member path, a literal stays a
/// literal, a bare identifier becomes a variable reference. Any other
/// dotted segment count is a compile error; the argument is dropped, never
/// truncated.
pub(crate) fn extract_generic_parameters(
    ctx: &mut GenContext<'_>,
    expression: &Expression,
) -> (Expression, Vec<Expression>) {
    let Expression::Variable(var) = expression else {
        return (expression.clone(), Vec::new());
    };
    if !var.name.is_generic() {
        return (expression.clone(), Vec::new());
    }

    let name = Expression::variable(var.name.text.clone(), var.span);
    let mut generics = Vec::new();
    for sub in &var.name.generics {
        match sub {
            GenericIdentifier::Dotted { segments, span } => {
                if segments.len() == 2 {
                    generics.push(Expression::member(
                        Expression::variable(segments[0].clone(), *span),
                        segments[1].clone(),
                        *span,
                    ));
                } else {
                    ctx.diagnostics
                        .error("unsupported identifier in generic used for mixin", *span);
                }
            }
            GenericIdentifier::Literal(literal) => {
                generics.push(Expression::Literal(literal.clone()));
            }
            GenericIdentifier::Plain { name, span } => {
                generics.push(Expression::variable(name.clone(), *span));
            }
        }
    }
    (name, generics)
}

/// Write a mixin name, quoting it when it is a bare reference.
///
/// A bare name addresses the block registry by string; anything else is a
/// runtime expression producing the name.
pub(crate) fn write_mixin_name(ctx: &mut GenContext<'_>, name: &Expression) {
    let quoted = matches!(name, Expression::Variable(_));
    if quoted {
        ctx.writer.write("\"");
    }
    write_expression(ctx, name);
    if quoted {
        ctx.writer.write("\"");
    }
}

/// Append generic arguments to a mixin call's argument list.
pub(crate) fn write_generic_parameters(ctx: &mut GenContext<'_>, generics: &[Expression]) {
    for generic in generics {
        ctx.writer.write(", ");
        write_expression(ctx, generic);
    }
}
