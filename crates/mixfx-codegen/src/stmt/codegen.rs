//! Code generation for effect statements.
//!
//! Statement translation is where the six mixin composition semantics are
//! turned into calls against the runtime contract. Statement-shape errors
//! are recoverable: the offending statement is skipped (or a sentinel is
//! substituted) and generation carries on so one compile reports every
//! defect.

use alloc::format;
use alloc::string::ToString;

use mixfx_ast::{
    AssignmentOperator, Expression, ForEachStatement, LiteralValue, MixinKind, MixinStatement,
    Statement, UsingParametersStatement, UsingStatement,
};

use crate::codegen::GenContext;
use crate::expr::codegen::{
    extract_generic_parameters, try_parameters, write_expression, write_generic_parameters,
    write_mixin_name,
};

pub(crate) fn generate_statement(ctx: &mut GenContext<'_>, statement: &Statement) {
    match statement {
        Statement::Mixin(stmt) => generate_mixin_statement(ctx, stmt),
        Statement::Using(stmt) => generate_using_statement(ctx, stmt),
        Statement::UsingParameters(stmt) => generate_using_parameters(ctx, stmt),
        Statement::ForEach(stmt) => generate_for_each(ctx, stmt),
        Statement::Expression(stmt) => {
            ctx.writer.link_line(stmt.span);
            write_expression(ctx, &stmt.expr);
            ctx.writer.write_line(";");
        }
    }
}

fn generate_mixin_statement(ctx: &mut GenContext<'_>, stmt: &MixinStatement) {
    if stmt.kind == MixinKind::Clone {
        generate_clone(ctx, stmt);
        return;
    }

    let Some(target) = stmt.target.as_ref() else {
        ctx.diagnostics
            .error("missing target expression for mixin statement", stmt.span);
        return;
    };

    match stmt.kind {
        MixinKind::Default => generate_default_mixin(ctx, stmt, target),
        MixinKind::Child => generate_child_mixin(ctx, stmt, target),
        MixinKind::Remove => generate_remove_mixin(ctx, stmt, target),
        MixinKind::Macro => generate_macro_mixin(ctx, stmt, target),
        MixinKind::Compose => generate_compose_mixin(ctx, stmt, target),
        MixinKind::Clone => {}
    }
}

/// `mixin Name;` mixes the target into the current tree node.
fn generate_default_mixin(ctx: &mut GenContext<'_>, stmt: &MixinStatement, target: &Expression) {
    let (mixin_name, generics) = extract_generic_parameters(ctx, target);

    ctx.writer.link_line(stmt.span);
    ctx.writer.write("context.Mixin(mixin, ");
    write_mixin_name(ctx, &mixin_name);
    write_generic_parameters(ctx, &generics);
    ctx.writer.write_line(");");
}

/// `mixin child Name;` composes the target into a new child node rather
/// than mutating the current node in place.
fn generate_child_mixin(ctx: &mut GenContext<'_>, stmt: &MixinStatement, target: &Expression) {
    let (mixin_name, generics) = extract_generic_parameters(ctx, target);

    ctx.writer.open_brace();
    ctx.writer.link_line(stmt.span);
    ctx.writer.write("var __subMixin = new MixinTree() { Name = ");
    write_mixin_name(ctx, &mixin_name);
    ctx.writer.write_line(", Parent = mixin };");
    ctx.writer.write_line("mixin.Children.Add(__subMixin);");

    ctx.writer.link_line(stmt.span);
    ctx.writer.write_line("context.BeginChild(__subMixin);");

    ctx.writer.link_line(stmt.span);
    ctx.writer.write("context.Mixin(__subMixin, ");
    write_mixin_name(ctx, &mixin_name);
    write_generic_parameters(ctx, &generics);
    ctx.writer.write_line(");");

    ctx.writer.link_line(stmt.span);
    ctx.writer.write_line("context.EndChild();");
    ctx.writer.close_brace();
}

/// `mixin remove Name;` — generics are only meaningful when adding a
/// mixin, so a generic target rejects the whole statement.
fn generate_remove_mixin(ctx: &mut GenContext<'_>, stmt: &MixinStatement, target: &Expression) {
    let (mixin_name, generics) = extract_generic_parameters(ctx, target);
    if !generics.is_empty() {
        ctx.diagnostics.error(
            "removing a mixin with generic parameters is not supported",
            stmt.span,
        );
        return;
    }

    ctx.writer.link_line(stmt.span);
    ctx.writer.write("context.RemoveMixin(mixin, ");
    write_mixin_name(ctx, &mixin_name);
    ctx.writer.write_line(");");
}

/// `mixin clone;` duplicates the parent's composed mixin into the current
/// node instead of re-running its composition.
fn generate_clone(ctx: &mut GenContext<'_>, stmt: &MixinStatement) {
    ctx.writer.link_line(stmt.span);
    ctx.writer.write_line("context.CloneProperties();");

    ctx.writer.link_line(stmt.span);
    ctx.writer.write_line("mixin.Mixin.CloneFrom(mixin.Parent.Mixin);");
}

/// `mixin macro ...;` injects a name/value pair into the mixin's macro
/// table. The name comes from either an assignment (`NAME = value`) or a
/// member access into a declared parameter group.
fn generate_macro_mixin(ctx: &mut GenContext<'_>, stmt: &MixinStatement, target: &Expression) {
    ctx.writer.link_line(stmt.span);

    let (macro_name, macro_value): (Expression, &Expression) = match target {
        Expression::Assignment(assign) => {
            let name = match &*assign.target {
                // A bare identifier on the left names the macro itself
                // rather than a runtime value.
                Expression::Variable(var) => Expression::literal(
                    LiteralValue::Str(var.name.to_string()),
                    assign.target.span(),
                ),
                _ => (*assign.target).clone(),
            };
            (name, &*assign.value)
        }
        Expression::Member(member) if try_parameters(ctx, target).is_some() => (
            Expression::literal(LiteralValue::Str(member.member.clone()), member.span),
            target,
        ),
        _ => {
            ctx.diagnostics.error(
                "invalid syntax, expecting 'mixin macro Parameters.NameOfProperty' or 'mixin macro nameOfProperty = value'",
                stmt.span,
            );
            (
                Expression::literal(
                    LiteralValue::Str("#INVALID_MACRO_NAME".to_string()),
                    stmt.span,
                ),
                target,
            )
        }
    };

    ctx.writer.write("mixin.Mixin.AddMacro(");
    write_expression(ctx, &macro_name);
    ctx.writer.write(", ");
    write_expression(ctx, macro_value);
    ctx.writer.write_line(");");
}

/// `mixin compose slot = Name;` / `mixin compose slot += Name;` attaches a
/// freshly composed sub-mixin to a single slot or a slot array.
fn generate_compose_mixin(ctx: &mut GenContext<'_>, stmt: &MixinStatement, target: &Expression) {
    let Expression::Assignment(assign) = target else {
        ctx.diagnostics.error(
            "expecting assignment expression for composition",
            target.span(),
        );
        return;
    };

    let composition_call = match assign.operator {
        AssignmentOperator::Append => "AddCompositionToArray",
        AssignmentOperator::Assign => "AddComposition",
    };

    let (mixin_name, generics) = extract_generic_parameters(ctx, &assign.value);

    ctx.writer.open_brace();
    ctx.writer.link_line(stmt.span);
    ctx.writer
        .write_line("var __subMixin = new MixinTree() { Parent = mixin };");

    ctx.writer.link_line(stmt.span);
    ctx.writer.write("context.Mixin(__subMixin, ");
    write_mixin_name(ctx, &mixin_name);
    write_generic_parameters(ctx, &generics);
    ctx.writer.write_line(");");

    let attach = format!("mixin.Mixin.{}(", composition_call);
    ctx.writer.write(&attach);
    write_mixin_name(ctx, &assign.target);
    ctx.writer.write_line(", __subMixin.Mixin);");
    ctx.writer.close_brace();
}

/// Pass-through import directive.
fn generate_using_statement(ctx: &mut GenContext<'_>, stmt: &UsingStatement) {
    ctx.writer.link_line(stmt.span);
    let directive = format!("using {};", stmt.path);
    ctx.writer.write_line(&directive);
}

/// `using params Scope.Group { ... }` pushes the referenced parameters
/// around its body; everything textually inside sees them. A bodyless
/// `using params` only declares a name for the analyzer and emits nothing.
fn generate_using_parameters(ctx: &mut GenContext<'_>, stmt: &UsingParametersStatement) {
    let Some(body) = &stmt.body else { return };

    if try_parameters(ctx, &stmt.name).is_none() {
        ctx.writer.link_line(stmt.span);
        ctx.writer
            .write("#error \"Unexpected parameter for 'using params' [");
        write_expression(ctx, &stmt.name);
        ctx.writer
            .write_line("]. Expecting single property access\"");
        return;
    }

    ctx.writer.open_brace();
    ctx.writer.link_line(stmt.span);
    ctx.writer.write("context.PushParameters(");
    write_expression(ctx, &stmt.name);
    ctx.writer.write_line(");");
    for statement in body {
        generate_statement(ctx, statement);
    }
    ctx.writer.link_line(stmt.span);
    ctx.writer.write_line("context.PopParameters();");
    ctx.writer.close_brace();
}

/// `foreach` over a parameter collection. Without a bound variable the
/// loop variable is synthesized and the body runs under pushed parameters;
/// with one it is a plain pass-through iteration.
fn generate_for_each(ctx: &mut GenContext<'_>, stmt: &ForEachStatement) {
    ctx.writer.link_line(stmt.span);

    match &stmt.variable {
        None => {
            if try_parameters(ctx, &stmt.collection).is_none() {
                ctx.writer
                    .write("#error \"Unexpected parameter for 'foreach params' [");
                write_expression(ctx, &stmt.collection);
                ctx.writer
                    .write_line("]. Expecting single property access\"");
                return;
            }

            // The depth counter keeps synthesized names distinct across
            // nested loops; it unwinds on exit so sibling loops may reuse
            // a name.
            ctx.loop_depth += 1;
            let variable = format!("____{}", ctx.loop_depth);

            let head = format!("foreach(var {} in ", variable);
            ctx.writer.write(&head);
            write_expression(ctx, &stmt.collection);
            ctx.writer.write_line(")");

            ctx.writer.open_brace();
            ctx.writer.link_line(stmt.span);
            let push = format!("context.PushParameters({});", variable);
            ctx.writer.write_line(&push);
            for statement in &stmt.body {
                generate_statement(ctx, statement);
            }
            ctx.writer.link_line(stmt.span);
            ctx.writer.write_line("context.PopParameters();");
            ctx.writer.close_brace();

            ctx.loop_depth -= 1;
        }
        Some(variable) => {
            let head = format!("foreach(var {} in ", variable);
            ctx.writer.write(&head);
            write_expression(ctx, &stmt.collection);
            ctx.writer.write_line(")");

            ctx.writer.open_brace();
            for statement in &stmt.body {
                generate_statement(ctx, statement);
            }
            ctx.writer.close_brace();
        }
    }
}
