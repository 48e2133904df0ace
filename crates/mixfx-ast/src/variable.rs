//! Member variables of parameter blocks and shader class types.

use alloc::{string::String, vec::Vec};

use crate::{ast::Expression, span::Span};

/// Storage qualifier attached to a member variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    /// Value shared across one shader stage.
    Stage,
    /// Per-element stream value, internal to the composed shader.
    Stream,
    /// Composition slot, filled by mixin composition rather than binding.
    Compose,
    /// Declared by another block; not materialized here.
    Extern,
}

/// A member variable declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub qualifiers: Vec<Qualifier>,
    /// Type name as written in the effect source.
    pub ty: String,
    pub name: String,
    pub initializer: Option<Expression>,
    pub span: Span,
}

impl Variable {
    pub fn new(ty: impl Into<String>, name: impl Into<String>, span: Span) -> Self {
        Variable {
            qualifiers: Vec::new(),
            ty: ty.into(),
            name: name.into(),
            initializer: None,
            span,
        }
    }

    /// Whether this member maps to a bindable parameter key.
    ///
    /// Stream values, composition slots and extern members stay internal to
    /// the composed shader and never surface as keys.
    pub fn is_parameter_key(&self) -> bool {
        !self.qualifiers.iter().any(|qualifier| {
            matches!(
                qualifier,
                Qualifier::Stream | Qualifier::Compose | Qualifier::Extern
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn test_plain_member_is_parameter_key() {
        let variable = Variable::new("Texture", "DiffuseMap", Span::UNKNOWN);
        assert!(variable.is_parameter_key());
    }

    #[test]
    fn test_stage_member_is_parameter_key() {
        let mut variable = Variable::new("float", "Intensity", Span::UNKNOWN);
        variable.qualifiers = vec![Qualifier::Stage];
        assert!(variable.is_parameter_key());
    }

    #[test]
    fn test_stream_member_is_not_parameter_key() {
        let mut variable = Variable::new("float4", "Position", Span::UNKNOWN);
        variable.qualifiers = vec![Qualifier::Stream];
        assert!(!variable.is_parameter_key());
    }

    #[test]
    fn test_compose_and_extern_members_are_not_parameter_keys() {
        let mut compose = Variable::new("ComputeColor", "Albedo", Span::UNKNOWN);
        compose.qualifiers = vec![Qualifier::Compose];
        assert!(!compose.is_parameter_key());

        let mut extern_member = Variable::new("float", "Shared", Span::UNKNOWN);
        extern_member.qualifiers = vec![Qualifier::Extern];
        assert!(!extern_member.is_parameter_key());
    }
}
