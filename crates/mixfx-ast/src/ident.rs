//! Identifiers, generic identifiers and literal values.
//!
//! A mixin name such as `Blur<Sizes.Large, 4>` parses to an identifier
//! whose generic arguments keep their surface form (dotted path, literal
//! or bare name); the code generator decides how each form is translated.

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::span::Span;

/// A literal value appearing in an effect file.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Int(value) => write!(f, "{}", value),
            // {:?} keeps the decimal point on round values (`1.0`, not `1`)
            LiteralValue::Float(value) => write!(f, "{:?}", value),
            LiteralValue::Bool(value) => write!(f, "{}", value),
            LiteralValue::Str(value) => {
                f.write_str("\"")?;
                for c in value.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        _ => write!(f, "{}", c)?,
                    }
                }
                f.write_str("\"")
            }
        }
    }
}

/// A literal together with its source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: LiteralValue,
    pub span: Span,
}

impl Literal {
    pub fn new(value: LiteralValue, span: Span) -> Self {
        Literal { value, span }
    }
}

/// One generic argument of an identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum GenericIdentifier {
    /// Dotted member path such as `Sizes.Large`. Exactly two segments are
    /// accepted by the code generator; any other count is a compile error.
    Dotted { segments: Vec<String>, span: Span },
    /// A literal argument such as `4` or `"half"`.
    Literal(Literal),
    /// A bare identifier, resolved by the runtime.
    Plain { name: String, span: Span },
}

impl GenericIdentifier {
    pub fn span(&self) -> Span {
        match self {
            GenericIdentifier::Dotted { span, .. } => *span,
            GenericIdentifier::Literal(literal) => literal.span,
            GenericIdentifier::Plain { span, .. } => *span,
        }
    }
}

impl fmt::Display for GenericIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenericIdentifier::Dotted { segments, .. } => {
                for (i, segment) in segments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(segment)?;
                }
                Ok(())
            }
            GenericIdentifier::Literal(literal) => write!(f, "{}", literal.value),
            GenericIdentifier::Plain { name, .. } => f.write_str(name),
        }
    }
}

/// An identifier, optionally carrying generic arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub text: String,
    pub generics: Vec<GenericIdentifier>,
}

impl Identifier {
    /// A plain identifier without generic arguments.
    pub fn plain(text: impl Into<String>) -> Self {
        Identifier {
            text: text.into(),
            generics: Vec::new(),
        }
    }

    /// An identifier with generic arguments.
    pub fn generic(text: impl Into<String>, generics: Vec<GenericIdentifier>) -> Self {
        Identifier {
            text: text.into(),
            generics,
        }
    }

    pub fn is_generic(&self) -> bool {
        !self.generics.is_empty()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)?;
        if self.is_generic() {
            f.write_str("<")?;
            for (i, generic) in self.generics.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", generic)?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}
