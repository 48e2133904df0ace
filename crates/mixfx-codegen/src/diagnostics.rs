//! Diagnostics sink for one compiler invocation.
//!
//! Both passes record leveled messages here. Generation is withheld when
//! any error is present, but every diagnostic of an invocation is kept so
//! a single compile reports the full defect list.

use alloc::{string::String, vec::Vec};
use core::fmt;

use mixfx_ast::Span;

/// Diagnostic severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// A single leveled message with source attribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Diagnostic {
            severity: Severity::Error,
            message: message.into(),
            span,
        }
    }

    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (at {})", self.severity, self.message, self.span)
    }
}

/// Ordered sink of the diagnostics recorded by one invocation.
///
/// The only mutable state shared between the two passes; nothing is shared
/// across invocations.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    pub fn error(&mut self, message: impl Into<String>, span: Span) {
        self.messages.push(Diagnostic::error(message, span));
    }

    pub fn warning(&mut self, message: impl Into<String>, span: Span) {
        self.messages.push(Diagnostic::warning(message, span));
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.messages.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|diagnostic| diagnostic.severity == Severity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Diagnostic> {
        self.messages.iter()
    }

    /// Render every error as a `#error` marker line.
    ///
    /// Drivers splice this into the output file of a rejected compilation
    /// so the defect list surfaces where the generated code was expected.
    pub fn error_markers(&self) -> String {
        use core::fmt::Write;

        let mut markers = String::new();
        for diagnostic in &self.messages {
            if diagnostic.severity == Severity::Error {
                let _ = writeln!(markers, "#error {}", diagnostic);
            }
        }
        markers
    }
}
