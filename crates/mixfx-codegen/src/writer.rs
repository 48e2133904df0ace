//! Generated-source writer.
//!
//! Small string builder used by the code generator: lazy indentation,
//! brace helpers and best-effort `#line` markers pointing back at the
//! effect source.

use alloc::string::String;

use mixfx_ast::Span;

const INDENT: &str = "    ";

/// Writer accumulating generated source in memory.
#[derive(Debug)]
pub struct SourceWriter {
    out: String,
    /// Effect source path referenced by `#line` markers.
    path: String,
    indent: usize,
    at_line_start: bool,
    line_markers: bool,
}

impl SourceWriter {
    pub fn new(path: impl Into<String>) -> Self {
        SourceWriter {
            out: String::new(),
            path: path.into(),
            indent: 0,
            at_line_start: true,
            line_markers: true,
        }
    }

    /// Enable or disable `#line` marker emission. Markers are best-effort
    /// mapping aids; structural output is unaffected either way.
    pub fn set_line_markers(&mut self, enabled: bool) {
        self.line_markers = enabled;
    }

    /// Write `text` on the current line, indenting first when the line is
    /// fresh.
    pub fn write(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        if self.at_line_start {
            for _ in 0..self.indent {
                self.out.push_str(INDENT);
            }
            self.at_line_start = false;
        }
        self.out.push_str(text);
        self
    }

    /// Write `text` and terminate the line.
    pub fn write_line(&mut self, text: &str) -> &mut Self {
        self.write(text);
        self.newline()
    }

    /// Terminate the current line; at line start this emits a blank line.
    pub fn newline(&mut self) -> &mut Self {
        self.out.push('\n');
        self.at_line_start = true;
        self
    }

    /// Open a brace block on its own line and indent.
    pub fn open_brace(&mut self) -> &mut Self {
        if !self.at_line_start {
            self.newline();
        }
        self.write_line("{");
        self.indent += 1;
        self
    }

    /// Unindent and close the brace block.
    pub fn close_brace(&mut self) -> &mut Self {
        if !self.at_line_start {
            self.newline();
        }
        self.indent -= 1;
        self.write_line("}")
    }

    /// Emit a `#line` marker for `span`, when markers are enabled and the
    /// span is known.
    pub fn link_line(&mut self, span: Span) -> &mut Self {
        if self.line_markers && !span.is_unknown() {
            if !self.at_line_start {
                self.newline();
            }
            let marker = alloc::format!("#line {} \"{}\"", span.line, self.path);
            self.write_line(&marker);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Consume the writer and return the generated text.
    pub fn finish(self) -> String {
        self.out
    }
}

impl core::fmt::Display for SourceWriter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.out)
    }
}
