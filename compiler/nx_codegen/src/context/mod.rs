//! Code generation context and output buffer.
//!
//! The `CodegenContext` pairs the symbol model being rendered with an
//! indentation-aware text buffer. Indentation is applied lazily: the prefix
//! for the current level is written just before the first character of each
//! line, so blank lines stay empty and multi-line fragments pick up the
//! level that is current while they are written.

use nx_model::SymbolModel;

/// One indentation level.
const INDENT: &str = "  ";

/// Code generation context.
pub struct CodegenContext<'a> {
    /// Symbol model being rendered.
    pub model: &'a SymbolModel,
    /// Current indentation level.
    indent: usize,
    /// Whether the current line already carries its indentation.
    indented: bool,
    /// Generated code output.
    output: String,
}

impl<'a> CodegenContext<'a> {
    /// Create a new codegen context.
    pub fn new(model: &'a SymbolModel) -> Self {
        Self {
            model,
            indent: 0,
            indented: false,
            output: String::with_capacity(4096),
        }
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write a string to output, indenting each line it starts.
    pub fn write(&mut self, s: &str) {
        for c in s.chars() {
            if c == '\n' {
                self.indented = false;
            } else if !self.indented {
                for _ in 0..self.indent {
                    self.output.push_str(INDENT);
                }
                self.indented = true;
            }
            self.output.push(c);
        }
    }

    /// Write a string followed by a newline.
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write a newline.
    pub fn newline(&mut self) {
        self.write("\n");
    }

    /// Write `items` separated by `", "`.
    pub fn write_list<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write(item.as_ref());
        }
    }

    /// Take the generated output.
    pub fn take_output(&mut self) -> String {
        self.indented = false;
        std::mem::take(&mut self.output)
    }
}

#[cfg(test)]
mod tests;
