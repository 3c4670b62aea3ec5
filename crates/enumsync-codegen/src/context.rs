use indexmap::IndexSet;

/// Accumulates output lines during emission and tracks indentation and
/// collected `#include`-style directives.
#[derive(Debug, Clone)]
pub struct EmitContext {
    /// Current indentation level
    indent_level: usize,
    /// Spaces per indent level
    indent_width: usize,
    /// Collected include targets (deduped, insertion-ordered)
    includes: IndexSet<String>,
    /// Emitted text so far
    out: String,
}

/// Indentation style configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    Spaces(usize),
}

impl EmitContext {
    pub fn new(style: IndentStyle) -> Self {
        let IndentStyle::Spaces(indent_width) = style;
        Self {
            indent_level: 0,
            indent_width,
            includes: IndexSet::new(),
            out: String::new(),
        }
    }

    /// Get the current indentation string.
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_level * self.indent_width)
    }

    /// Increase indentation by one level.
    pub fn push_indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation by one level.
    pub fn pop_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Write one line at the current indentation, followed by `\n`.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            let ind = self.indent();
            self.out.push_str(&ind);
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    /// Write an empty line (never indented).
    pub fn blank_line(&mut self) {
        self.out.push('\n');
    }

    /// Write each line verbatim, ignoring indentation.
    pub fn raw_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for l in lines {
            self.out.push_str(l.as_ref());
            self.out.push('\n');
        }
    }

    /// Add an include to the collection (deduped).
    pub fn add_include(&mut self, target: impl Into<String>) {
        self.includes.insert(target.into());
    }

    /// Drain and return all collected includes.
    pub fn take_includes(&mut self) -> IndexSet<String> {
        std::mem::take(&mut self.includes)
    }

    /// Take the text emitted so far, leaving the buffer empty.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_spaces() {
        let mut ctx = EmitContext::new(IndentStyle::Spaces(4));
        assert_eq!(ctx.indent(), "");
        ctx.push_indent();
        assert_eq!(ctx.indent(), "    ");
        ctx.push_indent();
        assert_eq!(ctx.indent(), "        ");
        ctx.pop_indent();
        assert_eq!(ctx.indent(), "    ");
    }

    #[test]
    fn test_pop_indent_saturates() {
        let mut ctx = EmitContext::new(IndentStyle::Spaces(2));
        ctx.pop_indent();
        ctx.line("x");
        assert_eq!(ctx.take_output(), "x\n");
    }

    #[test]
    fn test_lines_and_blank_lines() {
        let mut ctx = EmitContext::new(IndentStyle::Spaces(2));
        ctx.line("a {");
        ctx.push_indent();
        ctx.line("b;");
        ctx.line("");
        ctx.pop_indent();
        ctx.blank_line();
        ctx.line("}");
        assert_eq!(ctx.take_output(), "a {\n  b;\n\n\n}\n");
        assert_eq!(ctx.take_output(), "");
    }

    #[test]
    fn test_includes_dedup() {
        let mut ctx = EmitContext::new(IndentStyle::Spaces(4));
        ctx.add_include("stdint.h");
        ctx.add_include("stdint.h");
        ctx.add_include("stddef.h");

        let includes = ctx.take_includes();
        assert_eq!(includes.len(), 2);
        assert_eq!(includes.first().map(String::as_str), Some("stdint.h"));
        assert!(ctx.take_includes().is_empty());
    }
}
