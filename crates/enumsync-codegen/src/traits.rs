use std::fmt;

use enumsync_spec::{EnumTable, TargetMeta};

use crate::context::{EmitContext, IndentStyle};

/// Target languages with a built-in emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// C#, consumed by the managed runtime
    CSharp,
    /// C++, consumed by the native plugin
    Cpp,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::CSharp => f.write_str("C#"),
            Language::Cpp => f.write_str("C++"),
        }
    }
}

/// Language-specific enum emitter.
///
/// Each target language implements this trait to turn the shared table
/// into a complete source file. Emitters are pure: same input, same bytes.
pub trait LanguageEmitter {
    /// Which language this emitter targets.
    fn language(&self) -> Language;

    /// Emit the full file for `type_name` into `ctx`.
    fn emit_enum(
        &self,
        type_name: &str,
        table: &EnumTable,
        target: &TargetMeta,
        ctx: &mut EmitContext,
    );

    /// Render collected include directives. Default: none.
    fn emit_includes(&self, _ctx: &mut EmitContext) -> String {
        String::new()
    }

    /// Indentation style for this language.
    fn indent_style(&self) -> IndentStyle;

    /// Emit the file and return its text.
    fn render(&self, type_name: &str, table: &EnumTable, target: &TargetMeta) -> String {
        let mut ctx = EmitContext::new(self.indent_style());
        self.emit_enum(type_name, table, target, &mut ctx);
        ctx.take_output()
    }
}
