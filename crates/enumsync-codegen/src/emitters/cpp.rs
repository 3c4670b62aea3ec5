use enumsync_spec::{EnumTable, TargetMeta, INVALID_NAME};

use crate::context::{EmitContext, IndentStyle};
use crate::traits::{Language, LanguageEmitter};

/// Backing type of the native enum, and the header that declares it.
const UNDERLYING_TYPE: &str = "uint32_t";
const UNDERLYING_INCLUDE: &str = "stdint.h";

/// C++ `enum class` emitter with a `to_string` helper.
pub struct CppEmitter;

impl CppEmitter {
    /// `static inline const char* to_string(T err)` with one case per entry.
    /// The `default` branch covers every backing value not in the table.
    fn emit_to_string(&self, type_name: &str, table: &EnumTable, ctx: &mut EmitContext) {
        ctx.line(format!(
            "static inline const char* to_string({} err) {{",
            type_name
        ));
        ctx.push_indent();
        ctx.line("switch (err) {");
        ctx.push_indent();
        for entry in table {
            ctx.line(format!("case {}::{}:", type_name, entry.name));
            ctx.push_indent();
            ctx.line(format!("return \"{}\";", entry.name));
            ctx.pop_indent();
        }
        ctx.line("default:");
        ctx.push_indent();
        ctx.line(format!("return \"{}\";", INVALID_NAME));
        ctx.pop_indent();
        ctx.pop_indent();
        ctx.line("}");
        ctx.pop_indent();
        ctx.line("}");
    }
}

impl LanguageEmitter for CppEmitter {
    fn language(&self) -> Language {
        Language::Cpp
    }

    fn emit_enum(
        &self,
        type_name: &str,
        table: &EnumTable,
        target: &TargetMeta,
        ctx: &mut EmitContext,
    ) {
        // Body first so that includes it needs are known before the preamble.
        ctx.add_include(UNDERLYING_INCLUDE);
        ctx.line(format!("namespace {} {{", target.namespace));
        ctx.line(format!("enum class {} : {} {{", type_name, UNDERLYING_TYPE));
        ctx.push_indent();
        for entry in table {
            ctx.line(format!("{} = {},", entry.name, entry.value));
        }
        ctx.pop_indent();
        ctx.line("};");
        self.emit_to_string(type_name, table, ctx);
        ctx.line(format!("}}  // namespace {}", target.namespace));
        let body = ctx.take_output();

        let includes = self.emit_includes(ctx);
        ctx.raw_lines(&target.header);
        ctx.line("#pragma once");
        ctx.blank_line();
        if !includes.is_empty() {
            ctx.raw_lines(includes.lines());
            ctx.blank_line();
        }
        ctx.raw_lines(body.lines());
    }

    fn emit_includes(&self, ctx: &mut EmitContext) -> String {
        ctx.take_includes()
            .iter()
            .map(|inc| format!("#include <{}>", inc))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn indent_style(&self) -> IndentStyle {
        IndentStyle::Spaces(4)
    }
}
