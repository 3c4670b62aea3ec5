use enumsync_spec::{EnumTable, TargetMeta};

use crate::context::{EmitContext, IndentStyle};
use crate::traits::{Language, LanguageEmitter};

/// Backing type of the managed enum.
const UNDERLYING_TYPE: &str = "System.UInt32";

/// C# enum emitter (Allman braces, 4-space indent).
pub struct CSharpEmitter;

impl LanguageEmitter for CSharpEmitter {
    fn language(&self) -> Language {
        Language::CSharp
    }

    fn emit_enum(
        &self,
        type_name: &str,
        table: &EnumTable,
        target: &TargetMeta,
        ctx: &mut EmitContext,
    ) {
        if !target.header.is_empty() {
            ctx.raw_lines(&target.header);
            ctx.blank_line();
        }

        ctx.line(format!("namespace {}", target.namespace));
        ctx.line("{");
        ctx.push_indent();

        ctx.line(format!("public enum {} : {}", type_name, UNDERLYING_TYPE));
        ctx.line("{");
        ctx.push_indent();
        for entry in table {
            ctx.line(format!("{} = {},", entry.name, entry.value));
        }
        ctx.pop_indent();
        ctx.line("}");

        ctx.pop_indent();
        ctx.line("}");
    }

    fn indent_style(&self) -> IndentStyle {
        IndentStyle::Spaces(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn target(header: &[&str]) -> TargetMeta {
        TargetMeta {
            path: "Out.cs".to_string(),
            namespace: "Acme.Status".to_string(),
            header: header.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_emit_enum_layout() {
        let table = EnumTable::new().with_entry("Ok", 0).with_entry("Busy", 7);
        let out = CSharpEmitter.render("Status", &table, &target(&["// hdr"]));
        assert_eq!(
            out,
            "// hdr\n\
             \n\
             namespace Acme.Status\n\
             {\n\
             \x20   public enum Status : System.UInt32\n\
             \x20   {\n\
             \x20       Ok = 0,\n\
             \x20       Busy = 7,\n\
             \x20   }\n\
             }\n"
        );
    }

    #[test]
    fn test_no_header_starts_with_namespace() {
        let table = EnumTable::new().with_entry("Ok", 0);
        let out = CSharpEmitter.render("Status", &table, &target(&[]));
        assert!(out.starts_with("namespace Acme.Status\n"));
    }

    #[test]
    fn test_empty_table_still_declares_enum() {
        let out = CSharpEmitter.render("Status", &EnumTable::new(), &target(&[]));
        assert!(out.contains("public enum Status : System.UInt32\n    {\n    }\n"));
    }
}
