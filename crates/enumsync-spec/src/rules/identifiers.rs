use crate::types::config::GeneratorConfig;
use crate::types::error::{
    ErrorEntry, ValidationReport, E_INVALID_IDENTIFIER, E_RESERVED_WORD,
};

/// C# keywords (contextual keywords are legal member names and omitted).
const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed",
    "short", "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw",
    "true", "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using",
    "virtual", "void", "volatile", "while",
];

/// C++ keywords and alternative operator tokens.
const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double",
    "dynamic_cast", "else", "enum", "explicit", "export", "extern", "false", "float", "for",
    "friend", "goto", "if", "inline", "int", "long", "mutable", "namespace", "new",
    "noexcept", "not", "not_eq", "nullptr", "operator", "or", "or_eq", "private",
    "protected", "public", "register", "reinterpret_cast", "requires", "return", "short",
    "signed", "sizeof", "static", "static_assert", "static_cast", "struct", "switch",
    "template", "this", "thread_local", "throw", "true", "try", "typedef", "typeid",
    "typename", "union", "unsigned", "using", "virtual", "void", "volatile", "wchar_t",
    "while", "xor", "xor_eq",
];

/// Check that every emitted name is a plain identifier in both languages.
pub fn check(config: &GeneratorConfig, source: &str, report: &mut ValidationReport) {
    check_identifier(&config.type_name, "$.typeName", "enum type name", source, report);

    for (i, entry) in config.table.iter().enumerate() {
        check_identifier(
            &entry.name,
            &format!("$.table[{i}].name"),
            "enum member",
            source,
            report,
        );
    }

    for (i, segment) in config.managed.namespace.split('.').enumerate() {
        check_identifier(
            segment,
            &format!("$.managed.namespace[{i}]"),
            "namespace segment",
            source,
            report,
        );
    }

    for (i, segment) in config.native.namespace.split("::").enumerate() {
        check_identifier(
            segment,
            &format!("$.native.namespace[{i}]"),
            "namespace segment",
            source,
            report,
        );
    }
}

fn check_identifier(
    name: &str,
    path: &str,
    what: &str,
    source: &str,
    report: &mut ValidationReport,
) {
    if !is_identifier(name) {
        report.push(
            ErrorEntry::error(
                E_INVALID_IDENTIFIER,
                format!("Invalid {what} '{name}'"),
                source,
                path,
            )
            .with_suggestion("Use ASCII letters, digits and '_', not starting with a digit"),
        );
        return;
    }

    if let Some(language) = reserved_in(name) {
        report.push(
            ErrorEntry::error(
                E_RESERVED_WORD,
                format!("{what} '{name}' is a reserved word in {language}"),
                source,
                path,
            )
            .with_suggestion("Pick a name that is not a keyword in C# or C++"),
        );
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn reserved_in(name: &str) -> Option<&'static str> {
    if CSHARP_KEYWORDS.contains(&name) {
        Some("C#")
    } else if CPP_KEYWORDS.contains(&name) {
        Some("C++")
    } else {
        None
    }
}
