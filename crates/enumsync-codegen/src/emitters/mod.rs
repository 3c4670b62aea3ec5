pub mod cpp;
pub mod csharp;

use enumsync_spec::types::config::DEFAULT_TYPE_NAME;
use enumsync_spec::{EnumTable, TargetMeta};

use crate::traits::{Language, LanguageEmitter};

/// Create the emitter for the given language.
pub fn create_emitter(language: Language) -> Box<dyn LanguageEmitter> {
    match language {
        Language::CSharp => Box::new(csharp::CSharpEmitter),
        Language::Cpp => Box::new(cpp::CppEmitter),
    }
}

/// Managed (C#) `InitErrors` declaration inside `namespace`, with the
/// default license header.
pub fn emit_managed_enum(table: &EnumTable, namespace: &str) -> String {
    let target = TargetMeta::new(String::new(), namespace);
    csharp::CSharpEmitter.render(DEFAULT_TYPE_NAME, table, &target)
}

/// Native (C++) `InitErrors` declaration plus its `to_string` helper inside
/// `namespace`, with the default license header.
pub fn emit_native_enum(table: &EnumTable, namespace: &str) -> String {
    let target = TargetMeta::new(String::new(), namespace);
    cpp::CppEmitter.render(DEFAULT_TYPE_NAME, table, &target)
}
