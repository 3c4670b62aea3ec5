pub mod context;
pub mod error;
pub mod generator;
pub mod traits;

// Language emitters
pub mod emitters;

// Re-exports
pub use context::EmitContext;
pub use emitters::{emit_managed_enum, emit_native_enum};
pub use error::CodegenError;
pub use generator::{CodeGenerator, GeneratedProject};
pub use traits::{Language, LanguageEmitter};
