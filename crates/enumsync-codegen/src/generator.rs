use std::fmt;
use std::path::Path;

use enumsync_spec::{validate, GeneratorConfig, Severity};
use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::emitters;
use crate::error::CodegenError;
use crate::traits::{Language, LanguageEmitter};

/// A collection of generated files, keyed by relative path.
#[derive(Debug, Clone, Default)]
pub struct GeneratedProject {
    /// Files keyed by relative path, in generation order
    files: IndexMap<String, String>,
}

impl GeneratedProject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the generated project.
    pub fn add_file(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Get all generated files.
    pub fn files(&self) -> &IndexMap<String, String> {
        &self.files
    }

    /// Number of generated files.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Write all generated files under `output_dir`, overwriting existing ones.
    pub fn write_to_disk(&self, output_dir: &Path) -> Result<(), std::io::Error> {
        for (rel_path, content) in &self.files {
            let full_path = output_dir.join(rel_path);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&full_path, content)?;
            info!(path = %full_path.display(), bytes = content.len(), "wrote file");
        }
        Ok(())
    }
}

/// Runs both emitters over one shared config.
pub struct CodeGenerator {
    config: GeneratorConfig,
    /// Where `config` came from, used in diagnostics
    source: String,
    managed: Box<dyn LanguageEmitter>,
    native: Box<dyn LanguageEmitter>,
}

impl fmt::Debug for CodeGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeGenerator")
            .field("source", &self.source)
            .field("type_name", &self.config.type_name)
            .field("entries", &self.config.table.len())
            .finish()
    }
}

impl CodeGenerator {
    pub fn new(config: GeneratorConfig, source: impl Into<String>) -> Self {
        Self {
            config,
            source: source.into(),
            managed: emitters::create_emitter(Language::CSharp),
            native: emitters::create_emitter(Language::Cpp),
        }
    }

    /// Generator for the built-in `InitErrors` table.
    pub fn builtin() -> Self {
        Self::new(GeneratorConfig::builtin(), "<builtin>")
    }

    /// Validate the config, then emit the managed file followed by the
    /// native file. Nothing is produced if validation reports an error.
    pub fn generate(&self) -> Result<GeneratedProject, CodegenError> {
        let report = validate(&self.config, &self.source);
        for entry in report.errors.iter().filter(|e| e.severity == Severity::Warning) {
            warn!(code = %entry.code, path = %entry.path, "{}", entry.message);
        }
        if report.has_errors() {
            return Err(CodegenError::InvalidConfig(report));
        }

        let mut output = GeneratedProject::new();
        for (emitter, target) in [
            (&self.managed, &self.config.managed),
            (&self.native, &self.config.native),
        ] {
            let content = emitter.render(&self.config.type_name, &self.config.table, target);
            debug!(
                language = %emitter.language(),
                path = %target.path,
                members = self.config.table.len(),
                "emitted enum"
            );
            output.add_file(target.path.clone(), content);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumsync_spec::types::error::E_DUPLICATE_SYMBOL;
    use enumsync_spec::EnumTable;

    #[test]
    fn test_generated_project_basics() {
        let mut proj = GeneratedProject::new();
        proj.add_file("b/Second.cs", "class B {}");
        proj.add_file("a/first.h", "#pragma once");
        assert_eq!(proj.file_count(), 2);
        let order: Vec<&str> = proj.files().keys().map(String::as_str).collect();
        assert_eq!(order, vec!["b/Second.cs", "a/first.h"]);
    }

    #[test]
    fn test_generated_project_write_to_disk() {
        let mut proj = GeneratedProject::new();
        proj.add_file("deep/nested/dir/Out.cs", "namespace A {}");

        let dir = tempfile::tempdir().unwrap();
        proj.write_to_disk(dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("deep/nested/dir/Out.cs")).unwrap();
        assert_eq!(content, "namespace A {}");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Out.h"), "stale contents that are longer").unwrap();

        let mut proj = GeneratedProject::new();
        proj.add_file("Out.h", "fresh");
        proj.write_to_disk(dir.path()).unwrap();

        assert_eq!(std::fs::read_to_string(dir.path().join("Out.h")).unwrap(), "fresh");
    }

    #[test]
    fn test_write_fails_when_root_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let mut proj = GeneratedProject::new();
        proj.add_file("Out.h", "x");
        assert!(proj.write_to_disk(&blocker).is_err());
    }

    #[test]
    fn test_generate_builtin_paths_in_order() {
        let output = CodeGenerator::builtin().generate().unwrap();
        let paths: Vec<&str> = output.files().keys().map(String::as_str).collect();
        assert_eq!(
            paths,
            vec!["com.metavision.unity/Runtime/InitErrors.cs", "Model/InitErrors.h"]
        );
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let config = GeneratorConfig {
            table: EnumTable::new().with_entry("A", 0).with_entry("A", 1),
            ..GeneratorConfig::builtin()
        };
        match CodeGenerator::new(config, "<test>").generate() {
            Err(CodegenError::InvalidConfig(report)) => {
                assert!(report.contains_code(E_DUPLICATE_SYMBOL));
                assert_eq!(report.errors[0].file, "<test>");
            }
            other => panic!("Expected InvalidConfig, got: {:?}", other),
        }
    }

    #[test]
    fn test_empty_table_still_generates() {
        let config = GeneratorConfig {
            table: EnumTable::new(),
            ..GeneratorConfig::builtin()
        };
        let output = CodeGenerator::new(config, "<test>").generate().unwrap();
        assert_eq!(output.file_count(), 2);
    }
}
