//! Pass-based emission pipeline.
//!
//! Each pass reads the entity definition and writes files, import lines and
//! metadata into a shared [`GenerationContext`]. The [`PassManager`] runs
//! passes in dependency order, so a pass can build on what an earlier pass
//! produced (the form pass, for example, imports the schema file the zod pass
//! wrote) and can signal availability to later passes through metadata keys.

use std::collections::HashMap;

use adminforge_schema::Entity;

use crate::{CodegenError, GeneratedFile, GeneratedFiles};

/// Mutable state threaded through the pipeline.
#[derive(Debug, Clone, Default)]
pub struct GenerationContext {
    /// Generated files, keyed by path.
    pub files: HashMap<String, GeneratedFile>,

    /// Import lines to inject into specific files during finalization.
    pub imports: HashMap<String, Vec<String>>,

    /// Arbitrary string metadata for pass-to-pass communication.
    pub metadata: HashMap<String, String>,
}

impl GenerationContext {
    /// Creates a new empty generation context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file.
    pub fn set_file(&mut self, path: impl Into<String>, content: impl Into<String>) {
        let path = path.into();
        self.files
            .insert(path.clone(), GeneratedFile::new(path, content.into()));
    }

    /// Get a file's content for reading.
    pub fn get_file(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(|f| f.content.as_str())
    }

    /// Check if a file exists.
    pub fn has_file(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Queue an import line for injection into a file.
    pub fn add_import(&mut self, file: impl Into<String>, import: impl Into<String>) {
        self.imports
            .entry(file.into())
            .or_default()
            .push(import.into());
    }

    /// Get the queued imports for a file.
    pub fn get_imports(&self, file: &str) -> Option<&[String]> {
        self.imports.get(file).map(|v| v.as_slice())
    }

    /// Set a metadata value.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    /// Get a metadata value.
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(|s| s.as_str())
    }

    /// Check if a metadata key exists.
    pub fn has_metadata(&self, key: &str) -> bool {
        self.metadata.contains_key(key)
    }

    /// Finalize into [`GeneratedFiles`], injecting queued imports.
    ///
    /// Imports land after the file's header block: leading comments, blank
    /// lines and `"use client"`-style directives, which must stay ahead of
    /// every import for Next.js to honor them.
    pub fn finalize(mut self) -> GeneratedFiles {
        for (file_path, imports) in &self.imports {
            if imports.is_empty() {
                continue;
            }
            if let Some(file) = self.files.get_mut(file_path) {
                let mut lines: Vec<&str> = file.content.lines().collect();
                let insert_pos = header_end(&lines);

                for (i, import_line) in imports.iter().enumerate() {
                    lines.insert(insert_pos + i, import_line);
                }
                lines.insert(insert_pos + imports.len(), "");

                file.content = lines.join("\n");
                if !file.content.ends_with('\n') {
                    file.content.push('\n');
                }
            }
        }

        let mut result = GeneratedFiles::new();
        for file in self.files.into_values() {
            result.add(file);
        }
        result
    }
}

/// Index of the first line that is not part of the file header
/// (comments, blank lines, string directives).
fn header_end(lines: &[&str]) -> usize {
    let mut end = 0;
    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty()
            || trimmed.starts_with("//")
            || trimmed.starts_with("\"use ")
            || trimmed.starts_with("'use ")
        {
            end = i + 1;
        } else {
            break;
        }
    }
    end
}

/// A pass that contributes to the generated module.
pub trait Pass: Send + Sync {
    /// Unique identifier for this pass.
    fn name(&self) -> &'static str;

    /// Execute the pass, mutating the context.
    fn run(&self, entity: &Entity, ctx: &mut GenerationContext) -> Result<(), CodegenError>;

    /// Names of passes that must run before this one.
    ///
    /// A named pass that is not registered in the manager is skipped rather
    /// than treated as an error: pipelines are assembled per route
    /// configuration, so a dependency may legitimately be absent.
    fn depends_on(&self) -> &[&'static str] {
        &[]
    }
}

/// Collects passes and executes them in dependency order.
pub struct PassManager {
    passes: Vec<Box<dyn Pass>>,
}

impl Default for PassManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PassManager {
    /// Creates a new empty pass manager.
    pub fn new() -> Self {
        Self { passes: vec![] }
    }

    /// Add a pass to the pipeline. Returns `&mut Self` for chaining.
    pub fn add<P: Pass + 'static>(&mut self, pass: P) -> &mut Self {
        self.passes.push(Box::new(pass));
        self
    }

    /// Run all passes against one entity and finalize the output.
    pub fn run(&self, entity: &Entity) -> Result<GeneratedFiles, CodegenError> {
        let mut ctx = GenerationContext::new();

        for pass_idx in self.execution_order()? {
            let pass = &self.passes[pass_idx];
            pass.run(entity, &mut ctx)?;
            ctx.set_metadata(format!("pass:{}:completed", pass.name()), "true");
        }

        Ok(ctx.finalize())
    }

    /// Topological order over the registered passes (Kahn's algorithm).
    fn execution_order(&self) -> Result<Vec<usize>, CodegenError> {
        let name_to_idx: HashMap<&str, usize> = self
            .passes
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name(), i))
            .collect();

        let mut in_degree = vec![0usize; self.passes.len()];
        let mut dependents: Vec<Vec<usize>> = vec![vec![]; self.passes.len()];

        for (i, pass) in self.passes.iter().enumerate() {
            for dep_name in pass.depends_on() {
                // Unregistered dependencies are skipped, not errors.
                if let Some(&dep_idx) = name_to_idx.get(dep_name) {
                    dependents[dep_idx].push(i);
                    in_degree[i] += 1;
                }
            }
        }

        let mut ready: Vec<usize> = in_degree
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d == 0)
            .map(|(i, _)| i)
            .collect();

        let mut order = Vec::with_capacity(self.passes.len());

        while let Some(idx) = ready.pop() {
            order.push(idx);
            for &dependent in &dependents[idx] {
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    ready.push(dependent);
                }
            }
        }

        if order.len() != self.passes.len() {
            return Err(CodegenError::Custom(
                "circular dependency between passes".to_string(),
            ));
        }

        Ok(order)
    }

    /// Number of registered passes.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// Returns true if no passes are registered.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingPass {
        name: &'static str,
        deps: &'static [&'static str],
    }

    impl Pass for RecordingPass {
        fn name(&self) -> &'static str {
            self.name
        }

        fn run(&self, _entity: &Entity, ctx: &mut GenerationContext) -> Result<(), CodegenError> {
            ctx.set_file(format!("{}.txt", self.name), format!("from {}", self.name));
            Ok(())
        }

        fn depends_on(&self) -> &[&'static str] {
            self.deps
        }
    }

    fn entity() -> Entity {
        Entity::new("Post", vec![])
    }

    #[test]
    fn test_context_roundtrip() {
        let mut ctx = GenerationContext::new();

        ctx.set_file("form.tsx", "export {};");
        assert_eq!(ctx.get_file("form.tsx"), Some("export {};"));
        assert!(ctx.has_file("form.tsx"));
        assert!(!ctx.has_file("other.tsx"));

        ctx.set_metadata("has:zod-schema", "true");
        assert!(ctx.has_metadata("has:zod-schema"));
        assert_eq!(ctx.get_metadata("has:zod-schema"), Some("true"));
    }

    #[test]
    fn test_finalize_injects_imports_after_directives() {
        let mut ctx = GenerationContext::new();
        ctx.set_file(
            "form.tsx",
            "// Generated form\n\n\"use client\";\n\nexport function Form() {}\n",
        );
        ctx.add_import("form.tsx", "import DatePicker from \"react-datepicker\";");

        let files = ctx.finalize();
        let content = files.get("form.tsx").unwrap();

        let directive_pos = content.find("\"use client\";").unwrap();
        let import_pos = content.find("import DatePicker").unwrap();
        let export_pos = content.find("export function").unwrap();
        assert!(directive_pos < import_pos);
        assert!(import_pos < export_pos);
    }

    #[test]
    fn test_manager_runs_dependencies_first() {
        let mut pm = PassManager::new();
        pm.add(RecordingPass {
            name: "form",
            deps: &["types"],
        });
        pm.add(RecordingPass {
            name: "types",
            deps: &[],
        });

        let files = pm.run(&entity()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_manager_skips_unregistered_dependency() {
        let mut pm = PassManager::new();
        pm.add(RecordingPass {
            name: "form",
            deps: &["zod-schema"],
        });

        let files = pm.run(&entity()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_manager_rejects_cycles() {
        let mut pm = PassManager::new();
        pm.add(RecordingPass {
            name: "a",
            deps: &["b"],
        });
        pm.add(RecordingPass {
            name: "b",
            deps: &["a"],
        });

        assert!(pm.run(&entity()).is_err());
    }
}
