// Chunk: docs/chunks/filetype_registry - File extension to filetype mapping

//! Filetype registry mapping file names and extensions to filetype names.
//!
//! Filetype names are the keys used in bracketed override blocks of a
//! settings document (`"[rust]": { ... }`).

use std::collections::HashMap;
use std::path::Path;

/// Registry mapping file names and extensions to filetype names.
#[derive(Debug, Clone, Default)]
pub struct FiletypeRegistry {
    /// Map from extension (without leading dot, lowercase) to filetype
    by_extension: HashMap<String, String>,
    /// Map from exact file name to filetype, checked before extensions
    by_file_name: HashMap<String, String>,
}

impl FiletypeRegistry {
    /// Creates an empty registry.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in filetypes.
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register_extensions("rust", &["rs"]);
        registry.register_extensions("c", &["c"]);
        // .h is ambiguous, default to C++
        registry.register_extensions("cpp", &["cpp", "cc", "cxx", "hpp", "h"]);
        registry.register_extensions("python", &["py", "pyi"]);
        registry.register_extensions("typescript", &["ts", "tsx"]);
        registry.register_extensions("javascript", &["js", "jsx", "mjs", "cjs"]);
        registry.register_extensions("go", &["go"]);
        registry.register_extensions("json", &["json", "jsonc"]);
        registry.register_extensions("toml", &["toml"]);
        registry.register_extensions("markdown", &["md", "markdown"]);
        registry.register_extensions("html", &["html", "htm"]);
        registry.register_extensions("css", &["css"]);
        registry.register_extensions("shell", &["sh", "bash", "zsh"]);
        registry.register_extensions("yaml", &["yaml", "yml"]);
        registry.register_extensions("reason", &["re", "rei"]);
        registry.register_extensions("ocaml", &["ml", "mli"]);

        registry.register_file_name("Makefile", "makefile");
        registry.register_file_name("Dockerfile", "dockerfile");
        registry.register_file_name("Cargo.lock", "toml");

        registry
    }

    /// Maps each of `extensions` to `filetype`, replacing earlier mappings.
    pub fn register_extensions(&mut self, filetype: &str, extensions: &[&str]) {
        for ext in extensions {
            self.by_extension
                .insert(ext.to_ascii_lowercase(), filetype.to_string());
        }
    }

    /// Maps an exact file name to `filetype`.
    pub fn register_file_name(&mut self, file_name: &str, filetype: &str) {
        self.by_file_name
            .insert(file_name.to_string(), filetype.to_string());
    }

    /// Looks up the filetype for an extension (without leading dot).
    pub fn filetype_for_extension(&self, ext: &str) -> Option<&str> {
        self.by_extension
            .get(&ext.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Looks up the filetype for a path by file name, then by extension.
    pub fn filetype_for_path(&self, path: &Path) -> Option<&str> {
        let file_name = path.file_name()?.to_str()?;
        if let Some(filetype) = self.by_file_name.get(file_name) {
            return Some(filetype.as_str());
        }
        let ext = path.extension()?.to_str()?;
        self.filetype_for_extension(ext)
    }
}
