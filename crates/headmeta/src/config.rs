use serde::{Deserialize, Serialize};

/// Configuration for a header scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Namespace whose direct declarations are extracted. Declarations
    /// outside it are ignored entirely, including their contents.
    pub namespace: String,

    /// File extensions treated as headers (default: `.hpp`, `.hh`, `.hxx`, `.h`)
    pub file_extensions: Vec<String>,

    /// Root-relative directory names excluded from discovery. A file whose
    /// path starts with one of these components is never parsed.
    pub exclude_prefixes: Vec<String>,

    /// Method names dropped from every `methods` list. These are markers
    /// injected by binding-registration macros, not real API surface.
    pub excluded_methods: Vec<String>,

    /// Maximum file size in bytes; larger files are recorded as failures
    pub max_file_size: usize,

    /// Process files in parallel. Per-file traversals share no mutable
    /// state, so the result is identical to a sequential scan.
    pub parallel: bool,

    /// Number of threads for parallel processing (None = rayon default)
    pub num_threads: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            file_extensions: vec![
                ".hpp".to_string(),
                ".hh".to_string(),
                ".hxx".to_string(),
                ".h".to_string(),
            ],
            exclude_prefixes: vec!["thirdparty".to_string(), "tests".to_string()],
            excluded_methods: vec!["GDEXTENSION_CLASS".to_string()],
            max_file_size: 10 * 1024 * 1024, // 10MB default
            parallel: false,
            num_threads: None,
        }
    }
}

impl ScanConfig {
    /// Create a configuration targeting the given namespace, with defaults
    /// for everything else
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    /// Enable or disable parallel file processing
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Replace the excluded method name set
    pub fn with_excluded_methods(mut self, methods: Vec<String>) -> Self {
        self.excluded_methods = methods;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.namespace.is_empty() {
            return Err("namespace must not be empty".to_string());
        }

        if self.file_extensions.is_empty() {
            return Err("file_extensions cannot be empty".to_string());
        }

        if self.max_file_size == 0 {
            return Err("max_file_size must be greater than 0".to_string());
        }

        if let Some(threads) = self.num_threads {
            if threads == 0 {
                return Err("num_threads must be greater than 0".to_string());
            }
        }

        Ok(())
    }

    /// Check if a file extension should be parsed
    pub fn should_parse_extension(&self, extension: &str) -> bool {
        self.file_extensions.iter().any(|ext| {
            let ext = ext.trim_start_matches('.');
            extension.trim_start_matches('.') == ext
        })
    }

    /// Check if a root-relative directory name is excluded
    pub fn is_excluded_prefix(&self, dir_name: &str) -> bool {
        self.exclude_prefixes
            .iter()
            .any(|excluded| dir_name == excluded)
    }

    /// Check if a method name is in the reserved-marker exclusion set
    pub fn is_excluded_method(&self, name: &str) -> bool {
        self.excluded_methods
            .iter()
            .any(|excluded| name == excluded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScanConfig::default();
        assert!(config.namespace.is_empty());
        assert_eq!(config.max_file_size, 10 * 1024 * 1024);
        assert!(!config.parallel);
        assert!(config.is_excluded_method("GDEXTENSION_CLASS"));
    }

    #[test]
    fn test_validate_rejects_empty_namespace() {
        let config = ScanConfig::default();
        assert!(config.validate().is_err());

        let config = ScanConfig::new("godot");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_threads() {
        let mut config = ScanConfig::new("godot");
        config.num_threads = Some(0);
        assert!(config.validate().is_err());

        config.num_threads = Some(4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_should_parse_extension() {
        let config = ScanConfig::new("godot");
        assert!(config.should_parse_extension(".hpp"));
        assert!(config.should_parse_extension("hpp"));
        assert!(config.should_parse_extension("h"));
        assert!(!config.should_parse_extension(".cpp"));
        assert!(!config.should_parse_extension(".rs"));
    }

    #[test]
    fn test_is_excluded_prefix() {
        let config = ScanConfig::new("godot");
        assert!(config.is_excluded_prefix("thirdparty"));
        assert!(config.is_excluded_prefix("tests"));
        assert!(!config.is_excluded_prefix("classes"));
    }

    #[test]
    fn test_excluded_methods_configurable() {
        let config =
            ScanConfig::new("godot").with_excluded_methods(vec!["MY_MARKER".to_string()]);
        assert!(config.is_excluded_method("MY_MARKER"));
        assert!(!config.is_excluded_method("GDEXTENSION_CLASS"));
    }
}
