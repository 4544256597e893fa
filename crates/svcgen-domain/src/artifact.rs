//! Generated source artifacts

use std::path::PathBuf;

/// One generated source file destined for the build output
///
/// Computed once per contract per pass, handed to the artifact writer,
/// and never read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Dotted namespace of the generated type; empty means unqualified
    pub namespace: String,
    /// Simple name of the generated type
    pub type_name: String,
    /// Complete source text
    pub source: String,
}

impl GeneratedArtifact {
    /// Create an artifact from its parts
    pub fn new(
        namespace: impl Into<String>,
        type_name: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            type_name: type_name.into(),
            source: source.into(),
        }
    }

    /// Fully-qualified name of the generated type
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.type_name.clone()
        } else {
            format!("{}.{}", self.namespace, self.type_name)
        }
    }

    /// Output path relative to the emission root: namespace segments as
    /// directories, `<TypeName>.java` as file name
    pub fn relative_path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        if !self.namespace.is_empty() {
            for segment in self.namespace.split('.') {
                path.push(segment);
            }
        }
        path.push(format!("{}.java", self.type_name));
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_name_joins_namespace() {
        let artifact = GeneratedArtifact::new("com.example", "Greeter_ServiceLoader", "");
        assert_eq!(artifact.qualified_name(), "com.example.Greeter_ServiceLoader");
    }

    #[test]
    fn empty_namespace_means_unqualified() {
        let artifact = GeneratedArtifact::new("", "Greeter_ServiceLoader", "");
        assert_eq!(artifact.qualified_name(), "Greeter_ServiceLoader");
        assert_eq!(
            artifact.relative_path(),
            PathBuf::from("Greeter_ServiceLoader.java")
        );
    }

    #[test]
    fn relative_path_uses_namespace_directories() {
        let artifact = GeneratedArtifact::new("com.example", "Greeter_ServiceLoader", "");
        assert_eq!(
            artifact.relative_path(),
            PathBuf::from("com/example/Greeter_ServiceLoader.java")
        );
    }
}
