//! `viewgen.toml` manifest parsing and project configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File name searched for by [`ViewgenManifest::find_and_load`].
pub const MANIFEST_FILE: &str = "viewgen.toml";

/// The top-level manifest structure for a viewgen project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewgenManifest {
    /// Library metadata passed through to the generator.
    #[serde(default)]
    pub library: Option<LibraryConfig>,
    /// Where the schema lives.
    #[serde(default)]
    pub schema: Option<SchemaConfig>,
    /// Generator options.
    #[serde(default)]
    pub generator: Option<GeneratorConfig>,
    /// Where and how generated files are written.
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

/// Library metadata section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Library name. Defaults to the schema file stem.
    #[serde(default)]
    pub name: Option<String>,
    /// Package name.
    #[serde(default)]
    pub package: Option<String>,
}

/// Schema section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Schema JSON path, relative to the manifest directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Generator options section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GeneratorConfig {
    #[serde(default)]
    pub assume_nonnull: Option<bool>,
    #[serde(default)]
    pub header_prefix: Option<String>,
}

/// Output section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory, relative to the manifest directory.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Sign generated files.
    #[serde(default)]
    pub sign: Option<bool>,
}

impl ViewgenManifest {
    /// Search upward from `start_dir` for a `viewgen.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: ViewgenManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                tracing::debug!(path = %candidate.display(), "loaded manifest");
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing viewgen.toml")
    }

    /// Configured schema path.
    pub fn schema_path(&self) -> Option<&Path> {
        self.schema.as_ref().and_then(|s| s.path.as_deref())
    }

    /// Configured library name.
    pub fn library_name(&self) -> Option<&str> {
        self.library.as_ref().and_then(|l| l.name.as_deref())
    }

    /// Configured package name.
    pub fn package_name(&self) -> Option<&str> {
        self.library.as_ref().and_then(|l| l.package.as_deref())
    }

    /// Configured `assume-nonnull` option.
    pub fn assume_nonnull(&self) -> bool {
        self.generator
            .as_ref()
            .and_then(|g| g.assume_nonnull)
            .unwrap_or(false)
    }

    /// Configured header prefix.
    pub fn header_prefix(&self) -> Option<&str> {
        self.generator
            .as_ref()
            .and_then(|g| g.header_prefix.as_deref())
    }

    /// Configured output directory.
    pub fn output_dir(&self) -> Option<&Path> {
        self.output.as_ref().and_then(|o| o.dir.as_deref())
    }

    /// Whether generated files are signed.
    pub fn sign(&self) -> bool {
        self.output.as_ref().and_then(|o| o.sign).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_manifest() {
        let toml_str = r#"
[library]
name = "SampleLibrary"
package = "com.example.sample"

[schema]
path = "build/schema.json"

[generator]
assume-nonnull = true
header-prefix = "Sample"

[output]
dir = "ios/generated"
sign = true
"#;
        let manifest = ViewgenManifest::from_str(toml_str).unwrap();
        assert_eq!(manifest.library_name(), Some("SampleLibrary"));
        assert_eq!(manifest.package_name(), Some("com.example.sample"));
        assert_eq!(manifest.schema_path(), Some(Path::new("build/schema.json")));
        assert!(manifest.assume_nonnull());
        assert_eq!(manifest.header_prefix(), Some("Sample"));
        assert_eq!(manifest.output_dir(), Some(Path::new("ios/generated")));
        assert!(manifest.sign());
    }

    #[test]
    fn parse_empty_manifest() {
        let manifest = ViewgenManifest::from_str("").unwrap();
        assert!(manifest.library_name().is_none());
        assert!(manifest.schema_path().is_none());
        assert!(!manifest.assume_nonnull());
        assert!(!manifest.sign());
    }

    #[test]
    fn reject_invalid_toml() {
        assert!(ViewgenManifest::from_str("this is not valid toml [[[").is_err());
    }

    #[test]
    fn find_and_load_in_current_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            "[library]\nname = \"here\"\n",
        )
        .unwrap();

        let (manifest, found_dir) = ViewgenManifest::find_and_load(dir.path())
            .unwrap()
            .expect("manifest found");
        assert_eq!(manifest.library_name(), Some("here"));
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            "[library]\nname = \"parent\"\n",
        )
        .unwrap();

        let nested = dir.path().join("a").join("b").join("c");
        std::fs::create_dir_all(&nested).unwrap();

        let (manifest, found_dir) = ViewgenManifest::find_and_load(&nested)
            .unwrap()
            .expect("manifest found");
        assert_eq!(manifest.library_name(), Some("parent"));
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn find_and_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "[library\n").unwrap();
        let err = ViewgenManifest::find_and_load(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }
}
