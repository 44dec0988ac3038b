//! `viewgen generate`: schema in, header files out.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use viewgen_objc::GenerateOptions;
use viewgen_schema::Schema;

use crate::manifest::ViewgenManifest;

/// Output directory used when neither flags nor manifest name one.
const DEFAULT_OUTPUT_DIR: &str = "generated";

/// Command-line arguments of `viewgen generate`.
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    pub schema: Option<PathBuf>,
    pub library: Option<String>,
    pub package: Option<String>,
    pub assume_nonnull: bool,
    pub header_prefix: Option<String>,
    pub out: Option<PathBuf>,
    pub sign: bool,
}

/// Fully resolved generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSettings {
    pub schema_path: PathBuf,
    pub library_name: String,
    pub options: GenerateOptions,
    pub out_dir: PathBuf,
    pub sign: bool,
}

/// Merge command-line arguments over the manifest.
///
/// Paths given on the command line are relative to `cwd`; paths from the
/// manifest are relative to the directory containing it.
pub fn resolve_settings(
    cwd: &Path,
    manifest: Option<(&ViewgenManifest, &Path)>,
    args: GenerateArgs,
) -> Result<GenerateSettings> {
    let manifest_path = |select: fn(&ViewgenManifest) -> Option<&Path>| {
        manifest.and_then(|(m, dir)| select(m).map(|p| dir.join(p)))
    };

    let schema_path = match args.schema {
        Some(path) => cwd.join(path),
        None => match manifest_path(ViewgenManifest::schema_path) {
            Some(path) => path,
            None => bail!("no schema given: pass --schema or set [schema] path in viewgen.toml"),
        },
    };

    let library_name = args
        .library
        .or_else(|| manifest.and_then(|(m, _)| m.library_name().map(str::to_string)))
        .or_else(|| {
            schema_path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_string)
        })
        .context("cannot derive a library name from the schema path; pass --library")?;

    let options = GenerateOptions {
        package_name: args
            .package
            .or_else(|| manifest.and_then(|(m, _)| m.package_name().map(str::to_string))),
        assume_nonnull: args.assume_nonnull || manifest.is_some_and(|(m, _)| m.assume_nonnull()),
        header_prefix: args
            .header_prefix
            .or_else(|| manifest.and_then(|(m, _)| m.header_prefix().map(str::to_string))),
    };

    let out_dir = match args.out {
        Some(path) => cwd.join(path),
        None => manifest_path(ViewgenManifest::output_dir).unwrap_or_else(|| {
            manifest
                .map(|(_, dir)| dir)
                .unwrap_or(cwd)
                .join(DEFAULT_OUTPUT_DIR)
        }),
    };

    Ok(GenerateSettings {
        schema_path,
        library_name,
        options,
        out_dir,
        sign: args.sign || manifest.is_some_and(|(m, _)| m.sign()),
    })
}

/// Run the `viewgen generate` workflow.
///
/// Loads the schema, generates every file, optionally signs them, and writes
/// them into the output directory. Returns the written paths.
pub fn run(settings: &GenerateSettings) -> Result<Vec<PathBuf>> {
    let schema = Schema::load(&settings.schema_path)
        .with_context(|| format!("loading {}", settings.schema_path.display()))?;

    let files = viewgen_objc::generate(&settings.library_name, &schema, &settings.options);

    std::fs::create_dir_all(&settings.out_dir)
        .with_context(|| format!("creating {}", settings.out_dir.display()))?;

    let mut written = Vec::with_capacity(files.len());
    for (file_name, text) in &files {
        let content = if settings.sign {
            sign_generated(text).with_context(|| format!("signing {file_name}"))?
        } else {
            text.clone()
        };
        let path = settings.out_dir.join(file_name);
        std::fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), signed = settings.sign, "wrote generated file");
        println!("Generated {} → {}", file_name, path.display());
        written.push(path);
    }

    Ok(written)
}

/// Prefix `text` with a signing token line and sign it.
fn sign_generated(text: &str) -> Result<String> {
    let unsigned = format!("// @generated {}\n{text}", viewgen_signedsource::signing_token());
    Ok(viewgen_signedsource::sign_file(&unsigned)?)
}
