//! viewgen CLI: generate iOS component view helpers from a codegen schema.

mod commands;
mod manifest;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::generate::GenerateArgs;
use manifest::ViewgenManifest;

#[derive(Parser)]
#[command(
    name = "viewgen",
    version,
    about = "Generate Objective-C component view helpers from a codegen schema"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate RCTComponentViewHelpers.h from a schema
    Generate {
        /// Schema JSON file (default: [schema] path in viewgen.toml)
        #[arg(long)]
        schema: Option<PathBuf>,
        /// Library name (default: schema file stem)
        #[arg(long)]
        library: Option<String>,
        /// Package name
        #[arg(long)]
        package: Option<String>,
        /// Assume nonnull
        #[arg(long)]
        assume_nonnull: bool,
        /// Header prefix
        #[arg(long)]
        header_prefix: Option<String>,
        /// Output directory (default: generated)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Sign generated files
        #[arg(long)]
        sign: bool,
    },
    /// Check that a signed generated file was not edited
    Verify {
        /// Generated file
        file: PathBuf,
    },
    /// List the components of a schema and whether they are emitted
    Components {
        /// Schema JSON file (default: [schema] path in viewgen.toml)
        #[arg(long)]
        schema: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Generate {
            schema,
            library,
            package,
            assume_nonnull,
            header_prefix,
            out,
            sign,
        } => {
            let manifest = ViewgenManifest::find_and_load(&cwd)?;
            let settings = commands::generate::resolve_settings(
                &cwd,
                manifest.as_ref().map(|(m, dir)| (m, dir.as_path())),
                GenerateArgs {
                    schema,
                    library,
                    package,
                    assume_nonnull,
                    header_prefix,
                    out,
                    sign,
                },
            )?;
            commands::generate::run(&settings)?;
            Ok(())
        }

        Commands::Verify { file } => commands::verify::run(&cwd.join(file)),

        Commands::Components { schema } => {
            let schema_path = match schema {
                Some(path) => cwd.join(path),
                None => manifest_schema_path(&cwd)?,
            };
            commands::components::run(&schema_path)
        }
    }
}

fn manifest_schema_path(cwd: &Path) -> anyhow::Result<PathBuf> {
    let Some((manifest, dir)) = ViewgenManifest::find_and_load(cwd)? else {
        anyhow::bail!("no schema given: pass --schema or create viewgen.toml");
    };
    match manifest.schema_path() {
        Some(path) => Ok(dir.join(path)),
        None => anyhow::bail!("no schema given: pass --schema or set [schema] path in viewgen.toml"),
    }
}
