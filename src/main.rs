use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use docs_version_policy::config::{BuildFlags, PolicyConfig};
use docs_version_policy::logging::{self, LogFormat};
use docs_version_policy::manifest::build_manifest;
use docs_version_policy::metadata::FsMetadataReader;
use docs_version_policy::version::{CurrentVersion, PrereleaseClassifier, ReleaseTrain};

#[derive(Parser)]
#[command(name = "docs-version-policy")]
#[command(version, about = "Version lifecycle classifier for multi-version docs builds")]
struct Cli {
    /// Documentation site root
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// JSON policy configuration (defaults apply to missing fields)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Emit the publish manifest for the versioned docs plugin
    Manifest {
        /// Write the manifest here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Report whether a released version is a prerelease
    Classify { version: String },
    /// Print the in-development version derived from the release train
    Current,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.log_format, cli.log_file.as_deref())
        .context("Failed to initialize logging")?;

    let config = match &cli.config {
        Some(path) => PolicyConfig::load(path)?,
        None => PolicyConfig::default(),
    };
    let train_path = cli.root.join(&config.layout.release_train_file);

    match cli.command {
        Command::Manifest { output } => {
            let train = ReleaseTrain::load(&train_path)?;
            let reader = FsMetadataReader::new(&cli.root, config.layout.clone());
            let flags = BuildFlags::from_env();
            info!(
                "Building manifest for {} released versions under {:?}",
                train.len(),
                reader.root()
            );

            let manifest = build_manifest(&train, &reader, &config.resolver, &flags)
                .context("Failed to build publish manifest")?;
            let json = manifest.to_json()?;
            write_output(output.as_deref(), &json)?;
        }
        Command::Classify { version } => {
            let reader = FsMetadataReader::new(&cli.root, config.layout.clone());
            let classifier = PrereleaseClassifier::new(&config.resolver.version_config_key);
            let is_prerelease = classifier.classify(&reader, &version)?;
            let kind = if is_prerelease { "prerelease" } else { "release" };
            write_output(None, kind)?;
        }
        Command::Current => {
            let train = ReleaseTrain::load(&train_path)?;
            let current = CurrentVersion::derive(&train, config.resolver.major_version)?;
            write_output(None, &current.to_string())?;
        }
    }

    Ok(())
}

fn write_output(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{content}\n"))
                .with_context(|| format!("Failed to write {path:?}"))?;
            info!("Wrote {:?}", path);
        }
        None => writeln!(std::io::stdout().lock(), "{content}")?,
    }
    Ok(())
}
