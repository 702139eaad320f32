use clap::Parser;
use log::error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use vitae::{ExportPipelineBuilder, FilesystemResourceProvider, Manifest, PipelineError, SnapshotRasterizer};

/// Export a resume manifest to a paginated PDF.
#[derive(Parser, Debug)]
#[command(name = "vitae", version, about)]
struct Cli {
    /// Path to the resume manifest (JSON). Section sources resolve relative to it.
    manifest: PathBuf,

    /// Directory to write the PDF into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Name used for the output filename, overriding the manifest.
    #[arg(long)]
    name: Option<String>,
}

async fn run(cli: Cli) -> Result<PathBuf, PipelineError> {
    let manifest = Manifest::load(&cli.manifest)?;
    let base = cli
        .manifest
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let rasterizer = SnapshotRasterizer::new(FilesystemResourceProvider::new(base));

    let mut builder = ExportPipelineBuilder::new().with_config(manifest.config.clone());
    if let Some(name) = cli.name {
        builder = builder.with_subject_name(name);
    }
    let pipeline = builder.build(rasterizer)?;

    pipeline
        .export_to_dir(Some(&manifest.content_root()), &cli.out_dir)
        .await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(path) => {
            println!("Successfully generated {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
