use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use quill_core::config::QuillConfig;
use quill_core::discover::discover_files;
use quill_core::extract::Scanner;
use quill_core::render::render_markdown;
use quill_core::types::ScanContext;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path to the source tree (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ReportArgs) -> anyhow::Result<()> {
    let root = std::fs::canonicalize(&args.path)
        .with_context(|| format!("Cannot resolve path: {}", args.path.display()))?;

    let config = QuillConfig::load(&root).context("Cannot load config")?;
    let files = discover_files(&root, &config.scan);

    let scanner = Scanner::new(&root);
    let mut ctx = ScanContext::new();
    let outcome = scanner.scan_files(&files, &mut ctx);

    let report = render_markdown(&outcome, &ctx, &config.report);
    match &args.output {
        Some(path) => {
            std::fs::write(path, report)
                .with_context(|| format!("Cannot write report: {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
        None => print!("{report}"),
    }

    Ok(())
}
