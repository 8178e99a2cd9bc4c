use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use quill_core::config::QuillConfig;
use quill_core::discover::discover_files;
use quill_core::extract::Scanner;
use quill_core::types::ScanContext;

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Path to the source tree (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Emit the raw function records as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ScanArgs) -> anyhow::Result<()> {
    let root = std::fs::canonicalize(&args.path)
        .with_context(|| format!("Cannot resolve path: {}", args.path.display()))?;

    let config = QuillConfig::load(&root).context("Cannot load config")?;
    let files = discover_files(&root, &config.scan);

    let scanner = Scanner::new(&root);
    let mut ctx = ScanContext::new();
    let outcome = scanner.scan_files(&files, &mut ctx);

    if args.json {
        let records: Vec<_> = outcome
            .files
            .iter()
            .flat_map(|f| f.records.iter())
            .collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!("Scan of {}", root.display());
    println!();
    println!("  Files scanned:  {}", outcome.files.len());
    println!("  Functions:      {}", outcome.total_functions());
    println!("  Documented:     {}", outcome.total_documented());
    if !outcome.errors.is_empty() {
        println!("  Skipped:        {}", outcome.errors.len());
        for (path, error) in &outcome.errors {
            println!("    {path}: {error}");
        }
    }

    Ok(())
}
