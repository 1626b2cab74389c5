use std::path::Path;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use crate::builder::StructureBuilder;
use crate::cli::Cli;
use crate::tree::Tree;
use crate::{config, layout};

/// Where the tree description came from.
enum TreeSource {
    BuiltIn,
    File(Utf8PathBuf),
}

pub fn run(cli: Cli) -> Result<()> {
    let source = match &cli.file {
        Some(path) => TreeSource::File(utf8(path)?),
        None => TreeSource::BuiltIn,
    };
    let tree = load(&source)?;

    if cli.print {
        print!("{}", config::render_tree(&tree)?);
        return Ok(());
    }

    let base = resolve_base(cli.chdir.as_deref())?;
    println!("Creating project structure...");

    let report = StructureBuilder::new()
        .dry_run(cli.dry_run)
        .build(&base, &tree)
        .inspect_err(|err| {
            debug!(path = %err.path(), filesystem = err.is_filesystem(), "scaffolding stopped")
        })
        .with_context(|| format!("building project structure under {}", base))?;

    if report.dry_run {
        print_plan(&base, &tree);
        return Ok(());
    }

    info!(
        base = %base,
        directories = report.directories.len(),
        files = report.files.len(),
        bytes = report.bytes_written,
        "project structure written"
    );
    match source {
        TreeSource::BuiltIn => println!("✅ {} structure created successfully.", layout::TITLE),
        TreeSource::File(_) => println!("✅ Project structure created successfully."),
    }
    Ok(())
}

fn load(source: &TreeSource) -> Result<Tree> {
    match source {
        TreeSource::BuiltIn => layout::selfie_project(),
        TreeSource::File(path) => config::load_tree(path),
    }
}

fn resolve_base(chdir: Option<&Path>) -> Result<Utf8PathBuf> {
    match chdir {
        Some(dir) => utf8(dir),
        None => Ok(Utf8PathBuf::from(".")),
    }
}

fn utf8(path: &Path) -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path.to_path_buf())
        .map_err(|p| anyhow!("path {} is not valid UTF-8", p.display()))
}

fn print_plan(base: &Utf8Path, tree: &Tree) {
    for path in tree.paths() {
        println!("  (dry-run) {}", base.join(path));
    }
    let stats = tree.stats();
    println!(
        "Would create {} directories and {} files ({} bytes).",
        stats.directories, stats.files, stats.bytes
    );
}
