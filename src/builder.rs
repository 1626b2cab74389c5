//! Materializes a [`Tree`] on disk.

use std::fs::{self, File};
use std::io::{self, Write};

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::error::ScaffoldError;
use crate::tree::{Node, Tree};

/// Walks a tree depth-first, ensuring directories and (re)writing files.
#[derive(Clone, Copy, Debug, Default)]
pub struct StructureBuilder {
    dry_run: bool,
}

/// Paths touched by a build, in walk order.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub directories: Vec<Utf8PathBuf>,
    pub files: Vec<Utf8PathBuf>,
    pub bytes_written: usize,
    pub dry_run: bool,
}

impl StructureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// When enabled, the report is computed but nothing is written.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Build `tree` under `base`. Names are validated up front, so an invalid
    /// name fails before anything is created. Filesystem errors stop the walk;
    /// entries already written stay on disk.
    pub fn build(&self, base: &Utf8Path, tree: &Tree) -> Result<BuildReport, ScaffoldError> {
        tree.validate()?;
        let mut report = BuildReport {
            dry_run: self.dry_run,
            ..BuildReport::default()
        };
        self.build_into(base, tree, &mut report)?;
        Ok(report)
    }

    fn build_into(
        &self,
        base: &Utf8Path,
        tree: &Tree,
        report: &mut BuildReport,
    ) -> Result<(), ScaffoldError> {
        for (name, node) in tree {
            let path = base.join(name);
            match node {
                Node::Directory(sub) => {
                    self.ensure_dir(&path)?;
                    report.directories.push(path.clone());
                    self.build_into(&path, sub, report)?;
                }
                Node::File(contents) => {
                    self.write_file(&path, contents)?;
                    report.bytes_written += contents.len();
                    report.files.push(path);
                }
            }
        }
        Ok(())
    }

    fn ensure_dir(&self, path: &Utf8Path) -> Result<(), ScaffoldError> {
        debug!(path = %path, dry_run = self.dry_run, "ensuring directory");
        if self.dry_run {
            return Ok(());
        }
        fs::create_dir_all(path).map_err(|source| ScaffoldError::CreateDir {
            path: path.to_owned(),
            source,
        })
    }

    fn write_file(&self, path: &Utf8Path, contents: &str) -> Result<(), ScaffoldError> {
        debug!(path = %path, bytes = contents.len(), dry_run = self.dry_run, "writing file");
        if self.dry_run {
            return Ok(());
        }
        let to_error = |source: io::Error| ScaffoldError::WriteFile {
            path: path.to_owned(),
            source,
        };
        // The handle is dropped (and closed) when this scope ends, even on error.
        let mut file = File::create(path).map_err(to_error)?;
        file.write_all(contents.as_bytes()).map_err(to_error)?;
        file.flush().map_err(to_error)
    }
}
