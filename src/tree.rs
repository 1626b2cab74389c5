//! In-memory description of a directory tree to scaffold.

use std::collections::BTreeMap;
use std::collections::btree_map;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::ScaffoldError;

/// Named children of one directory. Names are single path segments.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tree {
    entries: BTreeMap<String, Node>,
}

/// A tree entry: either a subdirectory or a file with its full contents.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    File(String),
    Directory(Tree),
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TreeStats {
    pub directories: usize,
    pub files: usize,
    pub bytes: usize,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(mut self, name: impl Into<String>, tree: Tree) -> Self {
        self.insert(name, Node::Directory(tree));
        self
    }

    pub fn with_file(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(name, Node::File(contents.into()));
        self
    }

    /// Insert an entry, returning the node it replaced.
    pub fn insert(&mut self, name: impl Into<String>, node: Node) -> Option<Node> {
        self.entries.insert(name.into(), node)
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Node> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every name in the tree. The reported path is relative to the tree root.
    pub fn validate(&self) -> Result<(), ScaffoldError> {
        self.validate_at(Utf8Path::new(""))
    }

    fn validate_at(&self, parent: &Utf8Path) -> Result<(), ScaffoldError> {
        for (name, node) in self {
            if let Err(reason) = check_name(name) {
                return Err(ScaffoldError::InvalidName {
                    path: parent.join(name),
                    name: name.clone(),
                    reason,
                });
            }
            if let Node::Directory(sub) = node {
                sub.validate_at(&parent.join(name))?;
            }
        }
        Ok(())
    }

    /// Count directories, files and content bytes below this tree (excluding the tree itself).
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        for node in self.entries.values() {
            match node {
                Node::Directory(sub) => {
                    let inner = sub.stats();
                    stats.directories += 1 + inner.directories;
                    stats.files += inner.files;
                    stats.bytes += inner.bytes;
                }
                Node::File(contents) => {
                    stats.files += 1;
                    stats.bytes += contents.len();
                }
            }
        }
        stats
    }

    /// All paths in depth-first order, directories suffixed with `/`.
    pub fn paths(&self) -> Vec<Utf8PathBuf> {
        let mut out = Vec::new();
        self.collect_paths(Utf8Path::new(""), &mut out);
        out
    }

    fn collect_paths(&self, parent: &Utf8Path, out: &mut Vec<Utf8PathBuf>) {
        for (name, node) in self {
            let path = parent.join(name);
            match node {
                Node::Directory(sub) => {
                    out.push(Utf8PathBuf::from(format!("{path}/")));
                    sub.collect_paths(&path, out);
                }
                Node::File(_) => out.push(path),
            }
        }
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = (&'a String, &'a Node);
    type IntoIter = btree_map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Node {
    pub fn as_dir(&self) -> Option<&Tree> {
        match self {
            Node::Directory(tree) => Some(tree),
            Node::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&str> {
        match self {
            Node::File(contents) => Some(contents),
            Node::Directory(_) => None,
        }
    }
}

fn check_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("name is empty");
    }
    if name == "." || name == ".." {
        return Err("name refers to a parent or current directory");
    }
    if name.contains(['/', '\\']) {
        return Err("name contains a path separator");
    }
    if name.contains('\0') {
        return Err("name contains a NUL byte");
    }
    Ok(())
}
