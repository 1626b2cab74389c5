use std::fs;

use anyhow::{Context, Result};
use camino::Utf8Path;

use crate::tree::Tree;

/// Load a tree description from a TOML file. Tables are directories, strings are file bodies.
pub fn load_tree(path: &Utf8Path) -> Result<Tree> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading tree file {}", path))?;
    parse_tree(&raw).with_context(|| format!("parsing tree file {}", path))
}

pub fn parse_tree(raw: &str) -> Result<Tree> {
    let tree: Tree = toml::from_str(raw)?;
    tree.validate()?;
    Ok(tree)
}

pub fn render_tree(tree: &Tree) -> Result<String> {
    toml::to_string(tree).context("serializing tree to TOML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
[app]
"index.html" = "<html></html>\n"

[app.scripts]
"main.js" = "// main\n"

[app.models]
"#;

    #[test]
    fn parses_tables_as_directories() {
        let tree = parse_tree(SAMPLE).unwrap();
        let app = tree.get("app").and_then(Node::as_dir).unwrap();
        assert_eq!(app.get("index.html").and_then(Node::as_file), Some("<html></html>\n"));
        let scripts = app.get("scripts").and_then(Node::as_dir).unwrap();
        assert_eq!(scripts.get("main.js").and_then(Node::as_file), Some("// main\n"));
        assert!(app.get("models").and_then(Node::as_dir).unwrap().is_empty());
    }

    #[test]
    fn rejects_traversal_names() {
        let err = parse_tree("[app]\n\"..\" = \"x\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("invalid entry name"));
    }

    #[test]
    fn rejects_non_string_leaves() {
        assert!(parse_tree("count = 3\n").is_err());
    }

    #[test]
    fn rendered_tree_parses_back() {
        let tree = Tree::new().with_dir(
            "app",
            Tree::new()
                .with_file("README.md", "# App\n")
                .with_dir("scripts", Tree::new().with_file("ui.js", "// ui\n")),
        );
        let rendered = render_tree(&tree).unwrap();
        assert_eq!(parse_tree(&rendered).unwrap(), tree);
    }

    #[test]
    fn load_reports_path_on_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = Utf8Path::from_path(dir.path()).unwrap().join("tree.toml");
        let err = load_tree(&path).unwrap_err();
        assert!(err.to_string().contains("tree.toml"));

        fs::write(&path, SAMPLE).unwrap();
        assert_eq!(load_tree(&path).unwrap().len(), 1);
    }
}
