//! The built-in Selfie Project skeleton.

use anyhow::Result;

use crate::templates;
use crate::tree::Tree;

pub const ROOT: &str = "selfie-project";
pub const TITLE: &str = "Selfie Project";

const SCRIPTS: [&str; 6] = [
    "main.js",
    "poseHandler.js",
    "gestureHandler.js",
    "selfieModule.js",
    "ui.js",
    "actions.js",
];

/// Build the project tree. File bodies come from the embedded `templates/selfie-project/`.
pub fn selfie_project() -> Result<Tree> {
    let style = Tree::new().with_file("styles.css", template("style/styles.css")?);

    let mut scripts = Tree::new();
    for name in SCRIPTS {
        scripts = scripts.with_file(name, template(&format!("scripts/{name}"))?);
    }

    let assets = Tree::new()
        .with_dir("sounds", Tree::new())
        .with_dir("icons", Tree::new());

    let project = Tree::new()
        .with_dir("style", style)
        .with_dir("scripts", scripts)
        .with_dir("assets", assets)
        .with_dir("models", Tree::new())
        .with_dir("data", Tree::new().with_dir("selfies", Tree::new()))
        .with_file("index.html", template("index.html")?)
        .with_file("README.md", template("README.md")?);

    Ok(Tree::new().with_dir(ROOT, project))
}

fn template(relative: &str) -> Result<String> {
    templates::get_string(&format!("{ROOT}/{relative}"))
}
