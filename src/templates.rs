use anyhow::{Context, Result, anyhow};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "templates"]
struct Templates;

/// Body of an embedded template, relative to `templates/`.
pub fn get_string(path: &str) -> Result<String> {
    let embedded = Templates::get(path).ok_or_else(|| anyhow!("no embedded template `{path}`"))?;
    String::from_utf8(embedded.data.into_owned())
        .with_context(|| format!("template `{path}` is not UTF-8"))
}
