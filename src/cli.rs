use std::path::PathBuf;

use clap::Parser;

/// Command line for the scaffolder. Every flag is optional; a bare invocation
/// builds the Selfie Project skeleton in the current directory.
#[derive(Parser, Debug)]
#[command(
    name = "selfie-scaffold",
    version,
    about = "Create the Selfie Project directory skeleton"
)]
pub struct Cli {
    /// Directory to build into instead of the current directory.
    #[arg(short = 'C', long = "chdir")]
    pub chdir: Option<PathBuf>,
    /// TOML file describing the tree to build instead of the built-in layout.
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,
    /// List what would be created without touching the filesystem.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
    /// Print the selected tree as TOML and exit.
    #[arg(long = "print", conflicts_with = "dry_run")]
    pub print: bool,
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_uses_defaults() {
        let cli = Cli::try_parse_from(["selfie-scaffold"]).unwrap();
        assert!(cli.chdir.is_none());
        assert!(cli.file.is_none());
        assert!(!cli.dry_run);
        assert!(!cli.print);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn short_flags_parse() {
        let cli =
            Cli::try_parse_from(["selfie-scaffold", "-C", "out", "-f", "tree.toml", "-n", "-vv"])
                .unwrap();
        assert_eq!(cli.chdir, Some(PathBuf::from("out")));
        assert_eq!(cli.file, Some(PathBuf::from("tree.toml")));
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn every_flag_has_help_text() {
        let command = Cli::command();
        for arg in command.get_arguments() {
            if matches!(arg.get_id().as_str(), "help" | "version") {
                continue;
            }
            assert!(arg.get_help().is_some(), "`{}` has no help", arg.get_id());
        }
    }

    #[test]
    fn print_conflicts_with_dry_run() {
        assert!(Cli::try_parse_from(["selfie-scaffold", "--print", "--dry-run"]).is_err());
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["selfie-scaffold", "extra"]).is_err());
    }
}
