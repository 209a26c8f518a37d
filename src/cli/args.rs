//! CLI argument definitions using Clap

use clap::Parser;

/// Annonce de Lola - daily hallowed-object announcement
#[derive(Parser, Debug)]
#[command(name = "annonce-lola")]
#[command(version)]
#[command(about = "Announces the hallowed object of the day as a desktop notification")]
#[command(long_about = None)]
pub struct Cli {
    /// Print the announcement to standard output instead of notifying
    #[arg(long)]
    pub stdout: bool,
}

/// Parsed announce options
#[derive(Debug, Clone)]
pub struct AnnounceOptions {
    pub stdout: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["annonce-lola"]);
        assert!(!cli.stdout);
    }

    #[test]
    fn cli_parses_stdout_flag() {
        let cli = Cli::parse_from(["annonce-lola", "--stdout"]);
        assert!(cli.stdout);
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
