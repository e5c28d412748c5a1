use clap::{Args, Parser, Subcommand, ValueEnum};

use risk_client::endpoints::Section;

/// Top-level CLI parser for the `rsf` binary.
#[derive(Debug, Parser)]
#[command(name = "rsf", version, about = "Risksurface - repository risk reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, text
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
        }
    }
}

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Copy, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List discovered repositories and their analysis state
    Projects,
    /// Select a repository for analysis viewing
    Select(SelectArgs),
    /// Request analysis of a repository
    Analyze(AnalyzeArgs),
    /// Report a section of the selected repository's risk analysis
    Report(ReportArgs),
}

#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Repository as owner/name
    pub project: String,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Repository as owner/name
    pub project: String,

    /// Poll until the analysis reports ready (bounded)
    #[arg(long)]
    pub wait: bool,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Section to report: topology, trajectory, impact, dependencies,
    /// concentration, temporal, predictions
    pub section: Section,

    /// Repository the payload must belong to (owner/name). Defaults to
    /// whatever the backend reports as selected.
    #[arg(long)]
    pub project: Option<String>,

    /// Case-insensitive substring filter on hotspot file paths
    #[arg(long)]
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};
    use risk_client::endpoints::Section;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["rsf", "--format", "json", "--verbose", "projects"])
            .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Projects));
    }

    #[test]
    fn report_parses_section_and_filter() {
        let cli = Cli::try_parse_from(["rsf", "report", "temporal", "--path", "src/auth"])
            .expect("cli should parse");
        let Commands::Report(args) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(args.section, Section::Temporal);
        assert_eq!(args.path.as_deref(), Some("src/auth"));
    }

    #[test]
    fn report_rejects_unknown_section() {
        assert!(Cli::try_parse_from(["rsf", "report", "velocity"]).is_err());
    }

    #[test]
    fn analyze_parses_wait_flag() {
        let cli = Cli::try_parse_from(["rsf", "analyze", "acme/widgets", "--wait"])
            .expect("cli should parse");
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze command");
        };
        assert_eq!(args.project, "acme/widgets");
        assert!(args.wait);
    }
}
