//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, Subcommand, ValueEnum};
use sbb_core::Enclosure;
use std::io::IsTerminal;
use std::path::PathBuf;

/// SBB - fluent string building from the command line
///
/// Replays a recipe of append, whitespace and wrapper steps onto a string
/// builder and prints the result.
#[derive(Parser, Debug)]
#[command(
    name = "sbb",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SBB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a recipe file (TOML, YAML or JSON)
    Build(BuildArgs),

    /// Render a recipe given as command-line tokens
    Join(JoinArgs),

    /// Wrap each value in a delimiter pair and concatenate the results
    Wrap(WrapArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the build command
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Path to the recipe file
    #[arg(value_name = "RECIPE")]
    pub recipe: PathBuf,
}

/// Arguments for the join command
///
/// Tokens are appended verbatim, except `:space`, `:newline`, `:tab`,
/// `:comma` and `:dot`, which push those characters, and `<enclosure>=<value>`
/// (for example `dq=text`), which wraps the value. Use `::text` for a literal
/// leading colon.
#[derive(Parser, Debug)]
pub struct JoinArgs {
    /// Initial fragment
    #[arg(long)]
    pub seed: Option<String>,

    /// Recipe tokens, in order
    #[arg(value_name = "TOKEN", allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

/// Arguments for the wrap command
#[derive(Parser, Debug)]
pub struct WrapArgs {
    /// Delimiter pair to wrap each value in
    #[arg(short = 'w', long = "with", value_enum)]
    pub with: EnclosureArg,

    /// Text inserted between wrapped values
    #[arg(short, long, default_value = "")]
    pub separator: String,

    /// Values to wrap
    #[arg(value_name = "VALUE")]
    pub values: Vec<String>,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The built text only
    Human,
    /// JSON object with fragments and result
    Json,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Delimiter pairs accepted on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum EnclosureArg {
    #[value(alias = "sq")]
    SingleQuote,
    #[value(alias = "dq")]
    DoubleQuote,
    #[value(alias = "sb")]
    SquareBracket,
    #[value(alias = "cb")]
    CurlyBracket,
    #[value(alias = "p")]
    Parenthesis,
    #[value(alias = "ab")]
    AngleBracket,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stderr().is_terminal()
    }
}

impl From<EnclosureArg> for Enclosure {
    fn from(arg: EnclosureArg) -> Self {
        match arg {
            EnclosureArg::SingleQuote => Enclosure::SingleQuote,
            EnclosureArg::DoubleQuote => Enclosure::DoubleQuote,
            EnclosureArg::SquareBracket => Enclosure::SquareBracket,
            EnclosureArg::CurlyBracket => Enclosure::CurlyBracket,
            EnclosureArg::Parenthesis => Enclosure::Parenthesis,
            EnclosureArg::AngleBracket => Enclosure::AngleBracket,
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli {
            verbose: 2,
            quiet: false,
            config: None,
            output: None,
            no_color: false,
            command: Commands::Build(BuildArgs {
                recipe: PathBuf::from("recipe.toml"),
            }),
        };
        assert_eq!(cli.verbosity_level(), 2);

        let quiet_cli = Cli {
            verbose: 2,
            quiet: true,
            ..cli
        };
        assert_eq!(quiet_cli.verbosity_level(), 0);
    }

    #[test]
    fn test_join_accepts_hyphen_tokens() {
        let cli = Cli::parse_from(["sbb", "join", "--seed", "x", "-", ":space", "dq=y"]);
        match cli.command {
            Commands::Join(args) => {
                assert_eq!(args.seed.as_deref(), Some("x"));
                assert_eq!(args.tokens, vec!["-", ":space", "dq=y"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_wrap_accepts_alias() {
        let cli = Cli::parse_from(["sbb", "wrap", "--with", "dq", "a", "b"]);
        match cli.command {
            Commands::Wrap(args) => {
                assert_eq!(Enclosure::from(args.with), Enclosure::DoubleQuote);
                assert_eq!(args.values, vec!["a", "b"]);
                assert_eq!(args.separator, "");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_output_flag() {
        let cli = Cli::parse_from(["sbb", "-o", "json", "build", "r.toml"]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }
}
