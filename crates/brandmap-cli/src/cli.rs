//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "brandmap",
    version,
    about = "Normalize drug catalog product descriptions",
    long_about = "Normalize free-text drug product descriptions from a regulator catalog.\n\n\
                  Splits ingredients into base and salts, canonicalizes dosage forms and routes,\n\
                  corrects swapped brand/generic columns and resolves vaccine names."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a brand map CSV from a regulator catalog export.
    Build(BuildArgs),

    /// Split ingredient text into base name and salts.
    Split(SplitArgs),

    /// Show the canonical form and valid routes of dosage forms.
    Form(FormArgs),

    /// Resolve vaccine acronyms, components and canonical names.
    Vaccine(VaccineArgs),

    /// Check whether a brand/generic pair is swapped.
    Flip(FlipArgs),
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Catalog CSV export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV path (default: brand_map_<YYYY-MM-DD>.csv).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Generic-name vocabulary CSV (default: $BRANDMAP_VOCABULARY).
    #[arg(long = "vocabulary", value_name = "PATH")]
    pub vocabulary: Option<PathBuf>,

    /// Keep brand and generic columns as given.
    #[arg(long = "no-flip")]
    pub no_flip: bool,

    /// Keep duplicate rows.
    #[arg(long = "no-dedupe")]
    pub no_dedupe: bool,

    /// Write the matched form keyword instead of the canonical form.
    #[arg(long = "raw-forms")]
    pub raw_forms: bool,

    /// Replace generic names that are vocabulary lexemes with their canonical name.
    #[arg(long = "resolve-synonyms")]
    pub resolve_synonyms: bool,
}

#[derive(Parser)]
pub struct SplitArgs {
    /// Ingredient strings.
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct FormArgs {
    /// Raw dosage forms.
    #[arg(value_name = "FORM", required = true)]
    pub forms: Vec<String>,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct VaccineArgs {
    /// Vaccine product text or acronym.
    #[arg(value_name = "TEXT")]
    pub text: String,
}

#[derive(Parser)]
pub struct FlipArgs {
    #[arg(value_name = "BRAND")]
    pub brand: String,

    #[arg(value_name = "GENERIC")]
    pub generic: String,

    /// Generic-name vocabulary CSV (default: $BRANDMAP_VOCABULARY).
    #[arg(long = "vocabulary", value_name = "PATH")]
    pub vocabulary: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn build_flags_parse() {
        let cli = Cli::parse_from([
            "brandmap",
            "build",
            "catalog.csv",
            "--no-flip",
            "--output",
            "out.csv",
        ]);
        let Command::Build(args) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(args.input, PathBuf::from("catalog.csv"));
        assert_eq!(args.output, Some(PathBuf::from("out.csv")));
        assert!(args.no_flip);
        assert!(!args.no_dedupe);
        assert!(!args.resolve_synonyms);
    }
}
