/// CLI argument definitions for the `dupblocks` command.
use clap::Parser;
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "dupblocks",
    version,
    about = "Find repeated blocks of lines across files",
    long_about = "\
Find repeated blocks of lines across files.

Scans every file matched by the given glob patterns and reports each maximal
block of consecutive lines that occurs two or more times, with every location
it appears. Output is YAML by default; use --json for JSON.

Patterns support * (any run of characters except /), ? (exactly one such
character) and ** (any run of characters including /, for recursive descent).
Bracket classes are not glob syntax and match literally.

Examples:
  dupblocks --min-lines 9 \"src/**/*.rs\"
  dupblocks --ignore-indentation \"lib/**/*.py\" \"tools/*.py\"
  dupblocks --json --min-lines 4 \"include/*.h\" \"src/*.c\""
)]
pub struct Cli {
    /// Minimum number of lines a duplicate block must span
    #[arg(long, default_value = "6")]
    pub min_lines: usize,

    /// Ignore leading whitespace when comparing lines
    #[arg(long)]
    pub ignore_indentation: bool,

    /// Output as JSON instead of YAML
    #[arg(long)]
    pub json: bool,

    /// Emit progress diagnostics to stderr
    #[arg(long)]
    pub debug: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Glob patterns selecting the files to scan
    #[arg(value_name = "PATTERN", required_unless_present = "completions")]
    pub patterns: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags_and_patterns() {
        let cli = Cli::parse_from([
            "dupblocks",
            "--min-lines",
            "9",
            "--ignore-indentation",
            "src/**/*.rs",
            "*.c",
        ]);
        assert_eq!(cli.min_lines, 9);
        assert!(cli.ignore_indentation);
        assert!(!cli.json);
        assert_eq!(cli.patterns, vec!["src/**/*.rs", "*.c"]);
    }

    #[test]
    fn patterns_are_required() {
        assert!(Cli::try_parse_from(["dupblocks"]).is_err());
    }

    #[test]
    fn completions_does_not_require_patterns() {
        assert!(Cli::try_parse_from(["dupblocks", "--completions", "bash"]).is_ok());
    }
}
