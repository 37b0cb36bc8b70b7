mod cli;
mod diag;
mod dups;
mod glob;
mod lines;
mod report;

use clap::{CommandFactory, Parser};

use cli::Cli;
use diag::{DiagSink, NullSink, StderrSink};
use dups::{ConfigError, Options};

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let mut sink: Box<dyn DiagSink> = if cli.debug {
        Box::new(StderrSink)
    } else {
        Box::new(NullSink)
    };

    let opts = Options {
        min_lines: cli.min_lines,
        ignore_indentation: cli.ignore_indentation,
        json: cli.json,
    };

    if let Err(err) = dups::run(&cli.patterns, &opts, sink.as_mut()) {
        eprintln!("error: {err}");
        let code = if err.is::<ConfigError>() { 2 } else { 1 };
        std::process::exit(code);
    }
}
