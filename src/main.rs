use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use bigarith::{parse, parse_lines};
use clap::Parser;

/// bigarith evaluates integer arithmetic expressions exactly, with `+`, `-`,
/// `*`, parentheses and negative literals of any size.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates each non-blank line of this file instead of a single
    /// expression.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<String>,

    /// Prints the parse tree after each result.
    #[arg(short, long)]
    tree: bool,

    /// The expression to evaluate. Without it (and without `--file`) the
    /// expressions are read interactively from standard input.
    expression: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    if let Some(path) = &args.file {
        let Ok(contents) = fs::read_to_string(path) else {
            eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
            return ExitCode::FAILURE;
        };
        return run_file(&contents, args.tree);
    }

    if let Some(expression) = &args.expression {
        return if print_evaluation(expression, args.tree) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    match run_interactive(args.tree) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Prints the value of `source`, or its error, and reports whether it
/// evaluated.
fn print_evaluation(source: &str, show_tree: bool) -> bool {
    match parse(source) {
        Ok(tree) => {
            println!("{}", tree.value());
            if show_tree {
                print!("{tree}");
            }
            true
        },
        Err(e) => {
            eprintln!("{e}");
            false
        },
    }
}

/// Evaluates each non-blank line of `contents`, reporting failures with
/// their line number.
fn run_file(contents: &str, show_tree: bool) -> ExitCode {
    let mut failed = false;
    for (line, result) in parse_lines(contents) {
        match result {
            Ok(tree) => {
                println!("{}", tree.value());
                if show_tree {
                    print!("{tree}");
                }
            },
            Err(e) => {
                eprintln!("Error on line {line}: {e}");
                failed = true;
            },
        }
    }
    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Reads one expression per line until standard input is exhausted.
fn run_interactive(show_tree: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("Enter an arithmetic expression: ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }
        print_evaluation(line.trim_end_matches(['\n', '\r']), show_tree);
    }
}
