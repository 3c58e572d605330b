use std::{io::{self, BufRead, Write}, process::exit};
use anyhow::Result;
use clap::{Parser, Subcommand};

mod builder;
mod logging;
mod printer;


#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print an integer array on one line, comma separated
    Print {
        /// Values to print; the built-in array `1 4 6 8 10 101 3033` is used when none are given
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,
    },
    /// Read a size from stdin, then build and print `0..size`
    Build {
        /// Most bytes the build may allocate
        #[arg(long, default_value_t = builder::DEFAULT_HEAP_LIMIT)]
        heap_limit: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = logging::init()
        .map_err(anyhow::Error::from)
        .and_then(|()| run(cli, &mut io::stdin().lock(), &mut io::stdout().lock()));
    exit(exit_code(result));
}

/// Reports a failed run on stderr and picks the process exit code.
fn exit_code(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e}");
            1
        },
    }
}

fn run<R: BufRead, W: Write>(cli: Cli, input: &mut R, out: &mut W) -> Result<()> {
    match cli.command {
        Command::Print { values } => {
            if values.is_empty() {
                printer::run_arrays(out)?;
            } else {
                printer::print_int_array(out, &values)?;
            }
            writeln!(out)?;
        },
        Command::Build { heap_limit } => {
            let config = builder::Config { heap_limit };
            builder::run(input, out, &config)?;
        },
    }

    Ok(())
}
