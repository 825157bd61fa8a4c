use std::{
    fs,
    io::{self, BufRead},
    path::{Path, PathBuf},
};

use clap::Parser;
use frosting::{Options, interpreter::preprocess::preprocess, run_with};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// frosting is a tiny line-oriented scripting language with variables,
/// functions and loops.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to run. Without it, frosting reads and runs one line at a time
    /// from standard input.
    file: Option<PathBuf>,

    /// Logs the token list and the expression tree before running.
    #[arg(short, long)]
    debug: bool,

    /// Maximum depth of nested function calls.
    #[arg(long, default_value_t = Options::default().recursion_limit)]
    recursion_limit: usize,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.debug);

    let options = Options { debug:           args.debug,
                            recursion_limit: args.recursion_limit, };

    let code = match &args.file {
        Some(path) => run_file(path, &options),
        None => run_lines(&options),
    };

    std::process::exit(code);
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `--debug`.
fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                      EnvFilter::new(if debug {
                                                                         "debug"
                                                                     } else {
                                                                         "error"
                                                                     })
                                                  });

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                    .with_target(false))
                                  .with(filter)
                                  .init();
}

fn run_file(path: &Path, options: &Options) -> i32 {
    let script = match read_script(path) {
        Ok(script) => script,
        Err(message) => {
            eprintln!("{message}");
            return 1;
        },
    };

    match preprocess(&script) {
        Ok(source) => run_with(&source, options),
        Err(error) => {
            eprintln!("{error}");
            1
        },
    }
}

/// Reads a script, describing why it could not be read on failure.
fn read_script(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|error| match error.kind() {
                                io::ErrorKind::NotFound => {
                                    format!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                            path.display())
                                },
                                io::ErrorKind::InvalidData => {
                                    format!("The input file '{}' is not valid UTF-8 text.",
                                            path.display())
                                },
                                _ => format!("Failed to read the input file '{}': {error}",
                                             path.display()),
                            })
}

/// Runs each line of standard input on its own until one exits with a
/// non-zero code.
fn run_lines(options: &Options) -> i32 {
    for line in io::stdin().lock().lines() {
        let Ok(line) = line else {
            break;
        };

        let code = match preprocess(&line) {
            Ok(source) => run_with(&source, options),
            Err(error) => {
                eprintln!("{error}");
                1
            },
        };

        if code != 0 {
            eprintln!("Code exited with failure code {code}");
            return code;
        }
    }

    0
}
