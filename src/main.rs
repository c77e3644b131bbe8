//! Lispy shell.
//!
//! Run interactively as:   `RUST_LOG=debug cargo run`.
//! Evaluate once as:       `cargo run -- -e "(+ 1 2)"`.

use std::path::Path;

use clap::{Arg, ArgAction, Command};
use log::LevelFilter;

use lispy::cli::{Repl, ReplOptions};
use lispy::{Config, Lispy};


fn main() -> Result<(), String> {
    // Setup logging.
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = Command::new("lispy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("S-expression calculator")
        .arg(
            Arg::new("eval")
                .short('e')
                .long("eval")
                .value_name("EXPR")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(String))
                .conflicts_with("file")
                .help("Evaluate a single expression and exit"),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("PATH")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(String))
                .help("Evaluate each line of a file and exit"),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .value_name("N")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(usize))
                .help("Fractional digits printed for floats [default: 6]"),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .value_name("N")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(usize))
                .help("Deepest nesting accepted by the parser [default: 128]"),
        )
        .arg(
            Arg::new("tree")
                .short('t')
                .long("tree")
                .action(ArgAction::SetTrue)
                .help("Print the parse tree of each line"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Don't print the banner"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .help("Disable colored output"),
        )
        .get_matches();

    let mut config = Config::default();
    if let Some(precision) = matches.get_one::<usize>("precision") {
        config = config.with_float_precision(*precision);
    }
    if let Some(max_depth) = matches.get_one::<usize>("max-depth") {
        config = config.with_max_depth(*max_depth);
    }
    if matches.get_flag("no-color") {
        colored::control::set_override(false);
    }

    let options = ReplOptions {
        show_tree: matches.get_flag("tree"),
        quiet: matches.get_flag("quiet"),
    };
    let mut repl = Repl::new(Lispy::new(config), options);

    if let Some(expr) = matches.get_one::<String>("eval") {
        if !repl.eval_line(expr).is_ok() {
            std::process::exit(1);
        }
        return Ok(());
    }
    if let Some(path) = matches.get_one::<String>("file") {
        if !repl.run_file(Path::new(path))? {
            std::process::exit(1);
        }
        return Ok(());
    }

    repl.run()
}
