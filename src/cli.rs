//! Interactive shell around a Lispy session.
//!
//! Every input line produces exactly one line of output (plus its parse tree
//! when asked for).

use std::fmt::Write;
use std::fs;
use std::path::Path;

use colored::*;
use log::info;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use crate::outcome::EvalOutcome;
use crate::Lispy;

pub const PROMPT: &str = "lispy> ";


#[derive(Clone, Debug, Default)]
pub struct ReplOptions {
    pub show_tree: bool,
    pub quiet: bool,
}

pub struct Repl {
    editor: Editor<()>,
    lispy: Lispy,
    options: ReplOptions,
}

impl Repl {
    pub fn new(lispy: Lispy, options: ReplOptions) -> Self {
        Self {
            editor: Editor::<()>::new(),
            lispy,
            options,
        }
    }

    pub fn banner() -> String {
        format!(
            "Lispy Version {}\nPress Ctrl+c to exit\n",
            env!("CARGO_PKG_VERSION")
        )
    }

    /// Reads lines until ^C or ^D.
    pub fn run(&mut self) -> Result<(), String> {
        if !self.options.quiet {
            println!("{}", Self::banner());
        }

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(line.as_str());
                    }
                    self.eval_line(&line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    return Ok(());
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    return Ok(());
                }
                Err(err) => {
                    println!("[Readline Error]: {:?}", err);
                    println!("");
                    continue;
                }
            }
        }
    }

    /// Evaluates each non-blank line of a file, echoing it first. Returns
    /// whether every line succeeded.
    pub fn run_file(&self, path: &Path) -> Result<bool, String> {
        info!("Evaluating {}", path.display());
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => return Err(format!("Reading {} failed: {}", path.display(), err)),
        };

        let mut all_ok = true;
        for line in source.lines().filter(|l| !l.trim().is_empty()) {
            println!("> {}", line);
            all_ok &= self.eval_line(line).is_ok();
        }
        Ok(all_ok)
    }

    /// Evaluates and prints one line.
    pub fn eval_line(&self, line: &str) -> EvalOutcome {
        if self.options.show_tree {
            if let Ok(tree) = self.lispy.parse(line) {
                print!("{}", tree);
            }
        }

        let outcome = self.lispy.parse_and_evaluate(line);
        println!("{}", self.colorize(&outcome));
        outcome
    }

    pub fn colorize(&self, outcome: &EvalOutcome) -> String {
        fn paren_color(depth: usize) -> (u8, u8, u8) {
            match depth % 6 {
                0 => (0, 255, 204),
                1 => (204, 51, 0),
                2 => (153, 255, 102),
                3 => (153, 102, 255),
                4 => (255, 255, 102),
                _ => (255, 179, 179),
            }
        }

        let precision = *self.lispy.config().float_precision();
        match outcome {
            EvalOutcome::Value(value) => {
                let mut out = String::new();
                let res = value.write_list(
                    &mut out,
                    0,
                    &mut |w, leaf, _| leaf.write_leaf(w, precision),
                    &mut |w, paren, depth| {
                        let (r, g, b) = paren_color(depth);
                        write!(w, "{}", paren.truecolor(r, g, b))
                    },
                );
                match res {
                    Ok(()) => out,
                    Err(_) => self.lispy.render(outcome),
                }
            }
            _ => self.lispy.render(outcome).red().to_string(),
        }
    }
}
