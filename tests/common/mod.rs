use lispy::prelude::*;


pub fn setup() -> Lispy {
    setup_with(Config::default())
}

pub fn setup_with(config: Config) -> Lispy {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}

    Lispy::new(config)
}

/// Rendered output of each line, as the shell would print it.
pub fn results<S: AsRef<str>>(lispy: &Lispy, lines: S) -> Vec<String> {
    lines
        .as_ref()
        .lines()
        .map(|line| lispy.render(&lispy.parse_and_evaluate(line.trim())))
        .collect()
}

pub fn outcome<S: AsRef<str>>(lispy: &Lispy, line: S) -> EvalOutcome {
    lispy.parse_and_evaluate(line.as_ref())
}
