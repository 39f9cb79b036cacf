use nodist_shim::{Config, Invocation};
use nodist_shim_bin::{ChildOutcome, Error, diagnostic, init_logging, terminate_like, try_run};

fn main() {
    match run() {
        Ok(outcome) => terminate_like(outcome),
        Err(e) => {
            eprintln!("{}", diagnostic(&e));
            std::process::exit(e.exit_code());
        }
    }
}

fn run() -> Result<ChildOutcome, Error> {
    let config = Config::from_env()?;
    init_logging(config.get_log_filter());
    let invocation = Invocation::from_env()?;
    try_run(&config, &invocation)
}
