use std::process;

use budget_tracker::{cli, init};

fn main() {
    init();

    if let Err(err) = cli::run_shell() {
        cli::output::error(format!("Error: {err}"));
        process::exit(1);
    }
}
