// src/main.rs

use check_dir_changes::report::Reporter;
use check_dir_changes::{cli, logging, run};

fn main() {
    let args = cli::parse_or_exit();

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("check_dir_changes: failed to initialise logging: {err:?}");
    }

    let code = match run(&args) {
        Ok(report) => Reporter::new(args.log_file.clone()).emit(&report),
        Err(err) => {
            // Failures still speak on stdout: that is the line the
            // scheduler records next to the exit status. `:#` folds the
            // cause chain into the one line.
            println!("{err:#}");
            err.exit_code()
        }
    };

    std::process::exit(code);
}
