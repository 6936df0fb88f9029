use wordrank_core::logging;

mod cli;

fn main() {
    // Log to the XDG state dir when possible, otherwise stderr.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = cli::run_from_args() {
        eprintln!("wordrank error: {:#}", err);
        std::process::exit(1);
    }
}
