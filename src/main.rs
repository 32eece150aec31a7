mod app;
mod cli;
mod logging;

use std::env;
use std::io;
use std::process;

// Usage: echo <input_text> | mygrep -E <pattern>
// Exit codes: 0 = match, 1 = no match, 2 = usage, pattern or I/O error.
fn main() {
    let cfg = match cli::parse_args(env::args().skip(1)) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err:#}");
            eprintln!("{}", cli::USAGE);
            process::exit(2);
        }
    };

    if let Err(err) = logging::setup(cfg.debug) {
        eprintln!("warning: {err:#}");
    }

    let code = match app::run(&cfg, io::stdin().lock(), io::stdout().lock()) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("error: {err:#}");
            2
        }
    };
    process::exit(code);
}
