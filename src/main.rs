// src/main.rs

use mint::fs::RealFileSystem;
use mint::notify::StderrNotifier;
use mint::{Invocation, cli, logging, report, run};

fn main() {
    let args = cli::parse();
    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("mint: {err:?}");
    }

    let result = Invocation::from_args(args).and_then(|inv| run(&inv, &RealFileSystem));
    std::process::exit(report(result, &StderrNotifier));
}
