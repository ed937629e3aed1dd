use std::io;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = word_scramble::run() {
        tracing::error!("Word scramble exited with error: {}", e);
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
