use libris::config::LibrisConfig;
use libris::error::Result;
use libris::store::Library;
use std::path::PathBuf;

mod cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = LibrisConfig::load(&cwd).unwrap_or_default();
    let data_path = cwd.join(config.data_file());

    let mut library = Library::load(&data_path)?;
    cli::run(&mut library, &data_path)
}
