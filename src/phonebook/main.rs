use clap::Parser;
use phonebook::api::Phonebook;
use phonebook::config::PhonebookConfig;
use phonebook::error::Result;
use phonebook::logging::{init_logging, Verbosity};
use phonebook::store::fs::FileStore;
use std::io;
use tracing::debug;

mod cli;
use cli::{run_session, Cli};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    let config = load_config(&cli)?;
    debug!(?config, "resolved configuration");

    let mut book = Phonebook::open(FileStore::new(config.data_file.clone()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut book, stdin.lock(), stdout.lock(), config.page_size)
}

fn load_config(cli: &Cli) -> Result<PhonebookConfig> {
    let config = match cli.config.clone().or_else(PhonebookConfig::default_path) {
        Some(path) => PhonebookConfig::load(&path)?,
        None => PhonebookConfig::default(),
    };
    config.with_overrides(cli.file.clone(), cli.page_size)
}
