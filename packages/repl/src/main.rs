use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use cardfile_dispatch::DispatchConfig;
use cardfile_repl::{Backend, Menu, TerminalHost};
use cardfile_store::{ContactStore, Ephemeral, JsonFile, Persistence};

/// cardfile - a concurrent contact book
#[derive(Parser, Debug)]
#[command(name = "cardfile")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path of the JSON contact file
    #[arg(long, default_value = "contacts.json")]
    file: PathBuf,

    /// Request queue capacity for the default topology
    #[arg(long, default_value_t = 5)]
    capacity: usize,

    /// Use the message-passing topology instead of the shared queue
    #[arg(long)]
    wire: bool,

    /// Keep contacts in memory only, never touch the file
    #[arg(long)]
    ephemeral: bool,

    /// Log more (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let persist: Box<dyn Persistence> = if args.ephemeral {
        Box::new(Ephemeral::new())
    } else {
        Box::new(JsonFile::new(&args.file))
    };

    let backend = if args.wire {
        Backend::wire(persist)?
    } else {
        let store = Arc::new(ContactStore::open(persist)?);
        let config = DispatchConfig {
            capacity: args.capacity,
            ..DispatchConfig::default()
        };
        Backend::queue(store, config)?
    };

    let mut host = TerminalHost::new();
    Menu::new(backend).run(&mut host)?;
    Ok(())
}
