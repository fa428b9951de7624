use std::process;

use cashlog::{cli, init, store::CsvStore};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), cli::CommandError> {
    let store = CsvStore::open_default()?;
    cli::run(&store)
}
