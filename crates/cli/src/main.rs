use std::io;

use anyhow::Context;
use clap::Parser;

use shelfview_cli::{Cli, Session};

fn main() -> anyhow::Result<()> {
    shelfview_observability::init();

    let cli = Cli::parse();
    let catalog = cli.load_catalog()?;
    let output = cli.output_format();

    let mut session = Session::new(catalog, cli.initial_filter())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    session.render(&mut out, output).context("failed to write table")?;

    if cli.interactive {
        let stdin = io::stdin();
        session.run(stdin.lock(), &mut out, output)?;
    }

    Ok(())
}
