use std::io;

use eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use synacor_coins::Puzzle;

fn main() -> Result<()> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // _ + _ * _^2 + _^3 - _ = 399
    let puzzle = Puzzle::default();
    info!(values = ?puzzle.values(), goal = puzzle.target(), "solving");

    let arrangement = match puzzle.solve()? {
        Some(arrangement) => arrangement,
        None => {
            warn!(goal = puzzle.target(), "no ordering of the coins balances the equation");
            return Ok(());
        }
    };

    println!("{}", arrangement);

    if let Some(line) = arrangement.coin_line() {
        println!("{}", line);
    }

    Ok(())
}
