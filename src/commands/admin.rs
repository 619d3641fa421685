//! Database maintenance: sample data and reset.

use crate::{
    storage::{seed_sample_data, GameStore},
    Result,
};
use std::path::PathBuf;

use super::open_store;

pub fn handle_seed(db: Option<PathBuf>) -> Result<()> {
    let store = open_store(db)?;
    let games = seed_sample_data(&store)?;
    println!("✓ Sample season loaded ({} games)", games);
    Ok(())
}

pub fn handle_reset(yes: bool, db: Option<PathBuf>) -> Result<()> {
    if !yes {
        println!("This deletes every game and batting line. Re-run with --yes to confirm.");
        return Ok(());
    }

    let store = open_store(db)?;
    store.clear_all()?;
    println!("✓ Database cleared successfully!");
    Ok(())
}
