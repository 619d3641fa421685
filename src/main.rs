//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use env_logger::Env;
use little_league_stats::{
    cli::{Commands, LittleLeagueStats},
    commands::{
        handle_games, handle_ingest, handle_leaders, handle_parse, handle_reset, handle_seed,
        handle_totals, handle_watch, IngestParams, ParseParams, WatchParams,
    },
    Result,
};
use std::time::Duration;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = LittleLeagueStats::parse();

    let default_level = if app.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let db = app.db;
    match app.command {
        Commands::Parse { file, save, json } => handle_parse(ParseParams {
            file,
            save,
            as_json: json,
            db,
        })?,

        Commands::Ingest { paths, ocr, json } => handle_ingest(IngestParams {
            paths,
            ocr,
            as_json: json,
            db,
        })?,

        Commands::Watch {
            folder,
            interval,
            once,
            leaders,
            ocr,
        } => {
            handle_watch(WatchParams {
                folder,
                interval: Duration::from_secs(interval.max(1)),
                once,
                leaders,
                ocr,
                db,
            })
            .await?
        }

        Commands::Leaders {
            category,
            limit,
            json,
        } => handle_leaders(category, limit, json, db)?,

        Commands::Games { limit, json } => handle_games(limit, json, db)?,

        Commands::Totals { json } => handle_totals(json, db)?,

        Commands::Seed => handle_seed(db)?,

        Commands::Reset { yes } => handle_reset(yes, db)?,
    }

    Ok(())
}
