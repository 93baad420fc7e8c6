//! Handle the `init` command: config directory/file, database schema, and
//! optionally a demo dataset.

use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::initialize::{init_db, seed_sample_data};
use crate::db::pool::Database;
use crate::db::queries::{TaskFilters, query_task_costs};
use crate::errors::{AppError, AppResult};
use crate::report::aggregate::aggregate;

pub fn handle(cli: &Cli) -> AppResult<()> {
    let Commands::Init { seed } = &cli.command else {
        return Ok(());
    };

    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    let db = Database::open(&db_path)?;
    db.with_conn(init_db)?;

    println!("Config file : {}", Config::config_file().display());
    println!("Database    : {db_path}");

    if *seed {
        db.with_conn(seed_sample_data)?;
        println!("Seeded sample data.");

        // run the report pipeline once as a smoke check
        let report = db.with_conn(|conn| {
            let rows = query_task_costs(conn, &TaskFilters::default())?;
            Ok(aggregate(&rows))
        })?;
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::Server(e.to_string()))?;
        println!("{json}");
    }

    Ok(())
}
