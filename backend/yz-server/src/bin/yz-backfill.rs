//! Stamp missing created_at / last_login_at on legacy user records.
//!
//! Exits 0 when every record was repaired, 1 otherwise.

use yz_identity::{Backfill, BackfillOptions};
use yz_server::error::Result as ServerErrorResult;
use yz_server::logger;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[derive(Parser, Debug)]
#[command(name = "yz-backfill")]
#[command(about = "Backfill missing login timestamps on user records", long_about = None)]
#[command(version)]
struct Cli {
    /// Continue past records that fail to save instead of aborting
    #[arg(long)]
    keep_going: bool,

    /// Report what would change without writing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            // The logger may not be up yet
            eprintln!("yz-backfill failed: {}", e);
            error!("yz-backfill failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ServerErrorResult<bool> {
    dotenvy::dotenv().ok();

    let config = yz_config::Config::load()?;
    config.database.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    let database_path = config.database_path()?;
    info!("Backfilling {}", database_path.display());
    let pool = yz_db::connect(&database_path).await?;

    let options = BackfillOptions {
        keep_going: cli.keep_going,
        dry_run: cli.dry_run,
    };
    let result = Backfill::new(yz_db::UserRepository::new(pool.clone()), options)
        .run()
        .await;
    pool.close().await;

    let report = result?;
    Ok(report.is_success())
}
