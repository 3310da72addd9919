//! One-off repair of records written before login timestamps were tracked.

use crate::Result as IdentityErrorResult;

use yz_db::UserRepository;

use chrono::Utc;
use log::{error, info};

#[derive(Debug, Clone, Copy, Default)]
pub struct BackfillOptions {
    /// Continue past records that fail to save
    pub keep_going: bool,
    /// Report what would change without writing
    pub dry_run: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackfillReport {
    /// Records found missing a timestamp
    pub scanned: usize,
    /// Records stamped (or that would be, on a dry run)
    pub updated: usize,
    pub failed: usize,
}

impl BackfillReport {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

pub struct Backfill {
    users: UserRepository,
    options: BackfillOptions,
}

impl Backfill {
    pub fn new(users: UserRepository, options: BackfillOptions) -> Self {
        Self { users, options }
    }

    /// Stamp every missing `created_at` / `last_login_at` with one `now` per
    /// record.
    ///
    /// Without `keep_going` the first save failure is returned as the error
    /// and later records are left untouched.
    pub async fn run(&self) -> IdentityErrorResult<BackfillReport> {
        let pending = self.users.find_missing_timestamps().await?;
        let mut report = BackfillReport {
            scanned: pending.len(),
            ..BackfillReport::default()
        };

        info!(
            "Backfill: {} record(s) missing timestamps{}",
            report.scanned,
            if self.options.dry_run { " (dry run)" } else { "" }
        );

        for record in pending {
            if !record.needs_backfill() {
                continue;
            }

            if self.options.dry_run {
                info!("Would update {}", record.email);
                report.updated += 1;
                continue;
            }

            match self.users.fill_missing_timestamps(record.id, Utc::now()).await {
                Ok(()) => {
                    info!("Updated {}", record.email);
                    report.updated += 1;
                }
                Err(e) if self.options.keep_going => {
                    error!("Failed to update {}: {}", record.email, e);
                    report.failed += 1;
                }
                Err(e) => {
                    error!("Failed to update {}, aborting: {}", record.email, e);
                    return Err(e.into());
                }
            }
        }

        info!(
            "Backfill complete: {} updated, {} failed",
            report.updated, report.failed
        );

        Ok(report)
    }
}
