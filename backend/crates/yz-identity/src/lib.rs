pub mod backfill;
pub mod error;
pub mod profile;
pub mod sync;

pub use backfill::{Backfill, BackfillOptions, BackfillReport};
pub use error::{IdentityError, Result};
pub use profile::ProfileService;
pub use sync::{IdentitySync, SyncOutcome};
