pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::identity_claims::IdentityClaims;
pub use models::profile_update::ProfileUpdate;
pub use models::provider::Provider;
pub use models::user_record::UserRecord;

#[cfg(test)]
mod tests;
