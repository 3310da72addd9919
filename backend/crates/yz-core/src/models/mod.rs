pub mod identity_claims;
pub mod profile_update;
pub mod provider;
pub mod user_record;
