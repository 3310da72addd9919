mod profile_update;
mod provider;
mod user_record;
