pub mod profile_response;
pub mod profiles;
pub mod update_profile_request;
pub mod update_profile_response;
