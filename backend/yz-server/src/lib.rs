pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    auth::{
        register::register, register_request::RegisterRequest,
        register_response::RegisterResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{caller::Caller, json_or_default::JsonOrDefault},
    profile::{
        profile_response::ProfileResponse,
        profiles::{get_profile, update_profile},
        update_profile_request::UpdateProfileRequest,
        update_profile_response::UpdateProfileResponse,
    },
    user_record_view::UserRecordView,
};
pub use app_state::AppState;

pub use crate::routes::build_router;
