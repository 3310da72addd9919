pub mod caller;
pub mod json_or_default;
