use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Identity token from the client SDK; missing is treated like empty
    #[serde(default)]
    pub id_token: Option<String>,
}
