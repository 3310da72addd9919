use serde::Deserialize;

/// Owner-editable profile fields.
///
/// A field left as `None` is cleared to an empty string when applied,
/// it is not kept at its previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

impl ProfileUpdate {
    pub fn new(display_name: Option<String>, photo_url: Option<String>) -> Self {
        Self {
            display_name,
            photo_url,
        }
    }

    /// Resolve to the stored `(display_name, photo_url)` pair
    pub fn into_fields(self) -> (String, String) {
        (
            self.display_name.unwrap_or_default(),
            self.photo_url.unwrap_or_default(),
        )
    }
}
