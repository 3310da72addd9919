use crate::{IdentityError, Result as IdentityErrorResult};

use yz_core::{ProfileUpdate, UserRecord};
use yz_db::UserRepository;

use log::info;

/// Owner reads and edits of the mirrored profile.
///
/// The caller's subject id must come from a verified token; this service
/// does no authentication of its own.
#[derive(Clone)]
pub struct ProfileService {
    users: UserRepository,
}

impl ProfileService {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    pub async fn get_profile(&self, firebase_uid: &str) -> IdentityErrorResult<UserRecord> {
        self.users
            .find_by_firebase_uid(firebase_uid)
            .await?
            .ok_or_else(|| IdentityError::not_found(firebase_uid))
    }

    /// Overwrite display name and photo; a field missing from `update` is
    /// cleared, not kept.
    pub async fn update_profile(
        &self,
        firebase_uid: &str,
        update: ProfileUpdate,
    ) -> IdentityErrorResult<UserRecord> {
        let (display_name, photo_url) = update.into_fields();

        let record = self
            .users
            .update_profile(firebase_uid, &display_name, &photo_url)
            .await?
            .ok_or_else(|| IdentityError::not_found(firebase_uid))?;

        info!("Profile updated for {}", firebase_uid);

        Ok(record)
    }
}
