
use crate::{FirebaseClaims, SignInInfo};

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
pub(crate) const TEST_PROJECT_ID: &str = "yapperszone-test";

pub(crate) fn valid_claims() -> FirebaseClaims {
    let now = chrono::Utc::now().timestamp();
    FirebaseClaims {
        sub: "abc".to_string(),
        email: Some("a@b.com".to_string()),
        name: Some("A".to_string()),
        picture: Some(String::new()),
        firebase: SignInInfo {
            sign_in_provider: Some("google.com".to_string()),
        },
        exp: now + 3600,
        iat: now,
        aud: TEST_PROJECT_ID.to_string(),
        iss: format!("https://securetoken.google.com/{}", TEST_PROJECT_ID),
    }
}
