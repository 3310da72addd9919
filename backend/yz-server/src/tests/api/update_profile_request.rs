use crate::UpdateProfileRequest;

use yz_core::ProfileUpdate;

use googletest::prelude::*;

#[test]
fn given_display_name_only_when_parsed_then_photo_is_absent() {
    // When
    let request: UpdateProfileRequest =
        serde_json::from_str(r#"{"displayName":"Alice"}"#).unwrap();
    let update = ProfileUpdate::from(request);

    // Then
    assert_that!(update.display_name.as_deref(), some(eq("Alice")));
    assert_that!(update.photo_url, none());
}

#[test]
fn given_photo_url_key_when_parsed_then_uses_upper_case_url() {
    // When
    let request: UpdateProfileRequest =
        serde_json::from_str(r#"{"photoURL":"data:image/png;base64,AAAA"}"#).unwrap();

    // Then
    assert_that!(
        request.photo_url.as_deref(),
        some(eq("data:image/png;base64,AAAA"))
    );
}
