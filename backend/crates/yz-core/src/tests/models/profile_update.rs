use crate::ProfileUpdate;

#[test]
fn test_into_fields_keeps_supplied_values() {
    let update = ProfileUpdate::new(Some("Alice".into()), Some("https://img/a.png".into()));

    assert_eq!(
        update.into_fields(),
        ("Alice".to_string(), "https://img/a.png".to_string())
    );
}

#[test]
fn test_into_fields_clears_missing_values() {
    let update = ProfileUpdate::new(Some("Alice".into()), None);

    assert_eq!(update.into_fields(), ("Alice".to_string(), String::new()));
    assert_eq!(
        ProfileUpdate::default().into_fields(),
        (String::new(), String::new())
    );
}
