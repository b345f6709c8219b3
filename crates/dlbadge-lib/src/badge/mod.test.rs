use super::*;

#[test]
fn test_json_bytes_use_camel_case_schema() {
    let artifact = BadgeArtifact::Json(ShieldsBadge {
        schema_version: 1,
        label: DEFAULT_LABEL.to_string(),
        message: "120".to_string(),
        color: DEFAULT_COLOR.to_string(),
    });

    let bytes = artifact.to_bytes().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "schemaVersion": 1,
            "label": "downloads",
            "message": "120",
            "color": "blue"
        })
    );

    let text = String::from_utf8(bytes).unwrap();
    assert!(text.starts_with("{\n  \"schemaVersion\": 1,"));
}

#[test]
fn test_artifact_format() {
    assert_eq!(BadgeArtifact::Svg(String::new()).format(), BadgeFormat::Svg);
    let json = render::render(0, &BadgeStyle::default(), BadgeFormat::Json);
    assert_eq!(json.format(), BadgeFormat::Json);
}
