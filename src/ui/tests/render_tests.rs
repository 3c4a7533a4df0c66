use crate::core::types::OutputFormat;
use crate::profile::Profile;
use crate::ui::render::ProfileRenderer;
use serde_json::Value;

#[test]
fn text_record_is_profile_render() {
    let profile = Profile::new("TestUser");
    let out = ProfileRenderer::new(OutputFormat::Text)
        .record(&profile)
        .unwrap();
    assert_eq!(out, profile.render());
}

#[test]
fn json_record_is_two_space_indented_in_key_order() {
    let profile = Profile::new("TestUser");
    let out = ProfileRenderer::new(OutputFormat::Json)
        .record(&profile)
        .unwrap();
    assert!(out.starts_with("{\n  \"name\": \"TestUser\",\n  \"github\": "));
    let keys = ["\"name\"", "\"github\"", "\"skills\"", "\"projects\"", "\"created_at\""];
    let positions: Vec<usize> = keys.iter().map(|k| out.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn json_keeps_non_ascii_literal() {
    let mut profile = Profile::new("Иван");
    profile.add_project("Проект");
    let out = ProfileRenderer::new(OutputFormat::Json)
        .record(&profile)
        .unwrap();
    assert!(out.contains("\"name\": \"Иван\""));
    assert!(out.contains("\"Проект\""));
    assert!(!out.contains("\\u"));
}

#[test]
fn skills_text_is_header_and_bullets() {
    let out = ProfileRenderer::new(OutputFormat::Text)
        .skills(&Profile::new("TestUser"))
        .unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "🛠️ Skills of TestUser:");
    assert_eq!(lines[1], "  • Python");
    assert_eq!(lines.len(), 7);
}

#[test]
fn skills_json_has_single_key() {
    let out = ProfileRenderer::new(OutputFormat::Json)
        .skills(&Profile::default())
        .unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 1);
    assert_eq!(obj["skills"].as_array().unwrap().len(), 6);
}

#[test]
fn projects_views_mirror_skills() {
    let profile = Profile::default();
    let text = ProfileRenderer::new(OutputFormat::Text)
        .projects(&profile)
        .unwrap();
    assert!(text.starts_with("📂 Projects of kogriv:\n  • kgrv"));

    let json = ProfileRenderer::new(OutputFormat::Json)
        .projects(&profile)
        .unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["projects"].as_array().unwrap().len(), 3);
    assert!(value.get("skills").is_none());
}
