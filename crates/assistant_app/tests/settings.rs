use std::fs;

use assistant_app::platform::settings;
use assistant_core::Lang;

#[test]
fn load_reads_the_ron_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".assistant.ron"),
        r#"(
    endpoint: "https://example.test/functions/v1/ai-text-helper",
    ui_language: "fr",
)"#,
    )
    .unwrap();

    let loaded = settings::load(dir.path());

    assert_eq!(
        loaded.endpoint,
        "https://example.test/functions/v1/ai-text-helper"
    );
    assert_eq!(loaded.ui_lang(), Lang::Fr);
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".assistant.ron"), "not ron at all }{").unwrap();

    let loaded = settings::load(dir.path());

    assert_eq!(loaded.ui_lang(), Lang::En);
}

#[test]
fn unknown_language_code_defaults_to_english() {
    let settings = settings::Settings {
        endpoint: String::new(),
        ui_language: "de".to_string(),
    };
    assert_eq!(settings.ui_lang(), Lang::En);
}
