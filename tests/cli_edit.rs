mod common;

use common::*;

fn env() -> TestEnv {
    TestEnv::new().with_document("sony-a7", SONY_A7)
}

#[test]
fn dry_run_leaves_document_untouched() {
    let env = env();
    let result = env.run(&["edit", "sony-a7", "rename", "1", "Movie", "--dry-run"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("[dry run, not saved]"));
    assert!(result.stdout.contains("Movie,Frame Rate"));
    assert_eq!(env.read_document("sony-a7"), SONY_A7);
}

#[test]
fn rename_keeps_icon_and_moves_help() {
    let env = env();
    let result = env.run(&["edit", "sony-a7", "rename", "0", "Still"]);
    assert!(result.success, "stderr: {}", result.stderr);

    let saved = env.read_document("sony-a7");
    assert!(saved.contains("<i name=\"\"cam\"\"/>Still\",Focus,AF Mode,,Single or continuous"));
    assert!(saved.contains("camera_menu_config"));

    let help = env.run(&["help", "sony-a7", "--path", "0.1.0"]);
    assert!(help.stdout.contains("Still > Focus > AF Mode"));
    assert!(help.stdout.contains("Single or continuous"));
}

#[test]
fn rename_to_existing_sibling_fails() {
    let env = env();
    let result = env.run(&["edit", "sony-a7", "rename", "0.1", "Exposure"]);
    assert!(!result.success);
    assert!(result.stderr.contains("already exists"));
    assert_eq!(env.read_document("sony-a7"), SONY_A7);
}

#[test]
fn add_child_uses_configured_placeholder() {
    let env = env().with_project_config("[editor]\nplaceholder = \"Untitled\"\n");
    let json = env
        .run(&["--json", "edit", "sony-a7", "add-child", "1.0"])
        .json();
    assert_eq!(json["selection"], "1.0.0");
    assert!(json["csv"].as_str().unwrap().contains("Video,Frame Rate,Untitled"));
}

#[test]
fn add_sibling_goes_next_to_selection() {
    let env = env();
    let json = env
        .run(&["--json", "edit", "sony-a7", "add-sibling", "0.0", "--dry-run"])
        .json();
    assert_eq!(json["selection"], "0.2");
    assert!(json["csv"].as_str().unwrap().contains("/>Photo\",New Item"));
}

#[test]
fn delete_removes_subtree() {
    let env = env();
    let result = env.run(&["edit", "sony-a7", "delete", "0"]);
    assert!(result.success, "stderr: {}", result.stderr);
    let saved = env.read_document("sony-a7");
    assert!(!saved.contains("Photo"));
    assert!(!saved.contains("Sensor sensitivity"));
    assert!(saved.contains("Video,Frame Rate"));
}

#[test]
fn root_cannot_be_deleted() {
    let result = env().run(&["edit", "sony-a7", "delete", ""]);
    assert!(!result.success);
    assert!(result.stderr.contains("the menu root cannot be deleted"));
}

#[test]
fn lossy_config_drops_help_on_save() {
    let env = env().with_project_config("[editor]\nfull_fidelity = false\n");
    let result = env.run(&["edit", "sony-a7", "rename", "1", "Movie"]);
    assert!(result.success);
    let saved = env.read_document("sony-a7");
    assert!(saved.starts_with("Level 1,Level 2,Level 3\n"));
    assert!(!saved.contains("Sensor sensitivity"));
}
