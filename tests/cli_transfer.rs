mod common;

use std::fs;

use common::*;

#[test]
fn import_list_export_remove() {
    let env = TestEnv::new();
    let bundle = env.write_file("fuji.zip", &camera_bundle());

    let imported = env
        .run(&["--json", "import", bundle.to_str().unwrap(), "--name", "Fujifilm X-T5"])
        .json();
    assert_eq!(imported["type"], "import");
    let id = imported["camera"]["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("custom-"));
    assert_eq!(imported["camera"]["brand"], "Fujifilm");
    assert_eq!(imported["camera"]["model"], "X-T5");
    assert!(env.store_path().exists());

    let list = env.run(&["list"]);
    assert!(list.stdout.contains("Fujifilm X-T5"));
    assert!(list.stdout.contains("(custom)"));

    let out = env.work_dir().join("out.zip");
    let exported = env.run(&["export", &id, "-o", out.to_str().unwrap()]);
    assert!(exported.success, "stderr: {}", exported.stderr);
    let bytes = fs::read(&out).unwrap();
    let archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let mut names: Vec<_> = archive.file_names().map(str::to_string).collect();
    names.sort();
    assert_eq!(names, vec!["fuji.css", "fuji.csv"]);

    let removed = env.run(&["remove", &id]);
    assert!(removed.success);
    assert!(removed.stdout.contains("Removed Fujifilm X-T5"));
    assert!(!env.run(&["list"]).stdout.contains("Fujifilm"));
}

#[test]
fn import_rejects_bundle_without_stylesheet() {
    let env = TestEnv::new();
    let bundle = env.write_file("bad.zip", &zip_of(&[("menu.csv", b"Level 1\nA\n")]));
    let result = env.run(&["import", bundle.to_str().unwrap()]);
    assert!(!result.success);
    assert!(result.stderr.contains("No CSS file found in archive"));
    assert!(!env.store_path().exists());
}

#[test]
fn import_rejects_two_csv_files() {
    let env = TestEnv::new();
    let bundle = env.write_file(
        "bad.zip",
        &zip_of(&[("a.csv", b"x"), ("b.csv", b"y"), ("a.css", b"z")]),
    );
    let result = env.run(&["import", bundle.to_str().unwrap()]);
    assert!(!result.success);
    assert!(result.stderr.contains("Multiple CSV files found in archive"));
}

#[test]
fn builtin_cameras_cannot_be_removed() {
    let env = TestEnv::new().with_document("canon-r5", CANON_R5);
    let result = env.run(&["remove", "canon-r5"]);
    assert!(!result.success);
    assert!(result.stderr.contains("built in"));
    assert!(env.data_dir().join("canon-r5.csv").exists());
}

#[test]
fn export_builtin_writes_default_file_name() {
    let env = TestEnv::new()
        .with_document("sony-a7", SONY_A7)
        .with_stylesheet("sony", SONY_CSS);
    let result = env.run(&["export", "sony-a7"]);
    assert!(result.success, "stderr: {}", result.stderr);

    let bytes = fs::read(env.work_dir().join("sony-a7.zip")).unwrap();
    let archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let mut names: Vec<_> = archive.file_names().map(str::to_string).collect();
    names.sort();
    assert_eq!(names, vec!["cam.png", "sony.css", "sony.csv"]);
}

#[test]
fn export_without_stylesheet_fails() {
    let env = TestEnv::new().with_document("canon-r5", CANON_R5);
    let result = env.run(&["export", "canon-r5"]);
    assert!(!result.success);
    assert!(result.stderr.contains("stylesheet for camera 'canon-r5' not found"));
}

#[test]
fn corrupted_store_is_reported() {
    let env = TestEnv::new();
    fs::create_dir_all(env.store_path().parent().unwrap()).unwrap();
    fs::write(env.store_path(), "this is = = not toml").unwrap();
    let result = env.run(&["list"]);
    assert!(!result.success);
    assert!(result.stderr.contains("camera store corrupted"));
}
