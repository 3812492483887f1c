//! Reusable menu documents and bundles.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// A built-in document with a help column, an icon and a config block
pub const SONY_A7: &str = "\
Level 1,Level 2,Level 3,,help
<i name=\"cam\"/>Photo,Exposure,ISO,,Sensor sensitivity
,,Shutter,,
,Focus,AF Mode,,Single or continuous
Video,Frame Rate,,,
camera_menu_config,
brand,Sony
model,A7 IV
css_file,sony
icon:cam,AQID
";

pub const SONY_CSS: &str = ".menu { color: orange; }";

/// A built-in document without a stylesheet
pub const CANON_R5: &str = "\
Level 1,Level 2
Shooting,Drive
Setup,Language
camera_menu_config,
brand,Canon
model,R5
";

/// Zip the given files in memory
pub fn zip_of(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in files {
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(data).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

/// A minimal importable bundle
pub fn camera_bundle() -> Vec<u8> {
    zip_of(&[
        ("fuji/menu.csv", b"Level 1,Level 2\nI.Q.,Film Simulation\nAF/MF,Focus Mode\n"),
        ("fuji/fuji.css", b".fuji {}"),
        ("__MACOSX/fuji/._menu.csv", b"junk"),
    ])
}
