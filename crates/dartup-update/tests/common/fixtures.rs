//! In-memory test fixtures
//!
//! ZIP archives are assembled with `ZipWriter` into byte vectors so tests
//! never depend on checked-in binary files.

use std::io::{Cursor, Write};

use zip::write::{SimpleFileOptions, ZipWriter};

/// Build a ZIP archive from (entry name, contents) pairs
///
/// Entry names ending in `/` become directory entries.
pub fn zip_with_entries(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut writer = ZipWriter::new(Cursor::new(&mut buf));
        for (name, contents) in entries {
            if name.ends_with('/') {
                writer
                    .add_directory(name.trim_end_matches('/'), SimpleFileOptions::default())
                    .unwrap();
            } else {
                writer
                    .start_file(*name, SimpleFileOptions::default())
                    .unwrap();
                writer.write_all(contents).unwrap();
            }
        }
        writer.finish().unwrap();
    }
    buf
}

/// A plausible SDK archive: entries rooted at `dart-sdk/`
pub fn sdk_zip() -> Vec<u8> {
    zip_with_entries(&[
        ("dart-sdk/", b"".as_slice()),
        ("dart-sdk/bin/dart", b"#!/bin/sh\necho dart\n".as_slice()),
        ("dart-sdk/version", b"1.2.3\n".as_slice()),
    ])
}

/// A plausible Dartium archive: a versioned root directory wrapping the
/// browser files
pub fn dartium_zip(root: &str) -> Vec<u8> {
    let dir = format!("{}/", root);
    let chrome = format!("{}/chrome", root);
    let pak = format!("{}/locales/en.pak", root);
    zip_with_entries(&[
        (dir.as_str(), b"".as_slice()),
        (chrome.as_str(), b"chrome binary".as_slice()),
        (pak.as_str(), b"en".as_slice()),
    ])
}

/// A plausible docs archive
pub fn docs_zip() -> Vec<u8> {
    zip_with_entries(&[
        ("api-docs/", b"".as_slice()),
        ("api-docs/index.html", b"<html></html>".as_slice()),
    ])
}

/// A latest-version manifest body with an extra opaque field
pub fn manifest(version: &str, revision: &str) -> serde_json::Value {
    serde_json::json!({
        "version": version,
        "revision": revision,
        "date": "2014-07-01"
    })
}
