use std::fs;

use quill_core::FixtureGenerator;
use quill_core::domain::BlogPost;
use quill_core::ports::{FixtureSink, SinkError};
use tempfile::tempdir;

use super::{InMemorySink, JsonFileSink};
use crate::json::render_pretty;

fn posts() -> Vec<BlogPost> {
    FixtureGenerator::default().generate()
}

#[test]
fn test_file_sink_writes_rendered_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blogs_output.json");
    let sink = JsonFileSink::new(&path);

    sink.write(&posts()).unwrap();

    let written = fs::read(&path).unwrap();
    assert_eq!(written, render_pretty(&posts()).unwrap());

    let parsed: Vec<BlogPost> = serde_json::from_slice(&written).unwrap();
    assert_eq!(parsed.len(), 50);
    assert_eq!(sink.path(), path.as_path());
}

#[test]
fn test_file_sink_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blogs_output.json");
    fs::write(&path, "stale contents that are longer than an empty array").unwrap();

    JsonFileSink::new(&path).write(&[]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_file_sink_reports_unwritable_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("blogs_output.json");

    let err = JsonFileSink::new(&path).write(&posts()).unwrap_err();

    match err {
        SinkError::Io { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!path.exists());
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let first = InMemorySink::new();
    let second = InMemorySink::new();

    first.write(&posts()).unwrap();
    second.write(&posts()).unwrap();

    assert_eq!(first.contents(), second.contents());
}

#[test]
fn test_memory_sink_keeps_last_write() {
    let sink = InMemorySink::new();
    assert_eq!(sink.contents(), None);

    sink.write(&posts()).unwrap();
    sink.write(&[]).unwrap();

    assert_eq!(sink.contents(), Some(b"[]".to_vec()));
}

#[test]
fn test_document_properties() {
    let sink = InMemorySink::new();
    sink.write(&posts()).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&sink.contents().unwrap()).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 50);

    let timestamps: Vec<i64> = array
        .iter()
        .map(|p| p["timestamp"].as_i64().unwrap())
        .collect();
    assert!(timestamps.windows(2).all(|w| w[0] >= w[1]));

    for post in array {
        assert_eq!(post["tags"][0], post["category"]);
        assert!(post["authorRole"].is_string());
        assert!(post["readTime"].as_str().unwrap().ends_with(" min read"));
    }
}
