//! Tests for resolve and batch subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_resolve_fields_keep_order() {
    match parse(&[
        "bga",
        "resolve",
        "--field",
        "Expression=猫",
        "-f",
        "Reading=",
        "--field",
        "Query=a=b",
    ]) {
        CliCommand::Resolve {
            fields,
            save,
            media_dir,
            no_duplicate,
        } => {
            assert_eq!(
                fields,
                vec![
                    ("Expression".to_string(), "猫".to_string()),
                    ("Reading".to_string(), String::new()),
                    ("Query".to_string(), "a=b".to_string()),
                ]
            );
            assert!(!save);
            assert!(media_dir.is_none());
            assert!(!no_duplicate);
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_save_and_flags() {
    match parse(&[
        "bga",
        "resolve",
        "-f",
        "word=inu",
        "--save",
        "--media-dir",
        "/tmp/media",
        "--no-duplicate",
    ]) {
        CliCommand::Resolve {
            save,
            media_dir,
            no_duplicate,
            ..
        } => {
            assert!(save);
            assert_eq!(media_dir.as_deref(), Some(std::path::Path::new("/tmp/media")));
            assert!(no_duplicate);
        }
        _ => panic!("expected Resolve with --save"),
    }
}

#[test]
fn cli_parse_resolve_rejects_field_without_equals() {
    assert!(Cli::try_parse_from(["bga", "resolve", "--field", "word"]).is_err());
    assert!(Cli::try_parse_from(["bga", "resolve", "--field", "=value"]).is_err());
}

#[test]
fn cli_parse_batch() {
    match parse(&["bga", "batch", "notes.json"]) {
        CliCommand::Batch {
            path,
            output,
            media_dir,
            audio_field,
        } => {
            assert_eq!(path, std::path::PathBuf::from("notes.json"));
            assert!(output.is_none());
            assert!(media_dir.is_none());
            assert!(audio_field.is_none());
        }
        _ => panic!("expected Batch"),
    }
}

#[test]
fn cli_parse_batch_options() {
    match parse(&[
        "bga",
        "batch",
        "notes.json",
        "-o",
        "out.json",
        "--audio-field",
        "Audio",
        "--media-dir",
        "media",
    ]) {
        CliCommand::Batch {
            output,
            media_dir,
            audio_field,
            ..
        } => {
            assert_eq!(output.as_deref(), Some(std::path::Path::new("out.json")));
            assert_eq!(media_dir.as_deref(), Some(std::path::Path::new("media")));
            assert_eq!(audio_field.as_deref(), Some("Audio"));
        }
        _ => panic!("expected Batch with options"),
    }
}
