//! Tests for TextReplaceService

mod common;

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use cltools::application::services::{InFileReplaceOptions, TextReplaceService};
use cltools::application::ApplicationError;
use cltools::config::LineEnding;
use cltools::infrastructure::traits::RealFileService;

use common::MemoryFileService;

fn options(find: &str, replace_with: &str, input: &str) -> InFileReplaceOptions {
    InFileReplaceOptions {
        find: find.to_string(),
        replace_with: replace_with.to_string(),
        parse_as_newline: None,
        input: PathBuf::from(input),
        output: None,
    }
}

#[test]
fn given_file_with_matches_when_replacing_then_overwrites_input() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("notes.txt");
    fs::write(&input, "foo bar foo\nbaz foo\n").unwrap();

    let service = TextReplaceService::new(Arc::new(RealFileService::default()), LineEnding::Lf);

    // Act
    let report = service
        .replace(&options("foo", "qux", input.to_str().unwrap()))
        .unwrap();

    // Assert
    assert_eq!(report.replacements, 3);
    assert_eq!(report.target, input);
    assert_eq!(fs::read_to_string(&input).unwrap(), "qux bar qux\nbaz qux\n");
}

#[test]
fn given_out_file_when_replacing_then_leaves_input_untouched() {
    // Arrange
    let fs_service = Arc::new(MemoryFileService::with_file("in.txt", "a-b-c"));
    let service = TextReplaceService::new(fs_service.clone(), LineEnding::Lf);
    let mut opts = options("-", "+", "in.txt");
    opts.output = Some(PathBuf::from("out.txt"));

    // Act
    let report = service.replace(&opts).unwrap();

    // Assert
    assert_eq!(report.replacements, 2);
    assert_eq!(fs_service.get("in.txt").as_deref(), Some("a-b-c"));
    assert_eq!(fs_service.get("out.txt").as_deref(), Some("a+b+c"));
}

#[test]
fn given_newline_token_when_replacing_then_token_becomes_line_ending() {
    // Arrange
    let fs_service = Arc::new(MemoryFileService::with_file("list.txt", "a;b;c"));
    let service = TextReplaceService::new(fs_service.clone(), LineEnding::Crlf);
    let mut opts = options(";", "<nl>", "list.txt");
    opts.parse_as_newline = Some("<nl>".to_string());

    // Act
    service.replace(&opts).unwrap();

    // Assert
    assert_eq!(fs_service.get("list.txt").as_deref(), Some("a\r\nb\r\nc"));
}

#[test]
fn given_newline_token_in_find_when_replacing_then_matches_line_breaks() {
    let fs_service = Arc::new(MemoryFileService::with_file("lines.txt", "a\nb\nc"));
    let service = TextReplaceService::new(fs_service.clone(), LineEnding::Lf);
    let mut opts = options("\\n", ",", "lines.txt");
    opts.parse_as_newline = Some("\\n".to_string());

    let report = service.replace(&opts).unwrap();

    assert_eq!(report.replacements, 2);
    assert_eq!(fs_service.get("lines.txt").as_deref(), Some("a,b,c"));
}

#[test]
fn given_no_matches_when_replacing_in_place_then_does_not_write() {
    let fs_service = Arc::new(MemoryFileService::with_file("in.txt", "unchanged"));
    let service = TextReplaceService::new(fs_service.clone(), LineEnding::Lf);

    let report = service.replace(&options("zzz", "y", "in.txt")).unwrap();

    assert_eq!(report.replacements, 0);
    assert!(!report.written);
    assert_eq!(fs_service.get("in.txt").as_deref(), Some("unchanged"));
}

#[test]
fn given_empty_find_when_replacing_then_invalid_argument() {
    let fs_service = Arc::new(MemoryFileService::with_file("in.txt", "abc"));
    let service = TextReplaceService::new(fs_service, LineEnding::Lf);

    let err = service.replace(&options("", "y", "in.txt")).unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::InvalidArgument { name: "find", .. }
    ));
}

#[test]
fn given_missing_input_when_replacing_then_file_not_found_with_path() {
    let service = TextReplaceService::new(Arc::new(MemoryFileService::default()), LineEnding::Lf);

    let err = service.replace(&options("a", "b", "missing.txt")).unwrap_err();

    match err {
        ApplicationError::FileNotFound(path) => assert_eq!(path, PathBuf::from("missing.txt")),
        other => panic!("unexpected error: {other:?}"),
    }
}
