//! Tests for LineRemovalService

mod common;

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use rstest::rstest;
use tempfile::TempDir;

use cltools::application::services::{LineRemovalService, RemoveLinesOptions};
use cltools::application::ApplicationError;
use cltools::infrastructure::traits::RealFileService;

use common::MemoryFileService;

const LOG: &str = "INFO start\nDEBUG cache miss\nWARN slow\nDEBUG cache hit\nINFO done\n";

fn options(patterns: &[&str], conjunctive: bool) -> RemoveLinesOptions {
    RemoveLinesOptions {
        patterns: patterns.iter().map(|p| p.to_string()).collect(),
        conjunctive,
        input: PathBuf::from("app.log"),
        output: None,
    }
}

#[rstest]
#[case(&["^DEBUG"], false, "INFO start\nWARN slow\nINFO done\n")]
#[case(&["^DEBUG", "^WARN"], false, "INFO start\nINFO done\n")]
#[case(&["^DEBUG", "hit$"], true, "INFO start\nDEBUG cache miss\nWARN slow\nINFO done\n")]
#[case(&["nomatch"], false, LOG)]
fn given_patterns_when_removing_then_keeps_non_matching_lines(
    #[case] patterns: &[&str],
    #[case] conjunctive: bool,
    #[case] expected: &str,
) {
    // Arrange
    let fs_service = Arc::new(MemoryFileService::with_file("app.log", LOG));
    let service = LineRemovalService::new(fs_service.clone());

    // Act
    service.remove(&options(patterns, conjunctive)).unwrap();

    // Assert
    assert_eq!(fs_service.get("app.log").as_deref(), Some(expected));
}

#[test]
fn given_removal_when_done_then_reports_counts_and_reads_each_line_once() {
    let fs_service = Arc::new(MemoryFileService::with_file("app.log", LOG));
    let service = LineRemovalService::new(fs_service.clone());

    let report = service.remove(&options(&["DEBUG"], false)).unwrap();

    assert_eq!(report.removed, 2);
    assert_eq!(report.kept, 3);
    assert_eq!(fs_service.line_reads(), 5);
}

#[test]
fn given_empty_pattern_entries_when_removing_then_they_are_ignored() {
    let fs_service = Arc::new(MemoryFileService::with_file("app.log", LOG));
    let service = LineRemovalService::new(fs_service.clone());

    let report = service.remove(&options(&["", "WARN", ""], false)).unwrap();

    assert_eq!(report.removed, 1);
}

#[test]
fn given_only_empty_patterns_when_removing_then_invalid_argument() {
    let service = LineRemovalService::new(Arc::new(MemoryFileService::with_file("app.log", LOG)));

    let err = service.remove(&options(&[""], false)).unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::InvalidArgument { name: "patterns", .. }
    ));
}

#[test]
fn given_invalid_regex_when_removing_then_invalid_pattern_before_reading() {
    let fs_service = Arc::new(MemoryFileService::with_file("app.log", LOG));
    let service = LineRemovalService::new(fs_service.clone());

    let err = service.remove(&options(&["(unclosed"], false)).unwrap_err();

    assert!(matches!(err, ApplicationError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
    assert_eq!(fs_service.line_reads(), 0);
}

#[test]
fn given_real_file_with_out_when_removing_then_writes_out_file() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("data.txt");
    let output = temp.path().join("filtered.txt");
    fs::write(&input, "keep 1\ndrop#me\nkeep 2\n").unwrap();

    let service = LineRemovalService::new(Arc::new(RealFileService::default()));
    let opts = RemoveLinesOptions {
        patterns: vec!["drop#me".to_string()],
        conjunctive: false,
        input: input.clone(),
        output: Some(output.clone()),
    };

    // Act
    service.remove(&opts).unwrap();

    // Assert
    assert_eq!(fs::read_to_string(&output).unwrap(), "keep 1\nkeep 2\n");
    assert_eq!(fs::read_to_string(&input).unwrap(), "keep 1\ndrop#me\nkeep 2\n");
}

#[test]
fn given_missing_input_when_removing_then_file_not_found() {
    let service = LineRemovalService::new(Arc::new(MemoryFileService::default()));

    let err = service.remove(&options(&["x"], false)).unwrap_err();

    assert!(matches!(err, ApplicationError::FileNotFound(_)));
}

// ============================================================
// unchanged input and streaming failures
// ============================================================

#[test]
fn given_no_matching_line_when_removing_in_place_then_input_untouched() {
    // Arrange
    let fs_service = Arc::new(MemoryFileService::with_file("app.log", "a\nb"));
    let service = LineRemovalService::new(fs_service.clone());

    // Act
    let report = service.remove(&options(&["zzz"], false)).unwrap();

    // Assert
    assert!(!report.written);
    assert_eq!(report.removed, 0);
    assert_eq!(fs_service.get("app.log").as_deref(), Some("a\nb"));
    assert_eq!(fs_service.writes(), 0);
}

#[test]
fn given_no_matching_line_with_out_when_removing_then_out_still_written() {
    let fs_service = Arc::new(MemoryFileService::with_file("app.log", "a\nb"));
    let service = LineRemovalService::new(fs_service.clone());
    let opts = RemoveLinesOptions {
        output: Some(PathBuf::from("copy.log")),
        ..options(&["zzz"], false)
    };

    let report = service.remove(&opts).unwrap();

    assert!(report.written);
    assert_eq!(fs_service.get("copy.log").as_deref(), Some("a\nb\n"));
    assert_eq!(fs_service.get("app.log").as_deref(), Some("a\nb"));
}

#[test]
fn given_crlf_file_without_match_when_removing_then_bytes_unchanged() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("dos.txt");
    fs::write(&input, "one\r\ntwo\r\n").unwrap();
    let service = LineRemovalService::new(Arc::new(RealFileService::default()));
    let opts = RemoveLinesOptions {
        patterns: vec!["zzz".to_string()],
        conjunctive: false,
        input: input.clone(),
        output: None,
    };

    // Act
    service.remove(&opts).unwrap();

    // Assert
    assert_eq!(fs::read(&input).unwrap(), b"one\r\ntwo\r\n");
}

#[test]
fn given_read_error_mid_stream_when_removing_then_fails_without_writing() {
    // Arrange
    let fs_service = Arc::new(MemoryFileService::with_file("app.log", LOG).failing_after(2));
    let service = LineRemovalService::new(fs_service.clone());

    // Act
    let err = service.remove(&options(&["^DEBUG"], false)).unwrap_err();

    // Assert
    assert!(matches!(err, ApplicationError::Io { .. }), "got {err:?}");
    assert_eq!(fs_service.line_reads(), 3, "stopped at the failing line");
    assert_eq!(fs_service.writes(), 0);
    assert_eq!(fs_service.get("app.log").as_deref(), Some(LOG));
}

#[test]
fn given_real_file_with_invalid_utf8_line_when_removing_then_io_error_and_input_kept() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("mixed.bin");
    let mut bytes = b"DEBUG one\nkeep\n".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
    fs::write(&input, &bytes).unwrap();

    let service = LineRemovalService::new(Arc::new(RealFileService::default()));
    let opts = RemoveLinesOptions {
        patterns: vec!["^DEBUG".to_string()],
        conjunctive: false,
        input: input.clone(),
        output: None,
    };

    // Act
    let err = service.remove(&opts).unwrap_err();

    // Assert
    assert!(matches!(err, ApplicationError::Io { .. }), "got {err:?}");
    assert_eq!(fs::read(&input).unwrap(), bytes);
}
