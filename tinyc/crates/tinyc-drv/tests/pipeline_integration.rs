//! Pipeline integration tests: library-level load, scan and write.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use tinyc_drv::{load_source, Config, DriverError, Session, TokenSink};
use tinyc_lex::{tokenize, KeywordSet, TokenCategory};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_source_reads_whole_file() {
    let source = load_source(&fixture("factorial.tny")).unwrap();
    assert_eq!(source.position(), 0);
    assert!(source.as_str().ends_with("end\n"));
}

#[test]
fn test_load_source_missing_file() {
    let err = load_source(&fixture("does_not_exist.tny")).unwrap_err();
    match err {
        DriverError::Io { path, source } => {
            assert!(path.ends_with("does_not_exist.tny"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_sink_matches_fixture() {
    let text = fs::read_to_string(fixture("factorial.tny")).unwrap();
    let tokens = tokenize(&text, &KeywordSet::tiny());

    let mut sink = TokenSink::from_writer(Vec::new(), "<memory>");
    sink.write_tokens(&tokens).unwrap();
    let listing = String::from_utf8(sink.finish().unwrap()).unwrap();

    let expected = fs::read_to_string(fixture("factorial.tokens")).unwrap();
    assert_eq!(listing, expected);
}

#[test]
fn test_session_run_reports_irregular_input() {
    let temp_dir = TempDir::new().unwrap();
    let session = Session::new(Config {
        input: fixture("irregular.tny"),
        output: temp_dir.path().join("tokens.txt"),
        echo_tokens: false,
        verbose: false,
    });

    let report = session.run(&mut std::io::sink()).unwrap();
    assert_eq!(report.token_count, 9);
    assert_eq!(report.unknown_count, 2);
    assert_eq!(report.unterminated_comments, 1);
    assert_eq!(report.output, temp_dir.path().join("tokens.txt"));
}

#[test]
fn test_listing_skips_end_of_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("empty.tny");
    fs::write(&input, "  { only a comment }\n").unwrap();

    let session = Session::new(Config {
        input,
        output: temp_dir.path().join("tokens.txt"),
        ..Config::default()
    });
    let report = session.run(&mut std::io::sink()).unwrap();

    assert_eq!(report.token_count, 0);
    let listing = fs::read_to_string(temp_dir.path().join("tokens.txt")).unwrap();
    assert!(listing.is_empty());
    assert!(!listing.contains(TokenCategory::EndOfInput.name()));
}

#[test]
fn test_non_utf8_byte_outside_comment_is_unknown_token() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("latin1.tny");
    fs::write(&input, b"a \xE9 b;\n{ caf\xE9 }\n").unwrap();

    let source = load_source(&input).unwrap();
    let tokens = tokenize(source.as_str(), &KeywordSet::tiny());
    let listing: Vec<_> = tokens
        .iter()
        .map(|t| (t.lexeme(), t.category()))
        .collect();
    assert_eq!(
        listing,
        vec![
            ("a", TokenCategory::Identifier),
            ("\u{e9}", TokenCategory::Unknown),
            ("b", TokenCategory::Identifier),
            (";", TokenCategory::Semicolon),
        ]
    );

    let session = Session::new(Config {
        input,
        output: temp_dir.path().join("tokens.txt"),
        echo_tokens: false,
        verbose: false,
    });
    let report = session.run(&mut std::io::sink()).unwrap();
    assert_eq!(report.token_count, 4);
    assert_eq!(report.unknown_count, 1);
    assert!(temp_dir.path().join("tokens.txt").exists());
}
