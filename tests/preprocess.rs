use std::borrow::Cow;

use frosting::{
    Options,
    error::PreprocessError,
    execute,
    interpreter::preprocess::{MAX_INCLUDE_DEPTH, preprocess},
};
use pretty_assertions::assert_eq;

#[test]
fn source_without_directives_is_unchanged() {
    let source = "var x = 1\nprint \"!not a directive\"\n  !indented\n";
    let result = preprocess(source).unwrap();

    assert!(matches!(result, Cow::Borrowed(_)));
    assert_eq!(result, source);
}

#[test]
fn directive_is_replaced_by_file_contents() {
    let result = preprocess("!tests/fixtures/greet.fro\nprint \"after\"\n").unwrap();
    assert_eq!(result, "print \"hello\"\nprint \"after\"\n");
}

#[test]
fn includes_expand_recursively() {
    let result = preprocess("print \"before\"\n!tests/fixtures/nested.fro\n").unwrap();
    assert_eq!(result, "print \"before\"\nprint \"hello\"\nprint \"nested\"\n");
}

#[test]
fn directive_on_last_line_without_newline() {
    let result = preprocess("!tests/fixtures/greet.fro").unwrap();
    assert_eq!(result, "print \"hello\"\n");
}

#[test]
fn missing_file_is_reported_with_its_line() {
    let err = preprocess("print 1\n!tests/fixtures/missing.fro\n").unwrap_err();

    match err {
        PreprocessError::Unreadable { path, line, .. } => {
            assert_eq!(path.to_str(), Some("tests/fixtures/missing.fro"));
            assert_eq!(line, 2);
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn include_cycles_are_cut_off() {
    let err = preprocess("!tests/fixtures/cycle.fro\n").unwrap_err();
    assert!(matches!(err, PreprocessError::IncludeTooDeep { limit: MAX_INCLUDE_DEPTH, .. }));
}

#[test]
fn included_functions_can_be_called() {
    let source = preprocess("!tests/fixtures/double.fro\ncall double 21\n").unwrap();

    let mut out = Vec::new();
    let code = execute(&source, &Options::default(), &mut out).unwrap();

    assert_eq!(code, 0);
    assert_eq!(String::from_utf8(out).unwrap(), "42\n");
}
