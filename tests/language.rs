use std::fs;

use frosting::{
    Options,
    error::{ErrorKind, RuntimeError},
    execute,
    interpreter::{evaluator::core::Context, lexer::lex, parser::parse},
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn sample_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "fro"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        match execute(&content, &Options::default(), Vec::new()) {
            Ok(0) => {},
            Ok(code) => panic!("Script {path:?} exited with code {code}"),
            Err(e) => panic!("Script {path:?} failed:\n{content}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn output(src: &str) -> String {
    let mut out = Vec::new();
    if let Err(e) = execute(src, &Options::default(), &mut out) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(out).expect("output is UTF-8")
}

fn assert_output(src: &str, expected: &str) {
    assert_eq!(output(src), expected);
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match execute(src, &Options::default(), Vec::new()) {
        Ok(code) => panic!("Script succeeded with code {code} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "unexpected error: {e}"),
    }
}

/// Runs a script expected to fail and returns what it printed first.
fn output_before_failure(src: &str, kind: ErrorKind) -> String {
    let mut out = Vec::new();
    match execute(src, &Options::default(), &mut out) {
        Ok(code) => panic!("Script succeeded with code {code} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "unexpected error: {e}"),
    }
    String::from_utf8(out).expect("output is UTF-8")
}

fn exit_code(src: &str) -> i32 {
    execute(src, &Options::default(), Vec::new()).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

#[test]
fn variable_round_trip() {
    assert_output("var x = 5\nprint x\n", "5\n");
    assert_output("var x 5\nprint x\n", "5\n");
    assert_output("var s = \"hello\"\nprint s\n", "hello\n");
}

#[test]
fn print_concatenates_without_separator() {
    assert_output("var y = 20\nprint \"y is \" y\n", "y is 20\n");
    assert_output("print \"a\" \"b\" 1 2\n", "ab12\n");
    assert_output("print\n", "\n");
}

#[test]
fn print_keeps_literal_text_verbatim() {
    assert_output("print 007\n", "007\n");
    assert_output("print \"two\nlines\"\n", "two\nlines\n");
}

#[test]
fn print_reduces_operations_and_groups() {
    assert_output("var x = 4\nprint x * 2 \" \" (x - 1)\n", "8 3\n");
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_output("var x = 1 + 2\nprint x\n", "3\n");
    assert_output("var x = 7 * 9\nprint x\n", "63\n");
    assert_output("var x = 8 - 5\nprint x\n", "3\n");
    assert_output("var x = 10 / 2\nprint x\n", "5\n");
}

#[test]
fn division_truncates_toward_zero() {
    assert_output("print 7 / 2\n", "3\n");
    assert_output("print 2 - 7 / 2\n", "-2\n");
}

#[test]
fn comparisons_yield_zero_or_one() {
    assert_output("print 3 < 5\nprint 5 <= 4\nprint 4 >= 4\nprint 2 > 9\nprint 7 == 7\n",
                  "1\n0\n1\n0\n1\n");
}

#[test]
fn strings_compare_lexicographically() {
    assert_output("print \"abc\" < \"abd\"\n", "1\n");
    assert_output("print \"b\" == \"b\"\n", "1\n");
    assert_output("var a = \"pear\"\nvar b = \"apple\"\nprint a > b\n", "1\n");
}

#[test]
fn grouping_changes_the_reading() {
    assert_output("var x = (2 + 3) * 4\nprint x\n", "20\n");
    assert_output("var x = 2 + (3 * 4)\nprint x\n", "14\n");
    assert_output("var x = ((1 + 1) * (2 + 2))\nprint x\n", "8\n");
}

#[test]
fn operators_fold_left_to_right() {
    // There is no precedence table: `2 + 3 * 4` reads as `(2 + 3) * 4`.
    assert_output("var y = 2 + 3 * 4\nprint y\n", "20\n");
    assert_output("var y = 10 - 4 - 3\nprint y\n", "3\n");
}

#[test]
fn reassignment_updates_existing_variable() {
    assert_output("var x = 1\nx = x + 1\nprint x\n", "2\n");
    assert_output("var x = 1\nx = (x * 10)\nprint x\n", "10\n");
}

#[test]
fn reassignment_requires_existing_variable() {
    assert_failure("y = 3\n", ErrorKind::NotFound);
}

#[test]
fn variables_are_copied_not_aliased() {
    assert_output("var a = 1\nvar b = a\na = 2\nprint b\n", "1\n");
}

#[test]
fn var_overwrites_existing_variable() {
    assert_output("var a = 1\nvar a = \"one\"\nprint a\n", "one\n");
}

#[test]
fn type_mixing_is_rejected_without_output() {
    assert_eq!(output_before_failure("print \"a\" + 1\n", ErrorKind::TypeMismatch), "");
    assert_eq!(output_before_failure("print 1 == \"1\"\n", ErrorKind::TypeMismatch), "");
    assert_eq!(output_before_failure("print \"x is \" 1 + \"b\"\n", ErrorKind::TypeMismatch),
               "");
    assert_failure("var s = \"a\"\nvar n = 2\nvar x = s < n\n", ErrorKind::TypeMismatch);
}

#[test]
fn string_arithmetic_is_rejected() {
    assert_failure("print \"a\" + \"b\"\n", ErrorKind::TypeMismatch);
    assert_failure("var x = \"a\" * \"b\"\n", ErrorKind::TypeMismatch);
}

#[test]
fn for_loop_runs_until_bound() {
    assert_output("var i = 0\nfor i 3\nprint i\nend\n", "0\n1\n2\n3\n");
}

#[test]
fn for_loop_starts_undefined_variable_at_zero() {
    assert_output("for i 2\nprint \"i=\" i\nend\nprint \"done\"\n",
                  "i=0\ni=1\ni=2\ndone\n");
}

#[test]
fn for_loop_runs_body_once_when_already_past_bound() {
    assert_output("var i = 5\nfor i 3\nprint i\nend\nprint i\n", "5\n5\n");
}

#[test]
fn for_loop_clears_marker_when_done() {
    let printed = output_before_failure("var i = 0\nfor i 3\nprint i\nend\nend\n",
                                        ErrorKind::UnmatchedEnd);
    assert_eq!(printed, "0\n1\n2\n3\n");
}

#[test]
fn for_loop_bound_may_be_an_expression() {
    assert_output("var n = 1\nfor i (n + 1)\nprint i\nend\n", "0\n1\n2\n");
}

#[test]
fn for_loop_rejects_bad_arguments() {
    assert_failure("for i \"3\"\nend\n", ErrorKind::TypeMismatch);
    assert_failure("var i = \"a\"\nfor i 3\nend\n", ErrorKind::TypeMismatch);
    assert_failure("for 3 3\nend\n", ErrorKind::MalformedSyntax);
    assert_failure("for i\nend\n", ErrorKind::MalformedSyntax);
}

#[test]
fn nested_loops_in_one_frame_are_unimplemented() {
    assert_failure("for i 2\nfor j 2\nend\nend\n", ErrorKind::Unimplemented);
}

#[test]
fn loops_nest_through_function_calls() {
    let src = "func inner n\nfor j 2\nprint n j\nend\nend\nfor i 1\ncall inner i\nend\n";
    assert_output(src, "00\n01\n02\n10\n11\n12\n");
}

#[test]
fn unmatched_end_is_an_error() {
    assert_failure("end\n", ErrorKind::UnmatchedEnd);
}

#[test]
fn function_call_binds_arguments() {
    assert_output("func f a\nprint a\nend\ncall f 7\n", "7\n");
    assert_output("func add a b\nprint a + b\nend\ncall add 2 3\n", "5\n");
    assert_output("func add a, b\nprint a + b\nend\ncall add 2, 3\n", "5\n");
}

#[test]
fn function_calls_are_isolated() {
    assert_output("var a = 1\nfunc f a\nprint a\na = 100\nend\ncall f 7\nprint a\n",
                  "7\n1\n");
    assert_failure("var b = 1\nfunc f\nprint b\nend\ncall f\n", ErrorKind::NotFound);
}

#[test]
fn function_arguments_are_resolved_in_caller() {
    assert_output("func show v\nprint v\nend\nvar x = 3\ncall show x\ncall show (x * x)\n",
                  "3\n9\n");
}

#[test]
fn call_dispatches_print_builtin() {
    let src = "func add a b\nvar r = (a + b)\ncall print r\nend\ncall add 2 3\n";
    assert_output(src, "5\n");
}

#[test]
fn arity_is_enforced_without_output() {
    let def = "func add a b\nprint a + b\nend\n";
    assert_eq!(output_before_failure(&format!("{def}call add 1\n"), ErrorKind::WrongArity),
               "");
    assert_eq!(output_before_failure(&format!("{def}call add 1 2 3\n"), ErrorKind::WrongArity),
               "");
}

#[test]
fn calling_unknown_function_fails() {
    assert_failure("call nope\n", ErrorKind::NotFound);
    assert_failure("call\n", ErrorKind::MalformedSyntax);
}

#[test]
fn functions_may_be_called_before_their_definition() {
    assert_output("call hi\nfunc hi\nprint \"hi\"\nend\n", "hi\n");
}

#[test]
fn functions_see_loops_in_their_body() {
    let src = "func count n\nfor i n\nprint i\nend\nprint \"end\"\nend\ncall count 2\n";
    assert_output(src, "0\n1\n2\nend\n");
}

#[test]
fn recursion_is_limited() {
    let options = Options { recursion_limit: 32,
                            ..Options::default() };
    let err = execute("func f\ncall f\nend\ncall f\n", &options, Vec::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RecursionLimitExceeded);
}

#[test]
fn deep_grouping_is_limited() {
    let within = format!("var x = {}1{}\nprint x\n", "(".repeat(256), ")".repeat(256));
    assert_output(&within, "1\n");

    let beyond = format!("print \"a\"\nvar x = {}1{}\nprint x\n",
                         "(".repeat(300),
                         ")".repeat(300));
    assert_eq!(output_before_failure(&beyond, ErrorKind::RecursionLimitExceeded), "");
}

#[test]
fn long_operator_chains_are_limited() {
    let within = format!("var x = 1{}\nprint x\n", " + 1".repeat(256));
    assert_output(&within, "257\n");

    let beyond = format!("var x = 1{}\nprint x\n", " + 1".repeat(300));
    assert_failure(&beyond, ErrorKind::RecursionLimitExceeded);
}

#[test]
fn nesting_limit_follows_options() {
    let options = Options { recursion_limit: 4,
                            ..Options::default() };

    let mut out = Vec::new();
    assert_eq!(execute("print 1 + 1 + 1 + 1 + 1\n", &options, &mut out).unwrap(), 0);
    assert_eq!(out, b"5\n");

    let err = execute("print (1 + 1 + 1 + 1 + 1)\n", &options, Vec::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RecursionLimitExceeded);
}

#[test]
fn huge_expressions_fail_cleanly() {
    let chain = format!("var x = 1{}\n", " + 1".repeat(200_000));
    assert_failure(&chain, ErrorKind::RecursionLimitExceeded);

    let groups = format!("var x = {}1{}\n", "(".repeat(200_000), ")".repeat(200_000));
    assert_failure(&groups, ErrorKind::RecursionLimitExceeded);
}

#[test]
fn operand_nesting_is_checked_during_evaluation() {
    let lexed = lex("var x = ((1 + 2) * 3)\n");
    let parsed = parse(&lexed.tokens);
    assert!(parsed.is_ok());

    let mut context = Context::new(&parsed.program, Vec::new()).with_recursion_limit(2);
    assert!(matches!(context.run(),
                     Err(RuntimeError::RecursionLimitExceeded { limit: 2, line: 1 })));
}

#[test]
fn exit_stops_with_code() {
    assert_eq!(exit_code("exit 3\nprint \"never\"\n"), 3);
    assert_eq!(exit_code("exit 0\n"), 0);
    assert_eq!(exit_code("exit\n"), 1);
    assert_eq!(exit_code("exit \"text\"\n"), 1);
    assert_eq!(exit_code("print \"x\"\n"), 0);
}

#[test]
fn exit_inside_function_stops_caller() {
    let mut out = Vec::new();
    let code = execute("func f\nprint \"in\"\nexit 4\nend\ncall f\nprint \"after\"\n",
                       &Options::default(),
                       &mut out).unwrap();
    assert_eq!(code, 4);
    assert_eq!(String::from_utf8(out).unwrap(), "in\n");
}

#[test]
fn call_dispatches_exit_builtin() {
    assert_eq!(exit_code("call exit 6\n"), 6);
}

#[test]
fn exit_code_must_fit() {
    assert_failure("exit 99999999999\n", ErrorKind::Overflow);
}

#[test]
fn division_by_zero_is_an_error() {
    assert_failure("print 10 / 0\n", ErrorKind::DivisionByZero);
    assert_failure("var z = 0\nvar x = 1 / z\n", ErrorKind::DivisionByZero);
}

#[test]
fn overflow_is_an_error() {
    assert_failure("var x = 9223372036854775807 + 1\n", ErrorKind::Overflow);
    assert_failure("var x = 99999999999999999999\n", ErrorKind::Overflow);
}

#[test]
fn unimplemented_keywords_are_rejected() {
    assert_failure("if 1\nend\n", ErrorKind::Unimplemented);
    assert_failure("while 1\nend\n", ErrorKind::Unimplemented);
    assert_failure("read x\n", ErrorKind::Unimplemented);
    assert_failure("not 1\n", ErrorKind::Unimplemented);
}

#[test]
fn unknown_variable_is_an_error() {
    assert_failure("print x\n", ErrorKind::NotFound);
    assert_failure("var y = x + 1\n", ErrorKind::NotFound);
}

#[test]
fn comments_are_ignored() {
    assert_output("// a comment\nprint 1 // trailing\n", "1\n");
}

#[test]
fn last_line_needs_no_newline() {
    assert_output("var x = 2\nprint x", "2\n");
}

#[test]
fn scanner_errors_stop_before_evaluation() {
    assert_eq!(output_before_failure("print 1\nvar x = 1 $ 2\n", ErrorKind::UnknownCharacter),
               "");
}

#[test]
fn builder_errors_stop_before_evaluation() {
    assert_eq!(output_before_failure("print 1\nprint 2)\n", ErrorKind::MalformedSyntax), "");
    assert_failure("var x = (1 + 2\n", ErrorKind::MalformedSyntax);
    assert_failure("print x = 3\n", ErrorKind::MalformedSyntax);
    assert_failure("func f\nprint 1\n", ErrorKind::MalformedSyntax);
}

#[test]
fn error_codes_are_distinct() {
    let codes = [ErrorKind::UnknownCharacter,
                 ErrorKind::MalformedSyntax,
                 ErrorKind::WrongArity,
                 ErrorKind::NotFound,
                 ErrorKind::TypeMismatch,
                 ErrorKind::UnmatchedEnd,
                 ErrorKind::Unimplemented,
                 ErrorKind::DivisionByZero,
                 ErrorKind::RecursionLimitExceeded,
                 ErrorKind::Overflow,
                 ErrorKind::Output].map(ErrorKind::exit_code);

    for (i, code) in codes.iter().enumerate() {
        assert_ne!(*code, 0);
        assert!(!codes[i + 1..].contains(code), "code {code} is reused");
    }
}

#[test]
fn errors_report_their_line() {
    let err = execute("var x = 1\n\nprint y\n", &Options::default(), Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "Error on line 3: Unknown variable 'y'.");
}
