use frosting::{
    ast::{BinaryOperator, Expr, OperatorClass},
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, lex},
        evaluator::core::DEFAULT_RECURSION_LIMIT,
        parser::{MAX_CALL_ARGUMENTS, Parsed, parse, parse_with_limit},
    },
    util::dump,
};
use pretty_assertions::assert_eq;

fn parsed(src: &str) -> Parsed<'_> {
    let lexed = lex(src);
    assert!(lexed.error.is_none(), "scan failed: {:?}", lexed.error);
    parse(&lexed.tokens)
}

fn tree(src: &str) -> String {
    let parsed = parsed(src);
    assert!(parsed.is_ok(), "build failed: {:?}", parsed.errors);
    dump::program(&parsed.program)
}

fn first_error(src: &str) -> ParseError {
    parsed(src).errors
               .into_iter()
               .next()
               .unwrap_or_else(|| panic!("expected an error for {src:?}"))
}

#[test]
fn chained_operators_fold_left() {
    assert_eq!(tree("var y = 2 + 3 * 4\n"),
               "toplevel:
  VarSet y
    Operation * (Math)
      Operation + (Math)
        Integer 2
        Integer 3
      Integer 4
");
}

#[test]
fn group_defers_right_hand_side() {
    assert_eq!(tree("var z = 2 + (3 * 4)\n"),
               "toplevel:
  VarSet z
    Operation + (Math)
      Integer 2
      Grouped
        Operation * (Math)
          Integer 3
          Integer 4
");
}

#[test]
fn operation_class_follows_operator() {
    let parsed = parsed("var b = 1 <= 2\n");
    let Expr::VarSet { value, .. } = &parsed.program.expressions[0] else {
        panic!("expected a binding");
    };
    let Expr::Operation { op, class, .. } = value.as_ref() else {
        panic!("expected an operation");
    };
    assert_eq!(*op, BinaryOperator::LessEqual);
    assert_eq!(*class, OperatorClass::Bool);
}

#[test]
fn keyword_collects_rest_of_line() {
    assert_eq!(tree("print \"sum \" a + 1 (b)\n"),
               "toplevel:
  Call print
    String \"sum \"
    Operation + (Math)
      Identifier a
      Integer 1
    Grouped
      Identifier b
");
}

#[test]
fn keywords_inside_arguments_are_literals() {
    assert_eq!(tree("call print r\n"),
               "toplevel:
  Call call
    Print print
    Identifier r
");
}

#[test]
fn reassignment_only_at_line_start() {
    assert_eq!(tree("x = 1\n"),
               "toplevel:
  VarReassign x
    Integer 1
");
    assert!(matches!(first_error("print x = 1\n"), ParseError::BareAssignment { line: 1 }));
}

#[test]
fn functions_go_to_the_function_table() {
    let parsed = parsed("print 1\nfunc add a b\nprint a + b\nend\nprint 2\n");
    assert!(parsed.is_ok());

    let program = &parsed.program;
    assert_eq!(program.expressions.len(), 2);
    assert_eq!(program.functions.len(), 1);

    let add = program.function("add").expect("add is defined");
    let parameters: Vec<_> = add.parameters.iter().map(|p| p.text).collect();
    assert_eq!(parameters, ["a", "b"]);
    assert_eq!(add.body.len(), 1);
    assert!(program.function("sub").is_none());
}

#[test]
fn loop_end_inside_function_does_not_close_it() {
    assert_eq!(tree("func f\nfor i 2\nprint i\nend\nend\n"),
               "toplevel:
function f():
  Call for
    Identifier i
    Integer 2
  Call print
    Identifier i
  Call end
");
}

#[test]
fn missing_operands_are_reported() {
    assert!(matches!(first_error("var x = + 1\n"), ParseError::MissingOperand { .. }));
    assert!(matches!(first_error("var x = 1 +\n"), ParseError::MissingOperand { .. }));
    assert!(matches!(first_error("var x = 1 + print\n"), ParseError::MissingOperand { .. }));
}

#[test]
fn group_errors_are_reported() {
    assert_eq!(first_error("print 1)\n"), ParseError::UnbalancedGroup { line: 1 });
    assert_eq!(first_error("var x = (1 + 2\n"), ParseError::UnclosedGroup { line: 1 });
    assert_eq!(first_error("var x = ()\n"), ParseError::EmptyGroup { line: 1 });
    assert_eq!(first_error("print (1 2)\n"), ParseError::MalformedGroup { line: 1 });
    assert!(matches!(first_error("var x = (print)\n"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn bindings_need_exactly_one_value() {
    assert_eq!(first_error("var x\n"),
               ParseError::InvalidBinding { name:  "x".to_string(),
                                            found: 0,
                                            line:  1, });
    assert_eq!(first_error("var x = 1 2\n"),
               ParseError::InvalidBinding { name:  "x".to_string(),
                                            found: 2,
                                            line:  1, });
    assert!(matches!(first_error("var 5 = 1\n"), ParseError::InvalidVariableName { .. }));
    assert!(matches!(first_error("var x = print\n"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn commas_only_separate_arguments() {
    assert!(parsed("call add 1, 2\n").is_ok());
    assert!(matches!(first_error("var x = 1, 2\n"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn argument_count_is_capped() {
    let ok = format!("print{}\n", " 1".repeat(MAX_CALL_ARGUMENTS));
    assert!(parsed(&ok).is_ok());

    let too_many = format!("print{}\n", " 1".repeat(MAX_CALL_ARGUMENTS + 1));
    assert!(matches!(first_error(&too_many),
                     ParseError::TooManyArguments { max: MAX_CALL_ARGUMENTS, .. }));
}

#[test]
fn function_definition_errors() {
    assert!(matches!(first_error("func\nend\n"), ParseError::InvalidFunctionDefinition { .. }));
    assert!(matches!(first_error("func f 1\nend\n"),
                     ParseError::InvalidFunctionDefinition { .. }));
    assert!(matches!(first_error("func f a a\nend\n"),
                     ParseError::InvalidFunctionDefinition { .. }));
    assert_eq!(first_error("func f\nfunc g\nend\nend\n"),
               ParseError::NestedFunctionDefinition { line: 2 });
    assert_eq!(first_error("func f\nend\nfunc f\nend\n"),
               ParseError::FunctionAlreadyDefined { name: "f".to_string(),
                                                    line: 3, });
    assert_eq!(first_error("func f\nprint 1\n"),
               ParseError::UnclosedFunction { name: "f".to_string(),
                                              line: 1, });
}

#[test]
fn errors_skip_the_rest_of_the_line() {
    let parsed = parsed("print 1)\nvar 5\nprint 2\n");

    assert_eq!(parsed.errors.len(), 2);
    assert_eq!(parsed.errors[0].line(), 1);
    assert_eq!(parsed.errors[1].line(), 2);

    assert_eq!(parsed.program.expressions.len(), 1);
    let Expr::FunctionCall { keyword, arguments } = &parsed.program.expressions[0] else {
        panic!("expected a call");
    };
    assert_eq!(keyword.kind, TokenKind::Print);
    assert_eq!(arguments.len(), 1);
}

#[test]
fn bare_values_are_statements() {
    assert_eq!(tree("5\n\"s\"\n"),
               "toplevel:
  Integer 5
  String \"s\"
");
}

#[test]
fn deep_expressions_are_rejected_while_building() {
    let too_deep = ParseError::NestingTooDeep { limit: DEFAULT_RECURSION_LIMIT,
                                                line:  1, };

    let chain = format!("var x = 1{}\nprint 2\n", " + 1".repeat(200_000));
    let folded = parsed(&chain);
    assert_eq!(folded.errors, [too_deep.clone()]);
    assert_eq!(folded.program.expressions.len(), 1);
    drop(folded);

    let groups = format!("print {}1{}\nprint 2\n", "(".repeat(200_000), ")".repeat(200_000));
    let nested = parsed(&groups);
    assert_eq!(nested.errors, [too_deep]);
    assert_eq!(nested.program.expressions.len(), 1);
}

#[test]
fn nesting_limit_counts_groups_and_operations() {
    let lexed = lex("print 1\nprint ((1))\nprint (1 + 2)\n");

    assert!(parse_with_limit(&lexed.tokens, 2).is_ok());

    let parsed = parse_with_limit(&lexed.tokens, 1);
    assert_eq!(parsed.errors,
               [ParseError::NestingTooDeep { limit: 1, line: 2 },
                ParseError::NestingTooDeep { limit: 1, line: 3 }]);
}
