use std::io::Cursor;

use reckon::repl::{BANNER, Repl, ReplOptions, SessionSummary};

fn run(input: &str, options: ReplOptions) -> (SessionSummary, String, String) {
    let mut output = Vec::new();
    let mut errors = Vec::new();
    let summary = Repl::new(Cursor::new(input.to_string()), &mut output, &mut errors, options)
        .run()
        .unwrap_or_else(|e| panic!("Session failed: {e}"));

    (summary,
     String::from_utf8(output).expect("utf-8 output"),
     String::from_utf8(errors).expect("utf-8 errors"))
}

#[test]
fn interactive_session_prints_banner_and_prompts() {
    let (summary, output, errors) = run("2 + 3 * (4 - 1)\nexit\n", ReplOptions::default());

    assert_eq!(summary,
               SessionSummary { evaluated: 1,
                                failed:    0, });
    assert_eq!(output, format!("{BANNER}\n\n> Result: 11\n\n> "));
    assert!(errors.is_empty());
}

#[test]
fn errors_go_to_the_error_stream_and_the_loop_continues() {
    let (summary, output, errors) = run("4/0\n2+@\n(1\n10/4\n", ReplOptions::script());

    assert_eq!(summary,
               SessionSummary { evaluated: 4,
                                failed:    3, });
    assert_eq!(output, "Result: 2.5\n");
    assert_eq!(errors,
               "Error: Division by zero at position 1.\nError: Invalid character '@' at \
                position 2.\nError: Unexpected token at position 2: expected ')', found end \
                of input.\n");
}

#[test]
fn exit_must_match_exactly() {
    let (summary, _, errors) = run(" exit\nEXIT\nexit \nexit\n1\n", ReplOptions::script());

    assert_eq!(summary.evaluated, 3);
    assert_eq!(summary.failed, 3);
    assert_eq!(errors.lines().count(), 3);
}

#[test]
fn crlf_line_endings_are_accepted() {
    let (summary, output, _) = run("1 + 1\r\nexit\r\n2\r\n", ReplOptions::script());

    assert_eq!(summary.evaluated, 1);
    assert_eq!(output, "Result: 2\n");
}

#[test]
fn end_of_input_ends_the_session() {
    let (summary, output, _) = run("7 * 6", ReplOptions::script());

    assert_eq!(summary.evaluated, 1);
    assert_eq!(output, "Result: 42\n");

    let (summary, output, _) = run("", ReplOptions::script());
    assert_eq!(summary, SessionSummary::default());
    assert!(output.is_empty());
}

#[test]
fn blank_lines_are_reported() {
    let (summary, _, errors) = run("\n", ReplOptions::script());

    assert_eq!(summary.failed, 1);
    assert_eq!(errors, "Error: Invalid factor at position 0: found end of input.\n");
}

#[test]
fn results_use_general_notation() {
    let (_, output, _) = run("10/3\n1000000\n123456\n1/8000\n1/80000\n-0\n",
                             ReplOptions::script());

    assert_eq!(output,
               "Result: 3.33333\nResult: 1e+06\nResult: 123456\nResult: 0.000125\nResult: \
                1.25e-05\nResult: -0\n");
}

#[test]
fn precision_is_configurable() {
    let (_, output, _) = run("10/3\n", ReplOptions::script().with_precision(10));

    assert_eq!(output, "Result: 3.333333333\n");
}
