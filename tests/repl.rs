use std::io::Cursor;

use monkey::repl::{PROMPT, start};
use pretty_assertions::assert_eq;

fn session(input: &str) -> String {
    let mut output = Vec::new();
    start(Cursor::new(input), &mut output).expect("writing to a Vec cannot fail");
    String::from_utf8(output).expect("the session prints UTF-8")
}

#[test]
fn empty_input_prints_one_prompt() {
    assert_eq!(session(""), PROMPT);
}

#[test]
fn values_are_printed_after_the_prompt() {
    assert_eq!(session("1 + 2\n"), ">> 3\n>> ");
    assert_eq!(session("1 < 2\n"), ">> true\n>> ");
    assert_eq!(session("if (false) { 1 }\n"), ">> null\n>> ");
}

#[test]
fn bindings_persist_between_lines() {
    let output = session("let a = 5;\nlet b = a * 2;\na + b\n");

    assert_eq!(output, ">> >> >> 15\n>> ");
}

#[test]
fn blank_lines_print_nothing() {
    assert_eq!(session("\n\n"), ">> >> >> ");
}

#[test]
fn parse_errors_are_listed() {
    let output = session("let x 5;\nlet = 1;\n");

    assert_eq!(output,
               ">>  parser errors:\n\
                \texpected next token to be =, got INT instead\n\
                >>  parser errors:\n\
                \texpected next token to be IDENT, got = instead\n\
                \tno prefix parse function for = found\n\
                >> ");
}

#[test]
fn runtime_errors_are_printed_and_the_session_continues() {
    let output = session("let a = 1;\na + true\nmissing\na\n");

    assert_eq!(output,
               ">> >> ERROR: type mismatch: INTEGER + BOOLEAN\n\
                >> ERROR: identifier not found: missing\n\
                >> 1\n\
                >> ");
}

#[test]
fn return_is_unwrapped_per_line() {
    assert_eq!(session("return 7; 8\n9\n"), ">> 7\n>> 9\n>> ");
}

#[test]
fn final_line_without_newline_is_evaluated() {
    assert_eq!(session("2 * 21"), ">> 42\n>> ");
}
