//! Emphasis, strong emphasis and strikethrough tests.

use downup::{Options, render, to_html};

fn unwrapped(input: &str) -> String {
    let options = Options {
        paragraphs: false,
        ..Options::default()
    };
    render(input, &options).unwrap()
}

#[test]
fn strong() {
    assert_eq!(to_html("**x**").unwrap(), "<strong>x</strong>");
}

#[test]
fn em() {
    assert_eq!(to_html("*x*").unwrap(), "<em>x</em>");
}

#[test]
fn triple_run_is_literal() {
    assert_eq!(unwrapped("***x***"), "***x***");
    assert_eq!(to_html("***x***").unwrap(), "<p>***x***</p>");
}

#[test]
fn strikethrough() {
    assert_eq!(to_html("~~a~~").unwrap(), "<s>a</s>");
    assert_eq!(unwrapped("~~~a~~~"), "~~~a~~~");
}

#[test]
fn mixed_sentence() {
    assert_eq!(
        to_html("This is *very* **bold** and ~~gone~~.").unwrap(),
        "<p>This is <em>very</em> <strong>bold</strong> and <s>gone</s>.</p>"
    );
}

#[test]
fn unmatched_openers_stay_literal() {
    assert_eq!(unwrapped("*a"), "*a");
    assert_eq!(unwrapped("**a *b*"), "**a *b*");
    assert_eq!(unwrapped("2 * 3 = 6"), "2 * 3 = 6");
}

#[test]
fn underscores_inside_words() {
    assert_eq!(unwrapped("a snake_case_name"), "a snake_case_name");
    assert_eq!(unwrapped("_x_ and __y__"), "<em>x</em> and <strong>y</strong>");
}
