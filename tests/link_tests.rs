//! Link and image tests.

use downup::{Format, Options, Parser, Tokenizer, render, to_html};

fn unwrapped(input: &str) -> String {
    let options = Options {
        paragraphs: false,
        ..Options::default()
    };
    render(input, &options).unwrap()
}

#[test]
fn link() {
    assert_eq!(to_html("[a](b)").unwrap(), "<a href=\"b\">a</a>");
}

#[test]
fn unterminated_link_is_literal() {
    assert_eq!(unwrapped("[a]("), "[a](");
    assert_eq!(to_html("[a](").unwrap(), "<p>[a](</p>");
}

#[test]
fn link_inside_text() {
    assert_eq!(
        to_html("Read [the docs](https://example.com/?page=1) now").unwrap(),
        "<p>Read <a href=\"https://example.com/?page=1\">the docs</a> now</p>"
    );
}

#[test]
fn image() {
    assert_eq!(
        to_html("![happy trees](./bobross.png)").unwrap(),
        "<img src=\"./bobross.png\" alt=\"happy trees\"></img>"
    );
}

#[test]
fn image_alt_is_attribute_escaped() {
    assert_eq!(
        unwrapped("![say \"hi\"](x.png)"),
        "<img src=\"x.png\" alt=\"say &quot;hi&quot;\"></img>"
    );
}

#[test]
fn image_inside_link_renders_first() {
    assert_eq!(
        unwrapped("[![alt](src)](href)"),
        "<a href=\"href\"><img src=\"src\" alt=\"alt\"></img></a>"
    );
}

#[test]
fn unmatched_bracket_is_literal_to_end() {
    let mut parser = Parser::new(Tokenizer::new("[open and [real](x)"));
    assert_eq!(parser.parse_at(1).unwrap(), "[open and [real](x)");
    assert_eq!(parser.errors().len(), 1);
}

#[test]
fn bracket_without_destination_is_not_parsed() {
    assert_eq!(unwrapped("[*a*] x"), "[*a*] x");
    assert_eq!(unwrapped("[a](b *c*"), "[a](b *c*");
    assert_eq!(unwrapped("[![a](b)](c"), "[![a](b)](c");
}

#[test]
fn missing_image_renderer_keeps_source() {
    let options = Options {
        paragraphs: false,
        ..Options::default()
    };
    let mut parser = Parser::with_options(Tokenizer::new("![a](b)"), &options);
    parser.unregister_tag("img");
    assert_eq!(parser.parse().unwrap(), "![a](b)");
}

#[test]
fn many_unclosed_brackets_stay_linear() {
    let input = "[a ".repeat(20_000);
    let start = std::time::Instant::now();
    let mut parser = Parser::new(Tokenizer::new(input.as_str()));
    assert_eq!(parser.parse_at(1).unwrap(), input);
    assert!(start.elapsed() < std::time::Duration::from_secs(1));
}

#[test]
fn markdown_format_round_trips() {
    let input = "see [a](b) and ![c](d)";
    let options = Options {
        format: Format::Markdown,
        paragraphs: false,
        ..Options::default()
    };
    assert_eq!(render(input, &options).unwrap(), input);
}
