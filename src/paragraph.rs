//! Paragraph wrapping over fully rendered text.
//!
//! Runs once, after a top-level parse. Works line by line:
//!
//! - a line starting with `<` and an ASCII letter is an already-rendered
//!   element; lines up to one containing its closing tag pass through as-is
//! - other non-blank lines are plain text and get wrapped in `<p>`
//! - one blank line between two text lines becomes a `<br>`, more than one
//!   closes the paragraph and opens a new one

use memchr::memmem;

/// Elements that never have a closing tag to wait for.
const VOID_ELEMENTS: &[&str] = &["hr", "br", "img", "input", "meta", "link"];

/// Wrap plain-text runs of `text` in paragraphs.
///
/// # Example
/// ```
/// use downup::paragraph::wrap;
///
/// assert_eq!(wrap("one\ntwo"), "<p>one\ntwo</p>");
/// assert_eq!(wrap("<h1>T</h1>\nbody"), "<h1>T</h1>\n<p>body</p>");
/// ```
pub fn wrap(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut open_element: Option<&str> = None;
    let mut in_paragraph = false;
    let mut blanks: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if let Some(name) = open_element {
            out.push(line.to_owned());
            if closes(line, name) {
                open_element = None;
            }
            continue;
        }

        if is_blank(line) {
            blanks.push(line);
            continue;
        }

        if let Some(name) = element_name(line) {
            if in_paragraph {
                close_paragraph(&mut out);
                in_paragraph = false;
            }
            out.extend(blanks.drain(..).map(str::to_owned));
            out.push(line.to_owned());
            if !name.is_empty() && !VOID_ELEMENTS.contains(&name) && !closes(line, name) {
                open_element = Some(name);
            }
            continue;
        }

        if in_paragraph {
            match blanks.len() {
                0 => {}
                1 => {
                    blanks.clear();
                    if let Some(last) = out.last_mut() {
                        last.push_str("<br>");
                    }
                }
                _ => {
                    close_paragraph(&mut out);
                    in_paragraph = false;
                }
            }
        }

        if in_paragraph {
            out.push(line.to_owned());
        } else {
            out.extend(blanks.drain(..).map(str::to_owned));
            out.push(format!("<p>{line}"));
            in_paragraph = true;
        }
    }

    if in_paragraph {
        close_paragraph(&mut out);
    }
    out.extend(blanks.drain(..).map(str::to_owned));
    out.join("\n")
}

#[inline]
fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| matches!(b, b' ' | b'\t' | b'\r'))
}

/// Element name of a line that starts with a tag.
///
/// A closing tag (`</x>`) yields an empty name: it is passed through but
/// opens nothing.
fn element_name(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('<')?;
    if rest.starts_with('/') {
        return Some("");
    }
    if !rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let end = rest
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Whether `line` contains `</name>`.
fn closes(line: &str, name: &str) -> bool {
    let closing = format!("</{name}>");
    memmem::find(line.as_bytes(), closing.as_bytes()).is_some()
}

fn close_paragraph(out: &mut [String]) {
    if let Some(last) = out.last_mut() {
        last.push_str("</p>");
    }
}
