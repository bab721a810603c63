//! Pipe tables.
//!
//! Consecutive lines starting with `|` form a table. A separator row (cells
//! made only of `-` and `:`) sets column alignment and promotes the row right
//! before it to the header. The result keeps both its literal source and its
//! rendered markup.

use smallvec::SmallVec;

use crate::error::Result;
use crate::escape::escape_text;
use crate::mobject::{Format, Fragment, Mobject};
use crate::parser::Parser;
use crate::tags::{self, Alignment, Payload, Table};
use crate::token::TokenKind;

pub fn read(p: &mut Parser) -> Result<Fragment> {
    if !p.at_line_start() {
        return Ok(p.take_literal());
    }

    let mut source = String::new();
    let mut raw_rows = Vec::new();
    while p.at_line_start() && p.current().kind == TokenKind::Pipe {
        raw_rows.push(read_row(p, &mut source));
        source.push_str(&p.skip_line_end());
    }

    let mut table = Table::default();
    // Index of the previous row if it was a body row, for header promotion.
    let mut last_body_row: Option<usize> = None;
    for cells in raw_rows {
        if let Some(alignments) = separator_alignments(&cells) {
            table.alignments = alignments;
            if let Some(index) = last_body_row.take() {
                table.header = Some(table.rows.remove(index));
            }
            continue;
        }

        let mut rendered = Vec::with_capacity(cells.len());
        for cell in &cells {
            rendered.push(p.sub_parse_inline(&escape_text(cell))?);
        }
        last_body_row = Some(table.rows.len());
        table.rows.push(rendered);
    }

    let renderer = p.tag_renderer("table");
    let payload = Payload::Table(table);
    let markdown = source.clone();
    let object = Mobject::new("table")
        .with(Format::Html, move || {
            Ok(tags::render(renderer.as_ref(), "table", &payload)?
                .unwrap_or_else(|| source.clone()))
        })
        .with(Format::Markdown, move || Ok(markdown.clone()));
    Ok(Fragment::Object(object))
}

/// Consume one table line, appending its literal text to `source`, and
/// return its trimmed cells.
fn read_row(p: &mut Parser, source: &mut String) -> Vec<String> {
    let mut cells = vec![String::new()];
    while !p.current().kind.is_line_end() {
        let token = p.next_token();
        source.push_str(&token.literal);
        if token.kind == TokenKind::Pipe {
            // `||` is two separators with an empty cell between them.
            for _ in 0..token.run_len() {
                cells.push(String::new());
            }
        } else if let Some(cell) = cells.last_mut() {
            cell.push_str(&token.literal);
        }
    }

    // The text before the leading pipe is always empty.
    cells.remove(0);
    let mut cells: Vec<String> = cells.iter().map(|c| c.trim().to_owned()).collect();
    if cells.last().is_some_and(String::is_empty) {
        cells.pop();
    }
    cells
}

/// Alignments of a separator row, or `None` for an ordinary row.
fn separator_alignments(cells: &[String]) -> Option<SmallVec<[Alignment; 8]>> {
    if cells.is_empty() || !cells.iter().all(|c| is_separator_cell(c)) {
        return None;
    }
    Some(
        cells
            .iter()
            .map(|cell| match (cell.starts_with(':'), cell.ends_with(':')) {
                (true, true) => Alignment::Center,
                (true, false) => Alignment::Left,
                (false, true) => Alignment::Right,
                (false, false) => Alignment::None,
            })
            .collect(),
    )
}

/// `---`, `:--`, `--:` or `:-:` and longer; colons only at the ends.
fn is_separator_cell(cell: &str) -> bool {
    let inner = cell.strip_prefix(':').unwrap_or(cell);
    let inner = inner.strip_suffix(':').unwrap_or(inner);
    cell.len() >= 3 && !inner.is_empty() && inner.bytes().all(|b| b == b'-')
}
