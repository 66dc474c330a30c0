//! Terminal and JSON rendering of grouped search results

use crate::index::store::DocumentStore;
use crate::query::{MatchGroup, SnippetRow};
use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Byte ranges of every non-overlapping occurrence of `needle` in `text`.
///
/// Case-sensitive literal match on the raw query string. This is display
/// only and independent of how terms were matched.
pub fn highlight_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    if needle.is_empty() {
        return Vec::new();
    }
    text.match_indices(needle)
        .map(|(start, m)| (start, start + m.len()))
        .collect()
}

/// Stdout, coloured only when `color` is set and stdout is a terminal
pub fn stdout(color: bool) -> StandardStream {
    let choice = if color && io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print groups in the interactive layout:
///
/// ```text
/// Found matches in 2 files:
///
/// notes/todo.md
///   4: fix the search page
///   ... and 2 more lines.
/// ```
pub fn print_groups<W: WriteColor>(
    out: &mut W,
    groups: &[MatchGroup],
    store: &DocumentStore,
    query: &str,
) -> io::Result<()> {
    if groups.is_empty() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        writeln!(out, "No results found.")?;
        out.reset()?;
        return Ok(());
    }

    writeln!(out)?;
    write!(out, "Found matches in ")?;
    out.set_color(ColorSpec::new().set_bold(true))?;
    write!(out, "{}", groups.len())?;
    out.reset()?;
    writeln!(out, " files:")?;
    writeln!(out)?;

    for group in groups {
        let Some(doc) = store.get(group.doc_id) else {
            continue;
        };

        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        writeln!(out, "{}", doc.path.display())?;
        out.reset()?;

        for &line in &group.lines {
            let content = doc.line(line).unwrap_or_default().trim();
            out.set_color(ColorSpec::new().set_dimmed(true))?;
            write!(out, "  {}:", line)?;
            out.reset()?;
            write!(out, " ")?;
            print_highlighted(out, content, query)?;
            writeln!(out)?;
        }

        if group.hidden() > 0 {
            out.set_color(ColorSpec::new().set_dimmed(true))?;
            writeln!(out, "  ... and {} more lines.", group.hidden())?;
            out.reset()?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn print_highlighted<W: WriteColor>(out: &mut W, content: &str, query: &str) -> io::Result<()> {
    let mut pos = 0;
    for (start, end) in highlight_ranges(content, query) {
        write!(out, "{}", &content[pos..start])?;
        out.set_color(
            ColorSpec::new()
                .set_fg(Some(Color::Black))
                .set_bg(Some(Color::Yellow)),
        )?;
        write!(out, "{}", &content[start..end])?;
        out.reset()?;
        pos = end;
    }
    write!(out, "{}", &content[pos..])
}

/// Print rows as a JSON array
pub fn print_json<W: Write>(out: &mut W, rows: &[SnippetRow]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)
}
