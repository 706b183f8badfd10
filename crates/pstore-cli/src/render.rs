//! Plain-text rendering of the file listing.

use std::io::{self, Write};

use pstore_core::FileRow;

const EMPTY_MESSAGE: &str = "No files yet";

/// Writes `rows` as an aligned table, or the empty-state message.
pub fn render_rows(out: &mut impl Write, rows: &[FileRow]) -> io::Result<()> {
    if rows.is_empty() {
        writeln!(out, "{EMPTY_MESSAGE}")?;
        return Ok(());
    }

    let name_width = column_width("NAME", rows.iter().map(|r| r.name.as_str()));
    let size_width = column_width("SIZE", rows.iter().map(|r| r.size.as_str()));
    let type_width = column_width("TYPE", rows.iter().map(|r| r.mime_type.as_str()));
    let date_width = column_width("CREATED", rows.iter().map(|r| r.date.as_str()));

    writeln!(
        out,
        "{:<name_width$}  {:>size_width$}  {:<type_width$}  {:<date_width$}  ID",
        "NAME", "SIZE", "TYPE", "CREATED"
    )?;
    for row in rows {
        writeln!(
            out,
            "{:<name_width$}  {:>size_width$}  {:<type_width$}  {:<date_width$}  {}",
            row.name, row.size, row.mime_type, row.date, row.id
        )?;
    }
    Ok(())
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, name: &str, size: &str) -> FileRow {
        FileRow {
            id: id.to_string(),
            name: name.to_string(),
            size: size.to_string(),
            url: String::new(),
            mime_type: "text/plain".to_string(),
            date: "18/10/2026, 07.05".to_string(),
        }
    }

    fn render(rows: &[FileRow]) -> String {
        let mut buf = Vec::new();
        render_rows(&mut buf, rows).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_listing_shows_message() {
        assert_eq!(render(&[]), "No files yet\n");
    }

    #[test]
    fn rows_follow_header() {
        let out = render(&[row("a1", "notes.txt", "12 Bytes"), row("b2", "Report.pdf", "1.5 KB")]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("NAME"));
        assert!(lines[1].starts_with("notes.txt "));
        assert!(lines[1].ends_with("a1"));
        assert!(lines[2].contains("1.5 KB"));
    }

    #[test]
    fn columns_align() {
        let out = render(&[row("a", "short", "1 KB"), row("b", "a-much-longer-name.bin", "1 MB")]);
        let lines: Vec<&str> = out.lines().collect();
        let size_col = lines[1].find("1 KB").unwrap();
        assert_eq!(lines[2].find("1 MB").unwrap(), size_col);
    }

    #[test]
    fn column_width_counts_chars() {
        assert_eq!(column_width("NAME", ["한글.txt"].into_iter()), 6);
        assert_eq!(column_width("NAME", std::iter::empty()), 4);
    }
}
