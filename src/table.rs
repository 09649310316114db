//! Fixed-width ASCII table rendering for console inspection.

use std::borrow::Cow;
use std::fmt::Write as _;

pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let column_count = headers.len();
    let mut widths = headers
        .iter()
        .map(|header| header.chars().count().max(1))
        .collect::<Vec<_>>();
    for row in rows {
        for (idx, value) in row.iter().enumerate().take(column_count) {
            widths[idx] = widths[idx].max(value.chars().count());
        }
    }

    let mut output = String::new();
    let _ = writeln!(output, "{}", format_row(headers, &widths));
    let rule = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(output, "{rule}");
    for row in rows {
        let _ = writeln!(output, "{}", format_row(row, &widths));
    }
    output
}

pub fn print_table(headers: &[String], rows: &[Vec<String>]) {
    print!("{}", render_table(headers, rows));
}

fn format_row(values: &[String], widths: &[usize]) -> String {
    let mut line = values
        .iter()
        .zip(widths)
        .map(|(value, width)| {
            let cell = sanitize_cell(value);
            let padding = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join("  ");
    while line.ends_with(' ') {
        line.pop();
    }
    line
}

fn sanitize_cell(value: &str) -> Cow<'_, str> {
    if value.contains(['\n', '\r', '\t']) {
        Cow::Owned(
            value
                .chars()
                .map(|ch| match ch {
                    '\n' | '\r' | '\t' => ' ',
                    other => other,
                })
                .collect(),
        )
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_table_pads_columns_to_widest_cell() {
        let headers = vec!["id".to_string(), "Channel".to_string()];
        let rows = vec![
            vec!["1".to_string(), "Channel1".to_string()],
            vec!["22".to_string(), "C2".to_string()],
        ];
        let rendered = render_table(&headers, &rows);
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "id  Channel");
        assert_eq!(lines[1], "--  --------");
        assert_eq!(lines[2], "1   Channel1");
        assert_eq!(lines[3], "22  C2");
    }

    #[test]
    fn control_characters_become_spaces() {
        let headers = vec!["note".to_string()];
        let rows = vec![vec!["a\tb".to_string()]];
        let rendered = render_table(&headers, &rows);
        assert!(rendered.contains("a b"));
    }
}
