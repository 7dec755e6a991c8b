/// Widest a single cell may grow before it is truncated with `…`.
const MAX_CELL_WIDTH: usize = 48;

/// Rows of pre-rendered cells under fixed headers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Two-column key/value table.
    #[must_use]
    pub fn key_value(pairs: Vec<(&'static str, String)>) -> Self {
        let mut table = Self::new(vec!["field", "value"]);
        for (key, value) in pairs {
            table.push(vec![key.to_string(), value]);
        }
        table
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render as aligned columns with a divider under the headers.
    #[must_use]
    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return String::from("(no rows)");
        }

        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(header.len())
                    .min(MAX_CELL_WIDTH)
            })
            .collect();

        let header_line = join_cells(
            self.headers
                .iter()
                .zip(&widths)
                .map(|(header, width)| pad(header, *width, false)),
        );
        let divider = "-".repeat(header_line.chars().count());

        let mut lines = vec![header_line, divider];
        for row in &self.rows {
            lines.push(join_cells(widths.iter().enumerate().map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let cell = truncate(cell, *width);
                let numeric = looks_numeric(&cell);
                pad(&cell, *width, numeric)
            })));
        }
        lines.join("\n")
    }
}

fn join_cells(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join("  ").trim_end().to_string()
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn renders_aligned_columns() {
        let mut table = Table::new(vec!["#", "title", "rating"]);
        table.push(vec!["0".into(), "Owls".into(), "4.5".into()]);
        table.push(vec!["1".into(), "Hawks of the North".into(), "3.0".into()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "#  title               rating");
        assert_eq!(lines[1], "-".repeat(29));
        assert_eq!(lines[2], "0  Owls                   4.5");
        assert_eq!(lines[3], "1  Hawks of the North     3.0");
    }

    #[test]
    fn empty_table_says_so() {
        assert_eq!(Table::new(vec!["title"]).render(), "(no rows)");
    }

    #[test]
    fn long_cells_are_truncated() {
        let mut table = Table::new(vec!["title"]);
        table.push(vec!["x".repeat(MAX_CELL_WIDTH + 10)]);
        let rendered = table.render();
        let row = rendered.lines().nth(2).unwrap();
        assert_eq!(row.chars().count(), MAX_CELL_WIDTH);
        assert!(row.ends_with('…'));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let mut table = Table::new(vec!["a", "b"]);
        table.push(vec!["only".into()]);
        assert!(table.render().lines().nth(2).unwrap().ends_with('-'));
    }
}
