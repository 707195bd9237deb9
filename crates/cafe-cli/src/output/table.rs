/// Rendering limits for [`render_entity_table`].
#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;
const SEPARATOR: &str = "  ";

/// Render an aligned table for string rows.
///
/// Numeric cells (ids, quantities, amounts) are right-aligned so money columns
/// line up. When `max_width` is set the widest columns shrink first and their
/// cells are cut with an ellipsis.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .fold(header.chars().count().max(MIN_COLUMN), usize::max)
        })
        .collect::<Vec<_>>();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&clip(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let clipped = clip(cell, *width);
                let padded = pad(&clipped, *width, is_numeric(&clipped));
                if options.color {
                    colorize(&padded, &clipped)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line);
    }
    lines.join("\n")
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    let floor = |index: usize| headers[index].chars().count().max(MIN_COLUMN);

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > floor(*index))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        match widest {
            Some(index) => widths[index] -= 1,
            None => break,
        }
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out = value.chars().take(width.saturating_sub(1)).collect::<String>();
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

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.chars().any(|ch| ch.is_ascii_digit())
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '.'))
}

/// Highlight order statuses and audit actions; `padded` keeps its alignment.
fn colorize(padded: &str, cell: &str) -> String {
    let code = match cell.to_ascii_lowercase().as_str() {
        "paid" => "32",
        "new" | "ready" | "update" => "33",
        "cancelled" | "delete" => "31",
        _ => return padded.to_string(),
    };
    padded.replacen(cell, &format!("\u{1b}[{code}m{cell}\u{1b}[0m"), 1)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{TableOptions, render_entity_table};

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["1".into(), "Latte".into(), "3.50".into()],
            vec!["12".into(), "Cheesecake".into(), "120.00".into()],
        ]
    }

    #[test]
    fn amounts_are_right_aligned() {
        let table = render_entity_table(&["id", "name", "price"], &rows(), PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "id    name        price ");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "   1  Latte         3.50");
        assert_eq!(lines[3], "  12  Cheesecake  120.00");
    }

    #[test]
    fn narrow_terminal_clips_widest_column() {
        let options = TableOptions {
            max_width: Some(20),
            color: false,
        };
        let table = render_entity_table(&["id", "name", "price"], &rows(), options);

        assert!(table.contains('…'));
        assert!(table.lines().all(|line| line.chars().count() <= 20));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let table = render_entity_table(&["id", "note"], &[vec!["1".into()]], PLAIN);
        assert!(table.lines().nth(2).is_some_and(|line| line.ends_with("-   ")));
    }

    #[test]
    fn statuses_are_colored_when_enabled() {
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let table = render_entity_table(&["status"], &[vec!["paid".into()]], options);
        assert!(table.contains("\u{1b}[32mpaid\u{1b}[0m"));
    }
}
