use polars::prelude::*;

pub const SHORT_HEADERS: [&str; 4] = ["Name", "Section", "Title", "Meeting Days"];
pub const LONG_HEADERS: [&str; 7] = [
    "Name",
    "Section",
    "Title",
    "Credits",
    "Instructor",
    "Meeting Days",
    "Event Details",
];

/// Builds a string-typed frame with one column per header, rows in the given order.
pub fn rows_to_dataframe<const N: usize>(
    headers: &[&str; N],
    rows: &[[String; N]],
) -> PolarsResult<DataFrame> {
    let columns = headers
        .iter()
        .enumerate()
        .map(|(col_idx, header)| {
            let values: Vec<&str> = rows.iter().map(|row| row[col_idx].as_str()).collect();
            Series::new(PlSmallStr::from(*header), values).into_column()
        })
        .collect::<Vec<_>>();
    DataFrame::new(columns)
}

fn cell_text(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        other => other.to_string(),
    }
}

/// Renders a frame as an ASCII grid with a header row.
pub fn render_text_table(df: &DataFrame) -> String {
    let columns = df.get_columns();
    let col_names: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();

    let cells: Vec<Vec<String>> = (0..df.height())
        .map(|row_idx| {
            columns
                .iter()
                .map(|col| {
                    col.get(row_idx)
                        .map(|av| cell_text(&av))
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = col_names.iter().map(|n| n.chars().count()).collect();
    for row in &cells {
        for (ci, cell) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(cell.chars().count());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let push_row = |out: &mut String, values: &[String]| {
        out.push('|');
        for (ci, value) in values.iter().enumerate() {
            out.push(' ');
            out.push_str(value);
            let pad = widths[ci].saturating_sub(value.chars().count());
            out.push_str(&" ".repeat(pad));
            out.push_str(" |");
        }
        out.push('\n');
    };

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    push_row(&mut out, &col_names);
    out.push_str(&sep);
    out.push('\n');
    for row in &cells {
        push_row(&mut out, row);
    }
    out.push_str(&sep);
    out.push('\n');
    out
}
