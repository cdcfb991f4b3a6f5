use crate::model::{Color, DisplayDocument};
use anyhow::Result;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn print_cli_table(doc: &DisplayDocument) -> Result<()> {
    println!("{}", render_table(doc));
    Ok(())
}

fn render_table(doc: &DisplayDocument) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("{} {}\n", color_marker(doc.color), doc.title));
    out.push_str(&format!(
        "Checked at: {}\n\n",
        doc.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    // Inline fields share one row on the chat surface; keep them compact here.
    let inline: Vec<String> = doc
        .fields
        .iter()
        .filter(|f| f.inline)
        .map(|f| format!("{}: {}", f.name, f.value))
        .collect();
    if !inline.is_empty() {
        out.push_str(&inline.join("  |  "));
        out.push('\n');
    }

    let rows: Vec<FieldRow> = doc
        .fields
        .iter()
        .filter(|f| !f.inline)
        .map(|f| FieldRow {
            name: f.name.clone(),
            value: f.value.clone(),
        })
        .collect();

    if !rows.is_empty() {
        out.push('\n');
        out.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        out.push('\n');
    }

    out
}

fn color_marker(color: Color) -> &'static str {
    match color {
        Color::Alert => "[!]",
        Color::Safe => "[ok]",
    }
}
