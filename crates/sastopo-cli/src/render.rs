//! Plain-text rendering of derived panels.

use colored::Colorize;

use sastopo_panel::linkrate::LINK_RATE_LABELS;
use sastopo_panel::panel::{LinkTable, VertexPanel};
use sastopo_panel::vertex::Vertex;

pub fn print_panel(vertex: &Vertex, panel: &VertexPanel) {
    println!("{}", vertex.display_label().bold());

    let width = panel
        .rows
        .iter()
        .map(|row| row.field.len())
        .max()
        .unwrap_or(0);
    for row in &panel.rows {
        let field = format!("{:width$}", row.field);
        println!("  {}  {}", field.cyan(), row.value.as_deref().unwrap_or("-"));
    }

    if let Some(table) = &panel.rate_table {
        print_table("Link rates", table);
    }
    if let Some(table) = &panel.error_table {
        print_table("Link errors", table);
    }
}

fn print_table(title: &str, table: &LinkTable) {
    println!("\n{}", title.bold());

    let mut widths: Vec<usize> = table.header.iter().map(String::len).collect();
    for row in &table.rows {
        widths[0] = widths[0].max(format!("PHY {}", row.phy).len());
        for (width, value) in widths[1..].iter_mut().zip(&row.values) {
            *width = (*width).max(value.len());
        }
    }

    let header: Vec<String> = table
        .header
        .iter()
        .zip(&widths)
        .map(|(cell, width)| format!("{:1$}", cell, *width))
        .collect();
    println!("  {}", header.join("  ").green());

    for row in &table.rows {
        let mut cells = vec![format!("{:width$}", format!("PHY {}", row.phy), width = widths[0])];
        for (value, width) in row.values.iter().zip(&widths[1..]) {
            cells.push(format!("{:1$}", value, *width));
        }
        println!("  {}", cells.join("  "));
    }
}

pub fn print_rates() {
    println!("{}", "Link-rate codes".bold());
    for (code, label) in LINK_RATE_LABELS.iter().enumerate() {
        println!("  {code:>2}  {label}");
    }
}
