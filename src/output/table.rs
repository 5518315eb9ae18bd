use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::core::HistoryEntry;
use crate::utils::Timezone;

fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Render the session history, oldest first
pub(crate) fn render_history_table<'a>(
    entries: impl Iterator<Item = &'a HistoryEntry>,
    timezone: Timezone,
    use_color: bool,
) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table.set_header(vec![
        header_cell("#", use_color),
        header_cell("Time", use_color),
        header_cell("Command", use_color),
        header_cell("Opened", use_color),
    ]);

    let mut rows = 0;
    for (i, entry) in entries.enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(timezone.format(entry.timestamp, "%H:%M:%S")),
            Cell::new(&entry.command),
            Cell::new(entry.app_opened.as_deref().unwrap_or("-")),
        ]);
        rows += 1;
    }

    if rows == 0 {
        return "No commands in history yet.".to_string();
    }
    table.to_string()
}
