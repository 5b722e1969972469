//! Table rendering for the roster view.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_core::PageView;
use roster_model::EditBuffer;

/// Message shown when the filtered row set is empty.
pub const EMPTY_MESSAGE: &str = "No matching results found.";

/// Render the current page as a table plus pagination footer.
///
/// The edit-buffer target row shows the buffered name/email values and a
/// Save/Cancel action slot; every other row shows its stored values and
/// Edit/Delete. The footer is omitted entirely when the whole row set
/// fits on one page.
pub fn render_page(view: &PageView, buffer: Option<&EditBuffer>, ansi: bool) -> String {
    if view.rows.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("S No.", ansi),
        header_cell("Name", ansi),
        header_cell("Username", ansi),
        header_cell("Email", ansi),
        header_cell("Phone", ansi),
        header_cell("Website", ansi),
        header_cell("Actions", ansi),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);

    for (index, record) in view.rows.iter().enumerate() {
        let serial = view.first_serial + index;
        let editing = buffer.filter(|b| b.target == record.id);
        let (name, email) = match editing {
            Some(b) => (b.name.as_str(), b.email.as_str()),
            None => (record.name.as_str(), record.email.as_str()),
        };
        let actions = if editing.is_some() {
            action_cell("Save | Cancel", ansi)
        } else {
            Cell::new("Edit | Delete")
        };
        table.add_row(vec![
            Cell::new(serial),
            Cell::new(name),
            Cell::new(&record.username),
            Cell::new(email),
            Cell::new(&record.phone),
            Cell::new(&record.website),
            actions,
        ]);
    }

    let mut output = table.to_string();
    if view.controls_visible {
        output.push('\n');
        output.push_str(&format_footer(view));
    }
    output
}

/// Pagination footer: page position plus Prev/Next availability.
pub fn format_footer(view: &PageView) -> String {
    let prev = if view.has_prev {
        "Prev"
    } else {
        "Prev (disabled)"
    };
    let next = if view.has_next {
        "Next"
    } else {
        "Next (disabled)"
    };
    format!("Page {} of {} | {prev} | {next}", view.page, view.total_pages)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str, ansi: bool) -> Cell {
    if ansi {
        Cell::new(label)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(label)
    }
}

fn action_cell(label: &str, ansi: bool) -> Cell {
    if ansi {
        Cell::new(label)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(label)
    }
}
