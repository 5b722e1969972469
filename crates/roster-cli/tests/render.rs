//! Tests for the table renderer.

use roster_cli::render::{EMPTY_MESSAGE, format_footer, render_page};
use roster_core::PageView;
use roster_model::{EditBuffer, RecordId, UserRecord};

fn record(id: u64, name: &str) -> UserRecord {
    UserRecord {
        id: RecordId::new(id),
        name: name.to_string(),
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        phone: "555-0100".to_string(),
        website: "example.org".to_string(),
    }
}

fn page_view(rows: Vec<UserRecord>) -> PageView {
    PageView {
        page: 1,
        total_pages: 1,
        total_rows: rows.len(),
        first_serial: 1,
        editing: None,
        controls_visible: false,
        has_prev: false,
        has_next: false,
        rows,
    }
}

#[test]
fn test_empty_page_renders_empty_state() {
    let view = page_view(Vec::new());
    insta::assert_snapshot!(render_page(&view, None, false), @"No matching results found.");
}

#[test]
fn test_rows_render_with_page_relative_serials() {
    let view = PageView {
        first_serial: 4,
        page: 2,
        total_pages: 3,
        total_rows: 7,
        controls_visible: true,
        has_prev: true,
        has_next: true,
        ..page_view(vec![record(14, "Ann"), record(9, "Bob"), record(2, "Cid")])
    };
    let output = render_page(&view, None, false);

    for column in ["S No.", "Name", "Username", "Email", "Phone", "Website", "Actions"] {
        assert!(output.contains(column), "missing column header {column}");
    }
    for cell in ["Ann", "Bob", "Cid", "user14", "user9@example.com", "Edit | Delete"] {
        assert!(output.contains(cell), "missing cell {cell}");
    }
    // Serial numbers continue across pages.
    for serial in ["4", "5", "6"] {
        assert!(output.contains(serial), "missing serial {serial}");
    }
    assert!(output.contains("Page 2 of 3"));
}

#[test]
fn test_editing_row_shows_buffer_values_and_save_cancel() {
    let rows = vec![record(1, "Ann"), record(2, "Bob")];
    let view = PageView {
        editing: Some(RecordId::new(2)),
        ..page_view(rows.clone())
    };
    let buffer = EditBuffer {
        target: RecordId::new(2),
        name: "Bobby Draft".to_string(),
        email: "draft@example.com".to_string(),
    };
    let output = render_page(&view, Some(&buffer), false);

    assert!(output.contains("Bobby Draft"));
    assert!(output.contains("draft@example.com"));
    assert!(output.contains("Save | Cancel"));
    // The untouched row keeps its normal action slot.
    assert!(output.contains("Edit | Delete"));
    // The stored value of the edited field is not rendered.
    assert!(!output.contains("user2@example.com"));
}

#[test]
fn test_footer_marks_disabled_edges() {
    let last_page = PageView {
        page: 3,
        total_pages: 3,
        has_prev: true,
        has_next: false,
        ..page_view(vec![record(7, "Gia")])
    };
    insta::assert_snapshot!(format_footer(&last_page), @"Page 3 of 3 | Prev | Next (disabled)");

    let first_page = PageView {
        page: 1,
        total_pages: 3,
        has_prev: false,
        has_next: true,
        ..page_view(vec![record(1, "Ann")])
    };
    insta::assert_snapshot!(format_footer(&first_page), @"Page 1 of 3 | Prev (disabled) | Next");
}

#[test]
fn test_footer_hidden_when_rows_fit_one_page() {
    let view = page_view(vec![record(1, "Ann")]);
    let output = render_page(&view, None, false);
    assert!(!output.contains("Page 1 of"));
}

#[test]
fn test_empty_message_constant_matches_render() {
    assert_eq!(render_page(&page_view(Vec::new()), None, true), EMPTY_MESSAGE);
}
