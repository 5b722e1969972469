//! Tests for the paginator, including the partition property.

use std::num::NonZeroUsize;

use proptest::prelude::*;
use roster_model::{QueryState, RecordId, SortOrder, UserRecord};
use roster_query::{paginate, run_query};

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

fn records(count: u64) -> Vec<UserRecord> {
    (1..=count).map(|id| record(id, &format!("User {id:02}"))).collect()
}

fn size(value: usize) -> NonZeroUsize {
    NonZeroUsize::new(value).expect("nonzero page size")
}

#[test]
fn test_seven_records_page_three_of_three() {
    let rows = records(7);
    let page = paginate(&rows, size(3), 3);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.rows.len(), 1);
    assert_eq!(page.rows[0].id, RecordId::new(7));
}

#[test]
fn test_empty_rows_have_zero_pages() {
    let page = paginate(&[], size(3), 1);
    assert_eq!(page.total_pages, 0);
    assert!(page.rows.is_empty());
}

#[test]
fn test_out_of_range_page_is_empty() {
    let rows = records(4);
    let page = paginate(&rows, size(3), 5);
    assert_eq!(page.total_pages, 2);
    assert!(page.rows.is_empty());

    // Page 0 is out of range too; pages are 1-based.
    let page = paginate(&rows, size(3), 0);
    assert!(page.rows.is_empty());
}

#[test]
fn test_exact_multiple_has_no_trailing_page() {
    let rows = records(6);
    let page = paginate(&rows, size(3), 2);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.rows.len(), 3);
    let page = paginate(&rows, size(3), 3);
    assert!(page.rows.is_empty());
}

proptest! {
    #[test]
    fn pages_partition_rows_exactly(count in 0u64..40, page_size in 1usize..7) {
        let rows = records(count);
        let page_size = size(page_size);
        let total = paginate(&rows, page_size, 1).total_pages;

        let mut concatenated = Vec::new();
        for page in 1..=total {
            concatenated.extend(paginate(&rows, page_size, page).rows);
        }
        prop_assert_eq!(concatenated, rows);
    }

    #[test]
    fn asc_and_desc_are_exact_reverses(names in proptest::collection::hash_set("[a-z]{1,8}", 0..12)) {
        // Unique case-folded names, so there are no ties to break.
        let rows: Vec<UserRecord> = names
            .iter()
            .enumerate()
            .map(|(index, name)| record(index as u64 + 1, name))
            .collect();

        let asc = run_query(&rows, &QueryState { sort: SortOrder::Ascending, ..QueryState::default() });
        let mut desc = run_query(&rows, &QueryState { sort: SortOrder::Descending, ..QueryState::default() });
        desc.reverse();
        prop_assert_eq!(asc, desc);
    }
}
