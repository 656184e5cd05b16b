use gridline::grid::{RowId, RowRecord, RowSelection, ToolbarMode};

fn rows(count: u64) -> Vec<RowRecord> {
    (1..=count).map(|id| RowRecord::new(id).with("name", format!("Member {id}"))).collect()
}

fn id(value: u64) -> RowId {
    RowId::from(value)
}

#[test]
fn test_toolbar_follows_selection_size() {
    let mut selection = RowSelection::new(rows(3));
    assert_eq!(selection.toolbar(), ToolbarMode::Default);

    selection.toggle_row(&id(2));
    assert_eq!(selection.toolbar(), ToolbarMode::BulkActions { count: 1 });

    selection.toggle_row(&id(3));
    assert_eq!(selection.toolbar(), ToolbarMode::BulkActions { count: 2 });

    selection.toggle_row(&id(2));
    selection.toggle_row(&id(3));
    assert_eq!(selection.toolbar(), ToolbarMode::Default);
}

#[test]
fn test_bulk_delete_removes_rows_and_selection() {
    let mut selection = RowSelection::new(rows(8));
    selection.toggle_row(&id(2));
    selection.toggle_row(&id(5));

    let removed = selection.delete_rows(&selection.selected_ids());
    assert_eq!(removed, vec![id(2), id(5)]);

    let remaining: Vec<&str> = selection.rows().iter().map(|row| row.id.as_str()).collect();
    assert_eq!(remaining, vec!["1", "3", "4", "6", "7", "8"]);
    assert!(selection.is_empty());
    assert_eq!(selection.toolbar(), ToolbarMode::Default);
}

#[test]
fn test_deleting_unselected_row_keeps_other_selection() {
    let mut selection = RowSelection::new(rows(4));
    selection.toggle_row(&id(1));

    assert_eq!(selection.delete_rows(&[id(3), id(99)]), vec![id(3)]);
    assert!(selection.is_selected(&id(1)));
    assert_eq!(selection.rows().len(), 3);
}

#[test]
fn test_toggle_of_missing_row_is_ignored() {
    let mut selection = RowSelection::new(rows(2));
    selection.delete_rows(&[id(2)]);

    assert!(!selection.toggle_row(&id(2)));
    assert!(selection.is_empty());
    assert_eq!(selection.toolbar(), ToolbarMode::Default);
}

#[test]
fn test_select_all_and_clear() {
    let mut selection = RowSelection::new(rows(5));
    selection.select_all();
    assert_eq!(selection.len(), 5);
    assert_eq!(selection.toolbar(), ToolbarMode::BulkActions { count: 5 });

    selection.clear_selection();
    assert!(selection.is_empty());
}

#[test]
fn test_selected_ids_follow_row_order() {
    let mut selection = RowSelection::new(rows(12));
    selection.toggle_row(&id(10));
    selection.toggle_row(&id(2));
    selection.toggle_row(&id(7));

    assert_eq!(selection.selected_ids(), vec![id(2), id(7), id(10)]);
}

#[test]
fn test_replace_rows_prunes_selection() {
    let mut selection = RowSelection::new(rows(4));
    selection.toggle_row(&id(1));
    selection.toggle_row(&id(4));

    selection.replace_rows(rows(2));
    assert_eq!(selection.selected_ids(), vec![id(1)]);
    assert_eq!(selection.toolbar(), ToolbarMode::BulkActions { count: 1 });
}
