use card_impose::*;

#[test]
fn test_sheet_count_is_ceiling_division() {
    let spec = SheetSpec::default();

    for (cards, sheets) in [(1, 1), (9, 1), (10, 2), (18, 2), (19, 3), (27, 3)] {
        let stats = calculate_statistics(cards, &spec).unwrap();
        assert_eq!(stats.sheets, sheets, "{} cards", cards);
        assert_eq!(stats.output_pages, sheets * 2);
    }
}

#[test]
fn test_twenty_card_example() {
    // 20 poker cards on a 3x3 A4 grid: three sheets, six pages, the last
    // sheet holds two cards and seven blanks
    let spec = SheetSpec::default();
    let stats = calculate_statistics(20, &spec).unwrap();

    assert_eq!(stats.cards, 20);
    assert_eq!(stats.sheets, 3);
    assert_eq!(stats.output_pages, 6);
    assert_eq!(stats.blank_cells, 7);
}

#[test]
fn test_full_sheets_have_no_blanks() {
    let spec = SheetSpec::default();
    let stats = calculate_statistics(18, &spec).unwrap();
    assert_eq!(stats.blank_cells, 0);
}

#[test]
fn test_empty_batch_is_an_error() {
    let spec = SheetSpec::default();
    assert!(matches!(
        calculate_statistics(0, &spec),
        Err(ImposeError::NoCards)
    ));
}

#[test]
fn test_grid_dimension_changes_capacity() {
    let spec = SheetSpec {
        grid_size: 2,
        ..SheetSpec::default()
    };

    let stats = calculate_statistics(5, &spec).unwrap();
    assert_eq!(stats.sheets, 2);
    assert_eq!(stats.output_pages, 4);
    assert_eq!(stats.blank_cells, 3);
}
