use active_format_dialogue::{
    parse_csv, Column, DialogueError, DialogueLineRef, DialogueSeries, DialogueTable,
    EmptyRowPolicy, ImportConfig, LineLayout,
};

mod common;
use common::{data_row, header_row};

#[test]
fn every_imported_row_is_reachable_with_equal_fields() {
    let rows = vec![header_row(), data_row("1"), data_row("2"), data_row("30")];
    let table = DialogueTable::from_rows(&rows).expect("import");

    for cells in &rows[1..] {
        let id: i32 = cells[0].parse().expect("numeric id");
        let record = table.lookup(id).expect("record present");
        assert_eq!(record.id, id);
        for column in Column::ALL.iter().skip(1) {
            assert_eq!(record.text(*column), Some(cells[column.index()].as_str()));
        }
    }
    assert_eq!(table.keys(), vec![1, 2, 30]);
}

#[test]
fn truncation_drops_rows_after_first_empty_id() {
    let rows = vec![
        header_row(),
        data_row("1"),
        data_row("2"),
        data_row(""),
        data_row("4"),
    ];
    let table = DialogueTable::from_rows(&rows).expect("import");
    assert_eq!(table.keys(), vec![1, 2]);
    assert!(table.lookup(4).is_none());

    let mut skipping = DialogueTable::new();
    skipping
        .import_with(&rows, EmptyRowPolicy::Skip)
        .expect("import");
    assert_eq!(skipping.keys(), vec![1, 2, 4]);
}

#[test]
fn repeated_id_resolves_to_last_row() {
    let mut second = data_row("5");
    second[4] = "the later line".to_string();
    let table = DialogueTable::from_rows(&[header_row(), data_row("5"), second]).expect("import");

    let record = table.lookup(5).expect("record 5");
    assert_eq!(record.line, "the later line");
}

#[test]
fn malformed_id_leaves_previous_table_unchanged() {
    let mut table = DialogueTable::from_rows(&[header_row(), data_row("1")]).expect("import");
    let before = table.clone();

    let err = table
        .import(&[header_row(), data_row("abc")])
        .expect_err("must fail");
    assert!(matches!(err, DialogueError::MalformedRow { row: 1, ref raw_id } if raw_id == "abc"));
    assert_eq!(table, before);
}

#[test]
fn layout_for_65_characters_at_width_30_is_three_lines() {
    let mut row = data_row("1");
    row[4] = "w".repeat(65);
    let table = DialogueTable::from_rows(&[header_row(), row]).expect("import");

    let line = DialogueLineRef::resolved(&table, 1, 30);
    assert_eq!(line.layout().line_height, 3);
}

#[test]
fn missing_id_is_absent_not_an_error() {
    let table = DialogueTable::from_rows(&[header_row(), data_row("1")]).expect("import");
    let line = DialogueLineRef::resolved(&table, 999, 30);

    assert!(line.resolved_record().is_none());
    assert_eq!(line.layout(), LineLayout::default());
    assert_eq!(line.display_text(), "");
}

#[test]
fn csv_sheet_to_series_walkthrough() {
    let sheet = "\
Line ID,Story,Section,Character,Line,Voice Direction,Triggered,Context
100,Demo,Start,Ava,Good morning,cheerful,on_start,
101,Demo,Start,Ben,\"Morning, Ava\",sleepy,,replies to 100
102,Demo,Start,Ava,Coffee?,,,
";
    let rows = parse_csv(sheet).expect("csv");
    let mut table = DialogueTable::new();
    table
        .import_with_config(&rows, &ImportConfig::default())
        .expect("import");

    let mut series = DialogueSeries::new(
        table
            .keys()
            .into_iter()
            .map(|id| DialogueLineRef::resolved(&table, id, 30))
            .collect(),
    );
    assert_eq!(series.advance(), Some("Good morning"));
    assert_eq!(series.advance(), Some("Morning, Ava"));
    assert_eq!(series.advance(), Some("Coffee?"));
    assert_eq!(series.advance(), Some("Good morning"));
}
