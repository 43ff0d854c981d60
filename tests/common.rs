use active_format_dialogue::Column;

/// Header row with every column title in sheet order.
pub fn header_row() -> Vec<String> {
    Column::ALL
        .iter()
        .map(|column| column.title().to_string())
        .collect()
}

/// Full 8-cell data row whose text cells are derived from `id`.
pub fn data_row(id: &str) -> Vec<String> {
    vec![
        id.to_string(),
        format!("story {id}"),
        format!("section {id}"),
        format!("character {id}"),
        format!("line {id}"),
        format!("voice {id}"),
        format!("trigger {id}"),
        format!("context {id}"),
    ]
}
