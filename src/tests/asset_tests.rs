use super::*;

const SHEET: &str = "Line ID,Story,Section,Character,Line,Voice Direction,Triggered,Context\n\
                     1,Intro,Gate,Guard,Halt,loud,on_enter,\n\
                     2,Intro,Gate,Mara,Let me pass,calm,,after halt\n";

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn naming_convention_matches_file_name_only() {
    assert!(is_dialogue_source(Path::new("dialogue/IntroAF.csv"), "AF.csv"));
    assert!(!is_dialogue_source(Path::new("dialogue/Intro.csv"), "AF.csv"));
    assert!(!is_dialogue_source(Path::new("AF.csv/Intro.txt"), "AF.csv"));
    assert!(!is_dialogue_source(Path::new("IntroAF.csv"), ""));
}

#[test]
fn asset_path_swaps_extension() {
    assert_eq!(
        asset_path_for(Path::new("data/IntroAF.csv")),
        PathBuf::from("data/IntroAF.asset")
    );
}

#[test]
fn import_file_and_json_roundtrip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = write(dir.path(), "IntroAF.csv", SHEET);

    let asset = DialogueAsset::import_file(&source, &ImportConfig::default()).expect("import");
    assert_eq!(asset.table.keys(), vec![1, 2]);

    let asset_path = asset_path_for(&source);
    asset.save_json(&asset_path).expect("save");
    let loaded = DialogueAsset::load_json(&asset_path).expect("load");
    assert_eq!(loaded, asset);
    assert_eq!(
        loaded.table.lookup(2).map(|r| r.context.as_str()),
        Some("after halt")
    );
}

#[test]
fn load_json_reports_missing_file_as_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = DialogueAsset::load_json(&dir.path().join("none.asset")).unwrap_err();
    assert!(matches!(err, DialogueError::Io { .. }));
}

#[test]
fn refresh_picks_up_edited_sheet() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = write(dir.path(), "IntroAF.csv", SHEET);
    let config = ImportConfig::default();
    let mut asset = DialogueAsset::import_file(&source, &config).expect("import");

    write(
        dir.path(),
        "IntroAF.csv",
        "Line ID,Story,Section,Character,Line\n9,,,,Changed\n",
    );
    assert!(asset.refresh(&config).expect("refresh"));
    assert_eq!(asset.table.keys(), vec![9]);
}

#[test]
fn refresh_falls_back_to_csv_sibling_of_asset_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = write(dir.path(), "IntroAF.csv", SHEET);
    let mut asset = DialogueAsset {
        source_path: asset_path_for(&source),
        table: DialogueTable::new(),
    };

    assert!(asset.refresh(&ImportConfig::default()).expect("refresh"));
    assert_eq!(asset.source_path, source);
    assert_eq!(asset.table.len(), 2);
}

#[test]
fn refresh_keeps_table_when_nothing_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = write(dir.path(), "IntroAF.csv", SHEET);
    let config = ImportConfig::default();
    let mut asset = DialogueAsset::import_file(&source, &config).expect("import");

    fs::remove_file(&source).expect("remove sheet");
    assert!(!asset.refresh(&config).expect("refresh"));
    assert_eq!(asset.table.keys(), vec![1, 2]);
    assert_eq!(asset.source_path, source);
}

#[test]
fn reimport_all_writes_assets_and_reports_failures() {
    let dir = tempfile::tempdir().expect("tempdir");
    let good = write(dir.path(), "IntroAF.csv", SHEET);
    let bad = write(
        dir.path(),
        "BrokenAF.csv",
        "Line ID,Story,Section,Character,Line\nnope,,,,x\n",
    );
    let ignored = write(dir.path(), "notes.csv", SHEET);

    let report = reimport_all([&good, &bad, &ignored], &ImportConfig::default());
    assert_eq!(report.len(), 2);

    assert_eq!(report[0].source, good);
    assert_eq!(report[0].result.as_ref().ok(), Some(&2));
    assert!(report[0].asset.is_file());

    assert!(matches!(
        report[1].result,
        Err(DialogueError::MalformedRow { row: 1, .. })
    ));
    assert!(!report[1].asset.exists());
    assert!(!asset_path_for(&ignored).exists());
}
