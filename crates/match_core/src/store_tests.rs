use super::*;
use crate::types::MatchOutcome;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn store_in(dir: &tempfile::TempDir) -> MatchStore {
    MatchStore::new(dir.path().join("matches.csv"))
}

#[test]
fn test_missing_file_loads_empty() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);

    assert_eq!(store.load_all().unwrap(), Vec::new());
    assert!(!store.path().exists());
}

#[test]
fn test_first_append_writes_header() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);

    store
        .append(&MatchRecord::new("Mirage", 13, 4, MatchOutcome::Win))
        .unwrap();

    let contents = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(contents, "Map,T Rounds,CT Rounds,Result\nMirage,13,4,Win\n");
}

#[test]
fn test_later_appends_skip_header() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);

    store
        .append(&MatchRecord::new("Nuke", 6, 6, MatchOutcome::Loss))
        .unwrap();
    store
        .append(&MatchRecord::new("Dust 2", 9, 9, MatchOutcome::OvertimeWinCt))
        .unwrap();

    let contents = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(
        contents,
        "Map,T Rounds,CT Rounds,Result\nNuke,6,6,Loss\nDust 2,9,9,Overtime Win (CT)\n"
    );
}

#[test]
fn test_empty_file_gets_header() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "").unwrap();

    assert!(store.load_all().unwrap().is_empty());

    store
        .append(&MatchRecord::new("Anubis", 1, 12, MatchOutcome::Win))
        .unwrap();
    assert_eq!(
        store.load_all().unwrap(),
        vec![MatchRecord::new("Anubis", 1, 12, MatchOutcome::Win)]
    );
}

#[test]
fn test_append_after_missing_final_newline() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "Map,T Rounds,CT Rounds,Result\nDust 2,7,6,Win").unwrap();

    let before = store.load_all().unwrap();
    let record = MatchRecord::new("Nuke", 3, 2, MatchOutcome::Loss);
    store.append(&record).unwrap();

    assert_eq!(
        std::fs::read_to_string(store.path()).unwrap(),
        "Map,T Rounds,CT Rounds,Result\nDust 2,7,6,Win\nNuke,3,2,Loss\n"
    );
    let mut expected = before;
    expected.push(record);
    assert_eq!(store.load_all().unwrap(), expected);
}

#[test]
fn test_append_after_crlf_rows() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "Map,T Rounds,CT Rounds,Result\r\nDust 2,7,6,Win\r\n").unwrap();

    store
        .append(&MatchRecord::new("Nuke", 3, 2, MatchOutcome::Loss))
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(store.path()).unwrap(),
        "Map,T Rounds,CT Rounds,Result\r\nDust 2,7,6,Win\r\nNuke,3,2,Loss\n"
    );
    assert_eq!(store.load_all().unwrap().len(), 2);
}

#[test]
fn test_header_only_file_is_empty() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "Map,T Rounds,CT Rounds,Result\n").unwrap();

    assert_eq!(store.load_all().unwrap(), Vec::new());
}

#[test]
fn test_map_with_comma_is_quoted() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);
    let record = MatchRecord::new("Cache, old", 8, 5, MatchOutcome::Win);

    store.append(&record).unwrap();

    let contents = std::fs::read_to_string(store.path()).unwrap();
    assert!(contents.ends_with("\"Cache, old\",8,5,Win\n"));
    assert_eq!(store.load_all().unwrap(), vec![record]);
}

#[test]
fn test_negative_rounds_are_malformed() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(
        store.path(),
        "Map,T Rounds,CT Rounds,Result\nMirage,13,2,Win\nNuke,-1,4,Loss\n",
    )
    .unwrap();

    match store.load_all() {
        Err(StoreError::Malformed { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected malformed row, got {:?}", other),
    }
}

#[test]
fn test_unknown_label_is_malformed() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(
        store.path(),
        "Map,T Rounds,CT Rounds,Result\nMirage,13,2,Draw\n",
    )
    .unwrap();

    assert!(matches!(
        store.load_all(),
        Err(StoreError::Malformed { line: 2, .. })
    ));
}

#[test]
fn test_short_row_is_malformed() {
    let dir = tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "Map,T Rounds,CT Rounds,Result\nMirage,13\n").unwrap();

    match store.load_all() {
        Err(StoreError::Malformed { line, reason }) => {
            assert_eq!(line, 2);
            assert!(reason.contains("fields"), "unexpected reason: {}", reason);
        }
        other => panic!("expected malformed row, got {:?}", other),
    }
}
