use std::io::Write;
use taskboard_core::{
    board_to_json, load_board_file, sample_board, BoardDataError, BoardError, Quadrant,
};

#[test]
fn load_board_file_reads_written_board() {
    let board = sample_board();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(board_to_json(&board).unwrap().as_bytes())
        .unwrap();

    let loaded = load_board_file(file.path()).unwrap();
    assert_eq!(loaded, board);
    assert_eq!(
        loaded.category(Quadrant::Delegate).title,
        "⚡ Urgent, Not Important (Quick Tasks)"
    );
}

#[test]
fn load_board_file_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_board_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, BoardDataError::Io(_)));
    assert!(err.to_string().contains("board file read failed"));
}

#[test]
fn load_board_file_reports_duplicate_quadrants() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"categories":[
            {{"quadrant":"do_now","title":"A"}},
            {{"quadrant":"do_now","title":"B"}},
            {{"quadrant":"delegate","title":"C"}},
            {{"quadrant":"drop","title":"D"}}
        ]}}"#
    )
    .unwrap();

    let err = load_board_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        BoardDataError::Invalid(BoardError::DuplicateQuadrant(Quadrant::DoNow))
    ));
}

#[test]
fn duplicate_labels_stay_distinct_tasks() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"categories":[
            {{"quadrant":"do_now","title":"A","tasks":["📅 Quiz","📅 Quiz"]}},
            {{"quadrant":"schedule","title":"B"}},
            {{"quadrant":"delegate","title":"C"}},
            {{"quadrant":"drop","title":"D"}}
        ]}}"#
    )
    .unwrap();

    let mut board = load_board_file(file.path()).unwrap();
    let ids = board.category(Quadrant::DoNow).task_ids();
    assert_ne!(ids[0], ids[1]);

    assert!(board.reorder_tasks(Quadrant::DoNow, ids[1], ids[0]).is_moved());
    assert_eq!(
        board.category(Quadrant::DoNow).task_ids(),
        vec![ids[1], ids[0]]
    );
}
