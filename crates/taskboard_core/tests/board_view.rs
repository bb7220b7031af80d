use rand::rngs::StdRng;
use rand::SeedableRng;
use taskboard_core::{
    sample_board, BoardView, IndexSource, Quadrant, RngSource, ViewMode, TOGGLE_TRANSITION_MS,
};

struct FirstIndex;

impl IndexSource for FirstIndex {
    fn pick(&mut self, _bound: usize) -> usize {
        0
    }
}

#[test]
fn same_seed_gives_same_flat_list() {
    let board = sample_board();
    let first = BoardView::load(board.clone(), &mut RngSource(StdRng::seed_from_u64(5)));
    let second = BoardView::load(board, &mut RngSource(StdRng::seed_from_u64(5)));
    assert_eq!(first.flat_list(), second.flat_list());
}

#[test]
fn fixed_source_rotates_flat_list() {
    let board = sample_board();
    let expected = {
        let mut labels = board.flat_labels();
        labels.rotate_left(1);
        labels
    };

    let view = BoardView::load(board, &mut FirstIndex);
    assert_eq!(view.flat_list(), expected.as_slice());
}

#[test]
fn drag_then_toggle_shows_reordered_matrix() {
    let mut view = BoardView::load(sample_board(), &mut FirstIndex);
    let flat_before = view.flat_list().to_vec();
    let ids = view.board().category(Quadrant::DoNow).task_ids();

    view.drag_end(Quadrant::DoNow, ids[7], ids[0]).unwrap();
    assert_eq!(view.toggle().unwrap(), ViewMode::Matrix);

    let column = view.board().category(Quadrant::DoNow);
    assert_eq!(column.tasks[0].id, ids[7]);
    assert_eq!(column.tasks[0].label, "🤝 Team Project Check-in #4 (Apr 21)");
    assert_eq!(view.flat_list(), flat_before.as_slice());
}

#[test]
fn transition_constant_matches_shell_timing() {
    assert_eq!(TOGGLE_TRANSITION_MS, 400);
}
