//! Tests for the board component.

use super::*;
use crate::dnd::{DragLocation, DragSource, DropTargetRecord, Edge};
use crate::model::{DropError, EffectError, Outcome, RegistryError, StateError};
use crate::source::sample::basic_board;
use crate::view::MountedBoard;

// ===== Test Helpers =====

fn board() -> (Board, MountedBoard) {
    let board = Board::new(basic_board(10).expect("seed data is valid"), LiveRegion::default());
    let mounted = MountedBoard::mount(board.state(), board.registry());
    (board, mounted)
}

fn column_id(s: &str) -> ColumnId {
    ColumnId::new(s).expect("valid column id")
}

fn item(n: usize) -> ItemId {
    ItemId::new(format!("id:{n}")).expect("valid item id")
}

fn ids(board: &Board, column: &str) -> Vec<String> {
    board
        .state()
        .column(&column_id(column))
        .expect("column exists")
        .items()
        .iter()
        .map(|item| item.id().to_string())
        .collect()
}

fn card_drop(board: &Board, dragged: usize, from: &str, current: Vec<DropTargetRecord>) -> DropEvent {
    DropEvent::new(
        board.instance_id(),
        DragSource::Card(item(dragged)),
        DragLocation {
            current,
            initial: vec![
                DropTargetRecord::card(item(dragged)),
                DropTargetRecord::column(column_id(from)),
            ],
        },
    )
}

// ===== Mutations =====

#[test]
fn move_card_to_top_of_other_column() {
    let (mut board, mounted) = board();

    let operation = board
        .move_card(&column_id("confluence"), &column_id("jira"), 0, Some(0), Trigger::Keyboard)
        .expect("valid move")
        .expect("recorded");

    assert_eq!(ids(&board, "confluence").len(), 9);
    assert_eq!(ids(&board, "jira").len(), 11);
    assert_eq!(ids(&board, "jira")[0], "id:1");
    assert_eq!(board.state().total_items(), 30);
    assert_eq!(board.state().last_operation(), Some(&operation));
    assert_eq!(mounted.card(&item(1)).expect("mounted").flashes(), 1);
}

#[test]
fn same_column_move_changes_nothing_and_emits_nothing() {
    let (mut board, mounted) = board();
    let before = board.snapshot();

    let result = board
        .move_card(&column_id("jira"), &column_id("jira"), 0, Some(3), Trigger::Keyboard)
        .expect("no-op is not an error");

    assert_eq!(result, None);
    assert!(Arc::ptr_eq(&before, &board.snapshot()));
    assert_eq!(mounted.total_flashes(), 0);
    assert!(board.announcer().history().is_empty());
}

#[test]
fn rejected_reorder_leaves_state_untouched() {
    let (mut board, _mounted) = board();
    let before = board.snapshot();

    let err = board
        .reorder_column(0, 3, Trigger::Pointer)
        .expect_err("only three columns");

    assert!(matches!(
        err,
        BoardError::State(StateError::IndexOutOfBounds { index: 3, len: 3 })
    ));
    assert!(Arc::ptr_eq(&before, &board.snapshot()));
}

#[test]
fn effect_failure_keeps_committed_mutation() {
    let (mut board, mut mounted) = board();
    mounted.unmount_card(&item(10));

    let err = board
        .reorder_card(&column_id("confluence"), 9, 0, Trigger::Keyboard)
        .expect_err("card 10 is not mounted");

    assert!(matches!(
        err,
        BoardError::Effect(EffectError::Registry(RegistryError::CardNotRegistered(_)))
    ));
    assert_eq!(ids(&board, "confluence")[0], "id:10");
}

#[test]
fn keyboard_reorder_announces_pointer_reorder_does_not() {
    let (mut board, mounted) = board();

    board
        .reorder_card(&column_id("jira"), 9, 0, Trigger::Pointer)
        .expect("valid reorder");
    assert!(board.announcer().history().is_empty());

    board
        .reorder_card(&column_id("jira"), 0, 9, Trigger::Keyboard)
        .expect("valid reorder");
    assert_eq!(board.announcer().history().len(), 1);

    // Both flashed the same card.
    assert_eq!(mounted.card(&item(20)).expect("mounted").flashes(), 2);
}

// ===== Commands =====

#[test]
fn execute_move_card_to_column_focuses_menu_trigger() {
    let (mut board, mounted) = board();

    let operation = board
        .execute(BoardCommand::MoveCardToColumn {
            item: item(3),
            column: column_id("trello"),
        })
        .expect("valid command")
        .expect("recorded");

    assert_eq!(operation.trigger, Trigger::Keyboard);
    assert_eq!(ids(&board, "trello")[0], "id:3");
    assert_eq!(
        mounted
            .card_menu_trigger(&item(3))
            .expect("mounted")
            .focus_count(),
        1
    );
    assert_eq!(
        board.announcer().current(),
        Some("You've moved Angie from position 3 to position 1 in the Trello column.")
    );
}

#[test]
fn unavailable_command_records_nothing() {
    let (mut board, _mounted) = board();

    let result = board
        .execute(BoardCommand::MoveColumnLeft(column_id("confluence")))
        .expect("unavailable is not an error");

    assert_eq!(result, None);
    assert_eq!(board.state().last_operation(), None);
}

// ===== Lifecycle =====

#[test]
fn board_starts_inactive() {
    let (board, _mounted) = board();
    assert!(!board.is_active());
}

#[test]
fn drops_while_inactive_are_skipped() {
    let (mut board, _mounted) = board();
    let event = card_drop(&board, 1, "confluence", vec![DropTargetRecord::column(column_id("jira"))]);

    let disposition = board.handle_drop(&event).expect("skipped");

    assert_eq!(disposition, DropDisposition::Skipped);
    assert_eq!(ids(&board, "confluence").len(), 10);
}

#[test]
fn drops_after_deactivate_are_skipped() {
    let (mut board, mounted) = board();
    board.activate();
    board.deactivate();
    let before = board.snapshot();
    let event = card_drop(&board, 1, "confluence", vec![DropTargetRecord::column(column_id("jira"))]);

    let disposition = board.handle_drop(&event).expect("skipped");

    assert_eq!(disposition, DropDisposition::Skipped);
    assert_eq!(*board.state(), *before);
    assert_eq!(mounted.card(&item(1)).expect("mounted").flashes(), 0);
    assert!(board.announcer().current().is_none());
}

#[test]
fn drops_from_another_board_are_skipped() {
    let (mut board, _mounted) = board();
    let other = Board::new(basic_board(10).expect("seed data is valid"), LiveRegion::default());
    board.activate();
    let event = card_drop(&other, 1, "confluence", vec![DropTargetRecord::column(column_id("jira"))]);

    let disposition = board.handle_drop(&event).expect("skipped");

    assert_eq!(disposition, DropDisposition::Skipped);
    assert_eq!(board.state().last_operation(), None);
}

#[test]
fn deactivate_cleans_up_announcer() {
    let (mut board, _mounted) = board();
    board.activate();
    board
        .reorder_column(0, 1, Trigger::Keyboard)
        .expect("valid reorder");
    assert!(board.announcer().current().is_some());

    board.deactivate();

    assert!(!board.is_active());
    assert_eq!(board.announcer().current(), None);
}

// ===== Drops =====

#[test]
fn drop_on_card_bottom_edge_in_other_column_inserts_after_it() {
    let (mut board, mounted) = board();
    board.activate();
    let event = card_drop(
        &board,
        2,
        "confluence",
        vec![
            DropTargetRecord::card(item(13)).with_edge(Edge::Bottom),
            DropTargetRecord::column(column_id("jira")),
        ],
    );

    let disposition = board.handle_drop(&event).expect("valid drop");

    let DropDisposition::Applied(operation) = disposition else {
        panic!("expected an applied drop, got {disposition:?}");
    };
    assert_eq!(operation.trigger, Trigger::Pointer);
    assert_eq!(
        operation.outcome,
        Outcome::CardMove {
            finish_column_id: column_id("jira"),
            item_index_in_start_column: 1,
            item_index_in_finish_column: 3,
        }
    );
    assert_eq!(ids(&board, "jira")[3], "id:2");
    assert_eq!(mounted.card(&item(2)).expect("mounted").flashes(), 1);
    // Pointer moves are not announced.
    assert!(board.announcer().history().is_empty());
}

#[test]
fn drop_on_own_position_is_recorded_without_change() {
    let (mut board, mounted) = board();
    board.activate();
    let before = ids(&board, "confluence");
    let event = card_drop(
        &board,
        4,
        "confluence",
        vec![
            DropTargetRecord::card(item(4)).with_edge(Edge::Top),
            DropTargetRecord::column(column_id("confluence")),
        ],
    );

    let disposition = board.handle_drop(&event).expect("valid drop");

    assert!(matches!(disposition, DropDisposition::Applied(_)));
    assert_eq!(ids(&board, "confluence"), before);
    assert_eq!(mounted.card(&item(4)).expect("mounted").flashes(), 1);
}

#[test]
fn drop_outside_targets_is_ignored() {
    let (mut board, _mounted) = board();
    board.activate();
    let event = card_drop(&board, 1, "confluence", Vec::new());

    assert_eq!(
        board.handle_drop(&event).expect("ignored"),
        DropDisposition::Ignored
    );
}

#[test]
fn drop_referencing_unknown_column_is_rejected() {
    let (mut board, _mounted) = board();
    board.activate();
    let before = board.snapshot();
    let event = card_drop(
        &board,
        1,
        "confluence",
        vec![DropTargetRecord::column(column_id("asana"))],
    );

    let err = board.handle_drop(&event).expect_err("unknown column");

    assert!(matches!(err, BoardError::Drop(DropError::UnknownColumn(_))));
    assert!(Arc::ptr_eq(&before, &board.snapshot()));
}
