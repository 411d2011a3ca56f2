//! Tests for drop interpretation.
//!
//! The basic board holds `confluence` (id:1..=10), `jira` (id:11..=20) and
//! `trello` (id:21..=30).

use super::*;
use crate::dnd::gesture::DragLocation;
use crate::model::InstanceId;
use crate::source::sample::basic_board;

// ===== Test Helpers =====

fn board() -> BoardState {
    basic_board(10).expect("seed data is valid")
}

fn column_id(s: &str) -> ColumnId {
    ColumnId::new(s).expect("valid column id")
}

fn item_id(n: usize) -> ItemId {
    ItemId::new(format!("id:{n}")).expect("valid item id")
}

fn column_target(s: &str) -> DropTargetRecord {
    DropTargetRecord::column(column_id(s))
}

fn card_target(n: usize) -> DropTargetRecord {
    DropTargetRecord::card(item_id(n))
}

/// Card drag that started on card `n` inside `column`.
fn card_drag(n: usize, column: &str, current: Vec<DropTargetRecord>) -> DropEvent {
    DropEvent::new(
        InstanceId::next(),
        DragSource::Card(item_id(n)),
        DragLocation {
            current,
            initial: vec![card_target(n), column_target(column)],
        },
    )
}

fn column_drag(column: &str, current: Vec<DropTargetRecord>) -> DropEvent {
    DropEvent::new(
        InstanceId::next(),
        DragSource::Column(column_id(column)),
        DragLocation {
            current,
            initial: vec![column_target(column)],
        },
    )
}

// ===== Ignore =====

#[test]
fn drop_outside_targets_is_ignored() {
    let outcome = interpret_drop(&board(), &card_drag(1, "confluence", vec![]));
    assert_eq!(outcome, Ok(DropOutcome::Ignore));
}

#[test]
fn column_drop_outside_targets_is_ignored() {
    let outcome = interpret_drop(&board(), &column_drag("jira", vec![]));
    assert_eq!(outcome, Ok(DropOutcome::Ignore));
}

// ===== Columns =====

#[test]
fn column_dropped_on_right_edge_of_last_column() {
    let event = column_drag("confluence", vec![column_target("trello").with_edge(Edge::Right)]);

    let outcome = interpret_drop(&board(), &event);

    assert_eq!(
        outcome,
        Ok(DropOutcome::ColumnReorder {
            start_index: 0,
            finish_index: 2,
        })
    );
}

#[test]
fn column_dropped_on_left_edge_of_first_column() {
    let event = column_drag("trello", vec![column_target("confluence").with_edge(Edge::Left)]);

    let outcome = interpret_drop(&board(), &event);

    assert_eq!(
        outcome,
        Ok(DropOutcome::ColumnReorder {
            start_index: 2,
            finish_index: 0,
        })
    );
}

#[test]
fn column_dropped_on_itself_keeps_position() {
    let event = column_drag("jira", vec![column_target("jira").with_edge(Edge::Left)]);

    let outcome = interpret_drop(&board(), &event);

    assert_eq!(
        outcome,
        Ok(DropOutcome::ColumnReorder {
            start_index: 1,
            finish_index: 1,
        })
    );
}

#[test]
fn column_drag_of_unknown_column_fails() {
    let event = column_drag("asana", vec![column_target("jira")]);

    let outcome = interpret_drop(&board(), &event);

    assert_eq!(outcome, Err(DropError::UnknownColumn(column_id("asana"))));
}

#[test]
fn column_dropped_on_card_target_fails() {
    let event = column_drag("jira", vec![card_target(1), column_target("confluence")]);

    let outcome = interpret_drop(&board(), &event);

    assert_eq!(outcome, Err(DropError::ExpectedColumnTarget { position: 0 }));
}

// ===== Cards over a column body =====

#[test]
fn card_dropped_on_own_column_body_goes_to_end() {
    let event = card_drag(3, "confluence", vec![column_target("confluence")]);

    let outcome = interpret_drop(&board(), &event);

    assert_eq!(
        outcome,
        Ok(DropOutcome::CardReorder {
            column_id: column_id("confluence"),
            start_index: 2,
            finish_index: 9,
        })
    );
}

#[test]
fn card_dropped_on_other_column_body_moves_without_index() {
    let event = card_drag(3, "confluence", vec![column_target("jira")]);

    let outcome = interpret_drop(&board(), &event);

    assert_eq!(
        outcome,
        Ok(DropOutcome::CardMove {
            start_column_id: column_id("confluence"),
            finish_column_id: column_id("jira"),
            item_index_in_start_column: 2,
            item_index_in_finish_column: None,
        })
    );
}

// ===== Cards over a card =====

#[test]
fn card_dropped_on_bottom_edge_of_card_below_in_same_column() {
    // id:2 (index 1) dropped below id:5 (index 4) → ends at index 4.
    let event = card_drag(
        2,
        "confluence",
        vec![card_target(5).with_edge(Edge::Bottom), column_target("confluence")],
    );

    let outcome = interpret_drop(&board(), &event);

    assert_eq!(
        outcome,
        Ok(DropOutcome::CardReorder {
            column_id: column_id("confluence"),
            start_index: 1,
            finish_index: 4,
        })
    );
}

#[test]
fn card_dropped_on_top_edge_of_card_above_in_same_column() {
    // id:9 (index 8) dropped above id:3 (index 2) → ends at index 2.
    let event = card_drag(
        9,
        "confluence",
        vec![card_target(3).with_edge(Edge::Top), column_target("confluence")],
    );

    let outcome = interpret_drop(&board(), &event);

    assert_eq!(
        outcome,
        Ok(DropOutcome::CardReorder {
            column_id: column_id("confluence"),
            start_index: 8,
            finish_index: 2,
        })
    );
}

#[test]
fn card_dropped_on_itself_is_a_stationary_reorder() {
    let event = card_drag(
        4,
        "confluence",
        vec![card_target(4).with_edge(Edge::Bottom), column_target("confluence")],
    );

    let outcome = interpret_drop(&board(), &event);

    assert_eq!(
        outcome,
        Ok(DropOutcome::CardReorder {
            column_id: column_id("confluence"),
            start_index: 3,
            finish_index: 3,
        })
    );
}

#[test]
fn card_dropped_on_bottom_edge_in_other_column_goes_after_target() {
    // id:12 is index 1 in jira.
    let event = card_drag(
        1,
        "confluence",
        vec![card_target(12).with_edge(Edge::Bottom), column_target("jira")],
    );

    let outcome = interpret_drop(&board(), &event);

    assert_eq!(
        outcome,
        Ok(DropOutcome::CardMove {
            start_column_id: column_id("confluence"),
            finish_column_id: column_id("jira"),
            item_index_in_start_column: 0,
            item_index_in_finish_column: Some(2),
        })
    );
}

#[test]
fn card_dropped_on_top_edge_in_other_column_takes_target_slot() {
    let event = card_drag(
        1,
        "confluence",
        vec![card_target(12).with_edge(Edge::Top), column_target("jira")],
    );

    let outcome = interpret_drop(&board(), &event);

    assert!(matches!(
        outcome,
        Ok(DropOutcome::CardMove {
            item_index_in_finish_column: Some(1),
            ..
        })
    ));
}

#[test]
fn card_dropped_on_last_card_bottom_in_other_column_appends() {
    let event = card_drag(
        21,
        "trello",
        vec![card_target(20).with_edge(Edge::Bottom), column_target("jira")],
    );

    let outcome = interpret_drop(&board(), &event);

    assert!(matches!(
        outcome,
        Ok(DropOutcome::CardMove {
            item_index_in_finish_column: Some(10),
            ..
        })
    ));
}

#[test]
fn card_dropped_without_edge_in_other_column_takes_target_slot() {
    let event = card_drag(21, "trello", vec![card_target(15), column_target("jira")]);

    let outcome = interpret_drop(&board(), &event);

    assert!(matches!(
        outcome,
        Ok(DropOutcome::CardMove {
            item_index_in_finish_column: Some(4),
            ..
        })
    ));
}

// ===== Invariant violations =====

#[test]
fn card_drag_without_source_column_fails() {
    let event = DropEvent::new(
        InstanceId::next(),
        DragSource::Card(item_id(1)),
        DragLocation {
            current: vec![column_target("jira")],
            initial: vec![card_target(1)],
        },
    );

    assert_eq!(
        interpret_drop(&board(), &event),
        Err(DropError::MissingSourceColumn)
    );
}

#[test]
fn card_not_in_claimed_source_column_fails() {
    let event = card_drag(15, "confluence", vec![column_target("jira")]);

    assert_eq!(
        interpret_drop(&board(), &event),
        Err(DropError::ItemNotInColumn {
            item: item_id(15),
            column: column_id("confluence"),
        })
    );
}

#[test]
fn hovered_card_outside_destination_column_fails() {
    let event = card_drag(1, "confluence", vec![card_target(25), column_target("jira")]);

    assert_eq!(
        interpret_drop(&board(), &event),
        Err(DropError::ItemNotInColumn {
            item: item_id(25),
            column: column_id("jira"),
        })
    );
}

#[test]
fn three_nested_targets_fail_fast() {
    let event = card_drag(
        1,
        "confluence",
        vec![card_target(12), column_target("jira"), column_target("trello")],
    );

    assert_eq!(
        interpret_drop(&board(), &event),
        Err(DropError::UnexpectedTargetDepth(3))
    );
}

#[test]
fn swapped_card_and_column_records_fail() {
    let event = card_drag(1, "confluence", vec![column_target("jira"), card_target(12)]);

    assert_eq!(
        interpret_drop(&board(), &event),
        Err(DropError::ExpectedCardTarget { position: 0 })
    );
}

#[test]
fn unknown_destination_column_fails() {
    let event = card_drag(1, "confluence", vec![column_target("asana")]);

    assert_eq!(
        interpret_drop(&board(), &event),
        Err(DropError::UnknownColumn(column_id("asana")))
    );
}
