// Integration tests for shuffleline.
//
// These tests exercise the full system end-to-end through the library
// crate's public API: they spawn the app orchestrator loop on real mpsc
// channels and drive it with UserCommands under tokio's paused test clock,
// observing the UiUpdate stream exactly as the TUI would.

use shuffleline::app::{self, AppState};
use shuffleline::config::Config;
use shuffleline::protocol::{AppSnapshot, RunStatus, UiUpdate, UserCommand};
use shuffleline::roster::MAX_PARTICIPANTS;

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

// ===========================================================================
// Test helpers
// ===========================================================================

/// Spawn the app loop on fresh channels, mirroring the wiring in main.
fn spawn_app() -> (
    mpsc::Sender<UserCommand>,
    mpsc::Receiver<UiUpdate>,
    JoinHandle<anyhow::Result<()>>,
) {
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(256);
    let state = AppState::new(Config::default());
    let handle = tokio::spawn(app::run(cmd_rx, ui_tx, state));
    (cmd_tx, ui_rx, handle)
}

/// Receive the next update, requiring a full snapshot.
async fn recv_snapshot(ui_rx: &mut mpsc::Receiver<UiUpdate>) -> AppSnapshot {
    match ui_rx.recv().await {
        Some(UiUpdate::Snapshot(snapshot)) => *snapshot,
        other => panic!("expected Snapshot update, got {other:?}"),
    }
}

/// Send an EditSlot command and consume the snapshot it publishes.
async fn set_name(
    cmd_tx: &mpsc::Sender<UserCommand>,
    ui_rx: &mut mpsc::Receiver<UiUpdate>,
    index: usize,
    name: &str,
) -> AppSnapshot {
    cmd_tx
        .send(UserCommand::EditSlot {
            index,
            text: name.to_string(),
        })
        .await
        .unwrap();
    recv_snapshot(ui_rx).await
}

/// Assert that no update is pending after letting the scheduler settle.
async fn assert_no_pending_update(ui_rx: &mut mpsc::Receiver<UiUpdate>) {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    assert!(
        ui_rx.try_recv().is_err(),
        "expected no pending UiUpdate, but one was queued"
    );
}

fn sorted(mut items: Vec<String>) -> Vec<String> {
    items.sort();
    items
}

// ===========================================================================
// Full shuffle run
// ===========================================================================

#[tokio::test(start_paused = true)]
async fn full_run_animates_and_locks() {
    let (cmd_tx, mut ui_rx, _handle) = spawn_app();

    set_name(&cmd_tx, &mut ui_rx, 0, "Alice").await;
    set_name(&cmd_tx, &mut ui_rx, 1, "Bob").await;
    let snapshot = set_name(&cmd_tx, &mut ui_rx, 2, "Carol").await;
    assert_eq!(snapshot.participant_count, 3);
    assert!(snapshot.can_shuffle);

    cmd_tx.send(UserCommand::StartShuffle).await.unwrap();
    let started = recv_snapshot(&mut ui_rx).await;
    assert!(started.shuffling);
    assert_eq!(started.status, RunStatus::Shuffling);
    assert!(started.final_order.is_empty());
    assert_eq!(
        sorted(started.display_order.clone()),
        sorted(vec!["Alice".into(), "Bob".into(), "Carol".into()])
    );

    // Ticks republish a permutation every step until the deadline locks the
    // order. 2500ms / 140ms means exactly 17 ticks before the finalize.
    let mut ticks = 0;
    let locked = loop {
        match ui_rx.recv().await.unwrap() {
            UiUpdate::DisplayOrder(order) => {
                ticks += 1;
                assert_eq!(
                    sorted(order),
                    sorted(vec!["Alice".into(), "Bob".into(), "Carol".into()])
                );
            }
            UiUpdate::Snapshot(snapshot) => break *snapshot,
        }
    };
    assert_eq!(ticks, 17);

    assert!(!locked.shuffling);
    assert_eq!(locked.status, RunStatus::Locked);
    assert_eq!(locked.display_order, locked.final_order);
    assert_eq!(
        sorted(locked.final_order.clone()),
        sorted(vec!["Alice".into(), "Bob".into(), "Carol".into()])
    );
    assert!(locked.can_shuffle);
    assert!(locked.can_reset_ranking);

    assert_no_pending_update(&mut ui_rx).await;
}

#[tokio::test(start_paused = true)]
async fn two_name_run_locks_display_as_final() {
    // slots = ["Alice","Bob","",...] -> participants ["Alice","Bob"];
    // start -> shuffling with a permutation; after 2500ms -> locked,
    // display == final.
    let (cmd_tx, mut ui_rx, _handle) = spawn_app();

    set_name(&cmd_tx, &mut ui_rx, 0, "Alice").await;
    let snapshot = set_name(&cmd_tx, &mut ui_rx, 1, "Bob").await;
    assert_eq!(snapshot.participant_count, 2);

    cmd_tx.send(UserCommand::StartShuffle).await.unwrap();
    let started = recv_snapshot(&mut ui_rx).await;
    assert!(started.shuffling);
    assert_eq!(
        sorted(started.display_order.clone()),
        sorted(vec!["Alice".into(), "Bob".into()])
    );

    let locked = loop {
        match ui_rx.recv().await.unwrap() {
            UiUpdate::DisplayOrder(_) => continue,
            UiUpdate::Snapshot(snapshot) => break *snapshot,
        }
    };
    assert!(!locked.shuffling);
    assert_eq!(
        sorted(locked.final_order.clone()),
        sorted(vec!["Alice".into(), "Bob".into()])
    );
    assert_eq!(locked.display_order, locked.final_order);
}

// ===========================================================================
// Guarded no-ops
// ===========================================================================

#[tokio::test(start_paused = true)]
async fn start_with_no_participants_publishes_nothing() {
    let (cmd_tx, mut ui_rx, _handle) = spawn_app();

    cmd_tx.send(UserCommand::StartShuffle).await.unwrap();
    // ResetRanking always publishes; if the guarded start had published a
    // shuffling snapshot we would see it first.
    cmd_tx.send(UserCommand::ResetRanking).await.unwrap();
    let snapshot = recv_snapshot(&mut ui_rx).await;
    assert!(!snapshot.shuffling);
    assert!(snapshot.display_order.is_empty());
    assert_no_pending_update(&mut ui_rx).await;
}

#[tokio::test(start_paused = true)]
async fn start_with_one_participant_publishes_nothing() {
    let (cmd_tx, mut ui_rx, _handle) = spawn_app();

    set_name(&cmd_tx, &mut ui_rx, 0, "Alice").await;
    cmd_tx.send(UserCommand::StartShuffle).await.unwrap();
    cmd_tx.send(UserCommand::ResetRanking).await.unwrap();
    let snapshot = recv_snapshot(&mut ui_rx).await;
    assert!(!snapshot.shuffling);
    assert!(snapshot.display_order.is_empty());
    assert!(snapshot.final_order.is_empty());
    assert_no_pending_update(&mut ui_rx).await;
}

#[tokio::test(start_paused = true)]
async fn start_while_running_is_ignored() {
    let (cmd_tx, mut ui_rx, _handle) = spawn_app();

    set_name(&cmd_tx, &mut ui_rx, 0, "Alice").await;
    set_name(&cmd_tx, &mut ui_rx, 1, "Bob").await;

    cmd_tx.send(UserCommand::StartShuffle).await.unwrap();
    let started = recv_snapshot(&mut ui_rx).await;
    assert!(started.shuffling);

    // The second start must not publish a snapshot or restart the run: the
    // next update is the first tick of the original run.
    cmd_tx.send(UserCommand::StartShuffle).await.unwrap();
    match ui_rx.recv().await.unwrap() {
        UiUpdate::DisplayOrder(_) => {}
        other => panic!("expected a tick from the original run, got {other:?}"),
    }

    // And the original run still locks exactly once.
    let locked = loop {
        match ui_rx.recv().await.unwrap() {
            UiUpdate::DisplayOrder(_) => continue,
            UiUpdate::Snapshot(snapshot) => break *snapshot,
        }
    };
    assert_eq!(locked.status, RunStatus::Locked);
    assert_no_pending_update(&mut ui_rx).await;
}

// ===========================================================================
// Cancellation
// ===========================================================================

#[tokio::test(start_paused = true)]
async fn edit_during_run_cancels_everything() {
    let (cmd_tx, mut ui_rx, _handle) = spawn_app();

    set_name(&cmd_tx, &mut ui_rx, 0, "Alice").await;
    set_name(&cmd_tx, &mut ui_rx, 1, "Bob").await;

    cmd_tx.send(UserCommand::StartShuffle).await.unwrap();
    let started = recv_snapshot(&mut ui_rx).await;
    assert!(started.shuffling);

    let cancelled = set_name(&cmd_tx, &mut ui_rx, 2, "Carol").await;
    assert!(!cancelled.shuffling);
    assert!(cancelled.display_order.is_empty());
    assert!(cancelled.final_order.is_empty());
    assert_eq!(cancelled.status, RunStatus::Waiting);

    // No stale tick or finalize may fire, even well past the deadline.
    tokio::time::advance(Duration::from_millis(5000)).await;
    assert_no_pending_update(&mut ui_rx).await;
}

#[tokio::test(start_paused = true)]
async fn reset_ranking_during_run_cancels_and_keeps_slots() {
    let (cmd_tx, mut ui_rx, _handle) = spawn_app();

    set_name(&cmd_tx, &mut ui_rx, 0, "Alice").await;
    set_name(&cmd_tx, &mut ui_rx, 1, "Bob").await;

    cmd_tx.send(UserCommand::StartShuffle).await.unwrap();
    recv_snapshot(&mut ui_rx).await;

    cmd_tx.send(UserCommand::ResetRanking).await.unwrap();
    let snapshot = recv_snapshot(&mut ui_rx).await;
    assert!(!snapshot.shuffling);
    assert!(snapshot.display_order.is_empty());
    assert_eq!(snapshot.participant_count, 2);
    assert_eq!(snapshot.slots[0], "Alice");

    tokio::time::advance(Duration::from_millis(5000)).await;
    assert_no_pending_update(&mut ui_rx).await;
}

#[tokio::test(start_paused = true)]
async fn edit_after_lock_clears_final_order() {
    let (cmd_tx, mut ui_rx, _handle) = spawn_app();

    set_name(&cmd_tx, &mut ui_rx, 0, "Alice").await;
    set_name(&cmd_tx, &mut ui_rx, 1, "Bob").await;
    cmd_tx.send(UserCommand::StartShuffle).await.unwrap();
    recv_snapshot(&mut ui_rx).await;
    let locked = loop {
        match ui_rx.recv().await.unwrap() {
            UiUpdate::DisplayOrder(_) => continue,
            UiUpdate::Snapshot(snapshot) => break *snapshot,
        }
    };
    assert_eq!(locked.status, RunStatus::Locked);

    let edited = set_name(&cmd_tx, &mut ui_rx, 0, "Alicia").await;
    assert!(edited.display_order.is_empty());
    assert!(edited.final_order.is_empty());
    assert_eq!(edited.status, RunStatus::Waiting);
}

// ===========================================================================
// Resets
// ===========================================================================

#[tokio::test(start_paused = true)]
async fn reset_all_clears_slots_and_ranking() {
    let (cmd_tx, mut ui_rx, _handle) = spawn_app();

    set_name(&cmd_tx, &mut ui_rx, 0, "Alice").await;
    set_name(&cmd_tx, &mut ui_rx, 1, "Bob").await;
    cmd_tx.send(UserCommand::StartShuffle).await.unwrap();
    recv_snapshot(&mut ui_rx).await;

    cmd_tx.send(UserCommand::ResetAll).await.unwrap();
    let snapshot = recv_snapshot(&mut ui_rx).await;
    assert_eq!(snapshot.slots.len(), MAX_PARTICIPANTS);
    assert!(snapshot.slots.iter().all(|s| s.is_empty()));
    assert_eq!(snapshot.participant_count, 0);
    assert!(snapshot.display_order.is_empty());
    assert!(snapshot.final_order.is_empty());
    assert!(!snapshot.shuffling);
    assert!(!snapshot.can_shuffle);
    assert!(!snapshot.can_reset_ranking);
    assert!(!snapshot.can_reset_all);

    tokio::time::advance(Duration::from_millis(5000)).await;
    assert_no_pending_update(&mut ui_rx).await;
}

// ===========================================================================
// Shutdown
// ===========================================================================

#[tokio::test(start_paused = true)]
async fn quit_command_stops_the_loop() {
    let (cmd_tx, _ui_rx, handle) = spawn_app();
    cmd_tx.send(UserCommand::Quit).await.unwrap();
    handle.await.unwrap().unwrap();
}

#[tokio::test(start_paused = true)]
async fn closing_the_command_channel_stops_the_loop() {
    let (cmd_tx, _ui_rx, handle) = spawn_app();
    drop(cmd_tx);
    handle.await.unwrap().unwrap();
}

#[tokio::test(start_paused = true)]
async fn quit_mid_run_stops_without_finalizing() {
    let (cmd_tx, mut ui_rx, handle) = spawn_app();

    set_name(&cmd_tx, &mut ui_rx, 0, "Alice").await;
    set_name(&cmd_tx, &mut ui_rx, 1, "Bob").await;
    cmd_tx.send(UserCommand::StartShuffle).await.unwrap();
    recv_snapshot(&mut ui_rx).await;

    cmd_tx.send(UserCommand::Quit).await.unwrap();
    handle.await.unwrap().unwrap();

    // The loop exited with its run pending; no finalize snapshot was sent.
    while let Ok(update) = ui_rx.try_recv() {
        assert!(
            matches!(update, UiUpdate::DisplayOrder(_)),
            "no snapshot may follow quit, got {update:?}"
        );
    }
}
