use std::time::Instant;

use serde_json::Value;
use tui_memory::core::{Deck, Session, SessionSnapshot};

fn playing_snapshot() -> SessionSnapshot {
    let deck = Deck::from_face_values(&[1, 1, 2, 2]).unwrap();
    let t = Instant::now();
    Session::from_deck(deck)
        .toggle_running()
        .handle_card_click(0, t)
        .handle_card_click(1, t)
        .handle_card_click(2, t)
        .snapshot()
}

#[test]
fn snapshot_uses_camel_case_keys() {
    let v: Value = serde_json::to_value(playing_snapshot()).unwrap();

    assert_eq!(v["status"], "playing");
    assert_eq!(v["moves"], 1);
    assert_eq!(v["score"], 1);
    assert_eq!(v["elapsedSeconds"], 0);
    assert_eq!(v["flippedPositions"], serde_json::json!([2]));
    assert_eq!(v["matchedFaceValues"], serde_json::json!([1]));
    assert_eq!(v["deck"][3]["faceValue"], 2);
    assert!(v.get("elapsed_seconds").is_none());
}

#[test]
fn snapshot_round_trips_through_json() {
    let snap = playing_snapshot();
    let json = serde_json::to_string(&snap).unwrap();
    let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
}
