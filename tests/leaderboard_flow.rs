use std::rc::Rc;

use whack_a_jerry::leaderboard::{parse_snapshot, prune_ids, top};
use whack_a_jerry::model::GameSummary;
use whack_a_jerry::state::{Message, UiAction, UiState};
use yew::Reducible;

fn snapshot(n: u32) -> String {
    let children: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#""-N{i:03}": {{"name": "p{i}", "score": {score}, "date": "10/17/2026", "timestamp": {i}}}"#,
                score = i * 2
            )
        })
        .collect();
    format!("{{{}}}", children.join(","))
}

#[test]
fn cleanup_keeps_the_best_hundred() {
    let entries = parse_snapshot(&snapshot(120)).unwrap();
    assert_eq!(entries.len(), 120);
    let doomed = prune_ids(entries.clone(), 100);
    assert_eq!(doomed.len(), 20);
    let kept: Vec<_> = entries.into_iter().filter(|e| !doomed.contains(&e.id)).collect();
    assert_eq!(kept.len(), 100);
    assert!(kept.iter().all(|e| e.score >= 40));
}

#[test]
fn game_over_rank_uses_the_cached_board() {
    let board = top(parse_snapshot(&snapshot(20)).unwrap(), 10);
    assert_eq!(board[0].name, "p19");

    let state = Rc::new(UiState::new(0, false, true, 10, 5))
        .reduce(UiAction::LeaderboardLoaded(board))
        .reduce(UiAction::SubmitName("p17".into()))
        .reduce(UiAction::GameOver(GameSummary { score: 34 }));

    match &state.message {
        Some(Message::GameOver { rank, score, new_high_score, .. }) => {
            assert_eq!(*rank, Some(3));
            assert_eq!(*score, 34);
            assert!(*new_high_score);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(state.high_score, 34);
}
