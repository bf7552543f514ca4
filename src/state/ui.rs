// Screen-level state: modals, player name, messages, high score and the
// cached leaderboard. Updated through `UiAction`s like any Yew reducer.

use std::rc::Rc;
use yew::Reducible;

use crate::leaderboard::{self, LeaderboardEntry};
use crate::model::{GameSummary, is_new_high_score};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modal {
    None,
    NameEntry,
    Leaderboard,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LeaderboardStatus {
    /// No database configured.
    Disabled,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    Welcome,
    GameOver {
        name: String,
        score: u32,
        /// Leaderboard position if it made the shown top list.
        rank: Option<usize>,
        new_high_score: bool,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub modal: Modal,
    pub player_name: String,
    pub playing: bool,
    /// Overlay text; `None` while a round is running.
    pub message: Option<Message>,
    /// Bumped on every start so the game view knows to begin a fresh round.
    pub round: u32,
    pub high_score: u32,
    pub muted: bool,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub leaderboard_status: LeaderboardStatus,
    pub cache_top: usize,
    pub display_top: usize,
}

impl UiState {
    pub fn new(high_score: u32, muted: bool, online: bool, cache_top: usize, display_top: usize) -> Self {
        Self {
            modal: Modal::None,
            player_name: String::new(),
            playing: false,
            message: Some(Message::Welcome),
            round: 0,
            high_score,
            muted,
            leaderboard: Vec::new(),
            leaderboard_status: if online {
                LeaderboardStatus::Loading
            } else {
                LeaderboardStatus::Disabled
            },
            cache_top,
            display_top,
        }
    }

    pub fn game_over(&self) -> bool {
        matches!(self.message, Some(Message::GameOver { .. }))
    }
}

#[derive(Clone, Debug)]
pub enum UiAction {
    RequestStart,
    SubmitName(String),
    GameOver(GameSummary),
    ShowLeaderboard,
    HideLeaderboard,
    LeaderboardLoading,
    LeaderboardLoaded(Vec<LeaderboardEntry>),
    LeaderboardFailed(String),
    ToggleMute,
}

impl Reducible for UiState {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use UiAction::*;
        let mut new = (*self).clone();
        match action {
            RequestStart => {
                if new.playing {
                    return self;
                }
                new.modal = Modal::NameEntry;
            }
            SubmitName(raw) => {
                if new.playing {
                    return self;
                }
                let Some(name) = leaderboard::normalize_player_name(&raw) else {
                    return self;
                };
                new.player_name = name;
                new.modal = Modal::None;
                new.playing = true;
                new.message = None;
                new.round = new.round.wrapping_add(1);
            }
            GameOver(summary) => {
                if !new.playing {
                    return self;
                }
                new.playing = false;
                let rank = leaderboard::rank_of(&new.leaderboard, &new.player_name, summary.score)
                    .filter(|r| *r <= new.display_top);
                let new_high_score = is_new_high_score(summary.score, new.high_score);
                if new_high_score {
                    new.high_score = summary.score;
                }
                new.message = Some(Message::GameOver {
                    name: new.player_name.clone(),
                    score: summary.score,
                    rank,
                    new_high_score,
                });
            }
            ShowLeaderboard => new.modal = Modal::Leaderboard,
            HideLeaderboard => {
                if new.modal == Modal::Leaderboard {
                    new.modal = Modal::None;
                }
            }
            LeaderboardLoading => {
                if new.leaderboard.is_empty() {
                    new.leaderboard_status = LeaderboardStatus::Loading;
                }
            }
            LeaderboardLoaded(entries) => {
                new.leaderboard = leaderboard::top(entries, new.cache_top);
                new.leaderboard_status = LeaderboardStatus::Ready;
            }
            LeaderboardFailed(err) => {
                new.leaderboard.clear();
                new.leaderboard_status = LeaderboardStatus::Failed(err);
            }
            ToggleMute => new.muted = !new.muted,
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            id: format!("{name}-{score}"),
            name: name.to_string(),
            score,
            date: String::new(),
            timestamp: 0.0,
        }
    }

    fn apply(state: UiState, actions: Vec<UiAction>) -> Rc<UiState> {
        actions
            .into_iter()
            .fold(Rc::new(state), |s, a| s.reduce(a))
    }

    #[test]
    fn start_needs_a_name() {
        let s = apply(
            UiState::new(0, false, true, 10, 5),
            vec![UiAction::RequestStart, UiAction::SubmitName("   ".into())],
        );
        assert_eq!(s.modal, Modal::NameEntry);
        assert!(!s.playing);
        assert_eq!(s.round, 0);

        let s = s.reduce(UiAction::SubmitName(" Tom ".into()));
        assert_eq!(s.modal, Modal::None);
        assert!(s.playing);
        assert_eq!(s.player_name, "Tom");
        assert_eq!(s.round, 1);
        assert_eq!(s.message, None);
    }

    #[test]
    fn cannot_restart_mid_round() {
        let s = apply(
            UiState::new(0, false, true, 10, 5),
            vec![UiAction::SubmitName("Tom".into()), UiAction::RequestStart],
        );
        assert_eq!(s.modal, Modal::None);
        let s = s.reduce(UiAction::SubmitName("Other".into()));
        assert_eq!(s.player_name, "Tom");
        assert_eq!(s.round, 1);
    }

    #[test]
    fn game_over_records_high_score_and_rank() {
        let s = apply(
            UiState::new(10, false, true, 10, 5),
            vec![
                UiAction::LeaderboardLoaded(vec![entry("Ann", 50), entry("Tom", 12), entry("Bob", 30)]),
                UiAction::SubmitName("Tom".into()),
                UiAction::GameOver(GameSummary { score: 12 }),
            ],
        );
        assert!(!s.playing);
        assert!(s.game_over());
        assert_eq!(s.high_score, 12);
        assert_eq!(
            s.message,
            Some(Message::GameOver {
                name: "Tom".into(),
                score: 12,
                rank: Some(3),
                new_high_score: true,
            })
        );
    }

    #[test]
    fn rank_outside_display_is_hidden() {
        let board: Vec<_> = (0..8).map(|i| entry(&format!("p{i}"), 100 - i)).collect();
        let s = apply(
            UiState::new(500, false, true, 10, 5),
            vec![
                UiAction::LeaderboardLoaded(board),
                UiAction::SubmitName("p6".into()),
                UiAction::GameOver(GameSummary { score: 94 }),
            ],
        );
        match &s.message {
            Some(Message::GameOver { rank, new_high_score, .. }) => {
                assert_eq!(*rank, None);
                assert!(!new_high_score);
            }
            other => panic!("unexpected message {other:?}"),
        }
        assert_eq!(s.high_score, 500);
    }

    #[test]
    fn zero_score_never_sets_high_score() {
        let s = apply(
            UiState::new(0, false, false, 10, 5),
            vec![
                UiAction::SubmitName("Tom".into()),
                UiAction::GameOver(GameSummary { score: 0 }),
            ],
        );
        assert_eq!(s.high_score, 0);
    }

    #[test]
    fn leaderboard_cache_is_sorted_and_capped() {
        let board: Vec<_> = (0..15).map(|i| entry(&format!("p{i}"), i)).collect();
        let s = apply(
            UiState::new(0, false, true, 10, 5),
            vec![UiAction::LeaderboardLoaded(board)],
        );
        assert_eq!(s.leaderboard.len(), 10);
        assert_eq!(s.leaderboard[0].score, 14);
        assert_eq!(s.leaderboard_status, LeaderboardStatus::Ready);
    }

    #[test]
    fn failed_load_drops_stale_board() {
        let s = apply(
            UiState::new(0, false, true, 10, 5),
            vec![
                UiAction::LeaderboardLoaded(vec![entry("Ann", 50)]),
                UiAction::LeaderboardLoading,
                UiAction::LeaderboardFailed("HTTP 401".into()),
            ],
        );
        assert!(s.leaderboard.is_empty());
        assert_eq!(s.leaderboard_status, LeaderboardStatus::Failed("HTTP 401".into()));

        // A rank cannot come from a board that failed to load.
        let s = apply(
            (*s).clone(),
            vec![
                UiAction::SubmitName("Tom".into()),
                UiAction::GameOver(GameSummary { score: 7 }),
            ],
        );
        assert!(matches!(s.message, Some(Message::GameOver { rank: None, .. })));

        let s = s.reduce(UiAction::LeaderboardLoaded(vec![entry("Tom", 7)]));
        assert_eq!(s.leaderboard_status, LeaderboardStatus::Ready);
        assert_eq!(s.leaderboard.len(), 1);
    }

    #[test]
    fn modal_toggles() {
        let s = apply(
            UiState::new(0, false, false, 10, 5),
            vec![UiAction::ShowLeaderboard],
        );
        assert_eq!(s.modal, Modal::Leaderboard);
        let s = s.reduce(UiAction::HideLeaderboard);
        assert_eq!(s.modal, Modal::None);
        assert_eq!(s.leaderboard_status, LeaderboardStatus::Disabled);
        let s = s.reduce(UiAction::ToggleMute);
        assert!(s.muted);
    }
}
