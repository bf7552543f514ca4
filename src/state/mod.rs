pub mod hammer;
pub mod pointer;
pub mod timers;
pub mod ui;

pub use hammer::HammerCursor;
pub use pointer::{CanvasRect, client_point, client_to_canvas};
pub use timers::{FrameLoop, RoundTimers};
pub use ui::{LeaderboardStatus, Message, Modal, UiAction, UiState};
