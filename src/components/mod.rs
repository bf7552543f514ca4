pub mod app;
pub mod controls_panel;
pub mod game_message;
pub mod game_view;
pub mod hud;
pub mod leaderboard_modal;
pub mod name_modal;

pub use app::App;
