// Whack-a-Jerry: a browser whack-a-mole built with Yew and a canvas playfield.

pub mod audio;
pub mod components;
pub mod config;
pub mod leaderboard;
pub mod model;
pub mod render;
pub mod state;
pub mod storage;
pub mod util;
