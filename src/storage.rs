// Local storage access: high score, sound setting and config overrides.

use web_sys::Storage;

pub const KEY_HIGH_SCORE: &str = "wj_high_score";
pub const KEY_SOUND_MUTED: &str = "wj_sound_muted";
pub const KEY_CONFIG: &str = "wj_config";
pub const KEY_LEADERBOARD_URL: &str = "wj_leaderboard_url";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(not(target_arch = "wasm32"))]
fn local_storage() -> Option<Storage> {
    None
}

pub fn get_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn set_item(key: &str, value: &str) {
    if let Some(store) = local_storage() {
        let _ = store.set_item(key, value);
    }
}

pub fn parse_high_score(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

pub fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim(), "1" | "true")
}

pub fn load_high_score() -> u32 {
    get_item(KEY_HIGH_SCORE)
        .and_then(|v| parse_high_score(&v))
        .unwrap_or(0)
}

pub fn save_high_score(score: u32) {
    set_item(KEY_HIGH_SCORE, &score.to_string());
}

pub fn load_muted() -> bool {
    get_item(KEY_SOUND_MUTED).is_some_and(|v| parse_flag(&v))
}

pub fn save_muted(muted: bool) {
    set_item(KEY_SOUND_MUTED, if muted { "1" } else { "0" });
}
