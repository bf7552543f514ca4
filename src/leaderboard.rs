// Online leaderboard: ranking helpers plus a small Firebase Realtime Database
// REST client. Records live under `{database_url}/{path}` keyed by push ids.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::config::LeaderboardConfig;
use crate::util::js_err;

pub const MAX_NAME_CHARS: usize = 24;

/// Record as stored remotely (without its key).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewEntry {
    pub name: String,
    pub score: u32,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub timestamp: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    pub score: u32,
    pub date: String,
    pub timestamp: f64,
}

impl LeaderboardEntry {
    pub fn from_record(id: String, rec: NewEntry) -> Self {
        Self {
            id,
            name: rec.name,
            score: rec.score,
            date: rec.date,
            timestamp: rec.timestamp,
        }
    }
}

/// Decode a `GET {path}.json` body: either `null` or an object keyed by push id.
/// Children that do not look like entries are skipped.
pub fn parse_snapshot(body: &str) -> Result<Vec<LeaderboardEntry>> {
    let value: serde_json::Value =
        serde_json::from_str(body).context("leaderboard response is not JSON")?;
    let map = match value {
        serde_json::Value::Null => return Ok(Vec::new()),
        serde_json::Value::Object(map) => map,
        other => bail!("unexpected leaderboard payload: {other}"),
    };
    let mut out = Vec::with_capacity(map.len());
    for (id, child) in map {
        match serde_json::from_value::<NewEntry>(child) {
            Ok(rec) => out.push(LeaderboardEntry::from_record(id, rec)),
            Err(e) => log::debug!("skipping malformed leaderboard child {id}: {e}"),
        }
    }
    Ok(out)
}

/// Highest score first; ties go to the earlier submission.
pub fn sort_by_score_desc(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(a.timestamp.total_cmp(&b.timestamp))
    });
}

pub fn top(mut entries: Vec<LeaderboardEntry>, n: usize) -> Vec<LeaderboardEntry> {
    sort_by_score_desc(&mut entries);
    entries.truncate(n);
    entries
}

/// Ids ranked below the first `keep` entries.
pub fn prune_ids(mut entries: Vec<LeaderboardEntry>, keep: usize) -> Vec<String> {
    sort_by_score_desc(&mut entries);
    entries.into_iter().skip(keep).map(|e| e.id).collect()
}

/// 1-based rank of the first entry with this name and score.
pub fn rank_of(entries: &[LeaderboardEntry], name: &str, score: u32) -> Option<usize> {
    entries
        .iter()
        .position(|e| e.name == name && e.score == score)
        .map(|i| i + 1)
}

pub fn medal(rank: usize) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("#{n}"),
    }
}

pub fn normalize_player_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(MAX_NAME_CHARS).collect())
}

#[derive(Deserialize)]
struct PushReply {
    name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardClient {
    base_url: String,
    path: String,
}

impl LeaderboardClient {
    pub fn new(database_url: &str, path: &str) -> Self {
        Self {
            base_url: database_url.trim_end_matches('/').to_string(),
            path: path.trim_matches('/').to_string(),
        }
    }

    pub fn from_config(cfg: &LeaderboardConfig) -> Option<Self> {
        cfg.database_url
            .as_deref()
            .map(|url| Self::new(url, &cfg.path))
    }

    pub fn collection_url(&self) -> String {
        format!("{}/{}.json", self.base_url, self.path)
    }

    pub fn entry_url(&self, id: &str) -> String {
        format!("{}/{}/{}.json", self.base_url, self.path, id)
    }

    /// With a limit, only the highest `n` scores are returned, which needs the
    /// `score` index on the server. Without one the whole collection comes back
    /// unordered and callers sort it themselves.
    pub fn query_url(&self, limit: Option<usize>) -> String {
        match limit {
            Some(n) => format!(
                "{}?orderBy=%22score%22&limitToLast={n}",
                self.collection_url()
            ),
            None => self.collection_url(),
        }
    }

    /// Append a record; returns the id Firebase generated for it.
    pub async fn push(&self, entry: &NewEntry) -> Result<String> {
        let body = serde_json::to_string(entry)?;
        let reply = send(Method::Post, &self.collection_url(), Some(body))
            .await
            .context("pushing leaderboard entry")?;
        let parsed: PushReply =
            serde_json::from_str(&reply).context("decoding push reply")?;
        Ok(parsed.name)
    }

    pub async fn fetch_top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>> {
        let body = send(Method::Get, &self.query_url(Some(limit)), None)
            .await
            .context("loading leaderboard")?;
        parse_snapshot(&body)
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        send(Method::Delete, &self.entry_url(id), None)
            .await
            .with_context(|| format!("removing leaderboard entry {id}"))?;
        Ok(())
    }

    /// Delete everything ranked beyond `keep`. Returns how many were removed.
    pub async fn cleanup(&self, keep: usize) -> Result<usize> {
        let body = send(Method::Get, &self.query_url(None), None)
            .await
            .context("loading leaderboard for cleanup")?;
        let doomed = prune_ids(parse_snapshot(&body)?, keep);
        for id in &doomed {
            self.remove(id).await?;
        }
        Ok(doomed.len())
    }
}

async fn send(method: Method, url: &str, body: Option<String>) -> Result<String> {
    let window = web_sys::window().context("no window")?;
    let init = RequestInit::new();
    init.set_method(method.as_str());
    if let Some(b) = &body {
        init.set_body(&wasm_bindgen::JsValue::from_str(b));
    }
    let request = Request::new_with_str_and_init(url, &init).map_err(js_err)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_err)?;
    }
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)
        .context("network request failed")?;
    let resp: Response = resp_value.dyn_into().map_err(js_err)?;
    let text = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .unwrap_or_default();
    if !resp.ok() {
        bail!("{} {} returned HTTP {}: {}", method.as_str(), url, resp.status(), text);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str, score: u32, ts: f64) -> LeaderboardEntry {
        LeaderboardEntry {
            id: id.to_string(),
            name: name.to_string(),
            score,
            date: "1/2/2026".to_string(),
            timestamp: ts,
        }
    }

    #[test]
    fn parses_firebase_object_map() {
        let body = r#"{
            "-Na": {"name": "Tom", "score": 12, "date": "1/1/2026", "timestamp": 1.0},
            "-Nb": {"name": "Jerry", "score": 30, "date": "1/2/2026", "timestamp": 2.0},
            "-Nc": {"oops": true}
        }"#;
        let entries = top(parse_snapshot(body).unwrap(), 10);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "-Nb");
        assert_eq!(entries[0].score, 30);
        assert_eq!(entries[1].name, "Tom");
    }

    #[test]
    fn null_snapshot_is_empty() {
        assert!(parse_snapshot("null").unwrap().is_empty());
        assert!(parse_snapshot("[1,2]").is_err());
        assert!(parse_snapshot("<html>").is_err());
    }

    #[test]
    fn ties_keep_submission_order() {
        let mut v = vec![entry("b", "B", 5, 20.0), entry("a", "A", 5, 10.0), entry("c", "C", 9, 30.0)];
        sort_by_score_desc(&mut v);
        let ids: Vec<_> = v.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn prune_selects_entries_beyond_keep() {
        let entries: Vec<_> = (0..105)
            .map(|i| entry(&format!("id{i}"), "p", i, i as f64))
            .collect();
        let doomed = prune_ids(entries, 100);
        assert_eq!(doomed.len(), 5);
        for i in 0..5 {
            assert!(doomed.contains(&format!("id{i}")));
        }
        assert!(prune_ids(vec![entry("x", "p", 1, 0.0)], 100).is_empty());
    }

    #[test]
    fn rank_requires_name_and_score() {
        let v = top(
            vec![entry("1", "Ann", 40, 0.0), entry("2", "Bob", 30, 0.0), entry("3", "Ann", 20, 0.0)],
            10,
        );
        assert_eq!(rank_of(&v, "Ann", 20), Some(3));
        assert_eq!(rank_of(&v, "Bob", 30), Some(2));
        assert_eq!(rank_of(&v, "Bob", 40), None);
    }

    #[test]
    fn medals() {
        assert_eq!(medal(1), "🥇");
        assert_eq!(medal(3), "🥉");
        assert_eq!(medal(4), "#4");
    }

    #[test]
    fn player_names_are_trimmed_and_capped() {
        assert_eq!(normalize_player_name("  Tom  ").as_deref(), Some("Tom"));
        assert_eq!(normalize_player_name("   "), None);
        let long = "x".repeat(40);
        assert_eq!(normalize_player_name(&long).unwrap().chars().count(), MAX_NAME_CHARS);
    }

    #[test]
    fn urls() {
        let c = LeaderboardClient::new("https://demo-rtdb.firebaseio.com/", "/leaderboard/");
        assert_eq!(c.collection_url(), "https://demo-rtdb.firebaseio.com/leaderboard.json");
        assert_eq!(c.entry_url("-N1"), "https://demo-rtdb.firebaseio.com/leaderboard/-N1.json");
        assert_eq!(
            c.query_url(Some(100)),
            "https://demo-rtdb.firebaseio.com/leaderboard.json?orderBy=%22score%22&limitToLast=100"
        );
        assert_eq!(c.query_url(None), c.collection_url());
    }

    #[test]
    fn client_needs_database_url() {
        let mut cfg = LeaderboardConfig::default();
        cfg.database_url = None;
        assert!(LeaderboardClient::from_config(&cfg).is_none());
        cfg.database_url = Some("https://x.firebaseio.com".into());
        assert!(LeaderboardClient::from_config(&cfg).is_some());
    }

    #[test]
    fn new_entry_serialises_firebase_shape() {
        let e = NewEntry {
            name: "Tom".into(),
            score: 3,
            date: "1/1/2026".into(),
            timestamp: 5.0,
        };
        let v: serde_json::Value = serde_json::to_value(&e).unwrap();
        assert_eq!(v["name"], "Tom");
        assert_eq!(v["score"], 3);
        assert!(v.get("id").is_none());
    }
}
