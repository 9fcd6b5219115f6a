// src/specs/gemini.rs
//
// AI fallback: ask a generative model for the career table when live
// scraping comes up empty. Model output is hallucination-prone, so the
// caller labels this path distinctly; nothing from here is ever presented
// as live data.

use reqwest::blocking::Client;
use serde_json::{Value, json};

use crate::config::consts::GEMINI_ENDPOINT;
use crate::core::net;
use crate::data::StatsTable;

/// Fixed prompt. Strict JSON demanded up front; the fence stripper below
/// still runs because models routinely ignore the "no markdown" clause.
pub fn build_prompt(player: &str) -> String {
    format!(
        r#"Generate a cricket career stats table for {player}.
Return JSON with keys: "matches", "innings", "runs", "average", "wickets".
Format as a list of objects for "Test", "ODI", "T20I".
Example:
[
  {{"Format": "Test", "Matches": 100, "Runs": 5000, "Average": 50.0}},
  {{"Format": "ODI", "Matches": 200, "Runs": 10000, "Average": 58.0}}
]
Strict JSON only. No markdown."#
    )
}

/// Request a generated table. `None` on any failure: request, candidate
/// extraction, fence stripping, or JSON parse.
pub fn generate_stats(client: &Client, api_key: &str, model: &str, player: &str) -> Option<StatsTable> {
    let url = format!("{GEMINI_ENDPOINT}/{model}:generateContent?key={api_key}");
    let body = json!({
        "contents": [{ "parts": [{ "text": build_prompt(player) }] }]
    });

    let resp = match net::post_json(client, &url, &body) {
        Ok(v) => v,
        Err(e) => {
            logd!("AiFallback: request failed for {player:?}: {e}");
            return None;
        }
    };

    let text = candidate_text(&resp)?;
    let table = table_from_json(&strip_fences(&text));
    match &table {
        Some(t) => logf!("AiFallback: {player:?} → {} row(s)", t.rows.len()),
        None => logd!("AiFallback: unparseable model output for {player:?}"),
    }
    table
}

/// First candidate's text out of a generateContent response.
fn candidate_text(resp: &Value) -> Option<String> {
    resp.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(String::from)
}

/// Remove markdown code-fence artifacts around the JSON payload.
/// Idempotent: stripping already-stripped text is a no-op.
pub fn strip_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Shape a JSON list of per-format objects into a table. Column order
/// follows the first object's key order; later objects fill the same
/// columns (blank where a key is missing).
pub fn table_from_json(text: &str) -> Option<StatsTable> {
    let value: Value = serde_json::from_str(text).ok()?;
    let list = value.as_array()?;
    if list.is_empty() {
        return None;
    }

    let first = list.first()?.as_object()?;
    let headers: Vec<String> = first.keys().cloned().collect();

    let mut rows = Vec::with_capacity(list.len());
    for item in list {
        let obj = item.as_object()?;
        let row = headers
            .iter()
            .map(|k| obj.get(k).map(cell_text).unwrap_or_default())
            .collect();
        rows.push(row);
    }

    Some(StatsTable { headers: Some(headers), rows })
}

fn cell_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => s!(),
        other => other.to_string(),
    }
}

/* ---------- tests ---------- */
