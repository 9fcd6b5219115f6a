// src/specs/wikipedia.rs
//
// Portrait lookup via the MediaWiki query API. Exact title only — no
// fuzzy matching, so "Zzqx Notaplayer" misses cleanly instead of landing
// on an unrelated page. Total function: a placeholder comes back on any
// failure.

use reqwest::blocking::Client;
use serde_json::Value;

use crate::config::consts::{PLACEHOLDER_IMAGE, WIKIPEDIA_API};
use crate::core::net;

/// Resolve a portrait URL for the player, or the fixed placeholder.
pub fn find_portrait(client: &Client, player: &str) -> String {
    match try_portrait(client, player) {
        Some(url) => {
            logf!("Image: {player:?} → {url}");
            url
        }
        None => {
            logd!("Image: no portrait for {player:?}, using placeholder");
            s!(PLACEHOLDER_IMAGE)
        }
    }
}

fn try_portrait(client: &Client, player: &str) -> Option<String> {
    let titles = page_image_titles(client, player)?;
    let file = pick_raster(&titles)?;
    image_url(client, file)
}

/// Image file titles listed on the exact-title page, in page order.
fn page_image_titles(client: &Client, title: &str) -> Option<Vec<String>> {
    let url = format!(
        "{WIKIPEDIA_API}?action=query&format=json&redirects=1&prop=images&imlimit=50&titles={}",
        urlencoding::encode(title)
    );
    let resp = net::get_json(client, &url)
        .map_err(|e| logd!("Image: page lookup failed for {title:?}: {e}"))
        .ok()?;

    let pages = resp.get("query")?.get("pages")?.as_object()?;
    let page = pages.values().next()?;
    if page.get("missing").is_some() {
        return None;
    }

    let images = page.get("images")?.as_array()?;
    Some(
        images
            .iter()
            .filter_map(|i| i.get("title").and_then(Value::as_str))
            .map(String::from)
            .collect(),
    )
}

/// First non-vector raster image: .jpg/.png, and nothing SVG-derived.
pub fn pick_raster(titles: &[String]) -> Option<&String> {
    titles.iter().find(|t| {
        let lc = t.to_ascii_lowercase();
        (lc.ends_with(".jpg") || lc.ends_with(".png")) && !lc.contains("svg")
    })
}

/// Resolve a `File:` title to its raw URL.
fn image_url(client: &Client, file_title: &str) -> Option<String> {
    let url = format!(
        "{WIKIPEDIA_API}?action=query&format=json&prop=imageinfo&iiprop=url&titles={}",
        urlencoding::encode(file_title)
    );
    let resp = net::get_json(client, &url)
        .map_err(|e| logd!("Image: imageinfo failed for {file_title:?}: {e}"))
        .ok()?;

    let pages = resp.get("query")?.get("pages")?.as_object()?;
    let page = pages.values().next()?;
    page.get("imageinfo")?
        .get(0)?
        .get("url")?
        .as_str()
        .map(String::from)
}

/* ---------- tests ---------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_raster_wins_svg_skipped() {
        let titles = vec![
            s!("File:Commons-logo.svg"),
            s!("File:Flag_of_India.svg.png"), // svg-derived raster, still excluded
            s!("File:Virat_Kohli_portrait.jpg"),
            s!("File:Stadium.png"),
        ];
        assert_eq!(pick_raster(&titles), Some(&titles[2]));
    }

    #[test]
    fn no_suitable_image_yields_none() {
        let titles = vec![s!("File:Icon.svg"), s!("File:Diagram.gif")];
        assert_eq!(pick_raster(&titles), None);
        assert_eq!(pick_raster(&[]), None);
    }
}
