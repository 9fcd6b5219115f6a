// src/specs/cricbuzz.rs

use reqwest::blocking::Client;

use crate::config::consts::{
    PROFILE_PATH_PATTERN, SEARCH_ENDPOINT, SEARCH_MAX_RESULTS,
};
use crate::core::html::{attr_value, next_tag_block_ci, row_cells, table_blocks, to_lower};
use crate::core::net;
use crate::data::StatsTable;

/// Web-search for the player's Cricbuzz profile and return its stats URL.
/// Inspects the first few results and takes the first href under the
/// recognized profile path. Any failure (network, no matching result)
/// yields `None`; this never raises.
pub fn locate_profile(client: &Client, player: &str) -> Option<String> {
    let query = join!(player, " cricbuzz profile");
    let doc = match net::post_form(client, SEARCH_ENDPOINT, &[("q", query.as_str())]) {
        Ok(d) => d,
        Err(e) => {
            logd!("Locate: search failed for {player:?}: {e}");
            return None;
        }
    };

    for href in result_hrefs(&doc, SEARCH_MAX_RESULTS) {
        if href.contains(PROFILE_PATH_PATTERN) {
            let url = normalize_stats_url(&href);
            logf!("Locate: {player:?} → {url}");
            return Some(url);
        }
    }
    logd!("Locate: no profile result for {player:?}");
    None
}

/// Result anchor hrefs from a DuckDuckGo HTML results page, redirect
/// wrappers decoded, document order, at most `limit`.
fn result_hrefs(doc: &str, limit: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while out.len() < limit {
        let Some((s, e)) = next_tag_block_ci(doc, "<a", "</a>", pos) else { break };
        let block = &doc[s..e];
        pos = e;

        // Only the main result anchors, not snippets or ads
        let open_end = block.find('>').unwrap_or(block.len());
        let open_tag = &block[..open_end];
        if !to_lower(open_tag).contains("result__a") {
            continue;
        }
        if let Some(href) = attr_value(open_tag, "href") {
            out.push(decode_redirect_href(&href));
        }
    }
    out
}

/// DDG wraps result URLs in redirect links like
/// `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`.
/// Extract and percent-decode the actual destination.
pub fn decode_redirect_href(href: &str) -> String {
    if let Some(at) = href.find("uddg=") {
        let start = at + 5;
        let end = href[start..]
            .find('&')
            .map(|i| start + i)
            .unwrap_or(href.len());
        let encoded = &href[start..end];
        if !encoded.is_empty() {
            if let Ok(decoded) = urlencoding::decode(encoded) {
                return decoded.into_owned();
            }
        }
    }
    s!(href)
}

/// Profile URLs point at the stats sub-page.
pub fn normalize_stats_url(url: &str) -> String {
    let url = url.trim_end_matches('/');
    if url.ends_with("/stats") {
        s!(url)
    } else {
        join!(url, "/stats")
    }
}

/// Fetch the stats page and return the batting career table, if any.
pub fn fetch_stats(client: &Client, url: &str) -> Option<StatsTable> {
    let doc = match net::get(client, url) {
        Ok(d) => d,
        Err(e) => {
            logd!("LiveFetch: GET {url} failed: {e}");
            return None;
        }
    };

    let tables = parse_tables(&doc);
    logd!("LiveFetch: {} table(s) on {url}", tables.len());

    let found = tables.into_iter().find(is_batting_table);
    if found.is_none() {
        logd!("LiveFetch: no batting table on {url}");
    }
    found
}

/// Every `<table>` on the page, shaped into rows × cells.
/// A leading all-`<th>` row becomes the header row.
pub fn parse_tables(doc: &str) -> Vec<StatsTable> {
    table_blocks(doc).into_iter().map(parse_table).collect()
}

fn parse_table(block: &str) -> StatsTable {
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(block, "<tr", "</tr>", pos) {
        let tr = &block[s..e];
        pos = e;

        let cells = row_cells(tr);
        if cells.is_empty() {
            continue;
        }
        if headers.is_none() && rows.is_empty() && to_lower(tr).contains("<th") {
            headers = Some(cells);
        } else {
            rows.push(cells);
        }
    }

    StatsTable { headers, rows }
}

/// Selection heuristic for "the batting career table": its flattened text
/// mentions runs, and at least one of the long formats. Approximate on
/// purpose; the page layout is not under our control, so no fixed column
/// positions.
pub fn is_batting_table(table: &StatsTable) -> bool {
    let text = table.flatten_lower();
    text.contains("runs") && (text.contains("odi") || text.contains("test"))
}

/* ---------- tests ---------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_url_appended_once() {
        assert_eq!(
            normalize_stats_url("https://www.cricbuzz.com/profiles/1413/virat-kohli"),
            "https://www.cricbuzz.com/profiles/1413/virat-kohli/stats"
        );
        assert_eq!(
            normalize_stats_url("https://www.cricbuzz.com/profiles/1413/virat-kohli/stats"),
            "https://www.cricbuzz.com/profiles/1413/virat-kohli/stats"
        );
    }

    #[test]
    fn redirect_href_decoded() {
        let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.cricbuzz.com%2Fprofiles%2F1413%2Fvirat-kohli&rut=abc";
        assert_eq!(
            decode_redirect_href(href),
            "https://www.cricbuzz.com/profiles/1413/virat-kohli"
        );
        // plain hrefs pass through untouched
        assert_eq!(decode_redirect_href("https://example.com/x"), "https://example.com/x");
    }

    #[test]
    fn result_anchors_only_and_limited() {
        let doc = r#"
            <a class="nav">skip</a>
            <a rel="nofollow" class="result__a" href="https://one.example/">One</a>
            <a class="result__snippet" href="https://nope.example/">snippet</a>
            <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Ftwo.example%2F">Two</a>
            <a class="result__a" href="https://three.example/">Three</a>
        "#;
        let hrefs = result_hrefs(doc, 2);
        assert_eq!(hrefs, vec![s!("https://one.example/"), s!("https://two.example/")]);
    }

    const PAGE: &str = r#"
        <html><body>
        <table><tr><td>Navigation</td><td>junk</td></tr></table>
        <table>
          <tr><th>Format</th><th>Matches</th><th>Runs</th><th>Average</th></tr>
          <tr><td>Test</td><td>113</td><td>8848</td><td>49.15</td></tr>
          <tr><td>ODI</td><td>295</td><td>13906</td><td>58.18</td></tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn batting_table_selected_by_tokens() {
        let tables = parse_tables(PAGE);
        assert_eq!(tables.len(), 2);
        assert!(!is_batting_table(&tables[0]));
        assert!(is_batting_table(&tables[1]));

        let t = &tables[1];
        assert_eq!(
            t.headers.as_deref(),
            Some(&[s!("Format"), s!("Matches"), s!("Runs"), s!("Average")][..])
        );
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[0][0], "Test");
        assert_eq!(t.rows[1][2], "13906");
    }

    #[test]
    fn bowling_only_table_is_not_a_match() {
        let t = StatsTable {
            headers: Some(vec![s!("Format"), s!("Wickets")]),
            rows: vec![vec![s!("T20"), s!("85")]],
        };
        assert!(!is_batting_table(&t));
    }
}
