// src/core/net.rs

// Blocking HTTP plumbing shared by every source adapter.
// All calls are synchronous with a bounded timeout; timeouts are wired into
// the client so a slow host cannot hang the interactive flow indefinitely.

use std::error::Error;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;

/// Build a client with a browser-like identity and a per-request timeout.
pub fn client(timeout_secs: u64) -> Result<Client, Box<dyn Error>> {
    let c = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    Ok(c)
}

pub fn get(client: &Client, url: &str) -> Result<String, Box<dyn Error>> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.text()?)
}

pub fn get_bytes(client: &Client, url: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.bytes()?.to_vec())
}

pub fn get_json(client: &Client, url: &str) -> Result<serde_json::Value, Box<dyn Error>> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.json()?)
}

pub fn post_form(
    client: &Client,
    url: &str,
    fields: &[(&str, &str)],
) -> Result<String, Box<dyn Error>> {
    let resp = client.post(url).form(fields).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.text()?)
}

pub fn post_json(
    client: &Client,
    url: &str,
    body: &serde_json::Value,
) -> Result<serde_json::Value, Box<dyn Error>> {
    let resp = client.post(url).json(body).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.json()?)
}
