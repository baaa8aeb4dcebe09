mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::Result;

pub fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = reqwest::blocking::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req)?;
    Ok(resp.bytes()?.to_vec())
}
