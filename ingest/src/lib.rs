//! # Spot Ingestion
//!
//! One-shot fetch of Summerville venues from the places API.
//!
//! Runs outside the request-serving path: each search point is queried in
//! turn (with a per-call timeout, a capped retry, and a short delay between
//! calls), results are deduplicated by place id in discovery order, and the
//! full record set is written to the data file in a single pass. A failed
//! point degrades coverage for that area only; the run continues and the
//! per-point outcome is reported at the end.

use std::{collections::HashSet, env, fs, path::Path, time::Duration};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use signpost::{report, spot::Spot};
use thiserror::Error;
use tokio::time::sleep;

pub mod models;
pub mod utils;

use models::{ENDPOINT, FIELD_MASK, SearchResponse};
use utils::{SEARCH_POINTS, SearchPoint, build_payload, transform_place};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_DELAY: Duration = Duration::from_millis(200);
const MAX_ATTEMPTS: u32 = 3;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("places api returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

pub async fn run(out_path: &Path, radius_m: f64) -> Result<()> {
    let api_key =
        env::var("GOOGLE_API_KEY").context("GOOGLE_API_KEY environment variable required")?;

    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

    println!("Fetching restaurants from the places API...\n");

    let pb = ProgressBar::new(SEARCH_POINTS.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap()
        .progress_chars("=> "),
    );

    let mut spots: Vec<Spot> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut succeeded = 0;
    let mut failed = 0;

    for point in SEARCH_POINTS {
        pb.set_message(format!("Searching {}", point.name));

        match fetch_point(&client, &api_key, point, radius_m).await {
            Ok(response) => {
                succeeded += 1;

                let found = response.places.len();
                let mut added = 0;

                for place in response.places {
                    // Dedup by place id, whichever point found it first.
                    if !seen.insert(place.id.clone()) {
                        continue;
                    }

                    if let Some(spot) = transform_place(place) {
                        spots.push(spot);
                        added += 1;
                    } else {
                        println!("\n{}: skipping a place without coordinates", point.name);
                    }
                }

                println!("\n{}: {} places, {} new", point.name, found, added);
            }
            Err(err) => {
                failed += 1;
                println!("\n{}: giving up: {err}", point.name);
            }
        }

        sleep(REQUEST_DELAY).await;
        pb.inc(1);
    }

    pb.finish_with_message("Done");

    println!("\nSearch points: {succeeded} succeeded, {failed} failed");
    println!("Total unique places: {}", spots.len());

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(out_path, serde_json::to_string_pretty(&spots)?)?;
    println!("Saved to {}", out_path.display());

    print_stats(&spots);

    Ok(())
}

async fn fetch_point(
    client: &Client,
    api_key: &str,
    point: &SearchPoint,
    radius_m: f64,
) -> Result<SearchResponse, FetchError> {
    let payload = build_payload(point, radius_m);
    let mut attempt = 1;

    loop {
        match request_once(client, api_key, &payload).await {
            Ok(response) => return Ok(response),
            Err(err) if attempt < MAX_ATTEMPTS => {
                println!("\n{}: attempt {attempt} failed ({err}), retrying", point.name);
                attempt += 1;
                sleep(REQUEST_DELAY).await;
            }
            Err(err) => return Err(err),
        }
    }
}

async fn request_once(
    client: &Client,
    api_key: &str,
    payload: &serde_json::Value,
) -> Result<SearchResponse, FetchError> {
    let response = client
        .post(ENDPOINT)
        .header("X-Goog-Api-Key", api_key)
        .header("X-Goog-FieldMask", FIELD_MASK)
        .json(payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::Status { status, body });
    }

    Ok(response.json().await?)
}

fn print_stats(spots: &[Spot]) {
    println!("\nNeighborhood breakdown:");
    for entry in report::by_neighborhood(spots) {
        println!("   {}: {}", entry.neighborhood, entry.count);
    }

    println!("\nTop cuisine types:");
    for entry in report::by_cuisine(spots).into_iter().take(10) {
        println!("   {}: {}", entry.cuisine, entry.count);
    }

    println!("\nSample places:");
    for spot in spots.iter().take(5) {
        println!("   - {}", spot.name);
        println!("     {} | {}", spot.neighborhood, spot.cuisine_tags.join(", "));
    }
}
