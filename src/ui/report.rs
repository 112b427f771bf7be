//! Pretty-printing of statistics blocks and raw-row paging.
//!
//! Each block renders as indented JSON of display strings, bracketed by a
//! heading and an elapsed-seconds line.

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use serde_json::json;

use crate::data::model::{DatasetView, TripRecord};
use crate::stats::{self, UserStats};
use crate::ui::prompt;

/// Rows shown per page of raw data.
pub const PAGE_SIZE: usize = 5;

fn print_block(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => log::error!("failed to render stats block: {e}"),
    }
}

fn print_elapsed(started: Instant) {
    println!("\nThis took {:.6} seconds.", started.elapsed().as_secs_f64());
    prompt::rule();
}

fn print_no_data(e: crate::error::EmptyDatasetError) {
    println!("No data: {e}.");
}

/// Heading, stats-or-no-data, timing. One block per aggregation.
pub fn time_stats(view: &DatasetView) {
    println!("\nCalculating The Most Frequent Times of Travel...\n");
    let started = Instant::now();

    match stats::time_stats(view) {
        Ok(t) => print_block(&json!({
            "month": t.month.to_string(),
            "day of week": t.day_of_week,
            "start hour": t.start_hour.to_string(),
        })),
        Err(e) => print_no_data(e),
    }

    print_elapsed(started);
}

pub fn station_stats(view: &DatasetView) {
    println!("\nCalculating The Most Popular Stations and Trip...\n");
    let started = Instant::now();

    match stats::station_stats(view) {
        Ok(s) => print_block(&json!({
            "start station": s.start_station.to_string(),
            "end station": s.end_station.to_string(),
            "station to station": s.station_pair.to_string(),
        })),
        Err(e) => print_no_data(e),
    }

    print_elapsed(started);
}

pub fn duration_stats(view: &DatasetView) {
    println!("\nCalculating Trip Duration...\n");
    let started = Instant::now();

    match stats::duration_stats(view) {
        Ok(d) => print_block(&json!({
            "total": d.total.to_string(),
            "mean": d.mean.to_string(),
        })),
        Err(e) => print_no_data(e),
    }

    print_elapsed(started);
}

pub fn user_stats(view: &DatasetView) {
    println!("\nCalculating User Stats...\n");
    let started = Instant::now();

    match stats::user_stats(view) {
        Ok(u) => print_block(&user_stats_block(&u)),
        Err(e) => print_no_data(e),
    }

    print_elapsed(started);
}

const NOT_AVAILABLE: &str = "N/D";

fn user_stats_block(u: &UserStats) -> serde_json::Value {
    let gender = match &u.gender {
        Some(counts) => format_counts(counts),
        None => NOT_AVAILABLE.to_string(),
    };

    let birth_year = match &u.birth_year {
        Some(y) => format!(
            "earliest ({}) | most recent ({}) | most common ({})",
            y.earliest, y.most_recent, y.most_common
        ),
        None => format!(
            "earliest ({NOT_AVAILABLE}) | most recent ({NOT_AVAILABLE}) | most common ({NOT_AVAILABLE})"
        ),
    };

    json!({
        "user types": format_counts(&u.user_types),
        "gender": gender,
        "year of birth": birth_year,
    })
}

/// `[("Subscriber", 2), ("Customer", 1)]` → `"Subscriber (2) | Customer (1)"`.
fn format_counts(counts: &[(String, usize)]) -> String {
    counts
        .iter()
        .map(|(value, n)| format!("{value} ({n})"))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// One raw row, compact enough for a terminal line.
fn format_row(r: &TripRecord) -> String {
    let mut line = format!(
        "{} -> {} | {} -> {} | {}s | {}",
        r.start_time, r.end_time, r.start_station, r.end_station, r.duration_secs, r.user_type
    );
    if let Some(gender) = &r.gender {
        line.push_str(&format!(" | {gender}"));
    }
    if let Some(year) = r.birth_year {
        line.push_str(&format!(" | {year}"));
    }
    line
}

/// Page through the raw rows of the view, `PAGE_SIZE` at a time.
///
/// The user confirms before each page; `q` stops, and hitting the end of the
/// data prints a notice and stops.
pub fn page_raw_rows(view: &DatasetView) -> Result<()> {
    let mut offset = 0;

    loop {
        print!("\nWould you like to see the next {PAGE_SIZE} lines of raw data? Enter \"q\" to quit: ");
        io::stdout().flush().context("writing prompt")?;

        let input = prompt::read_line()?;
        if input.eq_ignore_ascii_case("q") {
            break;
        }

        let end = (offset + PAGE_SIZE).min(view.len());
        for i in offset..end {
            if let Some(r) = view.get(i) {
                println!("{}", format_row(r));
            }
        }

        if end >= view.len() {
            println!();
            prompt::rule();
            println!("You have hit the end of the file.");
            prompt::rule();
            break;
        }

        offset = end;
    }

    Ok(())
}
