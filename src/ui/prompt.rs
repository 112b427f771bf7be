//! Interactive stdin prompts.
//!
//! Every menu is numeric: re-ask on junk input, range-check the number, and
//! treat a closed stdin as an error rather than looping forever.

use std::io::{self, Write};

use anyhow::{bail, Context, Result};

use crate::data::filter::FilterSpec;
use crate::data::loader::{City, CITIES};

pub(crate) const RULE_WIDTH: usize = 40;

/// Print the `----` separator rule.
pub fn rule() {
    println!("{}", "-".repeat(RULE_WIDTH));
}

/// Read one line from stdin, erroring if the stream is closed.
pub(crate) fn read_line() -> Result<String> {
    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .context("reading from stdin")?;
    if bytes == 0 {
        bail!("no input received (stdin closed)");
    }
    Ok(input.trim().to_string())
}

/// Prompt until the user enters a whole number in `min..=max`.
pub fn read_int(prompt: &str, min: u32, max: u32) -> Result<u32> {
    loop {
        print!("{prompt} ");
        io::stdout().flush().context("writing prompt")?;

        let input = read_line()?;
        match input.parse::<u32>() {
            Ok(n) if (min..=max).contains(&n) => return Ok(n),
            Ok(n) => println!("Incorrect value: {n}. Enter a number between {min} and {max}."),
            Err(_) => println!("Incorrect value. That's not a whole number!"),
        }
    }
}

/// Ask the user for a city and an optional month/weekday filter.
pub fn get_filters() -> Result<(&'static City, FilterSpec)> {
    rule();
    println!("\n\nHello! Let's explore some US bikeshare data!\n");

    let city_no = read_int(
        "Would you like to see data for 1=Chicago, 2=New York City, or 3=Washington?",
        1,
        3,
    )?;
    let city = &CITIES[(city_no - 1) as usize];

    let axis = read_int(
        "Would you like to filter the data by 1=month, 2=day, 3=both, or 0=not at all?",
        0,
        3,
    )?;

    let mut spec = FilterSpec::default();

    if axis == 1 || axis == 3 {
        // The published extracts only cover January through June.
        let month = read_int(
            "Which month? 1=January, 2=February, 3=March, 4=April, 5=May, or 6=June?",
            1,
            6,
        )?;
        spec.month = Some(month);
    }

    if axis == 2 || axis == 3 {
        let day = read_int(
            "Which day? 1=Monday, 2=Tuesday, 3=Wednesday, 4=Thursday, 5=Friday, 6=Saturday, or 7=Sunday?",
            1,
            7,
        )?;
        spec.weekday = Some(day - 1);
    }

    rule();
    Ok((city, spec))
}

/// Ask a yes/no question; anything other than "yes" counts as no.
pub fn confirm(question: &str) -> Result<bool> {
    print!("{question} ");
    io::stdout().flush().context("writing prompt")?;
    let input = read_line()?;
    Ok(input.eq_ignore_ascii_case("yes"))
}
