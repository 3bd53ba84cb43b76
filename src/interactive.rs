//! Prompt loop for choosing filters and browsing results.
//!
//! Every prompt re-asks until the answer parses. Nothing carries over between
//! sessions except the settings passed in.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use tracing::{error, info};

use bikeshare_stats::config::{City, Settings};
use bikeshare_stats::filter::{DaySelector, FilterSelection, MonthSelector};
use bikeshare_stats::output::{RULE, raw_pages, render_rows, render_text};
use bikeshare_stats::pipeline::run_selection;

/// Reads one trimmed line. `None` once input is exhausted.
fn read_answer<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Asks `question` until the answer parses as `T`.
pub fn prompt_until_valid<T, R, W>(
    input: &mut R,
    output: &mut W,
    question: &str,
    retry: &str,
) -> Result<Option<T>>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{question}")?;
        output.flush()?;

        let Some(answer) = read_answer(input)? else {
            return Ok(None);
        };
        match answer.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(output, "{retry}")?,
        }
    }
}

/// `true` for "yes" or "y" in any case.
pub fn ask_yes<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool> {
    write!(output, "{question}")?;
    output.flush()?;
    Ok(read_answer(input)?
        .map(|a| matches!(a.to_lowercase().as_str(), "yes" | "y"))
        .unwrap_or(false))
}

fn ask_selection<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<FilterSelection>> {
    writeln!(output, "Hello! Let's explore some US bikeshare data!")?;

    let Some(city) = prompt_until_valid::<City, _, _>(
        input,
        output,
        "Please enter the city name: ",
        "Invalid city. Please try again!",
    )?
    else {
        return Ok(None);
    };
    let Some(month) = prompt_until_valid::<MonthSelector, _, _>(
        input,
        output,
        "Please enter month: ",
        "Invalid month. Please try again!",
    )?
    else {
        return Ok(None);
    };
    let Some(day) = prompt_until_valid::<DaySelector, _, _>(
        input,
        output,
        "Please input day of week: ",
        "Invalid day of week. Please try again!",
    )?
    else {
        return Ok(None);
    };

    writeln!(output, "{RULE}")?;
    Ok(Some(FilterSelection { city, month, day }))
}

/// Runs prompt sessions until the user declines to restart or input ends.
pub fn run_session<R: BufRead, W: Write>(
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    loop {
        let Some(selection) = ask_selection(input, output)? else {
            break;
        };
        info!(city = %selection.city, month = %selection.month, day = %selection.day, "Selection made");

        match run_selection(settings, &selection) {
            Ok(result) => {
                write!(output, "{}", render_text(&result.reports))?;

                let mut pages = raw_pages(&result.dataset);
                let mut question =
                    "\nWould you like to see next 5 rows of data? Please enter (y)es or no: ";
                while ask_yes(input, output, question)? {
                    match pages.next() {
                        Some(page) => write!(output, "{}", render_rows(page)?)?,
                        None => {
                            writeln!(output, "No more rows.")?;
                            break;
                        }
                    }
                    question = "Do you wish to continue?: ";
                }
            }
            Err(e) => {
                error!(error = %e, "Pipeline failed");
                writeln!(output, "Could not analyze {}: {e:#}", selection.city)?;
            }
        }

        if !ask_yes(input, output, "\nWould you like to restart? Enter yes or no.\n")? {
            break;
        }
    }
    Ok(())
}
