//! The interactive tour itself: load, overview, aggregate, report, plot.
//!
//! Control flows strictly top to bottom. Every step after loading is gated
//! behind a keypress unless `--headless` is set, in which case the prompts
//! and plot windows are skipped and all printed analysis still happens.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use log::info;

use crate::{aggregate, cli::Cli, dataset::Dataset, io_utils, overview, plot, style};

const TOP_YEARS: usize = 10;

const SCATTER_TITLE: &str = "Piece Count Per Set By Year";
const BARS_TITLE: &str = "LEGO Sets Released Per Year";

pub fn execute(args: &Cli) -> Result<()> {
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let lego = style::lego();
    let enter = style::enter_key();
    let x_button = style::x_button();

    print!("Reading {lego} set data from file...");
    io::stdout().flush().context("Flushing stdout")?;
    let dataset = match Dataset::load(&args.input, delimiter, encoding) {
        Ok(dataset) => {
            println!("complete!");
            dataset
        }
        Err(err) => {
            println!("failed!");
            return Err(err);
        }
    };
    info!(
        "Loaded {} row(s) from {}",
        dataset.row_count(),
        args.input.display()
    );

    println!("This is an interactive data viewing program for {lego} sets.");
    println!("Follow along and you might learn something about {lego}s!");
    pause(
        args.headless,
        &format!("Press {enter} to view the data overview:"),
    )?;

    overview::print_overview(&dataset);
    pause(
        args.headless,
        &format!("Press {enter} when ready to view the data:"),
    )?;

    let year_parts = dataset.year_parts();
    let ranked = aggregate::rank_parts_by_year(&year_parts);

    println!("How has piece count changed over time?");
    println!("What are the biggest years for piece count?");
    pause(
        args.headless,
        &format!("Press {enter} to see the top ten years for piece count:"),
    )?;

    println!("Year: # of pieces");
    for &(total, year) in ranked.iter().take(TOP_YEARS) {
        println!("{year}: {total}");
    }

    println!("Wow! That is a lot of pieces!");
    println!(
        "It sure looks like {lego} sets get more complex every year, but let's see if that is true..."
    );
    println!("Here is a scatterplot showing piece count for each set according to year.");
    println!("Press {x_button} on the window when done viewing.");
    pause(args.headless, &format!("Press {enter} to see the plot:"))?;
    if args.headless {
        info!("Headless run, skipping window '{SCATTER_TITLE}'");
    } else {
        plot::show_scatter(
            SCATTER_TITLE,
            "year",
            "num_parts",
            plot::scatter_points(&year_parts),
        )?;
    }

    println!(
        "It looks like the average piece count for {lego} sets has been trending upwards as time goes on!"
    );
    pause(
        args.headless,
        &format!("Press {enter} to continue to the next visualization:"),
    )?;

    println!("How many {lego} sets release by year?");
    println!("Does it trend downwards, upwards, or stay constant?");
    println!("Here is a bar chart showing the number of sets released per year.");
    println!("Press {x_button} on the window when done viewing.");
    pause(args.headless, &format!("Press {enter} to see the chart:"))?;
    let counts = aggregate::count_sets_per_year(&dataset.years());
    if args.headless {
        info!("Headless run, skipping window '{BARS_TITLE}'");
    } else {
        plot::show_bars(BARS_TITLE, "year", "sets", plot::year_bars(&counts))?;
    }

    println!("It looks like {lego} has been releasing more sets per year as well!");
    println!(
        "This means that {lego} sets have been getting more complex as their numbers increase!"
    );
    println!("Thank you for interacting with this program!");
    println!("I hope you learned something about {lego}s!");
    Ok(())
}

// Waits for the user to press ENTER. No timeout, no cancellation.
fn pause(headless: bool, prompt: &str) -> Result<()> {
    if headless {
        return Ok(());
    }
    print!("{prompt}");
    io::stdout().flush().context("Flushing stdout")?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Reading keypress")?;
    Ok(())
}
