use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use spdlog::prelude::*;

mod builder;
mod classify;
mod error;
mod sitemap;
mod storage;

const RULE_WIDTH: usize = 70;

#[derive(Parser, Debug)]
#[command(name = "sitemap-builder")]
#[command(about = "Generate a sitemap.xml from a list of URLs", long_about = None)]
struct Cli {
    /// Text file with one URL per line.
    #[arg(short, long, default_value = "blog_urls.txt")]
    input: PathBuf,

    /// Where to write the sitemap.
    #[arg(short, long, default_value = "complete-sitemap.xml")]
    output: PathBuf,

    /// Date used for every <lastmod> (YYYY-MM-DD), defaults to today.
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,

    #[arg(short, long)]
    verbose: bool,
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("invalid date: {s}"))
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_logger: Arc<Logger> = spdlog::default_logger();
    default_logger.set_level_filter(if cli.verbose {
        LevelFilter::All
    } else {
        LevelFilter::MoreSevereEqual(spdlog::Level::Info)
    });

    println!("{}", rule());
    println!("COMPLETE SITEMAP GENERATOR");
    println!("{}", rule());
    println!();

    let lastmod = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let count = builder::create_sitemap(&cli.input, &cli.output, lastmod);

    if count == 0 {
        println!("\nSitemap generation failed. Check errors above.");
        return ExitCode::FAILURE;
    }

    println!("\n{}", rule());
    println!("SUCCESS! Sitemap created: {}", cli.output.display());
    println!("{}", rule());
    println!("Total URLs in sitemap: {count}");
    println!("{}", rule());
    println!("\nNext step: Upload '{}' to GitHub", cli.output.display());
    return ExitCode::SUCCESS;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_need_no_arguments() {
        let cli = Cli::try_parse_from(["sitemap-builder"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("blog_urls.txt"));
        assert_eq!(cli.output, PathBuf::from("complete-sitemap.xml"));
        assert!(cli.date.is_none());
    }

    #[test]
    fn date_override_is_parsed() {
        let cli = Cli::try_parse_from(["sitemap-builder", "--date", "2024-12-01", "-o", "out.xml"])
            .unwrap();
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2024, 12, 1));
        assert_eq!(cli.output, PathBuf::from("out.xml"));
    }

    #[test]
    fn bad_date_is_rejected() {
        assert!(Cli::try_parse_from(["sitemap-builder", "--date", "12/01/2024"]).is_err());
    }
}
