use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aqi-dashboard")]
#[command(about = "World air-quality dashboard aggregation core")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every dashboard view for the given parameters
    Report {
        #[arg(short, long, help = "Input CSV file of city measurements")]
        input: PathBuf,

        #[arg(
            short,
            long,
            default_value_t = 50,
            value_parser = clap::value_parser!(u32).range(0..=500),
            help = "AQI threshold for the below/above split"
        )]
        threshold: u32,

        #[arg(
            short,
            long,
            default_value_t = 5,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=50),
            help = "Minimum cities per country for a country to be shown"
        )]
        min_cities: usize,

        #[arg(short, long, help = "Country search text (case-insensitive substring)")]
        search: Option<String>,

        #[arg(
            short,
            long,
            help = "PM2.5 category to rank [default: first category alphabetically]"
        )]
        category: Option<String>,

        #[arg(
            long,
            default_value_t = 100,
            help = "Number of leading rows given an eager location label"
        )]
        eager_labels: usize,
    },

    /// Summarize the normalized dataset
    Info {
        #[arg(short, long, help = "Input CSV file of city measurements")]
        input: PathBuf,
    },

    /// Export the map scatter layer as JSON
    Map {
        #[arg(short, long, help = "Input CSV file of city measurements")]
        input: PathBuf,

        #[arg(short, long, help = "Output JSON file for the map layer")]
        output: PathBuf,

        #[arg(long, default_value_t = 180, help = "Alpha channel for point colors")]
        alpha: u8,
    },
}
