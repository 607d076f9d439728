use std::path::Path;

use tracing_subscriber::EnvFilter;
use validator::Validate;

use crate::analyzers::{
    category_distribution, category_percentages, category_pivot, east_west_comparison,
    hemisphere_comparison, search_country_summaries, threshold_split, GroupStats,
};
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::map::build_layer_with_alpha;
use crate::models::AqiDataset;
use crate::processors::Normalizer;
use crate::readers::MeasurementReader;
use crate::utils::progress::ProgressReporter;

pub fn run(cli: Cli) -> Result<()> {
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Report {
            input,
            threshold,
            min_cities,
            search,
            category,
            eager_labels,
        } => {
            let dataset = load_dataset(&input, eager_labels)?;
            if dataset.is_empty() {
                println!("No rows survived normalization - nothing to report");
                return Ok(());
            }

            report(&dataset, threshold as f64, min_cities, search, category);
        }

        Commands::Info { input } => {
            let dataset = load_dataset(&input, 0)?;

            println!("Rows: {} kept, {} dropped", dataset.len(), dataset.rows_dropped());

            let out_of_range = dataset
                .records()
                .iter()
                .filter(|r| r.validate().is_err())
                .count();
            if out_of_range > 0 {
                println!("Rows with out-of-range coordinates: {}", out_of_range);
            }

            let countries: std::collections::BTreeSet<&str> = dataset
                .records()
                .iter()
                .map(|r| r.country.as_str())
                .collect();
            println!("Countries: {}", countries.len());
            println!("Categories: {}", dataset.categories().join(", "));

            let (north, south) = dataset.hemisphere_means();
            println!("Mean AQI: Northern {:.1}, Southern {:.1}", north, south);

            if let Some((min_lat, max_lat, min_lon, max_lon)) = dataset.geographic_bounds() {
                println!(
                    "Coverage: lat {:.1} to {:.1}, lon {:.1} to {:.1}",
                    min_lat, max_lat, min_lon, max_lon
                );
            }
        }

        Commands::Map {
            input,
            output,
            alpha,
        } => {
            let dataset = load_dataset(&input, crate::utils::constants::DEFAULT_EAGER_LABELS)?;
            let layer = build_layer_with_alpha(&dataset, alpha);

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::File::create(&output)?;
            serde_json::to_writer_pretty(file, &layer)?;

            println!(
                "Wrote {} map points to {} (center {:.2}, {:.2})",
                layer.points.len(),
                output.display(),
                layer.viewport.latitude,
                layer.viewport.longitude
            );
        }
    }

    Ok(())
}

fn load_dataset(input: &Path, eager_labels: usize) -> Result<AqiDataset> {
    let progress = ProgressReporter::new_spinner("Loading measurements...", false);

    let reader = MeasurementReader::new();
    let raw_rows = reader.read_file(input)?;

    progress.set_message("Normalizing rows...");
    let normalizer = Normalizer::with_eager_labels(eager_labels);
    let dataset = normalizer.normalize(&raw_rows);

    progress.finish_with_message(&format!(
        "Loaded {} rows ({} dropped)",
        dataset.len(),
        dataset.rows_dropped()
    ));

    Ok(dataset)
}

fn report(
    dataset: &AqiDataset,
    threshold: f64,
    min_cities: usize,
    search: Option<String>,
    category: Option<String>,
) {
    println!("Country-Level AQI Statistics");
    let view = search_country_summaries(dataset, min_cities, search.as_deref().unwrap_or(""));
    if view.search_fallback {
        println!(
            "No countries found matching '{}'. Showing all countries.",
            search.as_deref().unwrap_or("")
        );
    }
    println!(
        "{:<24} {:>7} {:>8} {:>7} {:>7}",
        "Country", "Cities", "Mean", "Min", "Max"
    );
    for row in &view.rows {
        println!(
            "{:<24} {:>7} {:>8.1} {:>7.0} {:>7.0}",
            row.country, row.cities, row.mean, row.min, row.max
        );
    }

    let split = threshold_split(dataset, threshold, min_cities);
    println!("\nCountries Below Threshold ({:.0})", threshold);
    for bucket in &split.below {
        println!("{:<24} {:>7}", bucket.country, bucket.cities);
    }
    println!("\nCountries Above Threshold ({:.0})", threshold);
    for bucket in &split.above {
        println!("{:<24} {:>7}", bucket.country, bucket.cities);
    }

    println!("\nNorthern vs Southern Hemisphere");
    print_group_stats(&hemisphere_comparison(dataset));
    println!("\nEastern vs Western Hemisphere");
    print_group_stats(&east_west_comparison(dataset));

    println!("\nPM2.5 Categories by Country");
    let pivot = category_pivot(dataset, min_cities);
    let header: Vec<String> = pivot
        .categories
        .iter()
        .map(|c| {
            if c.is_empty() {
                "(none)".to_string()
            } else {
                c.clone()
            }
        })
        .collect();
    println!("{:<24} {}", "Country", header.join("  "));
    for row in &pivot.rows {
        let counts: Vec<String> = row
            .counts
            .iter()
            .zip(&header)
            .map(|(count, name)| format!("{:>width$}", count, width = name.len().max(3)))
            .collect();
        println!("{:<24} {}", row.country, counts.join("  "));
    }

    println!("\nGlobal PM2.5 Category Distribution");
    for entry in category_distribution(dataset) {
        let label = if entry.category.is_empty() {
            "(none)"
        } else {
            entry.category.as_str()
        };
        println!("{:<32} {:>6.1}%", label, entry.percentage);
    }

    // Presentation default: first category alphabetically.
    let selected = category.or_else(|| dataset.categories().into_iter().next());
    match selected {
        Some(selected) if !selected.is_empty() => {
            println!(
                "\nTop 10 Countries by % of Cities with {} PM2.5 Levels",
                selected
            );
            let shares = category_percentages(dataset, &selected, min_cities);
            if shares.is_empty() {
                println!("No countries to rank for this category");
            }
            for share in shares {
                println!("{:<24} {:>7.2}%", share.country, share.percentage);
            }
        }
        _ => println!("\nNo PM2.5 category available to rank"),
    }

    let (north, south) = dataset.hemisphere_means();
    println!(
        "\nHemisphere mean AQI: Northern {:.1}, Southern {:.1}",
        north, south
    );
}

fn print_group_stats(groups: &[GroupStats; 2]) {
    println!(
        "{:<10} {:>7} {:>9} {:>9} {:>8} {:>8}",
        "Group", "Cities", "Average", "Std Dev", "Minimum", "Maximum"
    );
    for stats in groups {
        println!(
            "{:<10} {:>7} {:>9.1} {:>9.1} {:>8.0} {:>8.0}",
            stats.group, stats.cities, stats.mean, stats.std_dev, stats.min, stats.max
        );
    }
}
