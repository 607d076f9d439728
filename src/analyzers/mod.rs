pub mod categories;
pub mod country_stats;
pub mod hemisphere;
pub mod threshold;

pub use categories::{
    category_distribution, category_percentages, category_pivot, CategoryDistribution,
    CategoryPivot, CategoryShare, PivotRow,
};
pub use country_stats::{
    country_summaries, search_country_summaries, CountrySummary, CountrySummaryView,
};
pub use hemisphere::{east_west_comparison, hemisphere_comparison, GroupStats};
pub use threshold::{threshold_split, ThresholdBucket, ThresholdSplit};
