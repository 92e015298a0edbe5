mod series;
mod variety;

pub use series::{Catalog, MAX_CATALOG_LEN, MAX_SERIES_LEN, SeriesSpec};
pub use variety::VarietyReport;
