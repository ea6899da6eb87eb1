//! Charts module - chart rendering

mod cancer;
mod frequency;
mod sitemap;

pub use cancer::plot_cancer_type_freq;
pub use frequency::{cumulative_histogram, plot_mutation_frequency};
pub use sitemap::{SiteMapPlotter, SitePlotOptions};

use polars::prelude::PolarsError;
use thiserror::Error;

/// Failure modes of the chart operations. Every failure is terminal for the
/// current plot call and is surfaced to the caller; nothing is retried or
/// silently swallowed.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("input table has no `{0}` column")]
    MissingColumn(&'static str),
    #[error("site `{0}` has no entry in the active site dictionary")]
    UnmappedSite(String),
    #[error("failed to load reference image: {0}")]
    ImageLoad(#[from] image::ImageError),
    #[error("cannot derive a color scale: every frequency is zero or the table is empty")]
    DegenerateScale,
    #[error("gene size must be greater than zero")]
    InvalidGeneSize,
    #[error(transparent)]
    Table(#[from] PolarsError),
    #[error("failed to render chart: {0}")]
    Render(String),
}

impl ChartError {
    pub(crate) fn render<E: std::fmt::Display>(err: E) -> Self {
        ChartError::Render(err.to_string())
    }
}
