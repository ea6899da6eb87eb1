//! Gene mutation visualization.
//!
//! Three plotting helpers over in-memory data: a cumulative
//! mutation-frequency curve along a gene, a bar chart of mutation counts by
//! cancer type, and a body-map overlay that places per-site incidence
//! frequencies onto a reference image.
//!
//! Every plot call renders a complete PNG to a caller-supplied path through
//! its own bitmap backend, so independent calls never share drawing state.
//! The numeric parts (histogram accumulation, site-coordinate mapping) are
//! plain functions and methods that can be exercised without rendering.

pub mod charts;
pub mod data;

pub use charts::{
    cumulative_histogram, plot_cancer_type_freq, plot_mutation_frequency, ChartError,
    SiteMapPlotter, SitePlotOptions,
};
pub use data::{
    default_site_dictionary, site_dictionary_from_json, DictionaryError, SiteDictionary,
};
