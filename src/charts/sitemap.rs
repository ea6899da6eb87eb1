//! Site Map Plotter
//! Maps anatomical site names to pixel coordinates on a reference body
//! image and overlays a frequency-scaled scatter plot with labels.

use std::path::Path;

use plotters::element::BitMapElement;
use plotters::prelude::*;
use plotters::style::colors::colormaps::{ColorMap, DerivedColorMap};
use polars::prelude::*;

use super::ChartError;
use crate::data::{default_site_dictionary, SiteDictionary};

/// Pixel offset of the site-name label relative to its scatter point.
const NAME_LABEL_OFFSET: (i32, i32) = (200, 50);
/// Pixel offset of the percentage label relative to its scatter point.
const PERCENT_LABEL_OFFSET: (i32, i32) = (-100, 50);

/// Styling knobs for [`SiteMapPlotter::plot_site`].
pub struct SitePlotOptions {
    /// Marker area factor; a point's radius is `sqrt(frequency * size)` px.
    pub size: f64,
    /// Colormap applied to frequencies normalized into `[0, 1]`.
    pub colormap: DerivedColorMap<RGBColor>,
}

impl Default for SitePlotOptions {
    fn default() -> Self {
        Self {
            size: 2000.0,
            // diverging cool/warm endpoints
            colormap: DerivedColorMap::new(&[
                RGBColor(59, 76, 192),
                RGBColor(221, 221, 221),
                RGBColor(180, 4, 38),
            ]),
        }
    }
}

/// Plots per-site incidence frequencies onto a reference body image.
///
/// The plotter owns a [`SiteDictionary`] resolving site names to pixel
/// coordinates. The dictionary is injected at construction (the `Default`
/// instance uses [`default_site_dictionary`]) and can be replaced wholesale
/// at any time; it is never merged.
pub struct SiteMapPlotter {
    site_dictionary: SiteDictionary,
}

impl Default for SiteMapPlotter {
    fn default() -> Self {
        Self::new(default_site_dictionary())
    }
}

impl SiteMapPlotter {
    pub fn new(site_dictionary: SiteDictionary) -> Self {
        Self { site_dictionary }
    }

    /// Current site mapping. The view is shared: a later
    /// [`update_site_dictionary`](Self::update_site_dictionary) changes what
    /// subsequent calls resolve against.
    pub fn site_dictionary(&self) -> &SiteDictionary {
        &self.site_dictionary
    }

    /// Replace the entire mapping. Sites present only in the previous
    /// dictionary become unmapped.
    pub fn update_site_dictionary(&mut self, new_dictionary: SiteDictionary) {
        self.site_dictionary = new_dictionary;
    }

    /// Resolve every row's `site` through the dictionary and write the
    /// result into the `coord_x`/`coord_y` columns of a new frame.
    ///
    /// Rows whose site has no dictionary entry get null coordinates. A table
    /// without a `site` column fails fast. Re-running under an unchanged
    /// dictionary yields the same columns.
    pub fn map_site(&self, table: &DataFrame) -> Result<DataFrame, ChartError> {
        let site_col = table
            .column("site")
            .map_err(|_| ChartError::MissingColumn("site"))?;
        let sites = site_col.str()?;

        let mut xs: Vec<Option<i32>> = Vec::with_capacity(table.height());
        let mut ys: Vec<Option<i32>> = Vec::with_capacity(table.height());
        for name in sites.into_iter() {
            match name.and_then(|n| self.site_dictionary.get(n)) {
                Some(&[x, y]) => {
                    xs.push(Some(x));
                    ys.push(Some(y));
                }
                None => {
                    xs.push(None);
                    ys.push(None);
                }
            }
        }

        let mut mapped = table.clone();
        mapped.with_column(Column::new("coord_x".into(), xs))?;
        mapped.with_column(Column::new("coord_y".into(), ys))?;
        Ok(mapped)
    }

    /// Draw the reference image at its native pixel dimensions and overlay
    /// one scatter point per row, colored and sized by frequency, with a
    /// site-name label and a rounded-percentage label next to each point.
    /// The output carries no axes or ticks; the image is the only visual
    /// reference.
    ///
    /// Coordinates are derived through [`map_site`](Self::map_site) when the
    /// table does not already carry them. A row whose site is not in the
    /// dictionary aborts the call with [`ChartError::UnmappedSite`]; an
    /// empty table or an all-zero frequency column is rejected with
    /// [`ChartError::DegenerateScale`] before the image is opened.
    pub fn plot_site(
        &self,
        table: &DataFrame,
        image_path: &Path,
        output_path: &Path,
        options: &SitePlotOptions,
    ) -> Result<(), ChartError> {
        let has_coords = ["coord_x", "coord_y"].iter().all(|name| {
            table
                .get_column_names()
                .iter()
                .any(|column| column.as_str() == *name)
        });
        let mapped;
        let table = if has_coords {
            table
        } else {
            mapped = self.map_site(table)?;
            &mapped
        };

        let freq_col = table
            .column("frequency")
            .map_err(|_| ChartError::MissingColumn("frequency"))?
            .cast(&DataType::Float64)?;
        let freqs = freq_col.f64()?;
        let max_freq = freqs
            .max()
            .filter(|max| *max > 0.0)
            .ok_or(ChartError::DegenerateScale)?;
        let color_scale = 1.0 / max_freq;

        let background = image::open(image_path)?.to_rgb8();
        let (width, height) = background.dimensions();

        let sites = table
            .column("site")
            .map_err(|_| ChartError::MissingColumn("site"))?
            .str()?;
        let x_col = table.column("coord_x")?.cast(&DataType::Int32)?;
        let y_col = table.column("coord_y")?.cast(&DataType::Int32)?;
        let xs = x_col.i32()?;
        let ys = y_col.i32()?;

        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(ChartError::render)?;

        let backdrop: BitMapElement<(i32, i32)> =
            BitMapElement::with_owned_buffer((0, 0), (width, height), background.into_raw())
                .ok_or_else(|| ChartError::render("reference image buffer size mismatch"))?;
        root.draw(&backdrop).map_err(ChartError::render)?;

        let name_style = ("sans-serif", 40).into_font().color(&BLACK);
        let percent_style = ("sans-serif", 36).into_font().color(&BLACK);

        for row in 0..table.height() {
            let site = sites.get(row).unwrap_or("");
            let (x, y) = match (xs.get(row), ys.get(row)) {
                (Some(x), Some(y)) => (x, y),
                _ => return Err(ChartError::UnmappedSite(site.to_string())),
            };
            let frequency = freqs.get(row).unwrap_or(0.0);

            let shade = options
                .colormap
                .get_color((frequency * color_scale).clamp(0.0, 1.0));
            let radius = (frequency * options.size).abs().sqrt().round() as i32;
            root.draw(&Circle::new((x, y), radius.max(2), shade.filled()))
                .map_err(ChartError::render)?;

            // site name on a contrasting background
            let name_origin = (x + NAME_LABEL_OFFSET.0, y + NAME_LABEL_OFFSET.1);
            root.draw(&Rectangle::new(
                [
                    (name_origin.0 - 8, name_origin.1 - 6),
                    (name_origin.0 + 22 * site.len() as i32 + 8, name_origin.1 + 46),
                ],
                WHITE.mix(0.75).filled(),
            ))
            .map_err(ChartError::render)?;
            root.draw(&Text::new(site.to_string(), name_origin, name_style.clone()))
                .map_err(ChartError::render)?;

            root.draw(&Text::new(
                format!("{:.0}%", frequency * 100.0),
                (x + PERCENT_LABEL_OFFSET.0, y + PERCENT_LABEL_OFFSET.1),
                percent_style.clone(),
            ))
            .map_err(ChartError::render)?;
        }

        root.present().map_err(ChartError::render)?;
        log::debug!(
            "rendered {} site markers over {} to {}",
            table.height(),
            image_path.display(),
            output_path.display()
        );
        Ok(())
    }
}
