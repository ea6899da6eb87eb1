//! Cancer Type Bar Chart
//! Renders mutation counts grouped by cancer type.

use std::path::Path;

use plotters::prelude::*;

use super::ChartError;

const DIMENSIONS: (u32, u32) = (1500, 1000);

/// Plot mutation frequency per cancer type as a bar chart and write it as a
/// PNG to `output_path`.
///
/// One bar is drawn per entry, in slice order; callers control ordering by
/// pre-sorting `counts`. No validation is applied to the counts themselves.
pub fn plot_cancer_type_freq(
    counts: &[(String, f64)],
    gene_name: &str,
    mutation_type: &str,
    output_path: &Path,
) -> Result<(), ChartError> {
    let max_count = counts.iter().map(|(_, count)| *count).fold(0.0f64, f64::max);
    let y_top = if max_count > 0.0 { max_count * 1.1 } else { 1.0 };

    let root = BitMapBackend::new(output_path, DIMENSIONS).into_drawing_area();
    root.fill(&WHITE).map_err(ChartError::render)?;

    let labels: Vec<&str> = counts.iter().map(|(name, _)| name.as_str()).collect();
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{} {} Mutation Frequency", gene_name, mutation_type),
            ("sans-serif", 40),
        )
        .margin(15)
        .x_label_area_size(90)
        .y_label_area_size(90)
        .build_cartesian_2d((0..counts.len().max(1)).into_segmented(), 0.0..y_top)
        .map_err(ChartError::render)?;

    chart
        .configure_mesh()
        .x_desc("Types of Cancer")
        .y_desc("Frequency of mutation")
        .x_labels(counts.len().max(1))
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(idx) | SegmentValue::Exact(idx) => labels
                .get(*idx)
                .map(|name| name.to_string())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .disable_x_mesh()
        .draw()
        .map_err(ChartError::render)?;

    chart
        .draw_series(counts.iter().enumerate().map(|(idx, (_, count))| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(idx), 0.0),
                    (SegmentValue::Exact(idx + 1), *count),
                ],
                BLUE.mix(0.6).filled(),
            );
            bar.set_margin(0, 0, 10, 10);
            bar
        }))
        .map_err(ChartError::render)?;

    root.present().map_err(ChartError::render)?;
    log::debug!(
        "rendered {} cancer type bars to {}",
        counts.len(),
        output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_bars_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("cancer_types.png");
        let counts = vec![
            ("Breast".to_string(), 31.0),
            ("Lung".to_string(), 12.0),
            ("Liver".to_string(), 7.0),
        ];
        plot_cancer_type_freq(&counts, "BRCA1", "frameshift", &out).unwrap();
        assert!(out.metadata().unwrap().len() > 0);
    }

    #[test]
    fn empty_counts_still_render_an_empty_chart() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty.png");
        plot_cancer_type_freq(&[], "BRCA1", "", &out).unwrap();
        assert!(out.metadata().unwrap().len() > 0);
    }
}
