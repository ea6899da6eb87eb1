//! Mutation Frequency Curve
//! Renders the cumulative mutation frequency along a gene as a line plot.

use std::path::Path;

use plotters::prelude::*;

use super::ChartError;

const DIMENSIONS: (u32, u32) = (1200, 800);

/// Cumulative histogram of mutation positions.
///
/// `sites` holds 1-based amino-acid positions; duplicates are recurrent
/// mutations and accumulate. The domain `[0, gene_size)` is split into
/// `gene_size` unit-width bins; a position equal to `gene_size` falls into
/// the last bin and positions beyond the gene are ignored. With `density`
/// the bin heights are normalized to integrate to 1 over the domain before
/// accumulation, so the curve ends at 1 for any non-empty input; otherwise
/// it ends at the number of observed mutations.
pub fn cumulative_histogram(sites: &[u32], gene_size: u32, density: bool) -> Vec<f64> {
    let bins = gene_size as usize;
    if bins == 0 {
        return Vec::new();
    }

    let mut counts = vec![0.0f64; bins];
    for &site in sites {
        if site < gene_size {
            counts[site as usize] += 1.0;
        } else if site == gene_size {
            // rightmost edge belongs to the last bin
            counts[bins - 1] += 1.0;
        }
    }

    if density {
        let total: f64 = counts.iter().sum();
        if total > 0.0 {
            for count in counts.iter_mut() {
                *count /= total;
            }
        }
    }

    let mut running = 0.0;
    counts
        .iter()
        .map(|count| {
            running += count;
            running
        })
        .collect()
}

/// Plot the cumulative mutation frequency of a gene and write it as a PNG
/// to `output_path`.
///
/// An empty `sites` list renders an all-zero curve; a zero `gene_size` is
/// rejected before anything is drawn.
pub fn plot_mutation_frequency(
    sites: &[u32],
    gene_size: u32,
    density: bool,
    gene_name: &str,
    mutation_type: &str,
    output_path: &Path,
) -> Result<(), ChartError> {
    if gene_size == 0 {
        return Err(ChartError::InvalidGeneSize);
    }

    let cumulative = cumulative_histogram(sites, gene_size, density);
    let y_max = cumulative.last().copied().unwrap_or(0.0);
    let y_top = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let root = BitMapBackend::new(output_path, DIMENSIONS).into_drawing_area();
    root.fill(&WHITE).map_err(ChartError::render)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{} {} Mutation Frequency", gene_name, mutation_type),
            ("sans-serif", 30),
        )
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0u32..gene_size, 0.0..y_top)
        .map_err(ChartError::render)?;

    chart
        .configure_mesh()
        .x_desc("Amino Acid Position")
        .y_desc("Cumulative frequency")
        .x_labels((gene_size / 100 + 1) as usize)
        .draw()
        .map_err(ChartError::render)?;

    // x = left edge of each bin
    chart
        .draw_series(LineSeries::new(
            cumulative
                .iter()
                .enumerate()
                .map(|(bin, &value)| (bin as u32, value)),
            BLUE.stroke_width(2),
        ))
        .map_err(ChartError::render)?;

    root.present().map_err(ChartError::render)?;
    log::debug!(
        "rendered cumulative frequency curve of {} mutations to {}",
        sites.len(),
        output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_is_non_decreasing_and_ends_at_the_mutation_count() {
        let sites = vec![5, 5, 40, 120, 700];
        let curve = cumulative_histogram(&sites, 1000, false);
        assert_eq!(curve.len(), 1000);
        assert!(curve.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*curve.last().unwrap(), sites.len() as f64);
    }

    #[test]
    fn density_curve_ends_at_one() {
        let curve = cumulative_histogram(&[10, 10, 20, 990], 1000, true);
        assert!((curve.last().unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn recurrent_sites_accumulate() {
        let curve = cumulative_histogram(&[10, 10, 20, 990], 1000, false);
        assert_eq!(curve[10], 2.0);
        assert_eq!(curve[20], 3.0);
        assert_eq!(curve[990], 4.0);
    }

    #[test]
    fn empty_input_yields_an_all_zero_curve() {
        let curve = cumulative_histogram(&[], 50, true);
        assert_eq!(curve.len(), 50);
        assert!(curve.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn positions_beyond_the_gene_are_ignored() {
        let curve = cumulative_histogram(&[10, 50, 51], 50, false);
        // 50 lands in the last bin, 51 is out of range
        assert_eq!(*curve.last().unwrap(), 2.0);
    }

    #[test]
    fn zero_gene_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("curve.png");
        let err = plot_mutation_frequency(&[1, 2], 0, true, "TP53", "missense", &out).unwrap_err();
        assert!(matches!(err, ChartError::InvalidGeneSize));
    }

    #[test]
    fn renders_curve_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("curve.png");
        plot_mutation_frequency(&[10, 10, 20, 990], 1000, false, "TP53", "missense", &out)
            .unwrap();
        assert!(out.metadata().unwrap().len() > 0);
    }
}
