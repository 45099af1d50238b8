//! Scatter-plot rendering with plotters.
//!
//! The output format follows the file extension: `.svg` goes through the SVG
//! backend, anything else is rendered as a bitmap (PNG).

use crate::dataset::Dataset;
use crate::error::TestkitError;
use crate::report::ReportCluster;
use log::info;
use ndarray::ArrayView2;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// Padding added around the member points of a cluster report plot
pub const REPORT_PADDING: f64 = 50.0;

/// Padding added around raw points
pub const POINTS_PADDING: f64 = 1.0;

const FIGURE_SIZE: (u32, u32) = (1000, 600);

const CLUSTER_COLORS: [RGBColor; 7] = [RED, GREEN, BLUE, CYAN, MAGENTA, YELLOW, BLACK];

/// File name the cluster report plotter writes for a report with `n_clusters` clusters
pub fn report_plot_filename(n_clusters: usize) -> String {
    format!("kmeans_clusters_{}_clusters.png", n_clusters)
}

/// Axis ranges of a plot
#[derive(Debug, Clone, PartialEq)]
pub struct PlotBounds {
    pub x: Range<f64>,
    pub y: Range<f64>,
}

impl PlotBounds {
    /// Bounding box of `coords` grown by `padding` on every side, or `None` if empty
    pub fn around<I>(coords: I, padding: f64) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut iter = coords.into_iter();
        let (x0, y0) = iter.next()?;
        let (min_x, max_x, min_y, max_y) = iter.fold((x0, x0, y0, y0), |acc, (x, y)| {
            (acc.0.min(x), acc.1.max(x), acc.2.min(y), acc.3.max(y))
        });

        Some(Self {
            x: (min_x - padding)..(max_x + padding),
            y: (min_y - padding)..(max_y + padding),
        })
    }

    /// Box used when there is nothing to plot
    pub fn fallback(padding: f64) -> Self {
        Self {
            x: -padding..padding,
            y: -padding..padding,
        }
    }

    /// Bounds for a cluster report: member points when there are any, otherwise centers
    pub fn for_report(clusters: &[ReportCluster], padding: f64) -> Self {
        let members = clusters
            .iter()
            .flat_map(|c| c.points.iter().map(|&(x, y)| (x as f64, y as f64)));

        PlotBounds::around(members, padding)
            .or_else(|| PlotBounds::around(clusters.iter().map(|c| c.center), padding))
            .unwrap_or_else(|| PlotBounds::fallback(padding))
    }
}

fn plot_err<E: std::fmt::Display>(err: E) -> TestkitError {
    TestkitError::Plot(err.to_string())
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

fn draw_report<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    clusters: &[ReportCluster],
) -> Result<(), TestkitError> {
    root.fill(&WHITE).map_err(plot_err)?;
    let bounds = PlotBounds::for_report(clusters, REPORT_PADDING);

    let mut chart = ChartBuilder::on(&root)
        .caption("K-Means Clusters and Points", ("sans-serif", 22))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(bounds.x, bounds.y)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("X Coordinate")
        .y_desc("Y Coordinate")
        .draw()
        .map_err(plot_err)?;

    for (idx, cluster) in clusters.iter().enumerate() {
        let color = CLUSTER_COLORS[idx % CLUSTER_COLORS.len()];

        chart
            .draw_series(std::iter::once(Cross::new(cluster.center, 8, color.stroke_width(3))))
            .map_err(plot_err)?
            .label(format!("Cluster {} Center", idx))
            .legend(move |(x, y)| Cross::new((x, y), 5, color.stroke_width(2)));

        if cluster.points.is_empty() {
            continue;
        }
        chart
            .draw_series(
                cluster
                    .points
                    .iter()
                    .map(|&(x, y)| Circle::new((x as f64, y as f64), 3, color.filled())),
            )
            .map_err(plot_err)?
            .label(format!("Cluster {} Points", idx))
            .legend(move |(x, y)| Circle::new((x, y), 3, color.filled()));
    }

    if !clusters.is_empty() {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(plot_err)?;
    }

    root.present().map_err(plot_err)
}

fn draw_points<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    points: &ArrayView2<i64>,
) -> Result<(), TestkitError> {
    root.fill(&WHITE).map_err(plot_err)?;
    let coords = move || points.outer_iter().map(|row| (row[0] as f64, row[1] as f64));
    let bounds = PlotBounds::around(coords(), POINTS_PADDING)
        .unwrap_or_else(|| PlotBounds::fallback(POINTS_PADDING));

    let mut chart = ChartBuilder::on(&root)
        .caption("Points Plot", ("sans-serif", 22))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(bounds.x, bounds.y)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("X Coordinate")
        .y_desc("Y Coordinate")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(coords().map(|c| Circle::new(c, 3, BLUE.filled())))
        .map_err(plot_err)?;

    root.present().map_err(plot_err)
}

fn draw_dataset<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    dataset: &Dataset,
    title: &str,
) -> Result<(), TestkitError> {
    root.fill(&WHITE).map_err(plot_err)?;
    let bounds = PlotBounds::around(
        dataset.iter().map(|(x, y, _)| (x as f64, y as f64)),
        POINTS_PADDING,
    )
    .unwrap_or_else(|| PlotBounds::fallback(POINTS_PADDING));

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 22))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(bounds.x, bounds.y)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("X")
        .y_desc("Y")
        .draw()
        .map_err(plot_err)?;

    for label in 0..dataset.n_clusters() {
        let color = Palette99::pick(label).to_rgba();
        chart
            .draw_series(
                dataset
                    .iter()
                    .filter(|&(_, _, l)| l == label)
                    .map(|(x, y, _)| Circle::new((x as f64, y as f64), 3, color.filled())),
            )
            .map_err(plot_err)?
            .label(format!("Cluster {}", label))
            .legend(move |(x, y)| Circle::new((x, y), 3, color.filled()));
    }

    if !dataset.is_empty() {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(plot_err)?;
    }

    root.present().map_err(plot_err)
}

/// Render a parsed cluster report: one color per cluster, centers as crosses
pub fn plot_report(path: impl AsRef<Path>, clusters: &[ReportCluster]) -> Result<(), TestkitError> {
    let path = path.as_ref();
    if is_svg(path) {
        draw_report(SVGBackend::new(path, FIGURE_SIZE).into_drawing_area(), clusters)?;
    } else {
        draw_report(BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area(), clusters)?;
    }
    info!("Plot saved as {}", path.display());
    Ok(())
}

/// Render unlabeled points from a points file
pub fn plot_points(path: impl AsRef<Path>, points: &ArrayView2<i64>) -> Result<(), TestkitError> {
    let path = path.as_ref();
    if is_svg(path) {
        draw_points(SVGBackend::new(path, FIGURE_SIZE).into_drawing_area(), points)?;
    } else {
        draw_points(BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area(), points)?;
    }
    info!("Plot saved as {}", path.display());
    Ok(())
}

/// Render a generated dataset colored by cluster label
pub fn plot_dataset(
    path: impl AsRef<Path>,
    dataset: &Dataset,
    title: &str,
) -> Result<(), TestkitError> {
    let path = path.as_ref();
    if is_svg(path) {
        draw_dataset(SVGBackend::new(path, FIGURE_SIZE).into_drawing_area(), dataset, title)?;
    } else {
        draw_dataset(BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area(), dataset, title)?;
    }
    info!("Plot saved as {}", path.display());
    Ok(())
}
