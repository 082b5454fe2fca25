use crate::errors::HarnessErrors;
use clap::ValueEnum;
use coordinate_systems::{
    distance::{
        DistanceKind, distance_cartesian_2d, distance_cartesian_3d, distance_polar,
        distance_spherical_arc, distance_spherical_direct,
    },
    generator::PointGenerator,
    polar::Polar,
    spherical::Spherical,
};
use rand::Rng;
use ron::ser::{PrettyConfig, to_string_pretty};
use serde::{Deserialize, Serialize};
use std::{hint::black_box, io::Write, time::Instant};
use tracing::info;

/// Wall-clock timing of one pass over all consecutive point pairs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassTiming {
    pub kind: DistanceKind,
    pub pairs: usize,
    pub elapsed_ms: f64,
    /// Sum of every distance computed in the pass.
    pub checksum: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub samples: usize,
    pub passes: Vec<PassTiming>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Ron,
}

/// Generates `samples` polar and `samples` spherical points, then times each
/// metric in `DistanceKind::ALL` order.
pub fn run_benchmark<R: Rng>(generator: &mut PointGenerator<R>, samples: usize) -> BenchmarkReport {
    let planar = generator.polar_points(samples);
    let spatial = generator.spherical_points(samples);

    let passes = DistanceKind::ALL
        .iter()
        .map(|&kind| {
            let timing = time_pass(kind, &planar, &spatial);
            info!(
                kind = %timing.kind,
                pairs = timing.pairs,
                elapsed_ms = timing.elapsed_ms,
                "benchmark pass complete"
            );
            timing
        })
        .collect();

    BenchmarkReport { samples, passes }
}

pub fn time_pass(kind: DistanceKind, planar: &[Polar], spatial: &[Spherical]) -> PassTiming {
    let start = Instant::now();
    let (pairs, checksum) = measure(kind, planar, spatial);
    let elapsed = start.elapsed();
    PassTiming {
        kind,
        pairs,
        elapsed_ms: elapsed.as_secs_f64() * 1e3,
        checksum,
    }
}

/// Computes `kind` over every consecutive pair, returning the pair count and
/// the sum of distances. Polar points feed the 2D metrics, spherical points
/// the 3D ones.
pub fn measure(kind: DistanceKind, planar: &[Polar], spatial: &[Spherical]) -> (usize, f64) {
    match kind {
        DistanceKind::Cartesian2D => sum_pairs(planar, |a, b| {
            distance_cartesian_2d(&a.to_cartesian(), &b.to_cartesian())
        }),
        DistanceKind::Cartesian3D => sum_pairs(spatial, |a, b| {
            distance_cartesian_3d(&a.to_cartesian(), &b.to_cartesian())
        }),
        DistanceKind::Polar => sum_pairs(planar, distance_polar),
        DistanceKind::SphericalDirect => sum_pairs(spatial, distance_spherical_direct),
        DistanceKind::SphericalArc => sum_pairs(spatial, distance_spherical_arc),
    }
}

fn sum_pairs<T>(points: &[T], metric: impl Fn(&T, &T) -> f64) -> (usize, f64) {
    points.windows(2).fold((0, 0.0), |(pairs, sum), pair| {
        let d = black_box(metric(black_box(&pair[0]), black_box(&pair[1])));
        (pairs + 1, sum + d)
    })
}

/// Writes the report in the menu's text layout: one numbered line per pass,
/// times in milliseconds to two decimals.
pub fn render_text<W: Write>(report: &BenchmarkReport, w: &mut W) -> Result<(), HarnessErrors> {
    writeln!(w, "\nResults for {} points:", report.samples)?;
    for (i, pass) in report.passes.iter().enumerate() {
        writeln!(w, "{}. {}: {:.2} ms", i + 1, pass.kind, pass.elapsed_ms)?;
    }
    Ok(())
}

pub fn write_report<W: Write>(
    report: &BenchmarkReport,
    format: ReportFormat,
    w: &mut W,
) -> Result<(), HarnessErrors> {
    match format {
        ReportFormat::Text => render_text(report, w)?,
        ReportFormat::Ron => {
            let s = to_string_pretty(report, PrettyConfig::default())?;
            writeln!(w, "{s}")?;
        }
    }
    w.flush()?;
    Ok(())
}
