//! Text and JSON rendering of a finished run.
//!
//! Reports only read the result; the distance and predecessor maps are never
//! modified here.

use std::fmt::{self, Debug, Display, Write};

use colored::Colorize;
use num_traits::{Float, Zero};
use serde::Serialize;

use crate::algorithm::ShortestPathResult;
use crate::graph::Vertex;

/// One target vertex in a report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry<V> {
    pub vertex: V,
    /// `None` when the vertex is unreachable
    pub distance: Option<f64>,
    /// Empty when the vertex is unreachable
    pub path: Vec<V>,
}

/// Distances and paths from one source, sorted by vertex
#[derive(Debug, Clone, Serialize)]
pub struct Report<V> {
    pub source: V,
    pub entries: Vec<ReportEntry<V>>,
}

impl<V> Report<V>
where
    V: Vertex + Ord,
{
    /// Builds a report over every vertex in the result
    pub fn from_result<W>(result: &ShortestPathResult<V, W>) -> Self
    where
        W: Float + Zero + Debug + Copy,
    {
        let mut targets: Vec<&V> = result.distances().keys().collect();
        targets.sort();
        Self::for_targets(result, targets)
    }

    /// Builds a report restricted to the given targets, in the given order
    pub fn for_targets<'a, W, I>(result: &ShortestPathResult<V, W>, targets: I) -> Self
    where
        W: Float + Zero + Debug + Copy,
        V: 'a,
        I: IntoIterator<Item = &'a V>,
    {
        let entries = targets
            .into_iter()
            .map(|target| {
                let distance = result
                    .distance(target)
                    .filter(|d| d.is_finite())
                    .and_then(|d| d.to_f64());
                ReportEntry {
                    vertex: target.clone(),
                    distance,
                    path: result.path_to(target),
                }
            })
            .collect();

        Report {
            source: result.source().clone(),
            entries,
        }
    }

    /// Number of entries with a finite distance
    pub fn reachable_count(&self) -> usize {
        self.entries.iter().filter(|e| e.distance.is_some()).count()
    }
}

impl<V> Report<V>
where
    V: Display,
{
    /// Renders the report as plain text, optionally with terminal colors
    pub fn render(&self, color: bool) -> String {
        Text { report: self, color }.to_string()
    }

    /// Writes the distance section followed by one path per entry
    pub fn write_text<O: Write>(&self, out: &mut O, color: bool) -> fmt::Result {
        let unreachable = if color {
            "unreachable".red().to_string()
        } else {
            "unreachable".to_string()
        };

        writeln!(out, "Start vertex: {}\n", self.source)?;
        writeln!(out, "Shortest distances:")?;
        for entry in &self.entries {
            match entry.distance {
                Some(d) => writeln!(out, "  {} -> {}: {}", self.source, entry.vertex, d)?,
                None => writeln!(out, "  {} -> {}: {}", self.source, entry.vertex, unreachable)?,
            }
        }

        writeln!(out, "\nPaths:")?;
        for entry in &self.entries {
            if entry.path.is_empty() {
                writeln!(out, "  {} -> {}: {}", self.source, entry.vertex, unreachable)?;
                continue;
            }
            let hops = entry
                .path
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" -> ");
            let hops = if color { hops.green().to_string() } else { hops };
            writeln!(
                out,
                "  {} -> {}: {} (dist={})",
                self.source,
                entry.vertex,
                hops,
                entry.distance.unwrap_or(f64::INFINITY)
            )?;
        }

        Ok(())
    }
}

/// Plain text, no colors
impl<V: Display> Display for Report<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f, false)
    }
}

struct Text<'a, V> {
    report: &'a Report<V>,
    color: bool,
}

impl<V: Display> Display for Text<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.report.write_text(f, self.color)
    }
}
