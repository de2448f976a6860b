// ── Point sinks ──
//
// Builders hand every point to a caller-supplied `Sink` as soon as it is
// built. They hold no buffer of their own.

use std::collections::BTreeMap;

use tracing::trace;

use crate::point::Point;

/// Receiver for emitted points, called once per point in emission order.
pub trait Sink {
    fn send(&mut self, point: Point);
}

impl Sink for Vec<Point> {
    fn send(&mut self, point: Point) {
        self.push(point);
    }
}

/// Collecting sink that also tallies points per table.
#[derive(Debug, Default)]
pub struct Report {
    points: Vec<Point>,
    counts: BTreeMap<String, usize>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points in the order they were sent.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Number of points sent per table, ordered by table name.
    pub fn counts(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Sink for Report {
    fn send(&mut self, point: Point) {
        trace!(table = %point.table, fields = point.fields.len(), "point");
        *self.counts.entry(point.table.clone()).or_default() += 1;
        self.points.push(point);
    }
}
