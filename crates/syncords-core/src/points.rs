use crate::transform::WorldPoint;

/// One recorded click. Never mutated after creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordedPoint {
    pub world: WorldPoint,
    /// Raster pixel the click landed on, kept for drawing the marker.
    pub pixel: (i64, i64),
}

/// Append-only sequence of recorded points in click order.
#[derive(Clone, Debug, Default)]
pub struct PointLog {
    points: Vec<RecordedPoint>,
}

impl PointLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point, returning its index.
    pub fn push(&mut self, point: RecordedPoint) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordedPoint> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[RecordedPoint] {
        &self.points
    }

    /// Only reachable through the session's reload policy.
    pub(crate) fn clear(&mut self) {
        self.points.clear();
    }

    /// Serialize as `"<x>, <y>\n"` lines in click order.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.points.len() * 32);
        for p in &self.points {
            out.push_str(&format_coordinate(p.world.x));
            out.push_str(", ");
            out.push_str(&format_coordinate(p.world.y));
            out.push('\n');
        }
        out
    }
}

impl<'a> IntoIterator for &'a PointLog {
    type Item = &'a RecordedPoint;
    type IntoIter = std::slice::Iter<'a, RecordedPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Shortest round-trip decimal form that always keeps a fractional part
/// (`3.0`, `-2.25`, `-0.0`).
pub fn format_coordinate(v: f64) -> String {
    format!("{v:?}")
}
