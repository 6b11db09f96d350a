//! Incremental polyline tessellation into a triangle strip.
//!
//! A stroke stores one `(top, bottom)` pair per path vertex; consecutive pairs
//! form the quads of the strip. "Top" is the left-hand side of the direction
//! of travel (above the path for a rightward segment in the y-up frame).
//!
//! Each `line_to` may rewrite the most recent pair to join the new segment,
//! or retract it entirely when both the previous and the new segment are
//! short. Earlier pairs are never touched.

use crate::buffer::Vec2Buffer;
use crate::cfg::StrokeCfg;
use crate::error::{Error, Result};
use crate::math::{Point, Vec2};

/// Growable triangle-strip outline of a polyline.
///
/// Invariant: `vertices().len()` is even.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stroke {
    vertices: Vec<Point>,
    cfg: StrokeCfg,
}

impl Stroke {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cfg(cfg: StrokeCfg) -> Self {
        Self {
            vertices: Vec::new(),
            cfg,
        }
    }

    #[inline]
    pub fn cfg(&self) -> &StrokeCfg {
        &self.cfg
    }

    /// Strip vertices, alternating top and bottom.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// `(top, bottom)` pairs in path order.
    pub fn pairs(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.vertices.chunks_exact(2).map(|p| (p[0], p[1]))
    }

    /// Center of the last pair: where the next segment starts.
    pub fn current_point(&self) -> Option<Point> {
        let n = self.vertices.len();
        (n >= 2).then(|| self.center_before(n))
    }

    /// Drops every vertex so the stroke can be restarted with `move_to`.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Strip vertices packed for upload.
    pub fn vertex_data(&self) -> Vec2Buffer {
        self.vertices.iter().map(|p| p.to_vec()).collect()
    }

    /// Begins the stroke at `p` with a vertical cross-section of `thickness`.
    pub fn move_to(&mut self, p: Point, thickness: f64) -> Result<()> {
        if !self.vertices.is_empty() {
            return Err(Error::AlreadyStarted(self.vertices.len()));
        }
        let half = Vec2::new(0.0, 0.5 * thickness);
        self.vertices.push(p + half);
        self.vertices.push(p - half);
        Ok(())
    }

    /// Extends the stroke with a segment to `p`.
    ///
    /// - Short runs: when the new segment and the previous one are both no
    ///   longer than `merge_ratio * thickness`, the previous pair is retracted
    ///   and the segment starts from the pair before it.
    /// - Joins: the start pair is re-placed along the miter between the
    ///   previous and the new segment (limited to `miter_limit_ratio *
    ///   thickness`), or along the new segment's normal when there is no
    ///   previous segment or it is shorter than `bevel_ratio * thickness`.
    /// - A zero-length segment keeps the previous direction, or the initial
    ///   horizontal direction when there is none.
    pub fn line_to(&mut self, p: Point, thickness: f64) -> Result<()> {
        let mut next = self.vertices.len();
        if next < 2 {
            return Err(Error::LineBeforeMove);
        }

        let half = 0.5 * thickness;
        let merge_len = self.cfg.merge_ratio * thickness;
        let mut prev_cen = self.center_before(next);
        let mut line = p - prev_cen;
        let mut prev_line = None;

        if next >= 4 {
            let prev_prev_cen = self.center_before(next - 2);
            let pl = prev_cen - prev_prev_cen;
            if line.length() <= merge_len && pl.length() <= merge_len {
                tracing::trace!(at = next / 2 - 1, "stroke: merge short segment");
                next -= 2;
                prev_cen = prev_prev_cen;
                line = p - prev_cen;
                prev_line = (next >= 4).then(|| prev_cen - self.center_before(next - 2));
            } else {
                prev_line = Some(pl);
            }
        }

        let dir = travel_direction(line, prev_line);
        let ortho = dir.rotate270().normalize() * half;
        let join = match prev_line {
            Some(pl) if pl.length() > self.cfg.bevel_ratio * thickness => {
                let limit = self.cfg.miter_limit_ratio * thickness;
                // `Vec2::miter` bisects the right-hand normals; top is on the left
                let miter = -Vec2::miter(pl, dir, half, limit);
                if miter.is_finite() {
                    miter
                } else {
                    tracing::trace!("stroke: reversal, bevel join");
                    ortho
                }
            }
            Some(_) => {
                tracing::trace!("stroke: previous segment too short, bevel join");
                ortho
            }
            None => ortho,
        };

        self.vertices.truncate(next);
        self.vertices[next - 2] = prev_cen + join;
        self.vertices[next - 1] = prev_cen - join;
        self.vertices.push(p + ortho);
        self.vertices.push(p - ortho);
        Ok(())
    }

    /// Midpoint of the pair ending just before `end`.
    fn center_before(&self, end: usize) -> Point {
        self.vertices[end - 2].midpoint(self.vertices[end - 1])
    }
}

fn travel_direction(line: Vec2, prev_line: Option<Vec2>) -> Vec2 {
    if line.length2() > 0.0 {
        return line;
    }
    match prev_line {
        Some(pl) if pl.length2() > 0.0 => pl,
        _ => Vec2::new(1.0, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: f64 = 1e-9;
    const WIDTH: f64 = 2.0;

    fn started(p: Point) -> Stroke {
        let mut s = Stroke::new();
        s.move_to(p, WIDTH).unwrap();
        s
    }

    #[test]
    fn move_to_seeds_one_pair() {
        let p0 = Point::new(1.0, 2.0);
        let s = started(p0);
        assert_eq!(s.len(), 2);
        let (top, bot) = s.pairs().next().unwrap();
        assert!(top.y > bot.y);
        assert!((top.distance(bot) - WIDTH).abs() < E);
        assert!(top.midpoint(bot).equals(p0, E));
        assert_eq!(s.current_point(), Some(p0));
    }

    #[test]
    fn move_to_twice_is_an_error() {
        let mut s = started(Point::ORIGIN);
        assert_eq!(s.move_to(Point::ORIGIN, WIDTH), Err(Error::AlreadyStarted(2)));
        s.clear();
        assert!(s.move_to(Point::ORIGIN, WIDTH).is_ok());
    }

    #[test]
    fn line_before_move_is_an_error() {
        let mut s = Stroke::new();
        assert_eq!(s.line_to(Point::ORIGIN, WIDTH), Err(Error::LineBeforeMove));
        assert!(s.is_empty());
    }

    #[test]
    fn first_segment_has_parallel_edges() {
        let mut s = started(Point::new(1.0, 2.0));
        let p1 = Point::new(5.0, 6.0);
        s.line_to(p1, WIDTH).unwrap();
        let v = s.vertices();
        assert_eq!(v.len(), 4);

        let top_to_top = v[2] - v[0];
        let bot_to_bot = v[3] - v[1];
        assert!((top_to_top.length() - bot_to_bot.length()).abs() < E);
        assert!(top_to_top.normalize().equals(bot_to_bot.normalize(), E));

        assert!((v[2].distance(v[3]) - WIDTH).abs() < E);
        assert!(v[2].midpoint(v[3]).equals(p1, E));
        // top stays on the left of travel
        assert!((p1 - Point::new(1.0, 2.0)).cross(v[2] - p1) > 0.0);
    }

    #[test]
    fn short_segments_merge() {
        let mut s = started(Point::new(1.0, 2.0));
        s.line_to(Point::new(5.0, 6.0), WIDTH).unwrap();
        assert_eq!(s.len(), 4);
        s.line_to(Point::new(6.0, 6.0), WIDTH).unwrap();
        assert_eq!(s.len(), 6);
        s.line_to(Point::new(7.0, 6.0), WIDTH).unwrap();
        assert_eq!(s.len(), 6);
        assert!(s.current_point().unwrap().equals(Point::new(7.0, 6.0), E));
        // the retracted (6, 6) pair is gone; the join sits at (5, 6)
        let (top, bot) = s.pairs().nth(1).unwrap();
        assert!(top.midpoint(bot).equals(Point::new(5.0, 6.0), E));
    }

    #[test]
    fn right_angle_uses_miter() {
        let mut s = started(Point::ORIGIN);
        s.line_to(Point::new(10.0, 0.0), WIDTH).unwrap();
        s.line_to(Point::new(10.0, 10.0), WIDTH).unwrap();
        let v = s.vertices();
        assert_eq!(v.len(), 6);
        // inner (top, left-hand) corner and outer (bottom) corner of the turn
        assert!(v[2].equals(Point::new(9.0, 1.0), E));
        assert!(v[3].equals(Point::new(11.0, -1.0), E));
        // the first pair is never rewritten after its own segment
        assert!(v[0].equals(Point::new(0.0, 1.0), E));
    }

    #[test]
    fn sharp_turn_is_limited() {
        let mut s = started(Point::ORIGIN);
        s.line_to(Point::new(10.0, 0.0), WIDTH).unwrap();
        s.line_to(Point::new(0.0, 0.5), WIDTH).unwrap();
        let (top, bot) = s.pairs().nth(1).unwrap();
        let c = Point::new(10.0, 0.0);
        assert!(top.distance(c) <= WIDTH + E);
        assert!(bot.distance(c) <= WIDTH + E);
    }

    #[test]
    fn reversal_falls_back_to_bevel() {
        let mut s = started(Point::ORIGIN);
        s.line_to(Point::new(10.0, 0.0), WIDTH).unwrap();
        s.line_to(Point::new(0.0, 0.0), WIDTH).unwrap();
        assert!(s.vertices().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn zero_length_segments_stay_finite() {
        let mut s = started(Point::new(3.0, 3.0));
        s.line_to(Point::new(3.0, 3.0), WIDTH).unwrap();
        assert!(s.vertices().iter().all(|p| p.is_finite()));
        let (top, bot) = s.pairs().last().unwrap();
        assert!(top.equals(Point::new(3.0, 4.0), E));
        assert!(bot.equals(Point::new(3.0, 2.0), E));

        s.line_to(Point::new(8.0, 3.0), WIDTH).unwrap();
        s.line_to(Point::new(8.0, 3.0), WIDTH).unwrap();
        assert!(s.vertices().iter().all(|p| p.is_finite()));
        assert_eq!(s.len() % 2, 0);
    }

    #[test]
    fn custom_cfg_disables_merging() {
        let cfg = StrokeCfg {
            merge_ratio: 0.0,
            ..StrokeCfg::default()
        };
        let mut s = Stroke::with_cfg(cfg);
        s.move_to(Point::ORIGIN, WIDTH).unwrap();
        for x in 1..=5 {
            s.line_to(Point::new(x as f64 * 0.1, 0.0), WIDTH).unwrap();
        }
        assert_eq!(s.len(), 12);
        assert_eq!(s.vertex_data().len(), 12);
    }
}
