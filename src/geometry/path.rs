//! Flattening of the SVG path data used by sticker artwork.
//!
//! Sticker paths are authored in a 100x100 box. Parsing is done by kurbo; the
//! result is a list of polylines ready to be scaled and filled or stroked.

use egui::{Pos2, pos2};
use kurbo::{BezPath, PathEl, flatten};

use crate::error::{EditError, EditResult};

/// Maximum distance, in sticker units, between a curve and its polyline.
const FLATTEN_TOLERANCE: f64 = 0.25;

#[derive(Debug, Clone, PartialEq)]
pub struct Subpath {
    pub points: Vec<Pos2>,
    pub closed: bool,
}

impl Subpath {
    /// Maps each point through `f`, e.g. to scale into an element's box.
    pub fn map(&self, f: impl Fn(Pos2) -> Pos2) -> Subpath {
        Subpath {
            points: self.points.iter().copied().map(f).collect(),
            closed: self.closed,
        }
    }
}

fn to_pos(point: kurbo::Point) -> Pos2 {
    pos2(point.x as f32, point.y as f32)
}

/// Parses `data` and flattens every curve into line segments.
pub fn flatten_path(data: &str) -> EditResult<Vec<Subpath>> {
    let path = BezPath::from_svg(data)
        .map_err(|e| EditError::MalformedPayload(format!("sticker path: {e}")))?;

    let mut subpaths: Vec<Subpath> = Vec::new();
    let mut current: Vec<Pos2> = Vec::new();
    let finish = |current: &mut Vec<Pos2>, subpaths: &mut Vec<Subpath>, closed: bool| {
        let points = std::mem::take(current);
        if points.len() > 1 {
            subpaths.push(Subpath { points, closed });
        }
    };

    flatten(path.iter(), FLATTEN_TOLERANCE, |el| match el {
        PathEl::MoveTo(p) => {
            finish(&mut current, &mut subpaths, false);
            current.push(to_pos(p));
        }
        PathEl::LineTo(p) => {
            let p = to_pos(p);
            if current.last() != Some(&p) {
                current.push(p);
            }
        }
        PathEl::ClosePath => {
            // The closing segment is implied; drop a repeated start point.
            if current.len() > 1 && current.first() == current.last() {
                current.pop();
            }
            finish(&mut current, &mut subpaths, true);
        }
        // `flatten` only emits lines.
        PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
    });
    finish(&mut current, &mut subpaths, false);
    Ok(subpaths)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Pos2, b: Pos2) -> bool {
        a.distance(b) < 1e-3
    }

    #[test]
    fn test_polyline_with_close() {
        let paths = flatten_path("M 10 10 L 90 10 L 50 90 Z").unwrap();
        assert_eq!(paths.len(), 1);
        assert!(paths[0].closed);
        assert_eq!(
            paths[0].points,
            vec![pos2(10.0, 10.0), pos2(90.0, 10.0), pos2(50.0, 90.0)]
        );
    }

    #[test]
    fn test_relative_and_axis_commands() {
        let paths = flatten_path("m10,10 h20 v20 H5 l-5 -5").unwrap();
        assert_eq!(
            paths[0].points,
            vec![
                pos2(10.0, 10.0),
                pos2(30.0, 10.0),
                pos2(30.0, 30.0),
                pos2(5.0, 30.0),
                pos2(0.0, 25.0)
            ]
        );
        assert!(!paths[0].closed);
    }

    #[test]
    fn test_curves_end_on_endpoint() {
        let quad = flatten_path("M 0 0 Q 50 100 100 0").unwrap();
        assert!(close(*quad[0].points.last().unwrap(), pos2(100.0, 0.0)));
        assert!(quad[0].points.len() > 3);
        // The apex of this quadratic sits at y = 50.
        let apex = quad[0].points.iter().map(|p| p.y).fold(0.0, f32::max);
        assert!((apex - 50.0).abs() < 0.5);

        let cubic = flatten_path("M 0 0 C 0 50 100 50 100 0").unwrap();
        assert!(close(*cubic[0].points.last().unwrap(), pos2(100.0, 0.0)));
        let apex = cubic[0].points.iter().map(|p| p.y).fold(0.0, f32::max);
        assert!((apex - 37.5).abs() < 0.5);
    }

    #[test]
    fn test_semicircle_arcs_trace_a_circle() {
        let paths = flatten_path("M 50 20 A 30 30 0 1 1 50 80 A 30 30 0 1 1 50 20").unwrap();
        let center = pos2(50.0, 50.0);
        assert!(
            paths[0]
                .points
                .iter()
                .all(|p| (p.distance(center) - 30.0).abs() < 0.5)
        );
        assert!(paths[0].points.iter().any(|p| p.x > 79.0));
        assert!(paths[0].points.iter().any(|p| p.x < 21.0));
    }

    #[test]
    fn test_smooth_quadratic_mirrors_control() {
        let paths = flatten_path("M 10 50 Q 20 20 30 50 T 50 50").unwrap();
        let points = &paths[0].points;
        assert!(close(*points.last().unwrap(), pos2(50.0, 50.0)));
        // First half bulges up, the mirrored control (40, 80) pulls the second down.
        assert!(points.iter().any(|p| p.x < 30.0 && p.y < 40.0));
        assert!(points.iter().any(|p| p.x > 30.0 && p.y > 60.0));
    }

    #[test]
    fn test_multiple_subpaths() {
        let paths = flatten_path("M0 0 L10 0 Z M20 20 L30 30").unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths[0].closed);
        assert!(!paths[1].closed);
    }

    #[test]
    fn test_rejects_malformed_data() {
        assert!(matches!(
            flatten_path("M 0 0 X 1 1"),
            Err(EditError::MalformedPayload(_))
        ));
        assert!(flatten_path("M 0").is_err());
    }
}
