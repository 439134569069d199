//! Static collision geometry
//!
//! A scene is made of finite boundary lines, convex corner points and
//! fixed disks. Everything here is read-only while the puck is stepped.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::arena;
use crate::geometry::{Disk, Line};
use crate::math::{Real, Vector2, vec2};

/// Wall segment: `line.origin()` to `line.point_at(length)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Real")]
pub struct BoundaryLine<T> {
    pub line: Line<T, 2>,
    pub length: T,
}

impl<T: Real> BoundaryLine<T> {
    pub fn new(origin: Vector2<T>, direction: Vector2<T>, length: T) -> Self {
        Self {
            line: Line::new(origin, direction),
            length,
        }
    }

    pub fn start(&self) -> Vector2<T> {
        self.line.origin()
    }

    pub fn end(&self) -> Vector2<T> {
        self.line.point_at(self.length)
    }
}

/// Convex corner where two walls meet
///
/// The puck can only touch the corner itself from inside the wedge between
/// the two arms; everywhere else one of the walls is closer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Real")]
pub struct BoundaryPoint<T> {
    pub origin: Vector2<T>,
    /// Unit direction bounding the wedge on the left
    pub left_arm: Vector2<T>,
    /// Unit direction bounding the wedge on the right
    pub right_arm: Vector2<T>,
}

impl<T: Real> BoundaryPoint<T> {
    pub fn new(origin: Vector2<T>, left_arm: Vector2<T>, right_arm: Vector2<T>) -> Self {
        Self {
            origin,
            left_arm,
            right_arm,
        }
    }

    /// Is `p` strictly inside the wedge (clockwise of the left arm,
    /// counter-clockwise of the right arm)?
    pub fn is_in_arc(&self, p: Vector2<T>) -> bool {
        let v = p - self.origin;
        self.left_arm.perp_dot(v) < T::zero() && self.right_arm.perp_dot(v) > T::zero()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound = "T: Real")]
pub struct Scene<T> {
    #[serde(default)]
    pub lines: Vec<BoundaryLine<T>>,
    #[serde(default)]
    pub points: Vec<BoundaryPoint<T>>,
    #[serde(default)]
    pub disks: Vec<Disk<T>>,
}

impl<T: Real> Scene<T> {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.points.is_empty() && self.disks.is_empty()
    }

    /// Square arena with a plus-shaped block in the middle and one disk
    ///
    /// Each of the cross's eight convex corners is also a boundary point.
    pub fn cross_arena() -> Self {
        let lit = T::lit;
        let margin = lit(arena::MARGIN);
        let dim = lit(arena::SIZE);
        let inner = dim - T::two() * margin;
        let c = lit(arena::CROSS_HALF_WIDTH);
        let center = vec2(lit(arena::CROSS_CENTER[0]), lit(arena::CROSS_CENTER[1]));
        let four = lit(4.0);
        let (long, short) = (lit(3.0) * c, T::two() * c);

        let x = Vector2::<T>::x_axis();
        let y = Vector2::<T>::y_axis();
        let at = |dx: T, dy: T| center + vec2(dx, dy);

        let lines = vec![
            // outer square
            BoundaryLine::new(vec2(margin, margin), x, inner),
            BoundaryLine::new(vec2(dim - margin, margin), y, inner),
            BoundaryLine::new(vec2(dim - margin, dim - margin), -x, inner),
            BoundaryLine::new(vec2(margin, dim - margin), -y, inner),
            // upper arm
            BoundaryLine::new(at(c, c), y, long),
            BoundaryLine::new(at(c, four * c), -x, short),
            BoundaryLine::new(at(-c, four * c), -y, long),
            // left arm
            BoundaryLine::new(at(-c, c), -x, long),
            BoundaryLine::new(at(-four * c, c), -y, short),
            BoundaryLine::new(at(-four * c, -c), x, long),
            // bottom arm
            BoundaryLine::new(at(-c, -c), -y, long),
            BoundaryLine::new(at(-c, -four * c), x, short),
            BoundaryLine::new(at(c, -four * c), y, long),
            // right arm
            BoundaryLine::new(at(c, -c), x, long),
            BoundaryLine::new(at(four * c, -c), y, short),
            BoundaryLine::new(at(four * c, c), -x, long),
        ];

        let points = vec![
            BoundaryPoint::new(at(c, four * c), y, x),
            BoundaryPoint::new(at(-c, four * c), -x, y),
            BoundaryPoint::new(at(-four * c, c), -x, y),
            BoundaryPoint::new(at(-four * c, -c), -y, -x),
            BoundaryPoint::new(at(-c, -four * c), -y, -x),
            BoundaryPoint::new(at(c, -four * c), x, -y),
            BoundaryPoint::new(at(four * c, -c), x, -y),
            BoundaryPoint::new(at(four * c, c), y, x),
        ];

        let disks = vec![Disk::new(
            vec2(lit(arena::DISK_CENTER[0]), lit(arena::DISK_CENTER[1])),
            lit(arena::DISK_RADIUS),
        )];

        log::debug!(
            "Built cross arena: {} lines, {} points, {} disks",
            lines.len(),
            points.len(),
            disks.len()
        );

        Self {
            lines,
            points,
            disks,
        }
    }

    /// Add `count` extra disks at seeded random spots in the arena's open space
    ///
    /// Candidates overlapping the cross, an existing disk or the spawn corner
    /// are rejected; placement gives up after a bounded number of attempts,
    /// so fewer than `count` disks may be added in a crowded scene.
    pub fn scatter_disks(&mut self, seed: u64, count: usize) -> usize {
        let mut rng = Pcg32::seed_from_u64(seed);
        let lo = arena::MARGIN;
        let hi = arena::SIZE - arena::MARGIN;
        let cross_reach = 4.0 * arena::CROSS_HALF_WIDTH;
        let max_attempts = count * 50;

        let mut added = 0;
        let mut attempts = 0;
        while added < count && attempts < max_attempts {
            attempts += 1;
            let radius = rng.random_range(0.15..0.4);
            let cx = rng.random_range(lo + radius..hi - radius);
            let cy = rng.random_range(lo + radius..hi - radius);

            let dx = (cx - arena::CROSS_CENTER[0]).abs();
            let dy = (cy - arena::CROSS_CENTER[1]).abs();
            let hits_cross = dx < cross_reach + radius && dy < cross_reach + radius;
            let near_spawn = cx < lo + arena::SPAWN_CLEARANCE && cy < lo + arena::SPAWN_CLEARANCE;
            let candidate = Disk::new(vec2(T::lit(cx), T::lit(cy)), T::lit(radius));
            let hits_disk = self.disks.iter().any(|d| {
                let r = d.radius() + candidate.radius();
                d.center().distance_squared(candidate.center()) < r * r
            });

            if hits_cross || near_spawn || hits_disk {
                continue;
            }
            self.disks.push(candidate);
            added += 1;
        }

        if added < count {
            log::warn!("Placed {added} of {count} scattered disks after {attempts} attempts");
        }
        added
    }
}
