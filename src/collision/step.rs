//! Sliding collision step
//!
//! Moves a disk through a static scene for one tick. Contacts the puck is
//! already pressed against redirect it along their tangent; if the
//! accumulated contact directions block the requested heading the puck
//! stops. Otherwise it advances to the next time of impact and repeats,
//! up to a fixed number of iterations.

use serde::{Deserialize, Serialize};

use super::boundary::Scene;
use super::dir_mask::DirMask;
use super::pcs::CollidableSet;
use crate::consts;
use crate::geometry::Disk;
use crate::geometry::query::{cp, fpc};
use crate::math::{Real, Vector2, is_zero};

/// The player's disk, heading and signed speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Real")]
pub struct Puck<T> {
    pub disk: Disk<T>,
    /// Heading in radians from the x-axis
    pub angle: T,
    /// Distance per second along the heading; negative moves backwards
    pub speed: T,
}

impl<T: Real> Puck<T> {
    pub fn new(center: Vector2<T>, radius: T, angle: T) -> Self {
        Self {
            disk: Disk::new(center, radius),
            angle,
            speed: T::zero(),
        }
    }

    pub fn heading(&self) -> Vector2<T> {
        Vector2::from_angle(self.angle)
    }
}

/// Tolerances and limits for [`move_puck`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, bound = "T: Real")]
pub struct StepConfig<T> {
    /// Slack on squared distance when deciding the puck touches something
    pub epsilon_intersects: T,
    /// Speeds below this after sliding along a wall become zero
    pub epsilon_speed: T,
    /// Radius padding for the broad phase and contact tests
    pub epsilon_radius: T,
    /// Remaining time below this ends the tick
    pub epsilon_time: T,
    /// Contact/advance rounds per tick; at least 2 for sliding to work
    pub max_iterations: u32,
}

impl<T: Real> Default for StepConfig<T> {
    fn default() -> Self {
        Self {
            epsilon_intersects: T::lit(consts::EPSILON_INTERSECTS),
            epsilon_speed: T::lit(consts::EPSILON_SPEED),
            epsilon_radius: T::lit(consts::EPSILON_RADIUS),
            epsilon_time: T::lit(consts::EPSILON_TIME),
            max_iterations: consts::MAX_STEP_ITERATIONS,
        }
    }
}

/// Puck state while a tick is being resolved: unit heading, non-negative speed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingPuck<T> {
    pub disk: Disk<T>,
    pub heading: Vector2<T>,
    pub speed: T,
}

impl<T: Real> MovingPuck<T> {
    pub fn from_puck(puck: &Puck<T>) -> Self {
        let heading = puck.heading();
        if puck.speed < T::zero() {
            Self {
                disk: puck.disk,
                heading: -heading,
                speed: -puck.speed,
            }
        } else {
            Self {
                disk: puck.disk,
                heading,
                speed: puck.speed,
            }
        }
    }

    pub fn velocity(&self) -> Vector2<T> {
        self.heading * self.speed
    }

    pub fn is_stopped(&self) -> bool {
        self.speed == T::zero()
    }

    fn stop(&mut self) {
        log::debug!("Puck blocked at {:?}", self.disk.center());
        self.speed = T::zero();
    }

    /// Deflect around a round contact in direction `normal`
    fn slide_around(&mut self, normal: Vector2<T>) {
        if self.heading.dot(normal) <= T::zero() {
            return;
        }
        let ratio = normal.perp_dot(self.heading);
        self.speed = self.speed * ratio.abs();
        let tangent = normal.perpendicular();
        self.heading = if ratio > T::zero() { tangent } else { -tangent };
    }
}

/// Unit contact direction; a degenerate contact points along x and blocks nothing
fn contact_normal<T: Real>(to_contact: Vector2<T>, mask: &mut DirMask<T>) -> Vector2<T> {
    match to_contact.try_normalize() {
        Some(n) => {
            mask.add(n);
            n
        }
        None => Vector2::x_axis(),
    }
}

/// Resolve contacts the puck is currently touching
///
/// Touching entries are deactivated. Uses the puck's current radius, which
/// [`move_puck`] pads by `epsilon_radius` for this test. Leaves the puck
/// stopped when the contacts block its heading at entry.
pub fn find_intersections<T: Real>(
    scene: &Scene<T>,
    puck: &mut MovingPuck<T>,
    set: &mut CollidableSet<T>,
    config: &StepConfig<T>,
) {
    let radius = puck.disk.radius();
    let radius_sq = radius * radius;
    let center = puck.disk.center();
    let original = puck.heading;
    let mut mask = DirMask::new();

    for e in &mut set.points {
        let touching = e.dist_sq - radius_sq < config.epsilon_intersects
            && scene.points[e.index].is_in_arc(center);
        if !touching {
            continue;
        }
        e.active = false;
        let normal = contact_normal(e.to_point, &mut mask);
        if mask.in_mask(original) {
            puck.stop();
            return;
        }
        puck.slide_around(normal);
    }

    for e in &mut set.disks {
        let reach = scene.disks[e.index].radius() + radius;
        if e.dist_sq - reach * reach >= config.epsilon_intersects {
            continue;
        }
        e.active = false;
        let normal = contact_normal(e.to_disk, &mut mask);
        if mask.in_mask(original) {
            puck.stop();
            return;
        }
        puck.slide_around(normal);
    }

    for e in &mut set.lines {
        let wall = &scene.lines[e.index];
        let touching = e.u > T::zero()
            && e.u < wall.length
            && e.dist_sq - radius_sq < config.epsilon_intersects;
        if !touching {
            continue;
        }
        e.active = false;
        let normal = contact_normal(e.to_line, &mut mask);
        if mask.in_mask(original) {
            puck.stop();
            return;
        }
        if puck.heading.dot(normal) < T::zero() {
            continue;
        }
        let along = wall.line.direction();
        let ratio = along.dot(puck.heading);
        puck.speed = puck.speed * ratio.abs();
        if puck.speed < config.epsilon_speed {
            puck.stop();
            return;
        }
        puck.heading = if ratio > T::zero() { along } else { -along };
    }
}

/// Advance to the earliest impact with an active entry within `dt`
///
/// Returns the time left over; zero when nothing is hit.
pub fn step_to_next_intersection<T: Real>(
    scene: &Scene<T>,
    puck: &mut MovingPuck<T>,
    dt: T,
    set: &CollidableSet<T>,
) -> T {
    let velocity = puck.velocity();
    let center = puck.disk.center();
    let still = Vector2::zero();
    let in_window = |t: T| t >= T::zero() && t <= dt;

    let line_hits = set.lines.iter().filter(|e| e.active).filter_map(|e| {
        let wall = &scene.lines[e.index];
        let t = fpc::hypersphere_line(&puck.disk, velocity, &wall.line, still)
            .filter(|&t| in_window(t))?;
        let u = cp::point_line(center + velocity * t, &wall.line).u;
        (u >= T::zero() && u <= wall.length).then_some(t)
    });

    let point_hits = set.points.iter().filter(|e| e.active).filter_map(|e| {
        let corner = &scene.points[e.index];
        if !corner.is_in_arc(center) {
            return None;
        }
        fpc::point_hypersphere(&puck.disk, velocity, corner.origin, still).filter(|&t| in_window(t))
    });

    let disk_hits = set.disks.iter().filter(|e| e.active).filter_map(|e| {
        fpc::hypersphere_hypersphere(&puck.disk, velocity, &scene.disks[e.index], still)
            .filter(|&t| in_window(t))
    });

    let closest = line_hits
        .chain(point_hits)
        .chain(disk_hits)
        .fold(dt, |a, b| a.min(b));

    puck.disk.set_center(center + velocity * closest);
    dt - closest
}

/// Where `puck` ends up after moving for `dt` through `scene`
pub fn move_puck<T: Real>(
    scene: &Scene<T>,
    puck: &Puck<T>,
    dt: T,
    config: &StepConfig<T>,
) -> Vector2<T> {
    if is_zero(puck.speed) {
        return puck.disk.center();
    }

    let mut mover = MovingPuck::from_puck(puck);
    let radius = puck.disk.radius();
    let reach = radius + mover.speed * dt + config.epsilon_radius;
    let mut set = CollidableSet::build(scene, &Disk::new(puck.disk.center(), reach));

    if set.is_empty() {
        return mover.disk.center() + mover.velocity() * dt;
    }

    let padded = radius + config.epsilon_radius;
    let rounds = config.max_iterations.max(1);
    let mut remaining = dt;
    for round in 1..=rounds {
        mover.disk.set_radius(padded);
        find_intersections(scene, &mut mover, &mut set, config);
        if mover.is_stopped() {
            break;
        }

        mover.disk.set_radius(radius);
        remaining = step_to_next_intersection(scene, &mut mover, remaining, &set);
        if remaining < config.epsilon_time {
            break;
        }
        if round == rounds {
            log::debug!("Step hit the iteration cap with {remaining} of {dt} left");
            break;
        }

        set.refresh(scene, mover.disk.center());
        set.set_active(true);
    }
    mover.disk.center()
}
