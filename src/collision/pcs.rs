//! Potentially collidable set
//!
//! Broad phase for one tick: the subset of the scene that could be touched
//! by a disk sweeping through an enclosing radius. Each entry caches the
//! offset and squared distance from the puck, refreshed after every
//! sub-step without re-running the broad phase.

use super::boundary::Scene;
use crate::geometry::Disk;
use crate::geometry::query::cp;
use crate::math::{Real, Vector2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEntry<T> {
    /// Index into `Scene::lines`
    pub index: usize,
    /// Parameter of the closest point on the infinite line
    pub u: T,
    /// Puck center to the closest point on the infinite line
    pub to_line: Vector2<T>,
    pub dist_sq: T,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointEntry<T> {
    /// Index into `Scene::points`
    pub index: usize,
    /// Puck center to the point
    pub to_point: Vector2<T>,
    pub dist_sq: T,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskEntry<T> {
    /// Index into `Scene::disks`
    pub index: usize,
    /// Puck center to the disk center
    pub to_disk: Vector2<T>,
    pub dist_sq: T,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollidableSet<T> {
    pub lines: Vec<LineEntry<T>>,
    pub points: Vec<PointEntry<T>>,
    pub disks: Vec<DiskEntry<T>>,
}

impl<T: Real> CollidableSet<T> {
    /// Everything in `scene` that `bounds` touches
    ///
    /// Lines are measured by their finite extent: the nearer endpoint when
    /// the perpendicular foot falls outside the segment.
    pub fn build(scene: &Scene<T>, bounds: &Disk<T>) -> Self {
        let center = bounds.center();
        let r = bounds.radius();
        let r_sq = r * r;

        let points = scene
            .points
            .iter()
            .enumerate()
            .filter_map(|(index, p)| {
                let to_point = p.origin - center;
                let dist_sq = to_point.length_squared();
                (dist_sq < r_sq).then_some(PointEntry {
                    index,
                    to_point,
                    dist_sq,
                    active: true,
                })
            })
            .collect();

        let disks = scene
            .disks
            .iter()
            .enumerate()
            .filter_map(|(index, d)| {
                let to_disk = d.center() - center;
                let dist_sq = to_disk.length_squared();
                let reach = d.radius() + r;
                (dist_sq < reach * reach).then_some(DiskEntry {
                    index,
                    to_disk,
                    dist_sq,
                    active: true,
                })
            })
            .collect();

        let lines = scene
            .lines
            .iter()
            .enumerate()
            .filter_map(|(index, l)| {
                let foot = cp::point_line(center, &l.line);
                let to_line = foot.cp - center;
                let dist_sq = to_line.length_squared();
                let extent_dist_sq = if foot.u < T::zero() {
                    l.start().distance_squared(center)
                } else if foot.u > l.length {
                    l.end().distance_squared(center)
                } else {
                    dist_sq
                };
                (extent_dist_sq < r_sq).then_some(LineEntry {
                    index,
                    u: foot.u,
                    to_line,
                    dist_sq,
                    active: true,
                })
            })
            .collect();

        Self {
            lines,
            points,
            disks,
        }
    }

    /// Recompute cached offsets for a new puck center; membership is unchanged
    pub fn refresh(&mut self, scene: &Scene<T>, center: Vector2<T>) {
        for e in &mut self.points {
            e.to_point = scene.points[e.index].origin - center;
            e.dist_sq = e.to_point.length_squared();
        }
        for e in &mut self.disks {
            e.to_disk = scene.disks[e.index].center() - center;
            e.dist_sq = e.to_disk.length_squared();
        }
        for e in &mut self.lines {
            let foot = cp::point_line(center, &scene.lines[e.index].line);
            e.u = foot.u;
            e.to_line = foot.cp - center;
            e.dist_sq = e.to_line.length_squared();
        }
    }

    pub fn set_active(&mut self, active: bool) {
        self.lines.iter_mut().for_each(|e| e.active = active);
        self.points.iter_mut().for_each(|e| e.active = active);
        self.disks.iter_mut().for_each(|e| e.active = active);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.points.is_empty() && self.disks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len() + self.points.len() + self.disks.len()
    }
}
