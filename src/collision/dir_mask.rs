//! Direction mask: the set of headings blocked by current contacts
//!
//! Every contact the puck is pressed against contributes the unit direction
//! from the puck toward it. The mask accumulates these directions and
//! answers whether a heading is blocked. The blocked set only ever grows,
//! moving through these states:
//!
//! ```text
//! Empty -> Single -> Arc ----------------> Saturated
//!            |        ^                      ^
//!            v        |                      |
//!          Antipodal -+-----> Reflex --------+
//! ```
//!
//! Directions must be unit length. This is not checked; other input
//! produces meaningless arcs.

use crate::math::{Real, Vector2, vec2};

/// Tolerance on the arc test, so headings on an arc edge count as blocked
const ARC_EPSILON: f64 = 1.0e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaskState<T> {
    /// Nothing blocked
    Empty,
    /// Exactly one direction blocked (exact equality)
    Single(Vector2<T>),
    /// Every direction from `left` clockwise to `right`, at most a half turn
    Arc {
        left: Vector2<T>,
        right: Vector2<T>,
        /// Unit bisector of the arc
        bisector: Vector2<T>,
        /// `left · bisector`, the cosine of the arc's half width
        proj: T,
    },
    /// A direction and its opposite (exact equality)
    Antipodal(Vector2<T>),
    /// The closed half plane clockwise of `d`, i.e. `d.perp_dot(v) >= 0`
    Reflex(Vector2<T>),
    /// Every direction blocked
    Saturated,
}

impl<T: Real> MaskState<T> {
    fn arc(left: Vector2<T>, right: Vector2<T>) -> Self {
        let (bisector, proj) = if left == -right {
            (vec2(left.y(), -left.x()), T::zero())
        } else {
            let bisector = (left + right).normalize();
            (bisector, left.dot(bisector))
        };
        MaskState::Arc {
            left,
            right,
            bisector,
            proj,
        }
    }

    /// State after blocking `dir`
    pub fn added(self, dir: Vector2<T>) -> Self {
        match self {
            MaskState::Empty => MaskState::Single(dir),

            MaskState::Single(d) => {
                if dir == d {
                    self
                } else if dir == -d {
                    MaskState::Antipodal(d)
                } else if d.perp_dot(dir) < T::zero() {
                    Self::arc(d, dir)
                } else {
                    Self::arc(dir, d)
                }
            }

            MaskState::Arc { left, right, .. } => {
                let lp = left.perp_dot(dir);
                let rp = right.perp_dot(dir);
                if lp > T::zero() {
                    if rp >= T::zero() {
                        Self::arc(dir, right)
                    } else {
                        MaskState::Saturated
                    }
                } else if rp < T::zero() {
                    // lp <= 0 here
                    Self::arc(left, dir)
                } else {
                    self
                }
            }

            MaskState::Antipodal(d) => {
                if dir == d || dir == -d {
                    self
                } else if d.perp_dot(dir) > T::zero() {
                    MaskState::Reflex(d)
                } else {
                    Self::arc(d, -d)
                }
            }

            MaskState::Reflex(d) => {
                if d.perp_dot(dir) >= T::zero() {
                    self
                } else {
                    MaskState::Saturated
                }
            }

            MaskState::Saturated => MaskState::Saturated,
        }
    }

    /// Is heading `dir` blocked?
    ///
    /// Arc membership has a small tolerance, so a heading just outside an
    /// arc edge reports blocked even though adding it still widens the arc.
    pub fn contains(&self, dir: Vector2<T>) -> bool {
        match *self {
            MaskState::Empty => false,
            MaskState::Single(d) => dir == d,
            MaskState::Arc { bisector, proj, .. } => {
                bisector.dot(dir) > proj - T::lit(ARC_EPSILON)
            }
            MaskState::Antipodal(d) => dir == d || dir == -d,
            MaskState::Reflex(d) => d.perp_dot(dir) >= T::zero(),
            MaskState::Saturated => true,
        }
    }
}

/// Accumulated blocked directions for one collision sub-step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirMask<T> {
    state: MaskState<T>,
}

impl<T: Real> Default for DirMask<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Real> DirMask<T> {
    pub fn new() -> Self {
        Self {
            state: MaskState::Empty,
        }
    }

    /// Block the unit direction `dir`
    pub fn add(&mut self, dir: Vector2<T>) {
        self.state = self.state.added(dir);
    }

    /// Is the unit direction `dir` blocked? See [`MaskState::contains`].
    pub fn in_mask(&self, dir: Vector2<T>) -> bool {
        self.state.contains(dir)
    }

    pub fn reset(&mut self) {
        self.state = MaskState::Empty;
    }

    pub fn state(&self) -> &MaskState<T> {
        &self.state
    }

    pub fn is_saturated(&self) -> bool {
        self.state == MaskState::Saturated
    }
}
