use std::fmt;

use serde::{Deserialize, Serialize};

use crate::universe::Universe;

/// Shape of a membership function.
///
/// Point evaluation follows the conventions of the classic fuzzy toolkits:
/// a triangle is exactly 1.0 at its apex and strictly 0.0 at (and beyond)
/// its feet; a trapezoid is 1.0 across its plateau. Degenerate edges
/// (`a == b`, `c == d`) produce a vertical shoulder instead of a ramp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MembershipShape {
    /// Left foot `a`, apex `b`, right foot `c`
    Triangular { a: f64, b: f64, c: f64 },
    /// Left foot `a`, plateau `b..=c`, right foot `d`
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
    /// Point-wise maximum of two shapes
    Union {
        left: Box<MembershipShape>,
        right: Box<MembershipShape>,
    },
}

impl MembershipShape {
    pub fn triangular(a: f64, b: f64, c: f64) -> Self {
        Self::Triangular { a, b, c }
    }

    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::Trapezoidal { a, b, c, d }
    }

    /// Combine two shapes by point-wise maximum.
    pub fn union(self, other: MembershipShape) -> Self {
        Self::Union {
            left: Box::new(self),
            right: Box::new(other),
        }
    }

    /// Membership degree at `x`.
    pub fn degree_at(&self, x: f64) -> f64 {
        match self {
            Self::Triangular { a, b, c } => triangle(x, *a, *b, *c),
            Self::Trapezoidal { a, b, c, d } => trapezoid(x, *a, *b, *c, *d),
            Self::Union { left, right } => left.degree_at(x).max(right.degree_at(x)),
        }
    }

    /// Evaluate the shape at every point of `universe`.
    pub fn sample(&self, universe: &Universe) -> Vec<f64> {
        universe.points().iter().map(|&x| self.degree_at(x)).collect()
    }

    /// Points where the shape reaches full membership in its definition
    /// (the apex of a triangle, the plateau edges of a trapezoid).
    pub fn cores(&self) -> Vec<f64> {
        match self {
            Self::Triangular { b, .. } => vec![*b],
            Self::Trapezoidal { b, c, .. } => vec![*b, *c],
            Self::Union { left, right } => {
                let mut cores = left.cores();
                cores.extend(right.cores());
                cores
            }
        }
    }
}

fn triangle(x: f64, a: f64, b: f64, c: f64) -> f64 {
    if x == b {
        return 1.0;
    }
    if a != b && a < x && x < b {
        return (x - a) / (b - a);
    }
    if b != c && b < x && x < c {
        return (c - x) / (c - b);
    }
    0.0
}

fn trapezoid(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    if x < a || x > d {
        return 0.0;
    }
    // The right shoulder wins where the plateau has zero width.
    if x >= c {
        return triangle(x, c, c, d);
    }
    if x <= b {
        return triangle(x, a, b, b);
    }
    1.0
}

impl fmt::Display for MembershipShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Triangular { a, b, c } => write!(f, "tri({}, {}, {})", a, b, c),
            Self::Trapezoidal { a, b, c, d } => write!(f, "trap({}, {}, {}, {})", a, b, c, d),
            Self::Union { left, right } => write!(f, "{} ∪ {}", left, right),
        }
    }
}
