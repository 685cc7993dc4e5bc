//! Shape identifiers
//!
//! `ShapeKind` is the closed set of shapes the calculator knows about.
//! `LayoutKind` adds the transient "loading" scatter that only the
//! particle field ever shows.

/// A shape with an area formula and an outline layout
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ShapeKind {
    Triangle,
    Rectangle,
    Circle,
    Trapezoid,
    Box,
    Cylinder,
    Cone,
}

impl ShapeKind {
    /// All shapes, in carousel order
    pub const ALL: &'static [ShapeKind] = &[
        ShapeKind::Triangle,
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Trapezoid,
        ShapeKind::Box,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
    ];

    /// Position of this shape in `ALL`
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }
}

/// What the particle field is currently laid out as
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum LayoutKind {
    /// Random scatter shown before the first real shape appears
    Loading,
    /// Outline of a real shape
    Shape(ShapeKind),
}

impl LayoutKind {
    pub fn is_loading(self) -> bool {
        matches!(self, LayoutKind::Loading)
    }
}

impl From<ShapeKind> for LayoutKind {
    fn from(kind: ShapeKind) -> Self {
        LayoutKind::Shape(kind)
    }
}
