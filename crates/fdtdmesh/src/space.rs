//! Planes, global axes and plane-local view axes.
//!
//! Every board lives on one of three orthogonal planes and reasons in local
//! `(x, y)` coordinates. A horizontal edge (`ViewAxis::H`) sits at a constant
//! local `y`; a vertical edge (`ViewAxis::V`) at a constant local `x`. The
//! transpose table maps those local lines back onto the global axis that
//! receives the meshlines.

use std::ops::{Index, IndexMut};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Plane {
    YZ,
    ZX,
    XY,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Plane-local meshline direction.
///
/// `H` policies hold a local `y` coordinate, `V` policies a local `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewAxis {
    H,
    V,
}

impl Plane {
    pub const ALL: [Plane; 3] = [Plane::YZ, Plane::ZX, Plane::XY];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl ViewAxis {
    pub const ALL: [ViewAxis; 2] = [ViewAxis::H, ViewAxis::V];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Global axis carrying the lines of a plane-local view axis.
pub fn transpose(plane: Plane, axis: ViewAxis) -> Axis {
    match (plane, axis) {
        (Plane::YZ, ViewAxis::H) => Axis::Z,
        (Plane::YZ, ViewAxis::V) => Axis::Y,
        (Plane::ZX, ViewAxis::H) => Axis::X,
        (Plane::ZX, ViewAxis::V) => Axis::Z,
        (Plane::XY, ViewAxis::H) => Axis::Y,
        (Plane::XY, ViewAxis::V) => Axis::X,
    }
}

/// The two (plane, view axis) pairs whose lines land on `axis`.
pub fn planes_for(axis: Axis) -> [(Plane, ViewAxis); 2] {
    match axis {
        Axis::X => [(Plane::ZX, ViewAxis::H), (Plane::XY, ViewAxis::V)],
        Axis::Y => [(Plane::YZ, ViewAxis::V), (Plane::XY, ViewAxis::H)],
        Axis::Z => [(Plane::YZ, ViewAxis::H), (Plane::ZX, ViewAxis::V)],
    }
}

macro_rules! enum_space {
    ($name:ident, $key:ty, $n:expr) => {
        /// Fixed-size container with one slot per enum variant.
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name<T>(pub [T; $n]);

        impl<T> $name<T> {
            pub fn from_fn(mut f: impl FnMut($key) -> T) -> Self {
                Self(std::array::from_fn(|i| f(<$key>::ALL[i])))
            }

            pub fn iter(&self) -> impl Iterator<Item = ($key, &T)> {
                <$key>::ALL.into_iter().zip(self.0.iter())
            }

            pub fn iter_mut(&mut self) -> impl Iterator<Item = ($key, &mut T)> {
                <$key>::ALL.into_iter().zip(self.0.iter_mut())
            }
        }

        impl<T> Index<$key> for $name<T> {
            type Output = T;
            #[inline]
            fn index(&self, k: $key) -> &T {
                &self.0[k.index()]
            }
        }

        impl<T> IndexMut<$key> for $name<T> {
            #[inline]
            fn index_mut(&mut self, k: $key) -> &mut T {
                &mut self.0[k.index()]
            }
        }
    };
}

enum_space!(PlaneSpace, Plane, 3);
enum_space!(AxisSpace, Axis, 3);
enum_space!(ViewAxisSpace, ViewAxis, 2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transpose_table_matches_inverse_lookup() {
        for axis in Axis::ALL {
            for (plane, view) in planes_for(axis) {
                assert_eq!(transpose(plane, view), axis);
            }
        }
        assert_eq!(transpose(Plane::XY, ViewAxis::H), Axis::Y);
        assert_eq!(transpose(Plane::ZX, ViewAxis::H), Axis::X);
        assert_eq!(transpose(Plane::YZ, ViewAxis::H), Axis::Z);
    }

    #[test]
    fn spaces_index_by_variant() {
        let mut s = AxisSpace::from_fn(|a| a.name().to_string());
        assert_eq!(s[Axis::Y], "y");
        s[Axis::Z].push('!');
        assert_eq!(s[Axis::Z], "z!");
        let keys: Vec<_> = ViewAxisSpace::from_fn(|v| v).iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![ViewAxis::H, ViewAxis::V]);
    }
}
