use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    ops::{Add, Index, Mul, Neg, Sub},
};

use fastrand::Rng;
use fastrand_contrib::RngExt;
use nalgebra::{SVector, Scalar};
use num_traits::Signed;
use serde::{Deserialize, Serialize};

use crate::{core::SwarmError, traits::Coordinates, Float};

/// A numeric type which can be used as a component of a [`Vector`].
///
/// Conversions from [`Float`] follow Rust's `as` semantics, so integer components truncate toward
/// zero (saturating at the type's limits) while floating-point components round to nearest.
/// Integer arithmetic saturates in the same way.
pub trait Component: Scalar + Copy + Signed + PartialOrd + Display {
    /// Add two components, saturating at the type's limits.
    fn saturating_add(self, rhs: Self) -> Self;
    /// Subtract two components, saturating at the type's limits.
    fn saturating_sub(self, rhs: Self) -> Self;
    /// Negate a component, saturating at the type's limits.
    fn saturating_neg(self) -> Self;
    /// Widen the component to a [`Float`].
    fn to_float(self) -> Float;
    /// Narrow a [`Float`] to a component.
    fn from_float(value: Float) -> Self;
    /// Draw a uniformly distributed component from `[low, high)`.
    ///
    /// Callers must ensure `low < high`.
    fn sample(rng: &mut Rng, low: Self, high: Self) -> Self;
}

macro_rules! impl_integer_component {
    ($($t:ident),*) => {
        $(
            impl Component for $t {
                fn saturating_add(self, rhs: Self) -> Self {
                    $t::saturating_add(self, rhs)
                }
                fn saturating_sub(self, rhs: Self) -> Self {
                    $t::saturating_sub(self, rhs)
                }
                fn saturating_neg(self) -> Self {
                    $t::saturating_neg(self)
                }
                fn to_float(self) -> Float {
                    self as Float
                }
                fn from_float(value: Float) -> Self {
                    value as Self
                }
                fn sample(rng: &mut Rng, low: Self, high: Self) -> Self {
                    rng.$t(low..high)
                }
            }
        )*
    };
}
impl_integer_component!(i8, i16, i32, i64);

impl Component for f32 {
    fn saturating_add(self, rhs: Self) -> Self {
        self + rhs
    }
    fn saturating_sub(self, rhs: Self) -> Self {
        self - rhs
    }
    fn saturating_neg(self) -> Self {
        -self
    }
    fn to_float(self) -> Float {
        self as Float
    }
    fn from_float(value: Float) -> Self {
        value as Self
    }
    fn sample(rng: &mut Rng, low: Self, high: Self) -> Self {
        rng.f32_range(low..high)
    }
}

impl Component for f64 {
    fn saturating_add(self, rhs: Self) -> Self {
        self + rhs
    }
    fn saturating_sub(self, rhs: Self) -> Self {
        self - rhs
    }
    fn saturating_neg(self) -> Self {
        -self
    }
    fn to_float(self) -> Float {
        self as Float
    }
    fn from_float(value: Float) -> Self {
        value as Self
    }
    fn sample(rng: &mut Rng, low: Self, high: Self) -> Self {
        rng.f64_range(low..high)
    }
}

/// A fixed-dimension vector of `D` components of type `T`, used for both positions and
/// velocities.
///
/// Arithmetic never mutates its operands. Component access past the dimension panics through
/// [`Index`], or returns [`SwarmError::IndexOutOfRange`] through [`Vector::get`].
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Scalar + Serialize",
    deserialize = "T: Scalar + Deserialize<'de>"
))]
pub struct Vector<T, const D: usize>(SVector<T, D>);

/// A two-dimensional [`Vector`].
pub type Vector2<T> = Vector<T, 2>;
/// A three-dimensional [`Vector`].
pub type Vector3<T> = Vector<T, 3>;
/// A two-dimensional integer [`Vector`].
pub type Vector2i = Vector<i32, 2>;
/// A two-dimensional single-precision [`Vector`].
pub type Vector2f = Vector<f32, 2>;
/// A two-dimensional [`Float`] [`Vector`].
pub type Vector2d = Vector<Float, 2>;

impl<T: Component, const D: usize> Vector<T, D> {
    /// Create a new vector from its components.
    pub fn new(components: [T; D]) -> Self {
        Self(SVector::from(components))
    }

    /// The vector with every component set to zero.
    pub fn zero() -> Self {
        Self(SVector::from_element(T::zero()))
    }

    /// The number of components, always `D`.
    pub const fn dimension(&self) -> usize {
        D
    }

    /// Get the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::IndexOutOfRange`] if `index >= D`.
    pub fn get(&self, index: usize) -> Result<T, SwarmError> {
        self.0
            .get(index)
            .copied()
            .ok_or(SwarmError::IndexOutOfRange {
                index,
                dimension: D,
            })
    }

    /// The components as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    /// Iterate over the components.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    /// The Euclidean norm $`\sqrt{\sum_i x_i^2}`$.
    pub fn magnitude(&self) -> Float {
        self.0
            .iter()
            .map(|c| c.to_float().powi(2))
            .sum::<Float>()
            .sqrt()
    }

    /// The Euclidean distance between `self` and `point`.
    pub fn distance_from(&self, point: &Self) -> Float {
        (*self - *point).magnitude()
    }

    /// The Euclidean distance between two points. This is the default fitness function.
    pub fn distance_between(a: &Self, b: &Self) -> Float {
        a.distance_from(b)
    }

    /// Draw a vector whose `i`-th component is uniformly distributed in `[low[i], high[i])`.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidRange`] if `high[i] <= low[i]` for any axis, or if either
    /// bound is not comparable (NaN).
    pub fn random(low: &Self, high: &Self, rng: &mut Rng) -> Result<Self, SwarmError> {
        for (axis, (l, h)) in low.0.iter().zip(high.0.iter()).enumerate() {
            if l.partial_cmp(h) != Some(Ordering::Less) {
                return Err(SwarmError::InvalidRange {
                    axis,
                    low: l.to_float(),
                    high: h.to_float(),
                });
            }
        }
        Ok(Self(low.0.zip_map(&high.0, |l, h| T::sample(rng, l, h))))
    }
}

impl<T: Component, const D: usize> Default for Vector<T, D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Component, const D: usize> From<[T; D]> for Vector<T, D> {
    fn from(value: [T; D]) -> Self {
        Self::new(value)
    }
}

impl<T: Component, const D: usize> From<SVector<T, D>> for Vector<T, D> {
    fn from(value: SVector<T, D>) -> Self {
        Self(value)
    }
}

impl<T: Component, const D: usize> From<Vector<T, D>> for SVector<T, D> {
    fn from(value: Vector<T, D>) -> Self {
        value.0
    }
}

impl<T: Component, const D: usize> PartialEq for Vector<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Component, const D: usize> Index<usize> for Vector<T, D> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        assert!(
            index < D,
            "component index {index} is out of range for a vector of dimension {D}"
        );
        &self.0[index]
    }
}

impl<T: Component, const D: usize> Neg for Vector<T, D> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.map(T::saturating_neg))
    }
}

impl<T: Component, const D: usize> Add for Vector<T, D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.zip_map(&rhs.0, T::saturating_add))
    }
}

impl<T: Component, const D: usize> Sub for Vector<T, D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.zip_map(&rhs.0, T::saturating_sub))
    }
}

impl<T: Component, const D: usize> Mul<Float> for Vector<T, D> {
    type Output = Self;

    fn mul(self, rhs: Float) -> Self::Output {
        Self(self.0.map(|c| T::from_float(c.to_float() * rhs)))
    }
}

impl<T: Component, const D: usize> Debug for Vector<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Vector").field(&self.as_slice()).finish()
    }
}

impl<T: Component, const D: usize> Display for Vector<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

impl<T: Component, const D: usize> Coordinates for Vector<T, D> {
    fn zero() -> Self {
        Self::zero()
    }
    fn dimension(&self) -> usize {
        D
    }
    fn magnitude(&self) -> Float {
        Self::magnitude(self)
    }
    fn distance_between(a: &Self, b: &Self) -> Float {
        a.distance_from(b)
    }
    fn random(low: &Self, high: &Self, rng: &mut Rng) -> Result<Self, SwarmError> {
        Self::random(low, high, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_add_then_subtract_is_identity() {
        let a = Vector2d::from([1.25, -3.5]);
        let b = Vector2d::from([0.1, 7.3]);
        let back = (a + b) - b;
        assert_abs_diff_eq!(back.distance_from(&a), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negation_cancels() {
        let a = Vector::<Float, 3>::from([1.0, -2.0, 3.0]);
        assert_eq!(a + (-a), Vector::zero());
    }

    #[test]
    fn test_scale_by_one_is_identity() {
        let a = Vector2d::from([4.5, -0.25]);
        assert_eq!(a * 1.0, a);
        assert_eq!(a * 2.0, Vector2d::from([9.0, -0.5]));
    }

    #[test]
    fn test_integer_scale_truncates_toward_zero() {
        let a = Vector2i::from([5, -5]);
        assert_eq!(a * 0.5, Vector2i::from([2, -2]));
        assert_eq!(a * 0.19, Vector2i::from([0, 0]));
    }

    #[test]
    fn test_integer_arithmetic_saturates() {
        let a = Vector::<i8, 2>::from([120, -120]);
        let b = Vector::<i8, 2>::from([20, 20]);
        assert_eq!(a + b, Vector::from([i8::MAX, -100]));
        assert_eq!(-a - b, Vector::from([-128, 100]));
        assert_eq!(-Vector::<i8, 2>::from([i8::MIN, 0]), Vector::from([i8::MAX, 0]));
    }

    #[test]
    fn test_single_precision_components() {
        let a = Vector2f::from([1.5, 2.5]);
        assert_eq!(a * 2.0, Vector2f::from([3.0, 5.0]));
        assert_abs_diff_eq!(a.magnitude(), (8.5 as Float).sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn test_magnitude_and_distance() {
        let a = Vector2d::from([3.0, 4.0]);
        assert_abs_diff_eq!(a.magnitude(), 5.0);
        assert_abs_diff_eq!(Vector2d::distance_between(&a, &a), 0.0);
        let b = Vector2i::from([0, 0]);
        let c = Vector2i::from([6, 8]);
        assert_abs_diff_eq!(Vector2i::distance_between(&b, &c), 10.0);
    }

    #[test]
    fn test_random_is_bounded() {
        let mut rng = Rng::with_seed(0);
        let low = Vector2d::from([0.0, 0.0]);
        let high = Vector2d::from([10.0, 10.0]);
        for _ in 0..10_000 {
            let v = Vector2d::random(&low, &high, &mut rng).unwrap();
            for c in v.iter() {
                assert!((0.0..10.0).contains(c));
            }
        }
    }

    #[test]
    fn test_random_integer_is_bounded() {
        let mut rng = Rng::with_seed(3);
        let low = Vector2i::from([-3, 10]);
        let high = Vector2i::from([3, 12]);
        for _ in 0..1000 {
            let v = Vector2i::random(&low, &high, &mut rng).unwrap();
            assert!((-3..3).contains(&v[0]));
            assert!((10..12).contains(&v[1]));
        }
    }

    #[test]
    fn test_random_rejects_empty_range() {
        let mut rng = Rng::with_seed(0);
        let p = Vector2d::from([5.0, 5.0]);
        assert_eq!(
            Vector2d::random(&p, &p, &mut rng),
            Err(SwarmError::InvalidRange {
                axis: 0,
                low: 5.0,
                high: 5.0
            })
        );
        let low = Vector2d::from([0.0, 2.0]);
        let high = Vector2d::from([1.0, 1.0]);
        assert!(matches!(
            Vector2d::random(&low, &high, &mut rng),
            Err(SwarmError::InvalidRange { axis: 1, .. })
        ));
        let nan = Vector2d::from([Float::NAN, 1.0]);
        assert!(Vector2d::random(&nan, &high, &mut rng).is_err());
    }

    #[test]
    fn test_get_out_of_range() {
        let a = Vector2d::from([1.0, 2.0]);
        assert_eq!(a.get(1), Ok(2.0));
        assert_eq!(
            a.get(2),
            Err(SwarmError::IndexOutOfRange {
                index: 2,
                dimension: 2
            })
        );
    }

    #[test]
    #[should_panic(expected = "component index 3 is out of range for a vector of dimension 2")]
    fn test_index_out_of_range_panics() {
        let a = Vector2d::from([1.0, 2.0]);
        let _ = a[3];
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector2i::from([1, -2]).to_string(), "(1,-2)");
        assert_eq!(
            Vector::<Float, 3>::from([0.5, 1.0, 2.0]).to_string(),
            "(0.5,1,2)"
        );
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Vector2i::default(), Vector2i::from([0, 0]));
        assert_eq!(Vector2d::default().dimension(), 2);
    }
}
