use std::ops::{Neg, Add, Sub, Mul};
use std::iter::Sum;
use std::fmt;

use num_complex::Complex64;

use crate::error::{DomainError, QuatResult};
use crate::operand::Operand;

#[cfg(test)]
use approx::assert_relative_eq;

/// A quaternion `real + i*i + j*j + k*k`.
///
/// Equality is component-wise float equality, so a quaternion with a NaN
/// component never equals anything, itself included.
#[derive(PartialEq, Clone, Copy, Default, Debug)]
pub struct Quaternion {
    pub real: f64,
    pub i: f64,
    pub j: f64,
    pub k: f64,
}
impl Quaternion {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const I: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const J: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const K: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(real: f64, i: f64, j: f64, k: f64) -> Self {
        Self { real, i, j, k }
    }

    pub const fn from_real(real: f64) -> Self {
        Self::new(real, 0.0, 0.0, 0.0)
    }

    /// Builds a quaternion from any operand kind, failing with
    /// `DomainError::Construct` for kinds that cannot be coerced.
    pub fn try_from_operand(init: impl Into<Operand>) -> QuatResult<Self> {
        init.into().into_quaternion()
    }

    pub fn norm_squared(&self) -> f64 {
        self.real*self.real + self.i*self.i + self.j*self.j + self.k*self.k
    }

    pub fn magnitude(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.real, -self.i, -self.j, -self.k)
    }

    /// Conjugate divided by the squared norm. Only the zero quaternion
    /// has no inverse.
    ///
    /// Components are scaled by the largest magnitude first so the squared
    /// norm neither overflows nor underflows for finite input.
    pub fn inverse(&self) -> QuatResult<Self> {
        let m = self.real.abs().max(self.i.abs()).max(self.j.abs()).max(self.k.abs());
        if m == 0.0 {
            log::debug!("inverse requested for zero quaternion");
            return Err(DomainError::DivideByZero);
        }
        let s = Self::new(self.real / m, self.i / m, self.j / m, self.k / m);
        let n = s.norm_squared();
        Ok(Self::new(s.real / n / m, -s.i / n / m, -s.j / n / m, -s.k / n / m))
    }

    /// Hamilton product `self * rhs`.
    pub fn hamilton(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Self::new(
            a.real*b.real - a.i*b.i - a.j*b.j - a.k*b.k,
            a.real*b.i + a.i*b.real + a.j*b.k - a.k*b.j,
            a.real*b.j + a.j*b.real + a.k*b.i - a.i*b.k,
            a.real*b.k + a.k*b.real + a.i*b.j - a.j*b.i,
        )
    }

    /// Hamilton product `lhs * self`, with `self` on the right.
    pub fn rmul(self, lhs: Self) -> Self {
        let (s, o) = (self, lhs);
        Self::new(
            s.real*o.real - s.i*o.i - s.j*o.j - s.k*o.k,
            s.real*o.i + s.i*o.real - s.j*o.k + s.k*o.j,
            s.real*o.j + s.j*o.real - s.k*o.i + s.i*o.k,
            s.real*o.k + s.k*o.real - s.i*o.j + s.j*o.i,
        )
    }

    /// `self * rhs⁻¹`
    pub fn divide(self, rhs: Self) -> QuatResult<Self> {
        Ok(self.hamilton(rhs.inverse()?))
    }

    pub fn near_zero(&self) -> bool {
        let s = 0.00000001;
        self.real.abs() < s && self.i.abs() < s && self.j.abs() < s && self.k.abs() < s
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.real, -self.i, -self.j, -self.k)
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(
            self.real + other.real,
            self.i + other.i,
            self.j + other.j,
            self.k + other.k,
        )
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        self + -other
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        self.hamilton(other)
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        Self::new(self.real * other, self.i * other, self.j * other, self.k * other)
    }
}

impl Mul<Complex64> for Quaternion {
    type Output = Self;

    fn mul(self, other: Complex64) -> Self::Output {
        self.hamilton(Self::from(other))
    }
}

impl Mul<Quaternion> for f64 {
    type Output = Quaternion;

    fn mul(self, other: Quaternion) -> Self::Output {
        other * self
    }
}

impl Mul<Quaternion> for Complex64 {
    type Output = Quaternion;

    fn mul(self, other: Quaternion) -> Self::Output {
        other.rmul(Quaternion::from(self))
    }
}

impl From<f64> for Quaternion {
    fn from(real: f64) -> Self {
        Self::from_real(real)
    }
}

impl From<Complex64> for Quaternion {
    fn from(c: Complex64) -> Self {
        Self::new(c.re, c.im, 0.0, 0.0)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(arr: [f64; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(q: Quaternion) -> [f64; 4] {
        [q.real, q.i, q.j, q.k]
    }
}

impl TryFrom<&[f64]> for Quaternion {
    type Error = DomainError;

    fn try_from(seq: &[f64]) -> QuatResult<Self> {
        Operand::from(seq).into_quaternion()
    }
}

impl TryFrom<&str> for Quaternion {
    type Error = DomainError;

    fn try_from(text: &str) -> QuatResult<Self> {
        Operand::from(text).into_quaternion()
    }
}

impl Sum for Quaternion {
    fn sum<I>(iter: I) -> Self where I: Iterator<Item = Self> {
        iter.fold(Quaternion::ZERO, |acc, q| acc + q)
    }
}

impl<'a> Sum<&'a Quaternion> for Quaternion {
    fn sum<I>(iter: I) -> Self where I: Iterator<Item = &'a Self> {
        iter.fold(Quaternion::ZERO, |acc, q| acc + *q)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.real)?;
        for (v, unit) in [(self.i, 'i'), (self.j, 'j'), (self.k, 'k')] {
            if v > 0.0 {
                write!(f, " + {v}{unit}")?;
            }
            else if v < 0.0 {
                write!(f, " - {}{unit}", -v)?;
            }
        }
        Ok(())
    }
}




#[cfg(test)]
fn assert_quat_eq(a: Quaternion, b: Quaternion) {
    assert_relative_eq!(a.real, b.real, epsilon = 1e-12);
    assert_relative_eq!(a.i, b.i, epsilon = 1e-12);
    assert_relative_eq!(a.j, b.j, epsilon = 1e-12);
    assert_relative_eq!(a.k, b.k, epsilon = 1e-12);
}

#[cfg(test)]
fn samples() -> Vec<Quaternion> {
    vec![
        Quaternion::new(1.0, 6.0, 0.0, 0.0),
        Quaternion::new(-12.0, 4.0, 7.0, -1.0),
        Quaternion::new(0.5, -0.25, 3.0, 2.0),
        Quaternion::new(0.0, 0.0, -4.0, 0.0),
        Quaternion::K,
    ]
}

#[test]
fn format_test() {
    assert_eq!(Quaternion::from([-12.0, 4.0, 7.0, -1.0]).to_string(), "-12 + 4i + 7j - 1k");
    assert_eq!(Quaternion::from_real(5.0).to_string(), "5");
    assert_eq!(Quaternion::new(0.0, 0.0, -2.5, 0.0).to_string(), "0 - 2.5j");
    assert_eq!(Quaternion::new(1.0, 6.0, 0.0, 0.0).to_string(), "1 + 6i");
}

#[test]
fn format_omits_nan_imaginary() {
    assert_eq!(Quaternion::new(1.0, f64::NAN, 0.0, 2.0).to_string(), "1 + 2k");
}

#[test]
fn default_is_zero() {
    assert_eq!(Quaternion::default(), Quaternion::ZERO);
}

#[test]
fn construct_from_kinds() {
    assert_eq!(Quaternion::from(3.0), Quaternion::new(3.0, 0.0, 0.0, 0.0));
    assert_eq!(Quaternion::from(Complex64::new(1.0, 6.0)), Quaternion::new(1.0, 6.0, 0.0, 0.0));
    let q = Quaternion::try_from_operand(Quaternion::new(1.0, 2.0, 3.0, 4.0)).unwrap();
    assert_eq!(q, Quaternion::new(1.0, 2.0, 3.0, 4.0));
    let seq: &[f64] = &[-12.0, 4.0, 7.0, -1.0];
    assert_eq!(Quaternion::try_from(seq).unwrap(), Quaternion::new(-12.0, 4.0, 7.0, -1.0));
}

#[test]
fn construct_from_text_fails() {
    assert_eq!(
        Quaternion::try_from("1 + 6i"),
        Err(DomainError::Construct("text".to_string()))
    );
}

#[test]
fn nan_is_not_equal_to_itself() {
    let q = Quaternion::new(f64::NAN, 0.0, 0.0, 0.0);
    assert!(q != q);
}

#[test]
fn add_negation_is_zero() {
    for q in samples() {
        assert_eq!(q + -q, Quaternion::ZERO);
    }
}

#[test]
fn norm_squared_test() {
    assert_eq!(Quaternion::ZERO.norm_squared(), 0.0);
    for q in samples() {
        assert!(q.norm_squared() > 0.0);
    }
    assert_eq!(Quaternion::new(-12.0, 4.0, 7.0, -1.0).norm_squared(), 210.0);

    let tiny = Quaternion::new(0.0, 0.0, 1e-150, 0.0);
    assert!(tiny.norm_squared() > 0.0);
    assert!(Quaternion::new(0.0, -0.0, 0.0, -0.0).norm_squared() == 0.0);
}

#[test]
fn inverse_of_extreme_magnitudes() {
    let big = Quaternion::new(1e200, -3e200, 2e200, 0.0);
    assert_quat_eq(big * big.inverse().unwrap(), Quaternion::ONE);
    assert_quat_eq(big.inverse().unwrap() * big, Quaternion::ONE);

    let tiny = Quaternion::new(1e-170, 0.0, 0.0, 0.0);
    assert_relative_eq!(tiny.inverse().unwrap().real, 1e170, max_relative = 1e-12);
    assert_quat_eq(tiny * tiny.inverse().unwrap(), Quaternion::ONE);

    let mixed = Quaternion::new(1e-170, 2e-170, 0.0, -1e-170);
    assert_quat_eq(mixed * mixed.inverse().unwrap(), Quaternion::ONE);

    assert_quat_eq(big.divide(big).unwrap(), Quaternion::ONE);
    assert_quat_eq(tiny.divide(tiny).unwrap(), Quaternion::ONE);
}

#[test]
fn into_array() {
    let arr: [f64; 4] = Quaternion::new(-12.0, 4.0, 7.0, -1.0).into();
    assert_eq!(arr, [-12.0, 4.0, 7.0, -1.0]);
    assert_eq!(Quaternion::from(arr), Quaternion::new(-12.0, 4.0, 7.0, -1.0));
}

#[test]
fn inverse_test() {
    for q in samples() {
        assert_quat_eq(q * q.inverse().unwrap(), Quaternion::ONE);
        assert_quat_eq(q.inverse().unwrap() * q, Quaternion::ONE);
    }
    assert_eq!(Quaternion::ZERO.inverse(), Err(DomainError::DivideByZero));
}

#[test]
fn conjugate_test() {
    let q = Quaternion::new(-12.0, 4.0, 7.0, -1.0);
    assert_eq!(q.conjugate(), Quaternion::new(-12.0, -4.0, -7.0, 1.0));
    assert_eq!(q * q.conjugate(), Quaternion::from_real(q.norm_squared()));
}

#[test]
fn unit_products() {
    let (i, j, k) = (Quaternion::I, Quaternion::J, Quaternion::K);
    assert_eq!(i * j, k);
    assert_eq!(j * i, -k);
    assert_eq!(j * k, i);
    assert_eq!(k * i, j);
    assert_eq!(i * i, -Quaternion::ONE);
    assert_eq!(i * j * k, -Quaternion::ONE);
}

#[test]
fn rmul_matches_reference_values() {
    let u = Quaternion::new(1.0, 6.0, 0.0, 0.0);
    let v = Quaternion::new(-12.0, 4.0, 7.0, -1.0);
    // hand-computed
    assert_eq!(u * v, Quaternion::new(-36.0, -68.0, 13.0, 41.0));
    assert_eq!(v * u, Quaternion::new(-36.0, -68.0, 1.0, -43.0));
    assert_eq!(v.rmul(u), Quaternion::new(-36.0, -68.0, 13.0, 41.0));
    assert_eq!(u.rmul(v), Quaternion::new(-36.0, -68.0, 1.0, -43.0));
    assert_eq!(Quaternion::J.rmul(Quaternion::I), Quaternion::K);
    assert_eq!(Quaternion::I.rmul(Quaternion::J), -Quaternion::K);
}

#[test]
fn distributive_test() {
    let s = samples();
    for a in &s {
        for b in &s {
            for c in &s {
                assert_quat_eq(*a * (*b + *c), *a * *b + *a * *c);
            }
        }
    }
}

#[test]
fn scalar_and_complex_products() {
    let v = Quaternion::new(-12.0, 4.0, 7.0, -1.0);
    assert_eq!(v * 2.0, Quaternion::new(-24.0, 8.0, 14.0, -2.0));
    assert_eq!(2.0 * v, v * 2.0);

    let c = Complex64::new(1.0, 6.0);
    assert_eq!(v * c, v * Quaternion::new(1.0, 6.0, 0.0, 0.0));
    assert_eq!(c * v, Quaternion::new(1.0, 6.0, 0.0, 0.0) * v);
    assert!(v * c != c * v);
}

#[test]
fn divide_test() {
    let u = Quaternion::new(1.0, 6.0, 0.0, 0.0);
    let v = Quaternion::new(-12.0, 4.0, 7.0, -1.0);
    let expected = Quaternion::new(12.0, -76.0, -13.0, -41.0) * (1.0 / 210.0);
    assert_quat_eq(u.divide(v).unwrap(), expected);
    assert_eq!(u.divide(Quaternion::ZERO), Err(DomainError::DivideByZero));
}

#[test]
fn magnitude_test() {
    assert_relative_eq!(Quaternion::new(1.0, 6.0, 0.0, 0.0).magnitude(), 37f64.sqrt());
    assert_eq!(Quaternion::new(1.0, 2.0, 2.0, 4.0).magnitude(), 5.0);
}

#[test]
fn sum_test() {
    let total: Quaternion = samples().iter().sum();
    assert_eq!(total, Quaternion::new(-10.5, 9.75, 6.0, 2.0));
    assert!((total - samples().into_iter().sum::<Quaternion>()).near_zero());
}
