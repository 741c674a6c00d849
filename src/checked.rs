//! Operations that accept any [`Operand`] on the other side.
//!
//! Each one validates the operand kind up front and fails with a
//! [`DomainError`] naming it; the arithmetic itself is done by the
//! `std::ops` impls on [`Quaternion`].

use crate::error::{DomainError, QuatResult};
use crate::operand::Operand;
use crate::quaternion::Quaternion;

#[cfg(test)]
use num_complex::Complex64;

impl Quaternion {
    /// Component-wise equality. Only quaternions may be compared.
    pub fn try_eq(&self, other: impl Into<Operand>) -> QuatResult<bool> {
        match other.into() {
            Operand::Quaternion(q) => Ok(*self == q),
            other => {
                log::debug!("rejected {} operand for comparison", other.kind());
                Err(DomainError::Compare(other.kind()))
            }
        }
    }

    /// `self + rhs`
    pub fn try_add(self, rhs: impl Into<Operand>) -> QuatResult<Self> {
        Ok(self + coerce_addend(rhs.into())?)
    }

    /// `lhs + self`
    pub fn try_radd(self, lhs: impl Into<Operand>) -> QuatResult<Self> {
        Ok(coerce_addend(lhs.into())? + self)
    }

    /// `self - rhs`
    pub fn try_sub(self, rhs: impl Into<Operand>) -> QuatResult<Self> {
        Ok(self + -coerce_addend(rhs.into())?)
    }

    /// `lhs - self`
    pub fn try_rsub(self, lhs: impl Into<Operand>) -> QuatResult<Self> {
        Ok(coerce_addend(lhs.into())? + -self)
    }

    /// `self * rhs`
    pub fn try_mul(self, rhs: impl Into<Operand>) -> QuatResult<Self> {
        match rhs.into() {
            Operand::Real(re) => Ok(self * re),
            Operand::Complex(c) => Ok(self * c),
            Operand::Quaternion(q) => Ok(self * q),
            other => Err(rejected_factor(other)),
        }
    }

    /// `lhs * self`. Differs from [`Quaternion::try_mul`] whenever `lhs`
    /// has an imaginary part.
    pub fn try_rmul(self, lhs: impl Into<Operand>) -> QuatResult<Self> {
        match lhs.into() {
            Operand::Real(re) => Ok(re * self),
            Operand::Complex(c) => Ok(c * self),
            Operand::Quaternion(q) => Ok(self.rmul(q)),
            other => Err(rejected_factor(other)),
        }
    }

    /// `self * rhs⁻¹`
    pub fn try_div(self, rhs: impl Into<Operand>) -> QuatResult<Self> {
        let divisor = coerce_divisor(rhs.into())?;
        self.divide(divisor)
    }

    /// `lhs * self⁻¹`, i.e. `lhs / self` with `self` on the right.
    pub fn try_rdiv(self, lhs: impl Into<Operand>) -> QuatResult<Self> {
        let dividend = coerce_divisor(lhs.into())?;
        Ok(self.inverse()?.rmul(dividend))
    }
}

fn coerce_addend(op: Operand) -> QuatResult<Quaternion> {
    match op.coerce() {
        Some(q) => Ok(q),
        None => {
            log::debug!("rejected {} operand for addition", op.kind());
            Err(DomainError::Add(op.kind()))
        }
    }
}

fn coerce_divisor(op: Operand) -> QuatResult<Quaternion> {
    match op {
        Operand::Real(re) => Ok(Quaternion::from_real(re)),
        Operand::Complex(c) => Ok(Quaternion::from(c)),
        Operand::Quaternion(q) => Ok(q),
        other => {
            log::debug!("rejected {} operand for division", other.kind());
            Err(DomainError::Divide(other.kind()))
        }
    }
}

fn rejected_factor(op: Operand) -> DomainError {
    log::debug!("rejected {} operand for multiplication", op.kind());
    DomainError::Multiply(op.kind())
}




#[cfg(test)]
fn u() -> Quaternion {
    Quaternion::try_from_operand(Complex64::new(1.0, 6.0)).unwrap()
}

#[cfg(test)]
fn v() -> Quaternion {
    Quaternion::try_from_operand([-12.0, 4.0, 7.0, -1.0]).unwrap()
}

#[test]
fn sample_arithmetic() {
    assert_eq!(u().try_add(v()).unwrap(), Quaternion::new(-11.0, 10.0, 7.0, -1.0));
    assert_eq!(u().try_sub(v()).unwrap(), Quaternion::new(13.0, 2.0, -7.0, 1.0));
    assert_eq!(u().try_rsub(v()).unwrap(), Quaternion::new(-13.0, -2.0, 7.0, -1.0));
    assert_eq!(u().try_mul(v()).unwrap(), Quaternion::new(-36.0, -68.0, 13.0, 41.0));
    assert_eq!(u().try_rmul(v()).unwrap(), Quaternion::new(-36.0, -68.0, 1.0, -43.0));
    assert_eq!(u().magnitude(), 37f64.sqrt());
}

#[test]
fn try_eq_test() {
    assert_eq!(v().try_eq(v()), Ok(true));
    assert_eq!(v().try_eq(u()), Ok(false));
    assert_eq!(v().try_eq(5.0), Err(DomainError::Compare("real".to_string())));
}

#[test]
fn add_coerces_operands() {
    assert_eq!(v().try_add(2.0).unwrap(), Quaternion::new(-10.0, 4.0, 7.0, -1.0));
    assert_eq!(v().try_radd(Complex64::new(0.0, 1.0)).unwrap(), Quaternion::new(-12.0, 5.0, 7.0, -1.0));
    assert_eq!(
        v().try_add("2"),
        Err(DomainError::Add("text".to_string()))
    );
    assert_eq!(
        v().try_sub(vec![1.0, 2.0]),
        Err(DomainError::Add("sequence of length 2".to_string()))
    );
}

#[test]
fn mul_operand_kinds() {
    assert_eq!(v().try_mul(0.5).unwrap(), Quaternion::new(-6.0, 2.0, 3.5, -0.5));
    assert_eq!(v().try_rmul(0.5).unwrap(), Quaternion::new(-6.0, 2.0, 3.5, -0.5));
    assert_eq!(v().try_mul(Complex64::new(1.0, 6.0)).unwrap(), v() * u());
    assert_eq!(v().try_rmul(Complex64::new(1.0, 6.0)).unwrap(), u() * v());
    assert_eq!(
        v().try_mul([1.0, 0.0, 0.0, 0.0]),
        Err(DomainError::Multiply("sequence".to_string()))
    );
    assert_eq!(
        v().try_rmul("i"),
        Err(DomainError::Multiply("text".to_string()))
    );
}

#[test]
fn non_commutative_units() {
    let a = Quaternion::from([0.0, 1.0, 0.0, 0.0]);
    let b = Quaternion::from([0.0, 0.0, 1.0, 0.0]);
    assert_eq!(a.try_mul(b).unwrap(), Quaternion::new(0.0, 0.0, 0.0, 1.0));
    assert_eq!(b.try_mul(a).unwrap(), Quaternion::new(0.0, 0.0, 0.0, -1.0));
    assert_eq!(a.try_rmul(b).unwrap(), b.try_mul(a).unwrap());
}

#[test]
fn division() {
    let expected = Quaternion::new(12.0, -76.0, -13.0, -41.0) * (1.0 / 210.0);
    assert!((u().try_div(v()).unwrap() - expected).near_zero());
    // u / v taken from v's side
    assert!((v().try_rdiv(u()).unwrap() - expected).near_zero());
    assert_eq!(v().try_div(2.0).unwrap(), Quaternion::new(-6.0, 2.0, 3.5, -0.5));
    assert_eq!(v().try_rdiv(0.0).unwrap(), Quaternion::ZERO);
}

#[test]
fn division_by_zero() {
    assert_eq!(u().try_div(Quaternion::ZERO), Err(DomainError::DivideByZero));
    assert_eq!(u().try_div(0.0), Err(DomainError::DivideByZero));
    assert_eq!(Quaternion::ZERO.try_rdiv(u()), Err(DomainError::DivideByZero));
    assert_eq!(
        u().try_div("0"),
        Err(DomainError::Divide("text".to_string()))
    );
}
