use num_complex::Complex64;

use crate::error::{DomainError, QuatResult};
use crate::quaternion::Quaternion;

/// Every kind of value an operation can be handed.
///
/// `Text` stands in for inputs that are never valid; it exists so callers
/// holding loosely-typed data get a `DomainError` instead of a panic.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Real(f64),
    Complex(Complex64),
    Sequence(Vec<f64>),
    Quaternion(Quaternion),
    Text(String),
}
impl Operand {
    /// Human-readable name of the operand kind, used in error messages.
    pub fn kind(&self) -> String {
        match self {
            Operand::Real(_) => "real".to_string(),
            Operand::Complex(_) => "complex".to_string(),
            Operand::Sequence(seq) if seq.len() == 4 => "sequence".to_string(),
            Operand::Sequence(seq) => format!("sequence of length {}", seq.len()),
            Operand::Quaternion(_) => "quaternion".to_string(),
            Operand::Text(_) => "text".to_string(),
        }
    }

    /// The validation gate: converts an operand into a quaternion, or
    /// returns `None` if its kind cannot be coerced.
    pub fn coerce(&self) -> Option<Quaternion> {
        match self {
            Operand::Real(re) => Some(Quaternion::from_real(*re)),
            Operand::Complex(c) => Some(Quaternion::from(*c)),
            Operand::Sequence(seq) => match seq.as_slice() {
                [real, i, j, k] => Some(Quaternion::new(*real, *i, *j, *k)),
                _ => None,
            },
            Operand::Quaternion(q) => Some(*q),
            Operand::Text(_) => None,
        }
    }

    /// Like [`Operand::coerce`], reporting failure as a construction error.
    pub fn into_quaternion(self) -> QuatResult<Quaternion> {
        match self.coerce() {
            Some(q) => Ok(q),
            None => {
                log::debug!("rejected {} operand during construction", self.kind());
                Err(DomainError::Construct(self.kind()))
            }
        }
    }
}

impl From<f64> for Operand {
    fn from(re: f64) -> Self {
        Operand::Real(re)
    }
}

impl From<Complex64> for Operand {
    fn from(c: Complex64) -> Self {
        Operand::Complex(c)
    }
}

impl From<[f64; 4]> for Operand {
    fn from(arr: [f64; 4]) -> Self {
        Operand::Sequence(arr.to_vec())
    }
}

impl From<&[f64]> for Operand {
    fn from(seq: &[f64]) -> Self {
        Operand::Sequence(seq.to_vec())
    }
}

impl From<Vec<f64>> for Operand {
    fn from(seq: Vec<f64>) -> Self {
        Operand::Sequence(seq)
    }
}

impl From<Quaternion> for Operand {
    fn from(q: Quaternion) -> Self {
        Operand::Quaternion(q)
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Operand::Text(text.to_string())
    }
}

impl From<String> for Operand {
    fn from(text: String) -> Self {
        Operand::Text(text)
    }
}




#[test]
fn coerce_accepted_kinds() {
    assert_eq!(Operand::from(2.5).coerce(), Some(Quaternion::new(2.5, 0.0, 0.0, 0.0)));
    assert_eq!(
        Operand::from(Complex64::new(1.0, 6.0)).coerce(),
        Some(Quaternion::new(1.0, 6.0, 0.0, 0.0))
    );
    assert_eq!(
        Operand::from([-12.0, 4.0, 7.0, -1.0]).coerce(),
        Some(Quaternion::new(-12.0, 4.0, 7.0, -1.0))
    );
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(Operand::from(q).coerce(), Some(q));
}

#[test]
fn short_sequence_is_rejected() {
    let op = Operand::from(vec![1.0, 2.0, 3.0]);
    assert_eq!(op.kind(), "sequence of length 3");
    assert_eq!(
        op.into_quaternion(),
        Err(DomainError::Construct("sequence of length 3".to_string()))
    );
}

#[test]
fn text_is_rejected() {
    let err = Operand::from("1 + 6i").into_quaternion().unwrap_err();
    assert_eq!(err.to_string(), "Can't create quaternion from text");
}

#[test]
fn owned_text_is_rejected() {
    let op = Operand::from(String::from("-12 + 4i"));
    assert_eq!(op, Operand::Text("-12 + 4i".to_string()));
    assert_eq!(op.into_quaternion(), Err(DomainError::Construct("text".to_string())));
}
