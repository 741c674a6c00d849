use std::error::Error;
use std::fmt;

pub type QuatResult<T> = Result<T, DomainError>;

/// Raised when an operation receives an operand of an unsupported kind,
/// or when a zero quaternion is inverted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    Construct(String),
    Compare(String),
    Add(String),
    Multiply(String),
    Divide(String),
    DivideByZero,
}
impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Construct(kind) => {
                write!(f, "Can't create quaternion from {kind}")
            }
            DomainError::Compare(kind) => {
                write!(f, "Can't equal quaternion with {kind}")
            }
            DomainError::Add(kind) => {
                write!(f, "Can't add {kind} to quaternion")
            }
            DomainError::Multiply(kind) => {
                write!(f, "Can't multiply quaternion with {kind}")
            }
            DomainError::Divide(kind) => {
                write!(f, "Can't divide quaternion by {kind}")
            }
            DomainError::DivideByZero => {
                write!(f, "Can't divide by zero")
            }
        }
    }
}
impl Error for DomainError {}


/// Errors produced while parsing demo arguments.
#[derive(Debug)]
pub enum ConfigError {
    UnknownFlag(String),
    InvalidComponent(String),
    WrongComponentCount(String, usize),
}
impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFlag(flag) => {
                write!(f, "
                    \rUnknown argument: {flag}",
                )
            }
            ConfigError::InvalidComponent(arg) => {
                write!(f, "
                    \rInvalid quaternion component: {arg}",
                )
            }
            ConfigError::WrongComponentCount(flag, found) => {
                write!(f, "
                    \r{flag} expects 4 components, found {found}",
                )
            }
        }
    }
}
impl Error for ConfigError {}


#[test]
fn domain_error_messages() {
    assert_eq!(
        DomainError::Construct("text".to_string()).to_string(),
        "Can't create quaternion from text"
    );
    assert_eq!(DomainError::DivideByZero.to_string(), "Can't divide by zero");
}
