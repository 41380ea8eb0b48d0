use serde_json::Value;
use thiserror::Error;

/// A record that broke one of its shape invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Boundary check run on every decoded response and outgoing payload.
///
/// Types without invariants of their own take the default no-op.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// What a 204 or blank body stands for, if the type has such a form.
    fn empty_value() -> Option<Self>
    where
        Self: Sized,
    {
        None
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        self.iter().try_for_each(Validate::validate)
    }

    fn empty_value() -> Option<Self> {
        Some(Vec::new())
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Some(inner) => inner.validate(),
            None => Ok(()),
        }
    }

    fn empty_value() -> Option<Self> {
        Some(None)
    }
}

impl Validate for () {
    fn empty_value() -> Option<Self> {
        Some(())
    }
}

impl Validate for String {}

impl Validate for Value {
    fn empty_value() -> Option<Self> {
        Some(Value::Null)
    }
}

pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(())
}

pub(crate) fn require_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(ValidationError::new(field, format!("'{}' is not a valid email address", value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_check_requires_local_part_and_dotted_domain() {
        assert!(require_email("email", "player@hoopmatch.dev").is_ok());
        assert!(require_email("email", "@hoopmatch.dev").is_err());
        assert!(require_email("email", "player@localhost").is_err());
        assert!(require_email("email", "player").is_err());
    }

    #[test]
    fn vec_validation_stops_at_first_failure() {
        struct Flag(bool);
        impl Validate for Flag {
            fn validate(&self) -> Result<(), ValidationError> {
                if self.0 { Ok(()) } else { Err(ValidationError::new("flag", "unset")) }
            }
        }

        assert!(vec![Flag(true), Flag(true)].validate().is_ok());
        assert_eq!(
            vec![Flag(true), Flag(false)].validate(),
            Err(ValidationError::new("flag", "unset"))
        );
    }
}
