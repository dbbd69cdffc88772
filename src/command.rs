use std::{fmt::Debug, sync::Arc};

use crate::error::ValidationError;

/// A single TSPL instruction that can encode itself.
///
/// Rendering is a pure read of the fields set so far: it either returns the
/// complete command line, terminator included, or a [`ValidationError`] and
/// no bytes at all.
pub trait Command: Debug + Send + Sync {
    fn render(&self) -> Result<Vec<u8>, ValidationError>;
}

impl<C: Command + ?Sized> Command for Box<C> {
    fn render(&self) -> Result<Vec<u8>, ValidationError> {
        (**self).render()
    }
}

impl<C: Command + ?Sized> Command for Arc<C> {
    fn render(&self) -> Result<Vec<u8>, ValidationError> {
        (**self).render()
    }
}

/// Unwrap a required field or report it as missing.
pub(crate) fn required<T>(
    value: Option<T>,
    command: &'static str,
    field: &'static str,
) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField { command, field })
}

/// Required string field that must also be non-empty.
pub(crate) fn required_str<'a>(
    value: Option<&'a str>,
    command: &'static str,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    match required(value, command, field)? {
        "" => Err(ValidationError::EmptyField { command, field }),
        s => Ok(s),
    }
}

/// Inclusive range check. NaN never passes.
pub(crate) fn in_range(
    value: f64,
    min: f64,
    max: f64,
    command: &'static str,
    field: &'static str,
) -> Result<f64, ValidationError> {
    if value >= min && value <= max {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            command,
            field,
            min,
            max,
        })
    }
}

/// Zero or more. NaN and infinities never pass.
pub(crate) fn non_negative(
    value: f64,
    command: &'static str,
    field: &'static str,
) -> Result<f64, ValidationError> {
    if value >= 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::Negative { command, field })
    }
}

pub(crate) fn at_least(
    value: i32,
    min: i32,
    command: &'static str,
    field: &'static str,
) -> Result<i32, ValidationError> {
    if value >= min {
        Ok(value)
    } else {
        Err(ValidationError::BelowMinimum { command, field, min })
    }
}

pub(crate) fn one_of(
    value: i32,
    allowed: &'static [i32],
    command: &'static str,
    field: &'static str,
) -> Result<i32, ValidationError> {
    if allowed.contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::NotAllowed {
            command,
            field,
            value,
            allowed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_reports_missing_field() {
        assert_eq!(required(Some(3), "BAR", "x"), Ok(3));
        assert_eq!(
            required::<i32>(None, "BAR", "x"),
            Err(ValidationError::MissingField {
                command: "BAR",
                field: "x"
            })
        );
    }

    #[test]
    fn required_str_rejects_empty() {
        assert_eq!(
            required_str(Some(""), "PUTBMP", "file_name"),
            Err(ValidationError::EmptyField {
                command: "PUTBMP",
                field: "file_name"
            })
        );
        assert_eq!(required_str(Some("A.BMP"), "PUTBMP", "file_name"), Ok("A.BMP"));
    }

    #[test]
    fn in_range_is_inclusive_and_rejects_nan() {
        assert!(in_range(1.0, 1.0, 10.0, "BLOCK", "x_multiplier").is_ok());
        assert!(in_range(10.0, 1.0, 10.0, "BLOCK", "x_multiplier").is_ok());
        assert!(in_range(0.999, 1.0, 10.0, "BLOCK", "x_multiplier").is_err());
        assert!(in_range(10.001, 1.0, 10.0, "BLOCK", "x_multiplier").is_err());
        assert!(in_range(f64::NAN, 1.0, 10.0, "BLOCK", "x_multiplier").is_err());
    }

    #[test]
    fn non_negative_allows_zero_only_when_finite() {
        assert_eq!(non_negative(0.0, "GAP", "offset"), Ok(0.0));
        assert_eq!(
            non_negative(-0.5, "GAP", "offset"),
            Err(ValidationError::Negative {
                command: "GAP",
                field: "offset"
            })
        );
        assert!(non_negative(f64::NAN, "GAP", "offset").is_err());
        assert!(non_negative(f64::INFINITY, "GAP", "offset").is_err());
    }

    #[test]
    fn at_least_is_inclusive() {
        assert_eq!(at_least(1, 1, "PRINT", "sets"), Ok(1));
        assert_eq!(
            at_least(0, 1, "PRINT", "sets"),
            Err(ValidationError::BelowMinimum {
                command: "PRINT",
                field: "sets",
                min: 1
            })
        );
    }

    #[test]
    fn boxed_and_shared_commands_render_like_the_inner_command() {
        use crate::{Cls, Print};

        let inner = Print::new().sets(2);
        let boxed: Box<dyn Command> = Box::new(inner.clone());
        let shared: Arc<dyn Command> = Arc::new(inner.clone());
        assert_eq!(boxed.render(), inner.render());
        assert_eq!(shared.render(), inner.render());

        let failing: Box<dyn Command> = Box::new(Print::new());
        assert_eq!(failing.render().unwrap_err().field(), "sets");
        assert_eq!(Box::new(Cls::new()).render(), Ok(b"CLS\r\n".to_vec()));
    }

    #[test]
    fn one_of_checks_membership() {
        assert_eq!(one_of(90, &[0, 90], "TEXT", "rotation"), Ok(90));
        assert!(one_of(45, &[0, 90], "TEXT", "rotation").is_err());
    }
}
