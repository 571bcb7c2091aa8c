/// Errors returned by the simulation when a caller hands it unusable numbers.
///
/// Every operation that returns one of these leaves the match untouched.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid config value for {field} : {value}")]
    InvalidConfig { field: &'static str, value: f32 },

    #[error("Non-finite {what} : ({x}, {y})")]
    NonFinite { what: &'static str, x: f32, y: f32 },

    #[error("Invalid frame delta : {0}")]
    InvalidDelta(f32),
}

/// Reject a coordinate pair holding NaN or an infinity.
pub(crate) fn ensure_finite(what: &'static str, x: f32, y: f32) -> Result<(), Error> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        log::warn!("Rejected non-finite {what} ({x}, {y})");
        Err(Error::NonFinite { what, x, y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite_accepts_numbers() {
        assert_eq!(ensure_finite("pointer", 10.0, -3.5), Ok(()));
    }

    #[test]
    fn test_ensure_finite_rejects_nan_and_infinity() {
        assert!(matches!(
            ensure_finite("pointer", f32::NAN, 0.0),
            Err(Error::NonFinite { what: "pointer", .. })
        ));
        assert!(ensure_finite("velocity", 0.0, f32::INFINITY).is_err());
        assert!(ensure_finite("velocity", f32::NEG_INFINITY, 1.0).is_err());
    }
}
