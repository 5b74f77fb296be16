use crate::error::Error;

/// Caller-supplied duration bounds for candidate generation.
///
/// `ideal_duration_sec` is carried for downstream ranking ("closeness to
/// ideal" is a scoring signal) and is never consulted by the boundary
/// search itself, which only enforces `min`/`max`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CandidateOptions {
    pub min_duration_sec: f64,
    pub ideal_duration_sec: f64,
    pub max_duration_sec: f64,
}

impl Default for CandidateOptions {
    fn default() -> Self {
        Self {
            min_duration_sec: 10.0,
            ideal_duration_sec: 30.0,
            max_duration_sec: 60.0,
        }
    }
}

impl CandidateOptions {
    pub fn new(min_duration_sec: f64, ideal_duration_sec: f64, max_duration_sec: f64) -> Self {
        Self {
            min_duration_sec,
            ideal_duration_sec,
            max_duration_sec,
        }
    }

    /// Reject misconfigured bounds before any scanning happens. The scan
    /// assumes `0 < min <= ideal <= max` and is undefined outside it.
    pub fn validate(&self) -> Result<(), Error> {
        let (min, ideal, max) = (
            self.min_duration_sec,
            self.ideal_duration_sec,
            self.max_duration_sec,
        );

        if min <= 0.0 || ideal <= 0.0 || max <= 0.0 {
            return Err(Error::NonPositiveBounds { min, ideal, max });
        }
        if min > ideal || ideal > max {
            return Err(Error::MisorderedBounds { min, ideal, max });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_are_valid() {
        assert!(CandidateOptions::default().validate().is_ok());
    }

    #[test]
    fn equal_bounds_are_valid() {
        assert!(CandidateOptions::new(10.0, 10.0, 10.0).validate().is_ok());
    }

    #[test]
    fn min_above_max_is_rejected() {
        let err = CandidateOptions::new(20.0, 20.0, 10.0).validate().unwrap_err();
        assert!(matches!(err, Error::MisorderedBounds { .. }));
    }

    #[test]
    fn min_above_ideal_is_rejected() {
        let err = CandidateOptions::new(20.0, 15.0, 30.0).validate().unwrap_err();
        assert!(matches!(err, Error::MisorderedBounds { .. }));
    }

    #[test]
    fn ideal_above_max_is_rejected() {
        let err = CandidateOptions::new(5.0, 40.0, 30.0).validate().unwrap_err();
        assert!(matches!(err, Error::MisorderedBounds { .. }));
    }

    #[test]
    fn non_positive_bounds_are_rejected() {
        let err = CandidateOptions::new(0.0, 5.0, 10.0).validate().unwrap_err();
        assert!(matches!(err, Error::NonPositiveBounds { .. }));

        let err = CandidateOptions::new(2.0, 5.0, -1.0).validate().unwrap_err();
        assert!(matches!(err, Error::NonPositiveBounds { .. }));
    }
}
