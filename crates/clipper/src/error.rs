#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "duration bounds must be positive: min={min}s ideal={ideal}s max={max}s"
    )]
    NonPositiveBounds { min: f64, ideal: f64, max: f64 },

    #[error(
        "duration bounds must satisfy min <= ideal <= max: min={min}s ideal={ideal}s max={max}s"
    )]
    MisorderedBounds { min: f64, ideal: f64, max: f64 },
}
