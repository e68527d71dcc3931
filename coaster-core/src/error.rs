/// Errors produced by the `coaster-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// The system clock reading does not fit in an `i64` count of
    /// nanoseconds since the Unix epoch (before 1677 or after 2262).
    #[error("system clock out of range for a nanosecond id")]
    ClockOutOfRange,
}
