use thiserror::Error;

/// Errors raised by face construction and animation.
///
/// Both kinds are caller bugs rather than transient conditions: nothing is retried,
/// and the failing operation leaves no partial state behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FaceError {
    /// A `ClockConfig` field is out of range or inconsistent with another field.
    #[error("invalid clock config: `{field}` {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// A `TimeSample` field is outside its clock range.
    #[error("invalid time sample: {field} = {value} is out of range 0..{limit}")]
    InvalidTimeSample { field: &'static str, value: u32, limit: u32 },
}

impl FaceError {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        FaceError::InvalidConfig { field, reason: reason.into() }
    }
}
