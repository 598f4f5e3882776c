use thiserror::Error;

/// Errors raised before any star is sampled.
///
/// Generation either returns a complete field or one of these; there is no
/// partially filled result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GalaxyError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl GalaxyError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
