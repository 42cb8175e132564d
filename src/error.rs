use alloc::string::String;

/// Errors raised while configuring a controller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

/// A failed `loadItems` call, as reported by the host.
///
/// Load failures never propagate out of the controller: they are recorded in
/// [`crate::LoadStatus::Failed`] and the page can be requested again.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("failed to load items: {message}")]
pub struct LoadError {
    pub message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<&str> for LoadError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for LoadError {
    fn from(message: String) -> Self {
        Self { message }
    }
}
