//! Composite domain errors

use thiserror::Error;

use core_kernel::PortError;

use crate::publisher::PublishError;

/// Errors returned by the composite service
#[derive(Debug, Error)]
pub enum CompositeError {
    /// A downstream call failed; the classification is kept as is
    #[error(transparent)]
    Port(#[from] PortError),

    /// A deletion event could not be published
    #[error(transparent)]
    Publish(#[from] PublishError),
}

impl CompositeError {
    /// The downstream classification, when the failure came from a port
    pub fn port_error(&self) -> Option<&PortError> {
        match self {
            CompositeError::Port(error) => Some(error),
            CompositeError::Publish(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.port_error().is_some_and(PortError::is_not_found)
    }
}
