use homepage_domain::ContainerId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("container not found: {0}")]
    MissingContainer(ContainerId),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
