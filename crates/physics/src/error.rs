use thiserror::Error;

use crate::body::BodyHandle;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicsError {
    #[error("body {0} is not stored in this world")]
    UnknownBody(BodyHandle),
    #[error("body {0} is already registered")]
    AlreadyRegistered(BodyHandle),
    #[error("body {0} is not registered")]
    NotRegistered(BodyHandle),
}
