use transitnet_core::{CoreError, StopId};

/// Errors that can occur within the routing layer.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("no stop with id {id} in this network")]
    UnknownStop { id: StopId },

    #[error("a stop named {name:?} is already registered")]
    DuplicateStop { name: String },

    #[error("{neighbour} is not a neighbour of {stop}")]
    NotNeighbours { stop: StopId, neighbour: StopId },

    #[error(transparent)]
    Core(#[from] CoreError),
}
