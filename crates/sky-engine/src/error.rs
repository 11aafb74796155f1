use sky_graph::GraphError;
use sky_playback::PlaybackError;
use sky_route::RouteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("routing error: {0}")]
    Route(#[from] RouteError),

    #[error("playback error: {0}")]
    Playback(#[from] PlaybackError),
}

pub type EngineResult<T> = Result<T, EngineError>;
