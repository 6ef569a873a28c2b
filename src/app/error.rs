use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Graph loading error: {0}")]
    GraphLoad(#[from] crate::graph_loader::GraphLoaderError),
    #[error("Eulerian path error: {0}")]
    Path(#[from] crate::path::PathError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
    #[error("General error: {0}")]
    General(String),
}
