use std::path::PathBuf;

/// Errors raised while loading options or preparing a spin.
#[derive(Debug, thiserror::Error)]
pub enum RaffleError {
    #[error("failed to read file {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no options found in file {}", path.display())]
    EmptyOptions { path: PathBuf },

    #[error("cannot build a ring from zero values")]
    EmptyRing,

    #[error("invalid step range: min_steps ({min}) must be at least 1 and below max_steps ({max})")]
    InvalidStepRange { min: usize, max: usize },

    #[error("window of {width} is too wide: at most {max} options can be shown on each side")]
    WindowTooWide { width: usize, max: usize },
}
