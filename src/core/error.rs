use thiserror::Error;

#[derive(Error, Debug)]
pub enum RendezvousError {
    #[error("Slot {index} out of range (collection holds {len} slots)")]
    OutOfRange { index: usize, len: usize },

    #[error("Invalid catalog entry: {0}")]
    InvalidCatalog(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RendezvousError>;

/// Bounds check shared by every slot-indexed collection
pub fn check_slot(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(RendezvousError::OutOfRange { index, len })
    }
}
