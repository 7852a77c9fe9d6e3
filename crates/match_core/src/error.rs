use thiserror::Error;

/// Failures reading or writing the match history file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("malformed row on line {line}: {reason}")]
    Malformed { line: u64, reason: String },
}

/// Form input rejected before anything is written
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Rounds must be valid integers!")]
    RoundsNotInteger,
    #[error("Please enter valid match data!")]
    InvalidMatchData,
    #[error("Please select a valid overtime winner (T or CT).")]
    InvalidOvertimeWinner,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
