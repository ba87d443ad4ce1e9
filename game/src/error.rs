/// Represents all error types that can occur in the game helpers.
#[derive(Debug)]
pub enum GameError {
    /// A contractually non-empty collection was empty, or an index/range
    /// argument was out of bounds.
    InvalidArgument(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_message() {
        let err = GameError::InvalidArgument("options list is empty".to_string());
        assert_eq!(err.to_string(), "Invalid argument: options list is empty");
    }
}
