use thiserror::Error;

/// Everything that can go wrong around a frame.
///
/// None of these escape a frame callback: the controller downgrades them to
/// "skip this frame" or "stop the loop".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// No surface attached yet, or it was detached.
    #[error("drawing surface is not attached")]
    SurfaceUnavailable,

    #[error("unknown visualization `{0}`")]
    InvalidVariant(String),

    /// The host refused to schedule another frame.
    #[error("could not schedule next frame: {0}")]
    SchedulingFailure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            EngineError::InvalidVariant("knn".into()).to_string(),
            "unknown visualization `knn`"
        );
        assert_eq!(
            EngineError::SurfaceUnavailable.to_string(),
            "drawing surface is not attached"
        );
    }
}
