#![forbid(unsafe_code)]

//! Engine fault type.

/// Faults raised inside the shaping pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A directional run does not fit the character arena.
    RunOutOfBounds { start: usize, end: usize, len: usize },
    /// The pipeline panicked.
    Panicked { message: String },
}

impl ShapeError {
    pub(crate) fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        Self::Panicked { message }
    }
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RunOutOfBounds { start, end, len } => {
                write!(f, "run {}..{} out of bounds for {} characters", start, end, len)
            }
            Self::Panicked { message } => write!(f, "shaping panicked: {}", message),
        }
    }
}

impl std::error::Error for ShapeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = ShapeError::Panicked {
            message: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "shaping panicked: bad");

        let err = ShapeError::RunOutOfBounds {
            start: 2,
            end: 7,
            len: 4,
        };
        assert_eq!(err.to_string(), "run 2..7 out of bounds for 4 characters");
    }

    #[test]
    fn panic_payloads() {
        let err = ShapeError::from_panic(Box::new("static"));
        assert_eq!(err.to_string(), "shaping panicked: static");
        let err = ShapeError::from_panic(Box::new(String::from("owned")));
        assert_eq!(err.to_string(), "shaping panicked: owned");
        let err = ShapeError::from_panic(Box::new(7u8));
        assert_eq!(err.to_string(), "shaping panicked: unknown panic");
    }
}
