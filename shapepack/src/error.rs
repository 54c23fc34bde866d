use std::fmt::{Display, Formatter};

/// Failures a repacking run can end in. None of them are transient: each one is a deterministic
/// consequence of the input or the configuration, and each one aborts the whole run.
#[derive(Debug, Clone, PartialEq)]
pub enum RepackError {
    /// A path contains a drawing primitive that has no counterpart in [`PathElement`](crate::geometry::primitives::PathElement)
    UnsupportedElementKind { kind: String },
    /// A shape yields no sample points, its centroid and radius are undefined
    EmptyGeometry,
    /// A fill token could not be decomposed into a colour while a colour based row key is in use
    MalformedColorToken { token: String },
    /// A curve with more control points than the path mini-language can express
    UnrepresentableCurve { n_control_points: usize },
    /// The configuration violates one of its constraints
    InvalidConfig { reason: String },
}

impl Display for RepackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RepackError::UnsupportedElementKind { kind } => {
                write!(f, "unsupported path element kind: {kind}")
            }
            RepackError::EmptyGeometry => write!(f, "shape has no sample points"),
            RepackError::MalformedColorToken { token } => {
                write!(f, "malformed color token: {token:?}, expected #rrggbb")
            }
            RepackError::UnrepresentableCurve { n_control_points } => write!(
                f,
                "curve with {n_control_points} control points cannot be encoded as path data"
            ),
            RepackError::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for RepackError {}
