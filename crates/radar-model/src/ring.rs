//! Concentric rings

use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// A concentric band of the radar (Adopt, Trial, Assess, Hold, ...)
///
/// Rings are created once per distinct name during assembly and shared by
/// every blip placed in them, so they are handed out as `Arc<Ring>`.
/// `order` is the 0-based position of the ring's first appearance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Ring {
    name: String,
    order: usize,
}

impl Ring {
    /// Create ring with name and order index
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, order: usize) -> Self {
        Self {
            name: name.into(),
            order,
        }
    }

    /// Ring name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 0-based order, innermost first
    #[inline]
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }
}

impl Display for Ring {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.order)
    }
}
