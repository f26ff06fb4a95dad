//! Load phases for view-facing fetch state.

use serde::{Deserialize, Serialize};

/// Lifecycle of a fetch as the view layer sees it.
///
/// Each new fetch resets the phase to [`Loading`](Self::Loading); it settles
/// to [`Ready`](Self::Ready) or [`Failed`](Self::Failed). There is no
/// cancellation, so an abandoned fetch still settles eventually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoadPhase {
    /// No fetch has been started yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch completed successfully.
    Ready,
    /// The last fetch failed; a user-facing message accompanies this phase.
    Failed,
}

impl LoadPhase {
    /// Whether a fetch is currently in flight.
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether the last fetch settled, successfully or not.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        matches!(self, Self::Ready | Self::Failed)
    }
}
