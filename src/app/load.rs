//! Load state of the favorites list and the one-shot load request latch.
//!
//! The data source pushes [`LoadState`] transitions. Observing `Loading` must
//! issue at most one `load all` request per screen lifetime, no matter how often
//! the state is re-observed; [`LoadRequestLatch`] enforces that explicitly.

use crate::domain::Favorite;

/// Three-way outcome of an asynchronous catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Waiting for the data source.
    #[default]
    Loading,
    /// Favorites delivered by the data source, in display order.
    Success(Vec<Favorite>),
    /// The data source failed; the message is shown verbatim.
    Error(String),
}

impl LoadState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the loaded favorites, if any.
    #[must_use]
    pub fn favorites(&self) -> Option<&[Favorite]> {
        match self {
            Self::Success(items) => Some(items),
            Self::Loading | Self::Error(_) => None,
        }
    }
}

/// One-shot guard for the initial `load all` request.
///
/// Fires once; later calls to [`LoadRequestLatch::try_fire`] return `false`
/// until [`LoadRequestLatch::rearm`] is called for an explicit refresh.
///
/// # Examples
///
/// ```
/// use jetcatalog::app::load::LoadRequestLatch;
///
/// let mut latch = LoadRequestLatch::default();
/// assert!(latch.try_fire());
/// assert!(!latch.try_fire());
///
/// latch.rearm();
/// assert!(latch.try_fire());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadRequestLatch {
    fired: bool,
}

impl LoadRequestLatch {
    /// Returns `true` exactly once per arming.
    pub fn try_fire(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }

    /// Allows the next [`LoadRequestLatch::try_fire`] to succeed again.
    pub fn rearm(&mut self) {
        self.fired = false;
    }

    #[must_use]
    pub const fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ide;

    #[test]
    fn initial_state_is_loading() {
        assert!(LoadState::default().is_loading());
        assert_eq!(LoadState::default().favorites(), None);
    }

    #[test]
    fn only_success_exposes_favorites() {
        let items = vec![Favorite::from(Ide::new(1, "Aqua", "", "", "IDE"))];
        assert_eq!(LoadState::Success(items.clone()).favorites(), Some(items.as_slice()));
        assert_eq!(LoadState::Error("boom".to_string()).favorites(), None);
    }

    #[test]
    fn latch_fires_once_until_rearmed() {
        let mut latch = LoadRequestLatch::default();
        assert!(!latch.has_fired());
        assert!(latch.try_fire());
        for _ in 0..5 {
            assert!(!latch.try_fire());
        }
        assert!(latch.has_fired());
        latch.rearm();
        assert!(!latch.has_fired());
        assert!(latch.try_fire());
    }
}
