//! Tagged fetch lifecycle shared by the data-backed screens.
//!
//! DESIGN
//! ======
//! One union replaces the loading/error boolean piles: a view is `Idle`,
//! `Loading`, `Loaded`, or `Failed`, never an impossible mix. `Loading` and
//! `Failed` carry the previous payload so a refetch or a failed refetch can
//! keep showing the last good data.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

/// Lifecycle of one fetched resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight; holds the prior payload when this is a refetch.
    Loading(Option<T>),
    /// The latest request succeeded.
    Loaded(T),
    /// The latest request failed; the prior payload is retained.
    Failed { error: String, prior: Option<T> },
}

impl<T> FetchState<T> {
    /// Enter `Loading`, carrying forward whatever payload is on hand.
    pub fn begin(self) -> Self {
        match self {
            Self::Idle => Self::Loading(None),
            Self::Loading(prior) => Self::Loading(prior),
            Self::Loaded(data) => Self::Loading(Some(data)),
            Self::Failed { prior, .. } => Self::Loading(prior),
        }
    }

    /// Resolve the in-flight request successfully.
    pub fn succeed(data: T) -> Self {
        Self::Loaded(data)
    }

    /// Resolve the in-flight request with an error, retaining prior data.
    pub fn fail(self, error: impl Into<String>) -> Self {
        let prior = match self {
            Self::Idle => None,
            Self::Loading(prior) => prior,
            Self::Loaded(data) => Some(data),
            Self::Failed { prior, .. } => prior,
        };
        Self::Failed { error: error.into(), prior }
    }

    /// The most recent payload, regardless of lifecycle position.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Idle => None,
            Self::Loading(prior) => prior.as_ref(),
            Self::Loaded(data) => Some(data),
            Self::Failed { prior, .. } => prior.as_ref(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    /// The latest failure message, if the last request failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}
