//! Guarded one-time initialization for classifier tiers.

use std::sync::{Arc, OnceLock};

use crate::error::AnalyticsError;

type Loader<T> = Box<dyn Fn() -> Result<Arc<T>, AnalyticsError> + Send + Sync>;

/// A classifier tier that is built on first use.
///
/// The loader runs at most once, even under concurrent first calls: the
/// `OnceLock` makes racing callers wait for the winner and then read its
/// result. A failed load is stored as `None`, so an unavailable tier is not
/// retried on every call.
pub(crate) struct LazyTier<T: ?Sized> {
    name: &'static str,
    cell: OnceLock<Option<Arc<T>>>,
    loader: Loader<T>,
}

impl<T: ?Sized> LazyTier<T> {
    pub(crate) fn new<F>(name: &'static str, loader: F) -> Self
    where
        F: Fn() -> Result<Arc<T>, AnalyticsError> + Send + Sync + 'static,
    {
        Self {
            name,
            cell: OnceLock::new(),
            loader: Box::new(loader),
        }
    }

    /// Returns the loaded tier, loading it first if nobody has tried yet.
    pub(crate) fn get(&self) -> Option<&T> {
        self.cell
            .get_or_init(|| match (self.loader)() {
                Ok(tier) => {
                    tracing::debug!(tier = self.name, "classifier tier loaded");
                    Some(tier)
                }
                Err(e) => {
                    tracing::warn!(
                        tier = self.name,
                        error = %e,
                        "classifier tier unavailable; falling back"
                    );
                    None
                }
            })
            .as_deref()
    }

    #[cfg(test)]
    pub(crate) fn attempted(&self) -> bool {
        self.cell.get().is_some()
    }
}
