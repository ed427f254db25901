//! Concurrent registry of report filters keyed by class tag.
//!
//! Registration is append-only: each tag owns an ordered list of filters and
//! nothing is ever removed. Lookups hand out an immutable snapshot of the
//! list so the stream loop can dispatch without holding the lock, which
//! also lets a filter register further filters from inside its callback.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::report::Report;

/// A registered report callback.
pub type Filter = Arc<dyn Fn(&Report) + Send + Sync>;

/// Snapshot of the filters registered for one tag, in registration order.
#[derive(Clone)]
pub struct FilterSet {
    filters: Arc<Vec<Filter>>,
}

impl FilterSet {
    /// Number of filters in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns `true` when the snapshot holds no filters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Invokes every filter with `report`, in registration order.
    pub fn dispatch(&self, report: &Report) {
        for filter in self.filters.iter() {
            filter(report);
        }
    }
}

impl fmt::Debug for FilterSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FilterSet")
            .field("len", &self.len())
            .finish()
    }
}

/// Mapping from class tag to the filters registered for it.
///
/// # Example
///
/// ```
/// use gpsd_session::FilterRegistry;
///
/// let registry = FilterRegistry::new();
/// registry.add("TPV", |report| assert_eq!(report.class().as_str(), "TPV"));
/// assert_eq!(registry.lookup("TPV").map(|set| set.len()), Some(1));
/// assert!(registry.lookup("SKY").is_none());
/// ```
#[derive(Default)]
pub struct FilterRegistry {
    filters: RwLock<HashMap<String, Arc<Vec<Filter>>>>,
}

impl FilterRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `filter` to the list for `tag`, creating the list if absent.
    pub fn add<F>(&self, tag: impl Into<String>, filter: F)
    where
        F: Fn(&Report) + Send + Sync + 'static,
    {
        let mut filters = self.filters.write().unwrap_or_else(PoisonError::into_inner);
        let entry = filters.entry(tag.into()).or_default();
        // Snapshots already handed out keep the previous list.
        Arc::make_mut(entry).push(Arc::new(filter));
    }

    /// Returns the filters registered for `tag`, or `None` when there are none.
    #[must_use]
    pub fn lookup(&self, tag: &str) -> Option<FilterSet> {
        let filters = self.filters.read().unwrap_or_else(PoisonError::into_inner);
        filters
            .get(tag)
            .filter(|list| !list.is_empty())
            .map(|list| FilterSet {
                filters: Arc::clone(list),
            })
    }

    /// Number of tags with at least one filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` when no filter has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for FilterRegistry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filters = self.filters.read().unwrap_or_else(PoisonError::into_inner);
        let mut map = formatter.debug_map();
        for (tag, list) in filters.iter() {
            map.entry(tag, &list.len());
        }
        map.finish()
    }
}
