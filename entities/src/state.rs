//! Entity store state types.
//!
//! Every entity screen in the studio reads the same normalized shape: which
//! ids matched which query (`req`), the full record per id (`details`), and
//! whether a request is in flight (`loading`). This module defines that
//! shape once, generically over the record type.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Unique identifier for a CMS record.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EntityId(pub u64);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// One domain record type managed by the engine.
///
/// The engine makes no assumption about a record beyond id uniqueness; the
/// REST base path and the notification label are supplied here so that one
/// generic action/reducer pair can serve every entity type at composition
/// time.
pub trait Entity:
    Clone + std::fmt::Debug + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// REST base path of the entity collection, relative to the API root.
    const BASE_PATH: &'static str;

    /// Human-readable label used in notifications ("Format added").
    const LABEL: &'static str;

    /// The record's unique id.
    fn id(&self) -> EntityId;
}

/// Filter parameters for a list query.
///
/// Foreign-key filters keep their id order; they serialize to repeated
/// query parameters (`tag=1&tag=2`) the way the CMS expects them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Page number, 1-based.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
    /// Free-text search.
    pub q: Option<String>,
    /// Sort order (`asc`/`desc`).
    pub sort: Option<String>,
    /// Foreign-key filters: parameter name to ordered ids.
    pub filters: BTreeMap<String, Vec<EntityId>>,
}

impl ListQuery {
    /// Flatten the query into wire parameters.
    #[must_use]
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page".to_owned(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_owned(), limit.to_string()));
        }
        if let Some(q) = &self.q {
            params.push(("q".to_owned(), q.clone()));
        }
        if let Some(sort) = &self.sort {
            params.push(("sort".to_owned(), sort.clone()));
        }
        for (key, ids) in &self.filters {
            for id in ids {
                params.push((key.clone(), id.to_string()));
            }
        }
        params
    }
}

/// Record of one executed list query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// The filter parameters the query ran with.
    pub query: ListQuery,
    /// Returned entity ids, in server-provided order (defines display order).
    pub data: Vec<EntityId>,
    /// Server-side count of matching entities, independent of page size.
    pub total: i64,
}

/// Token identifying one issued network request for a store.
///
/// Only the latest-issued token may settle the loading flag, so overlapping
/// requests cannot stomp a newer request's loading state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestToken(u64);

impl RequestToken {
    /// The token after this one.
    #[must_use]
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Normalized store for one entity type.
///
/// Created empty at process start and kept for the process lifetime; a
/// [reset](EntityState::reset) returns it to the initial shape without
/// destroying the store itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityState<T> {
    /// Executed list queries, in insertion order; list views typically
    /// consult the most recent append.
    pub req: Vec<RequestDescriptor>,
    /// Detail cache: id to full record, last write wins.
    pub details: HashMap<EntityId, T>,
    /// True while any request for this entity type is outstanding.
    pub loading: bool,
    #[serde(skip)]
    last_issued: RequestToken,
}

impl<T> Default for EntityState<T> {
    fn default() -> Self {
        Self {
            req: Vec::new(),
            details: HashMap::new(),
            loading: false,
            last_issued: RequestToken::default(),
        }
    }
}

impl<T: Entity> EntityState<T> {
    /// Mark a new request as in flight and return its token.
    pub fn begin_request(&mut self) -> RequestToken {
        self.last_issued = self.last_issued.next();
        self.loading = true;
        self.last_issued
    }

    /// Settle the loading flag, but only if `token` is still the latest
    /// issued request.
    pub fn settle(&mut self, token: RequestToken) {
        if token == self.last_issued {
            self.loading = false;
        }
    }

    /// Merge records into the detail cache, overwriting by id.
    pub fn merge(&mut self, records: impl IntoIterator<Item = T>) {
        for record in records {
            self.details.insert(record.id(), record);
        }
    }

    /// Merge a single record into the detail cache.
    pub fn merge_one(&mut self, record: T) {
        self.details.insert(record.id(), record);
    }

    /// Append a request descriptor; never sorted, never deduplicated.
    pub fn record_request(&mut self, descriptor: RequestDescriptor) {
        self.req.push(descriptor);
    }

    /// Return to the initial empty shape, forcing the next read to refetch.
    ///
    /// The loading flag is left untouched: a reset says nothing about
    /// whether a request is still in flight.
    pub fn reset(&mut self) {
        self.req.clear();
        self.details.clear();
    }
}
