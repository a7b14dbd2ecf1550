//! Entity store actions.
//!
//! One closed sum type per entity store: commands express view intent,
//! events are the outcomes effects feed back. The generic parameter is the
//! action-type namespace - `EntityAction<Format>` and `EntityAction<Tag>`
//! are unrelated types dispatched to unrelated stores.

use crate::state::{EntityId, ListQuery, RequestDescriptor, RequestToken};

/// Action type for one entity store.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityAction<T> {
    // ── Commands (view intent) ─────────────────────────────────────────
    /// Seed the space's default records (POST `{base}/default`).
    SeedDefaults {
        /// Query recorded alongside the seeded descriptor.
        query: ListQuery,
    },

    /// Fetch a page of records (GET `{base}`).
    FetchList {
        /// Filter parameters for the list call.
        query: ListQuery,
    },

    /// Fetch one record by id (GET `{base}/{id}`).
    FetchById {
        /// Id of the record to fetch.
        id: EntityId,
    },

    /// Create a record (POST `{base}`). Success resets the store so the
    /// next list read refetches.
    Create {
        /// Record to create; the server assigns the id.
        data: T,
    },

    /// Update a record (PUT `{base}/{id}`).
    Update {
        /// Record to update; its id selects the resource.
        data: T,
    },

    /// Delete a record (DELETE `{base}/{id}`). Success resets the store.
    Delete {
        /// Id of the record to delete.
        id: EntityId,
    },

    // ── Outcome events (produced by effects) ───────────────────────────
    /// A list call settled successfully.
    ListLoaded {
        /// Token of the request that produced this outcome.
        token: RequestToken,
        /// Records returned by the server.
        records: Vec<T>,
        /// Descriptor for the executed query.
        descriptor: RequestDescriptor,
    },

    /// A single-record fetch settled successfully.
    RecordLoaded {
        /// Token of the request that produced this outcome.
        token: RequestToken,
        /// The fetched record.
        record: T,
    },

    /// A create call settled successfully.
    Created {
        /// Token of the request that produced this outcome.
        token: RequestToken,
    },

    /// An update call settled successfully.
    Updated {
        /// Token of the request that produced this outcome.
        token: RequestToken,
        /// The record as the server stored it.
        record: T,
    },

    /// A delete call settled successfully.
    Deleted {
        /// Token of the request that produced this outcome.
        token: RequestToken,
    },

    /// A call settled with a failure; `message` is already normalized.
    Failed {
        /// Token of the request that produced this outcome.
        token: RequestToken,
        /// User-displayable message.
        message: String,
    },

    // ── Direct store events (no network round-trip) ────────────────────
    /// Merge records into the detail cache, overwriting by id.
    RecordsArrived {
        /// Records to merge.
        records: Vec<T>,
    },

    /// Merge one record into the detail cache.
    RecordArrived {
        /// Record to merge.
        record: T,
    },

    /// Append a request descriptor.
    RequestRecorded {
        /// Descriptor to append.
        descriptor: RequestDescriptor,
    },

    /// Clear cached descriptors and details, forcing the next read to
    /// refetch. Leaves the loading flag untouched.
    Reset,
}
