//! The publication platform's record types.
//!
//! Each type implements [`Entity`], which is all the engine needs: an id,
//! the REST base path, and a notification label. Field sets follow the CMS
//! API; anything the studio never edits stays off the struct.

use crate::state::{Entity, EntityId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Presentation format of a post (article, fact check, ...).
///
/// Formats are seedable: a fresh space gets its defaults via
/// POST `/core/formats/default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Format {
    /// Unique id, server-assigned.
    #[serde(default)]
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Optional description.
    #[serde(default)]
    pub description: String,
    /// Owning space.
    #[serde(default)]
    pub space_id: u64,
}

impl Entity for Format {
    const BASE_PATH: &'static str = "/core/formats";
    const LABEL: &'static str = "Format";

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Free-form tag attached to posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique id, server-assigned.
    #[serde(default)]
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Optional description.
    #[serde(default)]
    pub description: String,
    /// Owning space.
    #[serde(default)]
    pub space_id: u64,
}

impl Entity for Tag {
    const BASE_PATH: &'static str = "/core/tags";
    const LABEL: &'static str = "Tag";

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Hierarchical category attached to posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique id, server-assigned.
    #[serde(default)]
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Optional description.
    #[serde(default)]
    pub description: String,
    /// Parent category, if nested.
    #[serde(default)]
    pub parent_id: Option<EntityId>,
    /// Featured image.
    #[serde(default)]
    pub medium_id: Option<EntityId>,
    /// Owning space.
    #[serde(default)]
    pub space_id: u64,
}

impl Entity for Category {
    const BASE_PATH: &'static str = "/core/categories";
    const LABEL: &'static str = "Category";

    fn id(&self) -> EntityId {
        self.id
    }
}

/// One permission grant inside a policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    /// Resource the permission applies to (posts, tags, ...).
    pub resource: String,
    /// Allowed actions (get, create, update, delete).
    #[serde(default)]
    pub actions: Vec<String>,
}

/// Access policy mapping users to permitted actions.
///
/// Policies are seedable like formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Unique id, server-assigned.
    #[serde(default)]
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: String,
    /// Permission grants.
    #[serde(default)]
    pub permissions: Vec<Permission>,
    /// Owning space.
    #[serde(default)]
    pub space_id: u64,
}

impl Entity for Policy {
    const BASE_PATH: &'static str = "/core/policies";
    const LABEL: &'static str = "Policy";

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Uploaded media asset (image, document).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medium {
    /// Unique id, server-assigned.
    #[serde(default)]
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// MIME type.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Public URL of the asset.
    #[serde(default)]
    pub url: String,
    /// Caption shown under the asset.
    #[serde(default)]
    pub caption: String,
    /// Alternative text.
    #[serde(default)]
    pub alt_text: String,
    /// Upload timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Owning space.
    #[serde(default)]
    pub space_id: u64,
}

impl Entity for Medium {
    const BASE_PATH: &'static str = "/core/media";
    const LABEL: &'static str = "Medium";

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Editorial post, the studio's central record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique id, server-assigned.
    #[serde(default)]
    pub id: EntityId,
    /// Headline.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Publish status (draft, ready, publish).
    #[serde(default)]
    pub status: String,
    /// Short summary shown in lists.
    #[serde(default)]
    pub excerpt: String,
    /// Publication timestamp, absent while drafted.
    #[serde(default)]
    pub published_date: Option<DateTime<Utc>>,
    /// Presentation format.
    #[serde(default)]
    pub format_id: Option<EntityId>,
    /// Attached tags, in selection order.
    #[serde(default)]
    pub tag_ids: Vec<EntityId>,
    /// Attached categories, in selection order.
    #[serde(default)]
    pub category_ids: Vec<EntityId>,
    /// Fact-check claims reviewed by this post.
    #[serde(default)]
    pub claim_ids: Vec<EntityId>,
    /// Owning space.
    #[serde(default)]
    pub space_id: u64,
}

impl Entity for Post {
    const BASE_PATH: &'static str = "/core/posts";
    const LABEL: &'static str = "Post";

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Verdict scale entry for fact checks (true, misleading, false, ...).
///
/// Ratings are seedable like formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Unique id, server-assigned.
    #[serde(default)]
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Optional description.
    #[serde(default)]
    pub description: String,
    /// Position on the verdict scale; higher is more true.
    #[serde(default)]
    pub numeric_value: i32,
    /// Badge image.
    #[serde(default)]
    pub medium_id: Option<EntityId>,
    /// Owning space.
    #[serde(default)]
    pub space_id: u64,
}

impl Entity for Rating {
    const BASE_PATH: &'static str = "/fact-check/ratings";
    const LABEL: &'static str = "Rating";

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Person or organisation that made a claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claimant {
    /// Unique id, server-assigned.
    #[serde(default)]
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Optional description.
    #[serde(default)]
    pub description: String,
    /// Short descriptor shown next to the name.
    #[serde(default)]
    pub tag_line: String,
    /// Portrait image.
    #[serde(default)]
    pub medium_id: Option<EntityId>,
    /// Owning space.
    #[serde(default)]
    pub space_id: u64,
}

impl Entity for Claimant {
    const BASE_PATH: &'static str = "/fact-check/claimants";
    const LABEL: &'static str = "Claimant";

    fn id(&self) -> EntityId {
        self.id
    }
}

/// A checked claim: who said what, and the verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique id, server-assigned.
    #[serde(default)]
    pub id: EntityId,
    /// The claim text.
    pub claim: String,
    /// URL slug.
    pub slug: String,
    /// When the claim was made.
    #[serde(default)]
    pub claim_date: Option<DateTime<Utc>>,
    /// When the claim was checked.
    #[serde(default)]
    pub checked_date: Option<DateTime<Utc>>,
    /// Where the claim appeared.
    #[serde(default)]
    pub claim_sources: String,
    /// Who made the claim.
    pub claimant_id: EntityId,
    /// Verdict.
    pub rating_id: EntityId,
    /// Review notes.
    #[serde(default)]
    pub review: String,
    /// Sources backing the review.
    #[serde(default)]
    pub review_sources: String,
    /// Owning space.
    #[serde(default)]
    pub space_id: u64,
}

impl Entity for Claim {
    const BASE_PATH: &'static str = "/fact-check/claims";
    const LABEL: &'static str = "Claim";

    fn id(&self) -> EntityId {
        self.id
    }
}
