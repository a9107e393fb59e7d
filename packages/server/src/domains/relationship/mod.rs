//! Relationship domain - the family-linkage graph.
//!
//! A relationship is a directed edge from a requester to a target user
//! with a request/accept/reject lifecycle. Pending requests expire after
//! seven days; expired requests drop out of the target's pending list but
//! stay visible to the requester.

pub mod actions;
pub mod data;
pub mod models;

pub use data::{CreateRelationshipRequest, RelationshipResponse, UpdateRelationshipRequest};
pub use models::{PrivacyLevel, Relationship, RelationshipStatus};
