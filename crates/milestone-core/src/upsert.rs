//! Upsert Planning
//!
//! Decides whether a save is a create (POST to the collection) or an update
//! (PUT to the resource) and what body goes with it.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::domain::{MilestoneRecord, SaveOp};

/// Characters escaped in a path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Request to send for one save
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertPlan<'a> {
    pub op: SaveOp,
    pub path: String,
    /// Full record, serialized as-is
    pub body: &'a MilestoneRecord,
}

impl UpsertPlan<'_> {
    pub fn method(&self) -> &'static str {
        self.op.http_method()
    }
}

/// `collection/id`, with the id escaped as a single path segment
pub fn resource_path(collection: &str, id: &str) -> String {
    format!(
        "{}/{}",
        collection.trim_end_matches('/'),
        utf8_percent_encode(id, SEGMENT)
    )
}

/// Plan the request for saving `record` under `collection`
pub fn plan_upsert<'a>(record: &'a MilestoneRecord, collection: &str) -> UpsertPlan<'a> {
    let plan = match record {
        MilestoneRecord::Existing(milestone) => UpsertPlan {
            op: SaveOp::Update,
            path: resource_path(collection, &milestone.id),
            body: record,
        },
        MilestoneRecord::New(_) => UpsertPlan {
            op: SaveOp::Create,
            path: collection.trim_end_matches('/').to_string(),
            body: record,
        },
    };
    log::debug!("planned {} {}", plan.method(), plan.path);
    plan
}
