//! Request handlers

pub mod agents;
pub mod claim_handlers;
pub mod claims;
pub mod disasters;
pub mod health;
pub mod states;

use std::collections::BTreeMap;

use serde::Serialize;

use infra_store::RecordFilter;

use crate::dto::ListResponse;

/// Applies query-string criteria to a record collection
pub(crate) fn filtered<R>(records: &[R], params: BTreeMap<String, String>) -> ListResponse<R>
where
    R: Serialize + Clone,
{
    let filter = RecordFilter::from_pairs(params);
    ListResponse::new(filter.apply(records).into_iter().cloned().collect())
}
