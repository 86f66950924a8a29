//! Record filtering and projection.

use crate::listings::query::Query;
use crate::listings::record::{ProjectedRecord, Record};

/// Apply the furnished and price filters, then project the survivors.
///
/// Order is preserved. Never fails: records with unusable fields are dropped
/// by the predicates or carried through with NaN values.
pub fn filter_houses(records: &[Record], query: &Query) -> Vec<ProjectedRecord> {
    let furnished_only = query.furnished_only();
    let max_price = query.max_price();

    records
        .iter()
        .filter(|record| !furnished_only || record.is_furnished())
        .filter(|record| max_price.map_or(true, |limit| record.price() < limit))
        .map(Record::project)
        .collect()
}
