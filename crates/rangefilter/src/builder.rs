//! The range predicate builder.

use tracing::debug;

use rangefilter_core::traits::RangeTarget;
use rangefilter_core::types::OperatorMap;

use crate::parse::parse_range_operators;

/// Emit the predicates of `operators` into `target`.
///
/// `match_field` is used verbatim as the left-hand side; `field` is the
/// logical property name the target uses for parameter naming. Entries
/// that fail to parse are skipped. Returns the number of predicates added.
pub fn apply_range(
    field: &str,
    match_field: &str,
    operators: &OperatorMap,
    target: &mut dyn RangeTarget,
) -> usize {
    let predicates = parse_range_operators(field, operators);

    for predicate in &predicates {
        debug!(field = %field, match_field = %match_field, predicate = %predicate, "Applying range predicate");
        target.add_predicate(field, match_field, *predicate);
    }

    predicates.len()
}
