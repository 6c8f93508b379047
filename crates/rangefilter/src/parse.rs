//! Operator parsing shared by every backend.
//!
//! Parsing is permissive: an invalid value only drops its own entry, so
//! one bad operator never discards the valid ones next to it.

use tracing::{debug, warn};

use rangefilter_core::types::{OperatorMap, Predicate, RangeNumber, RangeOperator};

/// Separator between the bounds of a `between` value.
pub const BETWEEN_SEPARATOR: &str = "..";

/// Parse every recognized operator of `operators`, in request order.
///
/// Unknown tokens and malformed values produce no predicate.
pub fn parse_range_operators(property: &str, operators: &OperatorMap) -> Vec<Predicate> {
    operators
        .iter()
        .filter_map(|(token, raw)| {
            let Some(op) = RangeOperator::from_token(token) else {
                debug!(property = %property, operator = %token, "Ignoring unknown range operator");
                return None;
            };
            parse_operator(op, raw)
        })
        .collect()
}

/// Parse one operator value.
pub fn parse_operator(op: RangeOperator, raw: &str) -> Option<Predicate> {
    match op {
        RangeOperator::Between => parse_between(raw),
        RangeOperator::Gt | RangeOperator::Gte | RangeOperator::Lt | RangeOperator::Lte => {
            let Some(value) = RangeNumber::parse(raw) else {
                warn!(
                    target: "rangefilter",
                    value = %raw,
                    "Invalid filter ignored: Invalid value for \"[{op}]\", expected number"
                );
                return None;
            };
            Predicate::comparison(op, value)
        }
    }
}

/// Parse `<min>..<max>`. Equal bounds collapse to an equality.
pub fn parse_between(raw: &str) -> Option<Predicate> {
    let parts: Vec<&str> = raw.split(BETWEEN_SEPARATOR).collect();

    let [low, high] = parts.as_slice() else {
        warn!(
            target: "rangefilter",
            value = %raw,
            "Invalid filter ignored: Invalid format for \"[between]\", expected \"<min>..<max>\""
        );
        return None;
    };

    let (Some(low), Some(high)) = (RangeNumber::parse(low), RangeNumber::parse(high)) else {
        warn!(
            target: "rangefilter",
            value = %raw,
            "Invalid filter ignored: Invalid values for \"[between]\" range, expected numbers"
        );
        return None;
    };

    Some(Predicate::between(low, high))
}

/// Parse a deprecated single value as an implicit equality.
pub fn parse_value(raw: &str) -> Option<Predicate> {
    let Some(value) = RangeNumber::parse(raw) else {
        warn!(
            target: "rangefilter",
            value = %raw,
            "Invalid filter ignored: Invalid value, expected number"
        );
        return None;
    };
    Some(Predicate::Equals { value })
}

/// Whether `operators` contains at least one recognized token.
pub fn has_range_operator(operators: &OperatorMap) -> bool {
    operators
        .keys()
        .any(|token| RangeOperator::from_token(token).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i64) -> RangeNumber {
        RangeNumber::Integer(v)
    }

    fn ops(pairs: &[(&str, &str)]) -> OperatorMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_between_distinct_bounds() {
        assert_eq!(
            parse_between("10..20"),
            Some(Predicate::Between {
                low: int(10),
                high: int(20)
            })
        );
    }

    #[test]
    fn test_between_equal_bounds() {
        assert_eq!(
            parse_between("15..15"),
            Some(Predicate::Equals { value: int(15) })
        );
    }

    #[test]
    fn test_between_keeps_reversed_bounds() {
        assert_eq!(
            parse_between("20..10"),
            Some(Predicate::Between {
                low: int(20),
                high: int(10)
            })
        );
    }

    #[test]
    fn test_between_malformed() {
        for raw in [
            "20..10..5",
            "10..",
            "..20",
            "abc..10",
            "10..abc",
            "",
            "10",
            "10-20",
        ] {
            assert_eq!(parse_between(raw), None, "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_between_signed_and_float_bounds() {
        assert_eq!(
            parse_between("-1.5..+2"),
            Some(Predicate::Between {
                low: RangeNumber::Float(-1.5),
                high: int(2)
            })
        );
    }

    #[test]
    fn test_between_triple_dot_splits_once() {
        assert_eq!(
            parse_between("1...5"),
            Some(Predicate::Between {
                low: int(1),
                high: RangeNumber::Float(0.5)
            })
        );
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(
            parse_operator(RangeOperator::Gt, "1"),
            Some(Predicate::GreaterThan { value: int(1) })
        );
        assert_eq!(
            parse_operator(RangeOperator::Gte, "1"),
            Some(Predicate::GreaterThanOrEqual { value: int(1) })
        );
        assert_eq!(
            parse_operator(RangeOperator::Lt, "1"),
            Some(Predicate::LessThan { value: int(1) })
        );
        assert_eq!(
            parse_operator(RangeOperator::Lte, "1"),
            Some(Predicate::LessThanOrEqual { value: int(1) })
        );
        for op in [
            RangeOperator::Gt,
            RangeOperator::Gte,
            RangeOperator::Lt,
            RangeOperator::Lte,
        ] {
            assert_eq!(parse_operator(op, "127.0.0.1"), None);
        }
    }

    #[test]
    fn test_unknown_operator_does_not_affect_siblings() {
        let parsed = parse_range_operators("price", &ops(&[("ne", "3"), ("gt", "1"), ("lt", "x")]));
        assert_eq!(parsed, vec![Predicate::GreaterThan { value: int(1) }]);
    }

    #[test]
    fn test_request_order_is_kept() {
        let parsed = parse_range_operators("price", &ops(&[("lte", "20"), ("gte", "10")]));
        assert_eq!(
            parsed,
            vec![
                Predicate::LessThanOrEqual { value: int(20) },
                Predicate::GreaterThanOrEqual { value: int(10) },
            ]
        );
    }

    #[test]
    fn test_deprecated_value() {
        assert_eq!(parse_value("42"), Some(Predicate::Equals { value: int(42) }));
        assert_eq!(parse_value("forty-two"), None);
    }

    #[test]
    fn test_has_range_operator() {
        assert!(has_range_operator(&ops(&[("foo", "1"), ("lt", "1")])));
        assert!(!has_range_operator(&ops(&[("foo", "1")])));
        assert!(!has_range_operator(&OperatorMap::new()));
    }
}
