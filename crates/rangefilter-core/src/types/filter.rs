//! Range operators, predicates, and filter descriptions.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::number::RangeNumber;

/// A recognized range operator token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeOperator {
    /// Inclusive bounded range, `<min>..<max>`.
    Between,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
}

impl RangeOperator {
    /// Every operator, in the order they are documented to clients.
    pub const ALL: [RangeOperator; 5] = [
        RangeOperator::Between,
        RangeOperator::Gt,
        RangeOperator::Gte,
        RangeOperator::Lt,
        RangeOperator::Lte,
    ];

    /// Look up an operator by its query-string token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "between" => Some(Self::Between),
            "gt" => Some(Self::Gt),
            "gte" => Some(Self::Gte),
            "lt" => Some(Self::Lt),
            "lte" => Some(Self::Lte),
            _ => None,
        }
    }

    /// The query-string token for this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Between => "between",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
        }
    }
}

impl fmt::Display for RangeOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A predicate on a single field, ready to be materialized by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Predicate {
    /// `field == value`.
    Equals {
        /// Compared value.
        value: RangeNumber,
    },
    /// `field > value`.
    GreaterThan {
        /// Compared value.
        value: RangeNumber,
    },
    /// `field >= value`.
    GreaterThanOrEqual {
        /// Compared value.
        value: RangeNumber,
    },
    /// `field < value`.
    LessThan {
        /// Compared value.
        value: RangeNumber,
    },
    /// `field <= value`.
    LessThanOrEqual {
        /// Compared value.
        value: RangeNumber,
    },
    /// `field >= low AND field <= high`.
    Between {
        /// Inclusive lower bound.
        low: RangeNumber,
        /// Inclusive upper bound.
        high: RangeNumber,
    },
}

impl Predicate {
    /// The single-value comparison produced by `op`, or `None` for `between`.
    pub fn comparison(op: RangeOperator, value: RangeNumber) -> Option<Self> {
        match op {
            RangeOperator::Between => None,
            RangeOperator::Gt => Some(Self::GreaterThan { value }),
            RangeOperator::Gte => Some(Self::GreaterThanOrEqual { value }),
            RangeOperator::Lt => Some(Self::LessThan { value }),
            RangeOperator::Lte => Some(Self::LessThanOrEqual { value }),
        }
    }

    /// A bounded range; collapses to equality when both bounds are equal.
    pub fn between(low: RangeNumber, high: RangeNumber) -> Self {
        if low == high {
            Self::Equals { value: low }
        } else {
            Self::Between { low, high }
        }
    }

    /// The SQL comparison operator of a single-value predicate.
    pub fn sql_operator(&self) -> Option<&'static str> {
        match self {
            Self::Equals { .. } => Some("="),
            Self::GreaterThan { .. } => Some(">"),
            Self::GreaterThanOrEqual { .. } => Some(">="),
            Self::LessThan { .. } => Some("<"),
            Self::LessThanOrEqual { .. } => Some("<="),
            Self::Between { .. } => None,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Between { low, high } => write!(f, ">= {low} AND <= {high}"),
            Self::Equals { value }
            | Self::GreaterThan { value }
            | Self::GreaterThanOrEqual { value }
            | Self::LessThan { value }
            | Self::LessThanOrEqual { value } => {
                let op = match self {
                    Self::Equals { .. } => "==",
                    _ => self.sql_operator().unwrap_or_default(),
                };
                write!(f, "{op} {value}")
            }
        }
    }
}

/// Documentation entry for one filterable property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDescription {
    /// The internal property name.
    pub property: String,
    /// Parameter value type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the parameter is mandatory.
    pub required: bool,
    /// Whether the parameter accepts a nested collection of values.
    pub is_collection: bool,
}

impl FilterDescription {
    /// Description of a range parameter for `property`.
    pub fn range(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            kind: "array".to_string(),
            required: false,
            is_collection: true,
        }
    }
}
