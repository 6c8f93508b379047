//! SQL query target.

use indexmap::IndexMap;
use serde::Serialize;
use sqlx::{Postgres, QueryBuilder};
use tracing::debug;

use rangefilter_core::traits::RangeTarget;
use rangefilter_core::types::{Predicate, RangeNumber};

use crate::naming::QueryNameGenerator;

/// Alias of the root entity in every generated query.
pub const ROOT_ALIAS: &str = "o";

/// A `LEFT JOIN` added for a nested property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SqlJoin {
    /// Alias of the entity the association belongs to.
    pub parent_alias: String,
    /// Association name on the parent.
    pub association: String,
    /// Target entity (table) name.
    pub target: String,
    /// Alias of the joined entity.
    pub alias: String,
}

/// One `WHERE` condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SqlCondition {
    /// Qualified left-hand side, e.g. `o.price`.
    pub match_field: String,
    /// The predicate applied to it.
    pub predicate: Predicate,
    /// Base bind-parameter name. `between` binds `<name>_1` and `<name>_2`.
    pub parameter: String,
}

impl SqlCondition {
    /// Render with named parameters, e.g. `o.price >= :price_p1`.
    pub fn to_dql(&self) -> String {
        match self.predicate {
            Predicate::Between { .. } => format!(
                "{field} BETWEEN :{p}_1 AND :{p}_2",
                field = self.match_field,
                p = self.parameter
            ),
            predicate => format!(
                "{} {} :{}",
                self.match_field,
                predicate.sql_operator().unwrap_or("="),
                self.parameter
            ),
        }
    }
}

/// A `SELECT` over one entity accumulating range conditions.
#[derive(Debug, Clone)]
pub struct SqlQuery {
    entity: String,
    joins: Vec<SqlJoin>,
    conditions: Vec<SqlCondition>,
    parameters: IndexMap<String, RangeNumber>,
    names: QueryNameGenerator,
}

impl SqlQuery {
    /// Start a query over `entity`, aliased [`ROOT_ALIAS`].
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            joins: Vec::new(),
            conditions: Vec::new(),
            parameters: IndexMap::new(),
            names: QueryNameGenerator::new(),
        }
    }

    /// The root entity name.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Joins in the order they were added.
    pub fn joins(&self) -> &[SqlJoin] {
        &self.joins
    }

    /// Conditions in the order they were added.
    pub fn conditions(&self) -> &[SqlCondition] {
        &self.conditions
    }

    /// Bound values keyed by parameter name (without the leading `:`).
    pub fn parameters(&self) -> &IndexMap<String, RangeNumber> {
        &self.parameters
    }

    /// The `WHERE` body, `None` when no condition was added.
    pub fn where_clause(&self) -> Option<String> {
        if self.conditions.is_empty() {
            return None;
        }
        Some(
            self.conditions
                .iter()
                .map(SqlCondition::to_dql)
                .collect::<Vec<_>>()
                .join(" AND "),
        )
    }

    /// Render the query with named parameters.
    ///
    /// `SELECT o FROM Dummy o LEFT JOIN o.relatedDummy relatedDummy_a1 WHERE ...`
    pub fn dql(&self) -> String {
        let mut dql = format!("SELECT {ROOT_ALIAS} FROM {} {ROOT_ALIAS}", self.entity);

        for join in &self.joins {
            dql.push_str(&format!(
                " LEFT JOIN {}.{} {}",
                join.parent_alias, join.association, join.alias
            ));
        }

        if let Some(clause) = self.where_clause() {
            dql.push_str(" WHERE ");
            dql.push_str(&clause);
        }

        dql
    }

    /// Append the joins to `builder`.
    ///
    /// Associations are joined on `<alias>.id = <parent>.<association>_id`.
    pub fn push_joins(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        for join in &self.joins {
            builder.push(format!(
                " LEFT JOIN {target} {alias} ON {alias}.id = {parent}.{association}_id",
                target = join.target,
                alias = join.alias,
                parent = join.parent_alias,
                association = join.association,
            ));
        }
    }

    /// Append ` WHERE ...` with positional binds to `builder`.
    pub fn push_where(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        for (index, condition) in self.conditions.iter().enumerate() {
            builder.push(if index == 0 { " WHERE " } else { " AND " });
            builder.push(&condition.match_field);

            match condition.predicate {
                Predicate::Between { low, high } => {
                    builder.push(" BETWEEN ");
                    push_number(builder, low);
                    builder.push(" AND ");
                    push_number(builder, high);
                }
                Predicate::Equals { value }
                | Predicate::GreaterThan { value }
                | Predicate::GreaterThanOrEqual { value }
                | Predicate::LessThan { value }
                | Predicate::LessThanOrEqual { value } => {
                    builder.push(" ");
                    builder.push(condition.predicate.sql_operator().unwrap_or("="));
                    builder.push(" ");
                    push_number(builder, value);
                }
            }
        }
    }

    /// Build an executable `SELECT o.* FROM <entity> o ...` query.
    pub fn to_query_builder(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(format!(
            "SELECT {ROOT_ALIAS}.* FROM {} {ROOT_ALIAS}",
            self.entity
        ));
        self.push_joins(&mut builder);
        self.push_where(&mut builder);
        builder
    }
}

fn push_number(builder: &mut QueryBuilder<'_, Postgres>, value: RangeNumber) {
    match value {
        RangeNumber::Integer(v) => builder.push_bind(v),
        RangeNumber::Float(v) => builder.push_bind(v),
    };
}

impl RangeTarget for SqlQuery {
    fn root_alias(&self) -> &str {
        ROOT_ALIAS
    }

    fn join(&mut self, parent_alias: &str, association: &str, target_entity: &str) -> String {
        if let Some(existing) = self
            .joins
            .iter()
            .find(|j| j.parent_alias == parent_alias && j.association == association)
        {
            return existing.alias.clone();
        }

        let alias = self.names.generate_join_alias(association);
        debug!(parent = %parent_alias, association = %association, alias = %alias, "Adding join");

        self.joins.push(SqlJoin {
            parent_alias: parent_alias.to_string(),
            association: association.to_string(),
            target: target_entity.to_string(),
            alias: alias.clone(),
        });
        alias
    }

    fn add_predicate(&mut self, field: &str, match_field: &str, predicate: Predicate) {
        let parameter = self.names.generate_parameter_name(field);

        match predicate {
            Predicate::Between { low, high } => {
                self.parameters.insert(format!("{parameter}_1"), low);
                self.parameters.insert(format!("{parameter}_2"), high);
            }
            Predicate::Equals { value }
            | Predicate::GreaterThan { value }
            | Predicate::GreaterThanOrEqual { value }
            | Predicate::LessThan { value }
            | Predicate::LessThanOrEqual { value } => {
                self.parameters.insert(parameter.clone(), value);
            }
        }

        let condition = SqlCondition {
            match_field: match_field.to_string(),
            predicate,
            parameter,
        };
        debug!(condition = %condition.to_dql(), "Adding SQL condition");
        self.conditions.push(condition);
    }
}
