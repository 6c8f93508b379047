//! Parameter and join alias name generation.

/// Generates unique bind-parameter names and join aliases for one query.
///
/// Counters are shared across every property of the query, so names never
/// collide and repeated operators on one property get increasing suffixes.
#[derive(Debug, Clone)]
pub struct QueryNameGenerator {
    next_parameter: usize,
    next_join: usize,
}

impl QueryNameGenerator {
    /// Create a generator whose first names end in `1`.
    pub fn new() -> Self {
        Self {
            next_parameter: 1,
            next_join: 1,
        }
    }

    /// `price` -> `price_p1`, `relatedDummy.age` -> `relatedDummy_age_p2`.
    pub fn generate_parameter_name(&mut self, name: &str) -> String {
        let generated = format!("{}_p{}", name.replace('.', "_"), self.next_parameter);
        self.next_parameter += 1;
        generated
    }

    /// `relatedDummy` -> `relatedDummy_a1`.
    pub fn generate_join_alias(&mut self, association: &str) -> String {
        let generated = format!("{}_a{}", association, self.next_join);
        self.next_join += 1;
        generated
    }
}

impl Default for QueryNameGenerator {
    fn default() -> Self {
        Self::new()
    }
}
