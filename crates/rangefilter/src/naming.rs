//! Name converters.

use convert_case::{Case, Casing};

use rangefilter_core::config::filter::NameConverterKind;
use rangefilter_core::traits::NameConverter;

/// Parameter names are property names.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNameConverter;

impl NameConverter for IdentityNameConverter {
    fn normalize(&self, property: &str) -> String {
        property.to_string()
    }

    fn denormalize(&self, name: &str) -> String {
        name.to_string()
    }
}

/// External `snake_case` names for internal `camelCase` properties.
///
/// Each dot-separated segment is converted on its own, so
/// `related_dummy.birth_date` maps to `relatedDummy.birthDate`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnakeCaseNameConverter;

impl NameConverter for SnakeCaseNameConverter {
    fn normalize(&self, property: &str) -> String {
        convert_segments(property, Case::Snake)
    }

    fn denormalize(&self, name: &str) -> String {
        convert_segments(name, Case::Camel)
    }
}

fn convert_segments(path: &str, case: Case) -> String {
    path.split('.')
        .map(|segment| segment.to_case(case))
        .collect::<Vec<_>>()
        .join(".")
}

/// Build the converter selected in configuration.
pub fn from_kind(kind: NameConverterKind) -> std::sync::Arc<dyn NameConverter> {
    match kind {
        NameConverterKind::Identity => std::sync::Arc::new(IdentityNameConverter),
        NameConverterKind::SnakeCase => std::sync::Arc::new(SnakeCaseNameConverter),
    }
}
