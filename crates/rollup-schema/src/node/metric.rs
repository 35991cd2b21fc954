use crate::{
    node::{all_aggregatable, not_aggregatable_message, not_found_message, type_list},
    prelude::*,
};

///
/// MetricConfig
///
/// One source field and the aggregations to roll up for it. The document
/// key is `metrics`; `aggs` is accepted on input.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MetricConfig {
    pub field: String,

    #[serde(alias = "aggs")]
    pub metrics: Vec<MetricKind>,
}

impl MetricConfig {
    #[must_use]
    pub fn new(field: impl Into<String>, metrics: impl IntoIterator<Item = MetricKind>) -> Self {
        Self {
            field: field.into(),
            metrics: metrics.into_iter().collect(),
        }
    }

    // date fields are only acceptable when every requested aggregation
    // is order-based or a count
    fn accepts_date(&self) -> bool {
        !self.metrics.is_empty() && self.metrics.iter().all(|kind| kind.supports_date())
    }
}

impl ValidateNode for MetricConfig {
    fn validate_mappings(&self, snapshot: &FieldCapsSnapshot, errs: &mut ValidationReport) {
        let field = &self.field;
        let accepts_date = self.accepts_date();
        let expected = if accepts_date {
            "[numeric] or [date]"
        } else {
            "[numeric]"
        };

        let Some(types) = snapshot.types_of(field) else {
            errs.add(not_found_message(expected, field));
            return;
        };

        let compatible = types
            .keys()
            .all(|ty| ty.is_numeric() || (accepts_date && ty.is_date()));

        if !compatible {
            err!(
                errs,
                "the field [{field}] referenced by a metric group must be a {expected} type, found: {} for metrics [{}]",
                type_list(types),
                self.metrics
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        } else if !all_aggregatable(types) {
            errs.add(not_aggregatable_message(field));
        }
    }
}
