use crate::{
    DEFAULT_TIME_ZONE,
    node::{all_aggregatable, not_aggregatable_message, not_found_message, type_list},
    prelude::*,
};

///
/// GroupConfig
///
/// Grouping dimensions. The date histogram is mandatory; histogram and
/// terms dimensions are optional.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GroupConfig {
    pub date_histogram: DateHistogramGroup,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub histogram: Option<HistogramGroup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<TermsGroup>,
}

impl GroupConfig {
    #[must_use]
    pub const fn new(date_histogram: DateHistogramGroup) -> Self {
        Self {
            date_histogram,
            histogram: None,
            terms: None,
        }
    }

    #[must_use]
    pub fn with_histogram(mut self, histogram: HistogramGroup) -> Self {
        self.histogram = Some(histogram);
        self
    }

    #[must_use]
    pub fn with_terms(mut self, terms: TermsGroup) -> Self {
        self.terms = Some(terms);
        self
    }

    /// Every source field referenced by any dimension, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.date_histogram.field.as_str())
            .chain(self.histogram.iter().flat_map(|h| h.fields.iter()).map(String::as_str))
            .chain(self.terms.iter().flat_map(|t| t.fields.iter()).map(String::as_str))
    }
}

impl ValidateNode for GroupConfig {
    fn validate_mappings(&self, snapshot: &FieldCapsSnapshot, errs: &mut ValidationReport) {
        self.date_histogram.validate_mappings(snapshot, errs);

        if let Some(histogram) = &self.histogram {
            histogram.validate_mappings(snapshot, errs);
        }
        if let Some(terms) = &self.terms {
            terms.validate_mappings(snapshot, errs);
        }
    }
}

///
/// DateHistogramGroup
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct DateHistogramGroup {
    pub field: String,
    pub interval: TimeValue,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<TimeValue>,

    #[serde(default = "default_time_zone")]
    pub time_zone: String,
}

fn default_time_zone() -> String {
    DEFAULT_TIME_ZONE.to_string()
}

impl DateHistogramGroup {
    #[must_use]
    pub fn new(field: impl Into<String>, interval: TimeValue) -> Self {
        Self {
            field: field.into(),
            interval,
            delay: None,
            time_zone: default_time_zone(),
        }
    }

    #[must_use]
    pub const fn with_delay(mut self, delay: TimeValue) -> Self {
        self.delay = Some(delay);
        self
    }

    #[must_use]
    pub fn with_time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = time_zone.into();
        self
    }
}

impl ValidateNode for DateHistogramGroup {
    fn validate_mappings(&self, snapshot: &FieldCapsSnapshot, errs: &mut ValidationReport) {
        let field = &self.field;

        let Some(types) = snapshot.types_of(field) else {
            errs.add(not_found_message("[date]", field));
            return;
        };

        // must be date, and only date, in every index
        if types.len() != 1 || !types.contains_key(&FieldType::Date) {
            err!(
                errs,
                "the field [{field}] referenced by a date_histogram group must be a [date] type across all indices in the index pattern, found: {}",
                type_list(types)
            );
        } else if !all_aggregatable(types) {
            errs.add(not_aggregatable_message(field));
        }
    }
}

///
/// HistogramGroup
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct HistogramGroup {
    pub fields: Vec<String>,
    pub interval: u64,
}

impl HistogramGroup {
    #[must_use]
    pub fn new<I, S>(fields: I, interval: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            interval,
        }
    }
}

impl ValidateNode for HistogramGroup {
    fn validate_mappings(&self, snapshot: &FieldCapsSnapshot, errs: &mut ValidationReport) {
        for field in &self.fields {
            let Some(types) = snapshot.types_of(field) else {
                errs.add(not_found_message("[numeric]", field));
                continue;
            };

            if !types.keys().all(FieldType::is_numeric) {
                err!(
                    errs,
                    "the field [{field}] referenced by a histogram group must be a [numeric] type, found: {}",
                    type_list(types)
                );
            } else if !all_aggregatable(types) {
                errs.add(not_aggregatable_message(field));
            }
        }
    }
}

///
/// TermsGroup
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct TermsGroup {
    pub fields: Vec<String>,
}

impl TermsGroup {
    #[must_use]
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

impl ValidateNode for TermsGroup {
    fn validate_mappings(&self, snapshot: &FieldCapsSnapshot, errs: &mut ValidationReport) {
        for field in &self.fields {
            let Some(types) = snapshot.types_of(field) else {
                errs.add(not_found_message("[numeric] or [keyword/text]", field));
                continue;
            };

            if !types.keys().all(|ty| ty.is_numeric() || ty.is_term()) {
                err!(
                    errs,
                    "the field [{field}] referenced by a terms group must be a [numeric] or [keyword/text] type, found: {}",
                    type_list(types)
                );
            } else if !all_aggregatable(types) {
                errs.add(not_aggregatable_message(field));
            }
        }
    }
}
