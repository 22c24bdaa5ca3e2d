use indexmap::IndexMap;
use oxrdf::NamedNode;
use oxsdatatypes::{DateTime, Decimal, Double, TimezoneOffset};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::fmt;

/// The outcome of applying a transformation: an ordered sequence of records.
///
/// Applying a program to a single resource always yields exactly one record;
/// the sequence exists so multi-subject results can be represented without
/// changing the shape consumers see.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultSequence {
    records: Vec<FieldMap>,
}

impl ResultSequence {
    /// Wraps a single record, the common single-resource case.
    pub fn single(record: FieldMap) -> Self {
        Self {
            records: vec![record],
        }
    }

    pub fn records(&self) -> &[FieldMap] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<FieldMap> for ResultSequence {
    fn from_iter<I: IntoIterator<Item = FieldMap>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// One record of a [`ResultSequence`]: field names mapped to their values.
///
/// Field names are unique within a record and iterate in insertion order,
/// which is the order the program defined them in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldMap {
    fields: IndexMap<String, FieldValues>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field. A second insert under the same name replaces the
    /// previous values but keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, values: FieldValues) {
        self.fields.insert(name.into(), values);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValues> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValues)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// The ordered, possibly multi-valued result of a single field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValues(Vec<ScalarValue>);

impl FieldValues {
    pub fn values(&self) -> &[ScalarValue] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any value's lexical form equals `needle`.
    pub fn contains_str(&self, needle: &str) -> bool {
        self.0.iter().any(|v| v.to_string() == needle)
    }
}

impl From<Vec<ScalarValue>> for FieldValues {
    fn from(values: Vec<ScalarValue>) -> Self {
        Self(values)
    }
}

impl FromIterator<ScalarValue> for FieldValues {
    fn from_iter<I: IntoIterator<Item = ScalarValue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for FieldValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for value in &self.0 {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

/// A single projected value.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// An IRI, e.g. from an `xsd:anyURI` coercion or an un-coerced node.
    Iri(NamedNode),
    String(String),
    Boolean(bool),
    Integer(i64),
    Double(f64),
    Decimal(Decimal),
    DateTime(DateTime),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Iri(iri) => f.write_str(iri.as_str()),
            ScalarValue::String(s) => f.write_str(s),
            ScalarValue::Boolean(b) => write!(f, "{b}"),
            ScalarValue::Integer(i) => write!(f, "{i}"),
            ScalarValue::Double(d) => write!(f, "{d}"),
            ScalarValue::Decimal(d) => write!(f, "{d}"),
            ScalarValue::DateTime(dt) => f.write_str(&format_datetime_millis(*dt)),
        }
    }
}

impl Serialize for ScalarValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ScalarValue::Iri(iri) => serializer.serialize_str(iri.as_str()),
            ScalarValue::String(s) => serializer.serialize_str(s),
            ScalarValue::Boolean(b) => serializer.serialize_bool(*b),
            ScalarValue::Integer(i) => serializer.serialize_i64(*i),
            ScalarValue::Double(d) => serializer.serialize_f64(*d),
            ScalarValue::Decimal(d) => serializer.serialize_str(&d.to_string()),
            ScalarValue::DateTime(dt) => {
                serializer.serialize_str(&format_datetime_millis(*dt))
            }
        }
    }
}

/// Formats a date/time as `YYYY-MM-DDTHH:mm:ss.sssZ`.
///
/// Values carrying a timezone are normalized to UTC first; values without
/// one are rendered as-is with the `Z` suffix. Boundary layers serialize
/// date-valued fields through this exact form.
pub fn format_datetime_millis(value: DateTime) -> String {
    let utc = value.adjust(Some(TimezoneOffset::UTC)).unwrap_or(value);
    let seconds = f64::from(Double::from(utc.second()));
    let whole = seconds.trunc();
    // Clamped so a rounded-up fraction can never roll the second over.
    let millis = (((seconds - whole) * 1000.0).round() as u16).min(999);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        utc.year(),
        utc.month(),
        utc.day(),
        utc.hour(),
        utc.minute(),
        whole as u8,
        millis,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn datetime_formats_with_millisecond_precision() {
        let dt = DateTime::from_str("2016-02-09T12:30:05.5Z").unwrap();
        assert_eq!(format_datetime_millis(dt), "2016-02-09T12:30:05.500Z");
    }

    #[test]
    fn datetime_normalizes_to_utc() {
        let dt = DateTime::from_str("2016-02-09T12:30:05+02:00").unwrap();
        assert_eq!(format_datetime_millis(dt), "2016-02-09T10:30:05.000Z");
    }

    #[test]
    fn datetime_without_timezone_keeps_wall_clock() {
        let dt = DateTime::from_str("2016-02-09T12:30:05").unwrap();
        assert_eq!(format_datetime_millis(dt), "2016-02-09T12:30:05.000Z");
    }

    #[test]
    fn datetime_roundtrips_through_lexical_form() {
        let formatted = format_datetime_millis(
            DateTime::from_str("2016-02-09T12:30:05.25Z").unwrap(),
        );
        let reparsed = DateTime::from_str(&formatted).unwrap();
        assert_eq!(format_datetime_millis(reparsed), formatted);
    }

    #[test]
    fn field_map_keeps_insertion_order() {
        let mut record = FieldMap::new();
        record.insert("title", vec![ScalarValue::String("a".into())].into());
        record.insert("creator", vec![ScalarValue::String("b".into())].into());
        record.insert("date", vec![].into());
        let names: Vec<_> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["title", "creator", "date"]);
    }

    #[test]
    fn results_serialize_to_json_objects() {
        let mut record = FieldMap::new();
        record.insert(
            "title",
            vec![ScalarValue::String("some-title".into())].into(),
        );
        record.insert("count", vec![ScalarValue::Integer(3)].into());
        let sequence = ResultSequence::single(record);

        let json = serde_json::to_value(&sequence).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"title": ["some-title"], "count": [3]}])
        );
    }
}
