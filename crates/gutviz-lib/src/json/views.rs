//! Curated JSON views over annotation features.
//!
//! The front-end expects fixed field sets in a fixed order, so each view
//! declares its exposed fields as an ordered `(name, accessor)` table and is
//! consumed by the adapter as an ordinary mapping.

use std::any::Any;

use crate::errors::{GutvizError, Result};
use crate::features::{CdsFeature, DomainFeature};

use super::{Convertible, JsonValue, MapKey};

/// Accessor reading one exposed field from a view.
pub type Accessor<T> = fn(&T) -> JsonValue;

/// Mapping facade over a fixed, ordered set of exposed fields.
///
/// Declaration order in `FIELDS` is emission order; the reported size is the
/// number of declared fields regardless of what the underlying type stores.
pub trait KeyedView: Sized + 'static {
    /// Exposed fields in emission order.
    const FIELDS: &'static [(&'static str, Accessor<Self>)];

    /// Number of exposed fields.
    fn len(&self) -> usize {
        Self::FIELDS.len()
    }

    fn is_empty(&self) -> bool {
        Self::FIELDS.is_empty()
    }

    /// `(name, value)` pairs in declaration order.
    fn items(&self) -> Vec<(&'static str, JsonValue)> {
        Self::FIELDS
            .iter()
            .map(|(name, accessor)| (*name, accessor(self)))
            .collect()
    }

    /// Value of a declared field; `None` for undeclared names.
    fn get(&self, key: &str) -> Option<JsonValue> {
        Self::FIELDS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, accessor)| accessor(self))
    }

    /// Materialize the view as a JSON object in declaration order.
    fn to_object(&self) -> JsonValue {
        JsonValue::Object(
            self.items()
                .into_iter()
                .map(|(name, value)| (MapKey::Str(name.to_string()), value))
                .collect(),
        )
    }
}

/// Serialisable summary of one structural domain inside a coding sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonDomain {
    kind: String,
    start: i64,
    end: i64,
    predictions: Vec<(String, String)>,
    napdos_link: String,
    blast_link: String,
    sequence: String,
    dna_sequence: String,
}

impl JsonDomain {
    /// Build a view from a domain feature and its prediction results.
    ///
    /// All inputs are copied to plain scalar form up front. Coordinate
    /// sanity is the feature producer's responsibility.
    pub fn new(
        domain: &dyn DomainFeature,
        predictions: &[(String, String)],
        napdos_link: &str,
        blast_link: &str,
        sequence: &str,
        dna: &str,
    ) -> Self {
        Self {
            kind: domain.name().to_string(),
            start: domain.start() as i64,
            end: domain.end() as i64,
            predictions: predictions.to_vec(),
            napdos_link: napdos_link.to_string(),
            blast_link: blast_link.to_string(),
            sequence: sequence.to_string(),
            dna_sequence: dna.to_string(),
        }
    }
}

impl KeyedView for JsonDomain {
    const FIELDS: &'static [(&'static str, Accessor<Self>)] = &[
        ("type", |d| JsonValue::from(d.kind.as_str())),
        ("start", |d| JsonValue::Int(d.start)),
        ("end", |d| JsonValue::Int(d.end)),
        ("predictions", |d| {
            JsonValue::Array(
                d.predictions
                    .iter()
                    .map(|(method, value)| {
                        JsonValue::Array(vec![
                            JsonValue::from(method.as_str()),
                            JsonValue::from(value.as_str()),
                        ])
                    })
                    .collect(),
            )
        }),
        ("napdoslink", |d| JsonValue::from(d.napdos_link.as_str())),
        ("blastlink", |d| JsonValue::from(d.blast_link.as_str())),
        ("sequence", |d| JsonValue::from(d.sequence.as_str())),
        ("dna_sequence", |d| JsonValue::from(d.dna_sequence.as_str())),
    ];
}

impl Convertible for JsonDomain {
    fn type_name(&self) -> &'static str {
        "JsonDomain"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn to_plain(&self) -> Option<JsonValue> {
        Some(self.to_object())
    }
}

/// Serialisable summary of one coding sequence and its domains.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonOrf {
    id: String,
    sequence: String,
    domains: Vec<JsonDomain>,
}

impl JsonOrf {
    pub fn new(feature: &dyn CdsFeature) -> Self {
        Self {
            id: feature.name().to_string(),
            sequence: feature.translation().to_string(),
            domains: Vec::new(),
        }
    }

    /// Append a domain view to this ORF's domain list.
    ///
    /// Fails fast with `TypeMismatch`, leaving the list unchanged, unless
    /// the value wraps a `JsonDomain`.
    pub fn add_domain(&mut self, value: JsonValue) -> Result<()> {
        match &value {
            JsonValue::Custom(obj) => match obj.as_any().downcast_ref::<JsonDomain>() {
                Some(domain) => {
                    self.domains.push(domain.clone());
                    Ok(())
                }
                None => Err(GutvizError::TypeMismatch {
                    expected: "JsonDomain",
                    found: obj.type_name().to_string(),
                }),
            },
            other => Err(GutvizError::TypeMismatch {
                expected: "JsonDomain",
                found: other.kind().to_string(),
            }),
        }
    }

    /// Number of domains recorded so far.
    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }
}

impl KeyedView for JsonOrf {
    const FIELDS: &'static [(&'static str, Accessor<Self>)] = &[
        ("id", |o| JsonValue::from(o.id.as_str())),
        ("sequence", |o| JsonValue::from(o.sequence.as_str())),
        ("domains", |o| {
            JsonValue::Array(o.domains.iter().map(|d| d.to_object()).collect())
        }),
    ];
}

impl Convertible for JsonOrf {
    fn type_name(&self) -> &'static str {
        "JsonOrf"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn to_plain(&self) -> Option<JsonValue> {
        Some(self.to_object())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{encode, EncodeOptions};
    use crate::seq::Sequence;

    struct TestDomain {
        name: &'static str,
        start: usize,
        end: usize,
    }

    impl DomainFeature for TestDomain {
        fn name(&self) -> &str {
            self.name
        }

        fn start(&self) -> usize {
            self.start
        }

        fn end(&self) -> usize {
            self.end
        }
    }

    struct TestCds {
        name: &'static str,
        translation: &'static str,
    }

    impl CdsFeature for TestCds {
        fn name(&self) -> &str {
            self.name
        }

        fn translation(&self) -> &str {
            self.translation
        }
    }

    fn condensation_domain() -> JsonDomain {
        let feature = TestDomain {
            name: "Condensation",
            start: 10,
            end: 120,
        };
        JsonDomain::new(
            &feature,
            &[("napdos".to_string(), "A".to_string())],
            "http://x",
            "http://y",
            "MKT",
            "ATGAAAACG",
        )
    }

    #[test]
    fn domain_emits_declared_fields_in_order() {
        let encoded = encode(
            &JsonValue::custom(condensation_domain()),
            EncodeOptions::default(),
        )
        .unwrap();
        assert_eq!(
            encoded,
            r#"{"type":"Condensation","start":10,"end":120,"predictions":[["napdos","A"]],"napdoslink":"http://x","blastlink":"http://y","sequence":"MKT","dna_sequence":"ATGAAAACG"}"#
        );
    }

    #[test]
    fn domain_reports_declared_field_count() {
        let domain = condensation_domain();
        assert_eq!(domain.len(), 8);
        assert!(!domain.is_empty());
        let keys: Vec<_> = domain.items().into_iter().map(|(name, _)| name).collect();
        assert_eq!(
            keys,
            [
                "type",
                "start",
                "end",
                "predictions",
                "napdoslink",
                "blastlink",
                "sequence",
                "dna_sequence"
            ]
        );
    }

    #[test]
    fn domain_field_lookup() {
        let domain = condensation_domain();
        assert!(matches!(domain.get("start"), Some(JsonValue::Int(10))));
        assert!(domain.get("bogus").is_none());
    }

    #[test]
    fn predictions_encode_as_pairs() {
        let domain = condensation_domain();
        let parsed = crate::json::decode(
            &encode(&JsonValue::custom(domain), EncodeOptions::default()).unwrap(),
        )
        .unwrap();
        assert_eq!(parsed["predictions"], serde_json::json!([["napdos", "A"]]));
        assert!(parsed["start"].is_i64());
        assert!(parsed["end"].is_i64());
    }

    #[test]
    fn orf_emits_declared_fields_in_order() {
        let feature = TestCds {
            name: "orf1",
            translation: "MKTAYIAK",
        };
        let orf = JsonOrf::new(&feature);
        let encoded = encode(&JsonValue::custom(orf), EncodeOptions::default()).unwrap();
        assert_eq!(
            encoded,
            r#"{"id":"orf1","sequence":"MKTAYIAK","domains":[]}"#
        );
    }

    #[test]
    fn orf_collects_added_domains() {
        let feature = TestCds {
            name: "orf1",
            translation: "MKTAYIAK",
        };
        let mut orf = JsonOrf::new(&feature);
        orf.add_domain(JsonValue::custom(condensation_domain()))
            .unwrap();
        assert_eq!(orf.domain_count(), 1);

        let encoded = encode(&JsonValue::custom(orf), EncodeOptions::default()).unwrap();
        assert!(encoded.starts_with(r#"{"id":"orf1","sequence":"MKTAYIAK","domains":[{"type":"Condensation""#));
    }

    #[test]
    fn add_domain_rejects_plain_values() {
        let feature = TestCds {
            name: "orf1",
            translation: "MKT",
        };
        let mut orf = JsonOrf::new(&feature);
        let err = orf.add_domain(JsonValue::from("not a domain")).unwrap_err();
        match err {
            GutvizError::TypeMismatch { expected, found } => {
                assert_eq!(expected, "JsonDomain");
                assert_eq!(found, "string");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(orf.domain_count(), 0);
    }

    #[test]
    fn add_domain_rejects_other_custom_types() {
        let feature = TestCds {
            name: "orf1",
            translation: "MKT",
        };
        let mut orf = JsonOrf::new(&feature);
        let err = orf
            .add_domain(JsonValue::custom(Sequence::new("ATG")))
            .unwrap_err();
        assert!(matches!(
            err,
            GutvizError::TypeMismatch { found, .. } if found == "Sequence"
        ));
        assert_eq!(orf.domain_count(), 0);
    }
}
