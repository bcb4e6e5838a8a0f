use crate::framework::{Entity, Field};
use serde::{Deserialize, Serialize};

/// A person record with no identity of its own; equality is structural.
///
/// Encoded as:
///
/// ```text
/// {"name":"Jane","age":"25","income":60000.99,"title":"Data Scientist"}
/// ```
///
/// `age` travels as a quoted number and `income` is left out when it is zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub name: String,
    pub age: i64,
    pub income: f64,
    pub title: String,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i64, income: f64, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            income,
            title: title.into(),
        }
    }
}

impl Entity for Person {
    const NAME: &'static str = "Person";
    const FIELDS: &'static [Field] = &[
        Field::new("name"),
        Field::new("age").as_text(),
        Field::new("income").omit_if_empty(),
        Field::new("title"),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{codec, CodecError};

    #[test]
    fn test_zero_income_is_omitted() {
        let jane = Person::new("Jane", 25, 0.0, "Data Scientist");
        assert_eq!(
            codec::encode_to_string(&jane).unwrap(),
            r#"{"name":"Jane","age":"25","title":"Data Scientist"}"#
        );
    }

    #[test]
    fn test_income_is_kept_when_set() {
        let john = Person::new("John", 30, 50000.99, "Software Engineer");
        assert_eq!(
            codec::encode_to_string(&john).unwrap(),
            r#"{"name":"John","age":"30","income":50000.99,"title":"Software Engineer"}"#
        );
    }

    #[test]
    fn test_age_must_be_a_digit_string() {
        let err = codec::decode_str::<Person>(r#"{"name":"Jane","age":"twenty","title":"x"}"#)
            .unwrap_err();
        match err {
            CodecError::Decode { field, reason } => {
                assert_eq!(field, "age");
                assert!(reason.contains("twenty"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_age_round_trips() {
        let p = Person::new("Edge", -3, 0.0, "");
        let encoded = codec::encode_to_string(&p).unwrap();
        assert_eq!(encoded, r#"{"name":"Edge","age":"-3","title":""}"#);
        assert_eq!(codec::decode_str::<Person>(&encoded).unwrap(), p);
    }

    #[test]
    fn test_age_rejects_non_integer_text() {
        for age in ["2.5", "1e2", "25.0", "99999999999999999999"] {
            let input = format!(r#"{{"name":"Jane","age":"{age}","title":"x"}}"#);
            let err = codec::decode_str::<Person>(&input).unwrap_err();
            assert_eq!(err.field(), Some("age"), "age: {age}");
        }
    }

    #[test]
    fn test_negative_zero_age_is_zero() {
        let p: Person = codec::decode_str(r#"{"name":"Jane","age":"-0","title":"x"}"#).unwrap();
        assert_eq!(p.age, 0);
    }

    #[test]
    fn test_null_income_reads_as_zero() {
        let p: Person =
            codec::decode_str(r#"{"name":"Jane","age":"25","income":null,"title":"x"}"#).unwrap();
        assert_eq!(p.income, 0.0);
    }

    #[test]
    fn test_title_is_required() {
        let err = codec::decode_str::<Person>(r#"{"name":"Jane","age":"25"}"#).unwrap_err();
        assert_eq!(err.field(), Some("title"));
    }
}
