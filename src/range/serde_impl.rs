//! Serde support for [`Range`].
//!
//! A non-empty range is written as `{"Start": .., "End": ..}` and an empty one
//! as `{}`. On read, field names match case-insensitively in any order,
//! unknown fields are skipped, and a missing field yields the empty range.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Range;

const START: &str = "Start";
const END: &str = "End";
const FIELDS: &[&str] = &[START, END];

impl<T> Serialize for Range<T>
where
    T: Serialize + PartialEq,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_empty() {
            return serializer.serialize_struct("Range", 0)?.end();
        }
        let mut s = serializer.serialize_struct("Range", 2)?;
        s.serialize_field(START, &self.start)?;
        s.serialize_field(END, &self.end)?;
        s.end()
    }
}

enum Field {
    Start,
    End,
    Other,
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldVisitor;

        impl<'de> Visitor<'de> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a range field name")
            }

            fn visit_str<E>(self, value: &str) -> Result<Field, E>
            where
                E: de::Error,
            {
                if value.eq_ignore_ascii_case(START) {
                    Ok(Field::Start)
                } else if value.eq_ignore_ascii_case(END) {
                    Ok(Field::End)
                } else {
                    Ok(Field::Other)
                }
            }
        }

        deserializer.deserialize_identifier(FieldVisitor)
    }
}

struct RangeVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for RangeVisitor<T>
where
    T: Deserialize<'de> + PartialOrd + Default,
{
    type Value = Range<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with Start and End fields")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Range<T>, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut start: Option<T> = None;
        let mut end: Option<T> = None;

        while let Some(field) = map.next_key::<Field>()? {
            match field {
                Field::Start => {
                    if start.is_some() {
                        return Err(de::Error::duplicate_field(START));
                    }
                    start = Some(map.next_value()?);
                }
                Field::End => {
                    if end.is_some() {
                        return Err(de::Error::duplicate_field(END));
                    }
                    end = Some(map.next_value()?);
                }
                Field::Other => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        match (start, end) {
            (Some(start), Some(end)) => Range::new(start, end).map_err(de::Error::custom),
            _ => Ok(Range::empty()),
        }
    }
}

impl<'de, T> Deserialize<'de> for Range<T>
where
    T: Deserialize<'de> + PartialOrd + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("Range", FIELDS, RangeVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(start: i32, end: i32) -> Range<i32> {
        Range::new(start, end).unwrap()
    }

    #[test]
    fn serialize_non_empty() {
        assert_eq!(serde_json::to_string(&r(0, 99)).unwrap(), r#"{"Start":0,"End":99}"#);
        let floats = Range::new(-0.5, -0.1).unwrap();
        assert_eq!(serde_json::to_string(&floats).unwrap(), r#"{"Start":-0.5,"End":-0.1}"#);
    }

    #[test]
    fn serialize_empty_as_empty_object() {
        assert_eq!(serde_json::to_string(&Range::<i32>::empty()).unwrap(), "{}");
        assert_eq!(serde_json::to_string(&r(4, 4)).unwrap(), "{}");
    }

    #[test]
    fn serialize_absent_as_null() {
        let absent: Option<Range<i32>> = None;
        assert_eq!(serde_json::to_string(&absent).unwrap(), "null");
        let back: Option<Range<i32>> = serde_json::from_str("null").unwrap();
        assert!(back.is_none());
    }

    #[test]
    fn deserialize_any_order_and_case() {
        let a: Range<i32> = serde_json::from_str(r#"{"End":20,"Start":10}"#).unwrap();
        let b: Range<i32> = serde_json::from_str(r#"{"start":10,"END":20}"#).unwrap();
        assert_eq!(a, r(10, 20));
        assert_eq!(b, r(10, 20));
    }

    #[test]
    fn deserialize_skips_unknown_fields() {
        let range: Range<i32> =
            serde_json::from_str(r#"{"Start":1,"Note":{"nested":[1,2]},"End":2}"#).unwrap();
        assert_eq!(range, r(1, 2));
    }

    #[test]
    fn deserialize_missing_field_is_empty() {
        let only_start: Range<i32> = serde_json::from_str(r#"{"Start":1}"#).unwrap();
        let nothing: Range<i32> = serde_json::from_str("{}").unwrap();
        assert!(only_start.is_empty());
        assert!(nothing.is_empty());
    }

    #[test]
    fn deserialize_unordered_fails() {
        let result: Result<Range<i32>, _> = serde_json::from_str(r#"{"Start":5,"End":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn round_trip_strings() {
        let range = Range::new("a".to_string(), "m".to_string()).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"Start":"a","End":"m"}"#);
        let back: Range<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);
    }
}
