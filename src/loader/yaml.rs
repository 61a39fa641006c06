//! YAML decoding with the key semantics of a plain YAML loader.
//!
//! Two differences from `serde_yaml::from_str::<Value>`:
//!
//! - a repeated mapping key keeps its last value instead of failing
//! - merge keys (`<<: *anchor`) are expanded

use serde::de::{self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor};
use serde_yaml::value::{Tag, TaggedValue};
use serde_yaml::{Mapping, Value};
use std::fmt;

/// Decode one YAML document into a [`Value`].
///
/// # Errors
///
/// Returns the parser error for malformed YAML, or the merge error when a
/// `<<` key does not refer to a mapping or list of mappings.
pub fn decode(text: &str) -> Result<Value, serde_yaml::Error> {
    let LastKeyWins(mut value) = serde_yaml::from_str(text)?;
    value.apply_merge()?;
    Ok(value)
}

struct LastKeyWins(Value);

impl<'de> Deserialize<'de> for LastKeyWins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LastKeyWinsVisitor).map(LastKeyWins)
    }
}

struct LastKeyWinsVisitor;

impl<'de> Visitor<'de> for LastKeyWinsVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("any YAML value")
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<Value, E> {
        Ok(Value::Number(n.into()))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<Value, E> {
        Ok(Value::Number(n.into()))
    }

    fn visit_f64<E: de::Error>(self, f: f64) -> Result<Value, E> {
        Ok(Value::Number(f.into()))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
        Ok(Value::String(s.to_string()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Value, E> {
        Ok(Value::String(s))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        LastKeyWins::deserialize(deserializer).map(|LastKeyWins(value)| value)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(LastKeyWins(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut mapping = Mapping::new();
        while let Some((LastKeyWins(key), LastKeyWins(value))) = map.next_entry()? {
            // keeps the key's first position
            mapping.insert(key, value);
        }
        Ok(Value::Mapping(mapping))
    }

    fn visit_enum<A>(self, data: A) -> Result<Value, A::Error>
    where
        A: EnumAccess<'de>,
    {
        let (tag, variant): (String, _) = data.variant()?;
        let LastKeyWins(value) = variant.newtype_variant()?;
        Ok(Value::Tagged(Box::new(TaggedValue {
            tag: Tag::new(tag),
            value,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_key_keeps_last_value() {
        let value = decode("rename: true\nformat: x\nrename: false\n").unwrap();
        let mapping = value.as_mapping().unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(value["rename"], Value::Bool(false));
        assert_eq!(mapping.keys().next(), Some(&Value::String("rename".into())));
    }

    #[test]
    fn test_merge_keys_are_expanded() {
        let value = decode(
            "base: &c {type: release_title, name: base}\nconditions:\n  - <<: *c\n    name: c1\n    pattern: ghost\n",
        )
        .unwrap();
        let condition = &value["conditions"][0];
        assert_eq!(condition["type"], Value::String("release_title".into()));
        assert_eq!(condition["name"], Value::String("c1".into()));
        assert!(condition.get("<<").is_none());
    }

    #[test]
    fn test_invalid_merge_is_an_error() {
        assert!(decode("a: &s scalar\nb:\n  <<: *s\n").is_err());
    }

    #[test]
    fn test_scalars() {
        let value = decode("n: 2160\nf: 1.5\nneg: -3\ns: text\nnull_value: ~\n").unwrap();
        assert_eq!(value["n"].as_u64(), Some(2160));
        assert_eq!(value["f"].as_f64(), Some(1.5));
        assert_eq!(value["neg"].as_i64(), Some(-3));
        assert_eq!(value["s"].as_str(), Some("text"));
        assert!(value["null_value"].is_null());
    }

    #[test]
    fn test_empty_document_is_null() {
        assert!(decode("").unwrap().is_null());
    }

    #[test]
    fn test_syntax_error() {
        assert!(decode("name: [unclosed").is_err());
    }
}
