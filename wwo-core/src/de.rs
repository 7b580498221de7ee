//! Deserialization helpers matching how the feed is actually shaped: records
//! are JSON objects only, and `null` anywhere reads as the empty value.

use std::{fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer,
    de::{self, MapAccess, Visitor, value::MapAccessDeserializer},
};

/// A record that must arrive as a JSON object; `null` yields `T::default()`.
pub(crate) struct Object<T>(pub T);

impl<'de, T> Deserialize<'de> for Object<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ObjectVisitor(PhantomData)).map(Object)
    }
}

struct ObjectVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for ObjectVisitor<T>
where
    T: Deserialize<'de> + Default,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A>(self, map: A) -> Result<T, A::Error>
    where
        A: MapAccess<'de>,
    {
        T::deserialize(MapAccessDeserializer::new(map))
    }

    fn visit_unit<E>(self) -> Result<T, E>
    where
        E: de::Error,
    {
        Ok(T::default())
    }
}

pub(crate) fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Object::deserialize(deserializer).map(|Object(value)| value)
}

/// A list of records; `null` for the list is an empty list.
pub(crate) fn objects<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let list: Option<Vec<Object<T>>> = Option::deserialize(deserializer)?;
    Ok(list.unwrap_or_default().into_iter().map(|Object(value)| value).collect())
}

pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Pair {
        #[serde(deserialize_with = "nullable")]
        name: String,
        #[serde(deserialize_with = "objects")]
        children: Vec<Pair>,
    }

    fn decode(json: &str) -> Result<Pair, serde_json::Error> {
        serde_json::from_str::<Object<Pair>>(json).map(|Object(p)| p)
    }

    #[test]
    fn object_rejects_arrays() {
        let err = decode(r#"["a", []]"#).unwrap_err();
        assert!(err.to_string().contains("expected a JSON object"));

        let err = decode(r#"{"children": [["a"]]}"#).unwrap_err();
        assert!(err.to_string().contains("expected a JSON object"));
    }

    #[test]
    fn nulls_read_as_defaults() {
        assert_eq!(decode("null").unwrap(), Pair::default());

        let pair = decode(r#"{"name": null, "children": [null, {"name": "b"}]}"#).unwrap();
        assert_eq!(pair.name, "");
        assert_eq!(pair.children.len(), 2);
        assert_eq!(pair.children[0], Pair::default());
        assert_eq!(pair.children[1].name, "b");

        assert!(decode(r#"{"children": null}"#).unwrap().children.is_empty());
    }

    #[test]
    fn list_must_be_an_array() {
        assert!(decode(r#"{"children": {}}"#).is_err());
    }
}
