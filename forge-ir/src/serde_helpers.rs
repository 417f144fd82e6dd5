//! Serde helpers for named member collections.

use std::{fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, SeqAccess, Visitor},
};

/// A member whose name can be supplied by the key of an enclosing map.
pub(crate) trait Named {
    fn set_name(&mut self, name: String);
}

/// Deserialize a `Vec<T>` from either `{ name: {...} }` or `[{ name, ... }]`.
///
/// Map entries are collected one by one, so a repeated key is kept as a
/// second member instead of silently replacing the first one.
pub(crate) fn deserialize_named<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Named + Deserialize<'de>,
{
    deserializer.deserialize_any(NamedVisitor(PhantomData))
}

/// Deserialize an optional field whose presence matters.
///
/// Combined with `#[serde(default)]`, a missing field stays `None` while an
/// explicit `null` reaches `T` and becomes `Some`.
pub(crate) fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

struct NamedVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for NamedVisitor<T>
where
    T: Named + Deserialize<'de>,
{
    type Value = Vec<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of named members or a list of members")
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut members = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, mut member)) = map.next_entry::<String, T>()? {
            member.set_name(name);
            members.push(member);
        }
        Ok(members)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut members = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(member) = seq.next_element::<T>()? {
            members.push(member);
        }
        Ok(members)
    }
}
