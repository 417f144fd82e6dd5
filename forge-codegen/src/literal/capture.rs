//! Capture arbitrary Rust values as [`Literal`] trees.
//!
//! Any `Serialize` value is walked through a serde [`Serializer`] that only
//! accepts the kinds a literal can express. Byte strings, data-carrying enum
//! variants, integers outside the `i64` range, non-finite floats and
//! non-scalar map keys are rejected with [`Error::InvalidLiteralKind`].

use classforge_ir::Literal;
use indexmap::IndexMap;
use serde::{
    Serialize, Serializer,
    ser::{
        Impossible, SerializeMap, SerializeSeq, SerializeStruct, SerializeTuple,
        SerializeTupleStruct,
    },
};

use crate::{Error, Result};

/// Convert a serializable value into a literal.
///
/// # Example
///
/// ```
/// use classforge_codegen::literal::capture;
/// use classforge_ir::Literal;
///
/// assert_eq!(capture(&Some(3)).unwrap(), Literal::Int(3));
/// assert!(capture(&f64::NAN).is_err());
/// ```
pub fn capture<T>(value: &T) -> Result<Literal>
where
    T: Serialize + ?Sized,
{
    value.serialize(LiteralCapture)
}

struct LiteralCapture;

fn out_of_range(v: impl std::fmt::Display) -> Error {
    Error::invalid_kind(format!("integer {v} (out of range)"))
}

impl Serializer for LiteralCapture {
    type Ok = Literal;
    type Error = Error;
    type SerializeSeq = ListCapture;
    type SerializeTuple = ListCapture;
    type SerializeTupleStruct = ListCapture;
    type SerializeTupleVariant = Impossible<Literal, Error>;
    type SerializeMap = MapCapture;
    type SerializeStruct = MapCapture;
    type SerializeStructVariant = Impossible<Literal, Error>;

    fn serialize_bool(self, v: bool) -> Result<Literal> {
        Ok(Literal::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Literal> {
        Ok(Literal::Int(i64::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Literal> {
        Ok(Literal::Int(i64::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Literal> {
        Ok(Literal::Int(i64::from(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Literal> {
        Ok(Literal::Int(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Literal> {
        i64::try_from(v)
            .map(Literal::Int)
            .map_err(|_| out_of_range(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Literal> {
        Ok(Literal::Int(i64::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Literal> {
        Ok(Literal::Int(i64::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Literal> {
        Ok(Literal::Int(i64::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Literal> {
        i64::try_from(v)
            .map(Literal::Int)
            .map_err(|_| out_of_range(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Literal> {
        i64::try_from(v)
            .map(Literal::Int)
            .map_err(|_| out_of_range(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Literal> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Literal> {
        if v.is_finite() {
            Ok(Literal::Float(v))
        } else {
            Err(Error::invalid_kind(format!("non-finite float {v}")))
        }
    }

    fn serialize_char(self, v: char) -> Result<Literal> {
        Ok(Literal::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Literal> {
        Ok(Literal::String(v.to_string()))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Literal> {
        Err(Error::invalid_kind("a byte string"))
    }

    fn serialize_none(self) -> Result<Literal> {
        Ok(Literal::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Literal>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Literal> {
        Ok(Literal::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Literal> {
        Ok(Literal::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Literal> {
        Ok(Literal::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Literal>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<Literal>
    where
        T: Serialize + ?Sized,
    {
        Err(Error::invalid_kind(format!("enum variant {name}::{variant}")))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<ListCapture> {
        Ok(ListCapture::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<ListCapture> {
        Ok(ListCapture::with_capacity(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<ListCapture> {
        Ok(ListCapture::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::invalid_kind(format!("enum variant {name}::{variant}")))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<MapCapture> {
        Ok(MapCapture::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<MapCapture> {
        Ok(MapCapture::with_capacity(len))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::invalid_kind(format!("enum variant {name}::{variant}")))
    }
}

struct ListCapture {
    items: Vec<Literal>,
}

impl ListCapture {
    fn with_capacity(len: usize) -> Self {
        Self {
            items: Vec::with_capacity(len),
        }
    }

    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.items.push(value.serialize(LiteralCapture)?);
        Ok(())
    }
}

impl SerializeSeq for ListCapture {
    type Ok = Literal;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.push(value)
    }

    fn end(self) -> Result<Literal> {
        Ok(Literal::List(self.items))
    }
}

impl SerializeTuple for ListCapture {
    type Ok = Literal;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.push(value)
    }

    fn end(self) -> Result<Literal> {
        Ok(Literal::List(self.items))
    }
}

impl SerializeTupleStruct for ListCapture {
    type Ok = Literal;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.push(value)
    }

    fn end(self) -> Result<Literal> {
        Ok(Literal::List(self.items))
    }
}

struct MapCapture {
    entries: IndexMap<String, Literal>,
    pending_key: Option<String>,
}

impl MapCapture {
    fn with_capacity(len: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(len),
            pending_key: None,
        }
    }
}

/// Map keys must be strings; integers and chars are accepted in text form.
fn capture_key<T>(key: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    match key.serialize(LiteralCapture)? {
        Literal::String(s) => Ok(s),
        Literal::Int(i) => Ok(i.to_string()),
        other => Err(Error::invalid_kind(format!("{} map key", other.kind()))),
    }
}

impl SerializeMap for MapCapture {
    type Ok = Literal;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.pending_key = Some(capture_key(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let key = self.pending_key.take().ok_or_else(|| Error::Capture {
            message: "map value serialized before its key".to_string(),
        })?;
        self.entries.insert(key, value.serialize(LiteralCapture)?);
        Ok(())
    }

    fn end(self) -> Result<Literal> {
        Ok(Literal::Map(self.entries))
    }
}

impl SerializeStruct for MapCapture {
    type Ok = Literal;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.entries
            .insert(key.to_string(), value.serialize(LiteralCapture)?);
        Ok(())
    }

    fn end(self) -> Result<Literal> {
        Ok(Literal::Map(self.entries))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    enum Mode {
        Fast,
        Custom(u32),
        Range(u32, u32),
        Named { level: u8 },
    }

    #[test]
    fn test_scalars() {
        assert_eq!(capture(&true).unwrap(), Literal::Bool(true));
        assert_eq!(capture(&7u8).unwrap(), Literal::Int(7));
        assert_eq!(capture(&1.5f32).unwrap(), Literal::Float(1.5));
        assert_eq!(capture(&'x').unwrap(), Literal::string("x"));
        assert_eq!(capture("text").unwrap(), Literal::string("text"));
        assert_eq!(capture(&None::<i32>).unwrap(), Literal::Null);
        assert_eq!(capture(&()).unwrap(), Literal::Null);
    }

    #[test]
    fn test_containers() {
        assert_eq!(
            capture(&vec![1, 2]).unwrap(),
            Literal::list([Literal::Int(1), Literal::Int(2)])
        );
        assert_eq!(
            capture(&(1, "a")).unwrap(),
            Literal::list([Literal::Int(1), Literal::string("a")])
        );

        let mut map = BTreeMap::new();
        map.insert(2, "two");
        map.insert(1, "one");
        assert_eq!(
            capture(&map).unwrap(),
            Literal::map([("1", "one"), ("2", "two")])
        );
    }

    #[test]
    fn test_unit_variant_is_its_name() {
        assert_eq!(capture(&Mode::Fast).unwrap(), Literal::string("Fast"));
    }

    #[test]
    fn test_data_variants_are_rejected() {
        for mode in [Mode::Custom(1), Mode::Range(1, 2), Mode::Named { level: 3 }] {
            let err = capture(&mode).unwrap_err();
            assert!(matches!(err, Error::InvalidLiteralKind { .. }), "{err}");
        }
    }

    #[test]
    fn test_bytes_are_rejected() {
        struct Blob;
        impl Serialize for Blob {
            fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
                s.serialize_bytes(&[0, 1])
            }
        }

        assert_eq!(
            capture(&Blob).unwrap_err(),
            Error::invalid_kind("a byte string")
        );
    }

    #[test]
    fn test_non_scalar_key_is_rejected() {
        let mut map = BTreeMap::new();
        map.insert(vec![1], 1);
        let err = capture(&map).unwrap_err();
        assert_eq!(err, Error::invalid_kind("list map key"));
    }

    #[test]
    fn test_wide_integers() {
        assert_eq!(capture(&1i128).unwrap(), Literal::Int(1));
        assert_eq!(capture(&-5i128).unwrap(), Literal::Int(-5));
        assert_eq!(capture(&7u128).unwrap(), Literal::Int(7));
        assert_eq!(
            capture(&i128::MAX).unwrap_err(),
            Error::invalid_kind(format!("integer {} (out of range)", i128::MAX))
        );
        assert_eq!(
            capture(&u128::MAX).unwrap_err(),
            Error::invalid_kind(format!("integer {} (out of range)", u128::MAX))
        );
    }

    #[test]
    fn test_out_of_range_and_non_finite() {
        assert_eq!(
            capture(&u64::MAX).unwrap_err(),
            Error::invalid_kind(format!("integer {} (out of range)", u64::MAX))
        );
        assert!(capture(&f64::INFINITY).is_err());
        assert!(capture(&vec![1.0, f64::NAN]).is_err());
    }
}
