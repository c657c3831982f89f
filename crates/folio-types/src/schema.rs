use serde::de::{self, DeserializeOwned, Deserializer, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::forward_to_deserialize_any;

use crate::models::{ContactMessage, Experience, Testimonial};
use crate::record::Record;

/// Returns the field names serde uses to deserialize `T`, in declaration order.
///
/// The derive macro hands this list to `Deserializer::deserialize_struct`, so a
/// deserializer that only records its arguments is enough to read it back.
/// Types that are not plain structs yield an empty list.
pub fn field_names<T: DeserializeOwned>() -> &'static [&'static str] {
    let mut fields = None;
    let _ = T::deserialize(FieldProbe { fields: &mut fields });
    fields.unwrap_or(&[])
}

struct FieldProbe<'a> {
    fields: &'a mut Option<&'static [&'static str]>,
}

impl<'de, 'a> Deserializer<'de> for FieldProbe<'a> {
    type Error = de::value::Error;

    fn deserialize_any<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value, Self::Error> {
        Err(de::Error::custom("not a struct"))
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value, Self::Error> {
        *self.fields = Some(fields);
        Err(de::Error::custom("field list captured"))
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map enum identifier ignored_any
    }
}

/// Field layout of one collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSchema {
    pub name: &'static str,
    pub fields: &'static [&'static str],
}

impl CollectionSchema {
    pub fn of<R: Record>() -> Self {
        Self {
            name: R::COLLECTION,
            fields: R::field_names(),
        }
    }
}

/// Ordered mapping from collection name to field names.
///
/// Serializes as a JSON object whose keys keep registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    collections: Vec<CollectionSchema>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every collection the portfolio API knows about
    pub fn portfolio() -> Self {
        Self::new()
            .with::<ContactMessage>()
            .with::<Testimonial>()
            .with::<Experience>()
    }

    /// Register `R`, replacing an earlier entry for the same collection
    pub fn with<R: Record>(mut self) -> Self {
        let entry = CollectionSchema::of::<R>();
        match self.collections.iter_mut().find(|c| c.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.collections.push(entry),
        }
        self
    }

    pub fn collections(&self) -> &[CollectionSchema] {
        &self.collections
    }

    pub fn fields(&self, collection: &str) -> Option<&'static [&'static str]> {
        self.collections
            .iter()
            .find(|c| c.name == collection)
            .map(|c| c.fields)
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.collections.len()))?;
        for collection in &self.collections {
            map.serialize_entry(collection.name, collection.fields)?;
        }
        map.end()
    }
}
