//! # Objects - Wires as Types
//!
//! Objects are the "types" that morphisms connect. An [`Object`] is a single
//! named wire; a [`MonoidalObject`] is an ordered row of wires drawn side by
//! side, i.e. the tensor product `A ⊗ B ⊗ …`.
//!
//! Rows are *positional*: `a ⊗ b ≠ b ⊗ a`, and repeated names are distinct
//! wires. Tensoring is concatenation, so it is associative with the empty
//! row as unit.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// An atomic, named wire type. Equality and hashing are by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Object(String);

impl Object {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Object {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Object {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&String> for Object {
    fn from(name: &String) -> Self {
        Self(name.clone())
    }
}

/// An ordered row of wires (tensor product of atomic objects).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MonoidalObject {
    objects: Vec<Object>,
}

impl MonoidalObject {
    /// Create a row from anything convertible to wires.
    ///
    /// ```rust
    /// use braidweave_core::MonoidalObject;
    ///
    /// let ab = MonoidalObject::new(["a", "b"]);
    /// assert_eq!(ab.len(), 2);
    /// assert_eq!(ab.to_string(), "a @ b");
    /// ```
    pub fn new<I, T>(objects: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Object>,
    {
        Self {
            objects: objects.into_iter().map(Into::into).collect(),
        }
    }

    /// The monoidal unit (no wires).
    pub fn unit() -> Self {
        Self::default()
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn into_objects(self) -> Vec<Object> {
        self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Object> {
        self.objects.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Object> {
        self.objects.get(index)
    }

    /// Wire names joined by ` @ `.
    pub fn name(&self) -> String {
        self.objects
            .iter()
            .map(Object::name)
            .collect::<Vec<_>>()
            .join(" @ ")
    }

    /// `self ⊗ other`: concatenate the rows.
    pub fn tensor(&self, other: &MonoidalObject) -> MonoidalObject {
        let mut objects = self.objects.clone();
        objects.extend(other.objects.iter().cloned());
        Self { objects }
    }

    /// How many wires in this row carry the given name.
    pub fn count(&self, object: &Object) -> usize {
        self.objects.iter().filter(|o| *o == object).count()
    }
}

impl fmt::Display for MonoidalObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Object> for MonoidalObject {
    fn from(object: Object) -> Self {
        Self {
            objects: vec![object],
        }
    }
}

impl From<Vec<Object>> for MonoidalObject {
    fn from(objects: Vec<Object>) -> Self {
        Self { objects }
    }
}

impl FromIterator<Object> for MonoidalObject {
    fn from_iter<I: IntoIterator<Item = Object>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MonoidalObject {
    type Item = &'a Object;
    type IntoIter = std::slice::Iter<'a, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

impl Serialize for MonoidalObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("MonoidalObject", 3)?;
        record.serialize_field("name", &self.name())?;
        record.serialize_field("objects", &self.objects)?;
        record.serialize_field("type", "monoidal_object")?;
        record.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_equality_is_by_name() {
        assert_eq!(Object::new("a"), Object::from("a"));
        assert_ne!(Object::new("a"), Object::new("b"));
    }

    #[test]
    fn test_monoidal_object_is_positional() {
        let ab = MonoidalObject::new(["a", "b"]);
        let ba = MonoidalObject::new(["b", "a"]);
        assert_ne!(ab, ba);
        assert_eq!(ab, MonoidalObject::new(["a", "b"]));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let row = MonoidalObject::new(["3", "4", "4"]);
        assert_eq!(row.len(), 3);
        assert_eq!(row.count(&Object::new("4")), 2);
        assert_eq!(row.count(&Object::new("5")), 0);
    }

    #[test]
    fn test_tensor_is_associative_with_unit() {
        let a = MonoidalObject::new(["a"]);
        let b = MonoidalObject::new(["b", "c"]);
        let c = MonoidalObject::new(["d"]);

        assert_eq!(a.tensor(&b).tensor(&c), a.tensor(&b.tensor(&c)));
        assert_eq!(a.tensor(&MonoidalObject::unit()), a);
        assert_eq!(MonoidalObject::unit().tensor(&a), a);
    }

    #[test]
    fn test_display() {
        assert_eq!(MonoidalObject::new(["1", "2"]).to_string(), "1 @ 2");
        assert_eq!(MonoidalObject::unit().to_string(), "");
    }

    #[test]
    fn test_serialize_record() {
        let value = serde_json::to_value(MonoidalObject::new(["x", "y"])).unwrap();
        assert_eq!(value["name"], "x @ y");
        assert_eq!(value["objects"], serde_json::json!(["x", "y"]));
        assert_eq!(value["type"], "monoidal_object");
    }
}
