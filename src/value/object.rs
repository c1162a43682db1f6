//! Opaque object handles.

use super::key::Key;
use super::map::Map;
use super::value::Value;
use std::sync::Arc;

#[derive(Debug, Clone)]
struct ObjectData {
    class: String,
    properties: Map,
    display: Option<String>,
}

/// Object is a shared handle to an object with named properties.
///
/// Cloning an Object clones the handle, so two clones are the same instance.
/// Builder methods copy the data when the handle is already shared.
#[derive(Debug, Clone)]
pub struct Object {
    inner: Arc<ObjectData>,
}

impl Object {
    /// Creates an empty object of the given class.
    pub fn new(class: impl Into<String>) -> Self {
        Object {
            inner: Arc::new(ObjectData {
                class: class.into(),
                properties: Map::new(),
                display: None,
            }),
        }
    }

    /// Returns the object with a property set.
    pub fn with_property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.set_property(name, value);
        self
    }

    /// Returns the object with a string representation.
    pub fn with_display(mut self, text: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.inner).display = Some(text.into());
        self
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: Value) {
        Arc::make_mut(&mut self.inner)
            .properties
            .set(Key::Name(name.into()), value);
    }

    pub fn class(&self) -> &str {
        &self.inner.class
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.inner.properties.get(&Key::Name(name.to_string()))
    }

    pub fn properties(&self) -> &Map {
        &self.inner.properties
    }

    /// Returns the string representation, if the object has one.
    pub fn display(&self) -> Option<&str> {
        self.inner.display.as_deref()
    }

    /// Returns true if both handles point at the same instance.
    pub fn same_instance(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
