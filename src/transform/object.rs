//! Conversion of keyed containers into objects.

use crate::value::{Key, Object, Value};

use super::case::PropertyCase;

/// Class name of the objects built by [`to_object`].
pub const PLAIN_OBJECT_CLASS: &str = "object";

/// Converts the named entries of `container` into the properties of a new
/// object.
///
/// Entries under integer keys or the empty name are skipped. With `recursive`,
/// child containers that are not indexed are converted as well; indexed ones
/// are kept as they are. Property names are converted to `case` when given.
pub fn to_object(container: &Value, recursive: bool, case: Option<PropertyCase>) -> Object {
    let mut object = Object::new(PLAIN_OBJECT_CLASS);

    for (key, value) in container.entries() {
        let name = match &key {
            Key::Name(name) if !name.is_empty() => name,
            _ => continue,
        };

        let value = if recursive && value.is_container() && !value.is_indexed() {
            Value::Object(to_object(value, recursive, case))
        } else {
            value.clone()
        };

        let property = match case {
            Some(case) => case.convert(name),
            None => name.clone(),
        };
        object.set_property(property, value);
    }

    object
}
