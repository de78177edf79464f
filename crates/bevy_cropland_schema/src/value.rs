//! Typed extraction from Tiled property values.

use std::path::PathBuf;

use tiled::PropertyValue;

/// Conversion from a Tiled [`PropertyValue`] to a plain Rust type.
///
/// Returns `None` when the stored value has the wrong shape; callers decide
/// whether that is an error or a fallback. Integer properties widen to the
/// float types, but floats never silently truncate to integers.
pub trait FromPropertyValue: Sized {
    /// Attempt to convert a Tiled property value to this type.
    fn from_value(value: &PropertyValue) -> Option<Self>;
}

impl FromPropertyValue for bool {
    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::BoolValue(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromPropertyValue for i32 {
    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::IntValue(i) => Some(*i),
            _ => None,
        }
    }
}

impl FromPropertyValue for u32 {
    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::IntValue(i) if *i >= 0 => Some(*i as u32),
            _ => None,
        }
    }
}

impl FromPropertyValue for f32 {
    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::FloatValue(f) => Some(*f),
            PropertyValue::IntValue(i) => Some(*i as f32),
            _ => None,
        }
    }
}

impl FromPropertyValue for f64 {
    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::FloatValue(f) => Some(f64::from(*f)),
            PropertyValue::IntValue(i) => Some(f64::from(*i)),
            _ => None,
        }
    }
}

impl FromPropertyValue for String {
    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::StringValue(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromPropertyValue for PathBuf {
    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::FileValue(p) => Some(PathBuf::from(p)),
            PropertyValue::StringValue(s) => Some(PathBuf::from(s)),
            _ => None,
        }
    }
}

impl<T: FromPropertyValue> FromPropertyValue for Option<T> {
    fn from_value(value: &PropertyValue) -> Option<Self> {
        match T::from_value(value) {
            Some(inner) => Some(Some(inner)),
            // An explicitly empty string reads as an absent optional.
            None => match value {
                PropertyValue::StringValue(s) if s.is_empty() => Some(None),
                _ => None,
            },
        }
    }
}

/// Looks up `key` in `props` and converts it, `None` if absent or mistyped.
pub(crate) fn get<T: FromPropertyValue>(props: &tiled::Properties, key: &str) -> Option<T> {
    props.get(key).and_then(T::from_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ints_widen_to_floats() {
        let v = PropertyValue::IntValue(25);
        assert_eq!(f32::from_value(&v), Some(25.0));
        assert_eq!(f64::from_value(&v), Some(25.0));
        assert_eq!(u32::from_value(&v), Some(25));
    }

    #[test]
    fn floats_do_not_truncate() {
        let v = PropertyValue::FloatValue(1.5);
        assert_eq!(i32::from_value(&v), None);
        assert_eq!(u32::from_value(&v), None);
        assert_eq!(f32::from_value(&v), Some(1.5));
    }

    #[test]
    fn negative_ints_are_not_u32() {
        assert_eq!(u32::from_value(&PropertyValue::IntValue(-4)), None);
    }

    #[test]
    fn empty_string_is_absent_optional() {
        let v = PropertyValue::StringValue(String::new());
        assert_eq!(Option::<u32>::from_value(&v), Some(None));
        let v = PropertyValue::StringValue("barn".into());
        assert_eq!(
            Option::<String>::from_value(&v),
            Some(Some("barn".to_string()))
        );
    }
}
