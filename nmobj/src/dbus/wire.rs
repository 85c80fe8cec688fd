//! Wire-type tags and strict decoding of raw D-Bus values.
//!
//! Every property in the schema table declares one [`WireType`]. A value read
//! from the bus is accepted only when its signature matches that tag exactly;
//! nothing is widened, narrowed or defaulted.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use serde::Serialize;
use serde_json::{Map, Number, Value as Json};
use zvariant::{OwnedObjectPath, OwnedValue, Value};

/// D-Bus wire types used by NetworkManager properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    /// `y`
    Byte,
    /// `q`
    UInt16,
    /// `u`
    UInt32,
    /// `i`
    Int32,
    /// `x`
    Int64,
    /// `b`
    Bool,
    /// `s`
    Str,
    /// `o`
    ObjectPath,
    /// `ay`
    ByteArray,
    /// `ao`
    ObjectPathArray,
    /// `as`
    StrArray,
    /// `a{sv}`
    VariantMap,
}

impl WireType {
    /// The D-Bus type signature for this tag.
    pub const fn signature(self) -> &'static str {
        match self {
            Self::Byte => "y",
            Self::UInt16 => "q",
            Self::UInt32 => "u",
            Self::Int32 => "i",
            Self::Int64 => "x",
            Self::Bool => "b",
            Self::Str => "s",
            Self::ObjectPath => "o",
            Self::ByteArray => "ay",
            Self::ObjectPathArray => "ao",
            Self::StrArray => "as",
            Self::VariantMap => "a{sv}",
        }
    }

    /// Returns true if `value` carries exactly this wire type.
    pub fn matches(self, value: &Value<'_>) -> bool {
        signature_of(value) == self.signature()
    }
}

impl Display for WireType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.signature())
    }
}

/// Renders the signature of a raw value, e.g. `"u"` or `"a{sv}"`.
pub(crate) fn signature_of(value: &Value<'_>) -> String {
    value.value_signature().to_string()
}

/// Native Rust types a property can be decoded into.
///
/// Implementations exist for exactly one wire type each. The caller is
/// expected to have checked the signature with [`WireType::matches`] first;
/// `from_wire` still fails rather than guessing if it was not.
pub trait FromWire: Sized {
    /// The wire type this native type decodes from.
    const WIRE: WireType;

    /// Converts an already signature-checked value.
    fn from_wire(value: OwnedValue) -> Result<Self, zvariant::Error>;
}

macro_rules! impl_from_wire {
    ($($ty:ty => $wire:ident),* $(,)?) => {
        $(
            impl FromWire for $ty {
                const WIRE: WireType = WireType::$wire;

                fn from_wire(value: OwnedValue) -> Result<Self, zvariant::Error> {
                    <$ty>::try_from(value)
                }
            }
        )*
    };
}

impl_from_wire! {
    u8 => Byte,
    u16 => UInt16,
    u32 => UInt32,
    i32 => Int32,
    i64 => Int64,
    bool => Bool,
    String => Str,
    OwnedObjectPath => ObjectPath,
    Vec<u8> => ByteArray,
    Vec<OwnedObjectPath> => ObjectPathArray,
    Vec<String> => StrArray,
    HashMap<String, OwnedValue> => VariantMap,
}

/// A decoded property value of any supported wire type.
///
/// Used for schema-driven dumps where the concrete type is only known at
/// runtime. Serializes untagged, so a `UInt32(7)` becomes `7` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WireValue {
    Byte(u8),
    UInt16(u16),
    UInt32(u32),
    Int32(i32),
    Int64(i64),
    Bool(bool),
    Str(String),
    ObjectPath(String),
    ByteArray(Vec<u8>),
    ObjectPathArray(Vec<String>),
    StrArray(Vec<String>),
    VariantMap(Map<String, Json>),
}

impl WireValue {
    /// Decodes `value` as `wire`. The signature must already match.
    pub(crate) fn decode(wire: WireType, value: OwnedValue) -> Result<Self, zvariant::Error> {
        Ok(match wire {
            WireType::Byte => Self::Byte(u8::from_wire(value)?),
            WireType::UInt16 => Self::UInt16(u16::from_wire(value)?),
            WireType::UInt32 => Self::UInt32(u32::from_wire(value)?),
            WireType::Int32 => Self::Int32(i32::from_wire(value)?),
            WireType::Int64 => Self::Int64(i64::from_wire(value)?),
            WireType::Bool => Self::Bool(bool::from_wire(value)?),
            WireType::Str => Self::Str(String::from_wire(value)?),
            WireType::ObjectPath => {
                Self::ObjectPath(OwnedObjectPath::from_wire(value)?.as_str().to_owned())
            }
            WireType::ByteArray => Self::ByteArray(Vec::<u8>::from_wire(value)?),
            WireType::ObjectPathArray => Self::ObjectPathArray(
                Vec::<OwnedObjectPath>::from_wire(value)?
                    .iter()
                    .map(|p| p.as_str().to_owned())
                    .collect(),
            ),
            WireType::StrArray => Self::StrArray(Vec::<String>::from_wire(value)?),
            WireType::VariantMap => {
                Self::VariantMap(variant_map_to_json(&HashMap::from_wire(value)?))
            }
        })
    }

    /// Converts to a JSON value.
    pub fn to_json(&self) -> Json {
        match self {
            Self::Byte(v) => Json::from(*v),
            Self::UInt16(v) => Json::from(*v),
            Self::UInt32(v) => Json::from(*v),
            Self::Int32(v) => Json::from(*v),
            Self::Int64(v) => Json::from(*v),
            Self::Bool(v) => Json::from(*v),
            Self::Str(v) | Self::ObjectPath(v) => Json::from(v.as_str()),
            Self::ByteArray(v) => Json::from(v.clone()),
            Self::ObjectPathArray(v) | Self::StrArray(v) => Json::from(v.clone()),
            Self::VariantMap(m) => Json::Object(m.clone()),
        }
    }
}

/// Converts an `a{sv}` map into a JSON object, sorted by key.
pub(crate) fn variant_map_to_json(map: &HashMap<String, OwnedValue>) -> Map<String, Json> {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();
    keys.into_iter()
        .map(|k| (k.clone(), value_to_json(&map[k])))
        .collect()
}

/// Best-effort JSON rendering of an arbitrary variant payload.
///
/// Containers other than arrays fall back to the GVariant text form.
pub(crate) fn value_to_json(value: &Value<'_>) -> Json {
    match value {
        Value::U8(v) => Json::from(*v),
        Value::Bool(v) => Json::from(*v),
        Value::I16(v) => Json::from(*v),
        Value::U16(v) => Json::from(*v),
        Value::I32(v) => Json::from(*v),
        Value::U32(v) => Json::from(*v),
        Value::I64(v) => Json::from(*v),
        Value::U64(v) => Json::from(*v),
        Value::F64(v) => Number::from_f64(*v).map_or(Json::Null, Json::Number),
        Value::Str(s) => Json::from(s.as_str()),
        Value::ObjectPath(p) => Json::from(p.as_str()),
        Value::Value(inner) => value_to_json(inner),
        Value::Array(a) => Json::Array(a.iter().map(value_to_json).collect()),
        other => Json::from(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zvariant::ObjectPath;

    fn owned<'a>(v: impl Into<Value<'a>>) -> OwnedValue {
        v.into().try_to_owned().unwrap()
    }

    #[test]
    fn signatures_match_tags() {
        assert!(WireType::UInt32.matches(&Value::from(5u32)));
        assert!(WireType::Byte.matches(&Value::from(5u8)));
        assert!(WireType::ByteArray.matches(&Value::from(vec![1u8, 2, 3])));
        assert!(WireType::StrArray.matches(&Value::from(vec!["a", "b"])));
        assert!(!WireType::UInt32.matches(&Value::from(5i32)));
        assert!(!WireType::ByteArray.matches(&Value::from(vec!["a"])));
    }

    #[test]
    fn empty_arrays_keep_their_element_type() {
        let empty_strings: Vec<String> = Vec::new();
        assert!(!WireType::ByteArray.matches(&Value::from(empty_strings)));
    }

    #[test]
    fn object_path_array_signature() {
        let paths = vec![ObjectPath::try_from("/a").unwrap()];
        assert!(WireType::ObjectPathArray.matches(&Value::from(paths)));
    }

    #[test]
    fn variant_map_signature() {
        let mut map: HashMap<String, Value<'_>> = HashMap::new();
        map.insert("ip_address".into(), Value::from("10.0.0.2"));
        assert!(WireType::VariantMap.matches(&Value::from(map)));
    }

    #[test]
    fn decode_scalars() {
        assert_eq!(
            WireValue::decode(WireType::Int32, owned(-1i32)).unwrap(),
            WireValue::Int32(-1)
        );
        assert_eq!(
            WireValue::decode(WireType::Str, owned("eth0")).unwrap(),
            WireValue::Str("eth0".into())
        );
    }

    #[test]
    fn decode_variant_map_to_json() {
        let mut map: HashMap<String, Value<'_>> = HashMap::new();
        map.insert("lease_time".into(), Value::from(3600u32));
        map.insert("domain".into(), Value::from("lan"));
        let decoded = WireValue::decode(WireType::VariantMap, owned(map)).unwrap();
        assert_eq!(
            decoded.to_json(),
            serde_json::json!({"domain": "lan", "lease_time": 3600})
        );
    }

    #[test]
    fn wire_value_serializes_untagged() {
        let json = serde_json::to_string(&WireValue::UInt32(54000)).unwrap();
        assert_eq!(json, "54000");
    }

    #[test]
    fn display_is_signature() {
        assert_eq!(WireType::VariantMap.to_string(), "a{sv}");
        assert_eq!(WireType::ObjectPathArray.to_string(), "ao");
    }
}
