//! Discriminated unions in API payloads
//!
//! Several Azure payloads carry a field naming the concrete model, e.g.
//! `{"type": "Docker", ...}` for a container registry task step. Each union
//! is a closed enum with an `Unknown` case, so payloads from newer API
//! versions still round-trip.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::trace;

/// Declare a union decoded on the named discriminator field.
macro_rules! polymorphic {
    (
        $(#[$meta:meta])*
        pub enum $name:ident($field:literal) {
            $($variant:ident($ty:ty) => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $($variant($ty),)+
            /// A model this crate doesn't know, kept as received
            Unknown($crate::polymorphic::RawPayload),
        }

        impl $name {
            /// The discriminator value this payload was, or will be, written with
            pub fn discriminator(&self) -> &str {
                match self {
                    $($name::$variant(_) => $value,)+
                    $name::Unknown(raw) => &raw.discriminator,
                }
            }
        }

        impl $crate::polymorphic::Polymorphic for $name {
            const FIELD: &'static str = $field;

            fn known_values() -> &'static [&'static str] {
                &[$($value),+]
            }

            fn from_value(
                value: ::serde_json::Value,
            ) -> Result<Option<Self>, $crate::polymorphic::DecodeError> {
                let Some(discriminator) = $crate::polymorphic::discriminator_of(&value, $field)? else {
                    return Ok(None);
                };

                $(
                    if discriminator.eq_ignore_ascii_case($value) {
                        return $crate::polymorphic::decode_variant(&discriminator, value)
                            .map(|inner| Some($name::$variant(inner)));
                    }
                )+

                $crate::polymorphic::RawPayload::from_value(discriminator, value)
                    .map(|raw| Some($name::Unknown(raw)))
            }

            fn to_value(&self) -> Result<::serde_json::Value, $crate::polymorphic::DecodeError> {
                match self {
                    $($name::$variant(inner) => {
                        $crate::polymorphic::with_discriminator($field, $value, inner)
                    })+
                    $name::Unknown(raw) => Ok(raw.to_value()),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let value = $crate::polymorphic::Polymorphic::to_value(self)
                    .map_err(<S::Error as ::serde::ser::Error>::custom)?;
                ::serde::Serialize::serialize(&value, serializer)
            }
        }
    };
}

pub mod containerregistry;
pub mod media;
pub mod recoveryservices;

pub use containerregistry::TaskStepProperties;
pub use media::Format;
pub use recoveryservices::ProtectedItem;

/// Union names accepted by [`decode_named`]
pub const UNIONS: &[&str] = &["TaskStepProperties", "ProtectedItem", "Format"];

/// Errors raised while decoding a polymorphic payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input isn't valid JSON
    InvalidJson(String),

    /// The payload isn't a JSON object
    NotAnObject,

    /// The discriminator field holds something other than a string
    InvalidDiscriminator { field: String },

    /// The payload doesn't fit the model its discriminator names
    Variant { discriminator: String, message: String },

    /// No union with that name
    UnknownUnion(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidJson(e) => write!(f, "invalid JSON: {}", e),
            DecodeError::NotAnObject => write!(f, "expected a JSON object"),
            DecodeError::InvalidDiscriminator { field } => {
                write!(f, "expected the {:?} field to be a string", field)
            }
            DecodeError::Variant {
                discriminator,
                message,
            } => write!(f, "decoding {} payload: {}", discriminator, message),
            DecodeError::UnknownUnion(name) => write!(
                f,
                "Unknown union: {} (expected one of {})",
                name,
                UNIONS.join(", ")
            ),
        }
    }
}

impl std::error::Error for DecodeError {}

/// A payload whose discriminator isn't one of the known models
#[derive(Debug, Clone, PartialEq)]
pub struct RawPayload {
    pub discriminator: String,
    /// Every field of the payload, the discriminator included
    pub values: Map<String, Value>,
}

impl RawPayload {
    pub fn from_value(discriminator: String, value: Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(values) => Ok(Self {
                discriminator,
                values,
            }),
            _ => Err(DecodeError::NotAnObject),
        }
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.values.clone())
    }
}

/// A union type keyed on a discriminator field
pub trait Polymorphic: Sized {
    /// Name of the discriminator field
    const FIELD: &'static str;

    /// Discriminator values of the known models
    fn known_values() -> &'static [&'static str];

    /// Decode a JSON value; `None` when the discriminator is absent
    fn from_value(value: Value) -> Result<Option<Self>, DecodeError>;

    /// Encode with the canonical discriminator
    fn to_value(&self) -> Result<Value, DecodeError>;

    /// Decode a JSON document
    fn decode(input: &str) -> Result<Option<Self>, DecodeError> {
        let value: Value =
            serde_json::from_str(input).map_err(|e| DecodeError::InvalidJson(e.to_string()))?;
        Self::from_value(value)
    }
}

/// Read the discriminator; absent or null yields `None`
pub fn discriminator_of(value: &Value, field: &str) -> Result<Option<String>, DecodeError> {
    let object = value.as_object().ok_or(DecodeError::NotAnObject)?;

    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(discriminator)) => {
            trace!(field, discriminator = %discriminator, "found discriminator");
            Ok(Some(discriminator.clone()))
        }
        Some(_) => Err(DecodeError::InvalidDiscriminator {
            field: field.to_string(),
        }),
    }
}

/// Decode a known model, ignoring the discriminator field itself
pub fn decode_variant<T: DeserializeOwned>(discriminator: &str, value: Value) -> Result<T, DecodeError> {
    serde_json::from_value(value).map_err(|e| DecodeError::Variant {
        discriminator: discriminator.to_string(),
        message: e.to_string(),
    })
}

/// Encode a known model and insert its discriminator
pub fn with_discriminator<T: Serialize>(
    field: &str,
    discriminator: &str,
    inner: &T,
) -> Result<Value, DecodeError> {
    let value = serde_json::to_value(inner).map_err(|e| DecodeError::Variant {
        discriminator: discriminator.to_string(),
        message: e.to_string(),
    })?;

    let Value::Object(mut values) = value else {
        return Err(DecodeError::NotAnObject);
    };
    values.insert(field.to_string(), Value::String(discriminator.to_string()));

    Ok(Value::Object(values))
}

/// Result of decoding a payload through [`decode_named`]
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub discriminator: String,
    pub known: bool,
    /// The payload re-encoded with its canonical discriminator
    pub value: Value,
}

fn decode_as<T: Polymorphic>(input: &str, discriminator: impl Fn(&T) -> String) -> Result<Option<Decoded>, DecodeError> {
    let Some(decoded) = T::decode(input)? else {
        return Ok(None);
    };

    let discriminator = discriminator(&decoded);
    Ok(Some(Decoded {
        known: T::known_values().contains(&discriminator.as_str()),
        value: decoded.to_value()?,
        discriminator,
    }))
}

/// Decode a payload as the union called `union` (case-insensitive)
pub fn decode_named(union: &str, input: &str) -> Result<Option<Decoded>, DecodeError> {
    match union.to_ascii_lowercase().as_str() {
        "taskstepproperties" => {
            decode_as::<TaskStepProperties>(input, |d| d.discriminator().to_string())
        }
        "protecteditem" => decode_as::<ProtectedItem>(input, |d| d.discriminator().to_string()),
        "format" => decode_as::<Format>(input, |d| d.discriminator().to_string()),
        _ => Err(DecodeError::UnknownUnion(union.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_discriminator_of() {
        assert_eq!(
            discriminator_of(&json!({"type": "Docker"}), "type").unwrap(),
            Some("Docker".to_string())
        );
        assert_eq!(discriminator_of(&json!({}), "type").unwrap(), None);
        assert_eq!(discriminator_of(&json!({"type": null}), "type").unwrap(), None);
        assert_eq!(
            discriminator_of(&json!([]), "type"),
            Err(DecodeError::NotAnObject)
        );
        assert!(matches!(
            discriminator_of(&json!({"type": 3}), "type"),
            Err(DecodeError::InvalidDiscriminator { .. })
        ));
    }

    #[test]
    fn test_with_discriminator_inserts_field() {
        #[derive(Serialize)]
        struct Inner {
            name: String,
        }

        let value = with_discriminator(
            "kind",
            "Widget",
            &Inner {
                name: "w1".to_string(),
            },
        )
        .unwrap();
        assert_eq!(value, json!({"kind": "Widget", "name": "w1"}));
    }

    #[test]
    fn test_decode_named() {
        let decoded = decode_named("taskStepProperties", r#"{"type": "docker", "dockerFilePath": "Dockerfile"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(decoded.discriminator, "Docker");
        assert!(decoded.known);
        assert_eq!(decoded.value["type"], json!("Docker"));

        let unknown = decode_named("Format", r##"{"@odata.type": "#Microsoft.Media.GifFormat"}"##)
            .unwrap()
            .unwrap();
        assert!(!unknown.known);

        assert_eq!(decode_named("Format", "{}").unwrap(), None);
        assert!(matches!(
            decode_named("Nope", "{}"),
            Err(DecodeError::UnknownUnion(_))
        ));
        assert!(matches!(
            decode_named("Format", "not json"),
            Err(DecodeError::InvalidJson(_))
        ));
    }
}
