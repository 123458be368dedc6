/// Declare a typed resource ID over a static segment list.
///
/// ```ignore
/// resource_id! {
///     /// ServiceId is a struct representing the Resource ID for a Service
///     pub struct ServiceId("Service") {
///         subscription_id => "subscriptionId",
///         resource_group_name => "resourceGroupName",
///         service_name => "serviceName",
///     }
///     segments: [
///         Segment::static_segment("staticSubscriptions", "subscriptions"),
///         Segment::subscription_id("subscriptionId"),
///         // ...
///     ]
/// }
/// ```
///
/// Every field maps to the label of a capturing segment. The generated type
/// gets `new`, [`ResourceId`](crate::resourceids::ResourceId), `Display`,
/// `FromStr` (strict parsing) and serde support as a plain ID string.
#[macro_export]
macro_rules! resource_id {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($id_type:literal) {
            $($field:ident => $label:literal),+ $(,)?
        }
        segments: [
            $($segment:expr),+ $(,)?
        ]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name {
            $(pub $field: String,)+
        }

        impl $name {
            pub const SEGMENTS: &'static [$crate::resourceids::Segment] = &[$($segment),+];

            pub fn new($($field: impl Into<String>),+) -> Self {
                Self {
                    $($field: $field.into(),)+
                }
            }
        }

        impl $crate::resourceids::ResourceId for $name {
            const ID_TYPE: &'static str = $id_type;

            fn segments() -> &'static [$crate::resourceids::Segment] {
                Self::SEGMENTS
            }

            fn from_parse_result(
                result: &$crate::resourceids::ParseResult,
            ) -> Result<Self, $crate::resourceids::ParseErrorKind> {
                Ok(Self {
                    $($field: result.required($label)?,)+
                })
            }

            fn segment_value(&self, label: &str) -> Option<&str> {
                match label {
                    $($label => Some(self.$field.as_str()),)+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", $crate::resourceids::ResourceId::id(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::resourceids::ParseError;

            fn from_str(input: &str) -> Result<Self, Self::Err> {
                <Self as $crate::resourceids::ResourceId>::parse(input)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&$crate::resourceids::ResourceId::id(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::resourceids::ResourceId>::parse(&raw)
                    .map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}
