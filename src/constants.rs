//! String-valued enumerations returned by the Azure APIs
//!
//! The APIs aren't consistent about casing and add new values over time, so
//! parsing matches case-insensitively and keeps unknown values as
//! `Other(String)` rather than failing.

/// Declare a string-valued enum with an `Other` fallback.
///
/// ```ignore
/// string_enum! {
///     pub enum TaskState {
///         Queued => "Queued",
///         Running => "Running",
///     }
/// }
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            /// A value not known when this type was written
            Other(String),
        }

        impl $name {
            /// Every known value, in declaration order
            pub fn possible_values() -> &'static [&'static str] {
                &[$($value),+]
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $value,)+
                    $name::Other(value) => value.as_str(),
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(input: &str) -> Result<Self, Self::Err> {
                $(
                    if input.eq_ignore_ascii_case($value) {
                        return Ok($name::$variant);
                    }
                )+
                Ok($name::Other(input.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(input: &str) -> Self {
                match input.parse() {
                    Ok(value) => value,
                    Err(never) => match never {},
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok($name::from(raw.as_str()))
            }
        }
    };
}

string_enum! {
    /// Backup protection state of a protected item
    pub enum ProtectionState {
        Invalid => "Invalid",
        IrPending => "IRPending",
        Protected => "Protected",
        ProtectionError => "ProtectionError",
        ProtectionPaused => "ProtectionPaused",
        ProtectionStopped => "ProtectionStopped",
    }
}

string_enum! {
    /// Health of the last backup of a protected item
    pub enum HealthStatus {
        ActionRequired => "ActionRequired",
        ActionSuggested => "ActionSuggested",
        Invalid => "Invalid",
        Passed => "Passed",
    }
}

string_enum! {
    /// State of a database migration task
    pub enum TaskState {
        Canceled => "Canceled",
        Failed => "Failed",
        FailedInputValidation => "FailedInputValidation",
        Faulted => "Faulted",
        Queued => "Queued",
        Running => "Running",
        Succeeded => "Succeeded",
        Unknown => "Unknown",
    }
}

string_enum! {
    /// Operating system a container registry task step builds for
    pub enum Os {
        Linux => "Linux",
        Windows => "Windows",
    }
}

string_enum! {
    pub enum StepType {
        Docker => "Docker",
        EncodedTask => "EncodedTask",
        FileTask => "FileTask",
    }
}
