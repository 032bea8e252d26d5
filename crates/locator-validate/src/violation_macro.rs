//! Violation Definition Macro
//!
//! Provides a declarative macro for defining violation enums with
//! automatic trait implementations.
//!
//! # Example
//!
//! ```ignore
//! define_violations! {
//!     pub enum RegistrationViolation {
//!         #[violation(
//!             id = "LOC001",
//!             category = Registration,
//!             severity = Error,
//!             message = "Missing binding descriptor for {group} interface '{interface}'"
//!         )]
//!         MissingDescriptor {
//!             interface: QualifiedName,
//!             group: ModuleGroup,
//!         },
//!     }
//! }
//! ```

/// Macro to define violation enums with automatic trait implementations
///
/// This macro generates:
/// - The enum with all variants
/// - `Display` implementation with formatted messages
/// - `Violation` trait implementation
///
/// # Parameters
///
/// - `$vis`: Visibility modifier (pub, pub(crate), etc.)
/// - `$name`: Name of the enum
/// - For each variant:
///   - `id`: Unique violation identifier (e.g., "LOC001")
///   - `category`: `ViolationCategory` variant for grouping in reports
///   - `severity`: Error, Warning, or Info
///   - `message`: Display message; must use every field as a `{field}` placeholder
///   - `suggestion` (optional): Suggested fix; must also use every field
///   - A field named `interface` (a `QualifiedName`) is picked up by
///     `Violation::interface`, a field named `slot` (a `Slot`) by `Violation::slot`
#[macro_export]
macro_rules! define_violations {
    (
        $vis:vis enum $name:ident {
            $(
                #[violation(
                    id = $id:literal,
                    category = $vcategory:ident,
                    severity = $severity:ident
                    $(, message = $msg:literal)?
                    $(, suggestion = $suggestion:literal)?
                )]
                $variant:ident {
                    $( $field:ident : $field_ty:ty ),* $(,)?
                }
            ),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
        $vis enum $name {
            $( $variant { $( $field: $field_ty ),* } ),*
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        Self::$variant { $( $field ),* } => {
                            $crate::define_violations!(@format f, $($msg,)? $( $field ),*)
                        }
                    ),*
                }
            }
        }

        impl $crate::violation_trait::Violation for $name {
            fn id(&self) -> &str {
                match self {
                    $( Self::$variant { .. } => $id ),*
                }
            }

            fn category(&self) -> $crate::violation_trait::ViolationCategory {
                match self {
                    $( Self::$variant { .. } => $crate::violation_trait::ViolationCategory::$vcategory ),*
                }
            }

            fn severity(&self) -> $crate::violation_trait::Severity {
                match self {
                    $( Self::$variant { .. } => $crate::violation_trait::Severity::$severity ),*
                }
            }

            #[allow(unused_variables, unreachable_code)]
            fn interface(&self) -> Option<&locator_domain::QualifiedName> {
                match self {
                    $(
                        Self::$variant { $( $field ),* } => {
                            $crate::define_violations!(@get_interface $( $field : $field_ty ),*)
                        }
                    ),*
                }
            }

            #[allow(unused_variables, unreachable_code)]
            fn slot(&self) -> Option<locator_domain::Slot> {
                match self {
                    $(
                        Self::$variant { $( $field ),* } => {
                            $crate::define_violations!(@get_slot $( $field : $field_ty ),*)
                        }
                    ),*
                }
            }

            #[allow(unused_variables)]
            fn suggestion(&self) -> Option<String> {
                match self {
                    $(
                        Self::$variant { $( $field ),* } => {
                            $crate::define_violations!(@suggestion $($suggestion,)? $( $field ),*)
                        }
                    ),*
                }
            }
        }
    };

    // Format helper - with message template
    (@format $f:ident, $msg:literal, $( $field:ident ),*) => {
        write!($f, $msg, $( $field = $field ),*)
    };

    // Format helper - no message template (use Debug)
    (@format $f:ident, $( $field:ident ),*) => {
        write!($f, "{:?}", ($( $field ),*))
    };

    // Get interface field helper
    (@get_interface $( $field:ident : $field_ty:ty ),*) => {{
        $(
            $crate::define_violations!(@check_interface_field $field $field : $field_ty);
        )*
        None
    }};

    // The name is matched literally, the second ident keeps the caller's hygiene
    (@check_interface_field interface $binding:ident : $field_ty:ty) => { return Some($binding) };
    (@check_interface_field $name:ident $binding:ident : $field_ty:ty) => {};

    // Get slot field helper
    (@get_slot $( $field:ident : $field_ty:ty ),*) => {{
        $(
            $crate::define_violations!(@check_slot_field $field $field : $field_ty);
        )*
        None
    }};

    (@check_slot_field slot $binding:ident : $field_ty:ty) => { return Some(*$binding) };
    (@check_slot_field $name:ident $binding:ident : $field_ty:ty) => {};

    // Suggestion helper - with suggestion template
    (@suggestion $suggestion:literal, $( $field:ident ),*) => {
        Some(format!($suggestion, $( $field = $field ),*))
    };

    // Suggestion helper - no suggestion
    (@suggestion $( $field:ident ),*) => {
        None
    };
}
