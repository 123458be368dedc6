//! armid - Azure resource identifier codec
//!
//! Parses, formats and validates the slash-delimited identifiers Azure uses to
//! address management-plane (ARM) resources and data-plane objects.
//!
//! ```
//! use armid::ids::datamigration::ProjectId;
//! use armid::resourceids::ResourceId;
//!
//! let id = ProjectId::new(
//!     "00000000-0000-0000-0000-000000000000",
//!     "resGroup1",
//!     "service1",
//!     "project1",
//! );
//! let parsed = ProjectId::parse(&id.id()).unwrap();
//! assert_eq!(parsed, id);
//! ```

pub mod azure;
pub mod commands;
pub mod config;
pub mod constants;
pub mod context;
pub mod ids;
pub mod output;
pub mod polymorphic;
pub mod registry;
pub mod resourceids;
pub mod scope;
pub mod traits;

pub use azure::ArmResourceId;
pub use registry::{IdDefinition, IdRegistry};
pub use resourceids::{ParseError, ParseErrorKind, ParseResult, ResourceId, Segment, SegmentKind};
pub use scope::{ProvisioningScope, ScopeError, classify_scope};
