pub mod resource_id;

pub use resource_id::{ArmIdError, ArmIdResult, ArmResourceId};
