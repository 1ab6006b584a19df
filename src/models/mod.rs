pub mod descriptor;
pub mod field_value;
pub mod snapshot;

pub use descriptor::{BindingPolicy, Constraints, ControlKind, FieldDescriptor, ValueKind};
pub use field_value::FieldValue;
pub use snapshot::Snapshot;
