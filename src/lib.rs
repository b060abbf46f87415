pub mod registry;
pub use registry::{LabelId, LabelRegistry, Labels};
pub mod shared;
pub use shared::SharedLabelRegistry;
pub mod testing;
