pub mod input_type;
pub mod sample;
pub mod threshold;

// re-export for cleaner imports
pub use self::input_type::InputType;
pub use self::sample::{FileRole, Manifest, SampleRecord};
pub use self::threshold::FileThreshold;
