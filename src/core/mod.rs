// Public modules
pub mod case;
pub mod defaults;
pub mod error;
pub mod paths;
pub mod render;
pub mod replace;
pub mod walk;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use replace::{
    reconstruct, replace, replace_in_path, scan_and_reconstruct, Fragment, Query, Replacement,
    ScanMode,
};
