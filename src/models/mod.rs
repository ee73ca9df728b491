pub mod naming;
pub mod shape;
pub mod theme;

// Re-export commonly used types
pub use naming::*;
pub use shape::*;
pub use theme::*;
