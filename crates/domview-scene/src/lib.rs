//! Viewer side of domain views
//!
//! - [`StructureViewer`]: the capability domain styling needs from a viewer
//! - [`ViewerSession`]: in-memory viewer owning one loaded structure
//! - [`Camera`]: origin, distance and clipping for a session
//! - [`LoadTracker`]: generation tokens that discard results of superseded loads

mod camera;
mod error;
mod generation;
mod session;
mod viewer_trait;

pub use camera::Camera;
pub use error::{ViewerError, ViewerResult};
pub use generation::{LoadTicket, LoadTracker};
pub use session::ViewerSession;
pub use viewer_trait::StructureViewer;
