//! EditTK Core
//!
//! Math and data layer shared by the gizmo crate and the editor frontend.
//! Nothing in here knows about a GUI library.
//!
//! # Module Structure
//!
//! ```text
//! etk-core/
//! ├── view.rs           # SceneViewState, CameraState, Rect, projection
//! ├── camera.rs         # Orbit camera producing SceneViewState
//! ├── geometry.rs       # Hit-test geometry
//! ├── axis.rs           # HoveredAxis flag set
//! ├── color.rs          # PackedColor + blending
//! ├── value_tracker.rs  # Drag scalar accumulator
//! ├── draw.rs           # DrawList trait, DrawRecorder
//! ├── input.rs          # InputSnapshot
//! └── config.rs         # GizmoConfig (RON)
//! ```

pub mod axis;
pub mod camera;
pub mod color;
pub mod config;
pub mod draw;
pub mod geometry;
pub mod input;
pub mod value_tracker;
pub mod view;

pub use axis::{HoveredAxis, axis_name};
pub use camera::Camera;
pub use color::PackedColor;
pub use config::{ConfigError, GizmoConfig};
pub use draw::{DrawCommand, DrawList, DrawRecorder, TextureHandle};
pub use input::{ButtonState, InputSnapshot};
pub use value_tracker::{ValueTracker, shortest_rotation_between};
pub use view::{CameraState, Rect, SceneViewState};
