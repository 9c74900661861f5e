//! Application-Layer: Controller, Modi, Events und Viewport-Data-Source.

pub mod controller;
pub mod events;
pub mod mode;
pub mod padding;
pub mod viewport;

pub use controller::NavigationCameraController;
pub use events::CameraEvent;
pub use mode::CameraMode;
pub use viewport::ViewportDataSource;
