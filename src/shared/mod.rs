//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `camera` und `engine` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod framing;
pub mod options;

pub use framing::FramingRequest;
pub use options::CameraTuning;
