//! Clipping of an incident face against a reference face.

pub use self::clip_incident_face::clip_incident_face;

mod clip_incident_face;
