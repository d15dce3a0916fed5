//! Shapes supported by boxclip.

pub use self::cuboid_edges::{cuboid_edge, cuboid_edge_id, NUM_CUBOID_EDGES};
pub use self::feature_id::FeatureId;
pub use self::obb::Obb;
pub use self::obb_faces::{
    ClipVertex, IncidentFaceCase, ReferenceFace, ReferenceFaceCase, INCIDENT_FACES,
    REFERENCE_FACES,
};

mod cuboid_edges;
mod feature_id;
mod obb;
mod obb_faces;
