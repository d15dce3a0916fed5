/// Identifies the box features that produced a contact point.
///
/// Each slot holds a box edge index in `0..12` (see [`cuboid_edge_id`]) or
/// [`FeatureId::UNSET`]. Two contacts produced by the same features in two
/// consecutive frames carry the same `FeatureId`, which is what a solver
/// matches on to warm-start its impulses. This crate only produces these
/// identifiers; it never reads back a previous frame's.
///
/// [`cuboid_edge_id`]: crate::shape::cuboid_edge_id
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct FeatureId {
    /// Reference edge through which the contact's polygon edge enters the reference face.
    pub in_reference: u8,
    /// Reference edge through which the contact's polygon edge leaves the reference face.
    pub out_reference: u8,
    /// Incident edge ending at this contact.
    pub in_incident: u8,
    /// Incident edge starting at this contact.
    pub out_incident: u8,
}

static_assertions::assert_eq_size!(FeatureId, u32);

impl Default for FeatureId {
    fn default() -> Self {
        Self::UNSET_ALL
    }
}

impl FeatureId {
    /// Value of a slot that was not assigned.
    pub const UNSET: u8 = u8::MAX;

    /// A feature id with every slot unset.
    pub const UNSET_ALL: Self = Self {
        in_reference: Self::UNSET,
        out_reference: Self::UNSET,
        in_incident: Self::UNSET,
        out_incident: Self::UNSET,
    };

    /// A feature id describing an incident vertex between the edges `in_incident` and `out_incident`.
    pub const fn incident(in_incident: u8, out_incident: u8) -> Self {
        Self {
            in_reference: Self::UNSET,
            out_reference: Self::UNSET,
            in_incident,
            out_incident,
        }
    }

    /// A feature id describing the crossing of the reference edge `reference` and the incident edge `incident`.
    pub const fn edge_edge(reference: u8, incident: u8) -> Self {
        Self {
            in_reference: reference,
            out_reference: Self::UNSET,
            in_incident: incident,
            out_incident: Self::UNSET,
        }
    }

    /// The identifier as a `(in_reference, out_reference, in_incident, out_incident)` tuple.
    pub fn as_tuple(self) -> (u8, u8, u8, u8) {
        (
            self.in_reference,
            self.out_reference,
            self.in_incident,
            self.out_incident,
        )
    }

    /// Returns `true` if no slot has been assigned.
    pub fn is_unset(self) -> bool {
        self == Self::UNSET_ALL
    }
}
