use crate::bounding_volume::Aabb;
use crate::partitioning::{BroadPhase, CandidatePair, SweepAndPrune};
use crate::pipeline::{narrow_phase, BoxBodies};
use crate::query::{CollisionError, ContactPair, ContactParams};

/// Runs the broad phase then the narrow phase on a set of boxes, once per step.
///
/// The pipeline keeps its broad phase and its intermediate buffers alive
/// between steps so they are not reallocated every frame. It keeps nothing
/// else: the contacts of a step only depend on the bodies given to that step.
#[derive(Clone, Debug)]
pub struct CollisionPipeline<BP: BroadPhase> {
    /// Parameters of the narrow phase.
    pub params: ContactParams,
    broad_phase: BP,
    aabbs: Vec<Aabb>,
    candidates: Vec<CandidatePair>,
}

impl Default for CollisionPipeline<SweepAndPrune> {
    fn default() -> Self {
        Self::new(SweepAndPrune::new(), ContactParams::default())
    }
}

impl<BP: BroadPhase> CollisionPipeline<BP> {
    /// Creates a pipeline with the given broad phase.
    pub fn new(broad_phase: BP, params: ContactParams) -> Self {
        Self {
            params,
            broad_phase,
            aabbs: Vec::new(),
            candidates: Vec::new(),
        }
    }

    /// The broad phase used by this pipeline.
    pub fn broad_phase(&self) -> &BP {
        &self.broad_phase
    }

    /// The candidate pairs found by the last step.
    pub fn candidates(&self) -> &[CandidatePair] {
        &self.candidates
    }

    /// Computes the contacts between all the bodies.
    ///
    /// The broad phase completes before any candidate pair is processed.
    /// Returns the contact pairs with at least one contact, in the order the
    /// broad phase output their candidates.
    pub fn step(&mut self, bodies: &BoxBodies) -> Result<Vec<ContactPair>, CollisionError> {
        bodies.validate()?;

        self.aabbs.clear();
        bodies.compute_aabbs(&mut self.aabbs);
        self.broad_phase.update(&self.aabbs);

        self.candidates.clear();
        self.broad_phase.candidate_pairs(&mut self.candidates);
        log::trace!(
            "broad phase: {} bodies, {} candidate pairs",
            bodies.len(),
            self.candidates.len()
        );

        let pairs = narrow_phase(bodies, &self.candidates, &self.params)?;
        log::trace!(
            "narrow phase: {} contact pairs, {} contacts",
            pairs.len(),
            pairs
                .iter()
                .map(|p| p.manifold.num_points())
                .sum::<usize>()
        );

        Ok(pairs)
    }
}
