//! Compatibility engine.
//!
//! Pure, deterministic evaluation of product pairs: directional exclusion
//! checks, the symmetric conflict predicate, routine-level analysis, and the
//! routine-slot gate that reuses the same predicate.

pub mod analysis;
pub mod engine;
pub mod routine;
pub mod selection;
pub mod status;

pub use analysis::{AnalysisResult, CompatibilityPair};
pub use engine::{analyze, conflicts, evaluate_pair, excludes};
pub use routine::{Routine, RoutineSlot};
pub use selection::Selection;
pub use status::CompatibilityStatus;
