use gridwalk_core::{ParseError, Point};
use gridwalk_paths::SearchError;
use thiserror::Error;

/// Anything that can stop a solver short of an answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Search(#[from] SearchError),
    /// The map has no `S` marker.
    #[error("no start marker in the map")]
    MissingStart,
    /// Following the pipes from the start did not lead back to it.
    #[error("pipe loop breaks at {0}")]
    BrokenLoop(Point),
    /// The trail map lacks an opening in its top or bottom row.
    #[error("trail map has no opening in its {0} row")]
    MissingTrailEnd(&'static str),
    /// A mirror pattern (0-based) with no reflection line.
    #[error("pattern {0} has no reflection line")]
    NoReflection(usize),
    /// A workflow that is referenced or required but never defined.
    #[error("no workflow named {0:?}")]
    MissingWorkflow(String),
    /// Routing a part revisited a workflow.
    #[error("workflow {0:?} routes back into itself")]
    WorkflowCycle(String),
}
