// Move classification core.
//
// Raw engine scores are normalized onto one White-perspective centipawn scale
// (`normalize`), and each played move is graded by how much it worsened the
// mover's own score (`classify`). Everything here is pure.

pub mod classify;
pub mod def;
pub mod error;
pub mod normalize;
pub mod review;
pub mod scores;

pub use classify::{classify, classify_against_best, regression, Category, Thresholds};
pub use def::{Perspective, RawEvaluation, ScoreKind};
pub use error::{ConfigError, EvalError};
pub use normalize::{flip_perspective, normalize, MateMapping};
pub use review::review;
