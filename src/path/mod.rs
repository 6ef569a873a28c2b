// error module
mod error;
// explorer module
mod explorer;
// assembler module
mod assembler;
mod trail;
mod verify;

// degree and connectivity gates
pub mod connectivity;
pub mod degree;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use assembler::{PathAnalysis, PathFinder};
pub use degree::{DegreeClass, DegreeTable, Imbalance};
pub use error::PathError;
pub use explorer::TrailBuilder;
pub use trail::Trail;
pub use verify::verify_trail;
