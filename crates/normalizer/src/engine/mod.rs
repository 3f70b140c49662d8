/// External normalization engine boundary
///
/// The engine itself (rulebase compilation, pattern matching) is an external
/// collaborator. This module only defines the seam the bridge talks through:
///
/// - `traits.rs`: the `Engine` trait — context lifecycle, normalize call,
///   result-tree disposal
/// - `model.rs`: status codes, the per-call outcome, and the engine-owned
///   result tree
///
/// # Ownership Guarantees
///
/// Everything the engine allocates crosses this boundary with explicit
/// ownership: a context is consumed by `destroy_context`, a result tree by
/// `dispose_tree`. The bridge layers above are responsible for calling each
/// exactly once.

pub mod model;
pub mod traits;

// Re-export commonly used types
pub use model::{NormalizeOutcome, ResultNode, ResultTree, Status};
pub use traits::Engine;

// Engine status codes. The known values follow liblognorm's error space;
// anything else is an unknown engine failure.
pub const STATUS_OK: Status = 0;
pub const STATUS_NOMEM: Status = -1;
pub const STATUS_BAD_CONFIG: Status = -250;
pub const STATUS_BAD_PARSER_STATE: Status = -500;
pub const STATUS_WRONG_PARSER: Status = -1000;
