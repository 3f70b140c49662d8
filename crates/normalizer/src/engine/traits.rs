use std::path::Path;

pub use super::model::{NormalizeOutcome, ResultTree, Status};

/// Seam to the external normalization engine.
///
/// Implementations wrap a concrete engine (in production, a C library behind
/// FFI). The bridge never looks past this trait: status codes are translated
/// by the error module, result trees are walked by the value module, and
/// every allocation crossing the seam is released exactly once.
pub trait Engine: Send + Sync {
    /// Per-rulebase runtime state, opaque to the bridge.
    type Context: Send;

    /// Allocate a fresh parsing context, before any rulebase is loaded.
    /// Fails with the engine's native status when allocation fails.
    fn create_context(&self) -> Result<Self::Context, Status>;

    /// Compile the rulebase at `rule_path` into the context.
    /// Returns `STATUS_OK` or an engine failure status.
    fn load_rules(&self, ctx: &mut Self::Context, rule_path: &Path) -> Status;

    /// Normalize one input line against the loaded rulebase. Blocking,
    /// CPU-bound; runs to completion or failure.
    fn normalize(&self, ctx: &mut Self::Context, line: &[u8]) -> NormalizeOutcome;

    /// Release one result tree back to the engine. Must be called exactly
    /// once per tree the engine handed out.
    fn dispose_tree(&self, tree: ResultTree);

    /// Tear down a context. Consumes it, so use-after-teardown cannot
    /// compile. Best-effort: teardown has no failure channel.
    fn destroy_context(&self, ctx: Self::Context);

    /// Engine version string, diagnostic passthrough.
    fn version(&self) -> String;
}
