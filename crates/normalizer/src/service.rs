//! Normalize orchestration: trim → invoke → classify → convert → dispose.
//!
//! The central correctness property lives here: the engine's result tree is
//! externally allocated with no lifetime tied to our control flow, so every
//! exit path — success, conversion, failure — must hand it back to the
//! engine exactly once. A scoped guard makes that unconditional.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::debug;

use crate::engine::{Engine, ResultNode, ResultTree, STATUS_OK};
use crate::error::NormalizeError;
use crate::handle::EngineHandle;
use crate::metrics::{BridgeMetrics, MetricsSnapshot};
use crate::value::convert;

// Trailing transport artifacts removed by `strip` (end of line only).
const TRAILING_ARTIFACTS: [char; 4] = ['\n', '\r', '\t', ' '];

/// One normalizer per rulebase: owns the engine context and runs normalize
/// requests against it.
///
/// `normalize` takes `&mut self`, which serializes calls per context by
/// construction — the wrapped engine does not document per-context thread
/// safety. Independent `Normalizer` instances may run concurrently.
pub struct Normalizer<E: Engine> {
    engine: Arc<E>,
    handle: EngineHandle<E>,
    metrics: BridgeMetrics,
}

impl<E: Engine> std::fmt::Debug for Normalizer<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer").finish_non_exhaustive()
    }
}

impl<E: Engine> Normalizer<E> {
    /// Build a normalizer from a rulebase path.
    ///
    /// Fails with the translated engine status when the context cannot be
    /// created or the rulebase does not load; nothing is left allocated on
    /// failure.
    pub fn from_rule_file(
        engine: Arc<E>,
        rule_path: impl AsRef<Path>,
    ) -> Result<Self, NormalizeError> {
        let handle = EngineHandle::open(Arc::clone(&engine), rule_path.as_ref())?;
        Ok(Self {
            engine,
            handle,
            metrics: BridgeMetrics::new(),
        })
    }

    /// Normalize one log line into a structured host value.
    ///
    /// With `strip` set, trailing `\n`, `\r`, `\t`, and space are removed
    /// before matching (end of line only). Empty input — including input
    /// that strips down to nothing — yields `Value::Null` without touching
    /// the engine; an empty line is not an error.
    ///
    /// A line the engine cannot normalize is a
    /// [`NormalizeError::NormalizationFailed`], never a null result.
    pub fn normalize(&mut self, line: &str, strip: bool) -> Result<Value, NormalizeError> {
        let line = if strip {
            line.trim_end_matches(TRAILING_ARTIFACTS)
        } else {
            line
        };

        if line.is_empty() {
            self.metrics.record_empty_input();
            return Ok(Value::Null);
        }

        let started = Instant::now();
        let outcome = self.engine.normalize(self.handle.context_mut(), line.as_bytes());

        // From here on the tree (if any) is owned by the guard; it goes back
        // to the engine on every path out of this function.
        let guard = TreeGuard::new(self.engine.as_ref(), outcome.tree);

        if outcome.status != STATUS_OK {
            self.metrics.record_failure(elapsed_nanos(started));
            debug!(status = outcome.status, "line did not normalize");
            return Err(NormalizeError::NormalizationFailed(outcome.status));
        }

        let value = match guard.root() {
            Some(node) => convert(node),
            // Success with no tree violates the engine contract.
            None => {
                self.metrics.record_failure(elapsed_nanos(started));
                return Err(NormalizeError::NormalizationFailed(outcome.status));
            }
        };

        self.metrics.record_normalized(elapsed_nanos(started));
        Ok(value)
    }

    /// Version string of the wrapped engine, pure passthrough.
    pub fn engine_version(&self) -> String {
        self.engine.version()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

fn elapsed_nanos(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX)
}

/// Scoped owner of one engine result tree.
///
/// Holding the tree here instead of a local binding means early returns and
/// conversion both leave through the same door: `Drop` hands the tree back
/// to the engine, exactly once.
struct TreeGuard<'a, E: Engine> {
    engine: &'a E,
    tree: Option<ResultTree>,
}

impl<'a, E: Engine> TreeGuard<'a, E> {
    fn new(engine: &'a E, tree: Option<ResultTree>) -> Self {
        Self { engine, tree }
    }

    fn root(&self) -> Option<&ResultNode> {
        self.tree.as_ref().map(ResultTree::root)
    }
}

impl<E: Engine> Drop for TreeGuard<'_, E> {
    fn drop(&mut self) {
        if let Some(tree) = self.tree.take() {
            self.engine.dispose_tree(tree);
        }
    }
}
