//! Engine context lifecycle — creation, rulebase loading, guaranteed teardown.

use std::mem::ManuallyDrop;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::engine::{Engine, STATUS_OK};
use crate::error::{map_engine_status, NormalizeError};

/// Exclusive owner of one engine context, built from one rulebase.
///
/// The context is destroyed exactly once, when the handle is dropped.
/// Use-after-teardown is unreachable: the only way to lose the context is to
/// lose the handle.
pub struct EngineHandle<E: Engine> {
    engine: Arc<E>,
    ctx: ManuallyDrop<E::Context>,
}

impl<E: Engine> std::fmt::Debug for EngineHandle<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineHandle").finish_non_exhaustive()
    }
}

impl<E: Engine> EngineHandle<E> {
    /// Create a context and load the rulebase at `rule_path` into it.
    ///
    /// On load failure the half-built context is torn down before the error
    /// surfaces, so the failure path allocates nothing lasting.
    pub fn open(engine: Arc<E>, rule_path: &Path) -> Result<Self, NormalizeError> {
        let mut ctx = engine.create_context().map_err(map_engine_status)?;

        let status = engine.load_rules(&mut ctx, rule_path);
        if status != STATUS_OK {
            warn!(status, rule_path = %rule_path.display(), "rulebase load failed");
            engine.destroy_context(ctx);
            return Err(map_engine_status(status));
        }

        debug!(rule_path = %rule_path.display(), "engine context ready");
        Ok(Self {
            engine,
            ctx: ManuallyDrop::new(ctx),
        })
    }

    pub(crate) fn context_mut(&mut self) -> &mut E::Context {
        &mut *self.ctx
    }
}

impl<E: Engine> Drop for EngineHandle<E> {
    fn drop(&mut self) {
        // SAFETY: the context is taken exactly once, here, and the handle is
        // unusable afterwards.
        let ctx = unsafe { ManuallyDrop::take(&mut self.ctx) };
        self.engine.destroy_context(ctx);
        debug!("engine context destroyed");
    }
}
