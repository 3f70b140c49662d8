//! Scripted engine double for lifecycle tests.
//!
//! Counts every allocation crossing the engine seam (contexts, trees) so
//! tests can assert the exactly-once disposal invariants instead of trusting
//! them.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::engine::{
    Engine, NormalizeOutcome, ResultNode, ResultTree, Status, STATUS_BAD_CONFIG, STATUS_OK,
    STATUS_WRONG_PARSER,
};

#[derive(Debug)]
pub struct FakeContext {
    pub rulebase: Option<PathBuf>,
}

/// Engine double with scripted normalize replies.
///
/// `load_rules` behaves like a real rulebase compiler to the extent tests
/// need: a configured failure wins, otherwise a missing file is a bad
/// configuration. Unscripted normalize calls report a non-matching line.
#[derive(Debug, Default)]
pub struct FakeEngine {
    create_failure: Mutex<Option<Status>>,
    load_failure: Mutex<Option<Status>>,
    replies: Mutex<VecDeque<(Status, Option<ResultNode>)>>,
    seen_lines: Mutex<Vec<Vec<u8>>>,
    contexts_created: AtomicUsize,
    contexts_destroyed: AtomicUsize,
    trees_issued: AtomicUsize,
    trees_disposed: AtomicUsize,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_create_with(&self, status: Status) {
        *self.create_failure.lock().unwrap() = Some(status);
    }

    pub fn fail_load_with(&self, status: Status) {
        *self.load_failure.lock().unwrap() = Some(status);
    }

    /// Queue one normalize reply: a status and, optionally, a tree to issue.
    pub fn reply_with(&self, status: Status, root: Option<ResultNode>) {
        self.replies.lock().unwrap().push_back((status, root));
    }

    /// Exact bytes the engine was invoked with, in call order.
    pub fn seen_lines(&self) -> Vec<Vec<u8>> {
        self.seen_lines.lock().unwrap().clone()
    }

    pub fn contexts_created(&self) -> usize {
        self.contexts_created.load(Ordering::SeqCst)
    }

    pub fn contexts_destroyed(&self) -> usize {
        self.contexts_destroyed.load(Ordering::SeqCst)
    }

    pub fn trees_issued(&self) -> usize {
        self.trees_issued.load(Ordering::SeqCst)
    }

    pub fn trees_disposed(&self) -> usize {
        self.trees_disposed.load(Ordering::SeqCst)
    }
}

impl Engine for FakeEngine {
    type Context = FakeContext;

    fn create_context(&self) -> Result<Self::Context, Status> {
        if let Some(status) = *self.create_failure.lock().unwrap() {
            return Err(status);
        }
        self.contexts_created.fetch_add(1, Ordering::SeqCst);
        Ok(FakeContext { rulebase: None })
    }

    fn load_rules(&self, ctx: &mut Self::Context, rule_path: &Path) -> Status {
        if let Some(status) = *self.load_failure.lock().unwrap() {
            return status;
        }
        if !rule_path.exists() {
            return STATUS_BAD_CONFIG;
        }
        ctx.rulebase = Some(rule_path.to_path_buf());
        STATUS_OK
    }

    fn normalize(&self, _ctx: &mut Self::Context, line: &[u8]) -> NormalizeOutcome {
        self.seen_lines.lock().unwrap().push(line.to_vec());

        let (status, root) = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or((STATUS_WRONG_PARSER, None));

        let tree = root.map(|node| {
            self.trees_issued.fetch_add(1, Ordering::SeqCst);
            ResultTree::new(node)
        });

        NormalizeOutcome { status, tree }
    }

    fn dispose_tree(&self, tree: ResultTree) {
        self.trees_disposed.fetch_add(1, Ordering::SeqCst);
        drop(tree);
    }

    fn destroy_context(&self, ctx: Self::Context) {
        self.contexts_destroyed.fetch_add(1, Ordering::SeqCst);
        drop(ctx);
    }

    fn version(&self) -> String {
        "fake-lognorm 2.0.6".to_string()
    }
}
