use bytes::Bytes;

/// Engine-native status code. `0` is success; the known failure values are
/// the `STATUS_*` constants in the parent module.
pub type Status = i32;

/// Outcome of one engine normalize call.
///
/// The engine reports a status and, independently, may hand back a result
/// tree. On success the tree is guaranteed present and non-empty. On failure
/// a partially populated tree may still be present — it must be disposed,
/// never converted.
#[derive(Debug)]
pub struct NormalizeOutcome {
    pub status: Status,
    pub tree: Option<ResultTree>,
}

impl NormalizeOutcome {
    pub fn success(tree: ResultTree) -> Self {
        Self {
            status: super::STATUS_OK,
            tree: Some(tree),
        }
    }

    pub fn failure(status: Status) -> Self {
        Self { status, tree: None }
    }
}

/// One engine-owned result tree, produced by a successful normalize call.
///
/// A tree is consumed exactly once: either converted and then handed back to
/// the engine via [`Engine::dispose_tree`], or handed back unconverted.
/// Dropping a tree without disposal is a bridge bug — hence `#[must_use]`.
///
/// [`Engine::dispose_tree`]: super::Engine::dispose_tree
#[must_use]
#[derive(Debug)]
pub struct ResultTree {
    root: ResultNode,
}

impl ResultTree {
    pub fn new(root: ResultNode) -> Self {
        Self { root }
    }

    /// Borrow the root node. Ownership stays with the tree.
    pub fn root(&self) -> &ResultNode {
        &self.root
    }
}

/// Tagged node of the engine's dynamically-typed result tree.
///
/// Map entries keep the engine's insertion order and have unique keys under
/// the engine's own invariants; string payloads are raw engine buffer bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultNode {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Bytes),
    List(Vec<ResultNode>),
    Map(Vec<(String, ResultNode)>),
}

impl ResultNode {
    /// Build a string node from text (copies into an engine-style buffer).
    pub fn str(s: &str) -> Self {
        ResultNode::Str(Bytes::copy_from_slice(s.as_bytes()))
    }
}
