use sql_ast::NodeKind;
use thiserror::Error;

/// Errors raised while rendering a tree.
///
/// None of these are recoverable: they mean the tree is not one the
/// renderer was built to accept. Text emitted before the failure stays in
/// the sink.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No dialect, translation, or generic rule exists for the node kind.
    #[error("Unsupported node kind: {kind}")]
    UnsupportedNodeKind { kind: NodeKind },

    /// A sub-node the rule requires is missing, or holds a value Postgres
    /// cannot spell.
    #[error("Malformed {kind} node: {reason}")]
    MalformedNode {
        kind: NodeKind,
        reason: &'static str,
    },

    #[error("Maximum render depth ({0}) exceeded")]
    MaxDepthExceeded(usize),
}

impl RenderError {
    pub fn unsupported(kind: NodeKind) -> Self {
        Self::UnsupportedNodeKind { kind }
    }

    pub fn malformed(kind: NodeKind, reason: &'static str) -> Self {
        Self::MalformedNode { kind, reason }
    }
}

pub type RenderResult<T = ()> = Result<T, RenderError>;
