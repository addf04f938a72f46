//! Picks the rule set for a node and invokes it exactly once.
//!
//! Resolution order: a Postgres rule for the exact kind, then a translation
//! rule when the kind comes from the Oracle grammar, then the generic rule.
//! Oracle kinds never fall through to the generic rules.

use crate::{
    error::{RenderError, RenderResult},
    generic, oracle, postgres,
    renderer::Renderer,
};
use serde::Serialize;
use sql_ast::{Node, NodeKind, Origin};
use tracing::{trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RuleSet {
    /// Postgres-specific rules.
    Dialect,
    /// Oracle-to-Postgres translation rules.
    Translation,
    /// Dialect-independent fallback rules.
    Generic,
}

pub fn resolve(kind: NodeKind) -> RenderResult<RuleSet> {
    if postgres::handles(kind) {
        return Ok(RuleSet::Dialect);
    }

    match kind.origin() {
        Origin::Oracle if oracle::handles(kind) => return Ok(RuleSet::Translation),
        Origin::Oracle => {}
        Origin::Common | Origin::Postgres => {
            if generic::handles(kind) {
                return Ok(RuleSet::Generic);
            }
        }
    }

    warn!(%kind, "no rule renders this node kind");
    Err(RenderError::unsupported(kind))
}

pub fn dispatch(node: Node<'_>, r: &mut Renderer) -> RenderResult {
    let kind = node.kind();
    let rules = resolve(kind)?;
    trace!(%kind, ?rules, "dispatch");

    r.nested(|r| match rules {
        RuleSet::Dialect => postgres::render(node, r),
        RuleSet::Translation => oracle::render(node, r),
        RuleSet::Generic => generic::render(node, r),
    })
}
