use crate::capability::{CapabilityKind, RemediationToken};

use std::collections::HashMap;

use tracing::{debug, warn};

/// Table of remediation requests awaiting a user decision, at most one per
/// capability kind.
///
/// While a token is pending for a kind, no second remediation is issued for
/// that kind; the gate reports the capability as awaiting remediation
/// instead. Resolving a token that is not the pending one (stale result,
/// duplicate callback) is ignored.
#[derive(Debug, Default)]
pub(crate) struct PendingRemediations {
    pending: HashMap<CapabilityKind, RemediationToken>,
}

impl PendingRemediations {
    /// Issue a token for `kind`, or `None` if one is already in flight.
    pub(crate) fn begin(&mut self, kind: CapabilityKind) -> Option<RemediationToken> {
        if self.pending.contains_key(&kind) {
            debug!(%kind, "Remediation already in flight, not re-requesting");
            return None;
        }
        let token = RemediationToken::new(kind);
        self.pending.insert(kind, token);
        Some(token)
    }

    /// Clear `token` if it is the pending request for its kind.
    ///
    /// Returns false for stale or unknown tokens.
    pub(crate) fn resolve(&mut self, token: RemediationToken) -> bool {
        match self.pending.get(&token.kind()) {
            Some(current) if *current == token => {
                self.pending.remove(&token.kind());
                true
            }
            Some(_) => {
                warn!(kind = %token.kind(), id = %token.id(), "Stale remediation token ignored");
                false
            }
            None => {
                warn!(kind = %token.kind(), id = %token.id(), "Unknown remediation token ignored");
                false
            }
        }
    }

    pub(crate) fn is_pending(&self, kind: CapabilityKind) -> bool {
        self.pending.contains_key(&kind)
    }
}
