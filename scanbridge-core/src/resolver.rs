use std::sync::Arc;

use crate::registry::{Completion, SessionRegistry};
use crate::{BridgeError, ScanFlow};

/// Resolves pending invocations when a session reaches a terminal state.
pub struct CompletionResolver {
    registry: Arc<SessionRegistry>,
}

impl CompletionResolver {
    pub const fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }

    /// Called once the SDK is completely done with a session, whether it finished or was
    /// cancelled. Resolves only the active flow's invocation; returns the flow it resolved.
    ///
    /// The report for a session canceled from the host side is absorbed without resolving
    /// anything, so it can never reach a session started after the cancel.
    pub fn on_sdk_completely_done(&self) -> Option<ScanFlow> {
        let Some(flow) = self.registry.active_flow() else {
            tracing::debug!("SDK completely done with no pending session");
            return None;
        };

        match self.registry.complete(flow)? {
            Completion::Resolved(resolution) => {
                if resolution.handle.is_some() {
                    // The SDK tore the session down itself; the handle is dead.
                    tracing::debug!("{flow} session finished with an unconsumed result callback");
                }
                tracing::info!("{} session completed", resolution.invocation.variant);
                Some(flow)
            }
            Completion::Drained => {
                tracing::info!("SDK released the canceled {flow} session");
                None
            }
        }
    }

    /// Cancels the session of `flow`: fails its invocation and cancels any parked handle.
    ///
    /// Returns `false` if nothing was pending on the flow.
    pub fn cancel(&self, flow: ScanFlow) -> bool {
        let Some(resolution) = self.registry.cancel(flow, BridgeError::canceled(flow)) else {
            tracing::debug!("cancel requested with no pending {flow} session");
            return false;
        };

        if let Some(callback) = resolution.handle {
            callback.cancel();
        }
        tracing::info!("{} session canceled", resolution.invocation.variant);
        true
    }
}
