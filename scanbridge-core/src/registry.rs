//! Per-flow session bookkeeping.
//!
//! Each flow owns one slot holding its pending invocation and, while the SDK waits for a
//! decision, the parked resume handle. A slot moves through
//! `Idle -> AwaitingSdkResult -> AwaitingDecision -> Resolved`, falling back from
//! `AwaitingDecision` to `AwaitingSdkResult` whenever the handle is consumed. A cancel moves
//! the slot to `Canceling` instead: the invocation is already failed, but the SDK still owns
//! the torn-down session and reports its own completion later. That completion is absorbed
//! and moves the slot to `Resolved`. Only one flow may be active at a time, and a `Canceling`
//! flow still counts as active.
//!
//! Pending invocations are resolved through a `oneshot` channel, so an invocation can never
//! be resolved twice. Guards are released before returning, and all foreign calls (resuming
//! or cancelling handles) are left to the caller.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::oneshot;

use crate::{BridgeError, ScanFlow, ScanResultCallback, SessionInvocation};

/// The value a pending invocation resolves with.
pub type CompletionOutcome = Result<(), BridgeError>;

/// Externally observable phase of a flow's slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum SessionPhase {
    /// No session has run on this flow yet.
    Idle,
    /// A session was launched and the SDK has not handed over a sample.
    AwaitingSdkResult,
    /// A sample was relayed and the SDK is blocked on the parked handle.
    AwaitingDecision,
    /// The session was canceled and the SDK has not yet reported that it is done with it.
    Canceling,
    /// The last session on this flow was resolved.
    Resolved,
}

struct PendingSession {
    invocation: SessionInvocation,
    responder: oneshot::Sender<CompletionOutcome>,
}

#[derive(Default)]
enum SlotState {
    #[default]
    Idle,
    AwaitingSdkResult(PendingSession),
    AwaitingDecision {
        session: PendingSession,
        handle: Arc<dyn ScanResultCallback>,
    },
    Canceling,
    Resolved,
}

impl SlotState {
    const fn phase(&self) -> SessionPhase {
        match self {
            Self::Idle => SessionPhase::Idle,
            Self::AwaitingSdkResult(_) => SessionPhase::AwaitingSdkResult,
            Self::AwaitingDecision { .. } => SessionPhase::AwaitingDecision,
            Self::Canceling => SessionPhase::Canceling,
            Self::Resolved => SessionPhase::Resolved,
        }
    }
}

/// What happened to a handle offered to [`SessionRegistry::park`].
pub enum ParkOutcome {
    /// The handle is parked for the returned invocation.
    Parked(SessionInvocation),
    /// No invocation is pending on the flow; the handle is handed back.
    NoSession(Arc<dyn ScanResultCallback>),
    /// An unconsumed handle is already parked; the new one is handed back.
    AlreadyParked(Arc<dyn ScanResultCallback>),
}

/// What the SDK's completion report settled.
pub enum Completion {
    /// The pending invocation was resolved with success.
    Resolved(Resolution),
    /// The report belonged to a session canceled earlier and was absorbed.
    Drained,
}

/// A pending invocation that was just resolved.
pub struct Resolution {
    pub invocation: SessionInvocation,
    /// The handle that was still parked, if any. The caller decides whether to cancel it.
    pub handle: Option<Arc<dyn ScanResultCallback>>,
}

impl PendingSession {
    /// Delivers `outcome` to the waiting caller. Runs with no guard held.
    fn resolve(
        self,
        outcome: CompletionOutcome,
        handle: Option<Arc<dyn ScanResultCallback>>,
    ) -> Resolution {
        if self.responder.send(outcome).is_err() {
            tracing::debug!(
                "{} invocation resolved after its caller stopped waiting",
                self.invocation.variant
            );
        }
        Resolution {
            invocation: self.invocation,
            handle,
        }
    }
}

#[derive(Default)]
pub struct SessionRegistry {
    // Lock order: `active` before any slot.
    active: Mutex<Option<ScanFlow>>,
    liveness: Mutex<SlotState>,
    id_scan: Mutex<SlotState>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, flow: ScanFlow) -> MutexGuard<'_, SlotState> {
        match flow {
            ScanFlow::Liveness => lock(&self.liveness),
            ScanFlow::IdScan => lock(&self.id_scan),
        }
    }

    /// Registers a new pending invocation and returns the receiver it resolves through.
    pub fn begin(
        &self,
        invocation: SessionInvocation,
    ) -> Result<oneshot::Receiver<CompletionOutcome>, BridgeError> {
        let mut active = lock(&self.active);
        if let Some(active) = *active {
            return Err(BridgeError::SessionInProgress { active });
        }

        let flow = invocation.flow();
        let (responder, receiver) = oneshot::channel();
        *self.slot(flow) = SlotState::AwaitingSdkResult(PendingSession {
            invocation,
            responder,
        });
        *active = Some(flow);

        Ok(receiver)
    }

    /// Parks `handle` on `flow` if an invocation is waiting for an SDK result.
    pub fn park(&self, flow: ScanFlow, handle: Arc<dyn ScanResultCallback>) -> ParkOutcome {
        let mut slot = self.slot(flow);
        match std::mem::replace(&mut *slot, SlotState::Idle) {
            SlotState::AwaitingSdkResult(session) => {
                let invocation = session.invocation.clone();
                *slot = SlotState::AwaitingDecision { session, handle };
                ParkOutcome::Parked(invocation)
            }
            state @ SlotState::AwaitingDecision { .. } => {
                *slot = state;
                ParkOutcome::AlreadyParked(handle)
            }
            state => {
                *slot = state;
                ParkOutcome::NoSession(handle)
            }
        }
    }

    /// Removes and returns the parked handle, keeping the invocation pending.
    pub fn take_handle(&self, flow: ScanFlow) -> Option<Arc<dyn ScanResultCallback>> {
        let mut slot = self.slot(flow);
        match std::mem::replace(&mut *slot, SlotState::Idle) {
            SlotState::AwaitingDecision { session, handle } => {
                *slot = SlotState::AwaitingSdkResult(session);
                Some(handle)
            }
            state => {
                *slot = state;
                None
            }
        }
    }

    /// Returns the parked handle without consuming it.
    pub fn parked_handle(&self, flow: ScanFlow) -> Option<Arc<dyn ScanResultCallback>> {
        let slot = self.slot(flow);
        if let SlotState::AwaitingDecision { handle, .. } = &*slot {
            Some(Arc::clone(handle))
        } else {
            None
        }
    }

    /// Returns whether `handle` is still the one parked on `flow`.
    pub fn is_parked(&self, flow: ScanFlow, handle: &Arc<dyn ScanResultCallback>) -> bool {
        let slot = self.slot(flow);
        matches!(&*slot, SlotState::AwaitingDecision { handle: parked, .. } if Arc::ptr_eq(parked, handle))
    }

    /// Settles `flow` after the SDK reported it is completely done with its session.
    ///
    /// A pending invocation resolves with success. A `Canceling` slot only absorbs the report.
    /// Either way the flow stops being active. Returns `None` if nothing was outstanding.
    pub fn complete(&self, flow: ScanFlow) -> Option<Completion> {
        let taken = {
            let mut active = lock(&self.active);
            let mut slot = self.slot(flow);
            let taken = match std::mem::replace(&mut *slot, SlotState::Resolved) {
                SlotState::AwaitingSdkResult(session) => Some((session, None)),
                SlotState::AwaitingDecision { session, handle } => Some((session, Some(handle))),
                SlotState::Canceling => None,
                state => {
                    *slot = state;
                    return None;
                }
            };
            if *active == Some(flow) {
                *active = None;
            }
            taken
        };

        Some(match taken {
            Some((session, handle)) => Completion::Resolved(session.resolve(Ok(()), handle)),
            None => Completion::Drained,
        })
    }

    /// Fails the pending invocation of `flow` with `error` and leaves the slot `Canceling`.
    ///
    /// The flow stays active until [`complete`](Self::complete) absorbs the SDK's report for
    /// the torn-down session. Returns `None` if nothing was pending.
    pub fn cancel(&self, flow: ScanFlow, error: BridgeError) -> Option<Resolution> {
        let (session, handle) = {
            let mut slot = self.slot(flow);
            match std::mem::replace(&mut *slot, SlotState::Canceling) {
                SlotState::AwaitingSdkResult(session) => (session, None),
                SlotState::AwaitingDecision { session, handle } => (session, Some(handle)),
                state => {
                    *slot = state;
                    return None;
                }
            }
        };

        Some(session.resolve(Err(error), handle))
    }

    pub fn active_flow(&self) -> Option<ScanFlow> {
        *lock(&self.active)
    }

    pub fn phase(&self, flow: ScanFlow) -> SessionPhase {
        self.slot(flow).phase()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests_utils::RecordingCallback;

    fn handle() -> Arc<dyn ScanResultCallback> {
        Arc::new(RecordingCallback::default())
    }

    #[test]
    fn test_only_one_session_at_a_time() {
        let registry = SessionRegistry::new();
        let _rx = registry.begin(SessionInvocation::liveness("abc")).unwrap();

        let err = registry
            .begin(SessionInvocation::id_scan("def", false, false))
            .unwrap_err();
        assert_eq!(
            err,
            BridgeError::SessionInProgress {
                active: ScanFlow::Liveness
            }
        );
        assert_eq!(registry.phase(ScanFlow::IdScan), SessionPhase::Idle);
    }

    #[test]
    fn test_park_without_session_hands_handle_back() {
        let registry = SessionRegistry::new();
        assert!(matches!(
            registry.park(ScanFlow::Liveness, handle()),
            ParkOutcome::NoSession(_)
        ));
        assert_eq!(registry.phase(ScanFlow::Liveness), SessionPhase::Idle);
    }

    #[test]
    fn test_second_handle_is_rejected() {
        let registry = SessionRegistry::new();
        let _rx = registry.begin(SessionInvocation::liveness("abc")).unwrap();

        let first = handle();
        assert!(matches!(
            registry.park(ScanFlow::Liveness, Arc::clone(&first)),
            ParkOutcome::Parked(_)
        ));
        assert!(matches!(
            registry.park(ScanFlow::Liveness, handle()),
            ParkOutcome::AlreadyParked(_)
        ));

        let parked = registry.take_handle(ScanFlow::Liveness).unwrap();
        assert!(Arc::ptr_eq(&parked, &first));
        assert_eq!(
            registry.phase(ScanFlow::Liveness),
            SessionPhase::AwaitingSdkResult
        );
        assert!(registry.take_handle(ScanFlow::Liveness).is_none());
    }

    #[test]
    fn test_completion_resolves_once() {
        let registry = SessionRegistry::new();
        let mut rx = registry
            .begin(SessionInvocation::id_scan("abc", true, false))
            .unwrap();
        let _ = registry.park(ScanFlow::IdScan, handle());

        let Some(Completion::Resolved(resolution)) = registry.complete(ScanFlow::IdScan) else {
            panic!("pending invocation was not resolved");
        };
        assert!(resolution.handle.is_some());
        assert_eq!(resolution.invocation.session_token, "abc");
        assert_eq!(rx.try_recv().unwrap(), Ok(()));

        assert!(registry.complete(ScanFlow::IdScan).is_none());
        assert!(registry
            .cancel(ScanFlow::IdScan, BridgeError::canceled(ScanFlow::IdScan))
            .is_none());
        assert_eq!(registry.phase(ScanFlow::IdScan), SessionPhase::Resolved);
        assert_eq!(registry.active_flow(), None);
    }

    #[test]
    fn test_canceled_flow_stays_busy_until_sdk_is_done() {
        let registry = SessionRegistry::new();
        let mut rx = registry.begin(SessionInvocation::liveness("old")).unwrap();
        registry
            .cancel(ScanFlow::Liveness, BridgeError::canceled(ScanFlow::Liveness))
            .unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            Err(BridgeError::canceled(ScanFlow::Liveness))
        );
        assert_eq!(registry.phase(ScanFlow::Liveness), SessionPhase::Canceling);
        assert_eq!(
            registry.begin(SessionInvocation::liveness("new")).unwrap_err(),
            BridgeError::SessionInProgress {
                active: ScanFlow::Liveness
            }
        );
        assert!(matches!(
            registry.park(ScanFlow::Liveness, handle()),
            ParkOutcome::NoSession(_)
        ));

        assert!(matches!(
            registry.complete(ScanFlow::Liveness),
            Some(Completion::Drained)
        ));
        assert_eq!(registry.phase(ScanFlow::Liveness), SessionPhase::Resolved);
        assert!(registry.begin(SessionInvocation::liveness("new")).is_ok());
    }

    #[test]
    fn test_is_parked_tracks_the_exact_handle() {
        let registry = SessionRegistry::new();
        let _rx = registry.begin(SessionInvocation::liveness("abc")).unwrap();
        let parked = handle();
        let _ = registry.park(ScanFlow::Liveness, Arc::clone(&parked));

        assert!(registry.is_parked(ScanFlow::Liveness, &parked));
        assert!(!registry.is_parked(ScanFlow::Liveness, &handle()));

        let _ = registry.take_handle(ScanFlow::Liveness);
        assert!(!registry.is_parked(ScanFlow::Liveness, &parked));
    }

    #[test]
    fn test_completion_tolerates_dropped_receiver() {
        let registry = SessionRegistry::new();
        drop(registry.begin(SessionInvocation::liveness("abc")).unwrap());
        assert!(matches!(
            registry.complete(ScanFlow::Liveness),
            Some(Completion::Resolved(_))
        ));
    }
}
