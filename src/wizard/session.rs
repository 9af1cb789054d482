//! WizardSession — owns the record, the step position, and the submission
//! lifecycle for one intake session.
//!
//! The two collaborator calls are the only suspension points and both are
//! single-flight: generation is guarded by the narrative-exists-or-pending
//! check, submission by the `submitting` state. Neither call is ever
//! cancelled; the session waits for settlement.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::WizardError;
use crate::record::{ClientRecord, Entity, EntityUpdate, INCOME_SOURCES, RecordUpdate};
use crate::submit::{SubmissionGateway, SubmissionPayload};
use crate::summary::SummaryGenerator;

use super::state::SubmissionState;
use super::step::WizardStep;
use super::view::{ReviewSnapshot, SectionVisibility};

/// Shown to the user when delivery fails. The record itself is untouched
/// and Submit may be retried.
pub const SUBMISSION_ERROR: &str = "We encountered an issue synchronising your data with the \
     server. Please try again or contact support.";

/// Mutable flow state behind one lock.
#[derive(Debug, Default)]
struct FlowState {
    step: WizardStep,
    submission: SubmissionState,
    /// Narrative for the current lifetime, once generation settles.
    narrative: Option<String>,
    /// Set while a generator call is in flight for this lifetime.
    narrative_pending: bool,
    /// Bumped on restart so a generation started in a discarded lifetime
    /// cannot write into the new one.
    lifetime: u64,
    /// Last user-facing submission error.
    error: Option<String>,
}

/// One client intake session.
///
/// Cheap to clone; all clones share the same record and flow state. The
/// HTTP layer stores a clone as router state, and background generation
/// tasks carry one across the await.
#[derive(Clone)]
pub struct WizardSession {
    inner: Arc<Inner>,
}

struct Inner {
    record: RwLock<ClientRecord>,
    flow: RwLock<FlowState>,
    generator: Arc<dyn SummaryGenerator>,
    gateway: Arc<dyn SubmissionGateway>,
    source_tag: String,
}

impl WizardSession {
    pub fn new(
        generator: Arc<dyn SummaryGenerator>,
        gateway: Arc<dyn SubmissionGateway>,
        source_tag: impl Into<String>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                record: RwLock::new(ClientRecord::default()),
                flow: RwLock::new(FlowState::default()),
                generator,
                gateway,
                source_tag: source_tag.into(),
            }),
        }
    }

    // ── Record mutation ─────────────────────────────────────────────

    /// Apply one field update to the record. Ignored once submitted.
    pub async fn apply_update(&self, update: RecordUpdate) {
        if self.is_submitted().await {
            debug!("Record update ignored: session already submitted");
            return;
        }
        self.inner.record.write().await.apply(update);
    }

    /// Registry add: append a blank entity. None once submitted.
    pub async fn add_entity(&self) -> Option<Entity> {
        if self.is_submitted().await {
            debug!("Entity add ignored: session already submitted");
            return None;
        }
        Some(self.inner.record.write().await.add_entity())
    }

    /// Registry update: change one field of one entity. False when the id
    /// matches nothing or the session is submitted.
    pub async fn update_entity(&self, id: Uuid, update: EntityUpdate) -> bool {
        if self.is_submitted().await {
            return false;
        }
        self.inner.record.write().await.update_entity(id, update)
    }

    /// Registry remove. False when the id matches nothing or the session
    /// is submitted.
    pub async fn remove_entity(&self, id: Uuid) -> bool {
        if self.is_submitted().await {
            return false;
        }
        self.inner.record.write().await.remove_entity(id)
    }

    // ── Navigation ──────────────────────────────────────────────────

    /// Move forward one step. No-op at review and once submitted.
    /// Landing on review starts narrative generation, at most once per
    /// lifetime.
    pub async fn advance(&self) -> WizardStep {
        let step = {
            let mut flow = self.inner.flow.write().await;
            if flow.submission.is_terminal() {
                return flow.step;
            }
            if let Some(next) = flow.step.next() {
                flow.step = next;
                info!(step = %next, "Advanced to step");
            }
            flow.step
        };
        if step.is_review() {
            self.ensure_narrative().await;
        }
        step
    }

    /// Move back one step. No-op at the first step, while a submission is
    /// in flight, and once submitted.
    pub async fn retreat(&self) -> WizardStep {
        let mut flow = self.inner.flow.write().await;
        if flow.submission.is_in_flight() || flow.submission.is_terminal() {
            debug!(state = %flow.submission, "Retreat ignored");
            return flow.step;
        }
        if let Some(prev) = flow.step.prev() {
            flow.step = prev;
        }
        flow.step
    }

    // ── Narrative generation ────────────────────────────────────────

    /// Kick off generation unless a narrative already exists or one is
    /// pending for this lifetime. Editing the record after generation
    /// does not refresh the narrative; only restart does.
    async fn ensure_narrative(&self) {
        let lifetime = {
            let mut flow = self.inner.flow.write().await;
            if flow.narrative.is_some() || flow.narrative_pending {
                debug!("Generation skipped: narrative exists or is pending");
                return;
            }
            flow.narrative_pending = true;
            if flow.submission == SubmissionState::Idle {
                flow.submission = SubmissionState::GeneratingSummary;
            }
            flow.lifetime
        };

        let snapshot = self.inner.record.read().await.clone();
        let session = self.clone();
        tokio::spawn(async move {
            info!("Narrative generation started");
            let narrative = session.inner.generator.generate(&snapshot).await;
            session.store_narrative(lifetime, narrative).await;
        });
    }

    async fn store_narrative(&self, lifetime: u64, narrative: String) {
        let mut flow = self.inner.flow.write().await;
        if flow.lifetime != lifetime {
            debug!("Discarding narrative from a restarted session");
            return;
        }
        flow.narrative = Some(narrative);
        flow.narrative_pending = false;
        // Never clobber a submission that started while we were pending
        if flow.submission == SubmissionState::GeneratingSummary {
            flow.submission = SubmissionState::Ready;
        }
        info!("Narrative ready");
    }

    // ── Submission ──────────────────────────────────────────────────

    /// Deliver the record through the gateway and await settlement.
    ///
    /// Only invocable from the review step, and only while no other
    /// submission is in flight. A narrative that has not settled yet goes
    /// out as the empty string. Returns the resulting state: `Submitted`,
    /// or `SubmissionFailed` with the user-facing error recorded.
    pub async fn submit(&self) -> Result<SubmissionState, WizardError> {
        let narrative = {
            let mut flow = self.inner.flow.write().await;
            if !flow.step.is_review() {
                return Err(WizardError::NotAtReview);
            }
            if flow.submission.is_in_flight() {
                return Err(WizardError::SubmissionInFlight);
            }
            if flow.submission.is_terminal() {
                return Err(WizardError::AlreadySubmitted);
            }
            flow.submission = SubmissionState::Submitting;
            flow.error = None;
            flow.narrative.clone().unwrap_or_default()
        };

        let record = self.inner.record.read().await.clone();
        let payload = SubmissionPayload::new(record, narrative, self.inner.source_tag.clone());

        info!(source = %payload.source, "Submitting record");
        let result = self.inner.gateway.submit(&payload).await;

        let mut flow = self.inner.flow.write().await;
        match result {
            Ok(()) => {
                flow.submission = SubmissionState::Submitted;
                info!("Session submitted");
            }
            Err(e) => {
                warn!(error = %e, "Submission failed");
                flow.submission = SubmissionState::SubmissionFailed;
                flow.error = Some(SUBMISSION_ERROR.to_string());
            }
        }
        Ok(flow.submission)
    }

    /// Throw the session away and start over: step 0, blank record, idle
    /// state, no narrative. Rejected while a submission is in flight.
    pub async fn restart(&self) -> Result<(), WizardError> {
        {
            let mut flow = self.inner.flow.write().await;
            if flow.submission.is_in_flight() {
                return Err(WizardError::SubmissionInFlight);
            }
            let lifetime = flow.lifetime + 1;
            *flow = FlowState {
                lifetime,
                ..FlowState::default()
            };
        }
        *self.inner.record.write().await = ClientRecord::default();
        info!("Session restarted");
        Ok(())
    }

    // ── Introspection ───────────────────────────────────────────────

    /// Current step.
    pub async fn current_step(&self) -> WizardStep {
        self.inner.flow.read().await.step
    }

    /// Current submission state.
    pub async fn submission_state(&self) -> SubmissionState {
        self.inner.flow.read().await.submission
    }

    /// Full session snapshot for the API.
    pub async fn status(&self) -> SessionStatus {
        let record = self.inner.record.read().await.clone();
        let flow = self.inner.flow.read().await;
        SessionStatus {
            step: StepStatus::of(flow.step),
            submission: flow.submission,
            narrative: flow.narrative.clone(),
            error: flow.error.clone(),
            visibility: SectionVisibility::of(&record),
            review: ReviewSnapshot::of(&record),
            income_sources: &INCOME_SOURCES,
            record,
        }
    }

    async fn is_submitted(&self) -> bool {
        self.inner.flow.read().await.submission.is_terminal()
    }
}

/// One step's position and headings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepStatus {
    pub key: WizardStep,
    pub index: usize,
    pub total: usize,
    pub label: &'static str,
    pub description: &'static str,
}

impl StepStatus {
    fn of(step: WizardStep) -> Self {
        Self {
            key: step,
            index: step.index(),
            total: WizardStep::COUNT,
            label: step.label(),
            description: step.description(),
        }
    }
}

/// Everything a client needs to render the session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub step: StepStatus,
    pub submission: SubmissionState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub visibility: SectionVisibility,
    pub review: ReviewSnapshot,
    /// Fixed checklist labels for the income step.
    pub income_sources: &'static [&'static str],
    pub record: ClientRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use crate::error::GatewayError;
    use crate::submit::DEFAULT_SOURCE_TAG;

    /// Generator stub: fixed narrative, call counter, optional gate that
    /// holds the call open until the test releases it.
    struct StubGenerator {
        narrative: String,
        calls: AtomicUsize,
        gate: Option<Arc<Notify>>,
    }

    impl StubGenerator {
        fn immediate(narrative: &str) -> Arc<Self> {
            Arc::new(Self {
                narrative: narrative.into(),
                calls: AtomicUsize::new(0),
                gate: None,
            })
        }

        fn gated(narrative: &str) -> (Arc<Self>, Arc<Notify>) {
            let gate = Arc::new(Notify::new());
            let stub = Arc::new(Self {
                narrative: narrative.into(),
                calls: AtomicUsize::new(0),
                gate: Some(Arc::clone(&gate)),
            });
            (stub, gate)
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SummaryGenerator for StubGenerator {
        async fn generate(&self, _record: &ClientRecord) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.narrative.clone()
        }
    }

    /// Gateway stub: records the last payload, fails a scripted number of
    /// times before succeeding, optional gate.
    struct StubGateway {
        calls: AtomicUsize,
        fail_times: AtomicUsize,
        gate: Option<Arc<Notify>>,
        last_payload: Mutex<Option<serde_json::Value>>,
    }

    impl StubGateway {
        fn ok() -> Arc<Self> {
            Self::failing(0)
        }

        fn failing(times: usize) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail_times: AtomicUsize::new(times),
                gate: None,
                last_payload: Mutex::new(None),
            })
        }

        fn gated() -> (Arc<Self>, Arc<Notify>) {
            let gate = Arc::new(Notify::new());
            let stub = Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail_times: AtomicUsize::new(0),
                gate: Some(Arc::clone(&gate)),
                last_payload: Mutex::new(None),
            });
            (stub, gate)
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_payload(&self) -> serde_json::Value {
            self.last_payload.lock().unwrap().clone().expect("no payload captured")
        }
    }

    #[async_trait]
    impl SubmissionGateway for StubGateway {
        async fn submit(&self, payload: &SubmissionPayload) -> Result<(), GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_payload.lock().unwrap() = Some(serde_json::to_value(payload).unwrap());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            let remaining = self.fail_times.load(Ordering::SeqCst);
            if remaining > 0 {
                self.fail_times.store(remaining - 1, Ordering::SeqCst);
                return Err(GatewayError::Transport {
                    reason: "stub offline".into(),
                });
            }
            Ok(())
        }
    }

    fn session_with(generator: Arc<StubGenerator>, gateway: Arc<StubGateway>) -> WizardSession {
        WizardSession::new(generator, gateway, DEFAULT_SOURCE_TAG)
    }

    async fn walk_to_review(session: &WizardSession) {
        for _ in 0..WizardStep::COUNT - 1 {
            session.advance().await;
        }
    }

    /// Let the spawned generation task run until it settles.
    async fn settle(session: &WizardSession) {
        for _ in 0..50 {
            tokio::task::yield_now().await;
            if !session.inner.flow.read().await.narrative_pending {
                return;
            }
        }
        panic!("narrative generation never settled");
    }

    #[tokio::test]
    async fn advancing_to_review_generates_exactly_once() {
        let generator = StubGenerator::immediate("Client briefing.");
        let session = session_with(Arc::clone(&generator), StubGateway::ok());

        walk_to_review(&session).await;
        assert_eq!(session.current_step().await, WizardStep::Review);
        settle(&session).await;

        assert_eq!(generator.calls(), 1);
        let status = session.status().await;
        assert_eq!(status.submission, SubmissionState::Ready);
        assert_eq!(status.narrative.as_deref(), Some("Client briefing."));
    }

    #[tokio::test]
    async fn advance_at_review_is_noop() {
        let generator = StubGenerator::immediate("x");
        let session = session_with(Arc::clone(&generator), StubGateway::ok());

        walk_to_review(&session).await;
        settle(&session).await;
        session.advance().await;
        session.advance().await;

        assert_eq!(session.current_step().await, WizardStep::Review);
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn retreat_at_first_step_is_noop() {
        let session = session_with(StubGenerator::immediate("x"), StubGateway::ok());

        assert_eq!(session.retreat().await, WizardStep::Identity);
        session.advance().await;
        assert_eq!(session.retreat().await, WizardStep::Identity);
        assert_eq!(session.retreat().await, WizardStep::Identity);
    }

    #[tokio::test]
    async fn reentering_review_does_not_regenerate() {
        let generator = StubGenerator::immediate("Client briefing.");
        let session = session_with(Arc::clone(&generator), StubGateway::ok());

        walk_to_review(&session).await;
        settle(&session).await;
        session.retreat().await;
        // Editing between visits does not invalidate the narrative
        session
            .apply_update(RecordUpdate::AnnualSalary(200_000.0))
            .await;
        session.advance().await;
        settle(&session).await;

        assert_eq!(generator.calls(), 1);
        let status = session.status().await;
        assert_eq!(status.narrative.as_deref(), Some("Client briefing."));
    }

    #[tokio::test]
    async fn pending_generation_allows_navigation_and_never_doubles() {
        let (generator, gate) = StubGenerator::gated("Slow briefing.");
        let session = session_with(Arc::clone(&generator), StubGateway::ok());

        walk_to_review(&session).await;
        tokio::task::yield_now().await;

        let status = session.status().await;
        assert_eq!(status.submission, SubmissionState::GeneratingSummary);
        assert!(status.narrative.is_none());

        // Navigation stays open while pending, and re-entry does not
        // issue a second call
        assert_eq!(session.retreat().await, WizardStep::Wealth);
        session.advance().await;
        tokio::task::yield_now().await;
        assert_eq!(generator.calls(), 1);

        gate.notify_one();
        settle(&session).await;
        let status = session.status().await;
        assert_eq!(status.submission, SubmissionState::Ready);
        assert_eq!(status.narrative.as_deref(), Some("Slow briefing."));
    }

    #[tokio::test]
    async fn submit_off_review_is_rejected() {
        let session = session_with(StubGenerator::immediate("x"), StubGateway::ok());
        assert_eq!(session.submit().await, Err(WizardError::NotAtReview));

        session.advance().await;
        assert_eq!(session.submit().await, Err(WizardError::NotAtReview));
    }

    #[tokio::test]
    async fn submit_delivers_record_and_narrative() {
        let gateway = StubGateway::ok();
        let session = session_with(
            StubGenerator::immediate("Client briefing."),
            Arc::clone(&gateway),
        );

        session
            .apply_update(RecordUpdate::FirstName("Priya".into()))
            .await;
        walk_to_review(&session).await;
        settle(&session).await;

        let state = session.submit().await.unwrap();
        assert_eq!(state, SubmissionState::Submitted);
        assert_eq!(gateway.calls(), 1);

        let payload = gateway.last_payload();
        assert_eq!(payload["firstName"], "Priya");
        assert_eq!(payload["aiInsight"], "Client briefing.");
        assert_eq!(payload["source"], DEFAULT_SOURCE_TAG);
        assert!(payload.get("submittedAt").is_some());
    }

    #[tokio::test]
    async fn submitted_session_is_frozen_except_restart() {
        let session = session_with(StubGenerator::immediate("x"), StubGateway::ok());
        walk_to_review(&session).await;
        settle(&session).await;
        session.submit().await.unwrap();

        // All mutation paths are dead
        session
            .apply_update(RecordUpdate::FirstName("late".into()))
            .await;
        assert!(session.add_entity().await.is_none());
        assert_eq!(session.advance().await, WizardStep::Review);
        assert_eq!(session.retreat().await, WizardStep::Review);
        assert_eq!(session.submit().await, Err(WizardError::AlreadySubmitted));
        assert!(session.status().await.record.first_name.is_empty());

        // Restart opens a fresh session
        session.restart().await.unwrap();
        let status = session.status().await;
        assert_eq!(status.step.index, 0);
        assert_eq!(status.submission, SubmissionState::Idle);
    }

    #[tokio::test]
    async fn failed_submission_preserves_record_and_allows_retry() {
        let gateway = StubGateway::failing(1);
        let session = session_with(StubGenerator::immediate("x"), Arc::clone(&gateway));

        session
            .apply_update(RecordUpdate::FirstName("Priya".into()))
            .await;
        session.apply_update(RecordUpdate::HasSpouse(true)).await;
        walk_to_review(&session).await;
        settle(&session).await;

        let before = serde_json::to_string(&session.status().await.record).unwrap();
        let state = session.submit().await.unwrap();
        assert_eq!(state, SubmissionState::SubmissionFailed);

        let status = session.status().await;
        let after = serde_json::to_string(&status.record).unwrap();
        assert_eq!(before, after, "record must survive a failed delivery untouched");
        assert_eq!(status.error.as_deref(), Some(SUBMISSION_ERROR));

        // Navigation is open again, and retrying succeeds
        assert_eq!(session.retreat().await, WizardStep::Wealth);
        session.advance().await;
        let state = session.submit().await.unwrap();
        assert_eq!(state, SubmissionState::Submitted);
        assert_eq!(gateway.calls(), 2);
        assert!(session.status().await.error.is_none());
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_rejected() {
        let (gateway, gate) = StubGateway::gated();
        let session = session_with(StubGenerator::immediate("x"), Arc::clone(&gateway));
        walk_to_review(&session).await;
        settle(&session).await;

        let in_flight = tokio::spawn({
            let session = session.clone();
            async move { session.submit().await }
        });
        // Let the spawned submit reach the gateway
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert_eq!(
            session.submission_state().await,
            SubmissionState::Submitting
        );

        assert_eq!(session.submit().await, Err(WizardError::SubmissionInFlight));
        assert_eq!(session.retreat().await, WizardStep::Review);
        assert_eq!(
            session.restart().await,
            Err(WizardError::SubmissionInFlight)
        );

        gate.notify_one();
        let state = in_flight.await.unwrap().unwrap();
        assert_eq!(state, SubmissionState::Submitted);
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn submit_before_generation_settles_sends_empty_narrative() {
        let (generator, gate) = StubGenerator::gated("Late briefing.");
        let gateway = StubGateway::ok();
        let session = session_with(Arc::clone(&generator), Arc::clone(&gateway));

        walk_to_review(&session).await;
        assert_eq!(
            session.submission_state().await,
            SubmissionState::GeneratingSummary
        );

        let state = session.submit().await.unwrap();
        assert_eq!(state, SubmissionState::Submitted);
        assert_eq!(gateway.last_payload()["aiInsight"], "");

        // The late narrative lands quietly without reopening the session
        gate.notify_one();
        settle(&session).await;
        let status = session.status().await;
        assert_eq!(status.submission, SubmissionState::Submitted);
        assert_eq!(status.narrative.as_deref(), Some("Late briefing."));
    }

    #[tokio::test]
    async fn restart_resets_record_step_and_narrative() {
        let generator = StubGenerator::immediate("Client briefing.");
        let session = session_with(Arc::clone(&generator), StubGateway::ok());

        session
            .apply_update(RecordUpdate::FirstName("Priya".into()))
            .await;
        session.apply_update(RecordUpdate::HasEntities(true)).await;
        session.add_entity().await;
        walk_to_review(&session).await;
        settle(&session).await;

        session.restart().await.unwrap();
        let status = session.status().await;
        assert_eq!(status.step.key, WizardStep::Identity);
        assert_eq!(status.submission, SubmissionState::Idle);
        assert!(status.narrative.is_none());
        assert!(status.record.first_name.is_empty());
        assert!(status.record.entities.is_empty());

        // The fresh lifetime generates again on its own review visit
        walk_to_review(&session).await;
        settle(&session).await;
        assert_eq!(generator.calls(), 2);
    }

    #[tokio::test]
    async fn narrative_from_discarded_lifetime_is_dropped() {
        let (generator, gate) = StubGenerator::gated("Stale briefing.");
        let session = session_with(Arc::clone(&generator), StubGateway::ok());

        walk_to_review(&session).await;
        tokio::task::yield_now().await;
        assert_eq!(generator.calls(), 1);

        session.restart().await.unwrap();
        gate.notify_one();
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        let status = session.status().await;
        assert_eq!(status.submission, SubmissionState::Idle);
        assert!(status.narrative.is_none());
    }

    #[tokio::test]
    async fn status_reflects_record_state() {
        let session = session_with(StubGenerator::immediate("x"), StubGateway::ok());
        session
            .apply_update(RecordUpdate::FirstName("Priya".into()))
            .await;
        session
            .apply_update(RecordUpdate::LastName("Sharma".into()))
            .await;
        session.apply_update(RecordUpdate::HasSpouse(true)).await;

        let status = session.status().await;
        assert_eq!(status.step.label, "Identity");
        assert_eq!(status.step.total, 6);
        assert!(status.visibility.spouse_details);
        assert!(!status.visibility.entity_list);
        assert_eq!(status.review.lead_member, "Priya Sharma");
        assert!(status.narrative.is_none());
        assert!(status.error.is_none());
    }

    #[tokio::test]
    async fn entity_ops_flow_through_the_session() {
        let session = session_with(StubGenerator::immediate("x"), StubGateway::ok());
        session.apply_update(RecordUpdate::HasEntities(true)).await;

        let first = session.add_entity().await.unwrap();
        let second = session.add_entity().await.unwrap();
        assert!(
            session
                .update_entity(first.id, EntityUpdate::Name("Horizon Pty Ltd".into()))
                .await
        );
        assert!(!session.update_entity(Uuid::new_v4(), EntityUpdate::Name("ghost".into())).await);

        assert!(session.remove_entity(first.id).await);
        let record = session.status().await.record;
        assert_eq!(record.entities.len(), 1);
        assert_eq!(record.entities[0].id, second.id);
    }
}
