//! The lookup controller.
//!
//! ```text
//! input ──normalize──┬── empty ──────────────────────────► EmptyPrompt
//!                    └── Loading ── source.lookup().await ─┬► Result
//!                                                          ├► NotFound
//!                                                          └► Error (cause logged)
//! ```
//!
//! Every search takes a generation number when it starts. Writes to the
//! output region happen under one lock together with the generation check,
//! so under [`OverlapPolicy::LatestRequestWins`] a superseded search can
//! never overwrite the output of a newer one.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use wordlens_api::{DictionarySource, LookupOutcome};
use wordlens_core::{DisplayLimits, EntryView, OverlapPolicy, Query, RenderState, StateKind};

use crate::event::{Key, UiEvent};
use crate::surface::{InputField, OutputRegion};

/// What a single search invocation did to the output region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchReport {
    /// Input was empty after normalization; no request was made.
    Prompted,
    /// The response was written as the given state.
    Rendered(StateKind),
    /// A newer search started first; the response was dropped.
    Discarded,
}

pub struct LookupController<S, I, O> {
    source: S,
    input: I,
    output: O,
    limits: DisplayLimits,
    policy: OverlapPolicy,
    /// Generation of the most recently started search.
    latest: Mutex<u64>,
}

impl<S, I, O> LookupController<S, I, O>
where
    S: DictionarySource,
    I: InputField,
    O: OutputRegion,
{
    /// Wire a controller with default display limits and
    /// [`OverlapPolicy::LastWriteWins`].
    pub fn new(source: S, input: I, output: O) -> Self {
        Self {
            source,
            input,
            output,
            limits: DisplayLimits::default(),
            policy: OverlapPolicy::default(),
            latest: Mutex::new(0),
        }
    }

    #[must_use]
    pub fn with_limits(mut self, limits: DisplayLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: OverlapPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub const fn input(&self) -> &I {
        &self.input
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub const fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    /// React to a host event.
    ///
    /// The synchronous part of the event (reading the input, writing the
    /// Empty-prompt or Loading state, clearing) happens before this returns;
    /// the returned future only awaits the response. It resolves to the search
    /// report when the event triggered a search. Enter only counts while the
    /// input field has focus.
    pub fn handle(&self, event: UiEvent) -> impl Future<Output = Option<SearchReport>> + Send + '_ {
        let pending = match event {
            UiEvent::SearchActivated => Some(self.search()),
            UiEvent::KeyPressed(Key::Enter) if self.input.is_focused() => Some(self.search()),
            UiEvent::KeyPressed(_) => None,
            UiEvent::ClearActivated => {
                self.clear();
                None
            }
        };

        async move {
            match pending {
                Some(search) => Some(search.await),
                None => None,
            }
        }
    }

    /// Run one search with the input field's current value.
    ///
    /// The input is read and the first state written immediately; the
    /// returned future performs the lookup and writes the final state.
    pub fn search(&self) -> impl Future<Output = SearchReport> + Send + '_ {
        let raw = self.input.value();
        let started = Query::parse(&raw).map(|query| {
            let generation = self.begin(&RenderState::Loading {
                term: query.to_string(),
            });
            (query, generation)
        });
        if started.is_none() {
            self.begin(&RenderState::EmptyPrompt);
        }

        async move {
            let Some((query, generation)) = started else {
                return SearchReport::Prompted;
            };
            let state = self.resolve(&query).await;
            self.finish(generation, &query, &state)
        }
    }

    async fn resolve(&self, query: &Query) -> RenderState {
        match self.source.lookup(query).await {
            Ok(LookupOutcome::Found(entry)) => RenderState::Result {
                entry: EntryView::from_entry(&entry, &self.limits),
            },
            Ok(LookupOutcome::NotFound { title }) => {
                tracing::debug!(%query, title = title.as_deref(), "no definitions");
                RenderState::NotFound {
                    term: query.to_string(),
                }
            }
            Err(error) => {
                tracing::error!(%query, %error, "dictionary lookup failed");
                RenderState::Error
            }
        }
    }

    /// Empty the input field and give it focus. The output is left alone.
    pub fn clear(&self) {
        self.input.clear();
        self.input.focus();
    }

    /// Start a new generation and write its first state.
    fn begin(&self, state: &RenderState) -> u64 {
        let mut latest = self.lock_latest();
        *latest += 1;
        self.output.replace(state);
        *latest
    }

    /// Write the final state unless the policy says it is stale.
    fn finish(&self, generation: u64, query: &Query, state: &RenderState) -> SearchReport {
        let latest = self.lock_latest();
        if self.policy.discards_stale() && *latest != generation {
            tracing::debug!(
                %query,
                generation,
                latest = *latest,
                "discarding stale lookup response"
            );
            return SearchReport::Discarded;
        }
        self.output.replace(state);
        SearchReport::Rendered(state.kind())
    }

    fn lock_latest(&self) -> MutexGuard<'_, u64> {
        self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
