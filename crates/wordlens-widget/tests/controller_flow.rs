//! Controller flows against a scripted dictionary source.

use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use tokio::sync::oneshot;
use wordlens_api::{ApiError, DictionarySource, LookupOutcome};
use wordlens_core::render::RenderStyle;
use wordlens_core::{
    Definition, DictionaryEntry, Meaning, OverlapPolicy, Phonetic, Query, RenderState, StateKind,
};
use wordlens_widget::{
    InputField, Key, LookupController, MemoryInput, MemoryOutput, SearchReport, UiEvent,
};

// ── Scripted source ────────────────────────────────────────────────

#[derive(Clone)]
enum Answer {
    Found(DictionaryEntry),
    NotFound,
    Reject,
}

#[derive(Default)]
struct ScriptedSource {
    answers: HashMap<String, Answer>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    requested: Mutex<Vec<String>>,
}

impl ScriptedSource {
    fn answer(mut self, word: &str, answer: Answer) -> Self {
        self.answers.insert(word.to_string(), answer);
        self
    }

    /// Hold the response for `word` until the returned sender fires.
    fn gate(&self, word: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(word.to_string(), rx);
        tx
    }

    fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl DictionarySource for ScriptedSource {
    fn lookup(
        &self,
        query: &Query,
    ) -> impl Future<Output = Result<LookupOutcome, ApiError>> + Send {
        let word = query.to_string();
        self.requested.lock().unwrap().push(word.clone());
        let gate = self.gates.lock().unwrap().remove(&word);
        let answer = self.answers.get(&word).cloned().unwrap_or(Answer::NotFound);

        async move {
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            match answer {
                Answer::Found(entry) => Ok(LookupOutcome::Found(entry)),
                Answer::NotFound => Ok(LookupOutcome::NotFound {
                    title: Some("No Definitions Found".to_string()),
                }),
                Answer::Reject => Err(rejected_request().await),
            }
        }
    }
}

/// A real transport error, produced without touching the network.
async fn rejected_request() -> ApiError {
    let err = reqwest::Client::new()
        .get("not a url")
        .send()
        .await
        .expect_err("invalid URL must fail");
    ApiError::from(err)
}

fn entry(word: &str) -> DictionaryEntry {
    DictionaryEntry {
        word: word.to_string(),
        phonetic: None,
        phonetics: vec![
            Phonetic {
                text: None,
                audio: Some(String::new()),
            },
            Phonetic {
                text: Some(format!("/{word}/")),
                audio: None,
            },
        ],
        meanings: vec![Meaning {
            part_of_speech: "noun".to_string(),
            definitions: (1..=4)
                .map(|i| Definition {
                    definition: format!("{word} sense {i}"),
                    example: None,
                })
                .collect(),
            synonyms: (1..=7).map(|i| format!("syn{i}")).collect(),
            antonyms: Vec::new(),
        }],
        source_urls: Vec::new(),
    }
}

type Controller = LookupController<Arc<ScriptedSource>, MemoryInput, MemoryOutput>;

fn controller(source: &Arc<ScriptedSource>, raw: &str) -> Controller {
    LookupController::new(Arc::clone(source), MemoryInput::with_value(raw), MemoryOutput::new())
}

// ── Log capture ────────────────────────────────────────────────────

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    fn install(&self) -> tracing::subscriber::DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

// ── Flows ──────────────────────────────────────────────────────────

#[tokio::test]
async fn found_word_renders_first_entry_with_limits() {
    let source = Arc::new(ScriptedSource::default().answer("light", Answer::Found(entry("light"))));
    let ctl = controller(&source, " Light ");

    let report = ctl.handle(UiEvent::SearchActivated).await;
    assert_eq!(report, Some(SearchReport::Rendered(StateKind::Result)));
    assert_eq!(source.requested(), vec!["light".to_string()]);

    let html = ctl.output().rendered(RenderStyle::Markup);
    assert!(html.starts_with("<h3>light <small>/light/</small></h3>"));
    assert!(!html.contains("<audio"));
    assert!(html.contains("<p>3. light sense 3</p>"));
    assert!(!html.contains("light sense 4"));
    assert!(html.contains("<p><b>Synonyms:</b> syn1, syn2, syn3, syn4, syn5</p>"));
    assert!(!html.contains("Antonyms"));
}

#[tokio::test]
async fn non_sequence_payload_names_the_term() {
    let source = Arc::new(ScriptedSource::default());
    let ctl = controller(&source, "Qwzx");

    ctl.search().await;
    assert_eq!(
        ctl.output().rendered(RenderStyle::Markup),
        "<p>No results found for \"<b>qwzx</b>\". Try another word.</p>"
    );
}

#[tokio::test]
async fn rejected_request_shows_fixed_message_and_logs_cause() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let source = Arc::new(ScriptedSource::default().answer("hello", Answer::Reject));
    let ctl = controller(&source, "hello");

    let report = ctl.search().await;
    assert_eq!(report, SearchReport::Rendered(StateKind::Error));
    assert_eq!(ctl.output().current(), Some(RenderState::Error));

    let html = ctl.output().rendered(RenderStyle::Markup);
    assert_eq!(
        html,
        "<p>⚠️ Error fetching data. Please check your network or try again later.</p>"
    );
    assert!(!html.contains("HTTP error"));

    let logged = logs.text();
    assert!(logged.contains("dictionary lookup failed"), "logs: {logged}");
    assert!(logged.contains("HTTP error"), "logs: {logged}");
}

#[tokio::test]
async fn enter_and_search_control_run_the_same_flow() {
    let source = Arc::new(ScriptedSource::default().answer("run", Answer::Found(entry("run"))));

    let by_button = controller(&source, "RUN");
    by_button.handle(UiEvent::SearchActivated).await;

    let by_enter = controller(&source, "RUN");
    by_enter.input().focus();
    by_enter.handle(UiEvent::KeyPressed(Key::Enter)).await;

    assert_eq!(by_button.output().history(), by_enter.output().history());
    assert_eq!(source.requested(), vec!["run".to_string(), "run".to_string()]);
}

#[tokio::test]
async fn clear_works_in_every_output_state() {
    let source = Arc::new(
        ScriptedSource::default()
            .answer("ok", Answer::Found(entry("ok")))
            .answer("bad", Answer::Reject),
    );

    for raw in ["", "ok", "missing", "bad"] {
        let ctl = controller(&source, raw);
        ctl.search().await;
        let shown = ctl.output().current();

        ctl.handle(UiEvent::ClearActivated).await;
        assert_eq!(ctl.input().value(), "");
        assert!(ctl.input().is_focused());
        assert_eq!(ctl.output().current(), shown);
    }
}

// ── Overlapping searches ───────────────────────────────────────────

async fn wait_for(ctl: &Controller, state: &RenderState) {
    while ctl.output().current().as_ref() != Some(state) {
        tokio::task::yield_now().await;
    }
}

fn loading(term: &str) -> RenderState {
    RenderState::Loading {
        term: term.to_string(),
    }
}

/// Start "slow" then "fast", resolve "fast" first, then "slow".
/// Returns the reports of (slow, fast) and the final visible word.
async fn race(policy: OverlapPolicy) -> (SearchReport, SearchReport, Option<String>) {
    let source = Arc::new(
        ScriptedSource::default()
            .answer("slow", Answer::Found(entry("slow")))
            .answer("fast", Answer::Found(entry("fast"))),
    );
    let release_slow = source.gate("slow");
    let release_fast = source.gate("fast");
    let ctl = Arc::new(controller(&source, "slow").with_policy(policy));

    let slow = tokio::spawn({
        let ctl = Arc::clone(&ctl);
        async move { ctl.search().await }
    });
    wait_for(&ctl, &loading("slow")).await;

    ctl.input().set_value("fast");
    let fast = tokio::spawn({
        let ctl = Arc::clone(&ctl);
        async move { ctl.search().await }
    });
    wait_for(&ctl, &loading("fast")).await;

    release_fast.send(()).unwrap();
    let fast = fast.await.unwrap();
    release_slow.send(()).unwrap();
    let slow = slow.await.unwrap();

    let visible = match ctl.output().current() {
        Some(RenderState::Result { entry }) => Some(entry.word),
        _ => None,
    };
    (slow, fast, visible)
}

#[tokio::test]
async fn last_write_wins_lets_late_response_overwrite() {
    let (slow, fast, visible) = race(OverlapPolicy::LastWriteWins).await;
    assert_eq!(fast, SearchReport::Rendered(StateKind::Result));
    assert_eq!(slow, SearchReport::Rendered(StateKind::Result));
    assert_eq!(visible.as_deref(), Some("slow"));
}

#[tokio::test]
async fn latest_request_wins_discards_stale_response() {
    let (slow, fast, visible) = race(OverlapPolicy::LatestRequestWins).await;
    assert_eq!(fast, SearchReport::Rendered(StateKind::Result));
    assert_eq!(slow, SearchReport::Discarded);
    assert_eq!(visible.as_deref(), Some("fast"));
}

#[tokio::test]
async fn stale_response_never_overwrites_a_newer_prompt() {
    let source = Arc::new(ScriptedSource::default().answer("slow", Answer::Found(entry("slow"))));
    let release_slow = source.gate("slow");
    let ctl = Arc::new(
        controller(&source, "slow").with_policy(OverlapPolicy::LatestRequestWins),
    );

    let slow = tokio::spawn({
        let ctl = Arc::clone(&ctl);
        async move { ctl.search().await }
    });
    wait_for(&ctl, &loading("slow")).await;

    ctl.input().set_value("   ");
    assert_eq!(ctl.search().await, SearchReport::Prompted);

    release_slow.send(()).unwrap();
    assert_eq!(slow.await.unwrap(), SearchReport::Discarded);
    assert_eq!(ctl.output().current(), Some(RenderState::EmptyPrompt));
}
