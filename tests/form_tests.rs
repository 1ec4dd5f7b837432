use folio_core::form::*;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Label(String),
    Enabled(bool),
    Style(ButtonStyle),
    Reset,
    Sleep(i32),
}

struct RecordingView<'a> {
    label: String,
    log: &'a RefCell<Vec<Op>>,
}

impl SubmitView for RecordingView<'_> {
    fn label(&self) -> String {
        self.label.clone()
    }
    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
        self.log.borrow_mut().push(Op::Label(label.to_string()));
    }
    fn set_enabled(&mut self, enabled: bool) {
        self.log.borrow_mut().push(Op::Enabled(enabled));
    }
    fn apply_style(&mut self, style: ButtonStyle) {
        self.log.borrow_mut().push(Op::Style(style));
    }
    fn reset_fields(&mut self) {
        self.log.borrow_mut().push(Op::Reset);
    }
}

struct StubTransport {
    reply: Result<u16, SubmitError>,
    seen: RefCell<Vec<ContactRequest>>,
}

impl StubTransport {
    fn new(reply: Result<u16, SubmitError>) -> Self {
        Self {
            reply,
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for StubTransport {
    async fn post(&self, request: &ContactRequest) -> Result<u16, SubmitError> {
        self.seen.borrow_mut().push(request.clone());
        self.reply.clone()
    }
}

struct RecordingTimer<'a> {
    log: &'a RefCell<Vec<Op>>,
}

impl Timer for RecordingTimer<'_> {
    async fn sleep_ms(&self, ms: i32) {
        self.log.borrow_mut().push(Op::Sleep(ms));
    }
}

fn run(reply: Result<u16, SubmitError>) -> (SubmitOutcome, Vec<Op>, StubTransport) {
    let log = RefCell::new(Vec::new());
    let mut view = RecordingView {
        label: "Transmit".to_string(),
        log: &log,
    };
    let transport = StubTransport::new(reply);
    let timer = RecordingTimer { log: &log };
    let request = ContactRequest::new("https://formspree.io/f/test");
    let outcome = pollster::block_on(submit_contact(&mut view, &transport, &timer, &request));
    assert_eq!(view.label, "Transmit");
    (outcome, log.into_inner(), transport)
}

fn restore_tail() -> Vec<Op> {
    vec![
        Op::Sleep(3000),
        Op::Label("Transmit".into()),
        Op::Style(ButtonStyle::CLEARED),
        Op::Enabled(true),
    ]
}

#[test]
fn success_shows_sent_resets_fields_then_restores() {
    let (outcome, ops, transport) = run(Ok(200));
    assert_eq!(outcome, SubmitOutcome::Success);
    let mut expected = vec![
        Op::Label(LABEL_PENDING.into()),
        Op::Enabled(false),
        Op::Label(LABEL_SENT.into()),
        Op::Style(ButtonStyle::SENT),
        Op::Reset,
    ];
    expected.extend(restore_tail());
    assert_eq!(ops, expected);

    let seen = transport.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].endpoint, "https://formspree.io/f/test");
    assert_eq!(seen[0].accept, "application/json");
}

#[test]
fn server_error_shows_failed_and_keeps_fields() {
    let (outcome, ops, _) = run(Ok(500));
    assert_eq!(outcome, SubmitOutcome::Failure(SubmitError::Status(500)));
    assert!(!outcome.is_success());
    let mut expected = vec![
        Op::Label(LABEL_PENDING.into()),
        Op::Enabled(false),
        Op::Label(LABEL_FAILED.into()),
        Op::Style(ButtonStyle::FAILED),
    ];
    expected.extend(restore_tail());
    assert_eq!(ops, expected);
}

#[test]
fn network_error_is_a_failure() {
    let err = SubmitError::Network("TypeError: Failed to fetch".into());
    let (outcome, ops, _) = run(Err(err.clone()));
    assert_eq!(outcome, SubmitOutcome::Failure(err));
    assert!(ops.contains(&Op::Label(LABEL_FAILED.into())));
    assert!(!ops.contains(&Op::Reset));
    assert_eq!(ops.last(), Some(&Op::Enabled(true)));
}

#[test]
fn status_classification() {
    assert!(SubmitOutcome::from_status(200).is_success());
    assert!(SubmitOutcome::from_status(204).is_success());
    assert!(SubmitOutcome::from_status(299).is_success());
    assert!(!SubmitOutcome::from_status(199).is_success());
    assert!(!SubmitOutcome::from_status(302).is_success());
    assert!(!SubmitOutcome::from_status(404).is_success());
}

#[test]
fn error_messages_name_the_cause() {
    assert_eq!(
        SubmitError::Status(503).to_string(),
        "server responded with status 503"
    );
    assert!(SubmitError::Network("offline".into())
        .to_string()
        .contains("offline"));
}
