//! Report notification (email) stub.
//!
//! There is no mail transport in this tool. `send_report` validates the
//! destination, composes the plain-text summary, and hands it to a
//! [`MailTransport`]. The only transport shipped is [`SimulatedTransport`],
//! which waits a fixed delay and logs the delivery.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use tracing::info;

use crate::domain::{BenchmarkResult, Profile};

static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("address pattern compiles"));

pub const REPORT_SUBJECT: &str = "Your Salary Benchmark Report";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotifyError {
    #[error("Invalid email address '{0}'. Expected something like name@example.com.")]
    InvalidAddress(String),
    #[error("Failed to deliver report: {0}")]
    Transport(String),
}

/// A composed message ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Delivery seam for report messages.
pub trait MailTransport {
    fn deliver(&self, message: &Message) -> Result<(), NotifyError>;
}

/// Stand-in transport: sleeps for `delay`, then logs what would have been sent.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl MailTransport for SimulatedTransport {
    fn deliver(&self, message: &Message) -> Result<(), NotifyError> {
        std::thread::sleep(self.delay);
        info!(
            to = %message.to,
            subject = %message.subject,
            body_len = message.body.len(),
            "simulated report delivery"
        );
        Ok(())
    }
}

/// True when `address` has the `local@domain.tld` shape.
pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_RE.is_match(address)
}

/// Validate `address`, compose the summary, and deliver it.
///
/// An invalid address fails before the transport is touched.
pub fn send_report(
    transport: &dyn MailTransport,
    address: &str,
    profile: &Profile,
    result: &BenchmarkResult,
) -> Result<Message, NotifyError> {
    let address = address.trim();
    if !is_valid_address(address) {
        return Err(NotifyError::InvalidAddress(address.to_string()));
    }

    let message = Message {
        to: address.to_string(),
        subject: REPORT_SUBJECT.to_string(),
        body: crate::report::format_email_body(profile, result),
    };
    transport.deliver(&message)?;
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::time::Instant;

    #[derive(Default)]
    struct RecordingTransport {
        sent: RefCell<Vec<Message>>,
    }

    impl MailTransport for RecordingTransport {
        fn deliver(&self, message: &Message) -> Result<(), NotifyError> {
            self.sent.borrow_mut().push(message.clone());
            Ok(())
        }
    }

    struct FailingTransport;

    impl MailTransport for FailingTransport {
        fn deliver(&self, _message: &Message) -> Result<(), NotifyError> {
            Err(NotifyError::Transport("relay unavailable".to_string()))
        }
    }

    fn sample() -> (Profile, BenchmarkResult) {
        let profile = Profile {
            current_salary: 1_000_000.0,
            experience_years: 3,
            industry: "Information Technology".to_string(),
            role: "Software Engineer".to_string(),
            location: "Bangalore".to_string(),
            education_level: "Bachelor's Degree".to_string(),
        };
        let result = crate::calc::compute(&profile);
        (profile, result)
    }

    #[test]
    fn address_shapes() {
        assert!(is_valid_address("a@b.co"));
        assert!(is_valid_address("first.last+tag@mail.example.in"));
        assert!(!is_valid_address("not-an-email"));
        assert!(!is_valid_address("a@b"));
        assert!(!is_valid_address("a b@c.d"));
        assert!(!is_valid_address("a@@b.c"));
        assert!(!is_valid_address(""));
    }

    #[test]
    fn invalid_address_fails_without_delay() {
        let (profile, result) = sample();
        let transport = SimulatedTransport::new(Duration::from_secs(30));
        let started = Instant::now();
        let err = send_report(&transport, "not-an-email", &profile, &result).unwrap_err();
        assert_eq!(err, NotifyError::InvalidAddress("not-an-email".to_string()));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn invalid_address_never_reaches_transport() {
        let (profile, result) = sample();
        let transport = RecordingTransport::default();
        assert!(send_report(&transport, "nobody@", &profile, &result).is_err());
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn valid_address_delivers_summary() {
        let (profile, result) = sample();
        let transport = RecordingTransport::default();
        let message = send_report(&transport, " me@example.com ", &profile, &result).unwrap();
        assert_eq!(message.to, "me@example.com");
        assert_eq!(message.subject, REPORT_SUBJECT);
        assert!(message.body.contains("₹19,84,320"));

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], message);
    }

    #[test]
    fn transport_failure_propagates() {
        let (profile, result) = sample();
        let err = send_report(&FailingTransport, "me@example.com", &profile, &result).unwrap_err();
        assert!(matches!(err, NotifyError::Transport(_)));
    }

    #[test]
    fn simulated_transport_waits_its_delay() {
        let transport = SimulatedTransport::new(Duration::from_millis(20));
        let message = Message {
            to: "me@example.com".to_string(),
            subject: REPORT_SUBJECT.to_string(),
            body: String::new(),
        };
        let started = Instant::now();
        transport.deliver(&message).unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
