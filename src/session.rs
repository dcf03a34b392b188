//! Session state
//!
//! All UI-visible state lives in one explicit object: the current
//! input, the last resolved quotes, the loading flag, and an optional
//! user-facing notice. State changes only through the transition
//! methods below; a request runs to completion before the next one
//! can start.

use crate::core::data::{Quote, QuoteDatabase};
use crate::core::resolver::{self, ResolveError};
use crate::store::LoadOutcome;
use rand::Rng;

/// A user-facing message attached to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Non-blocking information, e.g. the fallback database is in use
    Info(String),
    /// The last request was rejected and should be retried
    Warn(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Info(msg) | Notice::Warn(msg) => msg,
        }
    }
}

pub struct Session {
    db: QuoteDatabase,
    input: String,
    quotes: Vec<Quote>,
    loading: bool,
    notice: Option<Notice>,
}

impl Session {
    /// Adopt the result of the session's single load attempt.
    pub fn start(outcome: LoadOutcome) -> Self {
        Self {
            db: outcome.db,
            input: String::new(),
            quotes: Vec::new(),
            loading: false,
            notice: outcome.notice.map(Notice::Info),
        }
    }

    pub fn db(&self) -> &QuoteDatabase {
        &self.db
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The quotes currently on display
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Record a request as in flight. Returns false, and changes
    /// nothing, when another request is already in flight.
    pub fn begin_request(&mut self, input: &str) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.input = input.to_string();
        true
    }

    /// Complete the in-flight request: resolve the recorded input,
    /// sample, and transition the display state.
    ///
    /// On success the displayed quotes are replaced and any warning
    /// from a previous failed request is cleared; a load notice stays
    /// for the whole session. On failure the displayed quotes are left
    /// untouched and the error becomes the session notice.
    pub fn complete_request<R: Rng>(&mut self, rng: &mut R) -> Result<&[Quote], ResolveError> {
        self.loading = false;
        match resolver::resolve(&self.input, &self.db) {
            Ok(candidates) => {
                let sampled = resolver::sample(&candidates, rng);
                self.quotes = sampled.iter().map(|raw| Quote::parse(raw)).collect();
                if matches!(self.notice, Some(Notice::Warn(_))) {
                    self.notice = None;
                }
                Ok(&self.quotes)
            }
            Err(err) => {
                self.notice = Some(Notice::Warn(err.to_string()));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LoadSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn loaded_session() -> Session {
        Session::start(LoadOutcome {
            db: QuoteDatabase::builtin(),
            source: LoadSource::Fallback,
            notice: None,
        })
    }

    fn run(session: &mut Session, input: &str) -> Result<Vec<Quote>, ResolveError> {
        let mut rng = StdRng::seed_from_u64(11);
        assert!(session.begin_request(input));
        assert!(session.is_loading());
        session.complete_request(&mut rng).map(|quotes| quotes.to_vec())
    }

    #[test]
    fn start_adopts_load_notice() {
        let session = Session::start(LoadOutcome {
            db: QuoteDatabase::builtin(),
            source: LoadSource::Fallback,
            notice: Some("Using built-in quotes".to_string()),
        });
        assert_eq!(
            session.notice(),
            Some(&Notice::Info("Using built-in quotes".to_string()))
        );
    }

    #[test]
    fn successful_request_replaces_quotes() {
        let mut session = loaded_session();
        let quotes = run(&mut session, "Success").unwrap();
        assert_eq!(quotes.len(), 3);
        assert!(!session.is_loading());
        assert_eq!(session.quotes(), quotes.as_slice());
    }

    #[test]
    fn failed_request_leaves_quotes_untouched() {
        let mut session = loaded_session();
        run(&mut session, "happiness").unwrap();
        let before = session.quotes().to_vec();

        let err = run(&mut session, "   ").unwrap_err();
        assert_eq!(err, ResolveError::EmptyInput);
        assert_eq!(session.quotes(), before.as_slice());
        assert!(matches!(session.notice(), Some(Notice::Warn(_))));
    }

    #[test]
    fn success_clears_warning_but_not_load_notice() {
        let mut session = Session::start(LoadOutcome {
            db: QuoteDatabase::builtin(),
            source: LoadSource::Fallback,
            notice: Some("offline".to_string()),
        });

        run(&mut session, "").unwrap_err();
        assert!(matches!(session.notice(), Some(Notice::Warn(_))));

        run(&mut session, "leadership").unwrap();
        assert!(session.notice().is_none());

        // A fresh session's load notice survives a successful request
        let mut session = Session::start(LoadOutcome {
            db: QuoteDatabase::builtin(),
            source: LoadSource::Fallback,
            notice: Some("offline".to_string()),
        });
        run(&mut session, "leadership").unwrap();
        assert_eq!(session.notice(), Some(&Notice::Info("offline".to_string())));
    }

    #[test]
    fn overlapping_requests_are_refused() {
        let mut session = loaded_session();
        assert!(session.begin_request("success"));
        assert!(!session.begin_request("happiness"));
        assert_eq!(session.input(), "success");
    }

    #[test]
    fn empty_database_reports_not_ready() {
        let mut session = Session::start(LoadOutcome {
            db: QuoteDatabase::new(),
            source: LoadSource::Fallback,
            notice: None,
        });
        let err = run(&mut session, "success").unwrap_err();
        assert_eq!(err, ResolveError::NotReady);
    }
}
