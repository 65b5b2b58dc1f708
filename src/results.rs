use std::fmt;
use std::time::Duration;

/// One of the three stages every page goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Fetch,
    Clean,
    Persist,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Fetch => "fetch",
            Stage::Clean => "clean",
            Stage::Persist => "persist",
        };
        f.write_str(name)
    }
}

/// Why and where a job stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageFailure {
    pub stage: Stage,
    pub message: String,
}

impl fmt::Display for StageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.stage, self.message)
    }
}

/// Progress of a job through its stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobState {
    Pending,
    Fetched,
    Cleaned,
    Persisted,
    Failed(StageFailure),
}

/// Elapsed time per stage; a stage has a duration only if it completed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageTimings {
    pub fetch: Option<Duration>,
    pub clean: Option<Duration>,
    pub save: Option<Duration>,
}

impl StageTimings {
    pub fn get(&self, stage: Stage) -> Option<Duration> {
        match stage {
            Stage::Fetch => self.fetch,
            Stage::Clean => self.clean,
            Stage::Persist => self.save,
        }
    }
}

/// Outcome of processing one URL
#[derive(Debug, Clone)]
pub struct PageResult {
    /// URL of the page
    pub url: String,

    /// Raw body as fetched
    pub html: Option<String>,

    /// Cleaned text
    pub text: Option<String>,

    /// Whether the fetched page looks recent
    pub fresh: Option<bool>,

    pub timings: StageTimings,

    state: JobState,
}

impl PageResult {
    /// A job that has not started yet
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: None,
            text: None,
            fresh: None,
            timings: StageTimings::default(),
            state: JobState::Pending,
        }
    }

    pub fn state(&self) -> &JobState {
        &self.state
    }

    pub fn is_success(&self) -> bool {
        self.state == JobState::Persisted
    }

    pub fn failure(&self) -> Option<&StageFailure> {
        match &self.state {
            JobState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Size of the raw body in bytes
    pub fn html_len(&self) -> usize {
        self.html.as_ref().map_or(0, String::len)
    }

    /// Size of the cleaned text in bytes
    pub fn text_len(&self) -> usize {
        self.text.as_ref().map_or(0, String::len)
    }

    pub(crate) fn fetched(&mut self, html: String, fresh: bool, elapsed: Duration) {
        debug_assert_eq!(self.state, JobState::Pending);
        self.html = Some(html);
        self.fresh = Some(fresh);
        self.timings.fetch = Some(elapsed);
        self.state = JobState::Fetched;
    }

    pub(crate) fn cleaned(&mut self, text: String, elapsed: Duration) -> &str {
        debug_assert_eq!(self.state, JobState::Fetched);
        self.timings.clean = Some(elapsed);
        self.state = JobState::Cleaned;
        self.text.insert(text).as_str()
    }

    pub(crate) fn persisted(&mut self, elapsed: Duration) {
        debug_assert_eq!(self.state, JobState::Cleaned);
        self.timings.save = Some(elapsed);
        self.state = JobState::Persisted;
    }

    /// Stops the job at `stage`; later stages never run
    pub(crate) fn failed(&mut self, stage: Stage, error: impl fmt::Display) {
        self.state = JobState::Failed(StageFailure {
            stage,
            message: error.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_path() {
        let mut result = PageResult::new("https://a.example/x");
        assert_eq!(result.state(), &JobState::Pending);

        result.fetched("<p>hi</p>".to_string(), false, Duration::from_millis(3));
        result.cleaned("hi".to_string(), Duration::from_millis(1));
        result.persisted(Duration::from_millis(2));

        assert!(result.is_success());
        assert!(result.failure().is_none());
        assert_eq!(result.html_len(), 9);
        assert_eq!(result.text_len(), 2);
        assert_eq!(result.timings.get(Stage::Persist), Some(Duration::from_millis(2)));
    }

    #[test]
    fn test_fetch_failure_has_no_timings() {
        let mut result = PageResult::new("https://a.example/x");
        result.failed(Stage::Fetch, "connection refused");

        assert!(!result.is_success());
        assert_eq!(result.timings, StageTimings::default());
        assert!(result.html.is_none());
        assert!(result.text.is_none());
        assert_eq!(
            result.failure().map(|f| f.to_string()),
            Some("fetch failed: connection refused".to_string())
        );
    }

    #[test]
    fn test_persist_failure_keeps_earlier_stages() {
        let mut result = PageResult::new("https://a.example/x");
        result.fetched("<p>hi</p>".to_string(), true, Duration::from_millis(3));
        result.cleaned("hi".to_string(), Duration::from_millis(1));
        result.failed(Stage::Persist, "disk full");

        assert_eq!(result.text.as_deref(), Some("hi"));
        assert!(result.html.is_some());
        assert!(result.timings.fetch.is_some());
        assert!(result.timings.clean.is_some());
        assert!(result.timings.save.is_none());
        assert_eq!(result.failure().unwrap().stage, Stage::Persist);
    }
}
