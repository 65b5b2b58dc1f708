use crate::results::{PageResult, Stage};
use std::fmt;
use std::time::Duration;

const STAGES: [Stage; 3] = [Stage::Fetch, Stage::Clean, Stage::Persist];

/// Summary of a finished run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub query: String,
    pub requested_results: usize,
    pub search_time: Duration,
    pub total_time: Duration,
    /// Results in completion order
    pub results: Vec<PageResult>,
}

impl RunReport {
    pub fn job_count(&self) -> usize {
        self.results.len()
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.job_count() - self.succeeded()
    }

    /// Sum of `stage` durations over every job that completed that stage
    pub fn total(&self, stage: Stage) -> Duration {
        self.results
            .iter()
            .filter_map(|r| r.timings.get(stage))
            .sum()
    }

    /// Stage total divided by the number of jobs, including jobs that never
    /// reached the stage. Zero for a run without jobs.
    pub fn average(&self, stage: Stage) -> Duration {
        let jobs = self.job_count() as u128;
        if jobs == 0 {
            return Duration::ZERO;
        }
        let nanos = self.total(stage).as_nanos() / jobs;
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search time: {:?}", self.search_time)?;
        writeln!(f, "Query: {}", self.query)?;
        writeln!(f, "Results requested: {}", self.requested_results)?;

        for (i, result) in self.results.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "URL {}: {}", i + 1, result.url)?;
            if let Some(failure) = result.failure() {
                writeln!(f, "Error: {}", failure)?;
                continue;
            }
            for stage in STAGES {
                if let Some(elapsed) = result.timings.get(stage) {
                    writeln!(f, "{} time: {:?}", stage_label(stage), elapsed)?;
                }
            }
            writeln!(f, "HTML length: {} bytes", result.html_len())?;
            writeln!(f, "Cleaned text length: {} bytes", result.text_len())?;
            if let Some(fresh) = result.fresh {
                writeln!(f, "Fresh: {}", if fresh { "yes" } else { "no" })?;
            }
        }

        writeln!(f)?;
        writeln!(f, "=== Run statistics ===")?;
        writeln!(f, "Total run time: {:?}", self.total_time)?;
        writeln!(
            f,
            "Jobs: {} ({} succeeded, {} failed)",
            self.job_count(),
            self.succeeded(),
            self.failed()
        )?;
        writeln!(f, "Average time per URL:")?;
        for stage in STAGES {
            writeln!(f, "  - {}: {:?}", stage_label(stage), self.average(stage))?;
        }
        writeln!(f, "Total time per operation:")?;
        writeln!(f, "  - Search: {:?}", self.search_time)?;
        for stage in STAGES {
            writeln!(f, "  - {}: {:?}", stage_label(stage), self.total(stage))?;
        }
        Ok(())
    }
}

fn stage_label(stage: Stage) -> &'static str {
    match stage {
        Stage::Fetch => "Fetch",
        Stage::Clean => "Clean",
        Stage::Persist => "Save",
    }
}
