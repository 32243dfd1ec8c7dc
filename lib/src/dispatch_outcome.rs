use crate::recipient::Recipient;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    Success { recipient: Recipient, confirmation_id: String },
    Failure { recipient: Recipient, error_detail: String },
}

impl DispatchOutcome {
    pub fn recipient(&self) -> &Recipient {
        match self {
            DispatchOutcome::Success { recipient, .. } => recipient,
            DispatchOutcome::Failure { recipient, .. } => recipient,
        }
    }
}

/// Outcomes of one run, in the order the sends settled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchResult {
    pub successes: Vec<DispatchOutcome>,
    pub failures: Vec<DispatchOutcome>,
}

impl BatchResult {
    pub fn record(
        &mut self,
        outcome: DispatchOutcome,
    ) {
        match outcome {
            DispatchOutcome::Success { .. } => self.successes.push(outcome),
            DispatchOutcome::Failure { .. } => self.failures.push(outcome),
        }
    }

    pub fn total(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Human readable run summary: counts first, then one line per failure.
impl fmt::Display for BatchResult {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Sent: {}", self.successes.len())?;
        writeln!(f, "Failed: {}", self.failures.len())?;

        for failure in &self.failures {
            if let DispatchOutcome::Failure { recipient, error_detail } = failure {
                writeln!(f, "  {recipient}: {error_detail}")?;
            }
        }

        Ok(())
    }
}
