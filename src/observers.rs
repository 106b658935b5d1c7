use std::{cell::RefCell, rc::Rc};

use crate::events::LoanEvent;

/// Trait for loan outcome observation
pub trait LoanObserver {
    /// Called once for every lend or return attempt, after the catalog settled it
    fn on_loan_event(&self, event: &LoanEvent);
}

/// Logs every loan outcome through `tracing`
#[derive(Debug)]
pub struct LoanLogger;

impl LoanObserver for LoanLogger {
    fn on_loan_event(&self, event: &LoanEvent) {
        match event {
            LoanEvent::Lent { reader_id, isbn } => {
                tracing::info!(reader_id, isbn = %isbn, "book lent");
            }
            LoanEvent::Returned { reader_id, isbn } => {
                tracing::info!(reader_id, isbn = %isbn, "book returned");
            }
            LoanEvent::LendRejected { reader_id, isbn, reason } => {
                tracing::info!(reader_id, isbn = %isbn, %reason, "lend rejected");
            }
            LoanEvent::ReturnRejected { reader_id, isbn, reason } => {
                tracing::info!(reader_id, isbn = %isbn, %reason, "return rejected");
            }
        }
    }
}

/// Keeps every event it sees, shared with whoever holds a clone
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    /// Events in the order they were observed
    events: Rc<RefCell<Vec<LoanEvent>>>,
}

impl EventRecorder {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events observed so far
    #[must_use]
    pub fn events(&self) -> Vec<LoanEvent> {
        self.events.borrow().clone()
    }

    /// Number of events observed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Whether nothing has been observed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl LoanObserver for EventRecorder {
    fn on_loan_event(&self, event: &LoanEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
