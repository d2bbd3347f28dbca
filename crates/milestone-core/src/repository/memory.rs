//! In-memory milestone store
//!
//! Behaves like the HTTP service: assigns ids on create, rejects updates of
//! unknown ids, and can be told to fail every request.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::traits::MilestoneRepository;
use crate::domain::{Milestone, MilestoneError, MilestoneRecord, MilestoneResult, SaveOp};

#[derive(Debug, Default)]
pub struct InMemoryMilestoneRepository {
    items: RefCell<Vec<Milestone>>,
    next_id: Cell<u64>,
    failing: Cell<bool>,
    requests: Cell<usize>,
}

impl InMemoryMilestoneRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing records; new ids continue after the largest numeric id
    pub fn with_items(items: Vec<Milestone>) -> Self {
        let max_id = items
            .iter()
            .filter_map(|m| m.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            items: RefCell::new(items),
            next_id: Cell::new(max_id),
            ..Self::default()
        }
    }

    /// Make every following request fail like a 500 response
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.requests.get()
    }

    pub fn snapshot(&self) -> Vec<Milestone> {
        self.items.borrow().clone()
    }

    fn begin_request(&self) -> bool {
        self.requests.set(self.requests.get() + 1);
        !self.failing.get()
    }
}

#[async_trait(?Send)]
impl MilestoneRepository for InMemoryMilestoneRepository {
    async fn list(&self) -> MilestoneResult<Vec<Milestone>> {
        if !self.begin_request() {
            return Err(MilestoneError::fetch("500 Internal Server Error"));
        }
        Ok(self.snapshot())
    }

    async fn upsert(&self, record: &MilestoneRecord) -> MilestoneResult<Milestone> {
        let op = record.op();
        if !self.begin_request() {
            return Err(MilestoneError::save(op, "500 Internal Server Error"));
        }

        match record {
            MilestoneRecord::New(new) => {
                let id = self.next_id.get() + 1;
                self.next_id.set(id);
                let created = Milestone::new(id.to_string(), new.title.clone(), new.due_date.clone(), new.status);
                self.items.borrow_mut().push(created.clone());
                Ok(created)
            }
            MilestoneRecord::Existing(milestone) => {
                let mut items = self.items.borrow_mut();
                let slot = items
                    .iter_mut()
                    .find(|m| m.id == milestone.id)
                    .ok_or_else(|| MilestoneError::save(SaveOp::Update, "404 Not Found"))?;
                *slot = milestone.clone();
                Ok(milestone.clone())
            }
        }
    }
}
