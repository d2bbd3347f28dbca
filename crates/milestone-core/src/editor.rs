//! Editor Flow
//!
//! State of the create/edit modal owned by the page controller:
//! Idle -> Editing -> Submitting -> Idle, with validation and save failures
//! returning to Editing with the same selection.

use crate::domain::{Milestone, MilestoneRecord, NewMilestone};
use crate::form::{FieldErrors, FormField, MilestoneForm};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditorState {
    #[default]
    Idle,
    Editing {
        /// None when creating
        selected: Option<Milestone>,
        errors: FieldErrors,
    },
    Submitting {
        selected: Option<Milestone>,
    },
}

/// Outcome of pressing Save
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Valid form; send this record
    Ready(MilestoneRecord),
    /// Invalid form; nothing is sent
    Rejected(FieldErrors),
    /// Save pressed while not editing
    Ignored,
}

impl EditorState {
    pub fn open_create(&mut self) {
        self.open(None);
    }

    pub fn open_edit(&mut self, milestone: Milestone) {
        self.open(Some(milestone));
    }

    fn open(&mut self, selected: Option<Milestone>) {
        if !matches!(self, EditorState::Idle) {
            log::debug!("editor already open, ignoring open");
            return;
        }
        *self = EditorState::Editing {
            selected,
            errors: FieldErrors::default(),
        };
    }

    /// Validate the form and, when valid, move to Submitting.
    ///
    /// Edits keep the selection's stored status; new records start Pending.
    pub fn submit(&mut self, form: &MilestoneForm) -> Submission {
        let EditorState::Editing { selected, errors } = self else {
            log::debug!("submit outside of editing, ignoring");
            return Submission::Ignored;
        };

        if let Err(found) = form.check() {
            *errors = found.clone();
            return Submission::Rejected(found);
        }

        let selected = selected.take();
        let record = match &selected {
            Some(existing) => MilestoneRecord::Existing(Milestone::new(
                existing.id.clone(),
                form.title.clone(),
                form.due_date.clone(),
                existing.status,
            )),
            None => MilestoneRecord::New(NewMilestone::new(form.title.clone(), form.due_date.clone())),
        };
        *self = EditorState::Submitting { selected };
        Submission::Ready(record)
    }

    pub fn save_succeeded(&mut self) {
        if matches!(self, EditorState::Submitting { .. }) {
            *self = EditorState::Idle;
        }
    }

    /// Back to editing; the modal stays open with its selection
    pub fn save_failed(&mut self) {
        if let EditorState::Submitting { selected } = self {
            *self = EditorState::Editing {
                selected: selected.take(),
                errors: FieldErrors::default(),
            };
        }
    }

    pub fn cancel(&mut self) {
        if matches!(self, EditorState::Editing { .. }) {
            *self = EditorState::Idle;
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, EditorState::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, EditorState::Submitting { .. })
    }

    pub fn selected(&self) -> Option<&Milestone> {
        match self {
            EditorState::Idle => None,
            EditorState::Editing { selected, .. } | EditorState::Submitting { selected } => selected.as_ref(),
        }
    }

    pub fn field_error(&self, field: FormField) -> Option<String> {
        match self {
            EditorState::Editing { errors, .. } => errors.get(field).map(str::to_owned),
            _ => None,
        }
    }

    /// Modal heading
    pub fn heading(&self) -> &'static str {
        if self.selected().is_some() {
            "Edit Milestone"
        } else {
            "Create Milestone"
        }
    }

    /// Initial field values for the modal
    pub fn initial_form(&self) -> MilestoneForm {
        self.selected()
            .map(|m| MilestoneForm::new(m.title.clone(), m.due_date.clone()))
            .unwrap_or_default()
    }
}
