//! Registration form controller

use super::field::{FieldName, FormValues};
use super::schema::{self, FieldErrors};
use super::steps::{Step, StepGating, StepNavigator, STEPS};
use crate::submission::SubmissionReceipt;
use std::collections::BTreeSet;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Buttons shown under the fields of the visible step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Previous,
    Next,
    SignUp,
    SignIn,
}

impl FormAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Previous => "Previous",
            Self::Next => "Next",
            Self::SignUp => "Sign Up",
            Self::SignIn => "Sign In",
        }
    }
}

/// Result of a step change request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepChange {
    /// Now showing this step index
    Moved(usize),
    /// Refused because the visible step has this many errors
    Blocked(usize),
    /// Already at the boundary
    Unchanged,
}

/// Result of a submit request
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are now surfaced
    Invalid(usize),
    /// Valid, but not on the last step; moved to this step index
    Advanced(usize),
    /// Valid on the last step; these values go to the submitter and the
    /// form stays locked until [`FormState::finish_submission`]
    Dispatch(FormValues),
    /// A submission is already in flight
    Busy,
}

/// How the submitter answered
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Submitted(SubmissionReceipt),
    /// Values are kept for another attempt
    Failed(String),
}

/// Values, errors and step position of one registration form instance
#[derive(Debug, Clone)]
pub struct FormState {
    values: FormValues,
    errors: FieldErrors,
    touched: BTreeSet<FieldName>,
    navigator: StepNavigator,
    gating: StepGating,
    is_submitting: bool,
    submit_attempted: bool,
    /// Field index within the visible step; one past the last field is the buttons row
    pub active_field_index: usize,
    /// Index into `actions()` when the buttons row is active
    pub selected_button: usize,
}

impl FormState {
    pub fn new(gating: StepGating) -> Self {
        let values = FormValues::default();
        let errors = schema::validate(&values);
        Self {
            values,
            errors,
            touched: BTreeSet::new(),
            navigator: StepNavigator::default(),
            gating,
            is_submitting: false,
            submit_attempted: false,
            active_field_index: 0,
            selected_button: 0,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Errors from the latest full validation pass
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// No field fails validation, including fields on other steps
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn gating(&self) -> StepGating {
        self.gating
    }

    pub fn current_step(&self) -> usize {
        self.navigator.current()
    }

    pub fn step(&self) -> &'static Step {
        &STEPS[self.navigator.current()]
    }

    pub fn step_count(&self) -> usize {
        self.navigator.count()
    }

    pub fn is_last_step(&self) -> bool {
        self.navigator.is_last()
    }

    /// Message to show under a field: only once it was edited or after a submit attempt
    pub fn visible_error(&self, field: FieldName) -> Option<&str> {
        if !self.submit_attempted && !self.touched.contains(&field) {
            return None;
        }
        self.errors.get(&field).map(|e| e.message.as_str())
    }

    /// Update one field and re-run the schema
    pub fn set_field(&mut self, field: FieldName, value: &str) {
        if self.is_submitting {
            return;
        }
        field.binding().set(&mut self.values, value);
        self.touch(field);
    }

    /// The field under the cursor, if the cursor is not on the buttons row
    pub fn active_field_name(&self) -> Option<FieldName> {
        self.step().fields.get(self.active_field_index).copied()
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.step().fields.len()
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) {
        if self.is_submitting {
            return;
        }
        if let Some(field) = self.active_field_name() {
            if field.binding().push_char(&mut self.values, c) {
                self.touch(field);
            }
        }
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) {
        if self.is_submitting {
            return;
        }
        if let Some(field) = self.active_field_name() {
            if field.binding().pop_char(&mut self.values) {
                self.touch(field);
            }
        }
    }

    /// Append pasted text to the active field, dropping line breaks.
    /// Text past the field's length limit is cut off.
    pub fn paste(&mut self, text: &str) {
        let Some(field) = self.active_field_name() else {
            return;
        };
        let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
        if pasted.is_empty() {
            return;
        }
        let value = format!("{}{pasted}", self.values.get(field));
        self.set_field(field, &value);
    }

    /// Buttons available on the visible step
    pub fn actions(&self) -> Vec<FormAction> {
        let mut actions = Vec::with_capacity(3);
        if !self.navigator.is_first() {
            actions.push(FormAction::Previous);
        }
        if self.navigator.is_last() {
            actions.push(FormAction::SignUp);
            actions.push(FormAction::SignIn);
        } else {
            actions.push(FormAction::Next);
        }
        actions
    }

    pub fn selected_action(&self) -> Option<FormAction> {
        self.actions().get(self.selected_button).copied()
    }

    pub fn next_button(&mut self) {
        let count = self.actions().len();
        self.selected_button = (self.selected_button + 1) % count;
    }

    pub fn prev_button(&mut self) {
        let count = self.actions().len();
        if self.selected_button == 0 {
            self.selected_button = count - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Sign Up is enabled only for a valid form on the last step
    pub fn can_submit(&self) -> bool {
        self.navigator.is_last() && self.is_valid() && !self.is_submitting
    }

    /// Errors of the fields on the visible step
    pub fn step_errors(&self) -> usize {
        self.step()
            .fields
            .iter()
            .filter(|f| self.errors.contains_key(*f))
            .count()
    }

    /// Move to the next step, subject to the gating policy
    pub fn next_step(&mut self) -> StepChange {
        if self.navigator.is_last() {
            return StepChange::Unchanged;
        }
        if self.gating == StepGating::PerStep {
            let blocking = self.step_errors();
            if blocking > 0 {
                self.touched.extend(self.step().fields.iter().copied());
                self.focus_first_error();
                tracing::debug!(step = self.current_step(), blocking, "step change refused");
                return StepChange::Blocked(blocking);
            }
        }
        self.navigator.advance();
        self.on_step_changed();
        StepChange::Moved(self.navigator.current())
    }

    /// Move to the previous step; never gated
    pub fn prev_step(&mut self) -> StepChange {
        if !self.navigator.retreat() {
            return StepChange::Unchanged;
        }
        self.on_step_changed();
        StepChange::Moved(self.navigator.current())
    }

    /// Validate the whole form, then either advance or release the values
    /// for submission. Dispatching locks every input.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitting {
            return SubmitOutcome::Busy;
        }

        self.errors = schema::validate(&self.values);
        if !self.errors.is_empty() {
            self.submit_attempted = true;
            self.focus_first_error();
            tracing::debug!(errors = self.errors.len(), "submit blocked by validation");
            return SubmitOutcome::Invalid(self.errors.len());
        }

        if !self.navigator.is_last() {
            self.navigator.advance();
            self.on_step_changed();
            return SubmitOutcome::Advanced(self.navigator.current());
        }

        self.is_submitting = true;
        SubmitOutcome::Dispatch(self.values.clone())
    }

    /// Unlock the form once the submitter has answered
    pub fn finish_submission(
        &mut self,
        result: anyhow::Result<SubmissionReceipt>,
    ) -> SubmissionOutcome {
        self.is_submitting = false;
        match result {
            Ok(receipt) => {
                tracing::info!(id = %receipt.id, "registration submitted");
                SubmissionOutcome::Submitted(receipt)
            }
            Err(err) => {
                tracing::warn!("registration submission failed: {err:#}");
                SubmissionOutcome::Failed(format!("{err:#}"))
            }
        }
    }

    fn touch(&mut self, field: FieldName) {
        self.touched.insert(field);
        self.errors = schema::validate(&self.values);
        tracing::debug!(%field, errors = self.errors.len(), "validated");
    }

    fn on_step_changed(&mut self) {
        self.active_field_index = 0;
        self.selected_button = 0;
        tracing::debug!(step = self.current_step(), "step changed");
    }

    /// Put the cursor on the first failing field of the visible step
    fn focus_first_error(&mut self) {
        if let Some(index) = self
            .step()
            .fields
            .iter()
            .position(|f| self.errors.contains_key(f))
        {
            self.active_field_index = index;
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(StepGating::default())
    }
}

impl Form for FormState {
    fn field_count(&self) -> usize {
        // fields of the visible step plus the buttons row
        self.step().fields.len() + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use chrono::Utc;
    use uuid::Uuid;

    fn fill(form: &mut FormState) {
        form.set_field(FieldName::Name, "Ada Obi");
        form.set_field(FieldName::Email, "ada@example.com");
        form.set_field(FieldName::Password, "abc123");
        form.set_field(FieldName::ConfirmPassword, "abc123");
        form.set_field(FieldName::Location, "Lagos");
        form.set_field(FieldName::Address, "12 Marina Road");
        form.set_field(FieldName::PhoneNumber, "08012345678");
        form.set_field(FieldName::NinNumber, "12345678901");
    }

    fn receipt() -> SubmissionReceipt {
        SubmissionReceipt {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }

    mod validation_state {
        use super::*;

        #[test]
        fn test_new_form_is_invalid() {
            let form = FormState::default();
            assert!(!form.is_valid());
            assert_eq!(form.errors().len(), 8);
            assert_eq!(form.current_step(), 0);
            assert!(!form.is_submitting());
        }

        #[test]
        fn test_errors_hidden_until_touched() {
            let form = FormState::default();
            assert_eq!(form.visible_error(FieldName::Name), None);
        }

        #[test]
        fn test_set_field_revalidates() {
            let mut form = FormState::default();
            form.set_field(FieldName::Email, "not-an-email");
            assert_eq!(
                form.visible_error(FieldName::Email),
                Some("Invalid email format")
            );
            form.set_field(FieldName::Email, "ada@example.com");
            assert_eq!(form.visible_error(FieldName::Email), None);
            assert!(!form.errors().contains_key(&FieldName::Email));
        }

        #[test]
        fn test_filled_form_is_valid() {
            let mut form = FormState::default();
            fill(&mut form);
            assert!(form.is_valid());
            assert!(form.errors().is_empty());
        }

        #[test]
        fn test_clearing_required_field_invalidates() {
            let mut form = FormState::default();
            fill(&mut form);
            form.set_field(FieldName::Address, "");
            assert!(!form.is_valid());
            assert_eq!(
                form.visible_error(FieldName::Address),
                Some("Address is required")
            );
        }

        #[test]
        fn test_password_change_revalidates_confirmation() {
            let mut form = FormState::default();
            fill(&mut form);
            form.set_field(FieldName::Password, "abc124");
            assert_eq!(
                form.errors()[&FieldName::ConfirmPassword].message,
                "Passwords must match"
            );
        }

        #[test]
        fn test_errors_span_all_steps() {
            let mut form = FormState::default();
            form.set_field(FieldName::Name, "Ada");
            // later steps still count against validity
            assert!(form.errors().contains_key(&FieldName::NinNumber));
        }
    }

    mod input {
        use super::*;

        #[test]
        fn test_input_char_targets_active_field() {
            let mut form = FormState::default();
            form.input_char('A');
            form.next_field();
            form.input_char('a');
            assert_eq!(form.values().name, "A");
            assert_eq!(form.values().email, "a");
        }

        #[test]
        fn test_backspace() {
            let mut form = FormState::default();
            form.paste("Ada");
            form.backspace();
            assert_eq!(form.values().name, "Ad");
        }

        #[test]
        fn test_paste_drops_control_characters() {
            let mut form = FormState::default();
            form.paste("Ada\nObi\t");
            assert_eq!(form.values().name, "AdaObi");
        }

        #[test]
        fn test_paste_appends_and_respects_length_limit() {
            let mut form = FormState::new(StepGating::Permissive);
            form.next_step();
            form.next_step();
            form.input_char('0');
            form.paste("8012345678999");
            assert_eq!(form.values().phone_number, "08012345678");
            assert_eq!(form.visible_error(FieldName::PhoneNumber), None);
        }

        #[test]
        fn test_input_on_buttons_row_is_ignored() {
            let mut form = FormState::default();
            form.set_active_field(4);
            assert!(form.is_buttons_row_active());
            form.input_char('x');
            assert_eq!(form.values(), &FormValues::default());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = FormState::default();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 4);
        }

        #[test]
        fn test_field_cycle_wraps() {
            let mut form = FormState::default();
            form.prev_field();
            assert!(form.is_buttons_row_active());
            form.next_field();
            assert_eq!(form.active_field_name(), Some(FieldName::Name));
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_per_step_gating_blocks_invalid_step() {
            let mut form = FormState::new(StepGating::PerStep);
            assert_eq!(form.next_step(), StepChange::Blocked(4));
            assert_eq!(form.current_step(), 0);
            assert_eq!(form.visible_error(FieldName::Name), Some("Name is required"));
        }

        #[test]
        fn test_per_step_gating_ignores_other_steps() {
            let mut form = FormState::new(StepGating::PerStep);
            form.set_field(FieldName::Name, "Ada");
            form.set_field(FieldName::Email, "ada@example.com");
            form.set_field(FieldName::Password, "pw");
            form.set_field(FieldName::ConfirmPassword, "pw");
            assert_eq!(form.next_step(), StepChange::Moved(1));
        }

        #[test]
        fn test_permissive_gating_allows_empty_steps() {
            let mut form = FormState::new(StepGating::Permissive);
            assert_eq!(form.next_step(), StepChange::Moved(1));
            assert_eq!(form.next_step(), StepChange::Moved(2));
            assert_eq!(form.next_step(), StepChange::Unchanged);
        }

        #[test]
        fn test_prev_step_at_first_is_unchanged() {
            let mut form = FormState::default();
            assert_eq!(form.prev_step(), StepChange::Unchanged);
        }

        #[test]
        fn test_step_change_resets_cursor() {
            let mut form = FormState::new(StepGating::Permissive);
            form.set_active_field(2);
            form.next_step();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.active_field_name(), Some(FieldName::Location));
        }

        #[test]
        fn test_actions_per_step() {
            let mut form = FormState::new(StepGating::Permissive);
            assert_eq!(form.actions(), vec![FormAction::Next]);
            form.next_step();
            assert_eq!(
                form.actions(),
                vec![FormAction::Previous, FormAction::Next]
            );
            form.next_step();
            assert_eq!(
                form.actions(),
                vec![FormAction::Previous, FormAction::SignUp, FormAction::SignIn]
            );
        }

        #[test]
        fn test_button_cycle_wraps() {
            let mut form = FormState::new(StepGating::Permissive);
            form.next_step();
            form.prev_button();
            assert_eq!(form.selected_action(), Some(FormAction::Next));
            form.next_button();
            assert_eq!(form.selected_action(), Some(FormAction::Previous));
        }
    }

    mod submit {
        use super::*;

        fn on_last_step(form: &mut FormState) {
            form.next_step();
            form.next_step();
            assert!(form.is_last_step());
        }

        #[test]
        fn test_invalid_submit_surfaces_errors() {
            let mut form = FormState::default();
            let outcome = form.submit();

            assert_eq!(outcome, SubmitOutcome::Invalid(8));
            assert_eq!(form.visible_error(FieldName::Name), Some("Name is required"));
            assert_eq!(
                form.visible_error(FieldName::NinNumber),
                Some("NIN Number is required")
            );
            assert!(!form.is_submitting());
        }

        #[test]
        fn test_valid_submit_before_last_step_advances() {
            let mut form = FormState::default();
            fill(&mut form);
            assert_eq!(form.submit(), SubmitOutcome::Advanced(1));
            assert_eq!(form.submit(), SubmitOutcome::Advanced(2));
            assert!(!form.is_submitting());
        }

        #[test]
        fn test_valid_submit_on_last_step_dispatches_and_locks() {
            let mut form = FormState::default();
            fill(&mut form);
            on_last_step(&mut form);

            let SubmitOutcome::Dispatch(values) = form.submit() else {
                panic!("expected dispatch");
            };
            assert_eq!(values.nin_number, "12345678901");
            assert_eq!(values.name, "Ada Obi");
            assert!(form.is_submitting());
            assert!(!form.can_submit());
        }

        #[test]
        fn test_inputs_ignored_while_submitting() {
            let mut form = FormState::default();
            fill(&mut form);
            on_last_step(&mut form);
            form.submit();

            form.input_char('9');
            form.backspace();
            form.paste("0");
            form.set_field(FieldName::PhoneNumber, "");
            assert_eq!(form.values().phone_number, "08012345678");
            assert_eq!(form.submit(), SubmitOutcome::Busy);
        }

        #[test]
        fn test_finish_submission_success_unlocks() {
            let mut form = FormState::default();
            fill(&mut form);
            on_last_step(&mut form);
            form.submit();

            let expected = receipt();
            let outcome = form.finish_submission(Ok(expected.clone()));
            assert_eq!(outcome, SubmissionOutcome::Submitted(expected));
            assert!(!form.is_submitting());
        }

        #[test]
        fn test_finish_submission_failure_keeps_values() {
            let mut form = FormState::default();
            fill(&mut form);
            on_last_step(&mut form);
            form.submit();

            let outcome = form.finish_submission(Err(anyhow!("sink unavailable")));
            assert_eq!(
                outcome,
                SubmissionOutcome::Failed("sink unavailable".to_string())
            );
            assert!(!form.is_submitting());
            assert_eq!(form.values().name, "Ada Obi");
            assert!(form.can_submit());
        }

        #[test]
        fn test_can_submit_requires_last_step_and_validity() {
            let mut form = FormState::new(StepGating::Permissive);
            fill(&mut form);
            assert!(!form.can_submit());
            form.next_step();
            form.next_step();
            assert!(form.can_submit());
            form.set_field(FieldName::NinNumber, "123");
            assert!(!form.can_submit());
        }
    }
}
