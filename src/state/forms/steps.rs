//! Registration steps and the step navigator

use super::field::FieldName;
use serde::{Deserialize, Serialize};

/// One stage of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub label: &'static str,
    pub fields: &'static [FieldName],
}

/// Ordered partition of the registration fields into stages
pub const STEPS: [Step; 3] = [
    Step {
        label: "Personal Information",
        fields: &[
            FieldName::Name,
            FieldName::Email,
            FieldName::Password,
            FieldName::ConfirmPassword,
        ],
    },
    Step {
        label: "Address Information",
        fields: &[FieldName::Location, FieldName::Address],
    },
    Step {
        label: "Account Information",
        fields: &[FieldName::PhoneNumber, FieldName::NinNumber],
    },
];

/// Whether moving to the next step requires the visible step to be valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepGating {
    /// Next is refused while the visible step has errors
    #[default]
    PerStep,
    /// Next is always allowed; only final submission is gated
    Permissive,
}

/// Step index state machine over `0..count`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepNavigator {
    current: usize,
    count: usize,
}

impl StepNavigator {
    pub fn new(count: usize) -> Self {
        Self {
            current: 0,
            count: count.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    /// Final submission is enabled here instead of advancing
    pub fn is_last(&self) -> bool {
        self.current == self.count - 1
    }

    /// Move forward one step. Returns false at the last step.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Move back one step. Returns false at the first step.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }
}

impl Default for StepNavigator {
    fn default() -> Self {
        Self::new(STEPS.len())
    }
}
