//! Wizard steps — the fixed six-section sequence of the intake flow.

use serde::{Deserialize, Serialize};

/// The sections of the intake wizard, in walk order.
///
/// The order is fixed: Identity → Tax → Entities → Income → Wealth →
/// Review. Review is terminal; submission is a separate explicit action,
/// never a side effect of advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Identity,
    Tax,
    Entities,
    Income,
    Wealth,
    Review,
}

impl WizardStep {
    /// All steps in walk order.
    pub const ALL: [WizardStep; 6] = [
        Self::Identity,
        Self::Tax,
        Self::Entities,
        Self::Income,
        Self::Wealth,
        Self::Review,
    ];

    /// Number of steps in the wizard.
    pub const COUNT: usize = Self::ALL.len();

    /// Zero-based position of this step.
    pub fn index(self) -> usize {
        match self {
            Self::Identity => 0,
            Self::Tax => 1,
            Self::Entities => 2,
            Self::Income => 3,
            Self::Wealth => 4,
            Self::Review => 5,
        }
    }

    /// The following step, if any.
    pub fn next(self) -> Option<WizardStep> {
        match self {
            Self::Identity => Some(Self::Tax),
            Self::Tax => Some(Self::Entities),
            Self::Entities => Some(Self::Income),
            Self::Income => Some(Self::Wealth),
            Self::Wealth => Some(Self::Review),
            Self::Review => None,
        }
    }

    /// The preceding step, if any.
    pub fn prev(self) -> Option<WizardStep> {
        match self {
            Self::Identity => None,
            Self::Tax => Some(Self::Identity),
            Self::Entities => Some(Self::Tax),
            Self::Income => Some(Self::Entities),
            Self::Wealth => Some(Self::Income),
            Self::Review => Some(Self::Wealth),
        }
    }

    /// Whether this is the terminal review step.
    pub fn is_review(self) -> bool {
        matches!(self, Self::Review)
    }

    /// Short heading shown for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::Identity => "Identity",
            Self::Tax => "Tax Profile",
            Self::Entities => "Entities",
            Self::Income => "Financials",
            Self::Wealth => "Strategy",
            Self::Review => "Review",
        }
    }

    /// One-line description of what the step collects.
    pub fn description(self) -> &'static str {
        match self {
            Self::Identity => "Personal and family details",
            Self::Tax => "Australian tax identity",
            Self::Entities => "Business & investment structures",
            Self::Income => "Income and investments",
            Self::Wealth => "Wealth and planning goals",
            Self::Review => "Confirmation and AI insights",
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::Identity
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Identity => "identity",
            Self::Tax => "tax",
            Self::Entities => "entities",
            Self::Income => "income",
            Self::Wealth => "wealth",
            Self::Review => "review",
        };
        write!(f, "{s}")
    }
}
