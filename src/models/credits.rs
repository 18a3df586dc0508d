use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceLevel {
    Healthy,
    Low,
    Critical,
}

impl BalanceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            BalanceLevel::Healthy => "Healthy",
            BalanceLevel::Low => "Low balance",
            BalanceLevel::Critical => "Critical balance",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BalanceLevel::Healthy => "credit-healthy",
            BalanceLevel::Low => "credit-low",
            BalanceLevel::Critical => "credit-critical",
        }
    }
}

/// A user's credit balance with the number of exams it still covers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CreditBalance {
    pub credits: u32,
}

impl CreditBalance {
    pub fn new(credits: u32) -> Self {
        Self { credits }
    }

    /// Exams that can still be graded at the average cost per exam.
    pub fn remaining_exams(&self) -> u32 {
        (f64::from(self.credits) / Config::AVERAGE_CREDITS_PER_EXAM).floor() as u32
    }

    pub fn level(&self) -> BalanceLevel {
        match self.remaining_exams() {
            0..=3 => BalanceLevel::Critical,
            4..=10 => BalanceLevel::Low,
            _ => BalanceLevel::Healthy,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreditCheck {
    pub has_credits: bool,
    /// Credits missing to cover the request.
    pub needed: u32,
}

pub fn check_credits(available: u32, required: u32) -> CreditCheck {
    CreditCheck {
        has_credits: available >= required,
        needed: required.saturating_sub(available),
    }
}
