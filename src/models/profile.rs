use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

/// Rule set applied to incoming submissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionProfile {
    /// School required, plan priced, case-sensitive payment methods.
    #[default]
    Requests,
    /// School optional, no plan, case-insensitive payment methods.
    Homework,
}

impl SubmissionProfile {
    pub fn username(&self) -> &'static str {
        match self {
            SubmissionProfile::Requests => "Requests",
            SubmissionProfile::Homework => "Homework Completer",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SubmissionProfile::Requests => "New Request",
            SubmissionProfile::Homework => "New Homework Request",
        }
    }

    /// Whether the message should ping the whole channel.
    pub fn mentions_everyone(&self) -> bool {
        matches!(self, SubmissionProfile::Requests)
    }
}

impl Display for SubmissionProfile {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SubmissionProfile::Requests => write!(f, "requests"),
            SubmissionProfile::Homework => write!(f, "homework"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
    PayPal,
    Crypto,
    Cash,
}

impl PaymentMethod {
    pub fn parse(raw: &str, profile: SubmissionProfile) -> Option<Self> {
        match profile {
            SubmissionProfile::Requests => match raw {
                "Card" => Some(PaymentMethod::Card),
                "PayPal" => Some(PaymentMethod::PayPal),
                "Crypto" => Some(PaymentMethod::Crypto),
                "Cash" => Some(PaymentMethod::Cash),
                _ => None,
            },
            SubmissionProfile::Homework => match raw.to_lowercase().as_str() {
                "card" => Some(PaymentMethod::Card),
                "paypal" => Some(PaymentMethod::PayPal),
                "crypto" => Some(PaymentMethod::Crypto),
                _ => None,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::Crypto => "Crypto",
            PaymentMethod::Cash => "Cash",
        }
    }

    /// Text shown in the "Payment Method" embed field.
    pub fn label(&self, profile: SubmissionProfile) -> String {
        match (profile, self) {
            (SubmissionProfile::Requests, PaymentMethod::Cash) => {
                "Cash (IRL only — message me on Snap)".to_string()
            }
            (SubmissionProfile::Requests, method) => method.as_str().to_string(),
            (SubmissionProfile::Homework, method) => method.as_str().to_uppercase(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentPlan {
    Lifetime,
    OneTime,
}

impl PaymentPlan {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Lifetime" => Some(PaymentPlan::Lifetime),
            "One-time" => Some(PaymentPlan::OneTime),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentPlan::Lifetime => "Lifetime",
            PaymentPlan::OneTime => "One-time",
        }
    }

    pub fn price(&self) -> &'static str {
        match self {
            PaymentPlan::Lifetime => "$5",
            PaymentPlan::OneTime => "$1",
        }
    }

    /// e.g. `Lifetime ($5)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.as_str(), self.price())
    }
}
