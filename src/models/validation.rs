use crate::{
    error::SubmissionError,
    models::{
        profile::{PaymentMethod, PaymentPlan, SubmissionProfile},
        submission::SubmissionRequest,
    },
};

/// A submission that passed every check of its profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    pub profile: SubmissionProfile,
    pub school: String,
    pub platform: String,
    pub user: String,
    pub password: String,
    pub payment_method: PaymentMethod,
    pub payment_plan: Option<PaymentPlan>,
    pub payment_note: String,
    pub login_type: String,
    pub run_time: String,
}

pub fn validate_submission(
    request: &SubmissionRequest,
    profile: SubmissionProfile,
) -> Result<ValidatedSubmission, SubmissionError> {
    let missing = required_fields(request, profile)
        .iter()
        .any(|value| value.is_empty());

    if missing {
        return Err(SubmissionError::MissingFields);
    }

    let payment_method = PaymentMethod::parse(&request.payment_method, profile)
        .ok_or(SubmissionError::InvalidPayment)?;

    let payment_plan = match profile {
        SubmissionProfile::Requests => Some(
            PaymentPlan::parse(&request.payment_plan).ok_or(SubmissionError::InvalidPayment)?,
        ),
        SubmissionProfile::Homework => None,
    };

    Ok(ValidatedSubmission {
        profile,
        school: request.school.clone(),
        platform: request.platform.clone(),
        user: request.user.clone(),
        password: request.password.clone(),
        payment_method,
        payment_plan,
        payment_note: request.payment_note.clone(),
        login_type: request.login_type.clone(),
        run_time: request.run_time.clone(),
    })
}

fn required_fields(request: &SubmissionRequest, profile: SubmissionProfile) -> Vec<&str> {
    match profile {
        SubmissionProfile::Requests => vec![
            request.school.as_str(),
            request.platform.as_str(),
            request.user.as_str(),
            request.password.as_str(),
            request.payment_method.as_str(),
            request.payment_plan.as_str(),
        ],
        SubmissionProfile::Homework => vec![
            request.password.as_str(),
            request.platform.as_str(),
            request.user.as_str(),
        ],
    }
}
