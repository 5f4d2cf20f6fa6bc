//! Domain layer containing the transient request and result records.

pub mod verification;

pub use verification::{
    DispatchOutcome, EmailDispatchData, EmailDispatchPayload, VerificationCode,
    VerificationRequest, SUCCESS_MESSAGE, VERIFICATION_EMAIL_FUNCTION, VERIFICATION_EMAIL_TYPE,
};
