//! Verification email composition

use vg_core::domain::value_objects::Purpose;

use super::email_service::EmailMessage;

/// Build the email carrying `code` for `purpose`
///
/// `expires_in_minutes` is rounded by the caller; a zero value is shown as
/// "less than a minute".
pub fn compose_code_message(
    from: &str,
    to: &str,
    code: &str,
    purpose: Purpose,
    expires_in_minutes: u64,
) -> EmailMessage {
    let (subject, action) = match purpose {
        Purpose::Registration => (
            "Your Verigate registration code",
            "complete your registration",
        ),
        Purpose::PrivilegedBooking => (
            "Confirm your Verigate meeting booking",
            "confirm your privileged meeting booking",
        ),
    };

    let lifetime = match expires_in_minutes {
        0 => "less than a minute".to_string(),
        1 => "1 minute".to_string(),
        n => format!("{} minutes", n),
    };

    let body = format!(
        "Your verification code is: {code}\n\n\
         Use it to {action}. The code expires in {lifetime} and can be used once.\n\n\
         If you did not request this code, you can ignore this email."
    );

    EmailMessage {
        from: from.to_string(),
        to: to.to_string(),
        subject: subject.to_string(),
        body,
    }
}
