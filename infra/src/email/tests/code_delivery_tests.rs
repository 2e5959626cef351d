//! Unit tests for the email code delivery adapter

use std::sync::Arc;
use std::time::Duration;

use vg_core::domain::value_objects::Purpose;
use vg_core::services::verification::CodeDeliveryTrait;

use super::mocks::RecordingEmailService;
use crate::email::{EmailCodeDelivery, EmailService, MockEmailService};

#[tokio::test]
async fn test_deliver_sends_code_by_email() {
    let email = Arc::new(RecordingEmailService::new(false));
    let delivery = EmailCodeDelivery::new(email.clone(), "no-reply@x.com", Duration::from_secs(300));

    delivery
        .deliver("a@x.com", "048213", Purpose::Registration)
        .await
        .unwrap();

    let sent = email.last_message_to("a@x.com").unwrap();
    assert_eq!(sent.from, "no-reply@x.com");
    assert!(sent.body.contains("048213"));
    assert!(sent.body.contains("5 minutes"));
}

#[tokio::test]
async fn test_deliver_reports_transport_failure() {
    let email = Arc::new(MockEmailService::with_options(false, true));
    let delivery = EmailCodeDelivery::new(email, "no-reply@x.com", Duration::from_secs(300));

    let result = delivery
        .deliver("a@x.com", "048213", Purpose::PrivilegedBooking)
        .await;
    let reason = result.unwrap_err();
    assert!(reason.contains("Simulated email sending failure"));
}

#[tokio::test]
async fn test_deliver_through_trait_object() {
    let email: Arc<dyn EmailService> = Arc::new(MockEmailService::with_options(false, false));

    let delivery: EmailCodeDelivery = EmailCodeDelivery::new(email, "no-reply@x.com", Duration::from_secs(60));
    assert!(delivery
        .deliver("a@x.com", "123456", Purpose::Registration)
        .await
        .is_ok());
}
