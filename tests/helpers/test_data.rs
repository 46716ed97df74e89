// Test Data Factory
//
// JSON payloads in the shape the front-end sends.

use serde_json::{json, Value};
use uuid::Uuid;

pub struct TestDataFactory;

impl TestDataFactory {
    /// Unique suffix to keep names distinct across tests
    pub fn unique(prefix: &str) -> String {
        format!("{}-{}", prefix, &Uuid::new_v4().to_string()[..8])
    }

    pub fn student_payload() -> Value {
        json!({
            "name": Self::unique("Student"),
            "email": "student@example.com",
            "phone": "+62-811-0000-0000"
        })
    }

    pub fn course_payload() -> Value {
        json!({
            "title": Self::unique("Course"),
            "description": "Introductory programming",
            "duration": "6 months",
            "fee": 1500
        })
    }

    /// Payment with every fee component present
    pub fn payment_payload(
        final_payment: f64,
        student_registration: f64,
        course_registration: f64,
        confirmation_fee: f64,
    ) -> Value {
        json!({
            "finalPayment": final_payment,
            "registrationFees": {
                "studentRegistration": {"amount": student_registration},
                "courseRegistration": {"amount": course_registration},
                "confirmationFee": {"amount": confirmation_fee}
            }
        })
    }

    /// The reference record: 100 + 20 + 30 + 10
    pub fn full_payment_payload() -> Value {
        Self::payment_payload(100.0, 20.0, 30.0, 10.0)
    }

    pub fn payment_for_student(student_id: &str, final_payment: f64) -> Value {
        json!({
            "studentId": student_id,
            "finalPayment": final_payment
        })
    }
}
