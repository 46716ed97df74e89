// Contract tests for the payment API
//
// Pin the JSON shapes the front-end depends on: field names, number
// encoding, pass-through of unknown fields and the error envelope.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{http::StatusCode, test, App};
use helpers::*;
use serde_json::{json, Value};

#[actix_web::test]
async fn test_payment_response_shape() {
    let (_store, services) = test_services();
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/payments")
        .set_json(TestDataFactory::full_payment_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_has_metadata(&body);
    assert_amount(&body, "finalPayment", 100.0);
    assert_amount(&body, "totalFinalPayment", 160.0);
    assert_eq!(
        body["registrationFees"]["studentRegistration"]["amount"].as_f64(),
        Some(20.0)
    );
    assert_eq!(
        body["registrationFees"]["courseRegistration"]["amount"].as_f64(),
        Some(30.0)
    );
    assert_eq!(
        body["registrationFees"]["confirmationFee"]["amount"].as_f64(),
        Some(10.0)
    );
}

#[actix_web::test]
async fn test_list_elements_carry_totals() {
    let (_store, services) = test_services();
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    for payload in [
        TestDataFactory::full_payment_payload(),
        json!({"finalPayment": 50}),
        json!({}),
    ] {
        let req = test::TestRequest::post()
            .uri("/payments")
            .set_json(payload)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/payments").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let items = body.as_array().expect("list response is an array");
    let totals: Vec<f64> = items
        .iter()
        .map(|item| item["totalFinalPayment"].as_f64().expect("total is a number"))
        .collect();

    assert_eq!(totals, vec![160.0, 50.0, 0.0]);
}

#[actix_web::test]
async fn test_absent_fields_are_omitted_not_null() {
    let (_store, services) = test_services();
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/payments")
        .set_json(json!({"finalPayment": 50}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert!(body.get("registrationFees").is_none());
    assert!(body.get("studentId").is_none());
    assert_amount(&body, "totalFinalPayment", 50.0);
}

#[actix_web::test]
async fn test_unknown_fields_pass_through() {
    let (_store, services) = test_services();
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/payments")
        .set_json(json!({
            "finalPayment": 10,
            "method": "bank-transfer",
            "registrationFees": {
                "confirmationFee": {"amount": 5, "receipt": "R-77"}
            }
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/payments/{}", id_of(&created)))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["method"], "bank-transfer");
    assert_eq!(body["registrationFees"]["confirmationFee"]["receipt"], "R-77");
    assert_amount(&body, "totalFinalPayment", 15.0);
}

#[actix_web::test]
async fn test_client_supplied_total_is_ignored() {
    let (store, services) = test_services();
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/payments")
        .set_json(json!({"finalPayment": 10, "totalFinalPayment": 9999}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_amount(&body, "totalFinalPayment", 10.0);

    // The derived total never reaches storage
    use eduportal::store::DocumentStore;
    let raw = store.find("payments", &id_of(&body)).await.unwrap().unwrap();
    assert!(raw.body.get("totalFinalPayment").is_none());
}

#[actix_web::test]
async fn test_breakdown_shape() {
    let (_store, services) = test_services();
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/payments")
        .set_json(TestDataFactory::full_payment_payload())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/payments/{}/breakdown", id_of(&created)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_amount(&body, "courseFee", 100.0);
    assert_amount(&body, "studentRegistration", 20.0);
    assert_amount(&body, "courseRegistration", 30.0);
    assert_amount(&body, "confirmationFee", 10.0);
    assert_amount(&body, "registrationTotal", 60.0);
    assert_amount(&body, "totalFinalPayment", 160.0);
}

#[actix_web::test]
async fn test_summary_shape() {
    let (_store, services) = test_services();
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    for payload in [
        TestDataFactory::full_payment_payload(),
        TestDataFactory::payment_payload(50.0, 5.0, 0.0, 0.0),
    ] {
        let req = test::TestRequest::post()
            .uri("/payments")
            .set_json(payload)
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/payments/summary").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["count"], 2);
    assert_amount(&body, "courseFees", 150.0);
    assert_amount(&body, "registrationFees", 65.0);
    assert_amount(&body, "totalFinalPayment", 215.0);
}

#[actix_web::test]
async fn test_error_envelope() {
    let (_store, services) = test_services();
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    // Unknown id
    let req = test::TestRequest::get().uri("/payments/missing").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_error_body(&body, 404);

    // Negative amount
    let req = test::TestRequest::post()
        .uri("/payments")
        .set_json(json!({"finalPayment": -5}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_error_body(&body, 400);

    // Non-numeric amount
    let req = test::TestRequest::post()
        .uri("/payments")
        .set_json(json!({"finalPayment": "free"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_error_body(&body, 400);

    // Oversized page
    let req = test::TestRequest::get().uri("/payments?limit=10000").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_error_body(&body, 400);
}

#[actix_web::test]
async fn test_malformed_stored_record_is_generic_500() {
    let (store, services) = test_services();
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    use eduportal::store::DocumentStore;
    let document = store
        .insert("payments", json!({"finalPayment": "corrupted"}))
        .await
        .unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/payments/{}", document.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_error_body(&body, 500);
    assert_eq!(body["error"]["message"], "Internal server error");
}

#[actix_web::test]
async fn test_listings_survive_unusual_stored_records() {
    let (store, services) = test_services();
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    use eduportal::store::DocumentStore;
    store
        .insert("payments", json!({"finalPayment": 1e30}))
        .await
        .unwrap();
    store
        .insert("payments", json!({"finalPayment": "corrupted"}))
        .await
        .unwrap();
    store
        .insert("payments", json!({"finalPayment": 10, "totalFinalPayment": 9999}))
        .await
        .unwrap();

    let req = test::TestRequest::get().uri("/payments").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let raw = test::read_body(resp).await;
    let text = std::str::from_utf8(&raw).unwrap();
    assert_eq!(text.matches("\"totalFinalPayment\"").count(), 2);

    let body: Value = serde_json::from_str(text).unwrap();
    let items = body.as_array().expect("list response is an array");
    assert_eq!(items.len(), 2);
    assert_amount(&items[1], "totalFinalPayment", 10.0);

    let req = test::TestRequest::get().uri("/payments/summary").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let summary: Value = test::read_body_json(resp).await;
    assert_eq!(summary["count"], 2);
}
