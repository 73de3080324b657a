//! Integration tests for marketplace resources.
//!
//! These tests run records through the shipped shapes and check the
//! response bodies a read endpoint would send.

use chrono::{NaiveDate, TimeZone, Utc};
use field_projection::{
    shapes, Envelope, FieldReadable, MapRecord, MissingFieldPolicy, Pagination, ProjectionConfig,
    ProjectionError, ResourceRequest, TimestampPrecision,
};
use serde_json::json;

fn seller() -> MapRecord {
    MapRecord::new("user")
        .with("id", 10)
        .with("name", "Bob")
        .with("email", "bob@example.com")
        .with("password", "hunter2")
        .with("role", "seller")
        .with("is_verified_seller", true)
        .with("email_verified_at", Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap())
        .with("created_at", Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap())
        .with("updated_at", Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap())
}

fn listing(id: i64, title: &str) -> MapRecord {
    MapRecord::new("listing")
        .with("id", id)
        .with("seller_id", 10)
        .with("title", title)
        .with("description", None::<String>)
        .with("price", 49.99)
        .with("currency", "EUR")
        .with("status", "active")
        .with("is_published", true)
        .with("published_at", Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap())
        .with("created_at", Utc.with_ymd_and_hms(2024, 2, 28, 8, 0, 0).unwrap())
        .with("updated_at", Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap())
}

#[test]
fn user_resource_body() {
    let request = ResourceRequest::new("req-user-001");

    let envelope = request.one(&shapes::user(), &seller()).expect("user shape matches");

    assert_eq!(
        envelope.to_json().to_string(),
        concat!(
            r#"{"data":{"id":"10","name":"Bob","email":"bob@example.com","role":"seller","#,
            r#""isVerifiedSeller":true,"emailVerifiedAt":"2024-02-01T09:00:00.000Z","#,
            r#""createdAt":"2024-01-15T10:00:00.000Z","updatedAt":"2024-02-01T09:00:00.000Z"}}"#
        )
    );
    assert!(!envelope.to_json().to_string().contains("hunter2"));
}

#[test]
fn user_resource_includes_avatar_when_loaded() {
    let request = ResourceRequest::new("req-user-002");
    let record = seller().with("avatar_url", "https://cdn.example.com/u/10.jpg");

    let envelope = request.one(&shapes::user(), &record).unwrap();
    let data = envelope.item().expect("single resource");

    assert_eq!(
        data.get("avatarUrl").and_then(|v| v.as_str()),
        Some("https://cdn.example.com/u/10.jpg")
    );
    let keys: Vec<&str> = data.keys().collect();
    assert_eq!(keys[5], "avatarUrl");
}

#[test]
fn listing_collection_with_pagination() {
    let request = ResourceRequest::new("req-listings-001");
    let records = vec![listing(1, "Desk lamp"), listing(2, "Armchair")];

    let envelope = request
        .collection(&shapes::listing(), &records)
        .unwrap()
        .with_pagination(Pagination {
            page: 2,
            per_page: 2,
            total: 5,
        });

    let body = envelope.to_json();
    assert_eq!(body["data"][0]["title"], json!("Desk lamp"));
    assert_eq!(body["data"][0]["price"], json!("49.99"));
    assert_eq!(body["data"][0]["description"], json!(null));
    assert_eq!(body["data"][1]["isPublished"], json!(true));
    assert_eq!(body["data"][1]["publishedAt"], json!("2024-03-01T08:00:00.000Z"));
    assert_eq!(
        body["meta"],
        json!({"current_page": 2, "per_page": 2, "total": 5, "last_page": 3})
    );
}

#[test]
fn gallery_images_without_thumbnails_still_project() {
    let request = ResourceRequest::new("req-gallery-001");
    let images = vec![
        MapRecord::new("listing_image")
            .with("id", 1)
            .with("listing_id", 7)
            .with("url", "https://cdn.example.com/l/7/1.jpg")
            .with("thumbnail_url", "https://cdn.example.com/l/7/1_thumb.jpg")
            .with("position", 0)
            .with("created_at", Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()),
        MapRecord::new("listing_image")
            .with("id", 2)
            .with("listing_id", 7)
            .with("url", "https://cdn.example.com/l/7/2.jpg")
            .with("position", 1)
            .with("created_at", Utc.with_ymd_and_hms(2024, 3, 1, 8, 1, 0).unwrap()),
    ];

    let projected = request
        .project_all(&shapes::listing_image(), &images)
        .unwrap();

    assert_eq!(projected.items.len(), 2);
    assert!(projected.items[0].contains_key("thumbnailUrl"));
    assert!(!projected.items[1].contains_key("thumbnailUrl"));
    assert!(projected.skipped.is_empty());
}

#[test]
fn broken_record_fails_collection_by_default() {
    let request = ResourceRequest::new("req-listings-002");
    let mut broken = listing(3, "Rug");
    broken.remove("currency");
    let records = vec![listing(1, "Desk lamp"), broken];

    let err = request
        .collection(&shapes::listing(), &records)
        .unwrap_err();

    assert_eq!(
        err,
        ProjectionError::FieldNotFound {
            record: "listing".to_string(),
            field: "currency".to_string(),
            output_key: "currency".to_string(),
        }
    );
}

#[test]
fn broken_record_is_skipped_under_skip_policy() {
    let request = ResourceRequest::new("req-listings-003").with_config(
        ProjectionConfig::new().with_missing_field_policy(MissingFieldPolicy::SkipRecord),
    );
    let mut broken = listing(3, "Rug");
    broken.remove("currency");
    let records = vec![broken, listing(1, "Desk lamp")];

    let envelope = request.collection(&shapes::listing(), &records).unwrap();
    let items = envelope.items().expect("collection");

    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0].get("title").and_then(|v| v.as_str()),
        Some("Desk lamp")
    );
}

#[test]
fn appointment_with_seconds_precision_from_config_text() {
    let config = ProjectionConfig::from_json_str(r#"{"timestamp_precision": "seconds"}"#).unwrap();
    assert_eq!(config.timestamp_precision, TimestampPrecision::Seconds);
    let request = ResourceRequest::new("req-appt-001").with_config(config);

    let appointment = MapRecord::new("seller_appointment")
        .with("id", 4)
        .with("seller_id", 10)
        .with("moderator_id", None::<i64>)
        .with("scheduled_at", NaiveDate::from_ymd_opt(2024, 4, 2).unwrap())
        .with("status", "pending")
        .with("created_at", Utc.with_ymd_and_hms(2024, 3, 20, 12, 30, 15).unwrap());

    let envelope = request
        .one(&shapes::seller_appointment(), &appointment)
        .unwrap();

    assert_eq!(
        envelope.to_json(),
        json!({
            "data": {
                "id": "4",
                "sellerId": "10",
                "moderatorId": null,
                "scheduledAt": "2024-04-02T00:00:00Z",
                "status": "pending",
                "createdAt": "2024-03-20T12:30:15Z"
            }
        })
    );
}

#[test]
fn json_object_records_project_like_any_other() {
    let payload = json!({
        "id": 5,
        "name": "moderator",
        "display_name": "Moderator",
        "permissions": ["verify_sellers"]
    });
    let record = payload.as_object().expect("object");
    assert_eq!(record.record_kind(), "json object");

    let output = shapes::role().project(record).unwrap();

    assert_eq!(
        serde_json::to_string(&output).unwrap(),
        r#"{"id":"5","name":"moderator","displayName":"Moderator"}"#
    );
}

#[test]
fn envelope_meta_is_omitted_when_empty() {
    let envelope = Envelope::many(Vec::new());
    assert_eq!(serde_json::to_string(&envelope).unwrap(), r#"{"data":[]}"#);
    assert!(envelope.meta().is_empty());
}
