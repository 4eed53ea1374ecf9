//! Upload route integration tests.
//!
//! Run with: `cargo test -p vcfgw-api --test upload_test`

mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::storage::FAILURE_DETAIL;
use helpers::{
    csv_bytes, file_form, setup_failing_app, setup_test_app, setup_test_app_with, METADATA_LIMIT,
    TEST_BUCKET, VCF_LIMIT,
};
use serde_json::{json, Value};

#[tokio::test]
async fn valid_csv_is_stored_under_input_prefix() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/upload-metadata")
        .multipart(file_form("cohort1.csv", "text/csv", csv_bytes()))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Metadata CSV uploaded successfully");

    let file_url = body["fileUrl"].as_str().expect("fileUrl should be a string");
    assert_eq!(file_url, format!("s3://{}/input/cohort1.csv", TEST_BUCKET));

    let objects = app.storage.list_objects().await.unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].key, "input/cohort1.csv");
    assert_eq!(objects[0].size, csv_bytes().len() as u64);
}

#[tokio::test]
async fn metadata_route_rejects_non_csv_and_stores_nothing() {
    let app = setup_test_app().await;

    for mime in ["text/plain", "application/json", "text/csv; charset=utf-8"] {
        let response = app
            .client()
            .post("/upload-metadata")
            .multipart(file_form("cohort1.csv", mime, csv_bytes()))
            .await;

        assert_eq!(response.status_code(), 400, "mime {mime}");
        let body: Value = response.json();
        assert_eq!(
            body,
            json!({ "success": false, "error": "Only CSV files are allowed!" })
        );
    }

    assert!(app.storage.list_objects().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_file_field_reports_category_message() {
    let app = setup_test_app().await;

    for (route, message) in [
        ("/upload-metadata", "No CSV file uploaded"),
        ("/upload-vcf", "No VCF file uploaded"),
    ] {
        let form = MultipartForm::new().add_part(
            "document",
            Part::bytes(bytes::Bytes::from(csv_bytes()))
                .file_name("cohort1.csv")
                .mime_type("text/csv"),
        );
        let response = app.client().post(route).multipart(form).await;

        assert_eq!(response.status_code(), 400, "route {route}");
        let body: Value = response.json();
        assert_eq!(body, json!({ "success": false, "error": message }));
    }
}

#[tokio::test]
async fn file_field_without_filename_is_not_a_file() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_text("file", "just some text");
    let response = app.client().post("/upload-vcf").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "No VCF file uploaded");
}

#[tokio::test]
async fn non_multipart_body_counts_as_no_file() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/upload-metadata")
        .json(&json!({ "file": "cohort1.csv" }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "success": false, "error": "No CSV file uploaded" })
    );
}

#[tokio::test]
async fn multiple_file_parts_are_rejected() {
    let app = setup_test_app().await;

    let form = MultipartForm::new()
        .add_part(
            "file",
            Part::bytes(bytes::Bytes::from(b"a".to_vec())).file_name("a.vcf"),
        )
        .add_part(
            "file",
            Part::bytes(bytes::Bytes::from(b"b".to_vec())).file_name("b.vcf"),
        );
    let response = app.client().post("/upload-vcf").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Multiple file fields are not allowed"));
    assert!(app.storage.list_objects().await.unwrap().is_empty());
}

#[tokio::test]
async fn oversize_files_are_rejected_as_validation_errors_on_both_routes() {
    let app = setup_test_app().await;

    let cases = [
        ("/upload-metadata", "big.csv", "text/csv", METADATA_LIMIT + 1),
        ("/upload-vcf", "big.vcf.gz", "application/gzip", VCF_LIMIT + 1),
    ];

    for (route, name, mime, size) in cases {
        let response = app
            .client()
            .post(route)
            .multipart(file_form(name, mime, vec![b'x'; size]))
            .await;

        assert_eq!(response.status_code(), 400, "route {route}");
        let body: Value = response.json();
        assert_eq!(body, json!({ "success": false, "error": "File too large" }));
    }

    assert!(app.storage.list_objects().await.unwrap().is_empty());
}

#[tokio::test]
async fn file_exactly_at_limit_is_accepted() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/upload-metadata")
        .multipart(file_form("edge.csv", "text/csv", vec![b'a'; METADATA_LIMIT]))
        .await;

    assert_eq!(response.status_code(), 200);
}

#[tokio::test]
async fn body_far_beyond_limit_is_rejected_by_transport_cap() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/upload-vcf")
        .multipart(file_form(
            "huge.vcf",
            "text/plain",
            vec![b'x'; VCF_LIMIT + 128 * 1024],
        ))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "File too large");
}

#[tokio::test]
async fn part_without_content_type_is_treated_as_text_plain() {
    let app = setup_test_app().await;

    let body = concat!(
        "--XBOUNDARY\r\n",
        "Content-Disposition: form-data; name=\"file\"; filename=\"cohort1.csv\"\r\n",
        "\r\n",
        "sample_id,phenotype\r\n",
        "--XBOUNDARY--\r\n",
    );

    let response = app
        .client()
        .post("/upload-metadata")
        .bytes(bytes::Bytes::from_static(body.as_bytes()))
        .content_type("multipart/form-data; boundary=XBOUNDARY")
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Only CSV files are allowed!");
    assert!(app.storage.list_objects().await.unwrap().is_empty());
}

#[tokio::test]
async fn vcf_route_accepts_any_content_type() {
    let app = setup_test_app().await;

    for (name, mime) in [
        ("calls.vcf", "text/plain"),
        ("calls.vcf.gz", "application/gzip"),
        ("calls.bcf", "application/octet-stream"),
    ] {
        let response = app
            .client()
            .post("/upload-vcf")
            .multipart(file_form(name, mime, b"##fileformat=VCFv4.2\n".to_vec()))
            .await;

        assert_eq!(response.status_code(), 200, "mime {mime}");
        let body: Value = response.json();
        assert_eq!(body["message"], "VCF file uploaded successfully");
        assert_eq!(
            body["fileUrl"],
            format!("s3://{}/input/{}", TEST_BUCKET, name)
        );
    }

    assert_eq!(app.storage.list_objects().await.unwrap().len(), 3);
}

#[tokio::test]
async fn same_filename_overwrites() {
    let app = setup_test_app().await;

    for content in [b"first,upload\n".to_vec(), b"2\n".to_vec()] {
        let response = app
            .client()
            .post("/upload-metadata")
            .multipart(file_form("cohort1.csv", "text/csv", content))
            .await;
        assert_eq!(response.status_code(), 200);
    }

    let objects = app.storage.list_objects().await.unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].size, 2);
}

#[tokio::test]
async fn sanitized_filenames_when_enabled() {
    let app = setup_test_app_with(|config| config.uploads.sanitize_filenames = true).await;

    let response = app
        .client()
        .post("/upload-metadata")
        .multipart(file_form("my cohort#1.csv", "text/csv", csv_bytes()))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(
        body["fileUrl"],
        format!("s3://{}/input/my_cohort_1.csv", TEST_BUCKET)
    );

    let response = app
        .client()
        .post("/upload-metadata")
        .multipart(file_form("..", "text/csv", csv_bytes()))
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn storage_failure_returns_500_with_detail() {
    let app = setup_failing_app(|_| {});

    let response = app
        .client()
        .post("/upload-vcf")
        .multipart(file_form("calls.vcf", "text/plain", b"x".to_vec()))
        .await;

    assert_eq!(response.status_code(), 500);
    let body: Value = response.json();
    assert_eq!(body, json!({ "success": false, "error": FAILURE_DETAIL }));
}

#[tokio::test]
async fn storage_failure_detail_is_masked_when_not_exposed() {
    let app = setup_failing_app(|config| {
        config.base.environment = "production".to_string();
        config.uploads.expose_storage_errors = false;
    });

    for (route, name, mime, message) in [
        ("/upload-metadata", "c.csv", "text/csv", "Failed to upload CSV file"),
        ("/upload-vcf", "c.vcf", "text/plain", "Failed to upload VCF file"),
    ] {
        let response = app
            .client()
            .post(route)
            .multipart(file_form(name, mime, b"x".to_vec()))
            .await;

        assert_eq!(response.status_code(), 500);
        let body: Value = response.json();
        assert_eq!(body, json!({ "success": false, "error": message }));
    }
}

#[tokio::test]
async fn validation_happens_before_storage_is_called() {
    let app = setup_failing_app(|_| {});

    let response = app
        .client()
        .post("/upload-metadata")
        .multipart(file_form("c.csv", "text/plain", b"x".to_vec()))
        .await;
    assert_eq!(response.status_code(), 400);

    let response = app
        .client()
        .post("/upload-metadata")
        .multipart(file_form("c.csv", "text/csv", vec![b'x'; METADATA_LIMIT + 1]))
        .await;
    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "File too large");
}
