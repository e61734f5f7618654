//! Integration tests for file downloads.

mod helpers;

use axum::http::StatusCode;

use helpers::{TestApp, file_version};

const REPORT: &[u8] = b"%PDF-1.4 quarterly numbers";

async fn app_with_report() -> TestApp {
    let app = TestApp::new().await;
    app.add_media(
        1,
        2,
        vec![
            (
                file_version(10, 1, "Draft.pdf", Some("application/pdf"), 5),
                b"draft".to_vec(),
            ),
            (
                file_version(11, 2, "Über Report.pdf", Some("application/pdf"), REPORT.len() as i64),
                REPORT.to_vec(),
            ),
        ],
    );
    app
}

#[tokio::test]
async fn test_download_current_version() {
    let app = app_with_report().await;

    let response = app.get("/media/1/download/uber-report.pdf", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(&response.body[..], REPORT);
    assert_eq!(response.header("content-type"), "application/pdf");
    assert_eq!(response.header("content-length"), REPORT.len().to_string());
    assert_eq!(
        response.header("content-disposition"),
        "inline; filename=\"uber-report.pdf\"; filename*=utf-8''%C3%9Cber%20Report.pdf"
    );
    assert_eq!(app.counter.count(11), 1);
}

#[tokio::test]
async fn test_download_locale_from_accept_language() {
    let app = app_with_report().await;

    let response = app
        .get("/media/1/download", &[("accept-language", "de-DE,de;q=0.9")])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(
        response
            .header("content-disposition")
            .starts_with("inline; filename=\"ueber-report.pdf\"")
    );
}

#[tokio::test]
async fn test_download_explicit_version_without_count() {
    let app = app_with_report().await;

    let response = app.get("/media/1/download?v=1&no-count=1", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(&response.body[..], b"draft");
    assert_eq!(
        response.header("content-disposition"),
        "inline; filename=\"draft.pdf\"; filename*=utf-8''Draft.pdf"
    );
    assert_eq!(app.counter.count(10), 0);
}

#[tokio::test]
async fn test_inline_flag_forces_attachment() {
    let app = app_with_report().await;

    let response = app.get("/media/1/download?inline=0", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.header("content-disposition").starts_with("attachment;"));
}

#[tokio::test]
async fn test_inline_flag_forces_inline() {
    let app = TestApp::new().await;
    app.add_media(
        4,
        1,
        vec![(file_version(40, 1, "d.bin", Some("application/x-dump"), 2), b"ok".to_vec())],
    );

    let response = app.get("/media/4/download", &[]).await;
    assert_eq!(response.header("content-disposition"), "attachment; filename=\"d.bin\"");

    let response = app.get("/media/4/download?inline=1", &[]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-disposition"), "inline; filename=\"d.bin\"");
}

#[tokio::test]
async fn test_non_ascii_extension_keeps_fallback_ascii() {
    let app = TestApp::new().await;
    app.add_media(
        5,
        1,
        vec![(file_version(50, 1, "Bericht.Größe", Some("application/pdf"), 3), b"abc".to_vec())],
    );

    let response = app.get("/media/5/download", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.header("content-disposition"),
        "inline; filename=\"bericht.Gr__e\"; filename*=utf-8''Bericht.Gr%C3%B6%C3%9Fe"
    );
}

#[tokio::test]
async fn test_unusable_stored_mime_type_is_not_found() {
    let app = TestApp::new().await;
    app.add_media(
        6,
        1,
        vec![(file_version(60, 1, "notes.txt", Some("text/plain\nX: y"), 3), b"abc".to_vec())],
    );

    let response = app.get("/media/6/download", &[]).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.json()["message"],
        "File not found: 5004 File version 60 is malformed: MIME type is not a valid header value"
    );
}

#[tokio::test]
async fn test_counter_failure_still_downloads() {
    let app = app_with_report().await;
    *app.counter.fail.lock().unwrap() = true;

    let response = app.get("/media/1/download", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(&response.body[..], REPORT);
}

#[tokio::test]
async fn test_missing_media_is_empty_not_found() {
    let app = app_with_report().await;

    for path in ["/media/999/download", "/media/abc/download"] {
        let response = app.get(path, &[]).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
        assert!(response.body.is_empty(), "{path}");
    }
}

#[tokio::test]
async fn test_missing_version_reports_code() {
    let app = app_with_report().await;

    let response = app.get("/media/1/download?v=9", &[]).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let body = response.json();
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(
        body["message"],
        "File not found: 5004 File version 9 of media 1 not found"
    );
}

#[tokio::test]
async fn test_non_numeric_version_reports_code() {
    let app = app_with_report().await;

    let response = app.get("/media/1/download?v=latest", &[]).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.json()["message"],
        "File not found: 5004 Invalid file version \"latest\""
    );
}

#[tokio::test]
async fn test_missing_original_reports_code() {
    let app = TestApp::new().await;
    app.add_media(
        2,
        1,
        vec![(file_version(20, 1, "gone.bin", None, 3), b"abc".to_vec())],
    );
    std::fs::remove_file(app.upload_dir.path().join("01/20-gone.bin")).unwrap();

    let response = app.get("/media/2/download", &[]).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.json()["message"],
        "File not found: 5009 Original media at \"01/20-gone.bin\" not found"
    );
}

#[tokio::test]
async fn test_unknown_mime_type_is_octet_stream_attachment() {
    let app = TestApp::new().await;
    app.add_media(
        3,
        1,
        vec![(file_version(30, 1, "data.bin", None, 4), b"\x00\x01\x02\x03".to_vec())],
    );

    let response = app.get("/media/3/download", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), "application/octet-stream");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"data.bin\""
    );
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.get("/health", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
}
