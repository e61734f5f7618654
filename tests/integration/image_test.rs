//! Integration tests for formatted image delivery.

mod helpers;

use std::io::Cursor;

use axum::http::StatusCode;
use image::{DynamicImage, GenericImageView, ImageFormat, Rgba, RgbaImage};

use helpers::{TestApp, file_version};

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([30, 160, 90, 255]));
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

async fn app_with_photo() -> TestApp {
    let app = TestApp::new().await;
    let photo = png(400, 200);
    app.add_media(
        7,
        1,
        vec![(
            file_version(70, 1, "photo.png", Some("image/png"), photo.len() as i64),
            photo,
        )],
    );
    app.add_media(
        8,
        1,
        vec![(
            file_version(80, 1, "manual.pdf", Some("application/pdf"), 4),
            b"%PDF".to_vec(),
        )],
    );
    app
}

#[tokio::test]
async fn test_outbound_format() {
    let app = app_with_photo().await;

    let response = app.get("/uploads/media/50x50/01/7-photo.png", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), "image/png");
    assert_eq!(response.header("cache-control"), "public, max-age=2592000");
    let img = image::load_from_memory(&response.body).unwrap();
    assert_eq!(img.dimensions(), (50, 50));
}

#[tokio::test]
async fn test_inset_format_keeps_ratio() {
    let app = app_with_photo().await;

    let response = app.get("/uploads/media/100x/01/7-photo.png?v=1", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    let img = image::load_from_memory(&response.body).unwrap();
    assert_eq!(img.dimensions(), (100, 50));
}

#[tokio::test]
async fn test_image_error_codes() {
    let app = app_with_photo().await;

    for (path, code) in [
        ("/uploads/media/50x50/7-photo.png", 5005),
        ("/uploads/media/50x50/01/photo.png", 5005),
        ("/uploads/media/50x50/01/404-missing.png", 5006),
        ("/uploads/media/999x999/01/7-photo.png", 5007),
        ("/uploads/media/50x50/01/8-manual.pdf", 5007),
    ] {
        let response = app.get(path, &[]).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(
            response.json()["message"],
            format!("Image create error. Code: {code}"),
            "{path}"
        );
    }
}

#[tokio::test]
async fn test_missing_original() {
    let app = app_with_photo().await;
    std::fs::remove_file(app.upload_dir.path().join("01/70-photo.png")).unwrap();

    let response = app.get("/uploads/media/50x50/01/7-photo.png", &[]).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["message"], "Image create error. Code: 5009");
}
