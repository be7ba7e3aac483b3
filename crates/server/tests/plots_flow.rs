use axum::http::StatusCode;
use serde_json::json;

mod support;
use support::{plot_parts, spawn, spawn_with, test_config, Part, HOST, PNG};

#[tokio::test]
async fn plot_lifecycle() -> anyhow::Result<()> {
    let app = spawn().await?;

    let (status, created) = app.add_plot(&plot_parts("P1")).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["plot_number"], "P1");
    assert_eq!(created["title"], "Lot A");
    assert_eq!(created["price"], "50000");

    let (status, list) = app.get("/get-plots/").await?;
    assert_eq!(status, StatusCode::OK);
    let plots = list.as_array().cloned().unwrap_or_default();
    assert_eq!(plots.len(), 1);
    assert_eq!(plots[0]["plot_number"], "P1");
    let image = plots[0]["image"].as_str().unwrap_or_default().to_string();
    let prefix = format!("http://{HOST}/media/plots/");
    assert!(image.starts_with(&prefix), "unexpected image url {image}");
    assert!(image.ends_with(".png"));

    // the stored image is served back under the media prefix
    let path = image.trim_start_matches(&format!("http://{HOST}")).to_string();
    let (status, bytes) = app.fetch(&path).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, PNG);

    let (status, body) = app.add_plot(&plot_parts("P1")).await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"error": "Plot number already exists"}));
    let (_, list) = app.get("/get-plots/").await?;
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let (status, body) = app.post_json("/remove-plot/", json!({"plot_number": "P1"})).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Plot removed"}));

    let (_, list) = app.get("/get-plots/").await?;
    assert_eq!(list, json!([]));
    let (status, _) = app.fetch(&path).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.post_json("/remove-plot/", json!({"plot_number": "P1"})).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Plot not found"}));
    Ok(())
}

#[tokio::test]
async fn plots_are_listed_in_creation_order() -> anyhow::Result<()> {
    let app = spawn().await?;
    for n in ["B-2", "A-1", "C-3"] {
        let (status, _) = app.add_plot(&plot_parts(n)).await?;
        assert_eq!(status, StatusCode::CREATED);
    }
    let (_, list) = app.get("/get-plots/").await?;
    let numbers: Vec<&str> = list
        .as_array()
        .map(|a| a.iter().filter_map(|p| p["plot_number"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(numbers, vec!["B-2", "A-1", "C-3"]);
    Ok(())
}

#[tokio::test]
async fn add_plot_requires_every_field() -> anyhow::Result<()> {
    let app = spawn().await?;

    let mut no_image = plot_parts("P1");
    no_image.pop();
    let (status, body) = app.add_plot(&no_image).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "image is required"}));

    let blank_title = vec![
        Part::Text("title", "   "),
        Part::Text("location", "Zone 1"),
        Part::Text("price", "50000"),
        Part::Text("plot_number", "P1"),
        Part::File { name: "image", filename: "lot.png", content_type: "image/png", bytes: PNG },
    ];
    let (status, body) = app.add_plot(&blank_title).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "title is required"}));

    let long_number = "X".repeat(101);
    let (status, _) = app.add_plot(&plot_parts(&long_number)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = app.get("/get-plots/").await?;
    assert_eq!(list, json!([]));
    // nothing was written for rejected submissions
    let stored = std::fs::read_dir(app.media_root.join("plots")).map(|d| d.count()).unwrap_or(0);
    assert_eq!(stored, 0);
    Ok(())
}

#[tokio::test]
async fn add_plot_rejects_non_multipart_body() -> anyhow::Result<()> {
    let app = spawn().await?;
    let (status, body) = app.post_json("/add-plot/", json!({"plot_number": "P1"})).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid request"}));
    Ok(())
}

#[tokio::test]
async fn remove_plot_accepts_form_body_and_keeps_bookings() -> anyhow::Result<()> {
    let app = spawn().await?;
    app.add_plot(&plot_parts("P7")).await?;
    let (status, _) = app
        .post_json(
            "/book-plot/",
            json!({"name": "Ali", "email": "ali@example.com", "phone": "03001234567", "cnic": "3520212345671", "plot_number": "P7"}),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.post_form("/remove-plot/", "plot_number=P7").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Plot removed");

    let (_, bookings) = app.get("/get-bookings/").await?;
    assert_eq!(bookings.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn remove_plot_without_number_is_400() -> anyhow::Result<()> {
    let app = spawn().await?;
    let (status, body) = app.post_json("/remove-plot/", json!({})).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "plot_number is required"}));

    let (status, body) = app.post_raw("/remove-plot/", "application/json", "{not json").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid request"}));
    Ok(())
}

#[tokio::test]
async fn remove_plot_with_overlong_number_is_404() -> anyhow::Result<()> {
    let app = spawn().await?;
    let long_number = "X".repeat(101);
    let (status, body) = app.post_json("/remove-plot/", json!({"plot_number": long_number})).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Plot not found"}));
    Ok(())
}

#[tokio::test]
async fn remove_plot_accepts_numeric_plot_number() -> anyhow::Result<()> {
    let app = spawn().await?;
    let (status, _) = app.add_plot(&plot_parts("101")).await?;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.post_json("/remove-plot/", json!({"plot_number": 101})).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Plot removed"}));
    let (_, list) = app.get("/get-plots/").await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn add_plot_refuses_markup_disguised_as_image() -> anyhow::Result<()> {
    let app = spawn().await?;
    let page: &[u8] = b"<html><script>alert(document.cookie)</script></html>";

    for (filename, content_type) in [("x.html", "text/html"), ("x.png", "image/png")] {
        let parts = vec![
            Part::Text("title", "Lot A"),
            Part::Text("location", "Zone 1"),
            Part::Text("price", "50000"),
            Part::Text("plot_number", "P1"),
            Part::File { name: "image", filename, content_type, bytes: page },
        ];
        let (status, body) = app.add_plot(&parts).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{filename} as {content_type}");
        assert_eq!(body, json!({"error": "image must be a JPEG, PNG, GIF or WebP file"}));
    }

    // image sent as a plain text part
    let mut parts = plot_parts("P1");
    parts.pop();
    parts.push(Part::Text("image", "iVBORw0KGgo="));
    let (status, body) = app.add_plot(&parts).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "image is required"}));

    let (_, list) = app.get("/get-plots/").await?;
    assert_eq!(list, json!([]));
    let stored = std::fs::read_dir(app.media_root.join("plots")).map(|d| d.count()).unwrap_or(0);
    assert_eq!(stored, 0);
    Ok(())
}

#[tokio::test]
async fn wrong_method_is_405_with_error_body() -> anyhow::Result<()> {
    let app = spawn().await?;
    let (status, body) = app.get("/add-plot/").await?;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(body["error"].is_string());

    let (status, body) = app.post_json("/get-plots/", json!({})).await?;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(body["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn configured_base_url_wins_over_host_header() -> anyhow::Result<()> {
    let mut cfg = test_config();
    cfg.media.public_base_url = Some("https://plots.example.com/".into());
    let app = spawn_with(cfg).await?;

    let (_, created) = app.add_plot(&plot_parts("P1")).await?;
    let image = created["image"].as_str().unwrap_or_default();
    assert!(image.starts_with("https://plots.example.com/media/plots/"), "unexpected image url {image}");
    Ok(())
}

#[tokio::test]
async fn oversized_upload_is_413() -> anyhow::Result<()> {
    let mut cfg = test_config();
    cfg.server.max_upload_bytes = 256;
    let app = spawn_with(cfg).await?;

    let big = vec![7u8; 4096];
    let parts = vec![
        Part::Text("title", "Lot A"),
        Part::Text("location", "Zone 1"),
        Part::Text("price", "50000"),
        Part::Text("plot_number", "P1"),
        Part::File { name: "image", filename: "big.png", content_type: "image/png", bytes: &big },
    ];
    let (status, body) = app.add_plot(&parts).await?;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["error"].is_string());

    let (_, list) = app.get("/get-plots/").await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn media_is_not_served_when_disabled() -> anyhow::Result<()> {
    let mut cfg = test_config();
    cfg.media.serve = false;
    let app = spawn_with(cfg).await?;

    let (_, created) = app.add_plot(&plot_parts("P1")).await?;
    let image = created["image"].as_str().unwrap_or_default();
    let path = image.trim_start_matches(&format!("http://{HOST}")).to_string();
    let (status, _) = app.fetch(&path).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
