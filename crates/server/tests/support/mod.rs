#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use configs::AppConfig;
use serde_json::Value;
use tower::Service;
use uuid::Uuid;

pub const HOST: &str = "testserver";
pub const BOUNDARY: &str = "----plots-test-boundary";

/// App over an in-memory database and a scratch media directory.
pub struct TestApp {
    pub router: Router,
    pub media_root: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.media_root);
    }
}

pub fn test_config() -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.database.url = "sqlite::memory:".into();
    cfg.media.root = std::env::temp_dir()
        .join(format!("plots-it-{}", Uuid::new_v4()))
        .to_string_lossy()
        .to_string();
    cfg
}

pub async fn spawn_with(mut cfg: AppConfig) -> anyhow::Result<TestApp> {
    cfg.normalize_and_validate()?;
    let media_root = PathBuf::from(&cfg.media.root);
    let router = server::startup::build_app(cfg).await?;
    Ok(TestApp { router, media_root })
}

pub async fn spawn() -> anyhow::Result<TestApp> {
    spawn_with(test_config()).await
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> anyhow::Result<Response<Body>> {
        Ok(self.router.clone().call(req).await?)
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        let req = Request::builder().method("GET").uri(uri).header("host", HOST).body(Body::empty())?;
        read_json(self.send(req).await?).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("host", HOST)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?;
        read_json(self.send(req).await?).await
    }

    pub async fn post_raw(&self, uri: &str, content_type: &str, body: impl Into<Body>) -> anyhow::Result<(StatusCode, Value)> {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("host", HOST)
            .header("content-type", content_type)
            .body(body.into())?;
        read_json(self.send(req).await?).await
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> anyhow::Result<(StatusCode, Value)> {
        self.post_raw(uri, "application/x-www-form-urlencoded", body.to_string()).await
    }

    pub async fn add_plot(&self, parts: &[Part<'_>]) -> anyhow::Result<(StatusCode, Value)> {
        let content_type = format!("multipart/form-data; boundary={BOUNDARY}");
        self.post_raw("/add-plot/", &content_type, multipart_body(parts)).await
    }

    pub async fn fetch(&self, uri: &str) -> anyhow::Result<(StatusCode, Vec<u8>)> {
        let req = Request::builder().method("GET").uri(uri).header("host", HOST).body(Body::empty())?;
        let resp = self.send(req).await?;
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
        Ok((status, bytes.to_vec()))
    }
}

pub async fn read_json(resp: Response<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

pub enum Part<'a> {
    Text(&'a str, &'a str),
    File { name: &'a str, filename: &'a str, content_type: &'a str, bytes: &'a [u8] },
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes());
                body.extend_from_slice(value.as_bytes());
            }
            Part::File { name, filename, content_type, bytes } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n")
                        .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 1, 2, 3, 4];

/// A complete, valid add-plot form for `plot_number`.
pub fn plot_parts(plot_number: &str) -> Vec<Part<'_>> {
    vec![
        Part::Text("title", "Lot A"),
        Part::Text("location", "Zone 1"),
        Part::Text("price", "50000"),
        Part::Text("plot_number", plot_number),
        Part::File { name: "image", filename: "lot.png", content_type: "image/png", bytes: PNG },
    ]
}
