//! HTTP adapter for the pixelveil codec: multipart in, PNG or JSON out.
//! All the actual work happens in `pixelveil-core`; this binary only parses
//! requests, maps errors onto status codes and serves the static frontend.

use std::io::Cursor;
use std::net::SocketAddr;

use axum::{
    extract::{multipart::Multipart, DefaultBodyLimit},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use clap::Parser;
use log::{error, info};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use pixelveil_core::{hide_message, unveil_message, PixelveilError};

/// multipart uploads above this are rejected outright
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ServerArgs {
    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Directory with the static frontend files
    #[arg(long, default_value = "frontend")]
    frontend: String,
}

#[derive(Serialize)]
struct DecodeResponse {
    message: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = ServerArgs::parse();

    let app = Router::new()
        .route("/api/encode", post(handle_encode))
        .route("/api/decode", post(handle_decode))
        .route("/api/health", get(health_check))
        .fallback_service(ServeDir::new(&args.frontend))
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!("pixelveil server running on http://{addr}");
    info!("API endpoints: POST /api/encode, POST /api/decode");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "pixelveil",
    }))
}

/// `POST /api/encode` — multipart fields `image`, `message` and optional
/// `password`; responds with the carrier image as a PNG attachment.
async fn handle_encode(multipart: Multipart) -> Result<impl IntoResponse, ApiError> {
    let form = EncodeForm::from_multipart(multipart).await?;

    let carrier = decode_upload(&form.image)?;
    let secret = hide_message(&carrier, &form.message, &form.password)
        .map_err(|e| api_error(&e))?;

    let mut png = Cursor::new(Vec::new());
    secret
        .write_to(&mut png, image::ImageFormat::Png)
        .map_err(|e| {
            error!("Failed to encode PNG: {e}");
            internal_error("Failed to encode image")
        })?;

    info!(
        "encoded {} message bytes into a {}x{} carrier",
        form.message.len(),
        secret.width(),
        secret.height()
    );

    Ok((
        [
            (header::CONTENT_TYPE, "image/png"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"encoded.png\"",
            ),
        ],
        png.into_inner(),
    ))
}

/// `POST /api/decode` — multipart fields `image` and optional `password`;
/// responds with the recovered message as JSON.
async fn handle_decode(multipart: Multipart) -> Result<Json<DecodeResponse>, ApiError> {
    let form = DecodeForm::from_multipart(multipart).await?;

    let img = decode_upload(&form.image)?;
    let message = unveil_message(&img, &form.password).map_err(|e| api_error(&e))?;

    Ok(Json(DecodeResponse { message }))
}

struct EncodeForm {
    image: Vec<u8>,
    message: String,
    password: String,
}

impl EncodeForm {
    async fn from_multipart(multipart: Multipart) -> Result<Self, ApiError> {
        let (image, message, password) = read_form(multipart).await?;
        let Some(image) = image else {
            return Err(bad_request("No image file provided"));
        };
        let Some(message) = message.filter(|m| !m.is_empty()) else {
            return Err(bad_request("No message provided"));
        };

        Ok(Self {
            image,
            message,
            password: password.unwrap_or_default(),
        })
    }
}

struct DecodeForm {
    image: Vec<u8>,
    password: String,
}

impl DecodeForm {
    async fn from_multipart(multipart: Multipart) -> Result<Self, ApiError> {
        let (image, _message, password) = read_form(multipart).await?;
        let Some(image) = image else {
            return Err(bad_request("No image file provided"));
        };

        Ok(Self {
            image,
            password: password.unwrap_or_default(),
        })
    }
}

/// pulls the known fields out of a multipart form, ignoring everything else
async fn read_form(
    mut multipart: Multipart,
) -> Result<(Option<Vec<u8>>, Option<String>, Option<String>), ApiError> {
    let mut image = None;
    let mut message = None;
    let mut password = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(format!("Failed to parse form: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| bad_request(format!("Failed to read image data: {e}")))?;
                image = Some(data.to_vec());
            }
            "message" => {
                message = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| bad_request(format!("Failed to read message: {e}")))?,
                );
            }
            "password" => {
                password = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| bad_request(format!("Failed to read password: {e}")))?,
                );
            }
            _ => {}
        }
    }

    Ok((image, message, password))
}

fn decode_upload(data: &[u8]) -> Result<pixelveil_core::RgbaImage, ApiError> {
    image::load_from_memory(data)
        .map(|img| img.to_rgba8())
        .map_err(|_| bad_request("Failed to decode image"))
}

fn api_error(err: &PixelveilError) -> ApiError {
    let status = match err {
        PixelveilError::ImageCapacityError(..)
        | PixelveilError::PayloadTooLarge(_)
        | PixelveilError::DecryptionError
        | PixelveilError::CiphertextTooShort
        | PixelveilError::InvalidImageMedia
        | PixelveilError::UnsupportedMedia => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        error!("request failed: {err}");
    }

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

fn internal_error(message: impl Into<String>) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}
