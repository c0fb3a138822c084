use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::Serialize;

use crate::AppState;
use grayscale_core::{MediaError, SizeOption, TransformError};

const CONTENT_TYPE_JPEG: &str = "image/jpeg";
const DEFAULT_FILENAME: &str = "image.jpg";
const OUTPUT_PREFIX: &str = "processed_";

#[derive(Debug, Serialize)]
pub struct SizeOptionView {
    pub value: &'static str,
    pub label: String,
    pub dimension: Option<u32>,
    pub is_default: bool,
}

impl From<&SizeOption> for SizeOptionView {
    fn from(option: &SizeOption) -> Self {
        Self {
            value: option.token,
            label: option.label(),
            dimension: option.pixel_bound,
            is_default: option.is_default,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SizeOptionsResponse {
    pub size_options: Vec<SizeOptionView>,
    pub default: &'static str,
}

pub async fn size_options(State(state): State<AppState>) -> Json<SizeOptionsResponse> {
    Json(SizeOptionsResponse {
        size_options: state.catalog.options().iter().map(SizeOptionView::from).collect(),
        default: state.catalog.default_token(),
    })
}

/// multipart フォームから取り出したアップロード内容
#[derive(Debug, Default)]
struct UploadForm {
    file: Option<UploadedFile>,
    size: Option<String>,
}

#[derive(Debug)]
struct UploadedFile {
    filename: Option<String>,
    bytes: Bytes,
}

pub async fn process_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let form = read_upload_form(&mut multipart).await?;

    let size = form
        .size
        .as_deref()
        .unwrap_or_else(|| state.catalog.default_token());
    let max_dimension = state.catalog.resolve(size).map_err(MediaError::from)?;

    let file = form
        .file
        .ok_or_else(|| AppError::BadRequest("file is required".to_string()))?;

    tracing::info!(
        size = %size,
        filename = ?file.filename,
        bytes = file.bytes.len(),
        "processing image"
    );

    let input = file.bytes;
    let output_bytes =
        tokio::task::spawn_blocking(move || crate::transform::transform(&input, max_dimension))
            .await
            .map_err(|e| AppError::Internal(format!("transform task failed: {e}")))?
            .map_err(MediaError::from)?;

    let disposition = content_disposition(file.filename.as_deref())?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JPEG)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        output_bytes,
    )
        .into_response())
}

/// `file` と `size` 以外のフィールドは読み捨てる
async fn read_upload_form(multipart: &mut Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().map(str::to_owned);
                let bytes = field.bytes().await?;
                form.file = Some(UploadedFile { filename, bytes });
            }
            Some("size") => {
                form.size = Some(field.text().await?);
            }
            _ => {}
        }
    }

    Ok(form)
}

/// 元のファイル名に "processed_" を付けた attachment ヘッダを作る
///
/// ヘッダ値に使えない文字（制御文字・非 ASCII）は `_` に置き換える
fn content_disposition(filename: Option<&str>) -> Result<HeaderValue, AppError> {
    let name = filename
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_FILENAME);

    let sanitized: String = name
        .chars()
        .map(|c| if c.is_ascii_graphic() || c == ' ' { c } else { '_' })
        .collect();

    HeaderValue::from_str(&format!("attachment; filename={OUTPUT_PREFIX}{sanitized}"))
        .map_err(|e| AppError::Internal(format!("invalid Content-Disposition: {e}")))
}

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl From<MediaError> for AppError {
    fn from(err: MediaError) -> Self {
        match &err {
            MediaError::Size(size_err) => {
                tracing::warn!(error = %size_err, "invalid size option");
            }
            MediaError::Transform(TransformError::Decode(msg)) => {
                tracing::warn!(error = %msg, "failed to decode upload");
            }
            MediaError::Transform(TransformError::ResolutionTooLarge { width, height }) => {
                tracing::warn!(width = %width, height = %height, "image resolution too large");
            }
            MediaError::Transform(TransformError::ProcessingFailed(msg)) => {
                tracing::error!(error = %msg, "image processing failed");
            }
        }
        AppError::BadRequest(err.to_string())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        tracing::warn!(error = %err, status = %err.status(), "failed to read multipart form");
        AppError::BadRequest(err.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = serde_json::json!({ "detail": message });
        (status, Json(body)).into_response()
    }
}
