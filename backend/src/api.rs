//! Web API Module
//!
//! Upload a resume, get the extracted fields back, browse earlier uploads and
//! run a skill-gap check. All endpoints return JSON and require no
//! authentication.

use crate::config::ServerConfig;
use crate::store::{ResumeStore, StoreError, StoredResume};
use actix_cors::Cors;
use actix_multipart::{Multipart, MultipartError};
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer, Responder, ResponseError};
use chrono::Utc;
use futures::TryStreamExt;
use resume_core::recommend::{analyze_skill_gap, domain_names};
use resume_core::{parse_resume, FileTextSource, ParseOutcome};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Multipart field carrying the uploaded document
pub const RESUME_FIELD: &str = "resume";

// ============================================================
// APPLICATION STATE
// ============================================================

pub struct AppState {
    pub store: ResumeStore,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self, StoreError> {
        let store = ResumeStore::new(&config.database_path)?;
        Ok(Self { store, config })
    }

    pub fn with_store(store: ResumeStore, config: ServerConfig) -> Self {
        Self { store, config }
    }
}

// ============================================================
// ERRORS
// ============================================================

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("No file uploaded")]
    EmptyUpload,

    #[error("Invalid upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Upload exceeds {0} bytes")]
    TooLarge(usize),

    #[error("Failed to save upload: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("Parser task failed: {0}")]
    Blocking(String),

    #[error("Resume not found")]
    NotFound,

    #[error("Unknown domain: {0}")]
    UnknownDomain(String),
}

impl ResponseError for BackendError {
    fn status_code(&self) -> StatusCode {
        match self {
            BackendError::EmptyUpload | BackendError::Multipart(_) => StatusCode::BAD_REQUEST,
            BackendError::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            BackendError::NotFound | BackendError::UnknownDomain(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        log::warn!("[API] {}", self);
        HttpResponse::build(self.status_code()).json(ApiResponse::<()>::error(&self.to_string()))
    }
}

// ============================================================
// API REQUEST/RESPONSE TYPES
// ============================================================

#[derive(Deserialize)]
pub struct SkillGapRequest {
    pub skills: Vec<String>,
    pub domain: String,
}

#[derive(Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub data: ParseOutcome,
    #[serde(rename = "resumeId")]
    pub resume_id: String,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: &str) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.to_string()),
        }
    }
}

// ============================================================
// API HANDLERS
// ============================================================

async fn api_info() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Resume Parser API",
        "endpoints": {
            "GET /": "API information",
            "GET /health": "Health check",
            "POST /upload": "Upload a resume (multipart field 'resume')",
            "GET /resumes": "List uploaded resumes",
            "GET /resumes/{id}": "Get one uploaded resume",
            "GET /domains": "List career domains",
            "POST /skill-gap": "Compare skills with a career domain"
        },
        "status": "Server is running"
    }))
}

async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "Resume Parser API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Save, parse and record an uploaded document.
///
/// A document that cannot be decoded is still stored; the error is reported
/// in `data` with a 200 status.
async fn upload_resume(
    data: web::Data<Arc<AppState>>,
    mut payload: Multipart,
) -> Result<HttpResponse, BackendError> {
    let (file_name, bytes) = read_resume_field(&mut payload, data.config.max_upload_bytes)
        .await?
        .filter(|(_, bytes)| !bytes.is_empty())
        .ok_or(BackendError::EmptyUpload)?;

    let file_path = save_upload(&data.config.upload_dir, &file_name, &bytes)?;
    log::info!("[API] Saved {} ({} bytes) to {}", file_name, bytes.len(), file_path.display());

    let state = data.get_ref().clone();
    let stored = web::block(move || record_upload(&state.store, &file_name, &file_path))
        .await
        .map_err(|e| BackendError::Blocking(e.to_string()))??;

    let message = if stored.parsed_data.is_error() {
        "Resume uploaded but parsing failed"
    } else {
        "Resume uploaded and parsed successfully!"
    };
    log::info!("[API] {} -> {}", stored.id, message);

    Ok(HttpResponse::Ok().json(UploadResponse {
        success: true,
        message: message.to_string(),
        data: stored.parsed_data,
        resume_id: stored.id,
    }))
}

/// File name and bytes of the first `resume` field; other fields are skipped
async fn read_resume_field(
    payload: &mut Multipart,
    limit: usize,
) -> Result<Option<(String, Vec<u8>)>, BackendError> {
    while let Some(mut field) = payload.try_next().await? {
        let disposition = field.content_disposition();
        if disposition.get_name() != Some(RESUME_FIELD) {
            continue;
        }
        let file_name = disposition.get_filename().unwrap_or("resume.pdf").to_string();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            if bytes.len() + chunk.len() > limit {
                return Err(BackendError::TooLarge(limit));
            }
            bytes.extend_from_slice(&chunk);
        }
        return Ok(Some((file_name, bytes)));
    }
    Ok(None)
}

/// Parse the saved file and persist the outcome. Blocking; the saved file is
/// removed again if it cannot be recorded.
fn record_upload(
    store: &ResumeStore,
    file_name: &str,
    file_path: &Path,
) -> Result<StoredResume, StoreError> {
    let outcome = parse_resume(file_path, &FileTextSource::new());
    let stored = StoredResume::new(file_name, &file_path.display().to_string(), outcome);

    if let Err(e) = store.insert(&stored) {
        log::error!("[API] Failed to record {}: {}", file_path.display(), e);
        if let Err(rm) = fs::remove_file(file_path) {
            log::warn!("[API] Could not remove {}: {}", file_path.display(), rm);
        }
        return Err(e.into());
    }
    Ok(stored)
}

async fn list_resumes(data: web::Data<Arc<AppState>>) -> Result<HttpResponse, BackendError> {
    let resumes = data.store.list()?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(resumes)))
}

async fn get_resume(
    data: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> Result<HttpResponse, BackendError> {
    let resume = data.store.get(&path)?.ok_or(BackendError::NotFound)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(resume)))
}

async fn list_domains() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success(domain_names()))
}

async fn skill_gap(req: web::Json<SkillGapRequest>) -> Result<HttpResponse, BackendError> {
    let analysis = analyze_skill_gap(&req.skills, &req.domain)
        .ok_or_else(|| BackendError::UnknownDomain(req.domain.clone()))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(analysis)))
}

/// Writes `bytes` as `resume-<millis>-<id><ext>`, keeping only the extension
/// of the client-supplied name
fn save_upload(dir: &Path, original_name: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let ext = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
        .unwrap_or_default();

    let id = Uuid::new_v4().simple().to_string();
    let name = format!("resume-{}-{}{}", Utc::now().timestamp_millis(), &id[..8], ext);
    let path = dir.join(name);
    fs::write(&path, bytes)?;
    Ok(path)
}

// ============================================================
// SERVER CONFIGURATION
// ============================================================

/// Register every route; shared by the server and the handler tests
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(api_info))
        .route("/health", web::get().to(health_check))
        .route("/upload", web::post().to(upload_resume))
        .route("/resumes", web::get().to(list_resumes))
        .route("/resumes/{id}", web::get().to(get_resume))
        .route("/domains", web::get().to(list_domains))
        .route("/skill-gap", web::post().to(skill_gap));
}

/// Configure and run the API server
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    fs::create_dir_all(&config.upload_dir)?;
    let state = Arc::new(
        AppState::new(config.clone())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?,
    );

    log::info!("Resume Parser API starting at http://{}:{}", config.host, config.port);
    log::info!("Uploads: {}", config.upload_dir.display());
    log::info!("Database: {}", config.database_path.display());

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    fn test_state(upload_dir: &Path) -> Arc<AppState> {
        let config = ServerConfig {
            upload_dir: upload_dir.to_path_buf(),
            ..ServerConfig::default()
        };
        Arc::new(AppState::with_store(ResumeStore::in_memory().unwrap(), config))
    }

    const BOUNDARY: &str = "resume-test-boundary";

    /// `multipart/form-data` request with a single file field
    fn multipart_upload(field: &str, file_name: &str, contents: &[u8]) -> test::TestRequest {
        let mut body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n",
            b = BOUNDARY,
        )
        .into_bytes();
        body.extend_from_slice(contents);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

        test::TestRequest::post()
            .uri("/upload")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            ))
            .set_payload(body)
    }

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state.clone()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_rt::test]
    async fn test_api_info() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(test_state(dir.path()));

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert!(resp.status().is_success());
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "Server is running");
    }

    #[actix_rt::test]
    async fn test_upload_text_resume() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        let app = test_app!(state);

        let req = multipart_upload(
            "resume",
            "cv.txt",
            b"Sanjay Kumar Rao\r\nsanjay@example.com\r\n9123456780\r\nSQL, Git",
        )
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert!(json["resumeId"].is_string());
        let body: UploadResponse = serde_json::from_value(json).unwrap();
        assert!(body.success);
        assert_eq!(body.message, "Resume uploaded and parsed successfully!");
        let record = body.data.record().expect("record");
        assert_eq!(record.name, "Sanjay Kumar Rao");
        assert_eq!(record.mobile_number.as_deref(), Some("9123456780"));
        assert_eq!(record.skills, vec!["SQL", "Git"]);

        let stored = state.store.get(&body.resume_id).unwrap().unwrap();
        assert_eq!(stored.file_name, "cv.txt");
        assert!(stored.file_path.ends_with(".txt"));
        assert!(Path::new(&stored.file_path).exists());
    }

    #[actix_rt::test]
    async fn test_undecodable_upload_is_stored_with_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        let app = test_app!(state);

        let req = multipart_upload("resume", "scan.pdf", b"definitely not a pdf").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: UploadResponse = test::read_body_json(resp).await;
        assert_eq!(body.message, "Resume uploaded but parsing failed");
        assert!(body.data.is_error());
        assert_eq!(state.store.count().unwrap(), 1);
    }

    #[actix_rt::test]
    async fn test_empty_upload_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        let app = test_app!(state);

        for req in [
            multipart_upload("resume", "cv.pdf", b"").to_request(),
            multipart_upload("attachment", "cv.txt", b"Sanjay Kumar Rao").to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "No file uploaded");
        }
        assert_eq!(state.store.count().unwrap(), 0);
    }

    #[actix_rt::test]
    async fn test_raw_body_upload_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/upload")
            .set_payload("Sanjay Kumar Rao")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.store.count().unwrap(), 0);
    }

    #[actix_rt::test]
    async fn test_oversized_upload_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            upload_dir: dir.path().to_path_buf(),
            max_upload_bytes: 16,
            ..ServerConfig::default()
        };
        let state = Arc::new(AppState::with_store(ResumeStore::in_memory().unwrap(), config));
        let app = test_app!(state);

        let req = multipart_upload("resume", "cv.txt", &[b'a'; 64]).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[actix_rt::test]
    async fn test_failed_insert_removes_saved_file() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("resumes.db");
        let store = ResumeStore::new(&db_path).unwrap();
        rusqlite::Connection::open(&db_path)
            .unwrap()
            .execute_batch("DROP TABLE resume_uploads")
            .unwrap();

        let upload_dir = dir.path().join("uploads");
        let config = ServerConfig {
            upload_dir: upload_dir.clone(),
            ..ServerConfig::default()
        };
        let state = Arc::new(AppState::with_store(store, config));
        let app = test_app!(state);

        let req = multipart_upload("resume", "cv.txt", b"Sanjay Kumar Rao").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(fs::read_dir(&upload_dir).unwrap().count(), 0);
    }

    #[actix_rt::test]
    async fn test_get_unknown_resume() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(test_state(dir.path()));

        let req = test::TestRequest::get().uri("/resumes/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn test_skill_gap_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(test_state(dir.path()));

        let req = test::TestRequest::post()
            .uri("/skill-gap")
            .set_json(serde_json::json!({"skills": ["Python", "SQL"], "domain": "data science"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["domain"], "Data Science");
        assert_eq!(
            body["data"]["missing"],
            serde_json::json!(["Pandas", "Numpy", "Sklearn", "Machine Learning", "Data Science"])
        );

        let req = test::TestRequest::post()
            .uri("/skill-gap")
            .set_json(serde_json::json!({"skills": [], "domain": "Cooking"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn test_save_upload_keeps_only_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_upload(dir.path(), "../../etc/My CV.PDF", b"x").unwrap();

        assert_eq!(path.parent(), Some(dir.path()));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("resume-"));
        assert!(name.ends_with(".pdf"));
    }
}
