use actix_web::{test, web, App};
use resume_backend::store::ResumeStore;
use resume_backend::{configure_routes, AppState, ServerConfig};
use std::sync::Arc;

fn multipart_upload(file_name: &str, contents: &str) -> test::TestRequest {
    let body = format!(
        "--XBOUND\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"{}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n{}\r\n--XBOUND--\r\n",
        file_name, contents
    );
    test::TestRequest::post()
        .uri("/upload")
        .insert_header(("content-type", "multipart/form-data; boundary=XBOUND"))
        .set_payload(body)
}

#[actix_rt::test]
async fn test_upload_then_browse() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        upload_dir: dir.path().join("uploads"),
        ..ServerConfig::default()
    };
    let state = Arc::new(AppState::with_store(ResumeStore::in_memory().unwrap(), config));
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes),
    )
    .await;

    // Two uploads: one parses, one does not
    for (name, payload) in [
        ("first.md", "Leena Thomas\r\nleena.thomas@example.net\r\nReact and CSS"),
        ("second.pdf", "garbage bytes"),
    ] {
        let req = multipart_upload(name, payload).to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    let req = test::TestRequest::get().uri("/resumes").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let resumes = body["data"].as_array().unwrap();
    assert_eq!(resumes.len(), 2);

    let parsed = resumes
        .iter()
        .find(|r| r["file_name"] == "first.md")
        .expect("markdown upload listed");
    assert_eq!(parsed["parsed_data"]["name"], "Leena Thomas");
    assert_eq!(parsed["parsed_data"]["skills"], serde_json::json!(["CSS", "React"]));

    let failed = resumes
        .iter()
        .find(|r| r["file_name"] == "second.pdf")
        .expect("pdf upload listed");
    assert!(failed["parsed_data"]["error"].is_string());

    let id = parsed["id"].as_str().unwrap();
    let req = test::TestRequest::get().uri(&format!("/resumes/{}", id)).to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["parsed_data"]["email"], "leena.thomas@example.net");

    assert!(dir.path().join("uploads").read_dir().unwrap().count() == 2);
}
