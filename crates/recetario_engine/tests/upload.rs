use url::Url;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use recetario_engine::{ApiSettings, CatalogApi, ErrorKind, PdfUpload, ReqwestCatalogApi};

fn api_for(server: &MockServer) -> ReqwestCatalogApi {
    let base_url = Url::parse(&server.uri()).expect("server uri");
    ReqwestCatalogApi::new(ApiSettings::new(base_url)).expect("client")
}

fn sample_upload() -> PdfUpload {
    PdfUpload {
        title: "Tarta fit".to_string(),
        description: "sin azúcar".to_string(),
        file_name: "tarta.pdf".to_string(),
        bytes: b"%PDF-1.4 contenido".to_vec(),
    }
}

#[tokio::test]
async fn upload_sends_all_three_multipart_parts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/pdfs"))
        .and(body_string_contains(r#"name="title""#))
        .and(body_string_contains("Tarta fit"))
        .and(body_string_contains(r#"name="description""#))
        .and(body_string_contains("sin azúcar"))
        .and(body_string_contains(r#"name="file""#))
        .and(body_string_contains(r#"filename="tarta.pdf""#))
        .and(body_string_contains("application/pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"id":11,"title":"Tarta fit","description":"sin azúcar","filename":"tarta.pdf"}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let receipt = api_for(&server)
        .upload_pdf(sample_upload())
        .await
        .expect("upload ok");

    assert_eq!(receipt.body["id"], 11);
}

#[tokio::test]
async fn upload_sends_empty_description_part() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/pdfs"))
        .and(body_string_contains(r#"name="description""#))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"id":12}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let upload = PdfUpload {
        description: String::new(),
        ..sample_upload()
    };
    api_for(&server).upload_pdf(upload).await.expect("upload ok");
}

#[tokio::test]
async fn upload_fails_on_server_error_after_exactly_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/pdfs"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = api_for(&server).upload_pdf(sample_upload()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Status(500));
}

#[tokio::test]
async fn upload_requires_a_parseable_confirmation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/pdfs"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("created", "text/plain"))
        .mount(&server)
        .await;

    let err = api_for(&server).upload_pdf(sample_upload()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Decode);
}
