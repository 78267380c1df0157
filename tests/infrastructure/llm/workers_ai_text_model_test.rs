use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use narvik::application::ports::{NotesModel, NotesModelError};
use narvik::infrastructure::llm::WorkersAiTextModel;

const ACCOUNT_ID: &str = "acc-123";
const MODEL: &str = "@cf/meta/llama-3-8b-instruct";
const MODEL_PATH: &str = "/accounts/acc-123/ai/run/@cf/meta/llama-3-8b-instruct";

async fn start_mock_gateway(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let app = Router::new().route(
        MODEL_PATH,
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );
    start_server(app).await
}

async fn start_server(app: Router) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

#[tokio::test]
async fn given_successful_envelope_when_generating_then_returns_response_text() {
    let response_body =
        r###"{"result": {"response": "## Summary\nShort notes"}, "success": true, "errors": []}"###;
    let (base_url, shutdown_tx) = start_mock_gateway(200, response_body).await;

    let model = WorkersAiTextModel::new(&base_url, ACCOUNT_ID, "test-token", MODEL);
    let result = model.generate("summarize this").await;

    assert_eq!(result.unwrap(), "## Summary\nShort notes");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_prompt_when_generating_then_sends_it_verbatim_with_bearer_token() {
    let captured: Arc<Mutex<Option<(axum::http::HeaderMap, Value)>>> = Arc::new(Mutex::new(None));
    let captured_in_handler = captured.clone();

    let app = Router::new().route(
        MODEL_PATH,
        post(
            move |headers: axum::http::HeaderMap, Json(body): Json<Value>| {
                let captured = captured_in_handler.clone();
                async move {
                    *captured.lock().unwrap() = Some((headers, body));
                    Json(json!({"result": {"response": "ok"}, "success": true, "errors": []}))
                }
            },
        ),
    );
    let (base_url, shutdown_tx) = start_server(app).await;

    let model = WorkersAiTextModel::new(&base_url, ACCOUNT_ID, "secret-token", MODEL);
    model
        .generate("You are an expert note-taker.")
        .await
        .unwrap();

    let (headers, body) = captured.lock().unwrap().take().unwrap();
    assert_eq!(
        headers.get("authorization").unwrap().to_str().unwrap(),
        "Bearer secret-token"
    );
    assert_eq!(
        body["prompt"].as_str().unwrap(),
        "You are an expert note-taker."
    );
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limit_status_when_generating_then_returns_rate_limited() {
    let response_body = r#"{"errors": [{"message": "rate limited"}], "success": false}"#;
    let (base_url, shutdown_tx) = start_mock_gateway(429, response_body).await;

    let model = WorkersAiTextModel::new(&base_url, ACCOUNT_ID, "test-token", MODEL);
    let result = model.generate("prompt").await;

    assert!(matches!(result, Err(NotesModelError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_status_when_generating_then_returns_api_error() {
    let (base_url, shutdown_tx) = start_mock_gateway(500, "internal error").await;

    let model = WorkersAiTextModel::new(&base_url, ACCOUNT_ID, "test-token", MODEL);
    let result = model.generate("prompt").await;

    assert!(matches!(result, Err(NotesModelError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unsuccessful_envelope_when_generating_then_returns_api_error_with_message() {
    let response_body =
        r#"{"result": null, "success": false, "errors": [{"message": "capacity exceeded"}]}"#;
    let (base_url, shutdown_tx) = start_mock_gateway(200, response_body).await;

    let model = WorkersAiTextModel::new(&base_url, ACCOUNT_ID, "test-token", MODEL);
    let result = model.generate("prompt").await;

    match result {
        Err(NotesModelError::ApiRequestFailed(message)) => {
            assert!(message.contains("capacity exceeded"));
        }
        other => panic!("expected ApiRequestFailed, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_envelope_without_response_when_generating_then_returns_invalid_response() {
    let response_body = r#"{"result": {}, "success": true, "errors": []}"#;
    let (base_url, shutdown_tx) = start_mock_gateway(200, response_body).await;

    let model = WorkersAiTextModel::new(&base_url, ACCOUNT_ID, "test-token", MODEL);
    let result = model.generate("prompt").await;

    assert!(matches!(result, Err(NotesModelError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}
