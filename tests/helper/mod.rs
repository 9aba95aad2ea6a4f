//! Shared plumbing for end-to-end tests driving `LspService` directly
#![allow(dead_code)]

use std::time::Duration;

use futures::StreamExt;
use serde_json::{Value, json};
use tokio::sync::mpsc;
use tower::Service;
use tower_lsp::jsonrpc::Request;
use tower_lsp::lsp_types::{GotoDefinitionResponse, LocationLink, PublishDiagnosticsParams};
use tower_lsp::{ClientSocket, LspService};

use jref_lsp::lsp::backend::Backend;

const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(5);

pub fn create_initialize_request(id: i64) -> Request {
    Request::build("initialize")
        .id(id)
        .params(json!({
            "processId": null,
            "rootUri": null,
            "capabilities": {}
        }))
        .finish()
}

pub fn create_initialized_notification() -> Request {
    Request::build("initialized").params(json!({})).finish()
}

pub fn create_did_open_notification(uri: &str, text: &str) -> Request {
    Request::build("textDocument/didOpen")
        .params(json!({
            "textDocument": {
                "uri": uri,
                "languageId": "jref",
                "version": 1,
                "text": text
            }
        }))
        .finish()
}

pub fn create_did_change_notification(uri: &str, version: i32, changes: Value) -> Request {
    Request::build("textDocument/didChange")
        .params(json!({
            "textDocument": { "uri": uri, "version": version },
            "contentChanges": changes
        }))
        .finish()
}

pub fn create_did_close_notification(uri: &str) -> Request {
    Request::build("textDocument/didClose")
        .params(json!({ "textDocument": { "uri": uri } }))
        .finish()
}

pub fn create_definition_request(id: i64, uri: &str, line: u32, character: u32) -> Request {
    Request::build("textDocument/definition")
        .id(id)
        .params(json!({
            "textDocument": { "uri": uri },
            "position": { "line": line, "character": character }
        }))
        .finish()
}

/// Drains everything the server sends to the client into a channel.
pub fn spawn_notification_collector(mut socket: ClientSocket) -> mpsc::UnboundedReceiver<Request> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Some(request) = socket.next().await {
            if tx.send(request).is_err() {
                break;
            }
        }
    });

    rx
}

pub async fn wait_for_notification(
    rx: &mut mpsc::UnboundedReceiver<Request>,
    method: &str,
) -> Option<Request> {
    tokio::time::timeout(NOTIFICATION_TIMEOUT, async {
        while let Some(request) = rx.recv().await {
            if request.method() == method {
                return Some(request);
            }
        }
        None
    })
    .await
    .ok()
    .flatten()
}

pub async fn wait_for_diagnostics(
    rx: &mut mpsc::UnboundedReceiver<Request>,
) -> PublishDiagnosticsParams {
    let notification = wait_for_notification(rx, "textDocument/publishDiagnostics")
        .await
        .expect("Expected publishDiagnostics notification");
    serde_json::from_value(notification.params().unwrap().clone()).unwrap()
}

/// Builds an initialized service and the receiver of its client traffic.
pub async fn start_server() -> (LspService<Backend>, mpsc::UnboundedReceiver<Request>) {
    let (mut service, socket) = LspService::new(Backend::new);
    let notification_rx = spawn_notification_collector(socket);

    service.call(create_initialize_request(1)).await.unwrap();
    service
        .call(create_initialized_notification())
        .await
        .unwrap();

    (service, notification_rx)
}

pub async fn open_document(
    service: &mut LspService<Backend>,
    rx: &mut mpsc::UnboundedReceiver<Request>,
    uri: &str,
    text: &str,
) -> PublishDiagnosticsParams {
    service
        .call(create_did_open_notification(uri, text))
        .await
        .unwrap();
    wait_for_diagnostics(rx).await
}

pub async fn request_definition(
    service: &mut LspService<Backend>,
    id: i64,
    uri: &str,
    line: u32,
    character: u32,
) -> Option<LocationLink> {
    let response = service
        .call(create_definition_request(id, uri, line, character))
        .await
        .unwrap()
        .expect("Expected a response to textDocument/definition");

    let result: Option<GotoDefinitionResponse> =
        serde_json::from_value(response.result().unwrap().clone()).unwrap();

    match result {
        None => None,
        Some(GotoDefinitionResponse::Link(mut links)) => {
            assert_eq!(links.len(), 1);
            links.pop()
        }
        Some(other) => panic!("Expected location links, got {:?}", other),
    }
}
