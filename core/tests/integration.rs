//! Full CRUD lifecycle test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every core client
//! operation over real HTTP using ureq. Validates that the core's request
//! building and response parsing work end-to-end with the actual server.

use list_core::{ApiError, ContentChange, HttpMethod, HttpResponse, ItemRef, ListClient, NewItem};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: list_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
        (HttpMethod::Delete, Some(body)) => agent
            .delete(&req.path)
            .force_send_body()
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Delete, None) => agent.delete(&req.path).call(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn new_item(content: &str) -> NewItem {
    NewItem {
        content: content.to_string(),
    }
}

#[test]
fn crud_lifecycle() {
    // Step 1: start mock server on a random port.
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    let client = ListClient::new(&format!("http://{addr}"));

    // Step 2: list — should be empty.
    let req = client.build_fetch_items();
    let items = client.parse_fetch_items(execute(req)).unwrap();
    assert!(items.is_empty(), "expected empty list");

    // Step 3: total — should be zero.
    let req = client.build_fetch_total();
    let total = client.parse_fetch_total(execute(req)).unwrap();
    assert_eq!(total.total, 0);

    // Step 4: create three items, two sharing the same content.
    for content in ["milk", "eggs", "eggs"] {
        let req = client.build_create_item(&new_item(content)).unwrap();
        client.parse_create_item(execute(req)).unwrap();
    }

    // Step 5: list — insertion order preserved, duplicates kept.
    let req = client.build_fetch_items();
    let items = client.parse_fetch_items(execute(req)).unwrap();
    let contents: Vec<&str> = items.iter().map(|i| i.content.as_str()).collect();
    assert_eq!(contents, ["milk", "eggs", "eggs"]);

    // Step 6: total agrees with the list length.
    let req = client.build_fetch_total();
    let total = client.parse_fetch_total(execute(req)).unwrap();
    assert_eq!(total.total, 3);

    // Step 7: update by content — every duplicate is rewritten.
    let change = ContentChange {
        old_content: "eggs".to_string(),
        new_content: "spinach".to_string(),
    };
    let req = client.build_update_item(&change).unwrap();
    client.parse_update_item(execute(req)).unwrap();

    let req = client.build_fetch_items();
    let items = client.parse_fetch_items(execute(req)).unwrap();
    let contents: Vec<&str> = items.iter().map(|i| i.content.as_str()).collect();
    assert_eq!(contents, ["milk", "spinach", "spinach"]);

    // Step 8: delete by content — every match is removed.
    let target = ItemRef {
        content: "spinach".to_string(),
    };
    let req = client.build_delete_item(&target).unwrap();
    client.parse_delete_item(execute(req)).unwrap();

    let req = client.build_fetch_items();
    let items = client.parse_fetch_items(execute(req)).unwrap();
    let contents: Vec<&str> = items.iter().map(|i| i.content.as_str()).collect();
    assert_eq!(contents, ["milk"]);

    // Step 9: deleting unknown content is still a success for this service.
    let missing = ItemRef {
        content: "nope".to_string(),
    };
    let req = client.build_delete_item(&missing).unwrap();
    client.parse_delete_item(execute(req)).unwrap();

    // Step 10: total after deletions.
    let req = client.build_fetch_total();
    let total = client.parse_fetch_total(execute(req)).unwrap();
    assert_eq!(total.total, 1);

    // Step 11: an unknown route surfaces as a Status error.
    let bad_client = ListClient::new(&format!("http://{addr}/nope"));
    let req = bad_client.build_fetch_items();
    let err = bad_client.parse_fetch_items(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, .. }));
}
