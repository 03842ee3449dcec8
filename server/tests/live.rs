//! Round trip over a real socket.
//!
//! Starts the server on a random port with the sample todos, then drives it
//! with ureq the way an external client would.

use serde_json::Value;
use todo_core::TodoStore;
use todo_server::SAMPLE_TASKS;

struct Reply {
    status: u16,
    body: Value,
}

fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

fn read(mut response: ureq::http::Response<ureq::Body>) -> Reply {
    let status = response.status().as_u16();
    let text = response.body_mut().read_to_string().unwrap_or_default();
    Reply {
        status,
        body: serde_json::from_str(&text).unwrap_or(Value::Null),
    }
}

fn start_server() -> String {
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
            todo_server::run(listener, TodoStore::with_tasks(SAMPLE_TASKS)).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn seeded_server_over_http() {
    let base = start_server();
    let agent = agent();

    let health = read(agent.get(format!("{base}/health")).call().unwrap());
    assert_eq!(health.status, 200);
    assert_eq!(health.body["data"]["total"], 3);

    let list = read(agent.get(format!("{base}/todos")).call().unwrap());
    assert_eq!(list.status, 200);
    assert_eq!(list.body["data"][0]["task"], "Learn Rust");

    let created = read(
        agent
            .post(format!("{base}/todos"))
            .content_type("application/json")
            .send(r#"{"task":"Ship it"}"#.as_bytes())
            .unwrap(),
    );
    assert_eq!(created.status, 201);
    assert_eq!(created.body["data"]["id"], 4);

    let updated = read(
        agent
            .put(format!("{base}/todos/4"))
            .content_type("application/json")
            .send(r#"{"complete":true}"#.as_bytes())
            .unwrap(),
    );
    assert_eq!(updated.status, 200);
    assert_eq!(updated.body["data"]["complete"], true);

    let again = read(
        agent
            .post(format!("{base}/todos/4/complete"))
            .send_empty()
            .unwrap(),
    );
    assert_eq!(again.status, 400);

    let deleted = read(agent.delete(format!("{base}/todos/4")).call().unwrap());
    assert_eq!(deleted.status, 200);

    let missing = read(agent.get(format!("{base}/todos/4")).call().unwrap());
    assert_eq!(missing.status, 404);
    assert_eq!(missing.body["success"], false);
}
