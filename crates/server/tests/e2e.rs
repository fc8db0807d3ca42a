use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use service::users::{InMemoryUserStore, UserRepository};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use server::startup::{build_app, serve};

struct TestApp {
    base_url: String,
    store: Arc<InMemoryUserStore>,
    stop: oneshot::Sender<()>,
    handle: JoinHandle<anyhow::Result<()>>,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let store = InMemoryUserStore::shared();
    let app = build_app(store.clone());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    let (stop, stopped) = oneshot::channel::<()>();
    let handle = tokio::spawn(serve(listener, app, async move {
        let _ = stopped.await;
    }));

    Ok(TestApp { base_url, store, stop, handle })
}

#[tokio::test]
async fn e2e_users_over_http() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(format!("{}/users", app.base_url)).json(&json!({"name": "alice"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    assert_eq!(res.json::<serde_json::Value>().await?, json!({"id": 1, "name": "alice"}));

    let res = c.put(format!("{}/users/1", app.base_url)).json(&json!({"name": "alicia"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    // the HTTP layer and the store handle see the same state
    assert_eq!(app.store.get(1).await?.name, "alicia");

    let res = c.get(format!("{}/users/abc", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c.delete(format!("{}/users/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c.get(format!("{}/users/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c.get(format!("{}/health", app.base_url)).send().await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["users"], 0);

    let _ = app.stop.send(());
    app.handle.await??;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn e2e_parallel_creates_receive_unique_ids() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let mut tasks = Vec::new();
    for i in 0..32 {
        let c = c.clone();
        let url = format!("{}/users", app.base_url);
        tasks.push(tokio::spawn(async move {
            let res = c.post(url).json(&json!({"name": format!("user-{i}")})).send().await?;
            let body = res.json::<serde_json::Value>().await?;
            body["id"].as_i64().ok_or_else(|| anyhow::anyhow!("missing id in {body}"))
        }));
    }

    let mut ids = Vec::new();
    for t in tasks {
        ids.push(t.await??);
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=32).collect::<Vec<i64>>());

    let res = c.get(format!("{}/users/", app.base_url)).send().await?;
    let listed = res.json::<Vec<serde_json::Value>>().await?;
    assert_eq!(listed.len(), 32);

    let _ = app.stop.send(());
    app.handle.await??;
    Ok(())
}
