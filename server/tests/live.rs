//! The server on a real ephemeral port, exercised over HTTP with ureq.

use flickfinder_core::{seed, Movie, Person};
use tokio::sync::oneshot;

fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

fn fetch(agent: &ureq::Agent, url: &str) -> (u16, String) {
    let mut response = agent.get(url).call().expect("HTTP transport error");
    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();
    (status, body)
}

#[test]
fn serves_requests_then_shuts_down() {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            let db = seed::in_memory().unwrap();
            flickfinder_server::run_until(listener, db, async move {
                let _ = stop_rx.await;
            })
            .await
        })
    });

    let base = format!("http://{addr}");
    let agent = agent();

    let (status, body) = fetch(&agent, &format!("{base}/movies/1"));
    assert_eq!(status, 200);
    let movie: Movie = serde_json::from_str(&body).unwrap();
    assert_eq!(movie, Movie::new(1, "The Shawshank Redemption", 1994));

    let (status, body) = fetch(&agent, &format!("{base}/movies/1/stars"));
    assert_eq!(status, 200);
    let people: Vec<Person> = serde_json::from_str(&body).unwrap();
    assert_eq!(people.len(), 2);

    let (status, body) = fetch(&agent, &format!("{base}/movies?limit=abc"));
    assert_eq!(status, 400);
    assert_eq!(body, "Invalid limit parameter");

    let (status, body) = fetch(&agent, &format!("{base}/people/9999"));
    assert_eq!(status, 404);
    assert_eq!(body, "Person not found");

    drop(agent);
    stop_tx.send(()).unwrap();
    server.join().unwrap().unwrap();
}
