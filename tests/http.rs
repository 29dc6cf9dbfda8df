use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct DayResponse {
    date: String,
    persisted: bool,
    score: f64,
    categories: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct PeriodRow {
    label: String,
    days: u32,
    total_time: u64,
    avg_score: f64,
    scored_days: u32,
}

#[derive(Debug, Deserialize)]
struct StatsResponse {
    rows: Vec<PeriodRow>,
}

#[derive(Debug, Deserialize)]
struct Goal {
    id: String,
    current: f64,
    history: Vec<GoalUpdate>,
}

#[derive(Debug, Deserialize)]
struct GoalUpdate {
    delta: f64,
    value: f64,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("day_tracker_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/settings")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_day_tracker"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn fetch_day(client: &Client, base_url: &str, date: &str) -> DayResponse {
    client
        .get(format!("{base_url}/api/day/{date}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_unsaved_day_serves_template() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let day = fetch_day(&client, &server.base_url, "2026-03-02").await;

    assert_eq!(day.date, "2026-03-02");
    assert!(!day.persisted);
    assert_eq!(day.score, 0.0);
    assert!(!day.categories.is_empty());
    assert_eq!(day.categories[0]["id"], "morning");
}

#[tokio::test]
async fn http_save_day_scores_and_reset_reverts() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let mut day = fetch_day(&client, &server.base_url, "2026-03-10").await;
    assert!(!day.persisted);

    // All three morning checkboxes done (100) plus 60 of 120 focus minutes
    // (50) over four activity categories: round((100 + 50 + 0 + 0) / 4) = 38.
    for task in day.categories[0]["tasks"].as_array_mut().unwrap() {
        task["completed"] = json!(true);
    }
    day.categories[1]["tasks"][0]["value"] = json!(60);

    let saved: DayResponse = client
        .put(format!("{}/api/day/2026-03-10", server.base_url))
        .json(&json!({ "categories": day.categories }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(saved.persisted);
    assert_eq!(saved.score, 38.0);

    let reloaded = fetch_day(&client, &server.base_url, "2026-03-10").await;
    assert!(reloaded.persisted);
    assert_eq!(reloaded.score, 38.0);

    let reset: DayResponse = client
        .delete(format!("{}/api/day/2026-03-10", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!reset.persisted);
    assert_eq!(reset.score, 0.0);
}

#[tokio::test]
async fn http_weekly_stats_sum_saved_time() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    // 2026-06-01 through 2026-06-03 share ISO week 23.
    for (date, minutes) in [("2026-06-01", 30), ("2026-06-02", 45), ("2026-06-03", 0)] {
        let mut day = fetch_day(&client, &server.base_url, date).await;
        day.categories[1]["tasks"][0]["value"] = json!(minutes);
        let resp = client
            .put(format!("{}/api/day/{date}", server.base_url))
            .json(&json!({ "categories": day.categories }))
            .send()
            .await
            .unwrap();
        assert!(resp.status().is_success());
    }

    let stats: StatsResponse = client
        .get(format!("{}/api/stats?mode=weekly", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let week = stats
        .rows
        .iter()
        .find(|row| row.label == "Week 23")
        .expect("missing weekly bucket");
    assert_eq!(week.days, 3);
    assert_eq!(week.total_time, 75);
    // 30/120 and 45/120 focus minutes score round(25/4)=6 and round(38/4)=10;
    // the zero-minute day drops out of the average.
    assert_eq!(week.scored_days, 2);
    assert_eq!(week.avg_score, 8.0);
}

#[tokio::test]
async fn http_settings_roundtrip_and_validation() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let original: Value = client
        .get(format!("{}/api/settings", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let mut updated = original.clone();
    updated["calorie_target"] = json!(1500);
    let resp = client
        .put(format!("{}/api/settings", server.base_url))
        .json(&updated)
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());

    let reloaded: Value = client
        .get(format!("{}/api/settings", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reloaded["calorie_target"], 1500);

    let mut invalid = original.clone();
    invalid["start_date"] = json!("not-a-date");
    let resp = client
        .put(format!("{}/api/settings", server.base_url))
        .json(&invalid)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    // Put the defaults back so other tests keep their targets.
    let resp = client
        .put(format!("{}/api/settings", server.base_url))
        .json(&original)
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
}

#[tokio::test]
async fn http_goal_lifecycle_records_history() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let goal: Goal = client
        .post(format!("{}/api/goals", server.base_url))
        .json(&json!({
            "name": "Read books",
            "target": 24.0,
            "unit": "books",
            "category": "mind"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!goal.id.is_empty());
    assert_eq!(goal.current, 0.0);

    let after_first: Goal = client
        .post(format!("{}/api/goals/{}/progress", server.base_url, goal.id))
        .json(&json!({ "value": 3.0 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after_first.current, 3.0);
    assert_eq!(after_first.history.len(), 1);
    assert_eq!(after_first.history[0].delta, 3.0);
    assert_eq!(after_first.history[0].value, 3.0);

    let after_second: Goal = client
        .post(format!("{}/api/goals/{}/progress", server.base_url, goal.id))
        .json(&json!({ "value": 5.0 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after_second.history.len(), 2);
    assert_eq!(after_second.history[1].delta, 2.0);

    let resp = client
        .delete(format!("{}/api/goals/{}", server.base_url, goal.id))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());

    let resp = client
        .delete(format!("{}/api/goals/{}", server.base_url, goal.id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_rejects_malformed_input() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let resp = client
        .get(format!("{}/api/day/not-a-date", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    let resp = client
        .get(format!("{}/api/stats?mode=hourly", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
}
