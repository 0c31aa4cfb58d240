use crate::harness::config::patch_listen;
use crate::harness::tracing::EventSink;
use crate::harness::{CapturedEvent, init_test_tracing};
use gstscope_core::client::{GstscopeClient, PollPolicy};
use gstscope_core::conf::load_config;
use gstscope_core::server::{build_api_handler, build_pingora_server};
use reqwest::blocking::{Client, RequestBuilder};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};
use std::thread;
use std::time::{Duration, Instant};

/// Handle to a running gstscope test server.
pub struct TestServer {
    base_url: String,
    client: Client,
}

impl TestServer {
    /// Boot gstscope from `fixtures/config/<fixture>` on a fresh port.
    pub fn start(fixture: &str) -> Self {
        init_test_tracing(events());

        let listen_port = free_port();

        let fixture_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join("config")
            .join(fixture);

        assert!(
            fixture_dir.exists(),
            "fixture config directory does not exist: {:?}",
            fixture_dir
        );

        let cfg = load_config(&fixture_dir).expect("failed to load fixture config");
        let cfg = patch_listen(cfg, listen_port);

        let handler = Arc::new(build_api_handler(&cfg));
        let server = build_pingora_server(&cfg, handler).expect("failed to build gstscope server");

        thread::spawn(move || server.run_forever());

        let base_url = format!("http://127.0.0.1:{listen_port}");
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("failed to build client");
        wait_for_health(&client, &base_url);

        Self { base_url, client }
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(format!("{}{}", self.base_url, path))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(format!("{}{}", self.base_url, path))
    }

    /// An API client with a short readiness schedule.
    pub fn api(&self) -> GstscopeClient {
        let policy = PollPolicy {
            max_attempts: 50,
            delay: Duration::from_millis(50),
        };
        GstscopeClient::with_policy(&self.base_url, policy).expect("failed to build api client")
    }

    /// Upload a fixture log and wait until its session is ready.
    pub fn ready_session(&self, log: &str) -> String {
        let api = self.api();
        let session_id = api.upload(fixture_log(log)).expect("upload failed");
        api.wait_until_ready(&session_id)
            .expect("session never became ready");
        session_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Events captured so far whose message equals `message`.
    pub fn events_named(&self, message: &str) -> Vec<CapturedEvent> {
        events()
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.message() == Some(message))
            .cloned()
            .collect()
    }
}

pub fn fixture_log(name: &str) -> Vec<u8> {
    let path: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("logs")
        .join(name);
    std::fs::read(&path).unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}

/// Block until `/api/health` answers 200.
fn wait_for_health(client: &Client, base_url: &str) {
    let url = format!("{base_url}/api/health");
    let deadline = Instant::now() + HEALTH_DEADLINE;

    while Instant::now() < deadline {
        let healthy = client
            .get(&url)
            .send()
            .map(|resp| resp.status().is_success())
            .unwrap_or(false);
        if healthy {
            return;
        }
        thread::sleep(Duration::from_millis(25));
    }
    panic!("gstscope did not become healthy at {base_url}");
}

const HEALTH_DEADLINE: Duration = Duration::from_secs(5);

static EVENTS: OnceLock<EventSink> = OnceLock::new();

fn events() -> EventSink {
    EVENTS
        .get_or_init(|| Arc::new(Mutex::new(Vec::new())))
        .clone()
}

/// Ask the OS for an unused localhost port.
fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("no free port");
    listener.local_addr().expect("listener has no address").port()
}
