use std::net::SocketAddr;

use reqwest::Client;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tempfile::TempDir;

use propbowl::config::{AppConfig, AuthConfig, DatabaseConfig, ServerConfig};
use propbowl::state::AppState;

/// Admin password configured for every test server.
pub const ADMIN_PASSWORD: &str = "test-admin-password";

pub mod routes {
    pub const HOME: &str = "/";
    pub const PROP_SHEET: &str = "/prop-sheet";
    pub const ENTRIES: &str = "/entries";
    pub const STANDINGS: &str = "/standings";
    pub const API_STANDINGS: &str = "/api/standings";
    pub const ADMIN: &str = "/admin";
    pub const ADMIN_LOGIN: &str = "/admin/login";
    pub const ADMIN_LOGOUT: &str = "/admin/logout";
    pub const ADMIN_SETTINGS: &str = "/admin/settings";
    pub const ADMIN_PROPS: &str = "/admin/props";
    pub const ADMIN_ENTRIES: &str = "/admin/entries";

    pub fn entry(id: i32) -> String {
        format!("/entry/{id}")
    }

    pub fn admin_prop(id: i32) -> String {
        format!("/admin/props/{id}")
    }

    pub fn admin_prop_move(id: i32, direction: &str) -> String {
        format!("/admin/props/{id}/move/{direction}")
    }

    pub fn admin_prop_resolve(id: i32) -> String {
        format!("/admin/props/{id}/resolve")
    }

    pub fn admin_entry(id: i32) -> String {
        format!("/admin/entries/{id}")
    }
}

/// A running test server backed by a throwaway SQLite database.
///
/// The client carries a cookie store, so `login_admin` authenticates all
/// later requests from the same `TestApp`.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DatabaseConnection,
    _db_dir: TempDir,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestResponse {
    async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.expect("Failed to read response body");
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    pub fn id(&self) -> i32 {
        self.body["id"].as_i64().expect("response has no id") as i32
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = format!(
            "sqlite://{}?mode=rwc",
            db_dir.path().join("propbowl-test.db").display()
        );

        let db = propbowl::database::init_db(&db_url)
            .await
            .expect("Failed to initialize test database");
        propbowl::seed::ensure_settings(&db)
            .await
            .expect("Failed to seed settings");

        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: DatabaseConfig { url: db_url },
            auth: AuthConfig {
                admin_password: ADMIN_PASSWORD.to_string(),
                session_secret: "test-session-secret".to_string(),
            },
        };

        let state = AppState {
            db: db.clone(),
            config,
        };
        let app = propbowl::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::builder()
                .cookie_store(true)
                .build()
                .expect("Failed to build client"),
            db,
            _db_dir: db_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");
        TestResponse::from_response(res).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");
        TestResponse::from_response(res).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send PUT request");
        TestResponse::from_response(res).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to send DELETE request");
        TestResponse::from_response(res).await
    }

    /// Authenticate the client's cookie store as admin.
    pub async fn login_admin(&self) {
        let res = self
            .post(routes::ADMIN_LOGIN, &json!({"password": ADMIN_PASSWORD}))
            .await;
        assert_eq!(res.status, 200, "admin login failed: {}", res.text);
    }

    /// Create a prop with the given answers (requires an admin session).
    /// Returns the prop id and the answer ids in payload order.
    pub async fn create_prop(&self, question: &str, answers: &[(&str, i64)]) -> (i32, Vec<i32>) {
        let body = json!({
            "question": question,
            "answers": answers
                .iter()
                .map(|(text, points)| json!({"text": text, "points": points}))
                .collect::<Vec<_>>(),
        });
        let res = self.post(routes::ADMIN_PROPS, &body).await;
        assert_eq!(res.status, 201, "create_prop failed: {}", res.text);

        let answer_ids = res.body["answers"]
            .as_array()
            .expect("prop has no answers")
            .iter()
            .map(|a| a["id"].as_i64().unwrap() as i32)
            .collect();
        (res.id(), answer_ids)
    }

    /// Submit an entry with the given picks via the public sheet.
    pub async fn submit_entry(&self, name: &str, picks: &[(i32, i32)]) -> i32 {
        let body = json!({
            "name": name,
            "picks": picks
                .iter()
                .map(|(prop_id, answer_id)| json!({"prop_id": prop_id, "answer_id": answer_id}))
                .collect::<Vec<_>>(),
        });
        let res = self.post(routes::PROP_SHEET, &body).await;
        assert_eq!(res.status, 201, "submit_entry failed: {}", res.text);
        res.id()
    }

    /// Apply a settings action (requires an admin session).
    pub async fn settings_action(&self, action: &str) -> TestResponse {
        self.post(routes::ADMIN_SETTINGS, &json!({"action": action}))
            .await
    }

    /// Resolve a prop to the given answer (requires an admin session).
    pub async fn resolve_prop(&self, prop_id: i32, answer_id: Option<i32>) {
        let res = self
            .post(
                &routes::admin_prop_resolve(prop_id),
                &json!({"answer_id": answer_id}),
            )
            .await;
        assert_eq!(res.status, 200, "resolve_prop failed: {}", res.text);
    }
}
