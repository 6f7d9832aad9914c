//! Shared harness: an app over the in-memory store with a temp asset
//! directory and a known operator account.

use std::path::PathBuf;
use std::sync::Arc;

use axum_test::TestServer;
use carta_core::auth::hash_password;
use carta_core::{
    CatalogDatabase, LocalAssetStore, OperatorCredentials, SessionGate,
};
use carta_server::infra::config::{
    AssetConfig, AuthConfig, Config, DatabaseConfig, ServerConfig,
};
use carta_server::{AppState, create_app};
use tempfile::TempDir;

pub const OPERATOR_EMAIL: &str = "operator@bahce.example";
pub const OPERATOR_PASSWORD: &str = "very-secret";

pub struct TestApp {
    pub server: TestServer,
    pub db: CatalogDatabase,
    pub asset_dir: TempDir,
}

pub fn test_config(asset_dir: PathBuf, password_hash: String) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            public_base_url: "http://localhost:3000".to_string(),
        },
        database: DatabaseConfig {
            url: "postgres://unused-in-tests".to_string(),
        },
        assets: AssetConfig { dir: asset_dir },
        auth: AuthConfig {
            operator_email: OPERATOR_EMAIL.to_string(),
            operator_password_hash: password_hash,
            session_ttl_hours: 24,
        },
    }
}

pub fn spawn_app() -> TestApp {
    let asset_dir = TempDir::new().expect("temp asset dir");
    let password_hash = hash_password(OPERATOR_PASSWORD).expect("hash");
    let config = test_config(asset_dir.path().to_path_buf(), password_hash.clone());

    let db = CatalogDatabase::in_memory();
    let assets = Arc::new(LocalAssetStore::new(
        asset_dir.path().to_path_buf(),
        config.server.public_base_url.clone(),
    ));
    let gate = Arc::new(SessionGate::new(OperatorCredentials {
        email: OPERATOR_EMAIL.to_string(),
        password_hash,
    }));

    let state = AppState::new(db.clone(), assets, gate, Arc::new(config));
    let server = TestServer::new(create_app(state)).expect("test server");

    TestApp {
        server,
        db,
        asset_dir,
    }
}

pub async fn login(server: &TestServer) -> String {
    let response = server
        .post("/api/v1/auth/login")
        .json(&serde_json::json!({
            "email": OPERATOR_EMAIL,
            "password": OPERATOR_PASSWORD,
        }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    body["data"]["token"]
        .as_str()
        .expect("login response carries a token")
        .to_string()
}
