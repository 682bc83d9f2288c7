//! Integration tests for the `glyphcast` binary.
//!
//! The weather service is replaced by a wiremock server passed through `--base-url`.

use std::process::{Command, Output};

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the binary with an empty config file and no key in the environment.
async fn run_cli(args: &[&str]) -> Output {
    let config = tempfile::NamedTempFile::new().expect("temp config file");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_glyphcast"));
    cmd.args(args)
        .arg("--config")
        .arg(config.path())
        .env_remove("OWM_API_KEY")
        .env_remove("GLYPHCAST_BASE_URL")
        .env_remove("RUST_LOG");

    let output = tokio::task::spawn_blocking(move || cmd.output())
        .await
        .expect("join")
        .expect("Failed to execute glyphcast");
    drop(config);
    output
}

async fn server_expecting_no_requests() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    server
}

#[tokio::test(flavor = "multi_thread")]
async fn help_lists_flags() {
    let output = run_cli(&["--help"]).await;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--key", "--coords", "--units", "--lang", "--debug", "--icon"] {
        assert!(stdout.contains(flag), "help should mention {flag}: {stdout}");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_key_prints_guidance_without_request() {
    let server = server_expecting_no_requests().await;
    let uri = server.uri();

    let output = run_cli(&["--coords", "51,0", "--base-url", &uri]).await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "must specify API key, see --help for usage\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_coords_prints_guidance_without_request() {
    let server = server_expecting_no_requests().await;
    let uri = server.uri();

    let output = run_cli(&["--key", "abc", "--base-url", &uri]).await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "must specify coordinates, see --help for usage\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_coords_fail_before_request() {
    let server = server_expecting_no_requests().await;
    let uri = server.uri();

    let output = run_cli(&["--key", "abc", "--coords", "abc", "--base-url", &uri]).await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error parsing coordinates"), "stderr: {stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_units_fail_before_request() {
    let server = server_expecting_no_requests().await;
    let uri = server.uri();

    let output =
        run_cli(&["--key", "abc", "--coords", "51,0", "--units", "X", "--base-url", &uri]).await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unit of measure not available"), "stderr: {stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn clear_day_prints_icon_and_feels_like() {
    let now = chrono::Utc::now().timestamp();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "51.5"))
        .and(query_param("lon", "-0.12"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
            "main": {"temp": 22.0, "feels_like": 21.3},
            "sys": {"sunrise": now - 3_600, "sunset": now + 3_600},
            "name": "London"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let uri = server.uri();

    let output = run_cli(&[
        "--key", "abc", "--coords", "51.5,-0.12", "--units", "C", "--icon", "--base-url", &uri,
    ])
    .await;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "\u{e30d} 21.3°C\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn service_errors_are_printed_and_fail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"cod":401,"message":"Invalid API key."}"#),
        )
        .expect(1)
        .mount(&server)
        .await;
    let uri = server.uri();

    let output = run_cli(&["--key", "bad", "--coords", "51,0", "--base-url", &uri]).await;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("401"), "stderr: {stderr}");
    assert!(stderr.contains("Invalid API key."), "stderr: {stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn debug_prints_complete_server_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "weather": [{"id": 804, "main": "Clouds", "description": "overcast clouds", "icon": "04n"}],
            "main": {"temp": 8.0, "feels_like": 5.5, "grnd_level": 1009},
            "wind": {"speed": 5.1, "deg": 240},
            "visibility": 10000,
            "base": "stations",
            "cod": 200
        })))
        .expect(1)
        .mount(&server)
        .await;
    let uri = server.uri();

    let output =
        run_cli(&["--key", "abc", "--coords", "51,0", "--debug", "--icon", "--base-url", &uri])
            .await;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    for field in ["\"wind\"", "\"visibility\": 10000", "\"base\": \"stations\"", "grnd_level"] {
        assert!(stdout.contains(field), "stdout should contain {field}: {stdout}");
    }
    assert!(stdout.ends_with("\u{e312} 5.5°C\n"), "stdout: {stdout}");
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_language_fails_before_request() {
    let server = server_expecting_no_requests().await;
    let uri = server.uri();

    let output =
        run_cli(&["--key", "abc", "--coords", "51,0", "--lang", "xx", "--base-url", &uri]).await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("language not available"), "stderr: {stderr}");
}
