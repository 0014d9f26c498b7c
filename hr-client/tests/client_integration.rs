// hr-client/tests/client_integration.rs
// Integration tests against a one-shot local HTTP responder

use hr_client::{ClientConfig, ClientError, HrService, HttpClient};
use shared::models::{EmployeeFilter, EmployeeType, HolidayQuery};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve exactly one request with the given status line and JSON body.
/// The handle resolves to the raw request head.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&buf).to_string()
    });

    (format!("http://{}/api/v1", addr), handle)
}

#[tokio::test]
async fn test_client_config_builder() {
    let config = ClientConfig::default()
        .with_token("secret")
        .with_timeout_ms(5_000);

    assert_eq!(config.base_url, "http://localhost:8000/api/v1");
    assert_eq!(config.token.as_deref(), Some("secret"));
    assert_eq!(config.timeout_ms, 5_000);

    let client = config.build_http_client().unwrap();
    assert_eq!(client.token(), Some("secret"));
}

#[tokio::test]
async fn test_list_employees_sends_filters() {
    let body = r#"[{"id":1,"employee_number":"TPT-0001","name":"Jane Wanjiru","phone":"0700","employee_type":"DRIVER","department":"Transport","employment_date":"2024-01-15"}]"#;
    let (base, server) = serve_once("200 OK", body).await;

    let client = HttpClient::new(&ClientConfig::new(base).with_token("t0k")).unwrap();
    let filter = EmployeeFilter {
        department: Some("Transport".into()),
        employee_type: Some(EmployeeType::Driver),
        ..Default::default()
    };
    let employees = client.list_employees(&filter).await.unwrap();

    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].employee_number, "TPT-0001");

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/v1/hr/employees?"));
    assert!(request.contains("department=Transport"));
    assert!(request.contains("employee_type=DRIVER"));
    assert!(request.to_lowercase().contains("authorization: bearer t0k"));
}

#[tokio::test]
async fn test_holidays_query() {
    let body = r#"{"year":2024,"country":"KE","branch":"HQ","dates":["2024-06-01"]}"#;
    let (base, server) = serve_once("200 OK", body).await;

    let client = HttpClient::new(&ClientConfig::new(base)).unwrap();
    let calendar = client
        .holidays(&HolidayQuery {
            year: 2024,
            branch: Some("HQ".into()),
            country: "KE".into(),
        })
        .await
        .unwrap();

    assert_eq!(calendar.holiday_dates().len(), 1);
    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/v1/hr/calendar/holidays?"));
    assert!(request.contains("country=KE"));
}

#[tokio::test]
async fn test_not_found_maps_to_client_error() {
    let (base, _server) = serve_once("404 Not Found", r#"{"detail":"Employee not found"}"#).await;

    let client = HttpClient::new(&ClientConfig::new(base)).unwrap();
    let err = client.get_employee(42).await.unwrap_err();

    match err {
        ClientError::NotFound(text) => assert!(text.contains("Employee not found")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpClient::new(&ClientConfig::new(format!("http://{}/api/v1", addr))).unwrap();
    let err = client.employee_count_by_type().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
