use fortune_mock::{ForcedError, MockBackend, MockConfig};
use saju_client::{ClientError, FortuneClient, FortuneClientFactory, HttpFortuneClient, NETWORK_ERROR_MESSAGE};
use saju_types::{FortuneRequest, FortuneType, Gender};
use std::time::Duration;

fn request(fortune_type: FortuneType) -> FortuneRequest {
    FortuneRequest {
        birth_date: "1990-05-03".to_string(),
        birth_time: "14:30".to_string(),
        gender: Gender::Male,
        fortune_type,
    }
}

#[tokio::test]
async fn test_analyze_returns_reading() {
    let backend = MockBackend::start(MockConfig::default()).await.unwrap();
    let client = HttpFortuneClient::new(backend.base_url());

    let response = client.analyze(&request(FortuneType::Saju)).await.unwrap();

    assert!(response.result.contains("## 🔮 사주 기본 분석"));
    assert!(response.created_at().is_some(), "createdAt should decode into timestamp");
    assert_eq!(response.fortune_type.as_deref(), Some("사주"));
    assert_eq!(response.birth_info.as_ref().unwrap().gender, "MALE");

    backend.shutdown().await;
}

#[tokio::test]
async fn test_request_body_sent_in_wire_format() {
    let backend = MockBackend::start(MockConfig::default()).await.unwrap();
    let client = FortuneClientFactory::create_http_client(backend.base_url(), Duration::from_secs(5));

    let mut daily = request(FortuneType::Daily);
    daily.gender = Gender::Female;
    client.analyze(&daily).await.unwrap();

    let recorded = backend.requests();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0]["birthDate"], "1990-05-03");
    assert_eq!(recorded[0]["birthTime"], "14:30");
    assert_eq!(recorded[0]["gender"], "FEMALE");
    assert_eq!(recorded[0]["fortuneType"], "daily");

    backend.shutdown().await;
}

#[tokio::test]
async fn test_backend_validation_message_surfaced() {
    let backend = MockBackend::start(MockConfig::default()).await.unwrap();
    let client = HttpFortuneClient::new(backend.base_url());

    let mut future = request(FortuneType::Saju);
    future.birth_date = "2999-01-01".to_string();

    let err = client.analyze(&future).await.unwrap_err();
    match &err {
        ClientError::Backend { status, message } => {
            assert_eq!(*status, 400);
            assert_eq!(message.as_deref(), Some("생년월일이 미래 날짜일 수 없습니다."));
        }
        other => panic!("expected backend error, got {:?}", other),
    }
    assert_eq!(err.user_message(FortuneType::Saju), "생년월일이 미래 날짜일 수 없습니다.");

    backend.shutdown().await;
}

#[tokio::test]
async fn test_tarot_rejected_by_backend() {
    let backend = MockBackend::start(MockConfig::default()).await.unwrap();
    let client = HttpFortuneClient::new(backend.base_url());

    let err = client.analyze(&request(FortuneType::Tarot)).await.unwrap_err();
    assert!(matches!(err, ClientError::Backend { status: 500, .. }));
    assert_eq!(err.user_message(FortuneType::Tarot), "서버 내부 오류가 발생했습니다.");

    backend.shutdown().await;
}

#[tokio::test]
async fn test_missing_message_falls_back() {
    let config = MockConfig::default().with_forced_error(ForcedError::raw(502, r#"{"status":502,"error":"Bad Gateway"}"#));
    let backend = MockBackend::start(config).await.unwrap();
    let client = HttpFortuneClient::new(backend.base_url());

    let err = client.analyze(&request(FortuneType::Daily)).await.unwrap_err();
    assert!(matches!(err, ClientError::Backend { status: 502, message: None }));
    assert_eq!(err.user_message(FortuneType::Daily), "오늘의 운세 해석 중 오류가 발생했습니다");

    backend.shutdown().await;
}

#[tokio::test]
async fn test_unstructured_error_body_falls_back() {
    let config = MockConfig::default().with_forced_error(ForcedError::raw(503, "upstream unavailable"));
    let backend = MockBackend::start(config).await.unwrap();
    let client = HttpFortuneClient::new(backend.base_url());

    let err = client.analyze(&request(FortuneType::Saju)).await.unwrap_err();
    assert!(matches!(err, ClientError::Backend { status: 503, message: None }));
    assert_eq!(err.user_message(FortuneType::Saju), "사주 해석 중 오류가 발생했습니다");

    backend.shutdown().await;
}

#[tokio::test]
async fn test_structured_forced_error() {
    let config = MockConfig::default().with_forced_error(ForcedError::structured(
        503,
        "Fortune Service Error",
        "사주 해석 서비스에 일시적인 문제가 발생했습니다. 잠시 후 다시 시도해주세요.",
    ));
    let backend = MockBackend::start(config).await.unwrap();
    let client = HttpFortuneClient::new(backend.base_url());

    let err = client.analyze(&request(FortuneType::Saju)).await.unwrap_err();
    assert_eq!(
        err.user_message(FortuneType::Saju),
        "사주 해석 서비스에 일시적인 문제가 발생했습니다. 잠시 후 다시 시도해주세요."
    );

    backend.shutdown().await;
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let config = MockConfig::default().with_delay(Duration::from_millis(800));
    let backend = MockBackend::start(config).await.unwrap();
    let client = HttpFortuneClient::new(backend.base_url()).with_timeout(Duration::from_millis(100));

    let err = client.analyze(&request(FortuneType::Saju)).await.unwrap_err();
    assert!(matches!(err, ClientError::Timeout(_)), "got {:?}", err);
    assert_eq!(err.user_message(FortuneType::Saju), NETWORK_ERROR_MESSAGE);

    backend.shutdown().await;
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let client = HttpFortuneClient::new("http://127.0.0.1:1/api".to_string())
        .with_timeout(Duration::from_secs(2));
    let err = client.analyze(&request(FortuneType::Saju)).await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)), "got {:?}", err);
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_health_check() {
    let backend = MockBackend::start(MockConfig::default()).await.unwrap();
    let client = HttpFortuneClient::new(format!("{}/", backend.base_url()));

    let health = client.health_check().await.unwrap();
    assert!(health.is_up());

    backend.shutdown().await;
}
