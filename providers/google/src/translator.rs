use std::time::Duration;

use async_trait::async_trait;
use phrase_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};
use serde_json::Value;

/// Client for the public `translate_a/single` endpoint (`client=gtx`)
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleTranslator {
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Client with a request timeout; a request exceeding it fails with
    /// [`TranslateError::Timeout`]
    pub fn with_timeout(
        api_url: String,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, api_url })
    }

    async fn request(&self, text: &str, from: &str, to: &str) -> Result<Value, TranslateError> {
        let params = [
            ("client", "gtx"),
            ("sl", from),
            ("tl", to),
            ("dt", "t"),
            ("q", text),
        ];

        let response = self.client.get(&self.api_url).query(&params).send().await?;
        let status = response.status();

        if status == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if status == 403 {
            return Err(TranslateError::AuthenticationError);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match status.canonical_reason() {
                Some(reason) if body.trim().is_empty() => reason.to_string(),
                Some(reason) => format!("{reason}: {}", body.trim()),
                None => body.trim().to_string(),
            };
            return Err(TranslateError::Http {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| TranslateError::ApiError(format!("Failed to parse response: {}", e)))
    }
}

/// Segments live at `[0][i][0]`; long inputs come back split into sentences
fn translated_text(json: &Value) -> Result<String, TranslateError> {
    let segments = json
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        return Err(TranslateError::ApiError(
            "No translation in response".to_string(),
        ));
    }

    Ok(text)
}

fn detected_language(json: &Value) -> Option<LanguageCode> {
    json.get(2).and_then(Value::as_str).map(str::to_lowercase)
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let json = self.request(text, &from, &to).await?;
        let translated = translated_text(&json)?;
        let detected = detected_language(&json);

        tracing::debug!(
            "google: {} chars translated, detected {:?}",
            translated.chars().count(),
            detected
        );

        Ok(Translation {
            text: translated,
            from,
            to,
            provider: "google".to_string(),
            detected,
        })
    }

    async fn detect_language(&self, text: &str) -> Result<LanguageCode, TranslateError> {
        let json = self.request(text, "auto", "en").await?;

        detected_language(&json)
            .ok_or_else(|| TranslateError::ApiError("No detected language".to_string()))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google Translate".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    const ENDPOINT: &str = "/translate_a/single";

    fn translator(server: &MockServer) -> GoogleTranslator {
        GoogleTranslator::new(format!("{}{}", server.uri(), ENDPOINT))
    }

    #[tokio::test]
    async fn test_translate_joins_segments() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(ENDPOINT))
            .and(query_param("client", "gtx"))
            .and(query_param("sl", "en"))
            .and(query_param("tl", "es"))
            .and(query_param("q", "Hello. How are you?"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                [
                    ["Hola. ", "Hello. ", null, null, 10],
                    ["¿Cómo estás?", "How are you?", null, null, 10]
                ],
                null,
                "en"
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let translation = translator(&server)
            .translate("Hello. How are you?", "en".into(), "es".into())
            .await
            .unwrap();

        assert_eq!(translation.text, "Hola. ¿Cómo estás?");
        assert_eq!(translation.detected.as_deref(), Some("en"));
        assert_eq!(translation.provider, "google");
    }

    #[tokio::test]
    async fn test_detect_language() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(ENDPOINT))
            .and(query_param("sl", "auto"))
            .and(query_param("tl", "en"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([[["Good morning", "Guten Morgen"]], null, "de"])),
            )
            .mount(&server)
            .await;

        let code = translator(&server).detect_language("Guten Morgen").await.unwrap();
        assert_eq!(code, "de");
    }

    #[tokio::test]
    async fn test_status_429_is_rate_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let err = translator(&server)
            .translate("hi", "en".into(), "fr".into())
            .await
            .unwrap_err();
        assert!(matches!(err, TranslateError::RateLimitExceeded));
    }

    #[tokio::test]
    async fn test_server_error_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("backend exploded"))
            .mount(&server)
            .await;

        let err = translator(&server)
            .translate("hi", "en".into(), "fr".into())
            .await
            .unwrap_err();

        match err {
            TranslateError::Http { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("backend exploded"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unexpected_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "oops": true })))
            .mount(&server)
            .await;

        let err = translator(&server)
            .translate("hi", "en".into(), "fr".into())
            .await
            .unwrap_err();
        assert!(matches!(err, TranslateError::ApiError(_)));
    }

    #[tokio::test]
    async fn test_slow_backend_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([[["x", "y"]], null, "en"]))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let translator = GoogleTranslator::with_timeout(
            format!("{}{}", server.uri(), ENDPOINT),
            Duration::from_millis(100),
            "phrase-bridge-test",
        )
        .unwrap();

        let err = translator
            .translate("y", "en".into(), "fr".into())
            .await
            .unwrap_err();
        assert!(matches!(err, TranslateError::Timeout(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Grab a free port and close it again so nothing is listening
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let translator = GoogleTranslator::new(format!("http://127.0.0.1:{port}{ENDPOINT}"));
        let err = translator
            .translate("hi", "en".into(), "fr".into())
            .await
            .unwrap_err();
        assert!(matches!(err, TranslateError::Connection(_)), "got {err:?}");
    }
}
