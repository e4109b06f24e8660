//! Captcha Calls

use serde::{Deserialize, Serialize};

use super::{Api, ApiError, Endpoint};

#[derive(Serialize)]
struct NoArgs {}

#[derive(Deserialize)]
struct CaptchaResponse {
    #[serde(default)]
    captcha: Option<String>,
}

/// Ask the server for a fresh challenge id; the image lives at `/captcha/<id>.png`
pub async fn new_captcha(api: &impl Api) -> Result<Option<String>, ApiError> {
    let response: CaptchaResponse = api.call(Endpoint::Captcha, &NoArgs {}).await?;
    Ok(response.captcha.filter(|id| !id.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_new_captcha() {
        let api = MockApi::new();
        api.respond(Endpoint::Captcha, json!({ "captcha": "x1y2" }));
        api.respond(Endpoint::Captcha, json!({ "captcha": "" }));

        assert_eq!(new_captcha(&api).await.unwrap().as_deref(), Some("x1y2"));
        assert_eq!(new_captcha(&api).await.unwrap(), None);
    }
}
