use url::Url;

use super::{ScreenerClient, ScreenerError};

/// Issues one GET for `url` and reads the body as text.
/// Non-2xx responses become [`ScreenerError::Status`].
pub(crate) async fn fetch_body(client: &ScreenerClient, url: &Url) -> Result<String, ScreenerError> {
    let resp = client.http().get(url.clone()).send().await?;
    if !resp.status().is_success() {
        return Err(ScreenerError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }
    Ok(resp.text().await?)
}
