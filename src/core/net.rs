/// Read the response body as text.
///
/// With the `tracing` feature the body size is reported per symbol.
pub(crate) async fn get_text(resp: reqwest::Response, _symbol: &str) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "tracing")]
    tracing::debug!(symbol = _symbol, bytes = text.len(), "chart body received");

    Ok(text)
}
