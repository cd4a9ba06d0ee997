use std::time::Duration;

use yatra_translator::{RemoteTranslator, TranslateError};
use yatra_types::LanguagePair;

use crate::prompt::{build_request, strip_quotes};

/// One bounded attempt at the hosted provider.
///
/// The provider future is dropped when `timeout` elapses, so a late reply is
/// never observed.
pub async fn remote_translate(
    translator: &dyn RemoteTranslator,
    text: &str,
    pair: &LanguagePair,
    timeout: Duration,
) -> Result<String, TranslateError> {
    let request = build_request(text, pair);

    let reply = tokio::time::timeout(timeout, translator.translate(&request))
        .await
        .map_err(|_| TranslateError::Timeout(timeout))??;

    let translation = strip_quotes(&reply);
    if translation.is_empty() {
        return Err(TranslateError::InvalidResponse("Empty translation".to_string()));
    }

    Ok(translation.to_string())
}
