use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TranslateConfig {
    pub url: url::Url,
}

impl Default for TranslateConfig {
    #[allow(clippy::unwrap_used)]
    fn default() -> Self {
        Self {
            url: url::Url::parse("https://translate.googleapis.com/translate_a/single").unwrap(),
        }
    }
}
