use std::env;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

impl LogFormat {
    fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "json" => Ok(LogFormat::Json),
            "text" => Ok(LogFormat::Text),
            other => Err(format!("LOG_FORMAT: unsupported value '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub comprehend_region: Option<String>,
    pub comprehend_endpoint_url: Option<String>,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_source<F>(get: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let comprehend_endpoint_url = non_blank("COMPREHEND_ENDPOINT_URL");
        if let Some(url) = &comprehend_endpoint_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(format!(
                "COMPREHEND_ENDPOINT_URL: must start with http:// or https://, got '{url}'"
            ));
        }

        Ok(Self {
            comprehend_region: non_blank("COMPREHEND_REGION"),
            comprehend_endpoint_url,
            log_format: get("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .transpose()?
                .unwrap_or_default(),
        })
    }
}
