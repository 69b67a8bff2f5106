use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub posts_path: PathBuf,
    /// Base URL of the TEI server hosting the sentiment model. `None` disables
    /// the model tier entirely.
    pub tei_url: Option<String>,
    pub inference_timeout_secs: u64,
    pub lexicon_enabled: bool,
    /// Characters of post text sent to the model; longer input is truncated.
    pub max_input_chars: usize,
    pub topics_per_post: usize,
    pub top_topics_limit: usize,
    pub trend_window: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // TEI URLs may embed credentials in the userinfo part.
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("posts_path", &self.posts_path)
            .field("tei_url", &self.tei_url.as_ref().map(|_| "[redacted]"))
            .field("inference_timeout_secs", &self.inference_timeout_secs)
            .field("lexicon_enabled", &self.lexicon_enabled)
            .field("max_input_chars", &self.max_input_chars)
            .field("topics_per_post", &self.topics_per_post)
            .field("top_topics_limit", &self.top_topics_limit)
            .field("trend_window", &self.trend_window)
            .finish()
    }
}
