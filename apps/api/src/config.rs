use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// The Groq API key is validated here so a missing key fails the process at
/// startup instead of surfacing on the first analysis request.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// When true, /analyze asks the model for a structured skills array in
    /// addition to the narrative and returns `{textual_analysis, skills}`.
    /// When false, the response is the plain `{analysis}` variant.
    pub structured_skills: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            model: std::env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string()),
            temperature: std::env::var("GROQ_TEMPERATURE")
                .unwrap_or_else(|_| "0.2".to_string())
                .parse::<f32>()
                .context("GROQ_TEMPERATURE must be a float")?,
            max_tokens: std::env::var("GROQ_MAX_TOKENS")
                .unwrap_or_else(|_| "1024".to_string())
                .parse::<u32>()
                .context("GROQ_MAX_TOKENS must be an integer")?,
            structured_skills: std::env::var("STRUCTURED_SKILLS")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
