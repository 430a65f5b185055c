//! Remote command endpoint configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiConfig {
    pub endpoint: String,
    /// Total request timeout in milliseconds (valid range: 1000-60000).
    pub timeout_ms: u32,
    /// Built-in replies keyed by normalized command, used when the server
    /// sends no message or the request fails.
    pub default_messages: BTreeMap<String, String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let mut default_messages = BTreeMap::new();
        default_messages.insert(
            "giad".to_string(),
            "GIAD™ IS NOT A BRAND. IT'S A PROPHECY.".to_string(),
        );
        default_messages.insert(
            "god".to_string(),
            "\"GOD IS A DESIGNER. THAT'S NOT A STATEMENT — IT'S A JOB TITLE.\"".to_string(),
        );
        Self {
            endpoint: "https://giad-gpt-proxy.vercel.app/api/giad-gpt".into(),
            timeout_ms: 10_000,
            default_messages,
        }
    }
}
