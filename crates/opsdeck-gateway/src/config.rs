// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000/api".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}
