use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub project_id: String,
    pub fcm_access_token: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            project_id: env::var("GCP_PROJECT_ID").map_err(|e| format!("GCP_PROJECT_ID: {}", e))?,
            fcm_access_token: env::var("FCM_ACCESS_TOKEN")
                .map_err(|e| format!("FCM_ACCESS_TOKEN: {}", e))?,
        })
    }
}
