//! Room creation on the Daily platform

use crate::{Result, VaaniError};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

/// A created room
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Room {
    pub url: String,
    pub name: String,
}

/// Creates rooms for voice sessions
#[async_trait]
pub trait RoomProvider: Send + Sync {
    async fn create_room(&self) -> Result<Room>;
}

/// Daily REST client (`POST {api_url}/rooms`)
pub struct DailyRooms {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl DailyRooms {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    fn rooms_url(&self) -> String {
        format!("{}/rooms", self.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl RoomProvider for DailyRooms {
    async fn create_room(&self) -> Result<Room> {
        let url = self.rooms_url();
        debug!("[SERVER] Creating room via {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "properties": {
                    "enable_chat": true,
                    "start_audio_off": false,
                    "start_video_off": true,
                }
            }))
            .send()
            .await
            .map_err(|e| VaaniError::RoomProvider(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!("[SERVER] Room creation rejected with {}", status);
            return Err(VaaniError::RoomProvider(format!("Daily returned {}", status)));
        }

        response
            .json::<Room>()
            .await
            .map_err(|e| VaaniError::RoomProvider(format!("Unexpected room payload: {}", e)))
    }
}
