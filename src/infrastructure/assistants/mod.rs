pub mod opsinsight;

use anyhow::Result;

use crate::domain::models::AssistantBox;

pub struct AssistantManager {}

impl AssistantManager {
    pub fn get() -> Result<AssistantBox> {
        return Ok(Box::new(opsinsight::OpsInsight::from_config()?));
    }
}
