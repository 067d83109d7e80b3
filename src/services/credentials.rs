//! 教师身份校验
//!
//! 调用方传入的身份只是一个用户名字符串，这里仅确认存在对应的教师记录，
//! 不校验任何凭据的持有。

use std::sync::Arc;

use tracing::{error, info};

use crate::errors::{BoardError, Result};
use crate::models::teachers::entities::Teacher;
use crate::storage::Storage;

pub struct CredentialGate {
    storage: Arc<dyn Storage>,
}

impl CredentialGate {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 校验调用方身份，成功时返回匹配的教师记录
    pub async fn authorize(&self, caller_identity: Option<&str>) -> Result<Teacher> {
        let username = match caller_identity {
            Some(username) if !username.is_empty() => username,
            _ => {
                info!("Mutation rejected: missing teacher identity");
                return Err(BoardError::unauthorized("Authentication required"));
            }
        };

        match self.storage.get_teacher_by_username(username).await {
            Ok(Some(teacher)) => Ok(teacher),
            Ok(None) => {
                info!("Mutation rejected: unknown teacher '{}'", username);
                Err(BoardError::unauthorized("Invalid teacher credentials"))
            }
            Err(e) => {
                error!("Failed to look up teacher '{}': {}", username, e);
                Err(e)
            }
        }
    }
}
