use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教师凭据记录，仅用于校验调用方身份
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "teacher.ts")]
pub struct Teacher {
    // 用户名，即调用方传入的身份标识
    pub username: String,
    // 显示名称
    pub display_name: Option<String>,
    // 创建时间
    pub created_at: String,
}
