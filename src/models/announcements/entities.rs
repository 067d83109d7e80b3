use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 公告
//
// 时间字段均为 ISO-8601 字符串，服务端按字典序比较
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "announcement.ts")]
pub struct Announcement {
    // 公告ID，由存储层分配
    pub id: String,
    // 公告内容
    pub message: String,
    // 开始展示时间，为空表示立即生效
    pub start_date: Option<String>,
    // 过期时间，缺失的记录永远不会出现在有效列表中
    pub expiration_date: Option<String>,
    // 创建时间
    pub created_at: Option<String>,
}
