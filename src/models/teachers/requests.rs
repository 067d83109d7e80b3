// 创建教师请求（仅启动阶段播种使用）
#[derive(Debug, Clone)]
pub struct CreateTeacherRequest {
    pub username: String,
    pub display_name: Option<String>,
}
