use uuid::Uuid;

use crate::errors::{BoardError, Result};

/// 校验并规范化公告ID
///
/// 接受 UUID 的各种文本形式，统一转为小写连字符格式，
/// 与存储层生成的ID一致。
pub fn parse_announcement_id(raw: &str) -> Result<String> {
    Uuid::parse_str(raw)
        .map(|id| id.hyphenated().to_string())
        .map_err(|_| BoardError::invalid_identifier("Invalid announcement id"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_id() {
        let id = "67e55044-10b1-426f-9247-bb680e5fe0c8";
        assert_eq!(parse_announcement_id(id).unwrap(), id);
    }

    #[test]
    fn test_normalizes_id() {
        assert_eq!(
            parse_announcement_id("67E5504410B1426F9247BB680E5FE0C8").unwrap(),
            "67e55044-10b1-426f-9247-bb680e5fe0c8"
        );
    }

    #[test]
    fn test_invalid_ids() {
        for raw in ["", "not-an-id", "507f1f77bcf86cd799439011", "67e55044-10b1-426f"] {
            let err = parse_announcement_id(raw).unwrap_err();
            assert_eq!(err.message(), "Invalid announcement id");
        }
    }
}
