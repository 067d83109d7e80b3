use chrono::Utc;

/// 服务端生成的时间戳格式：UTC、无时区后缀、固定微秒精度。
/// 固定宽度保证字符串字典序与时间先后一致。
pub const ISO_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// 当前 UTC 时间的 ISO-8601 字符串
pub fn now_iso() -> String {
    Utc::now().format(ISO_TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_fixed_width_format() {
        let ts = Utc
            .from_utc_datetime(
                &NaiveDate::from_ymd_opt(2024, 3, 5)
                    .unwrap()
                    .and_hms_opt(7, 8, 9)
                    .unwrap(),
            )
            .format(ISO_TIMESTAMP_FORMAT)
            .to_string();
        // 整秒也保留六位小数
        assert_eq!(ts, "2024-03-05T07:08:09.000000");
    }

    #[test]
    fn test_now_is_monotonic_as_string() {
        let first = now_iso();
        let second = now_iso();
        assert_eq!(first.len(), 26);
        assert!(first <= second);
    }

    #[test]
    fn test_compares_with_second_precision_inputs() {
        let now = now_iso();
        assert!("2020-01-01T00:00:00".to_string() < now);
        assert!("2099-01-01T00:00:00".to_string() > now);
    }
}
