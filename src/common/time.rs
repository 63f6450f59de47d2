use chrono::{DateTime, Utc};

/// Get current Unix timestamp in UTC (milliseconds)
pub fn now_timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Render a Unix millisecond timestamp as an RFC 3339 string (UTC)
pub fn timestamp_to_rfc3339(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or_default()
        .to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_to_rfc3339() {
        // テスト項目: ミリ秒タイムスタンプを RFC 3339 形式に変換できる
        // given (前提条件):
        let millis = 1_700_000_000_000i64;

        // when (操作):
        let rendered = timestamp_to_rfc3339(millis);

        // then (期待する結果):
        assert_eq!(rendered, "2023-11-14T22:13:20+00:00");
    }
}
