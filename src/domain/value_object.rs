//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Default maximum chat message length in characters (after trimming)
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 500;

/// Default maximum display name length in characters
pub const DEFAULT_MAX_DISPLAY_NAME_LENGTH: usize = 20;

/// Display name used when sanitization leaves nothing behind
const ANONYMOUS_NAME: &str = "Anonymous";

/// Characters stripped from display names. A consumer may render names as
/// raw HTML, so markup metacharacters never survive sanitization.
const STRIPPED_NAME_CHARS: [char; 5] = ['<', '>', '\'', '"', '&'];

/// Presentation palette for display name colors (neutral tones)
const COLOR_PALETTE: [&str; 6] = [
    "#ffffff", "#87ceeb", "#c0c0c0", "#b0c4de", "#d3d3d3", "#e6e6fa",
];

/// Session identifier value object.
///
/// Identifies one connected participant. Clients may supply their own token
/// to keep the same identity across reconnects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Create a new SessionId.
    ///
    /// # Returns
    ///
    /// A Result containing the SessionId or an error if validation fails
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::SessionIdEmpty);
        }
        let len = id.len();
        if len > 100 {
            return Err(ValueObjectError::SessionIdTooLong {
                max: 100,
                actual: len,
            });
        }
        Ok(Self(id))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Room identifier value object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    /// Create a new RoomId.
    ///
    /// # Returns
    ///
    /// A Result containing the RoomId or an error if validation fails
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::RoomIdEmpty);
        }
        let len = id.len();
        if len > 100 {
            return Err(ValueObjectError::RoomIdTooLong {
                max: 100,
                actual: len,
            });
        }
        Ok(Self(id))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message identifier value object.
///
/// Unique per message; generation order is significant for history ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(String);

impl MessageId {
    pub(crate) fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid.to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sanitized display name value object.
///
/// A DisplayName can only be produced through sanitization, so a constructed
/// value is always safe to echo back to clients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    /// Sanitize a raw display name with the default length limit.
    pub fn sanitize(raw: &str) -> Self {
        Self::sanitize_with_limit(raw, DEFAULT_MAX_DISPLAY_NAME_LENGTH)
    }

    /// Sanitize a raw display name.
    ///
    /// Trims whitespace, strips markup metacharacters, caps the result at
    /// `max_chars` characters and re-trims. Falls back to `"Anonymous"`
    /// when nothing survives. Sanitization is idempotent.
    pub fn sanitize_with_limit(raw: &str, max_chars: usize) -> Self {
        let stripped: String = raw
            .trim()
            .chars()
            .filter(|c| !STRIPPED_NAME_CHARS.contains(c))
            .take(max_chars)
            .collect();
        let name = stripped.trim();

        if name.is_empty() {
            Self(ANONYMOUS_NAME.to_string())
        } else {
            Self(name.to_string())
        }
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Presentation color value object.
///
/// Derived deterministically from the sanitized display name. Two sessions
/// with identical display names get identical colors; color is a non-unique
/// presentation hint, not an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(String);

impl Color {
    /// Derive the palette color for a display name.
    pub fn for_display_name(name: &DisplayName) -> Self {
        let hash = fnv1a_64(name.as_str().as_bytes());
        let index = (hash % COLOR_PALETTE.len() as u64) as usize;
        Self(COLOR_PALETTE[index].to_string())
    }

    /// Get the inner string value (a `#rrggbb` hex code).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// FNV-1a 64-bit hash. Stable across runs and platforms, which is all the
/// color derivation needs.
fn fnv1a_64(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

/// Message body value object.
///
/// Holds the trimmed chat body, validated to be non-empty and within the
/// length limit (counted in characters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody(String);

impl MessageBody {
    /// Create a new MessageBody with the default length limit.
    pub fn new(raw: &str) -> Result<Self, ValueObjectError> {
        Self::with_limit(raw, DEFAULT_MAX_MESSAGE_LENGTH)
    }

    /// Create a new MessageBody.
    ///
    /// # Returns
    ///
    /// A Result containing the MessageBody or an error if the trimmed body
    /// is empty or exceeds `max_chars` characters
    pub fn with_limit(raw: &str, max_chars: usize) -> Result<Self, ValueObjectError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::MessageBodyEmpty);
        }
        let len = trimmed.chars().count();
        if len > max_chars {
            return Err(ValueObjectError::MessageBodyTooLong {
                max: max_chars,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_new_success() {
        // テスト項目: 有効なセッション ID を作成できる
        // given (前提条件):
        let id = "alice-token".to_string();

        // when (操作):
        let result = SessionId::new(id);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "alice-token");
    }

    #[test]
    fn test_session_id_new_empty_fails() {
        // テスト項目: 空のセッション ID は作成できない
        // when (操作):
        let result = SessionId::new("".to_string());

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValueObjectError::SessionIdEmpty);
    }

    #[test]
    fn test_session_id_new_too_long_fails() {
        // テスト項目: 101 文字以上のセッション ID は作成できない
        // given (前提条件):
        let id = "a".repeat(101);

        // when (操作):
        let result = SessionId::new(id);

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::SessionIdTooLong {
                max: 100,
                actual: 101
            }
        );
    }

    #[test]
    fn test_room_id_new_success() {
        // テスト項目: 有効なルーム ID を作成できる
        // when (操作):
        let result = RoomId::new("general".to_string());

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "general");
    }

    #[test]
    fn test_room_id_new_empty_fails() {
        // テスト項目: 空のルーム ID は作成できない
        // when (操作):
        let result = RoomId::new("".to_string());

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValueObjectError::RoomIdEmpty);
    }

    #[test]
    fn test_display_name_sanitize_trims_and_caps() {
        // テスト項目: 表示名は前後の空白が除去され、20 文字に切り詰められる
        // given (前提条件):
        let raw = "  abcdefghijklmnopqrstuvwxyz  ";

        // when (操作):
        let name = DisplayName::sanitize(raw);

        // then (期待する結果):
        assert_eq!(name.as_str(), "abcdefghijklmnopqrst");
        assert_eq!(name.as_str().chars().count(), 20);
    }

    #[test]
    fn test_display_name_sanitize_strips_markup_chars() {
        // テスト項目: マークアップ用のメタ文字が除去される
        // given (前提条件):
        let raw = "<script>\"bob\"&'co'</script>";

        // when (操作):
        let name = DisplayName::sanitize(raw);

        // then (期待する結果):
        assert_eq!(name.as_str(), "scriptbobco/script");
    }

    #[test]
    fn test_display_name_sanitize_empty_defaults_to_anonymous() {
        // テスト項目: 空の表示名は "Anonymous" になる
        // when (操作):
        let empty = DisplayName::sanitize("");
        let whitespace = DisplayName::sanitize("   ");
        let only_stripped = DisplayName::sanitize("<<>>&\"'");

        // then (期待する結果):
        assert_eq!(empty.as_str(), "Anonymous");
        assert_eq!(whitespace.as_str(), "Anonymous");
        assert_eq!(only_stripped.as_str(), "Anonymous");
    }

    #[test]
    fn test_display_name_sanitize_is_idempotent() {
        // テスト項目: サニタイズは冪等 sanitize(sanitize(x)) == sanitize(x)
        // given (前提条件):
        let inputs = [
            "  alice  ",
            "<b>bob</b>",
            "a very long name that exceeds the limit",
            "< mixed & '\" input >",
            "",
            "   ",
        ];

        for raw in inputs {
            // when (操作):
            let once = DisplayName::sanitize(raw);
            let twice = DisplayName::sanitize(once.as_str());

            // then (期待する結果):
            assert_eq!(once, twice, "sanitize not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_color_is_deterministic_for_equal_names() {
        // テスト項目: 同じ表示名からは常に同じ色が導出される
        // given (前提条件):
        let name1 = DisplayName::sanitize("alice");
        let name2 = DisplayName::sanitize("alice");
        let other = DisplayName::sanitize("bob");

        // when (操作):
        let color1 = Color::for_display_name(&name1);
        let color2 = Color::for_display_name(&name2);
        let color_other = Color::for_display_name(&other);

        // then (期待する結果):
        assert_eq!(color1, color2);
        // bob の色はパレット内ではあるが、一致は保証されない
        assert!(COLOR_PALETTE.contains(&color_other.as_str()));
    }

    #[test]
    fn test_color_comes_from_palette() {
        // テスト項目: 導出された色は必ずパレットに含まれる
        for raw in ["alice", "bob", "charlie", "Anonymous", "日本語の名前"] {
            let color = Color::for_display_name(&DisplayName::sanitize(raw));
            assert!(COLOR_PALETTE.contains(&color.as_str()));
        }
    }

    #[test]
    fn test_message_body_new_success() {
        // テスト項目: 有効なメッセージ本文を作成できる（前後の空白は除去）
        // when (操作):
        let result = MessageBody::new("  Hello, world!  ");

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "Hello, world!");
    }

    #[test]
    fn test_message_body_whitespace_only_fails() {
        // テスト項目: 空白のみのメッセージ本文は作成できない
        // when (操作):
        let result = MessageBody::new("   ");

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValueObjectError::MessageBodyEmpty);
    }

    #[test]
    fn test_message_body_at_limit_succeeds() {
        // テスト項目: 500 文字ちょうどのメッセージ本文は作成できる
        // given (前提条件):
        let body = "a".repeat(500);

        // when (操作):
        let result = MessageBody::new(&body);

        // then (期待する結果):
        assert!(result.is_ok());
    }

    #[test]
    fn test_message_body_over_limit_fails() {
        // テスト項目: 501 文字のメッセージ本文は作成できない
        // given (前提条件):
        let body = "a".repeat(501);

        // when (操作):
        let result = MessageBody::new(&body);

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ValueObjectError::MessageBodyTooLong {
                max: 500,
                actual: 501
            }
        );
    }

    #[test]
    fn test_message_body_custom_limit() {
        // テスト項目: カスタム上限でメッセージ本文を検証できる
        // when (操作):
        let ok = MessageBody::with_limit("hello", 5);
        let too_long = MessageBody::with_limit("hello!", 5);

        // then (期待する結果):
        assert!(ok.is_ok());
        assert!(too_long.is_err());
    }

    #[test]
    fn test_timestamp_ordering() {
        // テスト項目: タイムスタンプは順序付けできる
        // given (前提条件):
        let ts1 = Timestamp::new(1000);
        let ts2 = Timestamp::new(2000);

        // then (期待する結果):
        assert!(ts1 < ts2);
        assert_eq!(ts1.value(), 1000);
    }
}
