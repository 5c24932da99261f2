use chrono::Utc;
use log::trace;
use rand::Rng;
use uuid::Uuid;

// 生成 "<随机小数位>-<毫秒时间戳>" 形式的标识符
// 不保证唯一,不可用于安全相关场景
pub fn generate_identifier() -> String {
    let fraction: f64 = rand::thread_rng().gen();
    let id = format!("{}-{}", fraction_digits(fraction), epoch_millis());
    trace!("generated identifier {}", id);
    id
}

/// Digits after the decimal point of `value`'s shortest decimal rendering.
///
/// `f64`'s `Display` never switches to exponent notation, so a draw like
/// `1e-7` yields `"0000001"`. A value with no fractional part yields `"0"`.
pub fn fraction_digits(value: f64) -> String {
    let rendered = value.to_string();
    match rendered.split_once('.') {
        Some((_, digits)) if !digits.is_empty() => digits.to_string(),
        _ => "0".to_string(),
    }
}

/// Milliseconds since the Unix epoch. A clock set before 1970 reads as 0.
pub fn epoch_millis() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}

pub fn generate_uuid_identifier() -> String {
    let my_uuid = Uuid::new_v4();
    my_uuid.to_string()
}
