/// 带默认值的解析结果
///
/// `Fallback` 表示原始值无法解析，已替换为默认值；调用方可以据此选择记录或拒绝。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parsed<T> {
    Ok(T),
    Fallback(T),
}

impl<T> Parsed<T> {
    pub fn value(self) -> T {
        match self {
            Parsed::Ok(v) | Parsed::Fallback(v) => v,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Parsed::Fallback(_))
    }
}

/// 解析整数，语义与表格数据的习惯一致：忽略首尾空白，取开头的数字部分 ("12.5" → 12)
pub fn parse_int_or_default(raw: &str, field: &str, default: i64) -> Parsed<i64> {
    let trimmed = raw.trim();
    let digits_end = trimmed
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
        .map_or(trimmed.len(), |(i, _)| i);

    match trimmed[..digits_end].parse::<i64>() {
        Ok(v) => Parsed::Ok(v),
        Err(_) => {
            log::warn!("无效的 {field}: '{raw}'，使用 {default} 代替");
            Parsed::Fallback(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integers_parse() {
        assert_eq!(parse_int_or_default("12", "level", 0), Parsed::Ok(12));
        assert_eq!(parse_int_or_default(" 7 ", "level", 0), Parsed::Ok(7));
        assert_eq!(parse_int_or_default("-3", "level", 0), Parsed::Ok(-3));
    }

    #[test]
    fn leading_digits_are_taken() {
        assert_eq!(parse_int_or_default("12.5", "level", 0), Parsed::Ok(12));
        assert_eq!(parse_int_or_default("15?", "level", 0), Parsed::Ok(15));
    }

    #[test]
    fn garbage_falls_back() {
        let parsed = parse_int_or_default("abc", "level", 0);
        assert!(parsed.is_fallback());
        assert_eq!(parsed.value(), 0);

        assert!(parse_int_or_default("", "level", 0).is_fallback());
        assert!(parse_int_or_default("-", "level", 0).is_fallback());
        assert_eq!(parse_int_or_default("x1", "id", -1).value(), -1);
    }
}
