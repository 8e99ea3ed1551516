/// Форматирует число с разделителями тысяч (точками)
///
/// # Примеры
/// ```ignore
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Строка лога запроса: `время | мс | байты | статус метод путь`
pub fn request_log_line(
    time: &str,
    duration_ms: u128,
    size: Option<usize>,
    status: u16,
    method: &str,
    path: &str,
) -> String {
    let size = size.map(format_number).unwrap_or_else(|| "error".to_string());
    format!(
        "{} | {:>5}ms | {:>12} | {} {:>6} {}",
        time, duration_ms, size, status, method, path
    )
}
