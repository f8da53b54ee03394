//! 文本截断工具

/// 卡片标题与描述最多显示的单词数
pub const CARD_MAX_WORDS: usize = 20;

/// Keep the first `max_words` space-separated words, appending `...` when
/// anything was cut.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split(' ').collect();
    if words.len() > max_words {
        format!("{}...", words[..max_words].join(" "))
    } else {
        text.to_string()
    }
}

/// Keep at most `max_chars` characters, appending `...` when cut.
///
/// Counts chars rather than bytes so multi-byte text never splits.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
