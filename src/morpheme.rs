use once_cell::sync::Lazy;
use regex::Regex;

// 形態素の区切り: "-" (接辞) と "=" (接語)
static REGEX_MORPHEME_DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-=]+").unwrap());

// 連続した区切りは 1 つとみなし，空の形態素は作らない
pub fn split_morphemes(s: Option<&str>) -> Vec<&str> {
    match s {
        Some(s) if !s.is_empty() => REGEX_MORPHEME_DELIMITER
            .split(s)
            .filter(|segment| !segment.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}
