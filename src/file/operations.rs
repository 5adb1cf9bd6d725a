//! テキストと行列の相互変換
//!
//! 保存形式は「一行ごとに改行で終端したプレーンテキスト」。
//! 読み込み時は BOM を除去し、改行コードを LF に統一してから分割する。

const UTF8_BOM: char = '\u{feff}';

/// ファイル内容を行の列に分割
///
/// 末尾の改行は空行を増やさない。空の内容は空の列になる。
pub fn split_lines(content: &str) -> Vec<String> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

    if content.contains('\r') {
        log::warn!("Non-LF line endings detected, will be normalized");
        let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
        return normalized.lines().map(str::to_string).collect();
    }

    content.lines().map(str::to_string).collect()
}

/// 行の列を保存用テキストに結合（各行を改行で終端）
pub fn join_lines(lines: &[String]) -> String {
    let capacity = lines.iter().map(|line| line.len() + 1).sum();
    let mut content = String::with_capacity(capacity);
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    content
}
