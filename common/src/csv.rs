//! CSVトークナイザ
//!
//! カンマ区切り・ダブルクォート囲み・`""` エスケープのみを扱う。
//! 行分割はクォート解析より先に行うため、クォート内の改行は
//! 2行に分かれる（既知の制限として維持）。

use crate::error::{ImportError, Result};
use serde::Serialize;

const BOM: char = '\u{feff}';

/// トークナイズ結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocument {
    /// 1行目のヘッダー（元の大文字・小文字を保持）
    pub headers: Vec<String>,
    /// データ行（ヘッダーを除く全行、列数は揃っているとは限らない）
    pub rows: Vec<Vec<String>>,
    /// データ行数
    pub total_row_count: usize,
}

/// CSVテキストをヘッダーとデータ行に分解
///
/// 空行（空白のみの行を含む）は読み飛ばす。
/// 残る行が1行もなければ `ImportError::EmptyDocument`。
///
/// # Examples
/// ```
/// use crm_import_common::tokenize;
///
/// let doc = tokenize("name,phone\n\"Doe, John\",789").unwrap();
/// assert_eq!(doc.headers, vec!["name", "phone"]);
/// assert_eq!(doc.rows[0][0], "Doe, John");
/// ```
pub fn tokenize(text: &str) -> Result<ParsedDocument> {
    let text = text.strip_prefix(BOM).unwrap_or(text);

    let mut lines = split_lines(text)
        .into_iter()
        .filter(|line| !line.trim().is_empty());

    let header_line = lines.next().ok_or(ImportError::EmptyDocument)?;
    let headers = parse_line(header_line);
    let rows: Vec<Vec<String>> = lines.map(parse_line).collect();
    let total_row_count = rows.len();

    tracing::debug!(columns = headers.len(), rows = total_row_count, "CSVをトークナイズ");

    Ok(ParsedDocument {
        headers,
        rows,
        total_row_count,
    })
}

/// CR / LF / CRLF のいずれでも行を区切る
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    lines.push(&text[start..]);
    lines
}

/// 1行をフィールドに分解
///
/// クォート外の前後空白は除去し、クォート内の空白は保持する。
fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = FieldBuffer::default();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                field.push_quoted('"');
            }
            '"' => {
                in_quotes = !in_quotes;
                field.protect();
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field).finish());
            }
            c if in_quotes => field.push_quoted(c),
            c => field.push(c),
        }
    }
    fields.push(field.finish());
    fields
}

/// フィールド値の組み立て用バッファ
///
/// `protected` はクォート由来で末尾トリムの対象外となる長さ（バイト）。
#[derive(Default)]
struct FieldBuffer {
    value: String,
    protected: usize,
}

impl FieldBuffer {
    fn push(&mut self, c: char) {
        if self.value.is_empty() && c.is_whitespace() {
            return;
        }
        self.value.push(c);
    }

    fn push_quoted(&mut self, c: char) {
        self.value.push(c);
        self.protect();
    }

    fn protect(&mut self) {
        self.protected = self.value.len();
    }

    fn finish(mut self) -> String {
        let keep = self.value[self.protected..].trim_end().len();
        self.value.truncate(self.protected + keep);
        self.value
    }
}
