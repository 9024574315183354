//! ファイル入力の受付チェック

use crate::error::{ImportError, Result};

/// アップロード可能な最大サイズ（10MB）
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

const CSV_EXTENSION: &str = ".csv";

/// ユーザーが選択したファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// UTF-8としてデコードしたテキスト（不正バイトは置換文字、BOMは除去）
    pub fn text(&self) -> String {
        decode_text(&self.bytes)
    }
}

pub(crate) fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix('\u{feff}').unwrap_or(&*text).to_string()
}

/// 拡張子とサイズを検査（内容の解析前に行う）
pub fn check_file(name: &str, size: u64) -> Result<()> {
    if !has_csv_extension(name) {
        return Err(ImportError::FileType(name.to_string()));
    }

    if size > MAX_FILE_SIZE {
        return Err(ImportError::FileSize {
            size,
            limit: MAX_FILE_SIZE,
        });
    }

    Ok(())
}

fn has_csv_extension(name: &str) -> bool {
    name.len() >= CSV_EXTENSION.len()
        && name.is_char_boundary(name.len() - CSV_EXTENSION.len())
        && name[name.len() - CSV_EXTENSION.len()..].eq_ignore_ascii_case(CSV_EXTENSION)
}
