use crate::error::{CrmImportError, Result};
use crm_import_common::{check_file, SelectedFile};
use std::path::Path;

/// ディスク上のCSVを読み込む
///
/// 拡張子とサイズはメタデータで先に検査し、上限超えのファイルは読み込まない。
pub fn load_selected_file(path: &Path) -> Result<SelectedFile> {
    if !path.is_file() {
        return Err(CrmImportError::FileNotFound(path.display().to_string()));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let size = std::fs::metadata(path)?.len();
    check_file(&name, size)?;

    let bytes = std::fs::read(path)?;
    Ok(SelectedFile::new(name, bytes))
}
