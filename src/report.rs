//! 端末表示用の整形

use crm_import_common::{ImportOutcome, ImportVariant, PreviewView};

const CELL_WIDTH: usize = 20;

/// CSVフォーマットの案内
pub fn render_format_hint(variant: &ImportVariant) -> String {
    let mut out = String::from("CSVフォーマット:\n");
    out.push_str(&format!("  {}\n", variant.schema.describe()));
    out.push_str("  例:\n");
    for line in variant.sample_csv().lines() {
        out.push_str(&format!("    {}\n", line));
    }
    out
}

/// プレビュー表
pub fn render_preview(file_name: &str, preview: &PreviewView) -> String {
    let mut out = format!("📄 {}  {} 件の連絡先データ\n\n", file_name, preview.total_row_count);

    let header: Vec<String> = std::iter::once("#".to_string())
        .chain(preview.headers.iter().map(|h| cell(h)))
        .collect();
    out.push_str(&header.join(" | "));
    out.push('\n');
    out.push_str(&"-".repeat(header.join(" | ").chars().count()));
    out.push('\n');

    for (i, row) in preview.sample_rows.iter().enumerate() {
        let line: Vec<String> = std::iter::once((i + 1).to_string())
            .chain(row.iter().map(|c| if c.is_empty() { "-".to_string() } else { cell(c) }))
            .collect();
        out.push_str(&line.join(" | "));
        out.push('\n');
    }

    if preview.is_truncated() {
        out.push_str(&format!(
            "\n最初の{}件を表示しています（全{}件）\n",
            preview.sample_rows.len(),
            preview.total_row_count
        ));
    }
    out
}

/// インポート結果
pub fn render_outcome(outcome: &ImportOutcome) -> String {
    let mut out = if outcome.is_clean() {
        String::from("✅ インポート完了\n")
    } else {
        String::from("⚠ インポート完了（一部エラーあり）\n")
    };
    out.push_str(&format!("  成功: {}\n", outcome.imported_count));
    out.push_str(&format!("  失敗: {}\n", outcome.failed_count));

    if !outcome.errors.is_empty() {
        out.push_str("\nエラー詳細:\n");
        for err in outcome.visible_errors() {
            out.push_str(&format!("  行 {}: {}\n", err.line_number, err.message));
        }
        if outcome.hidden_error_count() > 0 {
            out.push_str(&format!("  他 {} 件のエラー\n", outcome.hidden_error_count()));
        }
    }
    out
}

fn cell(value: &str) -> String {
    if value.chars().count() > CELL_WIDTH {
        let truncated: String = value.chars().take(CELL_WIDTH - 1).collect();
        format!("{}…", truncated)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_import_common::ImportRowError;

    #[test]
    fn test_render_preview_marks_truncation() {
        let preview = PreviewView {
            headers: vec!["customer_id".into(), "name".into()],
            sample_rows: vec![vec!["C1".into(), "".into()]],
            total_row_count: 40,
        };
        let out = render_preview("m.csv", &preview);
        assert!(out.contains("40 件"));
        assert!(out.contains("1 | C1 | -"));
        assert!(out.contains("最初の1件を表示しています（全40件）"));
    }

    #[test]
    fn test_render_outcome_partial() {
        let outcome = ImportOutcome {
            imported_count: 8,
            failed_count: 12,
            errors: (1..=12)
                .map(|i| ImportRowError { line_number: i, message: "invalid phone".into() })
                .collect(),
        };
        let out = render_outcome(&outcome);
        assert!(out.contains("一部エラーあり"));
        assert!(out.contains("行 10: invalid phone"));
        assert!(!out.contains("行 11:"));
        assert!(out.contains("他 2 件のエラー"));
    }

    #[test]
    fn test_render_outcome_clean() {
        let outcome = ImportOutcome { imported_count: 3, ..Default::default() };
        let out = render_outcome(&outcome);
        assert!(out.starts_with("✅ インポート完了"));
        assert!(!out.contains("エラー詳細"));
    }

    #[test]
    fn test_cell_truncates_long_values() {
        let long = "あ".repeat(30);
        assert_eq!(cell(&long).chars().count(), CELL_WIDTH);
    }

    #[test]
    fn test_format_hint_master() {
        let out = render_format_hint(&ImportVariant::contact_master());
        assert!(out.contains("必須カラム: customer_id / 任意カラム: name, sex, phone, mail, fax"));
        assert!(out.contains("    customer_id,name,sex,phone,mail,fax\n"));
    }

    #[test]
    fn test_format_hint_contact() {
        let out = render_format_hint(&ImportVariant::contact("CUST-1"));
        assert!(out.contains("  カラム: name, sex, phone, mail, fax\n"));
        assert!(out.contains("山田太郎"));
    }
}
