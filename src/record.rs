// src/record.rs

use crate::error::{HamlogError, Result};
use crate::models::{ContactEntry, Field};

/// 未填写字段的占位文本
pub const PLACEHOLDER: &str = "{Not Provided}";

/// 日志文件第一行
pub const HEADER: &str = "Callsign,Band,Frequency,Mode,Time,Date,Sent,Received";

/// CSV 单元格中双引号的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// 原样写入，值中含 `"` 时该行不再是合法 CSV
    #[default]
    Verbatim,
    /// 按 RFC 4180 将 `"` 写为 `""`
    Escaped,
}

/// 按列顺序解析出每个字段的显示文本
fn resolved(entry: &ContactEntry) -> impl Iterator<Item = (Field, &str)> {
    Field::ALL
        .into_iter()
        .map(move |field| (field, entry.get(field).unwrap_or(PLACEHOLDER)))
}

/// 生成 "Last Contact:" 摘要
pub fn summary(entry: &ContactEntry) -> String {
    let mut out = String::from("Last Contact:\n");
    out.push_str(&summary_lines(entry));
    out
}

/// 每个字段一行 "Label:\t<value>"
pub fn summary_lines(entry: &ContactEntry) -> String {
    let mut out = String::new();
    for (field, value) in resolved(entry) {
        out.push_str(field.label());
        out.push_str(value);
        out.push('\n');
    }
    out
}

/// 生成一行 CSV（含结尾换行）
pub fn csv_row(entry: &ContactEntry, style: QuoteStyle) -> String {
    let cells: Vec<String> = resolved(entry)
        .map(|(_, value)| match style {
            QuoteStyle::Verbatim => format!("\"{}\"", value),
            QuoteStyle::Escaped => format!("\"{}\"", value.replace('"', "\"\"")),
        })
        .collect();
    let mut row = cells.join(",");
    row.push('\n');
    row
}

/// 把一行带引号的单元格拆开，`""` 视为转义的引号
fn split_cells(line: &str, line_no: usize) -> Result<Vec<String>> {
    let malformed = |detail: &str| HamlogError::MalformedRow {
        line: line_no,
        detail: detail.to_string(),
    };

    let mut cells = Vec::new();
    let mut chars = line.chars().peekable();
    loop {
        if chars.next() != Some('"') {
            return Err(malformed("expected an opening quote"));
        }
        let mut cell = String::new();
        loop {
            match chars.next() {
                Some('"') => {
                    if chars.peek() != Some(&'"') {
                        break;
                    }
                    chars.next();
                    cell.push('"');
                }
                Some(c) => cell.push(c),
                None => return Err(malformed("unterminated quoted cell")),
            }
        }
        cells.push(cell);
        match chars.next() {
            Some(',') => continue,
            None => break,
            Some(_) => return Err(malformed("unexpected character after closing quote")),
        }
    }
    Ok(cells)
}

/// 解析一行数据，占位文本还原为未提供
pub fn parse_row(line: &str, line_no: usize) -> Result<ContactEntry> {
    let cells = split_cells(line.trim_end_matches(['\r', '\n']), line_no)?;
    if cells.len() != Field::ALL.len() {
        return Err(HamlogError::MalformedRow {
            line: line_no,
            detail: format!("expected {} cells, found {}", Field::ALL.len(), cells.len()),
        });
    }

    let mut entry = ContactEntry::default();
    for (field, cell) in Field::ALL.into_iter().zip(cells) {
        if cell != PLACEHOLDER {
            entry.set(field, cell);
        }
    }
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w1aw() -> ContactEntry {
        ContactEntry::from_values([
            "W1AW",
            "20m",
            "14.250",
            "SSB",
            "18:32:05",
            "2024-05-01",
            "59",
            "57",
        ])
    }

    #[test]
    fn header_lists_columns_in_order() {
        let columns: Vec<&str> = Field::ALL.iter().map(|f| f.column()).collect();
        assert_eq!(HEADER, columns.join(","));
    }

    #[test]
    fn csv_row_for_complete_entry() {
        assert_eq!(
            csv_row(&w1aw(), QuoteStyle::Verbatim),
            "\"W1AW\",\"20m\",\"14.250\",\"SSB\",\"18:32:05\",\"2024-05-01\",\"59\",\"57\"\n"
        );
    }

    #[test]
    fn summary_for_complete_entry() {
        assert_eq!(
            summary(&w1aw()),
            "Last Contact:\nCallsign:\tW1AW\nBand:  \t20m\nFreq.:  \t14.250\nMode:  \tSSB\n\
             Time:\t18:32:05\nDate:\t2024-05-01\nSent:   \t59\nReceived:\t57\n"
        );
    }

    #[test]
    fn empty_entry_uses_placeholder_everywhere() {
        let entry = ContactEntry::default();
        let row = csv_row(&entry, QuoteStyle::Verbatim);
        assert_eq!(row, format!("{}\n", vec!["\"{Not Provided}\""; 8].join(",")));

        let text = summary(&entry);
        assert_eq!(text.lines().count(), 9);
        assert!(text.lines().skip(1).all(|l| l.ends_with("\t{Not Provided}")));
    }

    #[test]
    fn partial_entry_mixes_values_and_placeholders() {
        let mut entry = ContactEntry::default();
        entry.set(Field::Callsign, "K1ABC");
        entry.set(Field::Mode, "CW");
        let row = csv_row(&entry, QuoteStyle::Verbatim);
        assert!(row.starts_with("\"K1ABC\",\"{Not Provided}\",\"{Not Provided}\",\"CW\","));
        assert_eq!(row.matches(',').count(), 7);
        assert!(summary(&entry).contains("Band:  \t{Not Provided}\n"));
    }

    #[test]
    fn commas_stay_inside_quotes() {
        let mut entry = ContactEntry::default();
        entry.set(Field::Callsign, "W1AW, portable");
        let row = csv_row(&entry, QuoteStyle::Verbatim);
        assert!(row.starts_with("\"W1AW, portable\","));
        assert_eq!(parse_row(&row, 2).unwrap(), entry);
    }

    #[test]
    fn verbatim_style_leaves_quotes_unescaped() {
        let mut entry = ContactEntry::default();
        entry.set(Field::Callsign, "say \"hi\"");
        let row = csv_row(&entry, QuoteStyle::Verbatim);
        assert!(row.starts_with("\"say \"hi\"\","));
        assert!(parse_row(&row, 2).is_err());
    }

    #[test]
    fn escaped_style_doubles_quotes_and_parses_back() {
        let mut entry = ContactEntry::default();
        entry.set(Field::Callsign, "say \"hi\"");
        let row = csv_row(&entry, QuoteStyle::Escaped);
        assert!(row.starts_with("\"say \"\"hi\"\"\","));
        assert_eq!(parse_row(&row, 2).unwrap(), entry);
    }

    #[test]
    fn escaped_style_matches_verbatim_without_quotes() {
        assert_eq!(
            csv_row(&w1aw(), QuoteStyle::Escaped),
            csv_row(&w1aw(), QuoteStyle::Verbatim)
        );
    }

    #[test]
    fn parse_row_recovers_entry() {
        let row = csv_row(&w1aw(), QuoteStyle::Verbatim);
        assert_eq!(parse_row(&row, 2).unwrap(), w1aw());
    }

    #[test]
    fn parse_row_rejects_wrong_cell_count() {
        let err = parse_row("\"a\",\"b\"", 3).unwrap_err();
        assert!(matches!(err, HamlogError::MalformedRow { line: 3, .. }));
    }

    #[test]
    fn parse_row_rejects_unquoted_cells() {
        assert!(parse_row("a,b,c,d,e,f,g,h", 2).is_err());
        assert!(parse_row("\"a", 2).is_err());
    }
}
