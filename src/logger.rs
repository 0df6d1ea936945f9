// src/logger.rs

use crate::error::{HamlogError, Result};
use crate::models::ContactEntry;
use crate::record::{self, QuoteStyle, HEADER};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 打开日志文件的方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// 新建或覆盖文件并写入表头
    Create,
    /// 追加到已有日志；文件不存在或为空时先写表头
    Resume,
}

#[derive(Debug)]
enum HandleState {
    Open(File),
    Closed,
}

/// 一次记录会话持有的日志文件
#[derive(Debug)]
pub struct LogHandle {
    path: PathBuf,
    state: HandleState,
    written: usize,
}

impl LogHandle {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 本次会话写入的联络条数
    pub fn entries_written(&self) -> usize {
        self.written
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactLogger {
    style: QuoteStyle,
}

impl ContactLogger {
    pub fn new(style: QuoteStyle) -> Self {
        Self { style }
    }

    /// 开始会话：按模式打开文件，必要时写入表头
    pub fn start_session(&self, path: &Path, mode: SessionMode) -> Result<LogHandle> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = match mode {
            SessionMode::Create => {
                let mut file = File::create(path)?;
                writeln!(file, "{}", HEADER)?;
                file
            }
            SessionMode::Resume => {
                let needs_header = match first_line(path)? {
                    None => true,
                    Some(line) if line == HEADER => false,
                    Some(_) => {
                        return Err(HamlogError::NotAContactLog {
                            path: path.to_path_buf(),
                        })
                    }
                };
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                if needs_header {
                    writeln!(file, "{}", HEADER)?;
                } else if !ends_with_newline(path)? {
                    // 最后一行缺少换行时补上，避免新行拼接到上一行
                    writeln!(file)?;
                }
                file
            }
        };
        file.flush()?;

        info!(path = %path.display(), ?mode, "log session started");
        Ok(LogHandle {
            path: path.to_path_buf(),
            state: HandleState::Open(file),
            written: 0,
        })
    }

    /// 记录一条联络：追加 CSV 行并立即落盘，返回显示用摘要
    pub fn record_entry(&self, handle: &mut LogHandle, entry: &ContactEntry) -> Result<String> {
        let file = match &mut handle.state {
            HandleState::Open(file) => file,
            HandleState::Closed => return Err(HamlogError::SessionClosed),
        };

        let row = record::csv_row(entry, self.style);
        file.write_all(row.as_bytes())?;
        file.flush()?;
        file.sync_data()?;
        handle.written += 1;
        debug!(path = %handle.path.display(), row = row.trim_end(), "contact recorded");

        Ok(record::summary(entry))
    }

    /// 结束会话，释放文件；之后的写入都会失败
    pub fn close_session(&self, handle: &mut LogHandle) {
        if let HandleState::Open(_) = std::mem::replace(&mut handle.state, HandleState::Closed) {
            info!(
                path = %handle.path.display(),
                entries = handle.written,
                "log session closed"
            );
        }
    }
}

/// 读取文件第一行；文件不存在或为空时返回 None
fn first_line(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let mut reader = BufReader::new(File::open(path)?);
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// 非空文件的最后一个字节是否为换行
fn ends_with_newline(path: &Path) -> Result<bool> {
    let mut file = File::open(path)?;
    if file.seek(SeekFrom::End(0))? == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

/// 逐行解析日志，单行出错不影响其他行；只有表头错误或 IO 错误才整体失败
///
/// 返回 (行号, 解析结果)，表头是第 1 行。文件末尾的空行被忽略，中间的空行按格式错误处理。
pub fn scan_log(path: &Path) -> Result<Vec<(usize, Result<ContactEntry>)>> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = reader.lines();

    match lines.next().transpose()? {
        Some(header) if header.trim_end_matches('\r') == HEADER => {}
        _ => {
            return Err(HamlogError::NotAContactLog {
                path: path.to_path_buf(),
            })
        }
    }

    let mut rows = lines.collect::<std::io::Result<Vec<String>>>()?;
    while rows.last().is_some_and(|line| line.trim().is_empty()) {
        rows.pop();
    }

    Ok(rows
        .iter()
        .enumerate()
        .map(|(idx, line)| (idx + 2, record::parse_row(line, idx + 2)))
        .collect())
}

/// 读回整个日志，按写入顺序返回联络记录；遇到第一行坏数据即失败
pub fn read_log(path: &Path) -> Result<Vec<ContactEntry>> {
    scan_log(path)?
        .into_iter()
        .map(|(_, entry)| entry)
        .collect()
}
