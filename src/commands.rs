// src/commands.rs

use crate::cli::ContactArgs;
use crate::clock;
use crate::config::Config;
use crate::error::Result;
use crate::logger::{self, ContactLogger, LogHandle, SessionMode};
use crate::models::{ContactEntry, Field};
use crate::record;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

/// 处理 'new' 命令
pub fn handle_new(config: &Config, path: Option<PathBuf>) -> Result<()> {
    let path = config.resolve_log_path(path)?;
    let logger = ContactLogger::new(config.quote_style());
    let mut handle = logger.start_session(&path, SessionMode::Create)?;
    logger.close_session(&mut handle);
    println!("✓ New log created at: {}", handle.path().display());
    Ok(())
}

fn entry_from_args(args: ContactArgs) -> ContactEntry {
    ContactEntry::from_values(
        [
            args.call, args.band, args.freq, args.mode, args.time, args.date, args.sent, args.rcvd,
        ]
        .map(Option::unwrap_or_default),
    )
}

/// 处理 'log' 命令
pub fn handle_log(
    config: &Config,
    file: Option<PathBuf>,
    fields: ContactArgs,
    now: bool,
) -> Result<()> {
    let mut entry = entry_from_args(fields);
    if now {
        if entry.get(Field::Time).is_none() {
            entry.set(Field::Time, clock::current_utc_time());
        }
        if entry.get(Field::Date).is_none() {
            entry.set(Field::Date, clock::current_utc_date());
        }
    }

    let path = config.resolve_log_path(file)?;
    let logger = ContactLogger::new(config.quote_style());
    let mut handle = logger.start_session(&path, SessionMode::Resume)?;
    let summary = logger.record_entry(&mut handle, &entry);
    logger.close_session(&mut handle);

    print!("{}", summary?);
    Ok(())
}

/// 逐个字段提示输入，读到 EOF 时返回 None（未完成的记录被丢弃）
///
/// 空行保留方括号中显示的值，`-` 清空该字段，时间/日期处输入 `now` 填入当前 UTC 值。
/// 在呼号处输入 `--` 清空全部字段（包括波段、频率和模式）并重新开始。
fn prompt_entry<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    current: &ContactEntry,
) -> Result<Option<ContactEntry>> {
    let mut entry = current.clone();
    let mut idx = 0;
    while let Some(&field) = Field::ALL.get(idx) {
        match entry.get(field) {
            Some(value) => write!(output, "{} [{}]: ", field.prompt(), value)?,
            None => write!(output, "{}: ", field.prompt())?,
        }
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim_end_matches(['\r', '\n']) {
            "--" if field == Field::Callsign => {
                entry = ContactEntry::default();
                writeln!(output, "All fields cleared.")?;
                continue;
            }
            "" => {}
            "-" => entry.clear(field),
            "now" if field == Field::Time => entry.set(field, clock::current_utc_time()),
            "now" if field == Field::Date => entry.set(field, clock::current_utc_date()),
            value => entry.set(field, value),
        }
        idx += 1;
    }
    Ok(Some(entry))
}

/// 会话主循环，返回本次写入的条数
fn run_session<R: BufRead, W: Write>(
    logger: &ContactLogger,
    handle: &mut LogHandle,
    mut current: ContactEntry,
    input: &mut R,
    output: &mut W,
) -> Result<usize> {
    while let Some(entry) = prompt_entry(input, output, &current)? {
        let summary = logger.record_entry(handle, &entry)?;
        writeln!(output, "\n{}", summary)?;
        current = entry;
        current.clear_transient();
    }
    Ok(handle.entries_written())
}

/// 处理 'session' 命令
pub fn handle_session(config: &Config, path: Option<PathBuf>, append: bool) -> Result<()> {
    let path = config.resolve_log_path(path)?;
    let mode = if append {
        SessionMode::Resume
    } else {
        SessionMode::Create
    };
    let logger = ContactLogger::new(config.quote_style());
    let mut handle = logger.start_session(&path, mode)?;
    println!("Logging to {}. Press Ctrl+D to finish.\n", path.display());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let result = run_session(&logger, &mut handle, config.initial_entry(), &mut input, &mut output);
    logger.close_session(&mut handle);

    let count = result?;
    println!("\n✓ {} contact(s) logged to {}", count, handle.path().display());
    Ok(())
}

fn print_contact(number: usize, entry: &ContactEntry) {
    println!("[{}]", number);
    print!("{}", record::summary_lines(entry));
    println!("{}", "─".repeat(40));
}

/// 处理 'show' 命令
///
/// 默认跳过无法解析的行并在 stderr 提示；`strict` 时遇到第一行坏数据即报错。
pub fn handle_show(config: &Config, path: Option<PathBuf>, strict: bool) -> Result<()> {
    let path = config.resolve_log_path(path)?;

    let entries = if strict {
        logger::read_log(&path)?
    } else {
        let mut entries = Vec::new();
        for (_, row) in logger::scan_log(&path)? {
            match row {
                Ok(entry) => entries.push(entry),
                Err(e) => eprintln!("Warning: skipped {}", e),
            }
        }
        entries
    };
    debug!(path = %path.display(), count = entries.len(), "log read");

    if entries.is_empty() {
        println!("No contacts logged.");
        return Ok(());
    }

    for (idx, entry) in entries.iter().enumerate() {
        print_contact(idx + 1, entry);
    }
    Ok(())
}

/// 处理 'now' 命令
pub fn handle_now() -> Result<()> {
    println!("Time:\t{}", clock::current_utc_time());
    println!("Date:\t{}", clock::current_utc_date());
    Ok(())
}
