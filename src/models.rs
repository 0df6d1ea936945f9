// src/models.rs

/// 一条联络记录的八个字段，顺序即 CSV 列顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Callsign,
    Band,
    Frequency,
    Mode,
    Time,
    Date,
    Sent,
    Received,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Callsign,
        Field::Band,
        Field::Frequency,
        Field::Mode,
        Field::Time,
        Field::Date,
        Field::Sent,
        Field::Received,
    ];

    /// CSV 表头中的列名
    pub fn column(self) -> &'static str {
        match self {
            Field::Callsign => "Callsign",
            Field::Band => "Band",
            Field::Frequency => "Frequency",
            Field::Mode => "Mode",
            Field::Time => "Time",
            Field::Date => "Date",
            Field::Sent => "Sent",
            Field::Received => "Received",
        }
    }

    /// 摘要中使用的标签，包含制表符前的对齐空格
    pub fn label(self) -> &'static str {
        match self {
            Field::Callsign => "Callsign:\t",
            Field::Band => "Band:  \t",
            Field::Frequency => "Freq.:  \t",
            Field::Mode => "Mode:  \t",
            Field::Time => "Time:\t",
            Field::Date => "Date:\t",
            Field::Sent => "Sent:   \t",
            Field::Received => "Received:\t",
        }
    }

    /// 交互模式下的提示名
    pub fn prompt(self) -> &'static str {
        match self {
            Field::Frequency => "Freq.",
            Field::Received => "Received",
            other => other.column(),
        }
    }

    /// 记录后是否保留（波段/频率/模式通常在多次联络间不变）
    pub fn is_sticky(self) -> bool {
        matches!(self, Field::Band | Field::Frequency | Field::Mode)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactEntry {
    pub callsign: Option<String>,
    pub band: Option<String>,
    pub frequency: Option<String>,
    pub mode: Option<String>,
    pub time: Option<String>, // 通常为 UTC HH:MM:SS
    pub date: Option<String>, // 通常为 UTC YYYY-MM-DD
    pub sent_report: Option<String>,
    pub received_report: Option<String>,
}

impl ContactEntry {
    /// 按列顺序从原始字符串构造，空字符串视为未提供
    pub fn from_values<S: AsRef<str>>(values: [S; 8]) -> Self {
        let mut entry = ContactEntry::default();
        for (field, value) in Field::ALL.into_iter().zip(values.iter()) {
            entry.set(field, value.as_ref());
        }
        entry
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Callsign => &self.callsign,
            Field::Band => &self.band,
            Field::Frequency => &self.frequency,
            Field::Mode => &self.mode,
            Field::Time => &self.time,
            Field::Date => &self.date,
            Field::Sent => &self.sent_report,
            Field::Received => &self.received_report,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Callsign => &mut self.callsign,
            Field::Band => &mut self.band,
            Field::Frequency => &mut self.frequency,
            Field::Mode => &mut self.mode,
            Field::Time => &mut self.time,
            Field::Date => &mut self.date,
            Field::Sent => &mut self.sent_report,
            Field::Received => &mut self.received_report,
        }
    }

    /// 取字段值；空字符串与 None 同样视为未提供
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref().filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        *self.slot_mut(field) = if value.is_empty() { None } else { Some(value) };
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }

    /// 清空每次联络都会变化的字段，保留波段、频率和模式
    pub fn clear_transient(&mut self) {
        for field in Field::ALL {
            if !field.is_sticky() {
                self.clear(field);
            }
        }
    }
}
