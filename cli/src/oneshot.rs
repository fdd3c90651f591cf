//! Non-interactive mode: `flames NAME1 NAME2`.

use serde::Serialize;

use flames_engine::{InvalidInput, Name, NameSlot, Reading, flames};

/// Everything printed for `--json`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub first: Name,
    pub second: Name,
    #[serde(flatten)]
    pub reading: Reading,
    pub label: &'static str,
    pub message: &'static str,
}

impl Report {
    pub fn new(first: &str, second: &str) -> Result<Self, InvalidInput> {
        let first = Name::parse(NameSlot::First, first)?;
        let second = Name::parse(NameSlot::Second, second)?;
        let reading = flames::evaluate(&first, &second);
        let details = reading.code.details();
        Ok(Self {
            first,
            second,
            reading,
            label: details.label,
            message: details.message,
        })
    }

    pub fn to_text(&self, ascii: bool) -> String {
        let heart = if ascii { "<3" } else { "♥" };
        let struck: Vec<String> = self
            .reading
            .eliminated
            .iter()
            .map(|code| code.letter().to_string())
            .collect();
        format!(
            "{} {heart} {}: {}\n{}\n({} letters left; struck {})",
            self.first,
            self.second,
            self.label,
            self.message,
            self.reading.survivors,
            struck.join(" "),
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
