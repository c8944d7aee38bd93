// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! CSV rendering of ledger entries
//!
//! The layout is the generic import format accepted by common crypto tax
//! tools. The net worth columns are always left empty.

use std::io::Write;

use crate::{ExportError, LedgerEntry};

/// Header row of the CSV export
pub const CSV_HEADER: &str = "Date,Sent Amount,Sent Currency,Received Amount,Received Currency,Fee Amount,Fee Currency,Net Worth Amount,Net Worth Currency,Label,Description,TxHash";

/// RFC 822 timestamp, always in UTC
const DATE_FORMAT: &str = "%d %b %y %H:%M UTC";

impl LedgerEntry {
    /// Render the entry as one CSV row, without a line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use cosmoscan::{EntryLabel, LedgerEntry};
    ///
    /// let time = Utc.with_ymd_and_hms(2022, 3, 14, 9, 26, 53).unwrap();
    /// let mut entry = LedgerEntry::new(time, "ABCD", 42, 3, "coin_received - Send");
    /// entry.received_amount = 1.5;
    /// entry.received_currency = "JUNO".into();
    /// entry.label = EntryLabel::Deposit;
    ///
    /// assert_eq!(
    ///     entry.to_csv_record(),
    ///     r#""14 Mar 22 09:26 UTC","0","","1.5","JUNO","0","",,,"deposit","coin_received - Send","ABCD-3""#
    /// );
    /// ```
    pub fn to_csv_record(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},,,{},{},{}",
            quote(&self.timestamp.format(DATE_FORMAT).to_string()),
            quote(&self.sent_amount.to_string()),
            quote(&self.sent_currency),
            quote(&self.received_amount.to_string()),
            quote(&self.received_currency),
            quote(&self.fee_amount.to_string()),
            quote(&self.fee_currency),
            quote(self.label.as_str()),
            quote(&self.description),
            quote(&self.reference()),
        )
    }
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Write `entries` as CSV, header first, one row per entry
pub fn write_csv<'a, W, I>(mut writer: W, entries: I) -> Result<(), ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a LedgerEntry>,
{
    writeln!(writer, "{CSV_HEADER}")?;
    for entry in entries {
        writeln!(writer, "{}", entry.to_csv_record())?;
    }
    writer.flush()?;
    Ok(())
}
