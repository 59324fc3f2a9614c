// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Raw timeline records as they appear in site data files.

use crate::{
    entry::{Entry, EntryEnd, EntryInfo, EntryKind},
    err::RecordError,
    id::EntryId,
};
use serde::{Deserialize, Serialize};
use swimlane_core::date::parse_date;

/// One record of a timeline data file.
///
/// Field names follow the data files (`startdate`, `enddate`, `type`).
/// A missing, `null` or blank `enddate` marks an ongoing entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntryRecord {
    pub startdate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enddate: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shorttitle: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EntryRecord {
    pub fn new(startdate: impl Into<String>, enddate: Option<&str>, title: impl Into<String>) -> Self {
        Self {
            startdate: startdate.into(),
            enddate: enddate.map(str::to_string),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Parses the dates and validates the span.
    pub fn to_entry(&self, id: EntryId) -> Result<Entry<i64>, RecordError> {
        let start = parse_date(&self.startdate)
            .map_err(|source| RecordError::StartDate { id, source })?;
        let end = match self.enddate.as_deref().map(str::trim) {
            None | Some("") => EntryEnd::Ongoing,
            Some(s) => EntryEnd::Until(
                parse_date(s).map_err(|source| RecordError::EndDate { id, source })?,
            ),
        };
        Ok(Entry::new(id, start, end, self.info())?)
    }

    fn info(&self) -> EntryInfo {
        let mut info = EntryInfo::new(self.title.clone());
        if let Some(v) = non_blank(&self.shorttitle) {
            info = info.with_short_title(v);
        }
        if let Some(v) = non_blank(&self.kind) {
            info = info.with_kind(EntryKind::from(v));
        }
        if let Some(v) = non_blank(&self.url) {
            info = info.with_url(v);
        }
        if let Some(v) = non_blank(&self.logo) {
            info = info.with_logo(v);
        }
        if let Some(v) = non_blank(&self.summary) {
            info = info.with_summary(v);
        }
        if let Some(v) = non_blank(&self.description) {
            info = info.with_description(v);
        }
        info
    }
}

#[inline]
fn non_blank(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.trim().is_empty())
}
