//! The event store.
//!
//! Holds every registered event in insertion order and mirrors them to a
//! text file, one line per event. The whole file is rewritten after every
//! mutation. Writes go straight to the target path (no temp file), so a
//! failure halfway through can leave the file truncated.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::codec::Format;
use crate::error::{EvregError, EvregResult, RecordError};
use crate::event::Event;
use crate::user::User;

/// How `Store::open` treats a line that fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Fail the whole load.
    #[default]
    Strict,
    /// Log a warning and keep going.
    Skip,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StoreOptions {
    pub format: Format,
    pub on_malformed: LoadPolicy,
}

/// Identifier assigned when an event enters the store. Unique for the
/// lifetime of a `Store`, never reused, not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
struct Entry {
    id: EventId,
    event: Event,
}

#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    options: StoreOptions,
    entries: Vec<Entry>,
    next_id: u64,
}

impl Store {
    /// Open the store backed by `path`, loading whatever it already holds.
    /// A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>, options: StoreOptions) -> EvregResult<Self> {
        let mut store = Store {
            path: path.into(),
            options,
            entries: Vec::new(),
            next_id: 0,
        };
        store.load()?;
        Ok(store)
    }

    fn load(&mut self) -> EvregResult<()> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no data file yet, starting empty");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        // Raw bytes so a non-UTF-8 line is a malformed record, not an I/O failure.
        for (i, raw) in BufReader::new(file).split(b'\n').enumerate() {
            let mut raw = raw?;
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }

            let line = match String::from_utf8(raw) {
                Ok(line) => line,
                Err(_) => {
                    self.malformed(i + 1, RecordError::NotUtf8)?;
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            match self.options.format.decode(&line) {
                Ok(event) => {
                    self.push(event);
                }
                Err(source) => self.malformed(i + 1, source)?,
            }
        }

        debug!(path = %self.path.display(), count = self.entries.len(), "loaded events");
        Ok(())
    }

    /// Apply the load policy to an undecodable line.
    fn malformed(&self, line: usize, source: RecordError) -> EvregResult<()> {
        match self.options.on_malformed {
            LoadPolicy::Strict => Err(EvregError::MalformedRecord { line, source }),
            LoadPolicy::Skip => {
                warn!(
                    path = %self.path.display(),
                    line,
                    error = %source,
                    "skipping malformed record"
                );
                Ok(())
            }
        }
    }

    fn push(&mut self, event: Event) -> EventId {
        let id = EventId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, event });
        id
    }

    /// Append an event and rewrite the data file.
    ///
    /// An event the configured format cannot encode is rejected before
    /// anything changes. If the write fails the event stays registered in
    /// memory and the I/O error is returned.
    pub fn register(&mut self, event: Event) -> EvregResult<EventId> {
        self.options
            .format
            .encode(&event)
            .map_err(EvregError::UnencodableEvent)?;

        let id = self.push(event);
        info!(%id, index = self.entries.len() - 1, "registered event");

        self.flush()?;
        Ok(id)
    }

    /// Events paired with their position, in order.
    pub fn list(&self) -> impl Iterator<Item = (usize, &Event)> + '_ {
        self.entries.iter().map(|e| &e.event).enumerate()
    }

    pub fn get(&self, index: usize) -> EvregResult<&Event> {
        self.entries
            .get(index)
            .map(|e| &e.event)
            .ok_or_else(|| self.index_error(index))
    }

    fn id_at(&self, index: usize) -> Option<EventId> {
        self.entries.get(index).map(|e| e.id)
    }

    /// Turn user-typed text into a valid index. Negative numbers are out of range.
    pub fn parse_index(&self, input: &str) -> EvregResult<usize> {
        let raw: i64 = input
            .trim()
            .parse()
            .map_err(|_| EvregError::InvalidIndexInput(input.to_string()))?;

        usize::try_from(raw)
            .ok()
            .filter(|&i| i < self.entries.len())
            .ok_or_else(|| self.out_of_range(raw))
    }

    fn index_error(&self, index: usize) -> EvregError {
        self.out_of_range(i64::try_from(index).unwrap_or(i64::MAX))
    }

    fn out_of_range(&self, index: i64) -> EvregError {
        EvregError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        }
    }

    /// Add `event` to the user's confirmed list, then rewrite the data file.
    ///
    /// The store itself does not change here; the rewrite keeps the
    /// write-after-every-mutation rule so the file never lags behind memory.
    /// The confirmation stands even if the write fails.
    pub fn confirm_participation(&self, event: &Event, user: &mut User) -> EvregResult<()> {
        user.confirm(event.clone());
        info!(user = %user.name, event = event.name(), "confirmed participation");
        self.flush()
    }

    /// `get` followed by `confirm_participation`.
    pub fn confirm_at(&self, index: usize, user: &mut User) -> EvregResult<&Event> {
        let event = self.get(index)?;
        self.confirm_participation(event, user)?;
        Ok(event)
    }

    /// Remove the event with this id and rewrite the data file.
    ///
    /// Returns `Ok(None)` if no event has that id. Like `register`, the
    /// in-memory removal stands if the write fails.
    pub fn remove(&mut self, id: EventId) -> EvregResult<Option<Event>> {
        let Some(pos) = self.entries.iter().position(|e| e.id == id) else {
            return Ok(None);
        };

        let entry = self.entries.remove(pos);
        info!(%id, index = pos, "removed event");

        self.flush()?;
        Ok(Some(entry.event))
    }

    /// Remove the event at this position; later events move up by one.
    pub fn remove_at(&mut self, index: usize) -> EvregResult<Event> {
        let Some(id) = self.id_at(index) else {
            return Err(self.index_error(index));
        };

        let removed = self.remove(id)?;
        removed.ok_or_else(|| self.index_error(index))
    }

    /// Rewrite the data file from the in-memory sequence.
    pub fn flush(&self) -> EvregResult<()> {
        let mut content = String::new();
        for entry in &self.entries {
            let line = self
                .options
                .format
                .encode(&entry.event)
                .map_err(EvregError::UnencodableEvent)?;
            content.push_str(&line);
            content.push('\n');
        }

        std::fs::write(&self.path, content)?;

        debug!(path = %self.path.display(), count = self.entries.len(), "flushed events");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
