//! File-based word store.
//!
//! Words are kept in an append-only JSON-lines log, one record per line:
//!
//! ```text
//! {"id":1,"value":"hello"}
//! {"id":2,"value":"world"}
//! ```
//!
//! Opening a store replays the log into memory; every later save appends one
//! line. A save that fails part way cuts the log back to where it was, and a
//! final line torn by a crash is dropped on the next open. Complete records
//! are never rewritten.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WordbankError};
use crate::storage::table::WordTable;
use crate::storage::{StorageError, WordStore};
use crate::word::{Word, WordId};

/// Default name of the log file inside the storage directory.
pub const DEFAULT_LOG_FILE: &str = "words.jsonl";

fn default_file_name() -> String {
    DEFAULT_LOG_FILE.to_string()
}

/// Configuration for file-based storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileStorageConfig {
    /// Directory holding the log. Created if missing.
    pub path: PathBuf,

    /// Log file name inside `path`.
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Whether to fsync after every append.
    #[serde(default)]
    pub sync_writes: bool,
}

impl FileStorageConfig {
    /// Create a new file storage configuration with default settings.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileStorageConfig {
            path: path.as_ref().to_path_buf(),
            file_name: default_file_name(),
            sync_writes: false,
        }
    }

    /// Full path of the log file.
    pub fn log_path(&self) -> PathBuf {
        self.path.join(&self.file_name)
    }
}

/// What replaying a log found.
#[derive(Debug)]
struct Replay {
    table: WordTable,
    /// Bytes up to the end of the last complete record.
    valid_len: u64,
    /// The last record parsed but has no trailing newline.
    missing_newline: bool,
}

/// A word store backed by a JSON-lines log on disk.
#[derive(Debug)]
pub struct FileWordStore {
    /// Full path of the log file.
    log_path: PathBuf,
    /// Storage configuration.
    config: FileStorageConfig,
    /// In-memory indexes rebuilt from the log.
    table: RwLock<WordTable>,
    /// Unbuffered append handle. Appends happen under the table write lock.
    file: Mutex<File>,
}

impl FileWordStore {
    /// Open the store in `config.path`, replaying any existing log.
    pub fn open(config: FileStorageConfig) -> Result<Self> {
        let directory = &config.path;

        // Create directory if it doesn't exist
        if !directory.exists() {
            std::fs::create_dir_all(directory)
                .map_err(|e| WordbankError::storage(format!("Failed to create directory: {e}")))?;
        }

        // Verify it's a directory
        if !directory.is_dir() {
            return Err(WordbankError::storage(format!(
                "Path is not a directory: {}",
                directory.display()
            )));
        }

        let log_path = config.log_path();
        let replay = if log_path.exists() {
            Self::replay(&log_path)?
        } else {
            Replay {
                table: WordTable::with_capacity(0),
                valid_len: 0,
                missing_newline: false,
            }
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .map_err(|e| StorageError::IoError(e.to_string()))?;

        Self::repair_tail(&mut file, &replay, &log_path)
            .map_err(|e| StorageError::IoError(format!("Failed to repair log tail: {e}")))?;

        info!(
            "Opened word store at {} with {} words",
            log_path.display(),
            replay.table.len()
        );

        Ok(FileWordStore {
            log_path,
            config,
            table: RwLock::new(replay.table),
            file: Mutex::new(file),
        })
    }

    /// Rebuild the indexes from the log at `path`.
    ///
    /// A malformed record followed by more data is fatal. A malformed final
    /// record without its newline is an interrupted append and ends the log.
    fn replay(path: &Path) -> Result<Replay> {
        let bytes = std::fs::read(path).map_err(|e| StorageError::IoError(e.to_string()))?;
        let mut table = WordTable::with_capacity(0);
        let mut offset = 0;
        let mut line_number = 0;

        while offset < bytes.len() {
            line_number += 1;
            let rest = &bytes[offset..];
            let (line, next, terminated) = match rest.iter().position(|&b| b == b'\n') {
                Some(end) => (&rest[..end], offset + end + 1, true),
                None => (rest, bytes.len(), false),
            };

            if line.iter().all(u8::is_ascii_whitespace) {
                offset = next;
                continue;
            }

            let word: Word = match serde_json::from_slice(line) {
                Ok(word) => word,
                Err(e) if !terminated => {
                    warn!(
                        "Dropping incomplete record at line {line_number} of {}: {e}",
                        path.display()
                    );
                    return Ok(Replay {
                        table,
                        valid_len: offset as u64,
                        missing_newline: false,
                    });
                }
                Err(e) => {
                    return Err(StorageError::CorruptRecord {
                        line: line_number,
                        reason: e.to_string(),
                    }
                    .into());
                }
            };

            table.insert(word).map_err(|e| StorageError::CorruptRecord {
                line: line_number,
                reason: e.to_string(),
            })?;

            if !terminated {
                return Ok(Replay {
                    table,
                    valid_len: bytes.len() as u64,
                    missing_newline: true,
                });
            }
            offset = next;
        }

        Ok(Replay {
            table,
            valid_len: bytes.len() as u64,
            missing_newline: false,
        })
    }

    /// Cut a torn final record and terminate an unterminated one, so the next
    /// append starts on a fresh line.
    fn repair_tail(file: &mut File, replay: &Replay, path: &Path) -> io::Result<()> {
        if file.metadata()?.len() > replay.valid_len {
            warn!(
                "Truncating {} to {} bytes",
                path.display(),
                replay.valid_len
            );
            file.set_len(replay.valid_len)?;
        }
        if replay.missing_newline {
            file.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Full path of the log file.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Storage configuration.
    pub fn config(&self) -> &FileStorageConfig {
        &self.config
    }

    fn append(&self, word: &Word) -> Result<()> {
        let mut record = serde_json::to_vec(word)?;
        record.push(b'\n');

        let mut file = self.file.lock();
        append_record(&mut file, &record).map_err(|e| StorageError::IoError(e.to_string()))?;

        if self.config.sync_writes {
            file.sync_data()
                .map_err(|e| StorageError::IoError(e.to_string()))?;
        }

        Ok(())
    }
}

/// Append `record` to `file`, cutting the file back to its previous length
/// if the write fails.
fn append_record(file: &mut File, record: &[u8]) -> io::Result<()> {
    append_record_with(file, record, |file, record| file.write_all(record))
}

fn append_record_with<F>(file: &mut File, record: &[u8], write: F) -> io::Result<()>
where
    F: FnOnce(&mut File, &[u8]) -> io::Result<()>,
{
    let len = file.metadata()?.len();
    if let Err(e) = write(file, record) {
        if let Err(truncate_err) = file.set_len(len) {
            warn!("Failed to roll back partial append: {truncate_err}");
        }
        return Err(e);
    }
    Ok(())
}

impl WordStore for FileWordStore {
    fn exists(&self, value: &str) -> Result<bool> {
        Ok(self.table.read().contains_value(value))
    }

    fn save(&self, value: &str) -> Result<Word> {
        let mut table = self.table.write();
        let word = table.prepare(value)?;

        // The index only changes once the record is on disk.
        self.append(&word)?;
        table.insert(word.clone())?;

        debug!("Appended word {} to {}", word, self.log_path.display());
        Ok(word)
    }

    fn find_by_id(&self, id: WordId) -> Result<Option<Word>> {
        Ok(self.table.read().get(id).cloned())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.table.read().len())
    }

    fn sync(&self) -> Result<()> {
        self.file
            .lock()
            .sync_all()
            .map_err(|e| StorageError::IoError(e.to_string()))?;
        Ok(())
    }
}
