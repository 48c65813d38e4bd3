//! Persisted high score
//!
//! A single integer under one key, read once at startup and written on every
//! new record. Storage trouble never stops the game: an unreadable value
//! counts as 0 and a failed write disables further writes for the session.

use crate::persistence::{KeyValueStore, StoreError};

/// Best score seen, plus whether the store still accepts writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScore {
    pub best: u64,
    writable: bool,
}

impl Default for HighScore {
    fn default() -> Self {
        Self {
            best: 0,
            writable: true,
        }
    }
}

impl HighScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "blockBreakerHighScore";

    /// Read the stored high score
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Ok(Some(text)) => match text.trim().parse::<u64>() {
                Ok(best) => {
                    log::info!("Loaded high score {}", best);
                    Self {
                        best,
                        writable: true,
                    }
                }
                Err(_) => {
                    log::warn!("Ignoring unreadable high score {:?}", text);
                    Self::default()
                }
            },
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                Self::default()
            }
            Err(err) => {
                log::warn!("High score storage unavailable ({}), not persisting", err);
                Self {
                    best: 0,
                    writable: false,
                }
            }
        }
    }

    pub fn is_writable(&self) -> bool {
        self.writable
    }

    /// Record a finished run's score; persists if it beats the best
    ///
    /// Returns true if `score` is a new record (even when the write fails).
    pub fn record(&mut self, store: &mut dyn KeyValueStore, score: u64) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if self.writable {
            if let Err(err) = self.save(store) {
                log::warn!("Could not save high score: {}", err);
                self.writable = false;
            }
        }
        true
    }

    fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        store.set(Self::STORAGE_KEY, &self.best.to_string())?;
        log::info!("High score saved ({})", self.best);
        Ok(())
    }
}
