use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::deriver::TagDeriver;
use super::types::{PersonalityTagSet, ResponseIntensity};
use crate::error::TaggingError;

/// Answers keyed by probe index, bounded by the catalog size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseRecord {
    catalog_size: usize,
    responses: BTreeMap<usize, ResponseIntensity>,
}

impl ResponseRecord {
    pub fn new(catalog_size: usize) -> Self {
        Self {
            catalog_size,
            responses: BTreeMap::new(),
        }
    }

    /// Inserts or overwrites the answer at `index`, returning the previous one.
    pub fn record_response(
        &mut self,
        index: usize,
        intensity: ResponseIntensity,
    ) -> Result<Option<ResponseIntensity>, TaggingError> {
        if index >= self.catalog_size {
            return Err(TaggingError::InvalidIndex {
                index,
                catalog_size: self.catalog_size,
            });
        }
        Ok(self.responses.insert(index, intensity))
    }

    pub fn get(&self, index: usize) -> Option<ResponseIntensity> {
        self.responses.get(&index).copied()
    }

    pub fn catalog_size(&self) -> usize {
        self.catalog_size
    }

    pub fn answered(&self) -> usize {
        self.responses.len()
    }

    pub fn is_complete(&self) -> bool {
        is_session_complete(self, self.catalog_size)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, ResponseIntensity)> + '_ {
        self.responses.iter().map(|(&index, &intensity)| (index, intensity))
    }
}

#[derive(Deserialize)]
struct RawResponseRecord {
    catalog_size: usize,
    #[serde(default)]
    responses: BTreeMap<usize, ResponseIntensity>,
}

impl<'de> Deserialize<'de> for ResponseRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawResponseRecord::deserialize(deserializer)?;
        let mut record = Self::new(raw.catalog_size);
        for (index, intensity) in raw.responses {
            record
                .record_response(index, intensity)
                .map_err(serde::de::Error::custom)?;
        }
        Ok(record)
    }
}

/// True iff every index in `[0, catalog_size)` has an answer.
pub fn is_session_complete(record: &ResponseRecord, catalog_size: usize) -> bool {
    (0..catalog_size).all(|index| record.responses.contains_key(&index))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Answering,
    Complete,
    Derived,
}

/// One onboarding pass: answers accumulate until the catalog is covered,
/// then tags are derived exactly once.
#[derive(Debug, Clone)]
pub struct TaggingSession {
    deriver: TagDeriver,
    record: ResponseRecord,
    cursor: usize,
    state: SessionState,
}

impl TaggingSession {
    pub fn new(deriver: TagDeriver) -> Self {
        let record = deriver.new_record();
        Self {
            deriver,
            record,
            cursor: 0,
            state: SessionState::Answering,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn record(&self) -> &ResponseRecord {
        &self.record
    }

    pub fn deriver(&self) -> &TagDeriver {
        &self.deriver
    }

    /// Index of the next unanswered card in catalog order, if any.
    pub fn current_index(&self) -> Option<usize> {
        (self.cursor < self.record.catalog_size()).then_some(self.cursor)
    }

    /// Answers the current card and advances.
    pub fn answer_current(
        &mut self,
        intensity: ResponseIntensity,
    ) -> Result<SessionState, TaggingError> {
        let index = self.current_index().ok_or(TaggingError::InvalidIndex {
            index: self.cursor,
            catalog_size: self.record.catalog_size(),
        })?;
        self.record_response(index, intensity)
    }

    /// Records an answer at any index. Overwrites are allowed until derivation.
    pub fn record_response(
        &mut self,
        index: usize,
        intensity: ResponseIntensity,
    ) -> Result<SessionState, TaggingError> {
        if self.state == SessionState::Derived {
            return Err(TaggingError::AlreadyDerived);
        }
        if let Some(previous) = self.record.record_response(index, intensity)? {
            tracing::debug!(index, %previous, %intensity, "tagging.overwrite");
        }
        while self.cursor < self.record.catalog_size() && self.record.get(self.cursor).is_some() {
            self.cursor += 1;
        }
        if self.record.is_complete() {
            self.state = SessionState::Complete;
        }
        Ok(self.state)
    }

    /// Runs the deriver once. A second call fails with `AlreadyDerived`.
    pub fn derive(&mut self) -> Result<PersonalityTagSet, TaggingError> {
        match self.state {
            SessionState::Derived => Err(TaggingError::AlreadyDerived),
            SessionState::Answering => Err(TaggingError::IncompleteSession {
                answered: self.record.answered(),
                required: self.record.catalog_size(),
            }),
            SessionState::Complete => {
                let tags = self.deriver.derive_tags(&self.record)?;
                self.state = SessionState::Derived;
                Ok(tags)
            }
        }
    }
}
