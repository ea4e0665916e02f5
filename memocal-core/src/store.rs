//! In-memory memo collection.

use chrono::NaiveDate;

use crate::codec;
use crate::error::MemocalResult;
use crate::memo::Memo;

/// Insertion-ordered collection of memos.
///
/// Several memos may share a date; callers wanting one-memo-per-day
/// overwrite semantics call [`remove_on`](MemoStore::remove_on) before
/// [`add`](MemoStore::add). The store itself performs no deduplication
/// and no date sorting.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoStore {
    memos: Vec<Memo>,
}

impl MemoStore {
    pub fn new() -> MemoStore {
        MemoStore::default()
    }

    /// Append a memo.
    ///
    /// Rejects content carrying a codec separator or line break; the flat
    /// encoding performs no escaping, so such content would corrupt every
    /// record after it on the next save.
    pub fn add(&mut self, memo: Memo) -> MemocalResult<()> {
        Memo::validate_content(&memo.content)?;
        self.memos.push(memo);
        Ok(())
    }

    /// Remove the first memo equal by full value. No-op when absent.
    /// Returns whether a memo was removed.
    pub fn remove(&mut self, memo: &Memo) -> bool {
        match self.memos.iter().position(|m| m == memo) {
            Some(index) => {
                self.memos.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every memo on the given date, returning how many were removed.
    pub fn remove_on(&mut self, date: NaiveDate) -> usize {
        let before = self.memos.len();
        self.memos.retain(|m| m.date != date);
        before - self.memos.len()
    }

    /// All memos on the given date, in insertion order.
    pub fn memos_on(&self, date: NaiveDate) -> Vec<&Memo> {
        self.memos.iter().filter(|m| m.date == date).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Memo> {
        self.memos.iter()
    }

    pub fn len(&self) -> usize {
        self.memos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memos.is_empty()
    }

    /// Encode the full collection into the flat persisted string.
    ///
    /// Cannot fail: the separator invariant is enforced at `add`.
    pub fn serialize(&self) -> String {
        codec::encode(&self.memos)
    }

    /// Decode a persisted string. Malformed records are skipped, so a
    /// partially corrupted string still yields every valid memo.
    pub fn deserialize(input: &str) -> MemoStore {
        MemoStore {
            memos: codec::decode(input),
        }
    }
}
