//! The fixed pool of shows.

use crate::error::SimError;
use crate::show::Show;

/// An ordered, fixed-size collection of [`Show`]s, built once at startup and
/// never resized. The pool exclusively owns its shows; workers share it behind
/// an `Arc`.
#[derive(Debug)]
pub struct ShowPool {
    shows: Vec<Show>,
}

impl ShowPool {
    /// Builds `shows` shows, each opening with `tickets_per_show` seats.
    /// Show ids run 1..=`shows`.
    ///
    /// # Errors
    /// Returns [`SimError::InvalidConfig`] if `shows` is zero. A zero
    /// `tickets_per_show` is allowed: every attempt then ends sold-out.
    pub fn build(shows: u32, tickets_per_show: u32) -> Result<Self, SimError> {
        if shows == 0 {
            return Err(SimError::InvalidConfig { field: "shows", value: 0 });
        }
        let shows = (1..=shows)
            .map(|id| Show::new(id, tickets_per_show))
            .collect();
        Ok(Self { shows })
    }

    /// Looks up a show by its 1-based id.
    ///
    /// # Errors
    /// Returns [`SimError::ShowOutOfRange`] for ids outside `1..=len`. An
    /// out-of-range id is a defect in the caller: every target drawn by a
    /// [`ShowPicker`](crate::selection::ShowPicker) is in bounds.
    pub fn get(&self, id: u32) -> Result<&Show, SimError> {
        if id == 0 {
            return Err(SimError::ShowOutOfRange(id));
        }
        self.shows
            .get(id as usize - 1)
            .ok_or(SimError::ShowOutOfRange(id))
    }

    /// Number of shows in the pool.
    pub fn len(&self) -> u32 {
        self.shows.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    /// Iterates the shows in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Show> {
        self.shows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_one_show_per_id() {
        let pool = ShowPool::build(3, 10).unwrap();
        assert_eq!(pool.len(), 3);
        for (index, show) in pool.iter().enumerate() {
            assert_eq!(show.id(), index as u32 + 1);
            assert_eq!(show.initial(), 10);
        }
    }

    #[test]
    fn rejects_empty_pool() {
        assert!(ShowPool::build(0, 10).is_err());
    }

    #[test]
    fn get_is_one_based() {
        let pool = ShowPool::build(2, 5).unwrap();
        assert_eq!(pool.get(1).unwrap().id(), 1);
        assert_eq!(pool.get(2).unwrap().id(), 2);
        assert_eq!(pool.get(0).unwrap_err(), SimError::ShowOutOfRange(0));
        assert_eq!(pool.get(3).unwrap_err(), SimError::ShowOutOfRange(3));
    }
}
