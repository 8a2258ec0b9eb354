use anyhow::Result;

use crate::model::goal::Goal;
use crate::repository::store::KeyValueStore;
use crate::repository::traits::GoalRepository;

pub const GOAL_KEY: &str = "goal";

#[derive(Clone)]
pub struct KvGoalRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> KvGoalRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> GoalRepository for KvGoalRepository<S> {
    fn set(&self, goal: &Goal) -> Result<()> {
        let content = serde_json::to_string(goal)?;
        self.store.set(GOAL_KEY, &content)?;
        log::debug!("Goal set to '{}' ({} h)", goal.goal, goal.goal_hours);
        Ok(())
    }

    fn get(&self) -> Result<Option<Goal>> {
        let Some(raw) = self.store.get(GOAL_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str::<Option<Goal>>(&raw) {
            Ok(goal) => Ok(goal),
            Err(e) => {
                log::warn!("Ignoring unreadable '{}' blob: {}", GOAL_KEY, e);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::store::MemoryKeyValueStore;

    #[test]
    fn test_set_then_get() {
        let repo = KvGoalRepository::new(MemoryKeyValueStore::new());
        assert_eq!(repo.get().unwrap(), None);

        let goal = Goal::new("Exam", 10.0);
        repo.set(&goal).unwrap();
        assert_eq!(repo.get().unwrap(), Some(goal));
    }

    #[test]
    fn test_set_overwrites() {
        let repo = KvGoalRepository::new(MemoryKeyValueStore::new());
        repo.set(&Goal::new("First", 5.0)).unwrap();
        repo.set(&Goal::new("Second", 8.0)).unwrap();
        assert_eq!(repo.get().unwrap(), Some(Goal::new("Second", 8.0)));
    }

    #[test]
    fn test_goal_without_hours_keeps_its_text() {
        let store = MemoryKeyValueStore::new();
        store.set(GOAL_KEY, r#"{"goal":"Exam"}"#).unwrap();
        let repo = KvGoalRepository::new(store);
        assert_eq!(repo.get().unwrap(), Some(Goal::new("Exam", 0.0)));
    }

    #[test]
    fn test_corrupt_goal_reads_as_none() {
        let store = MemoryKeyValueStore::new();
        store.set(GOAL_KEY, r#"{"goal": 3}"#).unwrap();
        let repo = KvGoalRepository::new(store);
        assert_eq!(repo.get().unwrap(), None);
    }
}
