//! User list demo: generated users ordered by age with single selection.
//!
//! Rows are projected into plain display props (`UserRow`). A host that
//! keeps the previous projection can ask [`changed_rows`] which rows need to
//! be redrawn, instead of relying on memoized components.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use todoview_types::{User, UserRow};
use tracing::debug;

pub const DEFAULT_USER_COUNT: u32 = 1000;
pub const MIN_AGE: u8 = 18;
pub const MAX_AGE: u8 = 67;

/// Generate `count` users with ids `1..=count` and ages in `MIN_AGE..=MAX_AGE`.
///
/// The same seed always yields the same users.
pub fn generate_users(count: u32, seed: u64) -> Vec<User> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=count)
        .map(|id| User {
            id,
            name: format!("User {}", id),
            age: rng.gen_range(MIN_AGE..=MAX_AGE),
        })
        .collect()
}

/// Stable ascending sort by age; users of equal age keep their order.
pub fn sort_by_age(users: &[User]) -> Vec<User> {
    let mut sorted = users.to_vec();
    sorted.sort_by_key(|user| user.age);
    sorted
}

/// Project users into display rows, marking the selected one.
pub fn project_rows(users: &[User], selected: Option<u32>) -> Vec<UserRow> {
    users
        .iter()
        .map(|user| UserRow {
            id: user.id,
            name: user.name.clone(),
            age: user.age,
            selected: selected == Some(user.id),
        })
        .collect()
}

/// Ids of rows in `next` whose props differ from `previous` (or that are new),
/// in `next` order.
pub fn changed_rows(previous: &[UserRow], next: &[UserRow]) -> Vec<u32> {
    let before: HashMap<u32, &UserRow> = previous.iter().map(|row| (row.id, row)).collect();

    let changed: Vec<u32> = next
        .iter()
        .filter(|row| before.get(&row.id).is_none_or(|old| *old != *row))
        .map(|row| row.id)
        .collect();

    debug!(
        rows = next.len(),
        changed = changed.len(),
        "diffed user rows"
    );
    changed
}

/// Sorted user list plus the current selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserList {
    users: Vec<User>,
    selected: Option<u32>,
}

impl UserList {
    /// Sort `users` by age once; the order never changes afterwards.
    pub fn new(users: &[User]) -> Self {
        Self {
            users: sort_by_age(users),
            selected: None,
        }
    }

    pub fn generated(count: u32, seed: u64) -> Self {
        Self::new(&generate_users(count, seed))
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn contains(&self, id: u32) -> bool {
        self.users.iter().any(|user| user.id == id)
    }

    /// Same users with `id` selected, or `None` if no user has that id.
    pub fn select(&self, id: u32) -> Option<Self> {
        if !self.contains(id) {
            return None;
        }
        Some(Self {
            users: self.users.clone(),
            selected: Some(id),
        })
    }

    pub fn rows(&self) -> Vec<UserRow> {
        project_rows(&self.users, self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_users_is_deterministic() {
        let a = generate_users(50, 7);
        let b = generate_users(50, 7);
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
        assert_eq!(a[0].name, "User 1");
        assert_eq!(a[49].id, 50);
        assert!(a.iter().all(|u| (MIN_AGE..=MAX_AGE).contains(&u.age)));
    }

    #[test]
    fn test_sort_by_age_is_stable() {
        let users = vec![
            User { id: 1, name: "User 1".into(), age: 40 },
            User { id: 2, name: "User 2".into(), age: 20 },
            User { id: 3, name: "User 3".into(), age: 40 },
            User { id: 4, name: "User 4".into(), age: 20 },
        ];
        let ids: Vec<u32> = sort_by_age(&users).iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sorting_does_not_touch_input() {
        let users = generate_users(20, 1);
        let original = users.clone();
        let _ = sort_by_age(&users);
        assert_eq!(users, original);
    }

    #[test]
    fn test_selection_change_redraws_two_rows() {
        let list = UserList::generated(100, 42);
        let first = list.select(10).unwrap();
        let second = first.select(20).unwrap();

        let mut changed = changed_rows(&first.rows(), &second.rows());
        changed.sort_unstable();
        assert_eq!(changed, vec![10, 20]);
    }

    #[test]
    fn test_reselecting_same_row_redraws_nothing() {
        let list = UserList::generated(100, 42).select(5).unwrap();
        let again = list.select(5).unwrap();
        assert!(changed_rows(&list.rows(), &again.rows()).is_empty());
    }

    #[test]
    fn test_first_selection_redraws_one_row() {
        let list = UserList::generated(100, 42);
        let selected = list.select(3).unwrap();
        assert_eq!(changed_rows(&list.rows(), &selected.rows()), vec![3]);
    }

    #[test]
    fn test_new_rows_count_as_changed() {
        let rows = project_rows(&generate_users(3, 0), None);
        assert_eq!(changed_rows(&[], &rows), vec![1, 2, 3]);
    }

    #[test]
    fn test_selecting_unknown_user_is_refused() {
        let list = UserList::generated(10, 42);
        assert!(list.select(0).is_none());
        assert!(list.select(11).is_none());
        assert!(list.select(10).is_some());
    }
}
