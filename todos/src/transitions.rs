//! Pure state transitions on a [`TodoList`].
//!
//! Each function takes the current list by reference and returns a new one;
//! the input is never modified. Ids that match no todo are a no-op: the
//! returned list equals the input.

use crate::list::TodoList;
use crate::types::{NewTodo, TodoId};

/// Flips `done` on the todo with `id`, leaving every other todo unchanged
#[must_use]
pub fn toggle_done(list: &TodoList, id: TodoId) -> TodoList {
    let todos = list
        .iter()
        .map(|todo| if todo.id == id { todo.toggled() } else { todo.clone() })
        .collect();
    TodoList::from_trusted(todos)
}

/// Appends `new_todo` with the next free id and `done = false`
///
/// The id is one past the highest id in the list (see
/// [`TodoList::next_id`]).
#[must_use]
pub fn add_todo(list: &TodoList, new_todo: NewTodo) -> TodoList {
    let mut todos = list.as_slice().to_vec();
    todos.push(new_todo.into_todo(list.next_id()));
    TodoList::from_trusted(todos)
}

/// Removes the todo with `id`, keeping the order of the rest
#[must_use]
pub fn delete_todo(list: &TodoList, id: TodoId) -> TodoList {
    let todos = list.iter().filter(|todo| todo.id != id).cloned().collect();
    TodoList::from_trusted(todos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Todo, DEFAULT_MAX_NAME_LEN};

    fn todo(id: u64, name: &str, done: bool) -> Todo {
        Todo {
            id: TodoId::new(id),
            name: name.to_string(),
            done,
        }
    }

    fn list(todos: Vec<Todo>) -> TodoList {
        TodoList::from_todos(todos).unwrap()
    }

    fn new_todo(name: &str) -> NewTodo {
        NewTodo::new(name, DEFAULT_MAX_NAME_LEN).unwrap()
    }

    #[test]
    fn toggle_marks_incomplete_todo_done() {
        let state = list(vec![todo(1, "Buy Milk", false)]);

        let next = toggle_done(&state, TodoId::new(1));

        assert_eq!(next, list(vec![todo(1, "Buy Milk", true)]));
    }

    #[test]
    fn toggle_twice_restores_original() {
        let state = list(vec![todo(1, "Buy Milk", false)]);

        let once = toggle_done(&state, TodoId::new(1));
        let twice = toggle_done(&once, TodoId::new(1));

        assert!(once.as_slice()[0].done);
        assert_eq!(twice, state);
    }

    #[test]
    fn toggle_marks_complete_todo_not_done() {
        let state = list(vec![todo(1, "Buy Milk", true)]);

        let next = toggle_done(&state, TodoId::new(1));

        assert!(!next.as_slice()[0].done);
    }

    #[test]
    fn toggle_leaves_other_todos_alone() {
        let state = list(vec![
            todo(1, "Buy Milk", false),
            todo(2, "Get bread", true),
            todo(3, "Walk the dog", false),
        ]);

        let next = toggle_done(&state, TodoId::new(2));

        assert_eq!(
            next,
            list(vec![
                todo(1, "Buy Milk", false),
                todo(2, "Get bread", false),
                todo(3, "Walk the dog", false),
            ])
        );
        // Input untouched
        assert!(state.as_slice()[1].done);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let state = list(vec![todo(1, "Buy Milk", false)]);

        assert_eq!(toggle_done(&state, TodoId::new(7)), state);
    }

    #[test]
    fn add_assigns_next_id_and_not_done() {
        let state = list(vec![todo(1, "Buy Milk", true)]);

        let next = add_todo(&state, new_todo("Get bread"));

        assert_eq!(next.len(), 2);
        assert_eq!(next.as_slice()[1], todo(2, "Get bread", false));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn add_to_empty_list_starts_at_one() {
        let next = add_todo(&TodoList::new(), new_todo("Walk the dog"));

        assert_eq!(next, list(vec![todo(1, "Walk the dog", false)]));
    }

    #[test]
    fn delete_removes_matching_todo() {
        let state = list(vec![todo(1, "Buy Milk", true), todo(2, "Get bread", true)]);

        let next = delete_todo(&state, TodoId::new(1));

        assert_eq!(next, list(vec![todo(2, "Get bread", true)]));
    }

    #[test]
    fn delete_keeps_order_of_the_rest() {
        let state = list(vec![
            todo(4, "a", false),
            todo(2, "b", false),
            todo(9, "c", false),
        ]);

        let next = delete_todo(&state, TodoId::new(2));

        assert_eq!(next.ids().collect::<Vec<_>>(), [TodoId::new(4), TodoId::new(9)]);
    }

    #[test]
    fn delete_is_idempotent() {
        let state = list(vec![todo(1, "Buy Milk", true), todo(2, "Get bread", true)]);

        let once = delete_todo(&state, TodoId::new(2));
        let twice = delete_todo(&once, TodoId::new(2));

        assert_eq!(once, twice);
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let state = list(vec![todo(1, "Buy Milk", true)]);

        assert_eq!(delete_todo(&state, TodoId::new(42)), state);
    }

    #[test]
    fn add_after_deleting_last_reuses_max_plus_one() {
        let state = list(vec![todo(1, "a", false), todo(2, "b", false), todo(3, "c", false)]);

        let next = add_todo(&delete_todo(&state, TodoId::new(3)), new_todo("d"));

        assert_eq!(next.as_slice()[2].id, TodoId::new(3));
    }

    #[test]
    fn add_after_deleting_highest_id_uses_remaining_max() {
        let state = list(vec![todo(1, "a", false), todo(5, "b", false)]);

        let next = add_todo(&delete_todo(&state, TodoId::new(5)), new_todo("c"));

        assert_eq!(next, list(vec![todo(1, "a", false), todo(2, "c", false)]));
    }

    #[test]
    fn add_after_deleting_last_element_never_collides() {
        // Last element does not hold the highest id
        let state = list(vec![todo(7, "a", false), todo(3, "b", false)]);

        let next = add_todo(&delete_todo(&state, TodoId::new(3)), new_todo("c"));

        assert_eq!(next.as_slice()[1].id, TodoId::new(8));
    }
}
