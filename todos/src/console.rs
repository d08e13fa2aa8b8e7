//! Line-oriented console view.
//!
//! Plays the role of the UI: it parses one line of user input into a
//! [`Command`], sends the matching action to the store, and renders the
//! state that comes back.

use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::types::{TodoAction, TodoId, TodoState};
use thiserror::Error;
use todo_store_runtime::Store;

/// Store type the console drives
pub type TodoStore = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

/// Heading printed above the list
pub const HEADING: &str = "Things to get done:";

/// Usage text for the `help` command
pub const HELP: &str = "\
Commands:
  add <name>     add a todo
  toggle <id>    mark a todo done / not done
  delete <id>    remove a todo
  list           show the list
  json           show the list as JSON
  help           show this help
  quit           exit";

/// One parsed line of input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add a todo; the text may be blank, in which case nothing is added
    Add(String),
    /// Toggle a todo
    Toggle(TodoId),
    /// Delete a todo
    Delete(TodoId),
    /// Render the list
    List,
    /// Print the list as JSON
    Json,
    /// Print usage
    Help,
    /// Exit
    Quit,
}

/// Input that is not a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// First word is not a known command
    #[error("Unknown command `{0}` (try `help`)")]
    Unknown(String),

    /// `toggle`/`delete` without an id
    #[error("`{0}` needs a todo id")]
    MissingId(&'static str),

    /// Id is not a number
    #[error("Invalid todo id {0:?}")]
    InvalidId(String),
}

impl Command {
    /// Parses a line; blank lines yield `None`
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] for unknown commands and missing or
    /// non-numeric ids
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        let command = match word.to_lowercase().as_str() {
            "add" | "a" => Self::Add(rest.to_string()),
            "toggle" | "t" | "done" => Self::Toggle(parse_id("toggle", rest)?),
            "delete" | "d" | "rm" => Self::Delete(parse_id("delete", rest)?),
            "list" | "ls" | "l" => Self::List,
            "json" => Self::Json,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };

        Ok(Some(command))
    }
}

fn parse_id(command: &'static str, raw: &str) -> Result<TodoId, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::MissingId(command));
    }
    raw.parse()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}

/// What the console wants printed after a line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the user (may be empty)
    Output(String),
    /// The user asked to leave
    Quit,
}

/// Renders the list the way the console shows it
///
/// ```text
/// Things to get done:
///   [ ] 1  Write the blog post
///   [x] 2  Buy Christmas presents
/// 1 of 2 done
/// ```
#[must_use]
pub fn render(state: &TodoState) -> String {
    let mut lines = vec![HEADING.to_string()];

    if state.todos.is_empty() {
        lines.push("  (nothing to do)".to_string());
    }

    lines.extend(state.todos.iter().map(|todo| {
        let mark = if todo.done { 'x' } else { ' ' };
        format!("  [{mark}] {:<2} {}", todo.id.value(), todo.name)
    }));

    lines.push(format!("{} of {} done", state.completed_count(), state.count()));
    lines.join("\n")
}

/// Console session over a store
pub struct Console {
    store: TodoStore,
}

impl Console {
    /// Wraps a store
    #[must_use]
    pub const fn new(store: TodoStore) -> Self {
        Self { store }
    }

    /// The underlying store
    #[must_use]
    pub const fn store(&self) -> &TodoStore {
        &self.store
    }

    /// Current list, rendered
    #[must_use]
    pub fn render(&self) -> String {
        self.store.state(render)
    }

    /// Handles one line of input
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Reply::Output(String::new()),
            Err(error) => Reply::Output(format!("error: {error}")),
        }
    }

    /// Runs a parsed command
    pub fn execute(&mut self, command: Command) -> Reply {
        let action = match command {
            // Like an empty form submit: nothing reaches the store
            Command::Add(name) if name.trim().is_empty() => {
                return Reply::Output("Type a name after `add`".to_string());
            },
            Command::Add(name) => TodoAction::AddTodo { name },
            Command::Toggle(id) => TodoAction::ToggleDone { id },
            Command::Delete(id) => TodoAction::DeleteTodo { id },
            Command::List => return Reply::Output(self.render()),
            Command::Json => return Reply::Output(self.json()),
            Command::Help => return Reply::Output(HELP.to_string()),
            Command::Quit => return Reply::Quit,
        };
        debug_assert!(action.is_command(), "console sent a non-command: {action:?}");

        let target = match &action {
            TodoAction::ToggleDone { id } | TodoAction::DeleteTodo { id } => Some(*id),
            _ => None,
        };
        let before = self.store.state(TodoState::version);

        if let Err(error) = self.store.send(action) {
            tracing::error!(%error, "Store rejected action");
            return Reply::Output(format!("error: {error}"));
        }

        if let Some(error) = self.store.state(|s| s.last_error.clone()) {
            return Reply::Output(format!("error: {error}"));
        }

        if let Some(id) = target {
            if self.store.state(TodoState::version) == before {
                return Reply::Output(format!("No todo with id {id}"));
            }
        }

        Reply::Output(self.render())
    }

    fn json(&self) -> String {
        self.store
            .state(|s| serde_json::to_string_pretty(&s.todos))
            .unwrap_or_else(|error| format!("error: {error}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{seed, TodoList};
    use crate::types::Todo;

    fn console_with(todos: TodoList) -> Console {
        Console::new(Store::new(
            TodoState::with_todos(todos),
            TodoReducer::new(),
            TodoEnvironment::default(),
        ))
    }

    fn output(reply: Reply) -> String {
        match reply {
            Reply::Output(text) => text,
            Reply::Quit => String::from("<quit>"),
        }
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            Command::parse("add Walk the dog"),
            Ok(Some(Command::Add("Walk the dog".to_string())))
        );
        assert_eq!(Command::parse("  TOGGLE 2 "), Ok(Some(Command::Toggle(TodoId::new(2)))));
        assert_eq!(Command::parse("rm 3"), Ok(Some(Command::Delete(TodoId::new(3)))));
        assert_eq!(Command::parse("ls"), Ok(Some(Command::List)));
        assert_eq!(Command::parse("json"), Ok(Some(Command::Json)));
        assert_eq!(Command::parse("q"), Ok(Some(Command::Quit)));
        assert_eq!(Command::parse("add"), Ok(Some(Command::Add(String::new()))));
        assert_eq!(Command::parse("   "), Ok(None));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Command::parse("frobnicate 1"),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
        assert_eq!(Command::parse("toggle"), Err(CommandError::MissingId("toggle")));
        assert_eq!(
            Command::parse("delete two"),
            Err(CommandError::InvalidId("two".to_string()))
        );
    }

    #[test]
    fn renders_list() {
        let mut todos = seed();
        todos = crate::transitions::toggle_done(&todos, TodoId::new(2));

        let text = render(&TodoState::with_todos(todos));

        assert_eq!(
            text,
            "Things to get done:\n\
             \x20 [ ] 1  Write the blog post\n\
             \x20 [x] 2  Buy Christmas presents\n\
             \x20 [ ] 3  Leave Santa his mince pies\n\
             1 of 3 done"
        );
    }

    #[test]
    fn renders_empty_list() {
        assert_eq!(
            render(&TodoState::new()),
            "Things to get done:\n  (nothing to do)\n0 of 0 done"
        );
    }

    #[test]
    fn renders_single_todo_without_trailing_newline() {
        let todos = TodoList::from_todos(vec![Todo::new(TodoId::new(12), "Buy Milk")]).unwrap();

        assert_eq!(
            render(&TodoState::with_todos(todos)),
            "Things to get done:\n  [ ] 12 Buy Milk\n0 of 1 done"
        );
    }

    #[test]
    fn add_then_toggle_then_delete() {
        let mut console = console_with(TodoList::new());

        let text = output(console.handle_line("add Buy Milk"));
        assert!(text.contains("[ ] 1  Buy Milk"));

        let text = output(console.handle_line("toggle 1"));
        assert!(text.contains("[x] 1  Buy Milk"));
        assert!(text.ends_with("1 of 1 done"));

        let text = output(console.handle_line("delete 1"));
        assert!(text.contains("(nothing to do)"));
    }

    #[test]
    fn blank_add_is_ignored() {
        let mut console = console_with(seed());

        let text = output(console.handle_line("add    "));

        assert_eq!(text, "Type a name after `add`");
        assert_eq!(console.store().state(TodoState::count), 3);
    }

    #[test]
    fn unknown_id_is_reported() {
        let mut console = console_with(seed());

        assert_eq!(output(console.handle_line("toggle 9")), "No todo with id 9");
        assert_eq!(output(console.handle_line("delete 9")), "No todo with id 9");
        assert_eq!(console.store().state(|s| s.todos.clone()), seed());
    }

    #[test]
    fn too_long_name_is_reported() {
        let mut console = Console::new(Store::new(
            TodoState::new(),
            TodoReducer::new(),
            TodoEnvironment::new(3),
        ));

        let text = output(console.handle_line("add Walk the dog"));

        assert_eq!(text, "error: Todo name too long (12 characters, max 3)");
        assert!(console.store().state(|s| s.todos.is_empty()));
    }

    #[test]
    fn json_prints_todos() {
        let mut console = console_with(TodoList::new());
        console.handle_line("add Get bread");

        let text = output(console.handle_line("json"));
        let todos: Vec<Todo> = serde_json::from_str(&text).unwrap();

        assert_eq!(todos, vec![Todo::new(TodoId::new(1), "Get bread")]);
    }

    #[test]
    fn quit_and_help() {
        let mut console = console_with(seed());
        assert_eq!(console.handle_line("quit"), Reply::Quit);
        assert_eq!(output(console.handle_line("help")), HELP);
        assert_eq!(output(console.handle_line("bogus")), "error: Unknown command `bogus` (try `help`)");
    }
}
