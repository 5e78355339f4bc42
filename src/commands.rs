//! Command registry.
//!
//! Commands are data, not closures: a fieldless [`CommandId`] dispatched
//! through one exhaustive match in the editor core. The registry is a
//! fixed slice in registration order, which is also the order the palette
//! shows when it opens with an empty query.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    FileOpen,
    FileSave,
    FileNew,
    ToggleRelativeNumbers,
    PaletteOpen,
    Quit,
}

pub struct Command {
    pub id: CommandId,
    pub title: &'static str,
}

/// All registered commands, in registration order.
pub const COMMANDS: &[Command] = &[
    Command {
        id: CommandId::FileOpen,
        title: "file: open",
    },
    Command {
        id: CommandId::FileSave,
        title: "file: save",
    },
    Command {
        id: CommandId::FileNew,
        title: "file: new",
    },
    Command {
        id: CommandId::ToggleRelativeNumbers,
        title: "view: relative line numbers",
    },
    Command {
        id: CommandId::PaletteOpen,
        title: "palette: commands",
    },
    Command {
        id: CommandId::Quit,
        title: "quit",
    },
];

/// Look up a command by its exact palette title.
pub fn command_by_title(title: &str) -> Option<CommandId> {
    COMMANDS
        .iter()
        .find(|command| command.title == title)
        .map(|command| command.id)
}
