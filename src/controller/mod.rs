mod input;
mod on_command;
mod schedule;

pub use input::{InputController, TitleController};
pub use on_command::OnCommand;
pub use schedule::ScheduleController;
