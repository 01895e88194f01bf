mod action;
mod alert;
mod assistant;
mod attachment;
mod event;
mod loading;
mod message;
mod sender;
mod slash_commands;
mod textarea;

pub use action::*;
pub use alert::*;
pub use assistant::*;
pub use attachment::*;
pub use event::*;
pub use loading::*;
pub use message::*;
pub use sender::*;
pub use slash_commands::*;
pub use textarea::*;
