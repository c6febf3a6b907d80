//! Setup tools: game context, roster and playbook

mod add_play;
mod add_player;
mod remove_play;
mod remove_player;
mod set_context;
mod start_tagging;

pub use add_play::AddPlayTool;
pub use add_player::AddPlayerTool;
pub use remove_play::RemovePlayTool;
pub use remove_player::RemovePlayerTool;
pub use set_context::SetContextTool;
pub use start_tagging::StartTaggingTool;
