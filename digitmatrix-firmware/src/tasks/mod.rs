//! Embassy tasks
//!
//! - `button_task`: one instance per button, stamps and queues edges
//! - `input_task`: the single handler; debounces and redraws
//! - `heartbeat_task`: toggles the status LED

mod buttons;
mod heartbeat;
mod input;

pub use buttons::button_task;
pub use heartbeat::heartbeat_task;
pub use input::input_task;
