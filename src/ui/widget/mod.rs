//! State machine behind the quote display and its refresh trigger.

mod intent;
mod reducer;
mod state;

pub use intent::WidgetIntent;
pub use reducer::WidgetReducer;
pub use state::{Phase, WidgetState};
