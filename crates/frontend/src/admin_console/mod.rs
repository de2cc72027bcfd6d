//! Navigation state of the admin console.
//!
//! Everything here is plain data and pure functions; the reactive wrapper
//! lives in `layout::global_context`.

pub mod location;
pub mod membership;
pub mod menu;
pub mod modal_gate;
pub mod section;
pub mod selection;
pub mod state;

pub use location::{LocationEntry, LocationError};
pub use menu::SidebarModel;
pub use modal_gate::TeamSelectGate;
pub use section::Section;
pub use state::{ConsoleState, NavState, NavTarget, SidebarMsg};
