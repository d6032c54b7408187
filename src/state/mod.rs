//! State - Page and Navigation State
//!
//! Plain state types kept free of GPUI so they can be driven from tests; the
//! GUI wraps them in entities.

mod locale_page;
mod projects_state;
mod router_state;

pub use locale_page::{LocaleAwarePage, PagePhase};
pub use projects_state::ProjectsState;
pub use router_state::RouterState;
