//! Model-View-Intent primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Every state transition in the UI goes through a [`Reducer`]. Side effects
//! (network calls, terminal I/O) live outside of it and feed their results
//! back in as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
