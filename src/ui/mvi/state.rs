/// Marker trait for UI state.
///
/// `Default` is the initial state. `Clone` + `PartialEq` let callers keep a
/// snapshot and detect changes between frames.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
