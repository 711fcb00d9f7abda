/// Marker trait for intents.
///
/// An intent is either something the user did (pressed submit) or something
/// the system observed (a response arrived, a timer fired).
pub trait Intent: Send + 'static {}
