/// Marker for a self-contained, comparable view state.
///
/// `PartialEq` lets owners detect whether a dispatch changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
