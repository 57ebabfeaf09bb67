/// Marker for a discrete action fed to a reducer.
///
/// Intents carry every input the transition needs (including the time of a
/// tap) so reducers stay free of clocks and I/O.
pub trait Intent: Send + 'static {}
