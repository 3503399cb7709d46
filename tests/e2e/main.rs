// End-to-end tests for the Sinhala TTS backend.
//
// Each test spawns the real axum app on an ephemeral port with a stubbed
// synthesis provider, so the full HTTP surface is exercised without any
// network dependency. Tests run in parallel; there is no shared state.

mod helpers;
mod test_synthesis;
