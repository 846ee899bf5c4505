// Composition root for the rsvps bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers.
// - Spawn background workers (guest list refresher).

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod workers;
