// Sync core for a single-screen to-do list client: a login gate in front of
// a controller that mirrors a remote REST task resource into a local store.
// The rendering surface is reached only through `events::RenderSurface`.
pub mod auth;
pub mod config;
pub mod events;
pub mod form;
pub mod logging;
pub mod models;
pub mod remote;
pub mod store;
pub mod sync;
