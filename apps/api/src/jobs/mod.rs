// Job application tracking: CRUD, search and dashboard statistics.
// Every query is scoped to the authenticated user.

pub mod dto;
pub mod handlers;
pub mod repository;
pub mod search;
pub mod stats;
