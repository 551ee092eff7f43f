// Application layer - services, DTOs and the command surface the UI calls.
pub mod application;
pub mod presentation;
