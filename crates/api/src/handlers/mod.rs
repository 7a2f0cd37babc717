//! Request handlers.
//!
//! Handlers delegate to the [`NurseStore`](shiftboard_db::NurseStore) held in
//! application state and map errors via [`AppError`](crate::error::AppError).

pub mod nurse;
