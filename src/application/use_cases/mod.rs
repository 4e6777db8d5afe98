//! Use case implementations.

mod fetch_profile_use_case;

pub use fetch_profile_use_case::FetchProfileUseCase;
