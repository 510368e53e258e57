//! REST resource abstractions.
//!
//! This module provides the [`Resource`] trait that every MessageBird API
//! entity implements so it can be passed to
//! [`RestClient`](crate::clients::RestClient) operations.
//!
//! Concrete resources (messages, contacts, ...) live with the application
//! code that uses them; this crate only defines the contract.

mod resource;

pub use resource::Resource;
