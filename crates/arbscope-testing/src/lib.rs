//! Testing infrastructure for arbscope integration tests.
//!
//! Provides canned backend payloads with the messiness the live feed
//! actually exhibits: numeric strings, nulls, missing fields, unknown
//! enum values, and unattributed venues.

pub mod payloads;
