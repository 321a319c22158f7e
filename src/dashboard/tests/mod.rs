//! Unit tests for the dashboard services.
