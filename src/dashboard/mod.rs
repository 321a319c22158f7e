//! Dashboard services.
//!
//! Binds a principal's team scope to list views and record mutations over a
//! [`crate::records::ports::RecordSource`].

pub mod services;

#[cfg(test)]
mod tests;
