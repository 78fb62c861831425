//! Hourly-value resolution
//!
//! Estimates what a client's own time is worth per hour from their job
//! title, location, company revenue bracket and experience, against a
//! static wage knowledge base.

pub mod knowledge_base;
pub mod resolver;

pub use knowledge_base::WageKnowledgeBase;
pub use resolver::HourlyValueResolver;
