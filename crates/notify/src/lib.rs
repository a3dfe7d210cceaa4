//! Mail delivery for operational alerts.
//!
//! This crate provides:
//! - `Mailer` trait for pluggable delivery channels
//! - HTTP mail-provider API and SMTP implementations
//! - Minijinja template rendering for alert messages

pub mod mail_api;
pub mod smtp;
pub mod templating;
pub mod traits;

pub use mail_api::HttpApiMailer;
pub use smtp::SmtpMailer;
pub use templating::TemplateRenderer;
pub use traits::{MailError, MailMessage, Mailer};
