// Payments module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{FeeEntry, PaymentRecord, RegistrationFeeKind, RegistrationFees};
pub use repositories::PaymentRepository;
pub use services::{PaymentAggregator, PaymentService};
