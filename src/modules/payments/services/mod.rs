pub mod payment_aggregator;
pub mod payment_service;

pub use payment_aggregator::{PaymentAggregator, PaymentBreakdown, PaymentSummary};
pub use payment_service::{PaymentResponse, PaymentService};
