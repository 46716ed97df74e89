pub mod payment_record;

pub use payment_record::{FeeEntry, PaymentRecord, RegistrationFeeKind, RegistrationFees};
