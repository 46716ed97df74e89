use crate::modules::payments::models::PaymentRecord;
use crate::store::DocumentRepository;

/// Repository for the `payments` collection
pub type PaymentRepository = DocumentRepository<PaymentRecord>;
