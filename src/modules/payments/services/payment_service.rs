use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::core::pagination::MAX_PAGE_SIZE;
use crate::core::traits::Repository;
use crate::core::{AppError, ListQuery, Result};
use crate::modules::payments::models::PaymentRecord;
use crate::modules::payments::repositories::PaymentRepository;
use crate::modules::students::repositories::StudentRepository;
use crate::modules::payments::services::payment_aggregator::{
    PaymentAggregator, PaymentBreakdown, PaymentSummary,
};

/// Key under which the computed total is returned; never stored
pub const TOTAL_FIELD: &str = "totalFinalPayment";

/// A payment record as returned by the API, with its computed total
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    #[serde(flatten)]
    pub record: PaymentRecord,

    #[serde(with = "rust_decimal::serde::float")]
    pub total_final_payment: Decimal,
}

/// Service for payment business logic
///
/// Reads follow a fetch → aggregate → serialize pipeline: records come from
/// the repository untouched, [`PaymentAggregator`] derives totals, and the
/// controller serializes the result.
pub struct PaymentService {
    payment_repo: PaymentRepository,
    student_repo: StudentRepository,
    aggregator: PaymentAggregator,
    summary_page_size: u32,
}

impl PaymentService {
    pub fn new(payment_repo: PaymentRepository, student_repo: StudentRepository) -> Self {
        Self {
            payment_repo,
            student_repo,
            aggregator: PaymentAggregator::new(),
            summary_page_size: MAX_PAGE_SIZE,
        }
    }

    /// List payment records with their totals
    pub async fn list_payments(&self, query: ListQuery) -> Result<Vec<PaymentResponse>> {
        query.validate()?;

        let records = self
            .payment_repo
            .list(Some(query.limit), Some(query.offset))
            .await?;

        Ok(records.into_iter().map(|r| self.to_response(r)).collect())
    }

    /// Get one payment record with its total
    pub async fn get_payment(&self, id: &str) -> Result<PaymentResponse> {
        let record = self.find(id).await?;
        Ok(self.to_response(record))
    }

    /// Component amounts of one payment record
    pub async fn get_breakdown(&self, id: &str) -> Result<PaymentBreakdown> {
        let record = self.find(id).await?;
        Ok(self.aggregator.breakdown(&record))
    }

    /// Totals across every stored payment record, read one page at a time
    pub async fn summarize(&self) -> Result<PaymentSummary> {
        let stored = self.payment_repo.count().await?;
        let mut summary = PaymentSummary::default();
        let mut offset: u32 = 0;

        while u64::from(offset) < stored {
            let page = self
                .payment_repo
                .list(Some(self.summary_page_size), Some(offset))
                .await?;
            if page.is_empty() {
                break;
            }

            summary = page
                .iter()
                .fold(summary, |acc, record| self.aggregator.accumulate(acc, record));
            offset = offset.saturating_add(self.summary_page_size);
        }

        info!(
            count = summary.count,
            total = %summary.total_final_payment,
            "Payment summary generated"
        );

        Ok(summary)
    }

    /// Payment records belonging to one student
    pub async fn list_for_student(&self, student_id: &str) -> Result<Vec<PaymentResponse>> {
        let records = self
            .payment_repo
            .find_by_field("studentId", student_id)
            .await?;

        Ok(records.into_iter().map(|r| self.to_response(r)).collect())
    }

    pub async fn create_payment(&self, record: PaymentRecord) -> Result<PaymentResponse> {
        let record = self.prepare(record).await?;
        let created = self.payment_repo.create(record).await?;

        info!(
            payment_id = created.id.as_deref().unwrap_or_default(),
            student_id = created.student_id.as_deref().unwrap_or_default(),
            "Payment record created"
        );

        Ok(self.to_response(created))
    }

    pub async fn update_payment(&self, id: &str, record: PaymentRecord) -> Result<PaymentResponse> {
        let record = self.prepare(record).await?;
        let updated = self.payment_repo.update(id.to_string(), record).await?;

        info!(payment_id = id, "Payment record updated");

        Ok(self.to_response(updated))
    }

    pub async fn delete_payment(&self, id: &str) -> Result<()> {
        self.payment_repo.delete(id.to_string()).await?;

        info!(payment_id = id, "Payment record deleted");

        Ok(())
    }

    async fn find(&self, id: &str) -> Result<PaymentRecord> {
        self.payment_repo
            .find_by_id(id.to_string())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Payment {}", id)))
    }

    /// Validate a write, check the referenced student and drop any
    /// client-supplied total
    async fn prepare(&self, mut record: PaymentRecord) -> Result<PaymentRecord> {
        record.validate()?;

        if let Some(student_id) = &record.student_id {
            if self
                .student_repo
                .find_by_id(student_id.clone())
                .await?
                .is_none()
            {
                return Err(AppError::validation(format!(
                    "Student {} does not exist",
                    student_id
                )));
            }
        }

        record.extra.remove(TOTAL_FIELD);
        Ok(record)
    }

    /// The computed total replaces any stale one carried by the document
    fn to_response(&self, mut record: PaymentRecord) -> PaymentResponse {
        record.extra.remove(TOTAL_FIELD);
        let total_final_payment = self.aggregator.compute_total(&record);
        PaymentResponse {
            record,
            total_final_payment,
        }
    }
}
