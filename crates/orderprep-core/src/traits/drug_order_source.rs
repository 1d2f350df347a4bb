use crate::errors::StorageError;
use crate::models::DrugOrder;

/// Source of legacy drug orders.
pub trait IDrugOrderSource: Send + Sync {
    /// All drug orders. Entries may be `None` when a record cannot be materialized.
    fn get_drug_orders(&self) -> Result<Vec<Option<DrugOrder>>, StorageError>;
}
