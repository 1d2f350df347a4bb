use serde::{Deserialize, Serialize};

/// A legacy drug order carrying free-text dose units and frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugOrder {
    pub order_id: i64,
    pub units: Option<String>,
    pub frequency: Option<String>,
}

impl DrugOrder {
    pub fn new(order_id: i64, units: Option<&str>, frequency: Option<&str>) -> Self {
        Self {
            order_id,
            units: units.map(str::to_string),
            frequency: frequency.map(str::to_string),
        }
    }
}
