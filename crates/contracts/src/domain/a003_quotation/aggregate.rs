use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Вид заявки: заказ с ценой или запрос коммерческого предложения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotationKind {
    Order,
    #[default]
    Inquiry,
}

impl QuotationKind {
    /// Префикс идентификатора документа
    pub fn id_prefix(&self) -> &'static str {
        match self {
            QuotationKind::Order => "ORD",
            QuotationKind::Inquiry => "INQ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotationStatus {
    #[default]
    Pending,
    Contacted,
    Quoted,
    Processing,
    Completed,
}

impl QuotationStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            QuotationStatus::Pending => "Pending",
            QuotationStatus::Contacted => "Contacted",
            QuotationStatus::Quoted => "Quoted",
            QuotationStatus::Processing => "Processing",
            QuotationStatus::Completed => "Completed",
        }
    }
}

/// Позиция заявки: зафиксированные на момент отправки название, размер и цена
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDetail {
    pub id: String,
    pub name: String,
    pub size: String,
    pub price: f64,
}

/// Заявка клиента (документ коллекции `quotations`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: QuotationKind,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default)]
    pub product_ids: Vec<String>,
    #[serde(default)]
    pub product_names: Vec<String>,
    #[serde(default)]
    pub product_details: Vec<ProductDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: QuotationStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
}

impl QuotationRequest {
    /// Заявки пользователя, новые сверху (страница истории)
    pub fn history_for<'a>(quotations: &'a [QuotationRequest], user_id: &str) -> Vec<&'a QuotationRequest> {
        let mut items: Vec<_> = quotations
            .iter()
            .filter(|q| q.user_id.as_deref() == Some(user_id))
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }
}
