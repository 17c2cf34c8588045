use crate::{
    envelope::resource,
    query::{ListInput, QueryParams, ToQuery},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A prepaid credit wallet attached to a customer.
///
/// Credit amounts are decimal strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Wallet {
    pub lago_id: Uuid,
    pub lago_customer_id: Uuid,
    pub external_customer_id: String,
    pub status: WalletStatus,
    pub currency: String,
    pub name: Option<String>,
    pub rate_amount: String,
    pub credits_balance: String,
    pub balance_cents: i64,
    pub consumed_credits: String,
    #[serde(default)]
    pub ongoing_balance_cents: i64,
    #[serde(default)]
    pub ongoing_usage_balance_cents: i64,
    pub credits_ongoing_balance: Option<String>,
    pub credits_ongoing_usage_balance: Option<String>,
    #[serde(default)]
    pub recurring_transaction_rules: Vec<RecurringTransactionRule>,
    pub created_at: DateTime<Utc>,
    pub expiration_at: Option<DateTime<Utc>>,
    pub last_balance_sync_at: Option<DateTime<Utc>>,
    pub last_consumed_credit_at: Option<DateTime<Utc>>,
    pub terminated_at: Option<DateTime<Utc>>,
}

resource!(Wallet, "wallet", "wallets");

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WalletStatus {
    Active,
    Terminated,
}

/// Rule topping up a wallet periodically or when its balance drops under a threshold.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RecurringTransactionRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lago_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<RecurringTransactionTrigger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_credits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_credits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granted_credits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_ongoing_balance: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecurringTransactionTrigger {
    Interval,
    Threshold,
}

/// Attributes of a wallet to create or update.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WalletInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_credits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granted_credits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_requires_successful_payment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_transaction_rules: Option<Vec<RecurringTransactionRule>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletListInput {
    pub pagination: ListInput,
    pub external_customer_id: String,
}

impl ToQuery for WalletListInput {
    fn to_query(&self) -> QueryParams {
        let mut query = self.pagination.to_query();
        query.push("external_customer_id", &self.external_customer_id);
        query
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WalletTransaction {
    pub lago_id: Uuid,
    pub lago_wallet_id: Uuid,
    pub status: WalletTransactionStatus,
    pub transaction_status: TransactionStatus,
    pub transaction_type: TransactionType,
    pub amount: String,
    pub credit_amount: String,
    #[serde(default)]
    pub invoice_requires_successful_payment: bool,
    pub settled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

resource!(WalletTransaction, "wallet_transaction", "wallet_transactions");

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WalletTransactionStatus {
    Pending,
    Settled,
    Failed,
}

impl WalletTransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletTransactionStatus::Pending => "pending",
            WalletTransactionStatus::Settled => "settled",
            WalletTransactionStatus::Failed => "failed",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Purchased,
    Granted,
    Voided,
    Invoiced,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Purchased => "purchased",
            TransactionStatus::Granted => "granted",
            TransactionStatus::Voided => "voided",
            TransactionStatus::Invoiced => "invoiced",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Inbound,
    Outbound,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Inbound => "inbound",
            TransactionType::Outbound => "outbound",
        }
    }
}

/// Credits to add to or remove from a wallet.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletTransactionInput {
    pub wallet_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_credits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granted_credits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voided_credits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_requires_successful_payment: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletTransactionListInput {
    pub pagination: ListInput,
    pub status: Option<WalletTransactionStatus>,
    pub transaction_status: Option<TransactionStatus>,
    pub transaction_type: Option<TransactionType>,
}

impl ToQuery for WalletTransactionListInput {
    fn to_query(&self) -> QueryParams {
        let mut query = self.pagination.to_query();
        query.push_opt("status", self.status.map(|s| s.as_str()));
        query.push_opt(
            "transaction_status",
            self.transaction_status.map(|s| s.as_str()),
        );
        query.push_opt(
            "transaction_type",
            self.transaction_type.map(|t| t.as_str()),
        );
        query
    }
}
