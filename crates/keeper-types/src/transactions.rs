//! Transaction payloads and their numeric-tag signing envelope.
//!
//! One payload struct per on-chain operation. [`TransactionData`] is the
//! tagged union the signing operations accept: `{"type": <code>, "data":
//! <payload>}` with a JSON number tag.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::args::{Call, DataEntry};
use crate::envelope::{Envelope, EnvelopeRef};
use crate::money::{AmountLike, Money, NumberLike};
use crate::ValidationError;

// === Envelope type codes ===

/// Issue a new token.
pub const TYPE_ISSUE: u16 = 3;
/// Transfer an amount to a recipient.
pub const TYPE_TRANSFER: u16 = 4;
/// Reissue additional quantity of a token.
pub const TYPE_REISSUE: u16 = 5;
/// Burn a quantity of a token.
pub const TYPE_BURN: u16 = 6;
/// Lease an amount to a recipient.
pub const TYPE_LEASE: u16 = 8;
/// Cancel an active lease.
pub const TYPE_LEASE_CANCEL: u16 = 9;
/// Register an alias for the sender's address.
pub const TYPE_CREATE_ALIAS: u16 = 10;
/// Transfer to many recipients at once.
pub const TYPE_MASS_TRANSFER: u16 = 11;
/// Write typed entries to the sender's data storage.
pub const TYPE_DATA: u16 = 12;
/// Attach a script to the sender's account.
pub const TYPE_SET_SCRIPT: u16 = 13;
/// Sponsor fees for a token.
pub const TYPE_SPONSORED_FEE: u16 = 14;
/// Replace a smart asset's script.
pub const TYPE_SET_ASSET_SCRIPT: u16 = 15;
/// Invoke a function on a dApp account.
pub const TYPE_INVOKE_SCRIPT: u16 = 16;

// === Documented bounds ===

/// Token name bounds, in characters.
pub const TOKEN_NAME_MIN: usize = 4;
/// Token name upper bound, in characters.
pub const TOKEN_NAME_MAX: usize = 16;
/// Token description upper bound, in characters.
pub const TOKEN_DESCRIPTION_MAX: usize = 1000;
/// Maximum token precision (decimal places).
pub const TOKEN_PRECISION_MAX: u8 = 8;
/// Alias bounds, in characters.
pub const ALIAS_MIN: usize = 4;
/// Alias upper bound, in characters.
pub const ALIAS_MAX: usize = 30;
/// Attachment upper bound, in bytes.
pub const ATTACHMENT_MAX_BYTES: usize = 140;
/// Script invocations currently accept a single payment.
pub const INVOKE_PAYMENTS_MAX: usize = 1;
/// Maximum number of transactions in one signing package.
pub const PACKAGE_MAX: usize = 7;

/// Transaction kinds permitted inside a signing package.
pub const PACKAGE_ALLOWED_TYPES: [u16; 8] = [
    TYPE_ISSUE,
    TYPE_TRANSFER,
    TYPE_REISSUE,
    TYPE_BURN,
    TYPE_CREATE_ALIAS,
    TYPE_MASS_TRANSFER,
    TYPE_DATA,
    TYPE_INVOKE_SCRIPT,
];

/// Additional info attached to a transfer: text or raw bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attachment {
    /// UTF-8 text.
    Text(String),
    /// Raw bytes (serialized as a JSON array of numbers).
    Bytes(Vec<u8>),
}

impl Attachment {
    /// Attachment length in bytes.
    pub fn len(&self) -> usize {
        match self {
            Attachment::Text(s) => s.len(),
            Attachment::Bytes(b) => b.len(),
        }
    }

    /// Whether the attachment is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.len() > ATTACHMENT_MAX_BYTES {
            return Err(ValidationError::AttachmentTooLong {
                max: ATTACHMENT_MAX_BYTES,
                got: self.len(),
            });
        }
        Ok(())
    }
}

/// Fields shared by every transaction payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxCommon {
    /// Fee for the transaction.
    pub fee: Money,
    /// Sender's public key in base58. Filled by the keeper when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_public_key: Option<String>,
    /// Time in ms. Filled by the keeper when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NumberLike>,
}

/// Issue a new token (type 3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTx {
    /// Token name, 4 to 16 characters.
    pub name: String,
    /// Token description, up to 1000 characters.
    pub description: String,
    /// Quantity to issue.
    pub quantity: NumberLike,
    /// Decimal places, 0 to 8.
    pub precision: u8,
    /// Whether further reissue is allowed.
    pub reissuable: bool,
    /// Smart-asset script.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(flatten)]
    pub common: TxCommon,
}

impl IssueTx {
    fn validate(&self) -> Result<(), ValidationError> {
        let name_len = self.name.chars().count();
        if !(TOKEN_NAME_MIN..=TOKEN_NAME_MAX).contains(&name_len) {
            return Err(ValidationError::NameLength {
                min: TOKEN_NAME_MIN,
                max: TOKEN_NAME_MAX,
                got: name_len,
            });
        }
        let desc_len = self.description.chars().count();
        if desc_len > TOKEN_DESCRIPTION_MAX {
            return Err(ValidationError::DescriptionTooLong {
                max: TOKEN_DESCRIPTION_MAX,
                got: desc_len,
            });
        }
        if self.precision > TOKEN_PRECISION_MAX {
            return Err(ValidationError::PrecisionTooLarge {
                max: TOKEN_PRECISION_MAX,
                got: self.precision,
            });
        }
        if self.quantity.is_negative() {
            return Err(ValidationError::NegativeAmount { field: "quantity" });
        }
        self.common.fee.validate("fee")
    }
}

/// Transfer an amount to a recipient (type 4).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferTx {
    /// Amount to transfer.
    pub amount: Money,
    /// Recipient's address or alias.
    pub recipient: String,
    /// Additional info, up to 140 bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
    #[serde(flatten)]
    pub common: TxCommon,
}

impl TransferTx {
    fn validate(&self) -> Result<(), ValidationError> {
        self.amount.validate("amount")?;
        if let Some(attachment) = &self.attachment {
            attachment.validate()?;
        }
        self.common.fee.validate("fee")
    }
}

/// Reissue additional quantity of a token (type 5).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReissueTx {
    /// Asset to reissue.
    pub asset_id: String,
    /// Quantity to add.
    pub quantity: AmountLike,
    /// Whether further reissue stays allowed.
    pub reissuable: bool,
    #[serde(flatten)]
    pub common: TxCommon,
}

impl ReissueTx {
    fn validate(&self) -> Result<(), ValidationError> {
        self.quantity.validate("quantity")?;
        self.common.fee.validate("fee")
    }
}

/// Burn a quantity of a token (type 6).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurnTx {
    /// Asset to burn.
    pub asset_id: String,
    /// Quantity to destroy.
    pub amount: AmountLike,
    #[serde(flatten)]
    pub common: TxCommon,
}

impl BurnTx {
    fn validate(&self) -> Result<(), ValidationError> {
        self.amount.validate("amount")?;
        self.common.fee.validate("fee")
    }
}

/// Lease an amount to a recipient (type 8).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseTx {
    /// Recipient's address or alias.
    pub recipient: String,
    /// Amount to lease.
    pub amount: AmountLike,
    #[serde(flatten)]
    pub common: TxCommon,
}

impl LeaseTx {
    fn validate(&self) -> Result<(), ValidationError> {
        self.amount.validate("amount")?;
        self.common.fee.validate("fee")
    }
}

/// Cancel an active lease (type 9).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseCancelTx {
    /// Id of the leasing transaction.
    pub lease_id: String,
    #[serde(flatten)]
    pub common: TxCommon,
}

impl LeaseCancelTx {
    fn validate(&self) -> Result<(), ValidationError> {
        self.common.fee.validate("fee")
    }
}

/// Register an alias for the sender's address (type 10).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAliasTx {
    /// Alias, 4 to 30 characters.
    pub alias: String,
    #[serde(flatten)]
    pub common: TxCommon,
}

impl CreateAliasTx {
    fn validate(&self) -> Result<(), ValidationError> {
        let len = self.alias.chars().count();
        if !(ALIAS_MIN..=ALIAS_MAX).contains(&len) {
            return Err(ValidationError::AliasLength {
                min: ALIAS_MIN,
                max: ALIAS_MAX,
                got: len,
            });
        }
        self.common.fee.validate("fee")
    }
}

/// A single recipient of a mass transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    /// Recipient's address or alias.
    pub recipient: String,
    /// Amount for this recipient.
    pub amount: AmountLike,
}

/// Transfer to many recipients at once (type 11).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MassTransferTx {
    /// Total to be sent; `{assetId, coins: 0}` lets the keeper compute it.
    pub total_amount: Money,
    /// The individual transfers.
    pub transfers: Vec<Transfer>,
    /// Additional info, up to 140 bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    #[serde(flatten)]
    pub common: TxCommon,
}

impl MassTransferTx {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.transfers.is_empty() {
            return Err(ValidationError::EmptyTransfers);
        }
        for transfer in &self.transfers {
            transfer.amount.validate("transfers.amount")?;
        }
        if let Some(attachment) = &self.attachment {
            if attachment.len() > ATTACHMENT_MAX_BYTES {
                return Err(ValidationError::AttachmentTooLong {
                    max: ATTACHMENT_MAX_BYTES,
                    got: attachment.len(),
                });
            }
        }
        self.common.fee.validate("fee")
    }
}

/// Write typed entries to the sender's data storage (type 12).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTx {
    /// The entries to write.
    pub data: Vec<DataEntry>,
    #[serde(flatten)]
    pub common: TxCommon,
}

impl DataTx {
    fn validate(&self) -> Result<(), ValidationError> {
        self.common.fee.validate("fee")
    }
}

/// Attach a script to the sender's account (type 13).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetScriptTx {
    /// The compiled script, base64.
    pub script: String,
    #[serde(flatten)]
    pub common: TxCommon,
}

impl SetScriptTx {
    fn validate(&self) -> Result<(), ValidationError> {
        self.common.fee.validate("fee")
    }
}

/// Sponsor fees for a token (type 14).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsoredFeeTx {
    /// Fee price in the sponsored asset.
    pub min_sponsored_asset_fee: Money,
    #[serde(flatten)]
    pub common: TxCommon,
}

impl SponsoredFeeTx {
    fn validate(&self) -> Result<(), ValidationError> {
        self.min_sponsored_asset_fee.validate("minSponsoredAssetFee")?;
        self.common.fee.validate("fee")
    }
}

/// Replace a smart asset's script (type 15).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAssetScriptTx {
    /// The asset whose script changes.
    pub asset_id: String,
    /// The compiled script, base64.
    pub script: String,
    #[serde(flatten)]
    pub common: TxCommon,
}

impl SetAssetScriptTx {
    fn validate(&self) -> Result<(), ValidationError> {
        self.common.fee.validate("fee")
    }
}

/// Invoke a function on a dApp account (type 16).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeScriptTx {
    /// Address of the script account.
    pub d_app: String,
    /// Payments attached to the call (currently at most one).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<Vec<Money>>,
    /// The function to call; the default function when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call: Option<Call>,
    #[serde(flatten)]
    pub common: TxCommon,
}

impl InvokeScriptTx {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(payment) = &self.payment {
            if payment.len() > INVOKE_PAYMENTS_MAX {
                return Err(ValidationError::TooManyPayments {
                    max: INVOKE_PAYMENTS_MAX,
                    got: payment.len(),
                });
            }
            for money in payment {
                money.validate("payment")?;
            }
        }
        self.common.fee.validate("fee")
    }
}

/// A transaction payload to be signed, tagged by its numeric type code.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionData {
    Issue(IssueTx),
    Transfer(TransferTx),
    Reissue(ReissueTx),
    Burn(BurnTx),
    Lease(LeaseTx),
    LeaseCancel(LeaseCancelTx),
    CreateAlias(CreateAliasTx),
    MassTransfer(MassTransferTx),
    Data(DataTx),
    SetScript(SetScriptTx),
    SponsoredFee(SponsoredFeeTx),
    SetAssetScript(SetAssetScriptTx),
    InvokeScript(InvokeScriptTx),
}

impl TransactionData {
    /// The numeric envelope code of this payload.
    pub fn type_code(&self) -> u16 {
        match self {
            TransactionData::Issue(_) => TYPE_ISSUE,
            TransactionData::Transfer(_) => TYPE_TRANSFER,
            TransactionData::Reissue(_) => TYPE_REISSUE,
            TransactionData::Burn(_) => TYPE_BURN,
            TransactionData::Lease(_) => TYPE_LEASE,
            TransactionData::LeaseCancel(_) => TYPE_LEASE_CANCEL,
            TransactionData::CreateAlias(_) => TYPE_CREATE_ALIAS,
            TransactionData::MassTransfer(_) => TYPE_MASS_TRANSFER,
            TransactionData::Data(_) => TYPE_DATA,
            TransactionData::SetScript(_) => TYPE_SET_SCRIPT,
            TransactionData::SponsoredFee(_) => TYPE_SPONSORED_FEE,
            TransactionData::SetAssetScript(_) => TYPE_SET_ASSET_SCRIPT,
            TransactionData::InvokeScript(_) => TYPE_INVOKE_SCRIPT,
        }
    }

    /// The fields shared by every payload.
    pub fn common(&self) -> &TxCommon {
        match self {
            TransactionData::Issue(tx) => &tx.common,
            TransactionData::Transfer(tx) => &tx.common,
            TransactionData::Reissue(tx) => &tx.common,
            TransactionData::Burn(tx) => &tx.common,
            TransactionData::Lease(tx) => &tx.common,
            TransactionData::LeaseCancel(tx) => &tx.common,
            TransactionData::CreateAlias(tx) => &tx.common,
            TransactionData::MassTransfer(tx) => &tx.common,
            TransactionData::Data(tx) => &tx.common,
            TransactionData::SetScript(tx) => &tx.common,
            TransactionData::SponsoredFee(tx) => &tx.common,
            TransactionData::SetAssetScript(tx) => &tx.common,
            TransactionData::InvokeScript(tx) => &tx.common,
        }
    }

    /// Mutable access to the shared fields, for filling defaults.
    pub fn common_mut(&mut self) -> &mut TxCommon {
        match self {
            TransactionData::Issue(tx) => &mut tx.common,
            TransactionData::Transfer(tx) => &mut tx.common,
            TransactionData::Reissue(tx) => &mut tx.common,
            TransactionData::Burn(tx) => &mut tx.common,
            TransactionData::Lease(tx) => &mut tx.common,
            TransactionData::LeaseCancel(tx) => &mut tx.common,
            TransactionData::CreateAlias(tx) => &mut tx.common,
            TransactionData::MassTransfer(tx) => &mut tx.common,
            TransactionData::Data(tx) => &mut tx.common,
            TransactionData::SetScript(tx) => &mut tx.common,
            TransactionData::SponsoredFee(tx) => &mut tx.common,
            TransactionData::SetAssetScript(tx) => &mut tx.common,
            TransactionData::InvokeScript(tx) => &mut tx.common,
        }
    }

    /// Serialize only the payload body (the envelope's `data` field).
    pub fn payload_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            TransactionData::Issue(tx) => serde_json::to_value(tx),
            TransactionData::Transfer(tx) => serde_json::to_value(tx),
            TransactionData::Reissue(tx) => serde_json::to_value(tx),
            TransactionData::Burn(tx) => serde_json::to_value(tx),
            TransactionData::Lease(tx) => serde_json::to_value(tx),
            TransactionData::LeaseCancel(tx) => serde_json::to_value(tx),
            TransactionData::CreateAlias(tx) => serde_json::to_value(tx),
            TransactionData::MassTransfer(tx) => serde_json::to_value(tx),
            TransactionData::Data(tx) => serde_json::to_value(tx),
            TransactionData::SetScript(tx) => serde_json::to_value(tx),
            TransactionData::SponsoredFee(tx) => serde_json::to_value(tx),
            TransactionData::SetAssetScript(tx) => serde_json::to_value(tx),
            TransactionData::InvokeScript(tx) => serde_json::to_value(tx),
        }
    }

    /// Enforce the structural bounds documented for this payload kind.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            TransactionData::Issue(tx) => tx.validate(),
            TransactionData::Transfer(tx) => tx.validate(),
            TransactionData::Reissue(tx) => tx.validate(),
            TransactionData::Burn(tx) => tx.validate(),
            TransactionData::Lease(tx) => tx.validate(),
            TransactionData::LeaseCancel(tx) => tx.validate(),
            TransactionData::CreateAlias(tx) => tx.validate(),
            TransactionData::MassTransfer(tx) => tx.validate(),
            TransactionData::Data(tx) => tx.validate(),
            TransactionData::SetScript(tx) => tx.validate(),
            TransactionData::SponsoredFee(tx) => tx.validate(),
            TransactionData::SetAssetScript(tx) => tx.validate(),
            TransactionData::InvokeScript(tx) => tx.validate(),
        }
    }
}

impl Serialize for TransactionData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let code = self.type_code();
        match self {
            TransactionData::Issue(tx) => EnvelopeRef { code, data: tx }.serialize(serializer),
            TransactionData::Transfer(tx) => EnvelopeRef { code, data: tx }.serialize(serializer),
            TransactionData::Reissue(tx) => EnvelopeRef { code, data: tx }.serialize(serializer),
            TransactionData::Burn(tx) => EnvelopeRef { code, data: tx }.serialize(serializer),
            TransactionData::Lease(tx) => EnvelopeRef { code, data: tx }.serialize(serializer),
            TransactionData::LeaseCancel(tx) => EnvelopeRef { code, data: tx }.serialize(serializer),
            TransactionData::CreateAlias(tx) => EnvelopeRef { code, data: tx }.serialize(serializer),
            TransactionData::MassTransfer(tx) => EnvelopeRef { code, data: tx }.serialize(serializer),
            TransactionData::Data(tx) => EnvelopeRef { code, data: tx }.serialize(serializer),
            TransactionData::SetScript(tx) => EnvelopeRef { code, data: tx }.serialize(serializer),
            TransactionData::SponsoredFee(tx) => EnvelopeRef { code, data: tx }.serialize(serializer),
            TransactionData::SetAssetScript(tx) => {
                EnvelopeRef { code, data: tx }.serialize(serializer)
            }
            TransactionData::InvokeScript(tx) => EnvelopeRef { code, data: tx }.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for TransactionData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let envelope = Envelope::<serde_json::Value>::deserialize(deserializer)?;
        let data = envelope.data;
        let parsed = match envelope.code {
            TYPE_ISSUE => serde_json::from_value(data).map(TransactionData::Issue),
            TYPE_TRANSFER => serde_json::from_value(data).map(TransactionData::Transfer),
            TYPE_REISSUE => serde_json::from_value(data).map(TransactionData::Reissue),
            TYPE_BURN => serde_json::from_value(data).map(TransactionData::Burn),
            TYPE_LEASE => serde_json::from_value(data).map(TransactionData::Lease),
            TYPE_LEASE_CANCEL => serde_json::from_value(data).map(TransactionData::LeaseCancel),
            TYPE_CREATE_ALIAS => serde_json::from_value(data).map(TransactionData::CreateAlias),
            TYPE_MASS_TRANSFER => serde_json::from_value(data).map(TransactionData::MassTransfer),
            TYPE_DATA => serde_json::from_value(data).map(TransactionData::Data),
            TYPE_SET_SCRIPT => serde_json::from_value(data).map(TransactionData::SetScript),
            TYPE_SPONSORED_FEE => serde_json::from_value(data).map(TransactionData::SponsoredFee),
            TYPE_SET_ASSET_SCRIPT => {
                serde_json::from_value(data).map(TransactionData::SetAssetScript)
            }
            TYPE_INVOKE_SCRIPT => serde_json::from_value(data).map(TransactionData::InvokeScript),
            other => {
                return Err(D::Error::custom(format!(
                    "unsupported transaction type {other}"
                )))
            }
        };
        parsed.map_err(D::Error::custom)
    }
}

/// Enforce the package constraints: at most [`PACKAGE_MAX`] transactions,
/// all of kinds listed in [`PACKAGE_ALLOWED_TYPES`].
pub fn validate_package(txs: &[TransactionData]) -> Result<(), ValidationError> {
    if txs.is_empty() {
        return Err(ValidationError::EmptyPackage);
    }
    if txs.len() > PACKAGE_MAX {
        return Err(ValidationError::PackageTooLarge {
            max: PACKAGE_MAX,
            got: txs.len(),
        });
    }
    for tx in txs {
        let code = tx.type_code();
        if !PACKAGE_ALLOWED_TYPES.contains(&code) {
            return Err(ValidationError::PackageTypeNotAllowed { code });
        }
        tx.validate()?;
    }
    Ok(())
}
