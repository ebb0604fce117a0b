//! Repository façade over a [`RemoteClient`].
//!
//! Every method issues exactly one remote call, surfaces backend failures
//! unchanged, and decodes returned rows through the entity's [`Record`]
//! mapping.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::db::models::{
    AddOn, Asset, Card, Client, ClientFeedback, Contract, FinancialPocket, Lead, Notification,
    Package, Profile, ProfilePatch, Project, PromoCode, RewardLedgerEntry, SocialMediaPost, Sop,
    TeamMember, TeamPaymentRecord, TeamProjectPayment, Transaction, User,
};
use crate::db::{DbError, DbResult};
use crate::remote::{RemoteClient, RemoteRequest};

const ID_COLUMN: &str = "id";
const CREATED_AT_COLUMN: &str = "created_at";

/// Mapping between a domain entity and its backend table.
pub trait Record: Serialize + Send + Sized {
    /// Backend table name.
    const TABLE: &'static str;
    /// Human-readable entity name used in errors.
    const NAME: &'static str;

    /// Row as returned by the backend.
    type Row: DeserializeOwned;
    /// Creation draft.
    type New: DeserializeOwned + Sync;
    /// Partial update.
    type Patch: DeserializeOwned + Sync;
    /// Insert/update payload.
    type Write: Serialize;

    fn id(&self) -> &str;

    fn to_app(row: Self::Row) -> Self;

    fn to_wire(new: &Self::New) -> Self::Write;

    fn patch_to_wire(patch: &Self::Patch) -> Self::Write;
}

/// CRUD access to one entity's table.
pub struct Repository<'a, C, E> {
    client: &'a C,
    _entity: PhantomData<fn() -> E>,
}

impl<'a, C: RemoteClient, E: Record> Repository<'a, C, E> {
    pub fn new(client: &'a C) -> Self {
        Self {
            client,
            _entity: PhantomData,
        }
    }

    /// All rows, newest first.
    pub async fn list(&self) -> DbResult<Vec<E>> {
        debug!(table = E::TABLE, "list");
        let request = RemoteRequest::select(E::TABLE).order(CREATED_AT_COLUMN, false);
        let rows = self.client.execute(request).await?;
        rows.into_iter().map(decode::<E>).collect()
    }

    /// The row with the given id. A missing row is a `PGRST116` backend error.
    pub async fn get(&self, id: &str) -> DbResult<E> {
        debug!(table = E::TABLE, id, "get");
        let request = RemoteRequest::select(E::TABLE).eq(ID_COLUMN, id).single();
        single::<E>(self.client.execute(request).await?)
    }

    /// Insert a draft and return the stored entity with its assigned id.
    pub async fn create(&self, new: &E::New) -> DbResult<E> {
        debug!(table = E::TABLE, "create");
        let payload = encode::<E>(&E::to_wire(new))?;
        let request = RemoteRequest::insert(E::TABLE, payload).single();
        single::<E>(self.client.execute(request).await?)
    }

    /// Apply a partial update; only the fields set in `patch` are sent.
    pub async fn update(&self, id: &str, patch: &E::Patch) -> DbResult<E> {
        debug!(table = E::TABLE, id, "update");
        let payload = encode::<E>(&E::patch_to_wire(patch))?;
        let request = RemoteRequest::update(E::TABLE, payload)
            .eq(ID_COLUMN, id)
            .single();
        single::<E>(self.client.execute(request).await?)
    }

    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(table = E::TABLE, id, "delete");
        let request = RemoteRequest::delete(E::TABLE).eq(ID_COLUMN, id);
        self.client.execute(request).await?;
        Ok(())
    }
}

fn encode<E: Record>(write: &E::Write) -> DbResult<Value> {
    serde_json::to_value(write).map_err(|e| DbError::Encode {
        entity: E::NAME,
        message: e.to_string(),
    })
}

fn decode<E: Record>(row: Value) -> DbResult<E> {
    serde_json::from_value::<E::Row>(row)
        .map(E::to_app)
        .map_err(|e| DbError::InvalidRow {
            entity: E::NAME,
            message: e.to_string(),
        })
}

fn single<E: Record>(rows: Vec<Value>) -> DbResult<E> {
    let count = rows.len();
    match rows.into_iter().next() {
        Some(row) if count == 1 => decode::<E>(row),
        _ => Err(DbError::InvalidRow {
            entity: E::NAME,
            message: format!("expected exactly one row, got {}", count),
        }),
    }
}

/// Entry point to the data-access layer.
///
/// Owns the injected remote client and hands out per-entity repositories.
#[derive(Debug, Clone)]
pub struct DataService<C> {
    client: C,
}

impl<C: RemoteClient> DataService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn repository<E: Record>(&self) -> Repository<'_, C, E> {
        Repository::new(&self.client)
    }

    pub fn clients(&self) -> Repository<'_, C, Client> {
        self.repository()
    }

    pub fn leads(&self) -> Repository<'_, C, Lead> {
        self.repository()
    }

    pub fn packages(&self) -> Repository<'_, C, Package> {
        self.repository()
    }

    pub fn add_ons(&self) -> Repository<'_, C, AddOn> {
        self.repository()
    }

    pub fn projects(&self) -> Repository<'_, C, Project> {
        self.repository()
    }

    pub fn team_members(&self) -> Repository<'_, C, TeamMember> {
        self.repository()
    }

    pub fn transactions(&self) -> Repository<'_, C, Transaction> {
        self.repository()
    }

    pub fn financial_pockets(&self) -> Repository<'_, C, FinancialPocket> {
        self.repository()
    }

    pub fn cards(&self) -> Repository<'_, C, Card> {
        self.repository()
    }

    pub fn profiles(&self) -> Repository<'_, C, Profile> {
        self.repository()
    }

    pub fn users(&self) -> Repository<'_, C, User> {
        self.repository()
    }

    pub fn assets(&self) -> Repository<'_, C, Asset> {
        self.repository()
    }

    pub fn promo_codes(&self) -> Repository<'_, C, PromoCode> {
        self.repository()
    }

    pub fn sops(&self) -> Repository<'_, C, Sop> {
        self.repository()
    }

    pub fn notifications(&self) -> Repository<'_, C, Notification> {
        self.repository()
    }

    pub fn contracts(&self) -> Repository<'_, C, Contract> {
        self.repository()
    }

    pub fn client_feedback(&self) -> Repository<'_, C, ClientFeedback> {
        self.repository()
    }

    pub fn social_media_posts(&self) -> Repository<'_, C, SocialMediaPost> {
        self.repository()
    }

    pub fn team_project_payments(&self) -> Repository<'_, C, TeamProjectPayment> {
        self.repository()
    }

    pub fn team_payment_records(&self) -> Repository<'_, C, TeamPaymentRecord> {
        self.repository()
    }

    pub fn reward_ledger_entries(&self) -> Repository<'_, C, RewardLedgerEntry> {
        self.repository()
    }

    /// The business profile, or `None` when the table is empty.
    pub async fn profile(&self) -> DbResult<Option<Profile>> {
        debug!(table = Profile::TABLE, "profile");
        let request = RemoteRequest::select(Profile::TABLE).single();
        match self.client.execute(request).await {
            Ok(rows) => single::<Profile>(rows).map(Some),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Update the business profile. The table holds a single row, so no
    /// filter is applied.
    pub async fn update_profile(&self, patch: &ProfilePatch) -> DbResult<Profile> {
        debug!(table = Profile::TABLE, "update_profile");
        let payload = encode::<Profile>(&Profile::patch_to_wire(patch))?;
        let request = RemoteRequest::update(Profile::TABLE, payload).single();
        single::<Profile>(self.client.execute(request).await?)
    }
}
