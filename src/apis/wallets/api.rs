use crate::{
    apis::wallets::{
        Wallet, WalletInput, WalletListInput, WalletTransaction, WalletTransactionInput,
        WalletTransactionListInput,
    },
    context::Context,
    engine::{ClientRequest, Engine},
    envelope::{List, Page, Single, Wrapped},
    query::ToQuery,
    Error,
};
use std::sync::Arc;
use uuid::Uuid;

/// Lago Wallets APIs client.
#[derive(Clone, Debug)]
pub struct WalletsApi {
    engine: Arc<Engine>,
}

impl WalletsApi {
    pub(crate) fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Creates a new wallet for a customer.
    #[tracing::instrument(name = "Create Wallet", skip(self, ctx, input))]
    pub async fn create(&self, ctx: &Context, input: &WalletInput) -> Result<Wallet, Error> {
        let res: Single<_> = self
            .engine
            .post(
                ctx,
                ClientRequest::new("wallets").with_body(&Wrapped::new("wallet", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Gets a wallet by its Lago id.
    #[tracing::instrument(name = "Get Wallet", skip(self, ctx))]
    pub async fn get(&self, ctx: &Context, lago_id: &Uuid) -> Result<Wallet, Error> {
        let res: Single<_> = self
            .engine
            .get(ctx, ClientRequest::new(format!("wallets/{}", lago_id)))
            .await?;

        Ok(res.into_inner())
    }

    /// Updates the wallet identified by `lago_id`.
    #[tracing::instrument(name = "Update Wallet", skip(self, ctx, input))]
    pub async fn update(
        &self,
        ctx: &Context,
        lago_id: &Uuid,
        input: &WalletInput,
    ) -> Result<Wallet, Error> {
        let res: Single<_> = self
            .engine
            .put(
                ctx,
                ClientRequest::new(format!("wallets/{}", lago_id))
                    .with_body(&Wrapped::new("wallet", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Terminates a wallet. Its remaining credits are lost.
    #[tracing::instrument(name = "Terminate Wallet", skip(self, ctx))]
    pub async fn terminate(&self, ctx: &Context, lago_id: &Uuid) -> Result<Wallet, Error> {
        let res: Single<_> = self
            .engine
            .delete(ctx, ClientRequest::new(format!("wallets/{}", lago_id)))
            .await?;

        Ok(res.into_inner())
    }

    /// Lists the wallets of a customer.
    #[tracing::instrument(
        name = "List Wallets",
        skip(self, ctx, input),
        fields(external_customer_id = %input.external_customer_id)
    )]
    pub async fn list(&self, ctx: &Context, input: &WalletListInput) -> Result<Page<Wallet>, Error> {
        self.engine
            .get(
                ctx,
                ClientRequest::new("wallets").with_query(input.to_query()),
            )
            .await
    }
}

/// Lago Wallet Transactions APIs client.
#[derive(Clone, Debug)]
pub struct WalletTransactionsApi {
    engine: Arc<Engine>,
}

impl WalletTransactionsApi {
    pub(crate) fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Tops up or voids credits of a wallet.
    ///
    /// Paid, granted and voided credits each produce their own transaction,
    /// so all of them are returned.
    #[tracing::instrument(
        name = "Create Wallet Transaction",
        skip(self, ctx, input),
        fields(wallet_id = %input.wallet_id)
    )]
    pub async fn create(
        &self,
        ctx: &Context,
        input: &WalletTransactionInput,
    ) -> Result<Vec<WalletTransaction>, Error> {
        let res: List<_> = self
            .engine
            .post(
                ctx,
                ClientRequest::new("wallet_transactions")
                    .with_body(&Wrapped::new("wallet_transaction", input)),
            )
            .await?;

        Ok(res.into_inner())
    }

    /// Lists the transactions of a wallet.
    #[tracing::instrument(name = "List Wallet Transactions", skip(self, ctx, input))]
    pub async fn list(
        &self,
        ctx: &Context,
        wallet_id: &Uuid,
        input: &WalletTransactionListInput,
    ) -> Result<Page<WalletTransaction>, Error> {
        self.engine
            .get(
                ctx,
                ClientRequest::new(format!("wallets/{}/wallet_transactions", wallet_id))
                    .with_query(input.to_query()),
            )
            .await
    }
}
