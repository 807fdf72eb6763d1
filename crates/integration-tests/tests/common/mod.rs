//! Shared fixture: a migrated SQLite file database with the application services wired on top.

#![allow(dead_code)]

use marketplace_api_rpc::RpcHandler;
use marketplace_core::application::{
    ContractQueries, DepositPolicy, DepositPolicyEnforcer, PaymentTransactionCoordinator,
    RepositoryProfileDirectory, UnpaidJobAggregator,
};
use marketplace_core::domain::{
    Contract, ContractStatus, Job, Money, Profile, ProfileRole,
};
use marketplace_core::port::time_provider::FixedTimeProvider;
use marketplace_core::port::{ContractRepository, JobRepository, ProfileRepository};
use marketplace_infra_sqlite::{create_pool, run_migrations, SqliteMarketplaceRepository};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const NOW_MS: i64 = 1_700_000_000_000;

static DB_SEQ: AtomicUsize = AtomicUsize::new(0);

pub struct Marketplace {
    pub repo: Arc<SqliteMarketplaceRepository>,
    pub clock: Arc<FixedTimeProvider>,
    pub payments: Arc<PaymentTransactionCoordinator>,
    pub deposit_policy: DepositPolicyEnforcer,
    pub unpaid_jobs: UnpaidJobAggregator,
    db_path: PathBuf,
}

impl Marketplace {
    pub async fn new() -> Self {
        let db_path = std::env::temp_dir().join(format!(
            "marketplace-it-{}-{}-{}.db",
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default(),
            DB_SEQ.fetch_add(1, Ordering::SeqCst)
        ));

        let pool = create_pool(db_path.to_str().unwrap()).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let repo = Arc::new(SqliteMarketplaceRepository::new(pool));
        let clock = Arc::new(FixedTimeProvider::new(NOW_MS));

        Self {
            payments: Arc::new(PaymentTransactionCoordinator::new(
                repo.clone(),
                clock.clone(),
                DepositPolicy::default(),
            )),
            deposit_policy: DepositPolicyEnforcer::new(repo.clone(), DepositPolicy::default()),
            unpaid_jobs: UnpaidJobAggregator::new(repo.clone()),
            repo,
            clock,
            db_path,
        }
    }

    pub fn rpc_handler(&self) -> RpcHandler {
        RpcHandler::new(
            Arc::new(RepositoryProfileDirectory::new(self.repo.clone())),
            ContractQueries::new(self.repo.clone()),
            UnpaidJobAggregator::new(self.repo.clone()),
            DepositPolicyEnforcer::new(self.repo.clone(), DepositPolicy::default()),
            PaymentTransactionCoordinator::new(
                self.repo.clone(),
                self.clock.clone(),
                DepositPolicy::default(),
            ),
        )
    }

    pub async fn client(&self, id: i64, balance_cents: i64) {
        self.profile(id, ProfileRole::Client, balance_cents).await;
    }

    pub async fn contractor(&self, id: i64, balance_cents: i64) {
        self.profile(id, ProfileRole::Contractor, balance_cents).await;
    }

    async fn profile(&self, id: i64, role: ProfileRole, balance_cents: i64) {
        let profile = Profile::new(
            id,
            format!("First{}", id),
            format!("Last{}", id),
            "Tester",
            role,
            Money::from_cents(balance_cents),
        );
        ProfileRepository::insert(self.repo.as_ref(), &profile)
            .await
            .unwrap();
    }

    pub async fn contract(&self, id: i64, client_id: i64, contractor_id: i64) {
        let contract = Contract::new(
            id,
            format!("terms {}", id),
            ContractStatus::InProgress,
            client_id,
            contractor_id,
        );
        ContractRepository::insert(self.repo.as_ref(), &contract)
            .await
            .unwrap();
    }

    pub async fn job(&self, id: i64, contract_id: i64, price_cents: i64) {
        let job = Job::new(
            id,
            contract_id,
            format!("work item {}", id),
            Money::from_cents(price_cents),
        )
        .unwrap();
        JobRepository::insert(self.repo.as_ref(), &job).await.unwrap();
    }

    pub async fn balance(&self, id: i64) -> Money {
        ProfileRepository::find_by_id(self.repo.as_ref(), id)
            .await
            .unwrap()
            .expect("profile exists")
            .balance
    }

    pub async fn stored_job(&self, id: i64) -> Job {
        JobRepository::find_by_id(self.repo.as_ref(), id)
            .await
            .unwrap()
            .expect("job exists")
    }
}

impl Drop for Marketplace {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let mut path = self.db_path.clone().into_os_string();
            path.push(suffix);
            let _ = std::fs::remove_file(path);
        }
    }
}
