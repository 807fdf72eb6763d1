//! Coordinator tests against an in-memory ledger with failure injection

use super::PaymentTransactionCoordinator;
use crate::application::DepositPolicy;
use crate::domain::{
    Contract, ContractId, ContractStatus, DomainError, Job, JobId, Money, Profile, ProfileId,
    ProfileRole,
};
use crate::error::{AppError, Result};
use crate::port::time_provider::FixedTimeProvider;
use crate::port::{LedgerTransaction, Transaction, TransactionalRepository};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

const NOW: i64 = 1_700_000_000_000;

const CLIENT: ProfileId = 1;
const CONTRACTOR: ProfileId = 2;
const OTHER_CLIENT: ProfileId = 3;

#[derive(Clone, Default)]
struct LedgerState {
    profiles: HashMap<ProfileId, Profile>,
    contracts: HashMap<ContractId, Contract>,
    jobs: HashMap<JobId, Job>,
}

#[derive(Default)]
struct Counters {
    commits: AtomicUsize,
    rollbacks: AtomicUsize,
}

/// Transactions work on a staged copy; commit publishes it
struct FakeLedger {
    state: Arc<Mutex<LedgerState>>,
    counters: Arc<Counters>,
    fail_debit: bool,
}

struct FakeTransaction {
    shared: Arc<Mutex<LedgerState>>,
    staged: LedgerState,
    counters: Arc<Counters>,
    fail_debit: bool,
}

#[async_trait]
impl TransactionalRepository for FakeLedger {
    async fn begin_transaction(&self) -> Result<Box<dyn LedgerTransaction>> {
        let staged = self.state.lock().unwrap().clone();
        Ok(Box::new(FakeTransaction {
            shared: Arc::clone(&self.state),
            staged,
            counters: Arc::clone(&self.counters),
            fail_debit: self.fail_debit,
        }))
    }
}

#[async_trait]
impl Transaction for FakeTransaction {
    async fn commit(self: Box<Self>) -> Result<()> {
        let FakeTransaction {
            shared,
            staged,
            counters,
            ..
        } = *self;
        *shared.lock().unwrap() = staged;
        counters.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<()> {
        self.counters.rollbacks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl LedgerTransaction for FakeTransaction {
    async fn find_profile(&mut self, id: ProfileId) -> Result<Option<Profile>> {
        Ok(self.staged.profiles.get(&id).cloned())
    }

    async fn find_unpaid_job_for_client(
        &mut self,
        job_id: JobId,
        client_id: ProfileId,
    ) -> Result<Option<Job>> {
        let job = self.staged.jobs.get(&job_id).filter(|job| !job.paid);
        Ok(job
            .filter(|job| {
                self.staged
                    .contracts
                    .get(&job.contract_id)
                    .is_some_and(|c| c.client_id == client_id)
            })
            .cloned())
    }

    async fn sum_unpaid_for_contractor(&mut self, contractor_id: ProfileId) -> Result<Money> {
        let mut total = Money::ZERO;
        for job in self.staged.jobs.values().filter(|job| !job.paid) {
            let owned = self
                .staged
                .contracts
                .get(&job.contract_id)
                .is_some_and(|c| c.contractor_id == contractor_id);
            if owned {
                total = total.checked_add(job.price)?;
            }
        }
        Ok(total)
    }

    async fn mark_job_paid(&mut self, job_id: JobId, paid_at: i64) -> Result<bool> {
        match self.staged.jobs.get_mut(&job_id) {
            Some(job) if !job.paid => {
                job.paid = true;
                job.payment_date = Some(paid_at);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn credit(&mut self, profile_id: ProfileId, amount: Money) -> Result<bool> {
        match self.staged.profiles.get_mut(&profile_id) {
            Some(profile) => match profile.balance.checked_add(amount) {
                Ok(balance) => {
                    profile.balance = balance;
                    Ok(true)
                }
                Err(_) => Ok(false),
            },
            None => Ok(false),
        }
    }

    async fn debit(&mut self, profile_id: ProfileId, amount: Money) -> Result<bool> {
        if self.fail_debit {
            return Err(AppError::Database("disk I/O error".to_string()));
        }
        match self.staged.profiles.get_mut(&profile_id) {
            Some(profile) if profile.balance >= amount => {
                profile.balance = profile.balance.checked_sub(amount)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

fn profile(id: ProfileId, role: ProfileRole, balance: i64) -> Profile {
    Profile::new(id, "First", "Last", "Tester", role, Money::from_cents(balance))
}

/// Client 1 and contractor 2 share contract 1 with unpaid job 1 priced 100.00.
/// Client 3 owns contract 2 with unpaid job 2.
fn seeded_state(client_balance: i64) -> LedgerState {
    let mut state = LedgerState::default();
    state.profiles.insert(CLIENT, profile(CLIENT, ProfileRole::Client, client_balance));
    state.profiles.insert(CONTRACTOR, profile(CONTRACTOR, ProfileRole::Contractor, 6_400));
    state.profiles.insert(OTHER_CLIENT, profile(OTHER_CLIENT, ProfileRole::Client, 100_000));
    state.contracts.insert(1, Contract::new(1, "terms", ContractStatus::InProgress, CLIENT, CONTRACTOR));
    state.contracts.insert(2, Contract::new(2, "terms", ContractStatus::InProgress, OTHER_CLIENT, CONTRACTOR));
    state.jobs.insert(1, Job::new(1, 1, "work", Money::from_cents(10_000)).unwrap());
    state.jobs.insert(2, Job::new(2, 2, "work", Money::from_cents(20_000)).unwrap());
    state
}

struct Harness {
    state: Arc<Mutex<LedgerState>>,
    counters: Arc<Counters>,
    coordinator: PaymentTransactionCoordinator,
}

fn harness(state: LedgerState, fail_debit: bool) -> Harness {
    let state = Arc::new(Mutex::new(state));
    let counters = Arc::new(Counters::default());
    let ledger = Arc::new(FakeLedger {
        state: Arc::clone(&state),
        counters: Arc::clone(&counters),
        fail_debit,
    });
    let coordinator = PaymentTransactionCoordinator::new(
        ledger,
        Arc::new(FixedTimeProvider::new(NOW)),
        DepositPolicy::default(),
    );
    Harness {
        state,
        counters,
        coordinator,
    }
}

impl Harness {
    fn balance(&self, id: ProfileId) -> Money {
        self.state.lock().unwrap().profiles[&id].balance
    }

    fn job(&self, id: JobId) -> Job {
        self.state.lock().unwrap().jobs[&id].clone()
    }

    fn commits(&self) -> usize {
        self.counters.commits.load(Ordering::SeqCst)
    }

    fn rollbacks(&self) -> usize {
        self.counters.rollbacks.load(Ordering::SeqCst)
    }
}

#[tokio::test]
async fn test_pay_job_debits_payer_and_marks_paid() {
    let h = harness(seeded_state(15_000), false);

    let job = h.coordinator.pay_job(1, CLIENT).await.unwrap();

    assert!(job.paid);
    assert_eq!(job.payment_date, Some(NOW));
    assert_eq!(h.balance(CLIENT), Money::from_cents(5_000));
    assert_eq!(h.job(1).payment_date, Some(NOW));
    // Debit only: the contractor is not credited
    assert_eq!(h.balance(CONTRACTOR), Money::from_cents(6_400));
    assert_eq!(h.commits(), 1);
}

#[tokio::test]
async fn test_pay_job_insufficient_funds_changes_nothing() {
    let h = harness(seeded_state(5_000), false);

    let err = h.coordinator.pay_job(1, CLIENT).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::InsufficientFunds { required, available }
            if required == Money::from_cents(10_000) && available == Money::from_cents(5_000)
    ));
    assert_eq!(h.balance(CLIENT), Money::from_cents(5_000));
    assert!(!h.job(1).paid);
    assert_eq!((h.commits(), h.rollbacks()), (0, 1));
}

#[tokio::test]
async fn test_pay_job_for_another_clients_job_is_not_found() {
    let h = harness(seeded_state(15_000), false);

    let err = h.coordinator.pay_job(2, CLIENT).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = h.coordinator.pay_job(99, CLIENT).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_second_payment_is_not_found() {
    let h = harness(seeded_state(30_000), false);

    h.coordinator.pay_job(1, CLIENT).await.unwrap();
    let err = h.coordinator.pay_job(1, CLIENT).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(h.balance(CLIENT), Money::from_cents(20_000));
}

#[tokio::test]
async fn test_pay_job_storage_failure_rolls_back_paid_flag() {
    let h = harness(seeded_state(15_000), true);

    let err = h.coordinator.pay_job(1, CLIENT).await.unwrap_err();

    assert!(matches!(err, AppError::TransactionFailure(_)));
    let job = h.job(1);
    assert!(!job.paid);
    assert_eq!(job.payment_date, None);
    assert_eq!(h.balance(CLIENT), Money::from_cents(15_000));
    assert_eq!((h.commits(), h.rollbacks()), (0, 1));
}

#[tokio::test]
async fn test_deposit_moves_funds_and_returns_depositor() {
    // Contractor 2 has 300.00 outstanding across both contracts, cap 75.00
    let h = harness(seeded_state(15_000), false);

    let depositor = h
        .coordinator
        .deposit_to(CLIENT, CONTRACTOR, Money::from_cents(2_400))
        .await
        .unwrap();

    assert_eq!(depositor.id, CONTRACTOR);
    assert_eq!(depositor.balance, Money::from_cents(4_000));
    assert_eq!(h.balance(CONTRACTOR), Money::from_cents(4_000));
    assert_eq!(h.balance(CLIENT), Money::from_cents(17_400));
}

#[tokio::test]
async fn test_deposit_over_cap_rejected() {
    let h = harness(seeded_state(15_000), false);

    let err = h
        .coordinator
        .deposit_to(CLIENT, CONTRACTOR, Money::from_cents(7_501))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::DepositCapExceeded { allowed, .. } if allowed == Money::from_cents(7_500)
    ));
    assert_eq!(h.balance(CONTRACTOR), Money::from_cents(6_400));
}

#[tokio::test]
async fn test_deposit_without_outstanding_work_rejected() {
    // Client 1 is never a contractor, so its cap is zero
    let h = harness(seeded_state(15_000), false);

    let err = h
        .coordinator
        .deposit_to(CONTRACTOR, CLIENT, Money::from_cents(1))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DepositCapExceeded { allowed, .. } if allowed == Money::ZERO));
}

#[tokio::test]
async fn test_deposit_to_unknown_receiver_not_found() {
    let h = harness(seeded_state(15_000), false);

    let err = h
        .coordinator
        .deposit_to(404, CONTRACTOR, Money::from_cents(100))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(h.balance(CONTRACTOR), Money::from_cents(6_400));
}

#[tokio::test]
async fn test_deposit_beyond_depositor_balance_rejected() {
    let mut state = seeded_state(15_000);
    state.profiles.insert(CONTRACTOR, profile(CONTRACTOR, ProfileRole::Contractor, 1_000));
    let h = harness(state, false);

    let err = h
        .coordinator
        .deposit_to(CLIENT, CONTRACTOR, Money::from_cents(5_000))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InsufficientFunds { .. }));
    assert_eq!(h.balance(CLIENT), Money::from_cents(15_000));
}

#[tokio::test]
async fn test_deposit_storage_failure_leaves_both_balances() {
    let h = harness(seeded_state(15_000), true);

    let err = h
        .coordinator
        .deposit_to(CLIENT, CONTRACTOR, Money::from_cents(2_400))
        .await
        .unwrap_err();

    // Credit was applied before the failing debit and must not survive
    assert!(matches!(err, AppError::TransactionFailure(_)));
    assert_eq!(h.balance(CLIENT), Money::from_cents(15_000));
    assert_eq!(h.balance(CONTRACTOR), Money::from_cents(6_400));
    assert_eq!(h.rollbacks(), 1);
}

#[tokio::test]
async fn test_deposit_overflowing_receiver_rolls_back() {
    let mut state = seeded_state(15_000);
    state
        .profiles
        .insert(CLIENT, profile(CLIENT, ProfileRole::Client, i64::MAX - 10));
    let h = harness(state, false);

    let err = h
        .coordinator
        .deposit_to(CLIENT, CONTRACTOR, Money::from_cents(100))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Domain(DomainError::Overflow)));
    assert_eq!(h.balance(CLIENT), Money::from_cents(i64::MAX - 10));
    assert_eq!(h.balance(CONTRACTOR), Money::from_cents(6_400));
    assert_eq!((h.commits(), h.rollbacks()), (0, 1));
}
