// SQLite row representations

use marketplace_core::domain::{Contract, Job, Money, Profile};
use marketplace_core::error::Result;

/// Statements shared by the pooled repository and the ledger transaction
pub(crate) mod sql {
    pub(crate) const FIND_PROFILE: &str = r#"
        SELECT id, first_name, last_name, profession, role, balance
        FROM profiles
        WHERE id = ?
    "#;

    pub(crate) const FIND_UNPAID_JOB_FOR_CLIENT: &str = r#"
        SELECT j.id, j.contract_id, j.description, j.price, j.paid, j.payment_date
        FROM jobs j
        JOIN contracts c ON c.id = j.contract_id
        WHERE j.id = ? AND c.client_id = ? AND j.paid = 0
    "#;

    pub(crate) const LIST_UNPAID_FOR_PROFILE: &str = r#"
        SELECT j.id, j.contract_id, j.description, j.price, j.paid, j.payment_date
        FROM jobs j
        JOIN contracts c ON c.id = j.contract_id
        WHERE j.paid = 0 AND (c.client_id = ?1 OR c.contractor_id = ?1)
        ORDER BY j.id ASC
    "#;

    pub(crate) const SUM_UNPAID_FOR_CONTRACTOR: &str = r#"
        SELECT COALESCE(SUM(j.price), 0)
        FROM jobs j
        JOIN contracts c ON c.id = j.contract_id
        WHERE j.paid = 0 AND c.contractor_id = ?
    "#;
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ProfileRow {
    id: i64,
    first_name: String,
    last_name: String,
    profession: String,
    role: String,
    balance: i64, // cents
}

impl ProfileRow {
    pub(crate) fn into_profile(self) -> Result<Profile> {
        Ok(Profile {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            profession: self.profession,
            role: self.role.parse()?,
            balance: Money::from_cents(self.balance),
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ContractRow {
    id: i64,
    terms: String,
    status: String,
    client_id: i64,
    contractor_id: i64,
}

impl ContractRow {
    pub(crate) fn into_contract(self) -> Result<Contract> {
        Ok(Contract {
            id: self.id,
            terms: self.terms,
            status: self.status.parse()?,
            client_id: self.client_id,
            contractor_id: self.contractor_id,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct JobRow {
    id: i64,
    contract_id: i64,
    description: String,
    price: i64, // cents
    paid: bool, // SQLite boolean as integer
    payment_date: Option<i64>,
}

impl JobRow {
    pub(crate) fn into_job(self) -> Job {
        Job {
            id: self.id,
            contract_id: self.contract_id,
            description: self.description,
            price: Money::from_cents(self.price),
            paid: self.paid,
            payment_date: self.payment_date,
        }
    }
}
