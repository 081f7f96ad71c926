#![allow(async_fn_in_trait)]

//! Repository contracts.
//!
//! The CRUD surface is declared once, generically, instead of repeated per
//! entity. Role-specific natural-key lookups (cpf, rg, email, phone,
//! member links) are inherent methods on the concrete handles in
//! [`crate::infra`].

use crate::error::RosterError;

/// Uniform contract every entity repository implements.
///
/// `add` and `update` are synchronous staging operations: they enqueue the
/// mutation on the owning manager and perform no I/O. `update` has
/// full-record replace semantics. Lookups hit the backing store; a missing
/// record is `Ok(None)`, never an error. `find_by_id` takes an optional
/// options value solely for its expansion directives (eager loading);
/// `list` applies the full offset / capped-limit / sort / filter contract.
pub trait Repository<E>: Send + Sync {
    type Id;
    type Options;

    fn add(&self, entity: E);
    fn update(&self, entity: E);

    async fn find_by_id(
        &self,
        id: Self::Id,
        opts: Option<&Self::Options>,
    ) -> Result<Option<E>, RosterError>;

    async fn list(&self, opts: &Self::Options) -> Result<Vec<E>, RosterError>;
}

/// Staged removal, for entities that support hard deletes.
///
/// Account repositories deliberately do not implement this: accounts are
/// deactivated, never removed.
pub trait Delete<E> {
    fn delete(&self, entity: E);
}
