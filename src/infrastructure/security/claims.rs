// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedAdmin,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::admin::AdminId;
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedAdmin> {
    let mut ctx = ClaimsContext::default();
    for fact in facts {
        ctx.apply(&fact.predicate);
    }
    ctx.into_admin()
}

#[derive(Default)]
struct ClaimsContext {
    admin_id: Option<i64>,
    email: Option<String>,
    session_id: Option<String>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
}

fn date(term: Option<&Term>) -> Option<SystemTime> {
    match term {
        Some(Term::Date(seconds)) => Some(UNIX_EPOCH + Duration::from_secs(*seconds)),
        _ => None,
    }
}

impl ClaimsContext {
    fn apply(&mut self, predicate: &Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("admin", [Term::Integer(id), Term::Str(email)]) => {
                self.admin_id = Some(*id);
                self.email = Some(email.clone());
            }
            ("session", [Term::Str(sid)]) => self.session_id = Some(sid.clone()),
            ("issued_at", terms) => self.issued_at = date(terms.first()),
            ("expires_at", terms) => self.expires_at = date(terms.first()),
            _ => {}
        }
    }

    fn into_admin(self) -> ApplicationResult<AuthenticatedAdmin> {
        let missing = |claim: &str| ApplicationError::unauthorized(format!("missing {claim}"));
        let id = self.admin_id.ok_or_else(|| missing("admin id"))?;
        Ok(AuthenticatedAdmin {
            id: AdminId::new(id)?,
            email: self.email.ok_or_else(|| missing("email"))?,
            session_id: self.session_id.ok_or_else(|| missing("session"))?,
            issued_at: DateTime::<Utc>::from(self.issued_at.ok_or_else(|| missing("issued_at"))?),
            expires_at: DateTime::<Utc>::from(self.expires_at.ok_or_else(|| missing("expires_at"))?),
        })
    }
}
