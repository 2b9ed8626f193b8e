//! Diesel row structs for the `users` table.
//!
//! Internal to the persistence layer; the domain only ever sees
//! [`crate::domain::User`].

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::{PinCode, User, UserDetails, UserId};

use super::schema::users;

/// Row read from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub user_id: i64,
    pub first_name: String,
    pub surname: String,
    pub address: String,
    pub pin_code: String,
    pub dob: Option<NaiveDate>,
    pub doj: Option<NaiveDate>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(
            UserId::new(row.user_id),
            UserDetails {
                first_name: row.first_name,
                surname: row.surname,
                address: row.address,
                pin_code: PinCode::new(row.pin_code),
                dob: row.dob,
                doj: row.doj,
            },
        )
    }
}

/// Insertable row letting the sequence assign `user_id`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub first_name: &'a str,
    pub surname: &'a str,
    pub address: &'a str,
    pub pin_code: &'a str,
    pub dob: Option<NaiveDate>,
    pub doj: Option<NaiveDate>,
}

impl<'a> From<&'a UserDetails> for NewUserRow<'a> {
    fn from(details: &'a UserDetails) -> Self {
        Self {
            first_name: &details.first_name,
            surname: &details.surname,
            address: &details.address,
            pin_code: details.pin_code.as_str(),
            dob: details.dob,
            doj: details.doj,
        }
    }
}

/// Insertable row with a caller-supplied identifier.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct UserRowWithId<'a> {
    pub user_id: i64,
    #[diesel(embed)]
    pub fields: NewUserRow<'a>,
}

/// Changeset replacing every non-key column.
///
/// `treat_none_as_null` clears dates the client omitted.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct UserChangeset<'a> {
    pub first_name: &'a str,
    pub surname: &'a str,
    pub address: &'a str,
    pub pin_code: &'a str,
    pub dob: Option<NaiveDate>,
    pub doj: Option<NaiveDate>,
}

impl<'a> From<&'a UserDetails> for UserChangeset<'a> {
    fn from(details: &'a UserDetails) -> Self {
        Self {
            first_name: &details.first_name,
            surname: &details.surname,
            address: &details.address,
            pin_code: details.pin_code.as_str(),
            dob: details.dob,
            doj: details.doj,
        }
    }
}
