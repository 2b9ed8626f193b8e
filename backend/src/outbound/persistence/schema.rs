//! Diesel table definitions.
//!
//! Must match `backend/migrations`; regenerate with `diesel print-schema`
//! after changing a migration.

diesel::table! {
    /// Registered users.
    users (user_id) {
        /// Primary key assigned by the `BIGSERIAL` sequence.
        user_id -> Int8,
        first_name -> Varchar,
        surname -> Varchar,
        address -> Varchar,
        /// Postal code stored verbatim.
        pin_code -> Varchar,
        /// Date of birth.
        dob -> Nullable<Date>,
        /// Date of joining.
        doj -> Nullable<Date>,
    }
}
